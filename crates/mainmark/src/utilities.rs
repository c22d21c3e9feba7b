//! Utility functions shared by the block renderer and the document assembler.

use once_cell::sync::Lazy;
use regex::Regex;

/// Indentation for one list nesting level
pub const INDENT_UNIT: &str = "    ";

/// Leading spaces/tabs of a line that has other content
static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[^ \t\n]").expect("valid leading whitespace regex"));

/// Lines holding only spaces/tabs
static WHITESPACE_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]+$").expect("valid whitespace-only regex"));

/// Indentation prefix for a list nesting level
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Join rendered blocks with a single blank line between them.
///
/// Empty and whitespace-only pieces are dropped, and each piece's own
/// trailing newlines are removed first, so nested empty blocks never stack
/// blank lines. A non-empty result ends with exactly one newline.
pub fn join_blocks<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = pieces
        .into_iter()
        .filter(|piece| !piece.as_ref().trim().is_empty())
        .map(|piece| piece.as_ref().trim_end_matches('\n').to_string())
        .collect();

    if kept.is_empty() {
        String::new()
    } else {
        format!("{}\n", kept.join("\n\n"))
    }
}

/// Remove the leading whitespace common to every non-blank line.
///
/// Whitespace-only lines are emptied and ignored when computing the margin.
/// Ragged indentation is kept: only the shared prefix is removed.
pub fn dedent(text: &str) -> String {
    let text = WHITESPACE_ONLY.replace_all(text, "");

    let mut margin: Option<&str> = None;
    for caps in LEADING_WHITESPACE.captures_iter(&text) {
        let leading = caps.get(1).map_or("", |m| m.as_str());
        margin = Some(match margin {
            None => leading,
            Some(current) => common_prefix(current, leading),
        });
        if margin == Some("") {
            break;
        }
    }

    match margin {
        Some(margin) if !margin.is_empty() => text
            .split('\n')
            .map(|line| line.strip_prefix(margin).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => text.to_string(),
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
