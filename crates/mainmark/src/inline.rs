//! Inline-level rendering.
//!
//! Text is emitted verbatim. No Markdown escaping is applied, since the
//! author's characters are kept as written.

use crate::node::{Element, Node};

/// Render a node and its descendants as an inline Markdown fragment.
///
/// Total: unknown tags fall back to the concatenation of their children.
pub fn render_inline(node: &Node) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Element(element) => render_inline_element(element),
    }
}

/// Render an element as an inline Markdown fragment.
pub fn render_inline_element(element: &Element) -> String {
    match element.tag.as_str() {
        "strong" | "b" => format!("**{}**", render_children(element)),
        "em" | "i" => format!("*{}*", render_children(element)),
        "code" => format!("`{}`", element.text_content().trim()),
        "a" => render_link(element),
        "br" => "\n".to_string(),
        _ => render_children(element),
    }
}

/// Concatenate the inline rendering of every child
pub fn render_children(element: &Element) -> String {
    element.children().map(render_inline).collect()
}

fn render_link(element: &Element) -> String {
    let href = element.attr("href").unwrap_or_default().trim();
    let text = render_children(element);
    let text = match text.trim() {
        "" if href.is_empty() => "link",
        "" => href,
        trimmed => trimmed,
    };

    if href.is_empty() {
        text.to_string()
    } else {
        format!("[{}]({})", text, href)
    }
}
