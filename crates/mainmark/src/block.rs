//! Block-level rendering.
//!
//! Every renderer returns an owned string, possibly empty. Headings,
//! paragraphs, code blocks and containers end with one newline; lists and
//! tables end with a blank line as their end marker. Callers combine pieces
//! with [`join_blocks`], which drops empty ones.

use crate::inline::{render_inline, render_inline_element};
use crate::node::{Element, Node};
use crate::utilities::{indent, join_blocks};

/// Code fence for preformatted blocks
const FENCE: &str = "```";

/// Render a block-level element at the given list nesting level.
///
/// Never fails: unknown tags are treated as generic containers.
pub fn render_block(element: &Element, indent_level: usize) -> String {
    match element.tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => render_heading(element),
        "p" => render_paragraph(element),
        "ul" => render_list(element, false, indent_level),
        "ol" => render_list(element, true, indent_level),
        "table" => render_table(element),
        "pre" => render_pre(element),
        _ => render_container(element, indent_level),
    }
}

fn render_heading(element: &Element) -> String {
    let level = element.tag[1..].parse::<usize>().unwrap_or(1);
    format!(
        "{} {}\n",
        "#".repeat(level),
        render_inline_element(element).trim()
    )
}

fn render_paragraph(element: &Element) -> String {
    let text = render_inline_element(element);
    let text = text.trim();
    if text.is_empty() {
        String::new()
    } else {
        format!("{}\n", text)
    }
}

fn render_list(element: &Element, ordered: bool, indent_level: usize) -> String {
    let prefix = indent(indent_level);
    let mut output = String::new();

    // Only direct <li> children count as items
    let items = element.element_children().filter(|child| child.tag == "li");
    for (index, item) in items.enumerate() {
        let bullet = if ordered {
            format!("{}. ", index + 1)
        } else {
            "- ".to_string()
        };
        let content = render_list_item(item, indent_level);
        output.push_str(&prefix);
        output.push_str(&bullet);
        output.push_str(content.trim());
        output.push('\n');
    }

    if output.is_empty() {
        return output;
    }

    // Blank line marks the end of the list
    output.push('\n');
    output
}

fn render_list_item(item: &Element, indent_level: usize) -> String {
    let mut content = String::new();

    for child in item.children() {
        match child {
            Node::Text(text) => content.push_str(text),
            Node::Element(nested) if nested.tag == "ul" || nested.tag == "ol" => {
                let rendered = render_block(nested, indent_level + 1);
                let rendered = rendered.trim_end();
                if !rendered.is_empty() {
                    content.push('\n');
                    content.push_str(rendered);
                }
            }
            Node::Element(_) => content.push_str(&render_inline(child)),
        }
    }

    content
}

fn render_table(element: &Element) -> String {
    let rows: Vec<Vec<String>> = element
        .find_all("tr")
        .into_iter()
        .map(|row| {
            table_cells(row)
                .into_iter()
                .map(|cell| render_inline_element(cell).trim().to_string())
                .collect()
        })
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join(" | "));
    lines.push(vec!["---"; header.len()].join(" | "));
    lines.extend(body.iter().map(|row| row.join(" | ")));

    format!("{}\n\n", lines.join("\n"))
}

fn render_pre(element: &Element) -> String {
    let code = element.text_joined("\n");
    let code = code.trim_end();
    if code.is_empty() {
        String::new()
    } else {
        format!("{FENCE}\n{code}\n{FENCE}\n")
    }
}

fn render_container(element: &Element, indent_level: usize) -> String {
    let prefix = indent(indent_level);

    let pieces = element.children().map(|child| match child {
        Node::Element(nested) => render_block(nested, indent_level),
        Node::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                String::new()
            } else {
                format!("{}{}\n", prefix, text)
            }
        }
    });

    join_blocks(pieces)
}

/// Table cells (`th` and `td`) anywhere under a row, in document order
fn table_cells(row: &Element) -> Vec<&Element> {
    let mut cells = Vec::new();
    collect_cells(row, &mut cells);
    cells
}

fn collect_cells<'a>(element: &'a Element, cells: &mut Vec<&'a Element>) {
    for child in element.element_children() {
        if child.tag == "th" || child.tag == "td" {
            cells.push(child);
        }
        collect_cells(child, cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn li(text: &str) -> Element {
        Element::new("li").text(text)
    }

    fn row(cell: &str, values: &[&str]) -> Element {
        values
            .iter()
            .fold(Element::new("tr"), |tr, value| tr.child(Element::new(cell).text(value)))
    }

    #[test]
    fn test_headings() {
        for level in 1..=6 {
            let h = Element::new(&format!("h{level}")).text("  Title ");
            assert_eq!(
                render_block(&h, 0),
                format!("{} Title\n", "#".repeat(level))
            );
        }
    }

    #[test]
    fn test_heading_with_inline_markup() {
        let h = Element::new("h2")
            .text("The ")
            .child(Element::new("code").text("main"))
            .text(" loop");
        assert_eq!(render_block(&h, 0), "## The `main` loop\n");
    }

    #[test]
    fn test_paragraph() {
        let p = Element::new("p")
            .text("Hello ")
            .child(Element::new("b").text("World"));
        assert_eq!(render_block(&p, 0), "Hello **World**\n");
    }

    #[test]
    fn test_empty_paragraph_renders_nothing() {
        assert_eq!(render_block(&Element::new("p").text(" \n "), 0), "");
        assert_eq!(render_block(&Element::new("p"), 0), "");
    }

    #[test]
    fn test_unordered_list() {
        let ul = Element::new("ul").child(li("One")).child(li("Two"));
        assert_eq!(render_block(&ul, 0), "- One\n- Two\n\n");
    }

    #[test]
    fn test_ordered_list() {
        let ol = Element::new("ol")
            .child(li(" One "))
            .text("\n")
            .child(li("Two"));
        assert_eq!(render_block(&ol, 0), "1. One\n2. Two\n\n");
    }

    #[test]
    fn test_list_ignores_non_item_children() {
        let ul = Element::new("ul")
            .child(Element::new("div").child(li("hidden")))
            .child(li("shown"));
        assert_eq!(render_block(&ul, 0), "- shown\n\n");
    }

    #[test]
    fn test_nested_list() {
        let ul = Element::new("ul").child(
            Element::new("li")
                .text("A")
                .child(Element::new("ul").child(li("B"))),
        );
        assert_eq!(render_block(&ul, 0), "- A\n    - B\n\n");
    }

    #[test]
    fn test_nested_list_numbering_and_depth() {
        let ol = Element::new("ol")
            .child(
                Element::new("li").text("first").child(
                    Element::new("ol").child(li("inner")).child(
                        Element::new("li")
                            .text("deeper")
                            .child(Element::new("ul").child(li("leaf"))),
                    ),
                ),
            )
            .child(li("second"));
        assert_eq!(
            render_block(&ol, 0),
            "1. first\n    1. inner\n    2. deeper\n        - leaf\n2. second\n\n"
        );
    }

    #[test]
    fn test_list_item_inline_children() {
        let ul = Element::new("ul").child(
            Element::new("li")
                .child(Element::new("a").child(Element::new("b").text("bold link")))
                .text(" and ")
                .child(Element::new("em").text("more")),
        );
        assert_eq!(render_block(&ul, 0), "- **bold link** and *more*\n\n");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let ul = Element::new("ul").text("\n  ");
        assert_eq!(render_block(&ul, 0), "");
    }

    #[test]
    fn test_item_with_only_empty_nested_list() {
        let ul = Element::new("ul").child(Element::new("li").text("A").child(Element::new("ol")));
        assert_eq!(render_block(&ul, 0), "- A\n\n");
    }

    #[test]
    fn test_indented_list_lines() {
        let ul = Element::new("ul").child(li("x"));
        assert_eq!(render_block(&ul, 1), "    - x\n\n");
    }

    #[test]
    fn test_table() {
        let table = Element::new("table")
            .child(row("th", &["A", "B"]))
            .child(row("td", &["1", "2"]));
        assert_eq!(render_block(&table, 0), "A | B\n--- | ---\n1 | 2\n\n");
    }

    #[test]
    fn test_table_rows_found_in_sections() {
        let table = Element::new("table")
            .child(Element::new("thead").child(row("th", &["Name"])))
            .child(
                Element::new("tbody")
                    .child(row("td", &[" x "]))
                    .child(row("td", &["y"])),
            );
        assert_eq!(render_block(&table, 0), "Name\n---\nx\ny\n\n");
    }

    #[test]
    fn test_table_mixed_cells_in_order() {
        let tr = Element::new("tr")
            .child(Element::new("th").text("key"))
            .child(Element::new("td").child(Element::new("code").text("v")));
        let table = Element::new("table").child(tr);
        assert_eq!(render_block(&table, 0), "key | `v`\n--- | ---\n\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(render_block(&Element::new("table"), 0), "");
    }

    #[test]
    fn test_pre() {
        let pre = Element::new("pre").child(Element::new("code").text("fn main() {}\n\n"));
        assert_eq!(render_block(&pre, 0), "```\nfn main() {}\n```\n");
    }

    #[test]
    fn test_pre_joins_text_runs_with_newlines() {
        let pre = Element::new("pre")
            .text("let x")
            .child(Element::new("span").text(" = 1;"));
        assert_eq!(render_block(&pre, 0), "```\nlet x\n = 1;\n```\n");
    }

    #[test]
    fn test_whitespace_pre_renders_nothing() {
        let pre = Element::new("pre").text("   \n\t ");
        assert_eq!(render_block(&pre, 0), "");
    }

    #[test]
    fn test_container() {
        let div = Element::new("div")
            .text("\n  Intro text  \n")
            .child(Element::new("h2").text("Section"))
            .child(Element::new("p").text("   "))
            .child(Element::new("p").text("Body"));
        assert_eq!(render_block(&div, 0), "Intro text\n\n## Section\n\nBody\n");
    }

    #[test]
    fn test_nested_containers_do_not_stack_blank_lines() {
        let div = Element::new("div")
            .child(Element::new("section").child(Element::new("div")))
            .child(Element::new("p").text("a"))
            .child(Element::new("div").child(Element::new("p")))
            .child(Element::new("ul").child(li("b")))
            .child(Element::new("p").text("c"));
        assert_eq!(render_block(&div, 0), "a\n\n- b\n\nc\n");
    }

    #[test]
    fn test_unknown_element_is_container() {
        let span = Element::new("span").text("loose");
        assert_eq!(render_block(&span, 0), "loose\n");
    }
}
