//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the [`Node`] tree the converter reads.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node};

/// Parse a full HTML document into a Node tree rooted at `<html>`.
///
/// html5ever always synthesizes `html`, `head` and `body`, so the returned
/// tree has a body even when the markup does not.
///
/// # Example
///
/// ```rust
/// use mainmark::{convert, parse_html};
///
/// let root = parse_html("<article><h1>Hello <em>World</em></h1></article>");
/// let markdown = convert(&root).unwrap();
/// assert_eq!(markdown, "# Hello *World*\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    Node::Element(scraper_to_element(document.root_element()))
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef) -> Element {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Element::with_attrs(element.value().name(), attrs);

    // Comments, doctypes and processing instructions are dropped
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
