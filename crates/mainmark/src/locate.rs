//! Main content selection.

use crate::node::{Element, Node};
use crate::{MainmarkError, Result};

/// Where the content container was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// First `<article>` in the document
    Article,
    /// First `<main>` in the document
    Main,
    /// First element with `id="content"`
    ContentId,
    /// The document body
    Body,
}

impl Container {
    /// Candidates in priority order
    pub const PRIORITY: [Container; 4] = [
        Container::Article,
        Container::Main,
        Container::ContentId,
        Container::Body,
    ];

    fn matches(self, element: &Element) -> bool {
        match self {
            Container::Article => element.tag == "article",
            Container::Main => element.tag == "main",
            Container::ContentId => element.attr("id") == Some("content"),
            Container::Body => element.tag == "body",
        }
    }
}

/// Select the element holding the document's main content.
///
/// Candidates are tried strictly in [`Container::PRIORITY`] order and the
/// first one present wins; there is no scoring. A text node root has no
/// container.
pub fn locate(document: &Node) -> Result<&Element> {
    locate_with_kind(document).map(|(_, element)| element)
}

/// Like [`locate`], also reporting which candidate matched.
pub fn locate_with_kind(document: &Node) -> Result<(Container, &Element)> {
    let root = document.as_element().ok_or(MainmarkError::NotFound)?;

    for kind in Container::PRIORITY {
        if let Some(element) = root.find(|e| kind.matches(e)) {
            tracing::debug!(container = ?kind, tag = %element.tag, "located content container");
            return Ok((kind, element));
        }
    }

    Err(MainmarkError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(tag: &str, mark: &str) -> Element {
        Element::with_attrs(tag, vec![("data-mark", mark)])
    }

    fn document(body: Element) -> Node {
        Element::new("html").child(Element::new("head")).child(body).into()
    }

    fn mark(element: &Element) -> Option<&str> {
        element.attr("data-mark")
    }

    #[test]
    fn test_article_wins_over_everything() {
        let doc = document(
            Element::new("body")
                .child(Element::with_attrs("div", vec![("id", "content")]))
                .child(marked("main", "main"))
                .child(marked("article", "article")),
        );
        let (kind, element) = locate_with_kind(&doc).unwrap();
        assert_eq!(kind, Container::Article);
        assert_eq!(mark(element), Some("article"));
    }

    #[test]
    fn test_main_wins_over_content_id_and_body() {
        let doc = document(
            Element::new("body")
                .child(Element::with_attrs("div", vec![("id", "content"), ("data-mark", "div")]))
                .child(marked("main", "main")),
        );
        assert_eq!(locate_with_kind(&doc).unwrap().0, Container::Main);
    }

    #[test]
    fn test_content_id_wins_over_body() {
        let doc = document(
            Element::new("body")
                .child(Element::new("nav").text("menu"))
                .child(Element::with_attrs("section", vec![("id", "content")])),
        );
        let (kind, element) = locate_with_kind(&doc).unwrap();
        assert_eq!(kind, Container::ContentId);
        assert_eq!(element.tag, "section");
    }

    #[test]
    fn test_body_fallback() {
        let doc = document(marked("body", "body"));
        let (kind, element) = locate_with_kind(&doc).unwrap();
        assert_eq!(kind, Container::Body);
        assert_eq!(mark(element), Some("body"));
    }

    #[test]
    fn test_first_article_in_document_order() {
        let doc = document(
            Element::new("body")
                .child(Element::new("div").child(marked("article", "nested-first")))
                .child(marked("article", "second")),
        );
        assert_eq!(mark(locate(&doc).unwrap()), Some("nested-first"));
    }

    #[test]
    fn test_id_must_match_exactly() {
        let doc = document(
            Element::new("body").child(Element::with_attrs("div", vec![("id", "content-wrapper")])),
        );
        assert_eq!(locate_with_kind(&doc).unwrap().0, Container::Body);
    }

    #[test]
    fn test_root_itself_can_match() {
        let doc: Node = marked("article", "root").into();
        assert_eq!(mark(locate(&doc).unwrap()), Some("root"));
    }

    #[test]
    fn test_no_container() {
        let doc: Node = Element::new("html")
            .child(Element::new("head").child(Element::new("title").text("t")))
            .into();
        assert!(matches!(locate(&doc), Err(MainmarkError::NotFound)));
    }

    #[test]
    fn test_text_root_has_no_container() {
        let doc = Node::text("just text");
        assert!(matches!(locate(&doc), Err(MainmarkError::NotFound)));
    }
}
