//! Read-only DOM tree consumed by the converter.
//!
//! Any parser can produce this structure; the `html` feature ships an
//! adapter for scraper/html5ever. The converter never mutates a tree it is
//! handed, so a tree may be shared between threads for concurrent
//! conversions.

use indexmap::IndexMap;

/// A node in the input tree: either an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element node with a tag name, attributes and ordered children
    Element(Element),
    /// Literal text content
    Text(String),
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name as produced by the parser (e.g. "p", "ul", "a")
    pub tag: String,

    /// Attributes in source order, keys unique
    pub attrs: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node without attributes
    pub fn element(tag: &str) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// All text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with attributes.
    ///
    /// A repeated attribute name keeps its first value, as HTML parsers do.
    pub fn with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Self::new(tag);
        for (name, value) in attrs {
            element
                .attrs
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        element
    }

    /// Builder-style child append
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style text child append
    pub fn text(self, content: &str) -> Self {
        self.child(Node::text(content))
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by exact name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant text concatenated in document order
    pub fn text_content(&self) -> String {
        self.text_runs().concat()
    }

    /// Descendant text runs joined with `separator`.
    ///
    /// Whitespace-only runs are kept, so `"\n"` as separator reproduces the
    /// line structure of preformatted blocks split across inline elements.
    pub fn text_joined(&self, separator: &str) -> String {
        self.text_runs().join(separator)
    }

    /// First element in pre-order (this element first) matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.element_children()
            .find_map(|child| child.find(predicate))
    }

    /// All descendant elements with the given tag, in document order.
    ///
    /// The element itself is not included.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(tag, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for child in self.element_children() {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_descendants(tag, found);
        }
    }

    fn text_runs(&self) -> Vec<&str> {
        let mut runs = Vec::new();
        self.collect_text(&mut runs);
        runs
    }

    fn collect_text<'a>(&'a self, runs: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Node::Text(text) => runs.push(text),
                Node::Element(element) => element.collect_text(runs),
            }
        }
    }
}
