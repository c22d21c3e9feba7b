//! # mainmark
//!
//! Locate the main content of an HTML document and convert it to Markdown.
//!
//! ## Design
//!
//! The converter reads a small, parser-agnostic [`Node`] tree and never
//! mutates it. Conversion runs in four steps:
//!
//! - **Locate**: pick the content container: the first `<article>`, else
//!   the first `<main>`, else the first element with `id="content"`, else
//!   `<body>`.
//! - **Block rendering**: each direct element child of the container
//!   becomes headings, paragraphs, lists, tables, fenced code or nested
//!   containers.
//! - **Inline rendering**: emphasis, code spans, links and line breaks
//!   inside blocks. Text is not escaped.
//! - **Assembly**: blocks are joined with one blank line, common
//!   indentation is removed, and the document ends with one newline.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use mainmark::{convert, Element, Node};
//!
//! let body = Element::new("body").child(
//!     Element::new("p")
//!         .text("Hello ")
//!         .child(Element::new("b").text("World")),
//! );
//! let document: Node = Element::new("html").child(body).into();
//!
//! assert_eq!(convert(&document).unwrap(), "Hello **World**\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let markdown = mainmark::html_to_markdown("<main><h2>Notes</h2></main>").unwrap();
//! assert_eq!(markdown, "## Notes\n");
//! ```

mod block;
mod convert;
#[cfg(feature = "html")]
pub mod html;
mod inline;
mod locate;
pub mod node;
mod utilities;

pub use block::render_block;
pub use convert::{convert, convert_content};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use inline::render_inline;
pub use locate::{locate, locate_with_kind, Container};
pub use node::{Element, Node};
pub use utilities::{dedent, join_blocks};

/// Error type for mainmark operations
#[derive(Debug, thiserror::Error)]
pub enum MainmarkError {
    #[error("no content container found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, MainmarkError>;

/// Parse an HTML document and convert its main content to Markdown
#[cfg(feature = "html")]
pub fn html_to_markdown(html: &str) -> Result<String> {
    convert(&parse_html(html))
}
