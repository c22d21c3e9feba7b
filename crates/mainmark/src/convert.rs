//! Document assembly: locate the content container, render its blocks and
//! normalize the result.

use crate::block::render_block;
use crate::locate::locate;
use crate::node::{Element, Node};
use crate::utilities::{dedent, join_blocks};
use crate::Result;

/// Convert a parsed document to Markdown.
///
/// Fails with [`MainmarkError::NotFound`](crate::MainmarkError::NotFound)
/// when the tree has no content container; otherwise total. The result
/// always ends with exactly one newline.
pub fn convert(document: &Node) -> Result<String> {
    let content = locate(document)?;
    Ok(convert_content(content))
}

/// Render an already-selected content container.
///
/// Only direct element children become blocks; loose text directly under
/// the container is ignored.
pub fn convert_content(content: &Element) -> String {
    let blocks: Vec<String> = content
        .element_children()
        .map(|child| render_block(child, 0))
        .filter(|block| !block.trim().is_empty())
        .collect();

    tracing::debug!(
        container = %content.tag,
        blocks = blocks.len(),
        "rendered content blocks"
    );

    let markdown = dedent(&join_blocks(&blocks));
    format!("{}\n", markdown.trim())
}
