//! Plain text extraction from document trees.

use crate::model::{Document, Node};

/// Concatenate the text of every leaf, depth first, with a newline after
/// each top-level block element.
pub fn plain_text(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        node.collect_text(&mut out);
        if matches!(node, Node::Element(_)) {
            out.push('\n');
        }
    }
    out
}
