//! HTML encoder - serializes a document tree to an HTML string.
//!
//! Total in every direction: kinds outside the mapping table degrade to a
//! paragraph wrapper and a missing link URL degrades to "#", never an error.

use crate::model::{Document, Element, ElementKind, Leaf, Node};
use crate::utils::{enc, enc_attr};

/// Serialize a document to HTML.
///
/// Sibling nodes are concatenated in order with no separators; an empty
/// document yields the empty string.
pub fn encode_document(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        encode_node(node, &mut out);
    }
    out
}

fn encode_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(leaf) => encode_leaf(leaf, out),
        Node::Element(el) => encode_element(el, out),
    }
}

/// Escape the text, then wrap in mark tags in a fixed nesting order:
/// strong innermost, then em, u, code, del. The order is part of the
/// persisted format and must stay stable.
fn encode_leaf(leaf: &Leaf, out: &mut String) {
    let mut text = enc(&leaf.text).into_owned();
    if leaf.marks.bold {
        text = format!("<strong>{text}</strong>");
    }
    if leaf.marks.italic {
        text = format!("<em>{text}</em>");
    }
    if leaf.marks.underline {
        text = format!("<u>{text}</u>");
    }
    if leaf.marks.code {
        text = format!("<code>{text}</code>");
    }
    if leaf.marks.strikethrough {
        text = format!("<del>{text}</del>");
    }
    out.push_str(&text);
}

fn encode_element(el: &Element, out: &mut String) {
    match el.kind {
        ElementKind::Heading(level) => {
            let l = level.as_u8();
            out.push_str(&format!("<h{l}>"));
            encode_children(el, out);
            out.push_str(&format!("</h{l}>"));
        }
        ElementKind::UnorderedList => wrap(el, "<ul>", "</ul>", out),
        ElementKind::OrderedList => wrap(el, "<ol>", "</ol>", out),
        ElementKind::ListItem => wrap(el, "<li>", "</li>", out),
        ElementKind::Blockquote => wrap(el, "<blockquote>", "</blockquote>", out),
        ElementKind::CodeBlock => wrap(el, "<pre><code>", "</code></pre>", out),
        ElementKind::Link => {
            let url = el.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#");
            out.push_str("<a href=\"");
            out.push_str(&enc_attr(url));
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            encode_children(el, out);
            out.push_str("</a>");
        }
        ElementKind::Paragraph | ElementKind::Unknown => wrap(el, "<p>", "</p>", out),
    }
}

fn wrap(el: &Element, open: &str, close: &str, out: &mut String) {
    out.push_str(open);
    encode_children(el, out);
    out.push_str(close);
}

fn encode_children(el: &Element, out: &mut String) {
    for child in &el.children {
        encode_node(child, out);
    }
}
