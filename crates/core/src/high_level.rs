//! High-level conversion entry points.
//!
//! Both directions are total functions: encoding degrades unrecognized
//! kinds to paragraphs, decoding degrades untokenizable input to a single
//! paragraph of tag-stripped text. Callers never see an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::converter::encode_document;
use crate::model::{Document, ElementKind, Node};
use crate::parser::HtmlParser;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Serialize a document to its persisted HTML form. An empty document
/// yields the empty string.
pub fn document_to_html(doc: &Document) -> String {
    encode_document(doc)
}

/// Parse persisted HTML back into a document.
///
/// Empty input and input that parses to nothing both yield a single empty
/// paragraph. Input the lexer cannot tokenize yields one paragraph whose
/// text is the input with everything tag-shaped removed.
pub fn html_to_document(html: &str) -> Document {
    if html.is_empty() {
        return Document::empty_paragraph();
    }
    match HtmlParser::new(html).parse() {
        Ok(nodes) if !nodes.is_empty() => Document::new(nodes),
        Ok(_) => Document::empty_paragraph(),
        Err(_) => Document::new(vec![Node::element(
            ElementKind::Paragraph,
            vec![Node::text(strip_tags(html))],
        )]),
    }
}

/// Remove anything tag-shaped from the input. Entities are left as-is;
/// this is the decode fallback, not a decoder.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}
