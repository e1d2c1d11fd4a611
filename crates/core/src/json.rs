//! Editor-shaped JSON bridge.
//!
//! The chapter editor holds the tree as Plate-style JSON: a leaf is an
//! object with a `text` field and optional boolean marks, an element is an
//! object with a `type` string, a `children` array and, for links, a `url`.
//! Reading is lenient the way the editor is: unknown type strings map to
//! the Unknown kind, missing children normalize to one empty leaf, and a
//! missing or malformed document maps to an empty one.

use serde_json::{Map, Value};

use crate::model::{Document, Element, ElementKind, Leaf, Marks, Node};

/// Serialize a document as an editor JSON array.
pub fn document_to_json(doc: &Document) -> Value {
    Value::Array(doc.nodes.iter().map(node_to_json).collect())
}

fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Text(leaf) => {
            let mut obj = Map::new();
            obj.insert("text".into(), Value::String(leaf.text.clone()));
            let marks = leaf.marks;
            if marks.bold {
                obj.insert("bold".into(), Value::Bool(true));
            }
            if marks.italic {
                obj.insert("italic".into(), Value::Bool(true));
            }
            if marks.underline {
                obj.insert("underline".into(), Value::Bool(true));
            }
            if marks.code {
                obj.insert("code".into(), Value::Bool(true));
            }
            if marks.strikethrough {
                obj.insert("strikethrough".into(), Value::Bool(true));
            }
            Value::Object(obj)
        }
        Node::Element(el) => {
            let mut obj = Map::new();
            obj.insert("type".into(), Value::String(el.kind.type_str().to_string()));
            if el.kind == ElementKind::Link {
                obj.insert(
                    "url".into(),
                    Value::String(el.url.clone().unwrap_or_default()),
                );
            }
            obj.insert(
                "children".into(),
                Value::Array(el.children.iter().map(node_to_json).collect()),
            );
            Value::Object(obj)
        }
    }
}

/// Read an editor JSON document. A top-level object is taken as a single
/// node; anything else non-array maps to the empty document.
pub fn document_from_json(value: &Value) -> Document {
    match value {
        Value::Array(items) => Document::new(items.iter().filter_map(node_from_json).collect()),
        Value::Object(_) => Document::new(node_from_json(value).into_iter().collect()),
        _ => Document::default(),
    }
}

/// One node from its JSON object. The presence of a `text` field marks a
/// leaf, matching the editor's convention; non-objects are dropped.
fn node_from_json(value: &Value) -> Option<Node> {
    let obj = value.as_object()?;
    if let Some(text) = obj.get("text") {
        return Some(Node::Text(Leaf {
            text: text.as_str().unwrap_or_default().to_string(),
            marks: Marks {
                bold: flag(obj, "bold"),
                italic: flag(obj, "italic"),
                underline: flag(obj, "underline"),
                code: flag(obj, "code"),
                strikethrough: flag(obj, "strikethrough"),
            },
        }));
    }
    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .map(ElementKind::from_type_str)
        .unwrap_or(ElementKind::Unknown);
    let children: Vec<Node> = obj
        .get("children")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(node_from_json).collect())
        .unwrap_or_default();
    let children = if children.is_empty() {
        vec![Node::empty_text()]
    } else {
        children
    };
    let url = match kind {
        ElementKind::Link => Some(
            obj.get("url")
                .or_else(|| obj.get("href"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        ),
        _ => None,
    };
    Some(Node::Element(Element {
        kind,
        url,
        children,
    }))
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}
