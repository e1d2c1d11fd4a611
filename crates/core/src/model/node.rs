//! Document tree node types.
//!
//! A document is an ordered sequence of nodes; a node is either a text leaf
//! (raw text plus marks) or an element (a kind plus ordered children). The
//! two cases are an explicit tagged union so kind dispatch is exhaustive and
//! a leaf can never grow children.

use crate::model::marks::{Mark, Marks};

/// Heading level, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// The numeric level used in the `h1`..`h6` tag names.
    pub const fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Level from a number; anything outside 1..=6 is None.
    pub const fn from_u8(level: u8) -> Option<HeadingLevel> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}

/// The semantic tag of an element node, determining its HTML mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    #[default]
    Paragraph,
    Heading(HeadingLevel),
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    CodeBlock,
    Link,
    /// Fallback for kinds outside the mapping table; encodes as a paragraph.
    Unknown,
}

impl ElementKind {
    /// Parse an editor node type string ("p", "h3", "ul", ...), accepting
    /// the editor's legacy aliases. Anything unrecognized maps to Unknown.
    pub fn from_type_str(s: &str) -> ElementKind {
        match s {
            "p" => ElementKind::Paragraph,
            "h1" => ElementKind::Heading(HeadingLevel::H1),
            "h2" => ElementKind::Heading(HeadingLevel::H2),
            "h3" => ElementKind::Heading(HeadingLevel::H3),
            "h4" => ElementKind::Heading(HeadingLevel::H4),
            "h5" => ElementKind::Heading(HeadingLevel::H5),
            "h6" => ElementKind::Heading(HeadingLevel::H6),
            "ul" | "ul_list" => ElementKind::UnorderedList,
            "ol" | "ol_list" => ElementKind::OrderedList,
            "li" | "list-item" => ElementKind::ListItem,
            "blockquote" => ElementKind::Blockquote,
            "code" => ElementKind::CodeBlock,
            "a" => ElementKind::Link,
            _ => ElementKind::Unknown,
        }
    }

    /// The canonical editor type string for this kind. Unknown serializes
    /// as "p", matching its paragraph fallback on encode.
    pub const fn type_str(self) -> &'static str {
        match self {
            ElementKind::Paragraph | ElementKind::Unknown => "p",
            ElementKind::Heading(HeadingLevel::H1) => "h1",
            ElementKind::Heading(HeadingLevel::H2) => "h2",
            ElementKind::Heading(HeadingLevel::H3) => "h3",
            ElementKind::Heading(HeadingLevel::H4) => "h4",
            ElementKind::Heading(HeadingLevel::H5) => "h5",
            ElementKind::Heading(HeadingLevel::H6) => "h6",
            ElementKind::UnorderedList => "ul",
            ElementKind::OrderedList => "ol",
            ElementKind::ListItem => "li",
            ElementKind::Blockquote => "blockquote",
            ElementKind::CodeBlock => "code",
            ElementKind::Link => "a",
        }
    }
}

/// A run of text with its formatting marks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaf {
    pub text: String,
    pub marks: Marks,
}

/// An element with a kind and ordered children.
///
/// `url` is meaningful only for the link kind and None elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub url: Option<String>,
    pub children: Vec<Node>,
}

/// A node of the document tree: either a text leaf or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Leaf),
    Element(Element),
}

impl Node {
    /// An unmarked text leaf.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(Leaf {
            text: text.into(),
            marks: Marks::NONE,
        })
    }

    /// A text leaf with the given marks.
    pub fn marked_text(text: impl Into<String>, marks: Marks) -> Node {
        Node::Text(Leaf {
            text: text.into(),
            marks,
        })
    }

    /// The empty text leaf used to normalize childless elements.
    pub fn empty_text() -> Node {
        Node::text("")
    }

    /// A non-link element.
    pub fn element(kind: ElementKind, children: Vec<Node>) -> Node {
        Node::Element(Element {
            kind,
            url: None,
            children,
        })
    }

    /// A link element with its target URL.
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Node {
        Node::Element(Element {
            kind: ElementKind::Link,
            url: Some(url.into()),
            children,
        })
    }

    /// Return a copy of this subtree with the given mark set on every
    /// contained text leaf. Application is structural: elements recurse
    /// into all children, leaves set the flag directly.
    #[must_use]
    pub fn with_mark(self, mark: Mark) -> Node {
        match self {
            Node::Text(leaf) => Node::Text(Leaf {
                marks: leaf.marks.with(mark),
                ..leaf
            }),
            Node::Element(el) => Node::Element(Element {
                kind: el.kind,
                url: el.url,
                children: el
                    .children
                    .into_iter()
                    .map(|child| child.with_mark(mark))
                    .collect(),
            }),
        }
    }

    /// Append the concatenated text of every leaf in this subtree.
    pub fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(leaf) => out.push_str(&leaf.text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// An ordered sequence of nodes: one chapter's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Document {
        Document { nodes }
    }

    /// The decode fallback: a single paragraph holding one empty leaf, so
    /// downstream editors always have a cursor target.
    pub fn empty_paragraph() -> Document {
        Document::new(vec![Node::element(
            ElementKind::Paragraph,
            vec![Node::empty_text()],
        )])
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Document {
        Document::new(nodes)
    }
}
