//! parchment - rich-text document tree to HTML conversion for chapter content.
//!
//! Pure, stateless, bidirectional mapping between an ordered tree of block
//! and inline nodes and the HTML string an external content store persists.
//! [`document_to_html`] and [`html_to_document`] are total functions: every
//! input converts, malformed ones degrade to the nearest sensible output.

pub mod converter;
pub mod error;
pub mod high_level;
pub mod json;
pub mod model;
pub mod parser;
pub mod utils;

pub use converter::plain_text;
pub use error::{HtmlError, Result};
pub use high_level::{document_to_html, html_to_document, strip_tags};
pub use model::{Document, Element, ElementKind, HeadingLevel, Leaf, Mark, Marks, Node};
