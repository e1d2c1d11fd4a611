//! Output converters for document content.
//!
//! - html: serializes the document tree to its persisted HTML form
//! - text: flattens the document tree to plain text

mod html;
mod text;

pub use html::encode_document;
pub use text::plain_text;
