//! Best-effort HTML parsing back into the document tree.
//!
//! Two layers, lexer feeding a tree builder:
//! - lexer: byte-cursor tokenizer producing start/end/text tokens
//! - dom: token stream to document nodes, applying the tag mapping

pub mod dom;
pub mod lexer;

pub use dom::HtmlParser;
pub use lexer::{Lexer, Token};
