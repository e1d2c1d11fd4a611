//! Error types for the parchment conversion library.

use thiserror::Error;

/// Primary error type for HTML parsing operations.
///
/// The public conversion entry points are total functions and never surface
/// these to callers; they are the internal currency of the lexer and tree
/// builder, and the exit path of the CLI tools.
#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("invalid token at position {pos}: {msg}")]
    TokenError { pos: usize, msg: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for HtmlError.
pub type Result<T> = std::result::Result<T, HtmlError>;
