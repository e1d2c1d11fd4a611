//! Escaping helpers shared by the converter and parser.

use std::borrow::Cow;

/// HTML-escape text content: `&`, `<`, `>`, `"`, `'`.
///
/// The quote characters are escaped on top of `html_escape`'s text set so
/// the output is safe to embed in attribute positions as well.
pub fn enc(x: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_text(x);
    if escaped.contains('"') || escaped.contains('\'') {
        Cow::Owned(escaped.replace('"', "&quot;").replace('\'', "&#39;"))
    } else {
        escaped
    }
}

/// Attribute-escape a URL: `"` and `'` only.
///
/// Kept separate from text escaping so URLs survive verbatim inside a
/// double-quoted href.
pub fn enc_attr(x: &str) -> Cow<'_, str> {
    if x.contains('"') || x.contains('\'') {
        Cow::Owned(x.replace('"', "&quot;").replace('\'', "&#39;"))
    } else {
        Cow::Borrowed(x)
    }
}

/// Decode HTML entities once (named and numeric).
pub fn unesc(x: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(x)
}
