//! HTML tokenizer.
//!
//! A forgiving, position-indexed byte scanner in the shape real chapter
//! content needs: tags with quoted or unquoted attributes, character data,
//! comments and doctypes (skipped). A `<` that does not open a markup
//! construct is treated as literal text. Errors carry the input position
//! and only arise when the input ends inside a tag or a quoted value.

use smol_str::SmolStr;

use crate::error::{HtmlError, Result};
use crate::utils::unesc;

/// A lexical token of the HTML input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag with its attributes, names lowercased.
    /// `self_closing` reflects explicit `/>` syntax only; void elements
    /// are the tree builder's concern.
    StartTag {
        name: SmolStr,
        attrs: Vec<(SmolStr, String)>,
        self_closing: bool,
    },
    /// A closing tag, name lowercased.
    EndTag { name: SmolStr },
    /// A run of character data, entity-decoded once.
    Text(String),
}

/// Elements that never have content and never get a closing tag.
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte position in the input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Produce the next token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if self.pos >= self.bytes.len() {
                return Ok(None);
            }
            if self.bytes[self.pos] == b'<' {
                let rest = &self.input[self.pos..];
                if rest.starts_with("<!--") {
                    self.skip_comment();
                    continue;
                }
                if rest.starts_with("<!") || rest.starts_with("<?") {
                    self.skip_bogus_markup();
                    continue;
                }
                if rest.starts_with("</") {
                    match self.lex_end_tag()? {
                        Some(token) => return Ok(Some(token)),
                        None => continue,
                    }
                }
                if self
                    .byte_at(self.pos + 1)
                    .is_some_and(|b| b.is_ascii_alphabetic())
                {
                    return self.lex_start_tag().map(Some);
                }
                // literal '<' not opening a tag, lexed as text below
            }
            return Ok(Some(self.lex_text()));
        }
    }

    fn byte_at(&self, idx: usize) -> Option<u8> {
        self.bytes.get(idx).copied()
    }

    /// True when the byte at `idx` starts a markup construct.
    fn is_tag_open(&self, idx: usize) -> bool {
        self.byte_at(idx) == Some(b'<')
            && self
                .byte_at(idx + 1)
                .is_some_and(|b| b.is_ascii_alphabetic() || b == b'/' || b == b'!' || b == b'?')
    }

    fn skip_whitespace(&mut self) {
        while self
            .byte_at(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    /// Skip `<!-- ... -->`. An unterminated comment swallows the rest of
    /// the input, as browsers do.
    fn skip_comment(&mut self) {
        match self.input[self.pos + 4..].find("-->") {
            Some(idx) => self.pos = self.pos + 4 + idx + 3,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Skip doctype and processing-instruction shaped markup up to `>`.
    fn skip_bogus_markup(&mut self) {
        match self.input[self.pos..].find('>') {
            Some(idx) => self.pos = self.pos + idx + 1,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Lex `</name ... >`. Returns None for an empty-named close tag,
    /// which is skipped entirely.
    fn lex_end_tag(&mut self) -> Result<Option<Token>> {
        self.pos += 2;
        let name = self.lex_tag_name();
        loop {
            match self.byte_at(self.pos) {
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
                None => return Err(HtmlError::UnexpectedEof),
            }
        }
        if name.is_empty() {
            return Ok(None);
        }
        Ok(Some(Token::EndTag { name }))
    }

    /// Lex `<name attr=value ...>` with optional `/>`.
    fn lex_start_tag(&mut self) -> Result<Token> {
        self.pos += 1;
        let name = self.lex_tag_name();
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            match self.byte_at(self.pos) {
                None => return Err(HtmlError::UnexpectedEof),
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(Token::StartTag {
                        name,
                        attrs,
                        self_closing: false,
                    });
                }
                Some(b'/') if self.byte_at(self.pos + 1) == Some(b'>') => {
                    self.pos += 2;
                    return Ok(Token::StartTag {
                        name,
                        attrs,
                        self_closing: true,
                    });
                }
                Some(_) => attrs.push(self.lex_attribute()?),
            }
        }
    }

    /// Lowercased tag name: leading ASCII letter already checked by the
    /// caller, then letters, digits and hyphens.
    fn lex_tag_name(&mut self) -> SmolStr {
        let start = self.pos;
        while self
            .byte_at(self.pos)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            self.pos += 1;
        }
        SmolStr::new(self.input[start..self.pos].to_ascii_lowercase())
    }

    /// One `name`, `name=value`, `name="value"` or `name='value'` pair.
    fn lex_attribute(&mut self) -> Result<(SmolStr, String)> {
        let start = self.pos;
        while self.byte_at(self.pos).is_some_and(|b| {
            !b.is_ascii_whitespace() && b != b'=' && b != b'>' && b != b'/' && b != b'"' && b != b'\''
        }) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(HtmlError::TokenError {
                pos: self.pos,
                msg: "malformed attribute".to_string(),
            });
        }
        let name = SmolStr::new(self.input[start..self.pos].to_ascii_lowercase());
        self.skip_whitespace();
        if self.byte_at(self.pos) != Some(b'=') {
            return Ok((name, String::new()));
        }
        self.pos += 1;
        self.skip_whitespace();
        let value = match self.byte_at(self.pos) {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let value_start = self.pos;
                loop {
                    match self.byte_at(self.pos) {
                        Some(b) if b == quote => break,
                        Some(_) => self.pos += 1,
                        None => return Err(HtmlError::UnexpectedEof),
                    }
                }
                let raw = &self.input[value_start..self.pos];
                self.pos += 1;
                raw
            }
            _ => {
                let value_start = self.pos;
                while self.byte_at(self.pos).is_some_and(|b| {
                    !b.is_ascii_whitespace()
                        && b != b'>'
                        && !(b == b'/' && self.byte_at(self.pos + 1) == Some(b'>'))
                }) {
                    self.pos += 1;
                }
                &self.input[value_start..self.pos]
            }
        };
        Ok((name, unesc(value).into_owned()))
    }

    /// Character data up to the next markup construct, entity-decoded.
    fn lex_text(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.bytes.len()
            && !(self.bytes[self.pos] == b'<' && self.is_tag_open(self.pos))
        {
            self.pos += 1;
        }
        Token::Text(unesc(&self.input[start..self.pos]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token().expect("lexing failed") {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_simple_tag_pair() {
        assert_eq!(
            all_tokens("<p>hi</p>"),
            vec![
                Token::StartTag {
                    name: "p".into(),
                    attrs: vec![],
                    self_closing: false
                },
                Token::Text("hi".into()),
                Token::EndTag { name: "p".into() },
            ]
        );
    }

    #[test]
    fn test_attributes_quoted_and_bare() {
        let tokens = all_tokens(r#"<a href="https://x.com" data-href='/y' checked>z</a>"#);
        let Token::StartTag { name, attrs, .. } = &tokens[0] else {
            panic!("expected start tag, got {:?}", tokens[0]);
        };
        assert_eq!(name, "a");
        assert_eq!(
            attrs,
            &vec![
                ("href".into(), "https://x.com".to_string()),
                ("data-href".into(), "/y".to_string()),
                ("checked".into(), String::new()),
            ]
        );
    }

    #[test]
    fn test_entities_decoded_in_text_and_attrs() {
        let tokens = all_tokens(r#"<a href="?a=1&amp;b=2">x &amp; y</a>"#);
        let Token::StartTag { attrs, .. } = &tokens[0] else {
            panic!("expected start tag");
        };
        assert_eq!(attrs[0].1, "?a=1&b=2");
        assert_eq!(tokens[1], Token::Text("x & y".into()));
    }

    #[test]
    fn test_uppercase_tags_lowercased() {
        let tokens = all_tokens("<P>x</P>");
        assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "p"));
        assert!(matches!(&tokens[2], Token::EndTag { name } if name == "p"));
    }

    #[test]
    fn test_comment_and_doctype_skipped() {
        assert_eq!(
            all_tokens("<!DOCTYPE html><!-- note -->hi"),
            vec![Token::Text("hi".into())]
        );
    }

    #[test]
    fn test_literal_angle_bracket_is_text() {
        assert_eq!(all_tokens("1 < 2"), vec![Token::Text("1 < 2".into())]);
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            all_tokens("<br/>"),
            vec![Token::StartTag {
                name: "br".into(),
                attrs: vec![],
                self_closing: true
            }]
        );
    }

    #[test]
    fn test_unterminated_tag_errors() {
        let mut lexer = Lexer::new("<p class=");
        assert!(matches!(lexer.next_token(), Err(HtmlError::UnexpectedEof)));
    }

    #[test]
    fn test_junk_attribute_byte_errors() {
        let mut lexer = Lexer::new(r#"<p "x">y</p>"#);
        assert!(matches!(
            lexer.next_token(),
            Err(HtmlError::TokenError { .. })
        ));
    }

    #[test]
    fn test_unterminated_quote_errors() {
        let mut lexer = Lexer::new(r#"<a href="oops>"#);
        assert!(matches!(lexer.next_token(), Err(HtmlError::UnexpectedEof)));
    }
}
