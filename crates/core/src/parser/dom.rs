//! Token stream to document tree.
//!
//! Walks the tag structure top-down and maps each recognized tag back to
//! its node kind. Formatting tags (`strong`/`b`, `em`/`i`, `u`, `code`,
//! `del`/`s`/`strike`) produce no element: they unwrap into a structural
//! mark applied to every descendant leaf. Unrecognized tags are
//! transparent, lifting their children in place, except that a childless
//! one leaves a single empty text leaf behind so it is never silently
//! dropped.
//!
//! Shape problems are repaired rather than reported: a stray close tag is
//! skipped, a close tag for an open ancestor closes everything down to it,
//! and elements still open at end of input close there.

use smol_str::SmolStr;

use crate::error::Result;
use crate::model::{ElementKind, HeadingLevel, Mark, Node};
use crate::parser::lexer::{Lexer, Token, is_void_element};

pub struct HtmlParser<'a> {
    lexer: Lexer<'a>,
    pending: Option<Token>,
}

impl<'a> HtmlParser<'a> {
    pub fn new(input: &'a str) -> HtmlParser<'a> {
        HtmlParser {
            lexer: Lexer::new(input),
            pending: None,
        }
    }

    /// Parse the input into the flattened list of top-level nodes.
    pub fn parse(mut self) -> Result<Vec<Node>> {
        let mut open = Vec::new();
        self.parse_nodes(None, &mut open)
    }

    fn next(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }
        self.lexer.next_token()
    }

    /// Parse siblings until the close tag of `parent` (consumed), a close
    /// tag of an open ancestor (pushed back for the outer frame), or end
    /// of input.
    fn parse_nodes(
        &mut self,
        parent: Option<&SmolStr>,
        open: &mut Vec<SmolStr>,
    ) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        while let Some(token) = self.next()? {
            match token {
                Token::Text(text) => nodes.push(Node::text(text)),
                Token::StartTag {
                    name,
                    attrs,
                    self_closing,
                } => {
                    let children = if self_closing || is_void_element(&name) {
                        Vec::new()
                    } else {
                        open.push(name.clone());
                        let children = self.parse_nodes(Some(&name), open)?;
                        open.pop();
                        children
                    };
                    nodes.extend(convert_element(&name, &attrs, children, parent));
                }
                Token::EndTag { name } => {
                    if parent.is_some_and(|p| *p == name) {
                        return Ok(nodes);
                    }
                    if open.iter().any(|tag| *tag == name) {
                        self.pending = Some(Token::EndTag { name });
                        return Ok(nodes);
                    }
                    // stray close tag, skip
                }
            }
        }
        Ok(nodes)
    }
}

/// Map one parsed tag and its already-converted children to nodes.
///
/// Returns a list because mark tags and unrecognized tags dissolve into
/// their children instead of producing an element of their own. `parent`
/// is the enclosing tag name: `code` directly inside `pre` is the code
/// block's wrapper and stays transparent, while any other `code` is the
/// code mark.
fn convert_element(
    name: &SmolStr,
    attrs: &[(SmolStr, String)],
    children: Vec<Node>,
    parent: Option<&SmolStr>,
) -> Vec<Node> {
    match name.as_str() {
        "p" => element(ElementKind::Paragraph, children),
        "h1" => element(ElementKind::Heading(HeadingLevel::H1), children),
        "h2" => element(ElementKind::Heading(HeadingLevel::H2), children),
        "h3" => element(ElementKind::Heading(HeadingLevel::H3), children),
        "h4" => element(ElementKind::Heading(HeadingLevel::H4), children),
        "h5" => element(ElementKind::Heading(HeadingLevel::H5), children),
        "h6" => element(ElementKind::Heading(HeadingLevel::H6), children),
        "ul" => element(ElementKind::UnorderedList, children),
        "ol" => element(ElementKind::OrderedList, children),
        "li" => element(ElementKind::ListItem, children),
        "blockquote" => element(ElementKind::Blockquote, children),
        "pre" => element(ElementKind::CodeBlock, children),
        "a" => {
            let url = attr(attrs, "href")
                .or_else(|| attr(attrs, "data-href"))
                .unwrap_or_default();
            vec![Node::link(url, or_empty_leaf(children))]
        }
        "strong" | "b" => apply_mark(children, Mark::Bold),
        "em" | "i" => apply_mark(children, Mark::Italic),
        "u" => apply_mark(children, Mark::Underline),
        "code" if parent.is_some_and(|p| p == "pre") => lift(children),
        "code" => apply_mark(children, Mark::Code),
        "del" | "s" | "strike" => apply_mark(children, Mark::Strikethrough),
        _ => lift(children),
    }
}

fn element(kind: ElementKind, children: Vec<Node>) -> Vec<Node> {
    vec![Node::element(kind, or_empty_leaf(children))]
}

/// Childless elements get one empty text leaf so editors have a cursor
/// target.
fn or_empty_leaf(children: Vec<Node>) -> Vec<Node> {
    if children.is_empty() {
        vec![Node::empty_text()]
    } else {
        children
    }
}

fn lift(children: Vec<Node>) -> Vec<Node> {
    or_empty_leaf(children)
}

fn apply_mark(children: Vec<Node>, mark: Mark) -> Vec<Node> {
    or_empty_leaf(children)
        .into_iter()
        .map(|node| node.with_mark(mark))
        .collect()
}

fn attr(attrs: &[(SmolStr, String)], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}
