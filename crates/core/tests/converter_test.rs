//! Tests for the HTML encoder and plain text converter.

use parchment_core::converter::{encode_document, plain_text};
use parchment_core::model::{Document, ElementKind, HeadingLevel, Mark, Marks, Node};

fn doc(nodes: Vec<Node>) -> Document {
    Document::new(nodes)
}

// ============================================================================
// Leaf encoding
// ============================================================================

mod leaf_tests {
    use super::*;

    #[test]
    fn test_empty_document_encodes_to_empty_string() {
        assert_eq!(encode_document(&Document::default()), "");
    }

    #[test]
    fn test_plain_leaf_no_wrapping_tags() {
        let d = doc(vec![Node::text("hello world")]);
        assert_eq!(encode_document(&d), "hello world");
    }

    #[test]
    fn test_leaf_text_is_escaped() {
        let d = doc(vec![Node::text(r#"a & b < c > d "e" 'f'"#)]);
        assert_eq!(
            encode_document(&d),
            "a &amp; b &lt; c &gt; d &quot;e&quot; &#39;f&#39;"
        );
    }

    #[test]
    fn test_single_marks() {
        let cases = [
            (Mark::Bold, "<strong>x</strong>"),
            (Mark::Italic, "<em>x</em>"),
            (Mark::Underline, "<u>x</u>"),
            (Mark::Code, "<code>x</code>"),
            (Mark::Strikethrough, "<del>x</del>"),
        ];
        for (mark, expected) in cases {
            let d = doc(vec![Node::marked_text("x", Marks::only(mark))]);
            assert_eq!(encode_document(&d), expected);
        }
    }

    #[test]
    fn test_mark_nesting_order_is_fixed() {
        let marks = Marks {
            bold: true,
            italic: true,
            underline: true,
            code: true,
            strikethrough: true,
        };
        let d = doc(vec![Node::marked_text("x", marks)]);
        assert_eq!(
            encode_document(&d),
            "<del><code><u><em><strong>x</strong></em></u></code></del>"
        );
    }

    #[test]
    fn test_mark_subset_keeps_relative_order() {
        let marks = Marks::only(Mark::Bold).with(Mark::Underline);
        let d = doc(vec![Node::marked_text("x", marks)]);
        assert_eq!(encode_document(&d), "<u><strong>x</strong></u>");
    }

    #[test]
    fn test_sibling_leaves_are_adjacent() {
        let d = doc(vec![
            Node::text("Hello "),
            Node::marked_text("world", Marks::only(Mark::Bold)),
        ]);
        assert_eq!(encode_document(&d), "Hello <strong>world</strong>");
    }
}

// ============================================================================
// Element encoding
// ============================================================================

mod element_tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        let d = doc(vec![Node::element(
            ElementKind::Paragraph,
            vec![Node::text("x")],
        )]);
        assert_eq!(encode_document(&d), "<p>x</p>");
    }

    #[test]
    fn test_all_heading_levels() {
        for level in 1..=6u8 {
            let kind = ElementKind::Heading(HeadingLevel::from_u8(level).unwrap());
            let d = doc(vec![Node::element(kind, vec![Node::text("t")])]);
            assert_eq!(encode_document(&d), format!("<h{level}>t</h{level}>"));
        }
    }

    #[test]
    fn test_nested_list() {
        let d = doc(vec![Node::element(
            ElementKind::UnorderedList,
            vec![
                Node::element(ElementKind::ListItem, vec![Node::text("a")]),
                Node::element(ElementKind::ListItem, vec![Node::text("b")]),
            ],
        )]);
        assert_eq!(encode_document(&d), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_ordered_list() {
        let d = doc(vec![Node::element(
            ElementKind::OrderedList,
            vec![Node::element(ElementKind::ListItem, vec![Node::text("a")])],
        )]);
        assert_eq!(encode_document(&d), "<ol><li>a</li></ol>");
    }

    #[test]
    fn test_blockquote() {
        let d = doc(vec![Node::element(
            ElementKind::Blockquote,
            vec![Node::text("q")],
        )]);
        assert_eq!(encode_document(&d), "<blockquote>q</blockquote>");
    }

    #[test]
    fn test_code_block_wraps_pre_and_code() {
        let d = doc(vec![Node::element(
            ElementKind::CodeBlock,
            vec![Node::text("let x = 1 < 2;")],
        )]);
        assert_eq!(
            encode_document(&d),
            "<pre><code>let x = 1 &lt; 2;</code></pre>"
        );
    }

    #[test]
    fn test_link_with_url() {
        let d = doc(vec![Node::link("https://x.com", vec![Node::text("x")])]);
        assert_eq!(
            encode_document(&d),
            r#"<a href="https://x.com" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_link_missing_url_defaults_to_hash() {
        let d = doc(vec![Node::element(ElementKind::Link, vec![Node::text("x")])]);
        assert_eq!(
            encode_document(&d),
            r##"<a href="#" target="_blank" rel="noopener noreferrer">x</a>"##
        );
    }

    #[test]
    fn test_link_empty_url_defaults_to_hash() {
        let d = doc(vec![Node::link("", vec![Node::text("x")])]);
        assert_eq!(
            encode_document(&d),
            r##"<a href="#" target="_blank" rel="noopener noreferrer">x</a>"##
        );
    }

    #[test]
    fn test_link_url_is_attribute_escaped() {
        let d = doc(vec![Node::link(r#"https://x.com/?q="a"&b=1"#, vec![Node::text("x")])]);
        assert_eq!(
            encode_document(&d),
            r#"<a href="https://x.com/?q=&quot;a&quot;&b=1" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_unknown_kind_falls_back_to_paragraph() {
        let d = doc(vec![Node::element(
            ElementKind::Unknown,
            vec![Node::text("x")],
        )]);
        assert_eq!(encode_document(&d), "<p>x</p>");
    }

    #[test]
    fn test_heading_then_paragraph_with_bold_run() {
        let d = doc(vec![
            Node::element(
                ElementKind::Heading(HeadingLevel::H1),
                vec![Node::text("Title")],
            ),
            Node::element(
                ElementKind::Paragraph,
                vec![
                    Node::text("Hello "),
                    Node::marked_text("world", Marks::only(Mark::Bold)),
                ],
            ),
        ]);
        assert_eq!(
            encode_document(&d),
            "<h1>Title</h1><p>Hello <strong>world</strong></p>"
        );
    }
}

// ============================================================================
// Plain text
// ============================================================================

mod plain_text_tests {
    use super::*;

    #[test]
    fn test_plain_text_flattens_blocks() {
        let d = doc(vec![
            Node::element(
                ElementKind::Heading(HeadingLevel::H1),
                vec![Node::text("Title")],
            ),
            Node::element(
                ElementKind::Paragraph,
                vec![
                    Node::text("Hello "),
                    Node::marked_text("world", Marks::only(Mark::Bold)),
                ],
            ),
        ]);
        assert_eq!(plain_text(&d), "Title\nHello world\n");
    }

    #[test]
    fn test_plain_text_top_level_leaf_gets_no_newline() {
        let d = doc(vec![Node::text("loose")]);
        assert_eq!(plain_text(&d), "loose");
    }

    #[test]
    fn test_plain_text_recurses_into_lists() {
        let d = doc(vec![Node::element(
            ElementKind::UnorderedList,
            vec![
                Node::element(ElementKind::ListItem, vec![Node::text("a")]),
                Node::element(ElementKind::ListItem, vec![Node::text("b")]),
            ],
        )]);
        assert_eq!(plain_text(&d), "ab\n");
    }
}
