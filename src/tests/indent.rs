use super::{block_indent, block_rule, delimited_indent, IndentContext, Rule};
use crate::document::Document;
use crate::kind::NodeKind;
use crate::tree::SyntaxTree;

fn indent_at(tree: &SyntaxTree, text: &str, pos: usize, unit: usize) -> Option<usize> {
    let doc = Document::new(text);
    let cx = IndentContext::new(&doc, pos, unit, 4);
    block_indent(tree, &cx)
}

// "key: |\n"
fn top_level_block_literal() -> SyntaxTree {
    SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 7)
        .open("block_mapping", NodeKind::BlockMapping, 0, 6)
        .open("block_mapping_pair", NodeKind::Pair, 0, 6)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .field("key")
        .leaf(":", NodeKind::Other, 3, 4)
        .open("block_scalar", NodeKind::BlockLiteral, 5, 6)
        .field("value")
        .leaf("|", NodeKind::Other, 5, 6)
        .finish()
}

// "a:\n  key: |\n"
fn nested_block_literal() -> SyntaxTree {
    SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 12)
        .open("block_mapping", NodeKind::BlockMapping, 0, 11)
        .open("block_mapping_pair", NodeKind::Pair, 0, 11)
        .leaf("plain_scalar", NodeKind::Literal, 0, 1)
        .leaf(":", NodeKind::Other, 1, 2)
        .open("block_mapping", NodeKind::BlockMapping, 5, 11)
        .open("block_mapping_pair", NodeKind::Pair, 5, 11)
        .leaf("plain_scalar", NodeKind::Literal, 5, 8)
        .leaf(":", NodeKind::Other, 8, 9)
        .open("block_scalar", NodeKind::BlockLiteral, 10, 11)
        .leaf("|", NodeKind::Other, 10, 11)
        .finish()
}

#[test]
fn test_block_literal_marker_adds_one_unit() {
    let text = "key: |\n";
    let tree = top_level_block_literal();
    assert_eq!(indent_at(&tree, text, 6, 2), Some(2));
    assert_eq!(indent_at(&tree, text, 6, 4), Some(4));
}

#[test]
fn test_nested_block_literal_marker_uses_its_line_indent() {
    let text = "a:\n  key: |\n";
    let tree = nested_block_literal();
    assert_eq!(indent_at(&tree, text, 11, 2), Some(4));
    assert_eq!(indent_at(&tree, text, 11, 4), Some(6));
}

#[test]
fn test_block_literal_content_keeps_content_indent() {
    // "key: |\n  line one\n"
    let text = "key: |\n  line one\n";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 18)
        .open("block_mapping", NodeKind::BlockMapping, 0, 17)
        .open("block_mapping_pair", NodeKind::Pair, 0, 17)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .open("block_scalar", NodeKind::BlockLiteral, 5, 17)
        .leaf("|", NodeKind::Other, 5, 6)
        .leaf("block_scalar_content", NodeKind::BlockLiteralContent, 7, 17)
        .finish();

    assert_eq!(indent_at(&tree, text, 17, 2), Some(2));
    assert_eq!(indent_at(&tree, text, 17, 4), Some(2));
}

#[test]
fn test_empty_block_literal_content_falls_through_to_marker() {
    let tree = SyntaxTree::builder("nestml")
        .open("block_scalar", NodeKind::BlockLiteral, 0, 5)
        .leaf("block_scalar_content", NodeKind::BlockLiteralContent, 5, 5)
        .finish();
    let doc = Document::new("key |");
    let cx = IndentContext::new(&doc, 5, 2, 4);
    let content = tree.node(tree.root()).children()[0];

    assert_eq!(block_rule(&tree, content, &cx), Rule::Continue);
    assert_eq!(block_rule(&tree, tree.root(), &cx), Rule::Indent(2));
}

#[test]
fn test_block_sequence_aligns_with_its_column() {
    // "key:\n  - a\n"
    let text = "key:\n  - a\n";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 11)
        .open("block_mapping", NodeKind::BlockMapping, 0, 10)
        .open("block_mapping_pair", NodeKind::Pair, 0, 10)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .open("block_sequence", NodeKind::BlockSequence, 7, 10)
        .open("block_sequence_item", NodeKind::Other, 7, 10)
        .leaf("-", NodeKind::Other, 7, 8)
        .leaf("plain_scalar", NodeKind::Literal, 9, 10)
        .finish();

    assert_eq!(indent_at(&tree, text, 10, 2), Some(2));
    assert_eq!(indent_at(&tree, text, 10, 4), Some(2));
}

#[test]
fn test_inline_value_end_aligns_with_mapping() {
    // "key: value\n"
    let text = "key: value\n";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 11)
        .open("block_mapping", NodeKind::BlockMapping, 0, 10)
        .open("block_mapping_pair", NodeKind::Pair, 0, 10)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .leaf("plain_scalar", NodeKind::Literal, 5, 10)
        .finish();

    assert_eq!(indent_at(&tree, text, 10, 2), Some(0));
    // Mid-token, after other content on the line: no opinion.
    assert_eq!(indent_at(&tree, text, 7, 2), None);
}

#[test]
fn test_scalar_starting_its_line_keeps_its_column_even_mid_token() {
    // "key:\n  value"
    let text = "key:\n  value";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 12)
        .open("block_mapping", NodeKind::BlockMapping, 0, 12)
        .open("block_mapping_pair", NodeKind::Pair, 0, 12)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .leaf("plain_scalar", NodeKind::Literal, 7, 12)
        .finish();

    assert_eq!(indent_at(&tree, text, 12, 2), Some(2));
    // Intended: the column rule is checked before the mid-token defer, so
    // only scalars that follow other content on their line defer.
    assert_eq!(indent_at(&tree, text, 9, 2), Some(2));
}

#[test]
fn test_quoted_scalar_always_defers() {
    // "key: \"a b\"\n" and "key:\n  \"a b\"\n"
    let inline = "key: \"a b\"\n";
    let inline_tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 11)
        .open("block_mapping", NodeKind::BlockMapping, 0, 10)
        .open("block_mapping_pair", NodeKind::Pair, 0, 10)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .leaf("double_quote_scalar", NodeKind::QuotedLiteral, 5, 10)
        .finish();
    for pos in 6..=9 {
        assert_eq!(indent_at(&inline_tree, inline, pos, 2), None, "pos {pos}");
    }

    // Unlike a plain scalar, starting its own line does not help.
    let own_line = "key:\n  \"a b\"\n";
    let own_line_tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 13)
        .open("block_mapping", NodeKind::BlockMapping, 0, 12)
        .open("block_mapping_pair", NodeKind::Pair, 0, 12)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .leaf("double_quote_scalar", NodeKind::QuotedLiteral, 7, 12)
        .finish();
    assert_eq!(indent_at(&own_line_tree, own_line, 12, 2), None);
}

#[test]
fn test_exhausted_climb_defers() {
    // "key: 1\n\n\n"
    let text = "key: 1\n\n\n";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 9)
        .open("block_mapping", NodeKind::BlockMapping, 0, 6)
        .open("block_mapping_pair", NodeKind::Pair, 0, 6)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .leaf("plain_scalar", NodeKind::Literal, 5, 6)
        .finish();

    assert_eq!(indent_at(&tree, text, 9, 2), None);
}

#[test]
fn test_repeated_queries_agree() {
    let text = "a:\n  key: |\n";
    let tree = nested_block_literal();
    let doc = Document::new(text);
    for pos in 0..=text.len() {
        let cx = IndentContext::new(&doc, pos, 2, 4);
        assert_eq!(block_indent(&tree, &cx), block_indent(&tree, &cx), "pos {pos}");
    }
}

#[test]
fn test_base_indent_skips_lines_owned_by_other_nodes() {
    // "k: \"a\n  b\" c\n" -- the second line starts inside the quoted scalar,
    // so a node starting on it is measured from the first line.
    let text = "k: \"a\n  b\" c\n";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 13)
        .open("block_mapping", NodeKind::BlockMapping, 0, 12)
        .leaf("double_quote_scalar", NodeKind::QuotedLiteral, 3, 10)
        .leaf("block_scalar", NodeKind::BlockLiteral, 11, 12)
        .finish();
    let doc = Document::new(text);
    let cx = IndentContext::new(&doc, 12, 2, 4);
    let literal = tree.node(tree.root()).children()[0];
    let literal = tree.node(literal).children()[1];

    assert_eq!(cx.line_indent(11), 2);
    assert_eq!(cx.base_indent_for(&tree, literal), 0);
}

// "key: {\n}\n"
fn empty_flow_mapping() -> SyntaxTree {
    SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 9)
        .open("block_mapping", NodeKind::BlockMapping, 0, 8)
        .open("block_mapping_pair", NodeKind::Pair, 0, 8)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .open("flow_mapping", NodeKind::FlowMapping, 5, 8)
        .leaf("{", NodeKind::Other, 5, 6)
        .leaf("}", NodeKind::Other, 7, 8)
        .finish()
}

#[test]
fn test_delimited_indent_unaligned() {
    let text = "key: {\n}\n";
    let tree = empty_flow_mapping();
    let flow = tree.find(NodeKind::FlowMapping).unwrap();
    let doc = Document::new(text);

    let open = IndentContext::new(&doc, 6, 2, 4);
    assert_eq!(delimited_indent(&tree, flow, &open, '}'), 2);

    let closing = IndentContext::new(&doc, 7, 2, 4);
    assert_eq!(delimited_indent(&tree, flow, &closing, '}'), 0);
}

#[test]
fn test_delimited_indent_aligns_with_content_after_bracket() {
    // "key: { a: 1,\n}"
    let text = "key: { a: 1,\n}";
    let tree = SyntaxTree::builder("nestml")
        .open("stream", NodeKind::Stream, 0, 14)
        .open("block_mapping", NodeKind::BlockMapping, 0, 14)
        .open("block_mapping_pair", NodeKind::Pair, 0, 14)
        .leaf("plain_scalar", NodeKind::Literal, 0, 3)
        .leaf(":", NodeKind::Other, 3, 4)
        .open("flow_mapping", NodeKind::FlowMapping, 5, 14)
        .leaf("{", NodeKind::Other, 5, 6)
        .open("flow_pair", NodeKind::Pair, 7, 11)
        .leaf("plain_scalar", NodeKind::Literal, 7, 8)
        .leaf(":", NodeKind::Other, 8, 9)
        .leaf("plain_scalar", NodeKind::Literal, 10, 11)
        .close()
        .leaf(",", NodeKind::Other, 11, 12)
        .leaf("}", NodeKind::Other, 13, 14)
        .finish();
    let flow = tree.find(NodeKind::FlowMapping).unwrap();
    let doc = Document::new(text);

    let inside = IndentContext::new(&doc, 12, 2, 4);
    assert_eq!(delimited_indent(&tree, flow, &inside, '}'), 7);

    let closing = IndentContext::new(&doc, 13, 2, 4);
    assert_eq!(delimited_indent(&tree, flow, &closing, '}'), 5);
}
