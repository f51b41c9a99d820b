//! Highlight categories for NESTML and frontmatter nodes.

use crate::frontmatter;
use crate::grammars::yaml;
use crate::kind::NodeKind;
use crate::tree::{NodeId, SyntaxTree};
use serde::Serialize;

/// Semantic category a theme maps to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HighlightTag {
    /// `# ...`
    LineComment,
    /// Quoted scalar value.
    String,
    /// Block scalar header (`|`, `>-`, ...).
    Special,
    /// Plain scalar value or block scalar body.
    Content,
    /// Mapping key.
    PropertyName,
    /// Anchor or alias name.
    LabelName,
    /// Tag annotation.
    TypeName,
    /// Directive name.
    Keyword,
    /// Document and frontmatter delimiters.
    Meta,
    /// `:`, `,` and `-`.
    Separator,
    /// `?`
    Punctuation,
    /// `[` and `]`
    SquareBracket,
    /// `{` and `}`
    Brace,
}

/// A highlighted byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    /// Start offset.
    pub from: usize,
    /// End offset (exclusive).
    pub to: usize,
    /// Category of the range.
    pub tag: HighlightTag,
}

/// Category of a single node, if it has one.
#[must_use]
pub fn tag_for(tree: &SyntaxTree, id: NodeId) -> Option<HighlightTag> {
    let node = tree.node(id);
    if node.grammar == frontmatter::NAME {
        return (node.kind == NodeKind::DashLine).then_some(HighlightTag::Meta);
    }
    if node.grammar != yaml::NAME {
        return None;
    }
    let tag = match node.kind {
        NodeKind::Comment => HighlightTag::LineComment,
        NodeKind::Literal | NodeKind::QuotedLiteral if is_key(tree, id) => {
            HighlightTag::PropertyName
        }
        NodeKind::QuotedLiteral => HighlightTag::String,
        NodeKind::Literal | NodeKind::BlockLiteralContent => HighlightTag::Content,
        NodeKind::BlockLiteral => HighlightTag::Special,
        NodeKind::Anchor | NodeKind::Alias => HighlightTag::LabelName,
        NodeKind::Tag => HighlightTag::TypeName,
        NodeKind::Directive => HighlightTag::Keyword,
        NodeKind::DocumentMarker => HighlightTag::Meta,
        NodeKind::Other => match node.name {
            ":" | "," | "-" => HighlightTag::Separator,
            "?" => HighlightTag::Punctuation,
            "[" | "]" => HighlightTag::SquareBracket,
            "{" | "}" => HighlightTag::Brace,
            _ => return None,
        },
        _ => return None,
    };
    Some(tag)
}

/// Highlighted ranges of every tagged node, in document order.
///
/// Block scalars contribute their header line only; the body is reported by
/// the nested content node.
#[must_use]
pub fn highlights(tree: &SyntaxTree) -> Vec<HighlightSpan> {
    tree.descendants(tree.root())
        .into_iter()
        .filter_map(|id| {
            let tag = tag_for(tree, id)?;
            let node = tree.node(id);
            let to = if tag == HighlightTag::Special {
                header_end(tree, id)
            } else {
                node.to
            };
            (to > node.from).then_some(HighlightSpan {
                from: node.from,
                to,
                tag,
            })
        })
        .collect()
}

/// End of a block scalar's header: its last header token, or the line
/// break before its content when the grammar produced no header tokens.
fn header_end(tree: &SyntaxTree, id: NodeId) -> usize {
    let node = tree.node(id);
    let mut end = node.from;
    let mut content = None;
    for &child in node.children() {
        let child = tree.node(child);
        match child.kind {
            NodeKind::BlockLiteralContent => content = Some(child.from),
            NodeKind::Comment => {}
            _ => end = end.max(child.to),
        }
    }
    if end > node.from {
        return end;
    }
    content.map_or(node.to, |from| from.saturating_sub(1).max(node.from))
}

/// Whether a scalar sits in the key position of a pair.
fn is_key(tree: &SyntaxTree, id: NodeId) -> bool {
    for ancestor in tree.ancestors(id) {
        let node = tree.node(ancestor);
        if node.field == Some("key") {
            return true;
        }
        if ancestor != id && node.kind != NodeKind::Other {
            return false;
        }
    }
    false
}
