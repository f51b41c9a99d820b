//! Closed classification of syntax node names.
//!
//! Grammars name their nodes with free-form strings. Everything downstream
//! (indentation rules, highlighting, folding, region routing) matches on
//! [`NodeKind`] instead, so a renamed or unknown node lands in
//! [`NodeKind::Other`] rather than silently matching the wrong rule.

use serde::Serialize;

/// Structural category of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Root of a NESTML parse.
    Stream,
    /// A single document inside a stream.
    Document,
    /// Indentation-delimited `key: value` container.
    BlockMapping,
    /// Indentation-delimited `- item` container.
    BlockSequence,
    /// Bracketed `{ ... }` mapping.
    FlowMapping,
    /// Bracketed `[ ... ]` sequence.
    FlowSequence,
    /// A key/value entry of a block or flow mapping.
    Pair,
    /// Block scalar introduced by a `|` or `>` header.
    BlockLiteral,
    /// Body lines of a block scalar, after the header line.
    BlockLiteralContent,
    /// Single- or double-quoted scalar.
    QuotedLiteral,
    /// Plain (unquoted) scalar.
    Literal,
    /// `#` comment.
    Comment,
    /// `&name` anchor.
    Anchor,
    /// `*name` alias.
    Alias,
    /// `!tag` annotation.
    Tag,
    /// `%YAML` / `%TAG` directive.
    Directive,
    /// `---` or `...` inside a NESTML stream.
    DocumentMarker,
    /// Root of a frontmatter envelope parse.
    Envelope,
    /// A line consisting of three dashes in the envelope.
    DashLine,
    /// Region between the two dash lines.
    FrontmatterContent,
    /// Everything after the front section (or the whole text without one).
    Body,
    /// Any node the classifier does not know.
    Other,
}

impl NodeKind {
    /// Classify a tree-sitter-yaml node kind.
    #[must_use]
    pub fn from_yaml(kind: &str) -> Self {
        match kind {
            "stream" => Self::Stream,
            "document" => Self::Document,
            "block_mapping" => Self::BlockMapping,
            "block_sequence" => Self::BlockSequence,
            "flow_mapping" => Self::FlowMapping,
            "flow_sequence" => Self::FlowSequence,
            "block_mapping_pair" | "flow_pair" => Self::Pair,
            "block_scalar" => Self::BlockLiteral,
            "double_quote_scalar" | "single_quote_scalar" => Self::QuotedLiteral,
            "plain_scalar" => Self::Literal,
            "comment" => Self::Comment,
            "anchor" => Self::Anchor,
            "alias" => Self::Alias,
            "tag" => Self::Tag,
            "yaml_directive" | "tag_directive" | "reserved_directive" => Self::Directive,
            "---" | "..." => Self::DocumentMarker,
            _ => Self::Other,
        }
    }

    /// Whether nodes of this kind are trivia between meaningful siblings.
    #[must_use]
    pub fn is_skipped(self) -> bool {
        matches!(self, Self::Comment)
    }
}
