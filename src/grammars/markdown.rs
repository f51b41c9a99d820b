//! Markdown grammar using tree-sitter-md, the usual body under a front section.

use crate::grammars::Grammar;

/// Markdown block structure via tree-sitter-md.
///
/// Every node classifies as [`NodeKind::Other`](crate::kind::NodeKind::Other):
/// the crate only routes markdown text, it does not interpret it.
pub struct MarkdownGrammar;

impl Grammar for MarkdownGrammar {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }
}
