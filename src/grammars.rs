//! Grammar trait and the tree-sitter grammars shipped with the crate.
//!
//! A [`Grammar`] is an opaque capability: something that can turn a text
//! into a [`SyntaxTree`]. The frontmatter splitter holds its body grammar
//! only through this trait, so any tree-sitter language can follow a
//! NESTML front section.

pub mod markdown;
pub mod yaml;

use crate::error::Result;
use crate::kind::NodeKind;
use crate::tree::SyntaxTree;
use tree_sitter::Parser;

/// A parser for one language, producing owned syntax trees.
pub trait Grammar: Send + Sync {
    /// Name recorded on every node this grammar produces.
    fn name(&self) -> &'static str;

    /// The tree-sitter language backing this grammar.
    fn language(&self) -> tree_sitter::Language;

    /// Map a tree-sitter node kind onto the closed [`NodeKind`] set.
    fn classify(&self, kind: &str) -> NodeKind {
        let _ = kind;
        NodeKind::Other
    }

    /// Check that the language can be loaded by the linked tree-sitter runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the language's ABI version is not supported.
    fn validate(&self) -> Result<()> {
        Parser::new().set_language(&self.language())?;
        Ok(())
    }

    /// Parse `text` into a tree whose spans start at 0.
    ///
    /// Never fails: if tree-sitter produces no tree, the result is a single
    /// `Other` leaf covering the text.
    fn parse(&self, text: &str) -> SyntaxTree {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&self.language()) {
            tracing::warn!(grammar = self.name(), error = %e, "language rejected by parser");
            return SyntaxTree::leaf(self.name(), "unparsed", NodeKind::Other, text.len());
        }
        match parser.parse(text, None) {
            Some(tree) => {
                SyntaxTree::from_tree_sitter(&tree, text, self.name(), |kind| self.classify(kind))
            }
            None => {
                tracing::warn!(grammar = self.name(), "parser produced no tree");
                SyntaxTree::leaf(self.name(), "unparsed", NodeKind::Other, text.len())
            }
        }
    }
}
