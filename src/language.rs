//! Editor-facing language support.
//!
//! [`LanguageSupport`] bundles everything an editor needs for plain NESTML
//! documents; [`FrontmatterSupport`] does the same for documents that put a
//! NESTML front section before a body in another language. Both answer
//! queries over the [`SyntaxTree`] produced by their own `parse`.

pub mod complete;
pub mod fold;
pub mod highlight;

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::grammars::yaml::{self, NestmlGrammar};
use crate::grammars::Grammar;
use crate::indent::{block_indent, delimited_indent, IndentContext};
use crate::kind::NodeKind;
use crate::mixed::{self, MixedParser};
use crate::tree::{Side, SyntaxTree};
use complete::CompletionResult;
use fold::FoldRange;
use highlight::HighlightSpan;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Line comment marker.
pub const COMMENT_TOKEN: &str = "#";

static INDENT_ON_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\]\}]$").expect("indent trigger pattern is valid"));

/// Whether typing produced a line that should be re-indented.
///
/// `line_before_cursor` is the current line up to the cursor; a line holding
/// only a closing bracket triggers.
#[must_use]
pub fn should_reindent(line_before_cursor: &str) -> bool {
    INDENT_ON_INPUT.is_match(line_before_cursor)
}

/// Indentation for a new line at `cx.pos`, or `None` to defer to the host.
///
/// The innermost node around the cursor that owns a strategy decides: flow
/// collections indent relative to their brackets, a NESTML stream (or a
/// region whose mounted tree is one) uses the block rules.
#[must_use]
pub fn indentation(tree: &SyntaxTree, cx: &IndentContext<'_>) -> Option<usize> {
    for id in tree.ancestors(tree.resolve(cx.pos, Side::Around)) {
        match tree.node(id).kind {
            NodeKind::FlowMapping => return Some(delimited_indent(tree, id, cx, '}')),
            NodeKind::FlowSequence => return Some(delimited_indent(tree, id, cx, ']')),
            NodeKind::Stream => return block_indent(tree, cx),
            NodeKind::FrontmatterContent | NodeKind::Body => {
                let root = mixed::mounted(tree, id)?;
                return match tree.node(root).kind {
                    NodeKind::Stream => block_indent(tree, cx),
                    _ => None,
                };
            }
            _ => {}
        }
    }
    None
}

/// Language support for NESTML documents.
pub struct LanguageSupport {
    grammar: NestmlGrammar,
    config: Config,
}

#[allow(clippy::unused_self)]
impl LanguageSupport {
    /// Support configured with the given indentation settings.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            grammar: NestmlGrammar,
            config,
        }
    }

    /// Language name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        yaml::NAME
    }

    /// Active indentation settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The grammar used by [`parse`](Self::parse).
    #[must_use]
    pub fn grammar(&self) -> &dyn Grammar {
        &self.grammar
    }

    /// Parse a NESTML document.
    #[must_use]
    pub fn parse(&self, text: &str) -> SyntaxTree {
        self.grammar.parse(text)
    }

    /// Indentation for a new line inserted at `pos`, or `None` for no opinion.
    #[must_use]
    pub fn indentation(&self, tree: &SyntaxTree, doc: &Document, pos: usize) -> Option<usize> {
        let cx = IndentContext::new(doc, pos, self.config.indent_unit, self.config.tab_size);
        indentation(tree, &cx)
    }

    /// Highlighted ranges.
    #[must_use]
    pub fn highlights(&self, tree: &SyntaxTree) -> Vec<HighlightSpan> {
        highlight::highlights(tree)
    }

    /// Foldable ranges, at most one per line.
    #[must_use]
    pub fn folds(&self, tree: &SyntaxTree, doc: &Document) -> Vec<FoldRange> {
        fold::folds(tree, doc)
    }

    /// Keyword completion at `pos`.
    #[must_use]
    pub fn complete(
        &self,
        doc: &Document,
        pos: usize,
        explicit: bool,
    ) -> Option<CompletionResult> {
        complete::complete(doc, pos, explicit)
    }

    /// Line comment marker.
    #[must_use]
    pub fn comment_token(&self) -> &'static str {
        COMMENT_TOKEN
    }

    /// See [`should_reindent`].
    #[must_use]
    pub fn should_reindent(&self, line_before_cursor: &str) -> bool {
        should_reindent(line_before_cursor)
    }
}

/// Language support for documents with a NESTML front section.
pub struct FrontmatterSupport {
    parser: MixedParser,
    config: Config,
}

#[allow(clippy::unused_self)]
impl FrontmatterSupport {
    /// Support for a NESTML front section followed by `body`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body grammar's language cannot be loaded.
    pub fn new(body: Arc<dyn Grammar>, config: Config) -> Result<Self> {
        Ok(Self {
            parser: mixed::nestml_frontmatter(body)?,
            config,
        })
    }

    /// Language name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        crate::frontmatter::NAME
    }

    /// The region parser.
    #[must_use]
    pub fn parser(&self) -> &MixedParser {
        &self.parser
    }

    /// Parse a composite document.
    #[must_use]
    pub fn parse(&self, text: &str) -> SyntaxTree {
        self.parser.parse(text)
    }

    /// Indentation for a new line at `pos`; dash lines and non-NESTML
    /// bodies get no opinion.
    #[must_use]
    pub fn indentation(&self, tree: &SyntaxTree, doc: &Document, pos: usize) -> Option<usize> {
        let cx = IndentContext::new(doc, pos, self.config.indent_unit, self.config.tab_size);
        indentation(tree, &cx)
    }

    /// Highlighted ranges: dash lines plus every NESTML region.
    #[must_use]
    pub fn highlights(&self, tree: &SyntaxTree) -> Vec<HighlightSpan> {
        highlight::highlights(tree)
    }

    /// Foldable ranges inside NESTML regions.
    #[must_use]
    pub fn folds(&self, tree: &SyntaxTree, doc: &Document) -> Vec<FoldRange> {
        fold::folds(tree, doc)
    }

    /// Keyword completion, offered inside the front section only.
    #[must_use]
    pub fn complete(
        &self,
        tree: &SyntaxTree,
        doc: &Document,
        pos: usize,
        explicit: bool,
    ) -> Option<CompletionResult> {
        let front = tree.node(mixed::front_section(tree)?);
        if pos < front.from || pos > front.to {
            return None;
        }
        complete::complete(doc, pos, explicit)
    }
}

#[cfg(test)]
#[path = "tests/language.rs"]
mod tests;
