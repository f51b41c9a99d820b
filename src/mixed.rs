//! Two-level parsing of frontmatter documents.
//!
//! The envelope grammar ([`crate::frontmatter`]) only finds the regions.
//! [`MixedParser`] then hands each region's exact text to the grammar that
//! owns it and mounts the resulting tree under the region node, so the
//! envelope never needs to know what it wraps and the body grammar can be
//! swapped without touching the front section.

use crate::error::Result;
use crate::frontmatter;
use crate::grammars::yaml::NestmlGrammar;
use crate::grammars::Grammar;
use crate::kind::NodeKind;
use crate::tree::{NodeId, SyntaxTree};
use std::sync::Arc;

/// Envelope region that is parsed by a content grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Text between the dash lines.
    Front,
    /// Text after the front section.
    Body,
}

impl Region {
    /// The region an envelope node stands for, if any.
    #[must_use]
    pub fn of(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::FrontmatterContent => Some(Self::Front),
            NodeKind::Body => Some(Self::Body),
            _ => None,
        }
    }
}

/// Parser for documents made of an optional front section and a body.
#[derive(Clone)]
pub struct MixedParser {
    front: Arc<dyn Grammar>,
    body: Arc<dyn Grammar>,
}

impl MixedParser {
    /// Combine a front-section grammar with a body grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if either grammar's language cannot be loaded.
    pub fn new(front: Arc<dyn Grammar>, body: Arc<dyn Grammar>) -> Result<Self> {
        front.validate()?;
        body.validate()?;
        Ok(Self { front, body })
    }

    /// Grammar for the front section.
    #[must_use]
    pub fn front(&self) -> &dyn Grammar {
        self.front.as_ref()
    }

    /// Grammar for the body.
    #[must_use]
    pub fn body(&self) -> &dyn Grammar {
        self.body.as_ref()
    }

    /// Grammar that parses nodes of `kind`, or `None` for envelope leaves.
    #[must_use]
    pub fn route(&self, kind: NodeKind) -> Option<&dyn Grammar> {
        match Region::of(kind)? {
            Region::Front => Some(self.front()),
            Region::Body => Some(self.body()),
        }
    }

    /// Parse `text`, mounting each region's sub-tree under its envelope node.
    #[must_use]
    pub fn parse(&self, text: &str) -> SyntaxTree {
        let mut tree = frontmatter::parse(text);
        let regions: Vec<NodeId> = tree.node(tree.root()).children().to_vec();
        for id in regions {
            let (kind, from, to) = {
                let node = tree.node(id);
                (node.kind, node.from, node.to)
            };
            let Some(grammar) = self.route(kind) else {
                continue;
            };
            tracing::debug!(grammar = grammar.name(), from, to, "mounting region");
            let sub = grammar.parse(&text[from..to]);
            tree.mount(id, sub, from);
        }
        tree
    }
}

/// A frontmatter parser with a NESTML front section and `body` after it.
///
/// # Errors
///
/// Returns an error if the body grammar's language cannot be loaded.
pub fn nestml_frontmatter(body: Arc<dyn Grammar>) -> Result<MixedParser> {
    MixedParser::new(Arc::new(NestmlGrammar), body)
}

/// The front-section content node, if the document has one.
#[must_use]
pub fn front_section(tree: &SyntaxTree) -> Option<NodeId> {
    region(tree, NodeKind::FrontmatterContent)
}

/// The body node of an envelope tree.
#[must_use]
pub fn body(tree: &SyntaxTree) -> Option<NodeId> {
    region(tree, NodeKind::Body)
}

/// Root of the sub-tree mounted under a region node.
#[must_use]
pub fn mounted(tree: &SyntaxTree, region: NodeId) -> Option<NodeId> {
    tree.node(region).children().first().copied()
}

fn region(tree: &SyntaxTree, kind: NodeKind) -> Option<NodeId> {
    tree.node(tree.root())
        .children()
        .iter()
        .copied()
        .find(|&id| tree.node(id).kind == kind)
}

#[cfg(test)]
#[path = "tests/mixed.rs"]
mod tests;
