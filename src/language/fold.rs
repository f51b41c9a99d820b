//! Foldable ranges.
//!
//! Flow collections fold the text between their brackets; block sequences,
//! pairs and block scalars fold everything after their first line.

use crate::document::Document;
use crate::grammars::yaml;
use crate::kind::NodeKind;
use crate::tree::{NodeId, Side, SyntaxTree};
use serde::Serialize;

/// A range an editor may collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldRange {
    /// First hidden offset.
    pub from: usize,
    /// End of the hidden text (exclusive).
    pub to: usize,
}

/// The fold a single node offers, before checking it against its line.
#[must_use]
pub fn fold_for(tree: &SyntaxTree, id: NodeId, doc: &Document) -> Option<FoldRange> {
    let node = tree.node(id);
    if node.grammar != yaml::NAME {
        return None;
    }
    match node.kind {
        NodeKind::FlowMapping | NodeKind::FlowSequence => fold_inside(tree, id),
        NodeKind::BlockSequence | NodeKind::Pair | NodeKind::BlockLiteral => Some(FoldRange {
            from: doc.line_at(node.from).to,
            to: node.to,
        }),
        _ => None,
    }
}

fn fold_inside(tree: &SyntaxTree, id: NodeId) -> Option<FoldRange> {
    let node = tree.node(id);
    let first = tree.node(*node.children().first()?);
    let last = tree.node(*node.children().last()?);
    (first.to < last.from).then(|| FoldRange {
        from: first.to,
        to: if last.name == "ERROR" { node.to } else { last.from },
    })
}

/// The outermost fold that starts on line `number` and ends past it.
#[must_use]
pub fn fold_at_line(tree: &SyntaxTree, doc: &Document, number: usize) -> Option<FoldRange> {
    let line = doc.line(number);
    let (start, end) = (line.from, line.to);
    let mut found = None;
    for id in tree.ancestors(tree.resolve(end, Side::After)) {
        let node = tree.node(id);
        if node.to <= end || node.from > end {
            continue;
        }
        if found.is_some() && node.from < start {
            break;
        }
        if let Some(range) = fold_for(tree, id, doc) {
            if range.from <= end && range.from >= start && range.to > end {
                found = Some(range);
            }
        }
    }
    found
}

/// Folds for every line that has one, top to bottom.
#[must_use]
pub fn folds(tree: &SyntaxTree, doc: &Document) -> Vec<FoldRange> {
    (1..=doc.line_count())
        .filter_map(|number| fold_at_line(tree, doc, number))
        .collect()
}
