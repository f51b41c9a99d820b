//! Indentation inference for NESTML's block structure.
//!
//! Block-style nesting is carried by leading whitespace alone, so the indent
//! of a new line has to echo the construct that is still open at the cursor
//! rather than the previous line's raw whitespace. [`block_indent`] climbs
//! from the node just before the cursor through every ancestor that has not
//! closed yet and lets the first matching [`block_rule`] decide.
//!
//! Flow collections (`{ ... }`, `[ ... ]`) use bracket-relative indentation
//! instead, see [`delimited_indent`].

use crate::document::{count_column, indentation_width, Document};
use crate::kind::NodeKind;
use crate::tree::{NodeId, Side, SyntaxTree};

/// Per-query view of the document used by the indentation rules.
pub struct IndentContext<'a> {
    doc: &'a Document,
    /// Byte offset at which the new line is being inserted.
    pub pos: usize,
    /// Columns per nesting level.
    pub unit: usize,
    /// Tab stop width used when measuring columns.
    pub tab_size: usize,
}

impl<'a> IndentContext<'a> {
    /// Context for a query at `pos`, clamped to the document and to a
    /// character boundary.
    #[must_use]
    pub fn new(doc: &'a Document, pos: usize, unit: usize, tab_size: usize) -> Self {
        Self {
            doc,
            pos: doc.char_floor(pos),
            unit,
            tab_size,
        }
    }

    /// The document being queried.
    #[must_use]
    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    /// Tab-aware column of `pos` within its line.
    #[must_use]
    pub fn column(&self, pos: usize) -> usize {
        let line = self.doc.line_at(pos);
        count_column(line.text, self.tab_size, pos.saturating_sub(line.from))
    }

    /// Width of the leading whitespace of the line containing `pos`.
    #[must_use]
    pub fn line_indent(&self, pos: usize) -> usize {
        indentation_width(self.doc.line_at(pos).text, self.tab_size)
    }

    /// Indentation of the reference line of `id`.
    ///
    /// That is the line the node starts on, unless the start of that line
    /// is covered by a node that does not contain `id` (a multi-line scalar
    /// ending on it, say); then the line where that node starts is used
    /// instead, repeatedly.
    #[must_use]
    pub fn base_indent_for(&self, tree: &SyntaxTree, id: NodeId) -> usize {
        let mut line = self.doc.line_at(tree.node(id).from);
        loop {
            let mut at_break = tree.resolve(line.from, Side::Around);
            while let Some(parent) = tree.node(at_break).parent() {
                if tree.node(parent).from != tree.node(at_break).from {
                    break;
                }
                at_break = parent;
            }
            if tree.is_ancestor_or_self(at_break, id) {
                break;
            }
            line = self.doc.line_at(tree.node(at_break).from);
        }
        self.line_indent(line.from)
    }

    /// Rest of the cursor's line after the cursor.
    #[must_use]
    pub fn text_after(&self) -> &'a str {
        let line = self.doc.line_at(self.pos);
        self.doc.slice(self.pos, line.to)
    }
}

/// Outcome of testing one ancestor against the block rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Indent the new line to this column.
    Indent(usize),
    /// No opinion: the host should use its default strategy.
    Defer,
    /// This node does not decide; try its parent.
    Continue,
}

/// Evaluate the block indentation rules for a single node.
///
/// Rules are tried in a fixed order and the first that applies wins:
/// block literal content, block literal header, block sequence or mapping,
/// quoted scalar, plain scalar.
#[must_use]
pub fn block_rule(tree: &SyntaxTree, id: NodeId, cx: &IndentContext<'_>) -> Rule {
    let node = tree.node(id);
    match node.kind {
        NodeKind::BlockLiteralContent if !node.is_empty() => {
            Rule::Indent(cx.base_indent_for(tree, id))
        }
        NodeKind::BlockLiteral => Rule::Indent(cx.base_indent_for(tree, id) + cx.unit),
        NodeKind::BlockSequence | NodeKind::BlockMapping => Rule::Indent(cx.column(node.from)),
        // Quoted scalars may hold arbitrary whitespace.
        NodeKind::QuotedLiteral => Rule::Defer,
        NodeKind::Literal => {
            let column = cx.column(node.from);
            if column == cx.line_indent(node.from) {
                Rule::Indent(column)
            } else if node.to > cx.pos {
                Rule::Defer
            } else {
                Rule::Continue
            }
        }
        _ => Rule::Continue,
    }
}

/// Indentation for a new line at `cx.pos`, or `None` to defer to the host.
#[must_use]
pub fn block_indent(tree: &SyntaxTree, cx: &IndentContext<'_>) -> Option<usize> {
    let start = tree.resolve(cx.pos, Side::Before);
    for id in tree.ancestors(start) {
        let node = tree.node(id);
        if node.to < cx.pos {
            break;
        }
        match block_rule(tree, id, cx) {
            Rule::Indent(column) => {
                tracing::trace!(node = node.name, column, "block indent");
                return Some(column);
            }
            Rule::Defer => {
                tracing::trace!(node = node.name, "block indent deferred");
                return None;
            }
            Rule::Continue => {}
        }
    }
    None
}

/// Indentation inside a bracketed node closed by `closing`.
///
/// When the opening bracket is followed by content on its own line, lines
/// align with that content (or with the bracket itself when the line starts
/// with the closing bracket). Otherwise they are indented one unit past the
/// node's base indentation, or not at all before the closing bracket.
#[must_use]
pub fn delimited_indent(
    tree: &SyntaxTree,
    id: NodeId,
    cx: &IndentContext<'_>,
    closing: char,
) -> usize {
    let closed = cx.text_after().trim_start().starts_with(closing);
    if let Some((open_from, aligned_to)) = bracketed_aligned(tree, id, cx) {
        return if closed {
            cx.column(open_from)
        } else {
            cx.column(aligned_to)
        };
    }
    cx.base_indent_for(tree, id) + if closed { 0 } else { cx.unit }
}

fn bracketed_aligned(
    tree: &SyntaxTree,
    id: NodeId,
    cx: &IndentContext<'_>,
) -> Option<(usize, usize)> {
    let children = tree.node(id).children();
    let open = tree.node(*children.first()?);
    let last = *children.last()?;
    let open_line = cx.doc().line_at(open.from);

    for &child in &children[1..] {
        if child == last {
            return None;
        }
        let next = tree.node(child);
        if next.kind.is_skipped() {
            continue;
        }
        if next.from >= open_line.to {
            return None;
        }
        let rest = open_line
            .text
            .get(open.to.saturating_sub(open_line.from)..)
            .unwrap_or("");
        let space = rest.len() - rest.trim_start_matches(' ').len();
        return Some((open.from, open.to + space));
    }
    None
}

#[cfg(test)]
#[path = "tests/indent.rs"]
mod tests;
