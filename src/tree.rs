//! Owned concrete syntax trees.
//!
//! tree-sitter trees borrow their parser's language and are awkward to
//! compose, so every parse is converted into a [`SyntaxTree`]: a flat arena
//! of [`SyntaxNode`]s with parent and child links. The arena form makes it
//! cheap to mount one grammar's tree inside another's region, and lets the
//! indentation rules be exercised against hand-built trees.

use crate::kind::NodeKind;
use serde::Serialize;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

/// Which nodes [`SyntaxTree::resolve`] may enter at a boundary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Enter nodes that end at the position, not ones that start there.
    Before,
    /// Enter only nodes that strictly surround the position.
    Around,
    /// Enter nodes that start at the position, not ones that end there.
    After,
}

impl Side {
    fn enters(self, node: &SyntaxNode, pos: usize) -> bool {
        match self {
            Self::Before => node.from < pos && node.to >= pos,
            Self::Around => node.from < pos && node.to > pos,
            Self::After => node.from <= pos && node.to > pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A node of a concrete syntax tree with absolute byte coordinates.
pub struct SyntaxNode {
    /// Grammar rule name, e.g. `block_mapping`.
    pub name: &'static str,
    /// Closed classification of `name`.
    pub kind: NodeKind,
    /// Field name under which the parent holds this node, if any.
    pub field: Option<&'static str>,
    /// Name of the grammar that produced the node.
    pub grammar: &'static str,
    /// Byte offset where the node starts.
    pub from: usize,
    /// Byte offset where the node ends (exclusive).
    pub to: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SyntaxNode {
    /// Containing node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Arena of nodes; `NodeId(0)` is always the root.
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// A tree consisting of a single root node spanning `0..len`.
    #[must_use]
    pub fn leaf(grammar: &'static str, name: &'static str, kind: NodeKind, len: usize) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.push(None, grammar, name, kind, 0, len);
        tree
    }

    /// Start building a tree by hand, mostly for tests.
    #[must_use]
    pub fn builder(grammar: &'static str) -> TreeBuilder {
        TreeBuilder {
            grammar,
            tree: Self { nodes: Vec::new() },
            stack: Vec::new(),
        }
    }

    /// Convert a tree-sitter parse of `text`, classifying node kinds with `classify`.
    ///
    /// Anonymous tokens are kept. A [`NodeKind::BlockLiteral`] spanning
    /// several lines gains a synthetic `block_scalar_content` child, after
    /// its header tokens, covering the lines after the header line.
    #[must_use]
    pub fn from_tree_sitter(
        tree: &tree_sitter::Tree,
        text: &str,
        grammar: &'static str,
        classify: impl Fn(&str) -> NodeKind,
    ) -> Self {
        let mut out = Self { nodes: Vec::new() };
        let mut cursor = tree.walk();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut block_literals = Vec::new();

        'walk: loop {
            let node = cursor.node();
            let kind = classify(node.kind());
            let id = out.push(
                stack.last().copied(),
                grammar,
                node.kind(),
                kind,
                node.start_byte(),
                node.end_byte(),
            );
            out.nodes[id.0].field = cursor.field_name();

            if kind == NodeKind::BlockLiteral {
                block_literals.push(id);
            }

            if cursor.goto_first_child() {
                stack.push(id);
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    break 'walk;
                }
                stack.pop();
            }
        }

        // Header tokens are already in place, so the content lands last.
        for id in block_literals {
            out.split_block_literal(id, text);
        }
        out
    }

    fn split_block_literal(&mut self, id: NodeId, text: &str) {
        let (from, to) = (self.nodes[id.0].from, self.nodes[id.0].to);
        let Some(token) = text.get(from..to) else {
            return;
        };
        if let Some(newline) = token.find('\n') {
            let content_from = from + newline + 1;
            if content_from < to {
                let grammar = self.nodes[id.0].grammar;
                self.push(
                    Some(id),
                    grammar,
                    "block_scalar_content",
                    NodeKind::BlockLiteralContent,
                    content_from,
                    to,
                );
            }
        }
    }

    fn push(
        &mut self,
        parent: Option<NodeId>,
        grammar: &'static str,
        name: &'static str,
        kind: NodeKind,
        from: usize,
        to: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SyntaxNode {
            name,
            kind,
            field: None,
            grammar,
            from,
            to,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to a different tree and is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes (never true for trees built by this crate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Innermost node around `pos`, entering boundary nodes according to `side`.
    #[must_use]
    pub fn resolve(&self, pos: usize, side: Side) -> NodeId {
        let mut current = self.root();
        'descend: loop {
            for &child in &self.nodes[current.0].children {
                if side.enters(&self.nodes[child.0], pos) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// `id` followed by each of its ancestors up to the root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }

    /// `id` and every node below it, in document (pre-)order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.nodes[next.0].children.iter().rev());
        }
        out
    }

    /// First node of the given kind in document order.
    #[must_use]
    pub fn find(&self, kind: NodeKind) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| self.nodes[id.0].kind == kind)
    }

    /// Attach `sub` as the last child of `parent`, shifting its spans by `offset`.
    ///
    /// Returns the id of the mounted root.
    pub fn mount(&mut self, parent: NodeId, sub: SyntaxTree, offset: usize) -> NodeId {
        let base = self.nodes.len();
        let shift = |id: NodeId| NodeId(id.0 + base);
        for mut node in sub.nodes {
            node.from += offset;
            node.to += offset;
            node.parent = Some(node.parent.map_or(parent, shift));
            for child in &mut node.children {
                *child = shift(*child);
            }
            self.nodes.push(node);
        }
        let root = NodeId(base);
        self.nodes[parent.0].children.push(root);
        root
    }
}

/// Iterator over a node and its ancestors, innermost first.
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.nodes[current.0].parent;
        Some(current)
    }
}

/// Incremental construction of a [`SyntaxTree`] in document order.
pub struct TreeBuilder {
    grammar: &'static str,
    tree: SyntaxTree,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    /// Add a node under the currently open node and make it the open node.
    #[must_use]
    pub fn open(mut self, name: &'static str, kind: NodeKind, from: usize, to: usize) -> Self {
        let id = self.add(name, kind, from, to);
        self.stack.push(id);
        self
    }

    /// Add a childless node under the currently open node.
    #[must_use]
    pub fn leaf(mut self, name: &'static str, kind: NodeKind, from: usize, to: usize) -> Self {
        self.add(name, kind, from, to);
        self
    }

    /// Set the field name of the most recently added node.
    #[must_use]
    pub fn field(mut self, field: &'static str) -> Self {
        if let Some(node) = self.tree.nodes.last_mut() {
            node.field = Some(field);
        }
        self
    }

    /// Return to the parent of the currently open node.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.stack.pop();
        self
    }

    /// Finish the tree. An empty builder yields a zero-length `Other` root.
    #[must_use]
    pub fn finish(self) -> SyntaxTree {
        if self.tree.is_empty() {
            return SyntaxTree::leaf(self.grammar, "root", NodeKind::Other, 0);
        }
        self.tree
    }

    fn add(&mut self, name: &'static str, kind: NodeKind, from: usize, to: usize) -> NodeId {
        let parent = self.stack.last().copied();
        self.tree.push(parent, self.grammar, name, kind, from, to)
    }
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
