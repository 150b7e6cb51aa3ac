// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Node arena for the suffix tree.
//!
//! Every node except the root owns the edge leading into it, labeled
//! `text[start..end)`. Labels are offsets into the corpus, never copies.
//! Leaves of the document under construction have an open end that tracks the
//! last processed symbol; once the document's sentinel is in, they are closed.

use std::collections::BTreeMap;

use super::corpus::Symbol;

/// Arena index of a node.
pub type NodeId = usize;

/// The root is always the first node.
pub const ROOT: NodeId = 0;

/// Where an edge label ends (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// Grows with every symbol of the current document.
    Open,
    Closed(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub start: usize,
    pub end: End,
    /// Children keyed by the first symbol of their edge label.
    pub children: BTreeMap<Symbol, NodeId>,
    /// Global start offset of the suffix this leaf spells. `None` for internal nodes.
    pub suffix_start: Option<usize>,
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.suffix_start.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    /// Resolved end for `End::Open` labels.
    leaf_end: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Tree {
            nodes: vec![Node {
                start: 0,
                end: End::Closed(0),
                children: BTreeMap::new(),
                suffix_start: None,
            }],
            leaf_end: 0,
        }
    }
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Advance the end shared by all open leaves.
    #[inline]
    pub fn set_leaf_end(&mut self, end: usize) {
        self.leaf_end = end;
    }

    #[inline]
    pub fn end_of(&self, id: NodeId) -> usize {
        match self.nodes[id].end {
            End::Open => self.leaf_end,
            End::Closed(end) => end,
        }
    }

    /// Length of the edge label leading into `id`.
    #[inline]
    pub fn edge_len(&self, id: NodeId) -> usize {
        self.end_of(id) - self.nodes[id].start
    }

    #[inline]
    pub fn child(&self, id: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.nodes[id].children.get(&symbol).copied()
    }

    /// Hang a new open leaf under `parent`, labeled from `start`.
    pub fn add_leaf(&mut self, parent: NodeId, text: &[Symbol], start: usize, suffix_start: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            start,
            end: End::Open,
            children: BTreeMap::new(),
            suffix_start: Some(suffix_start),
        });
        self.nodes[parent].children.insert(text[start], id);
        id
    }

    /// Split the edge into `child` (a child of `parent`) after `at` symbols.
    ///
    /// Returns the new internal node sitting between `parent` and `child`.
    pub fn split(&mut self, parent: NodeId, child: NodeId, text: &[Symbol], at: usize) -> NodeId {
        let start = self.nodes[child].start;
        debug_assert!(
            at > 0 && at < self.edge_len(child),
            "INVARIANT: split point {} must fall strictly inside an edge of length {}",
            at,
            self.edge_len(child)
        );

        let id = self.nodes.len();
        let mut children = BTreeMap::new();
        children.insert(text[start + at], child);
        self.nodes.push(Node {
            start,
            end: End::Closed(start + at),
            children,
            suffix_start: None,
        });
        self.nodes[child].start = start + at;
        self.nodes[parent].children.insert(text[start], id);
        id
    }

    /// Pin an open leaf to the current end.
    pub fn close(&mut self, id: NodeId) {
        if self.nodes[id].end == End::Open {
            self.nodes[id].end = End::Closed(self.leaf_end);
        }
    }

    /// Suffix start offsets of every leaf below `id` (inclusive).
    pub fn leaves_below(&self, id: NodeId) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if let Some(start) = node.suffix_start {
                out.push(start);
            }
            stack.extend(node.children.values().copied());
        }
        out
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}
