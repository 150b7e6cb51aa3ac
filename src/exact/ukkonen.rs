// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Online suffix tree construction (Ukkonen).
//!
//! All the fiddly bookkeeping lives in [`Builder`]: the active point
//! `(node, edge, length)`, the count of suffixes still waiting to be made
//! explicit, and the internal node waiting for its suffix link. One call to
//! [`Builder::extend`] processes exactly one symbol.
//!
//! # Per-symbol contract
//!
//! Before `extend(pos)`: the tree is the implicit suffix tree of `text[..pos]`,
//! and the active point spells the longest suffix of `text[..pos]` that is not
//! yet a leaf (length `remainder`).
//!
//! After `extend(pos)`: the same holds for `text[..=pos]`.
//!
//! Each suffix is inserted by one of three rules:
//!
//! 1. It ends at a leaf: nothing to do, the open leaf end grows by itself.
//! 2. The next symbol diverges: split the edge if needed and hang a new leaf.
//! 3. The next symbol is already there: stop the phase early (showstopper).
//!
//! When `text[pos]` occurs nowhere earlier (a document sentinel), rule 3 can't
//! fire, so the phase runs to completion: `remainder` drops to zero and the
//! active point returns to the root. Every document therefore ends with an
//! explicit tree.

use std::collections::HashMap;

use super::corpus::Symbol;
use super::tree::{NodeId, Tree, ROOT};

/// Construction state carried between symbols.
#[derive(Debug, Clone)]
pub struct Builder {
    active_node: NodeId,
    /// Text offset whose symbol selects the outgoing edge of `active_node`.
    active_edge: usize,
    active_length: usize,
    remainder: usize,
    /// Construction-only shortcuts between internal nodes.
    suffix_links: HashMap<NodeId, NodeId>,
    /// Leaves created since the last document boundary.
    open_leaves: Vec<NodeId>,
}

/// Snapshot of the active point, for tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    pub edge: usize,
    pub length: usize,
    pub remainder: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remainder: 0,
            suffix_links: HashMap::new(),
            open_leaves: Vec::new(),
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_point(&self) -> ActivePoint {
        ActivePoint {
            node: self.active_node,
            edge: self.active_edge,
            length: self.active_length,
            remainder: self.remainder,
        }
    }

    /// Process `text[pos]`. `text[..pos]` must already be in the tree.
    pub fn extend(&mut self, tree: &mut Tree, text: &[Symbol], pos: usize) {
        tree.set_leaf_end(pos + 1);
        self.remainder += 1;
        let mut pending_link: Option<NodeId> = None;

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }

            let edge_symbol = text[self.active_edge];
            match tree.child(self.active_node, edge_symbol) {
                None => {
                    // Rule 2 at a node: new leaf straight off the active node.
                    let leaf = tree.add_leaf(self.active_node, text, pos, pos + 1 - self.remainder);
                    self.open_leaves.push(leaf);
                    if let Some(waiting) = pending_link.take() {
                        self.suffix_links.insert(waiting, self.active_node);
                    }
                }
                Some(next) => {
                    let edge_len = tree.edge_len(next);
                    if self.active_length >= edge_len {
                        // Skip/count: hop over the whole edge and retry from its end.
                        self.active_edge += edge_len;
                        self.active_length -= edge_len;
                        self.active_node = next;
                        continue;
                    }

                    if text[tree.node(next).start + self.active_length] == text[pos] {
                        // Rule 3: already present. Showstopper.
                        if let Some(waiting) = pending_link.take() {
                            self.suffix_links.insert(waiting, self.active_node);
                        }
                        self.active_length += 1;
                        break;
                    }

                    // Rule 2 mid-edge: split, then hang the leaf off the split point.
                    let split = tree.split(self.active_node, next, text, self.active_length);
                    let leaf = tree.add_leaf(split, text, pos, pos + 1 - self.remainder);
                    self.open_leaves.push(leaf);
                    if let Some(waiting) = pending_link.replace(split) {
                        self.suffix_links.insert(waiting, split);
                    }
                }
            }

            self.remainder -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = pos + 1 - self.remainder;
            } else if self.active_node != ROOT {
                self.active_node = self.suffix_links.get(&self.active_node).copied().unwrap_or(ROOT);
            }
        }
    }

    /// Seal the document just processed: close its leaves at the current end.
    ///
    /// Only valid right after a sentinel, when every suffix is explicit.
    pub fn finish_document(&mut self, tree: &mut Tree) {
        assert!(
            self.remainder == 0 && self.active_node == ROOT && self.active_length == 0,
            "INVARIANT: document boundary reached with suffixes still implicit: {:?}",
            self.active_point()
        );
        for leaf in self.open_leaves.drain(..) {
            tree.close(leaf);
        }
    }
}
