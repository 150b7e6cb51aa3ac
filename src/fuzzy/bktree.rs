// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BK-tree stored as an arena of nodes.
//!
//! Nodes live in a `Vec` and refer to children by index, keyed by the exact
//! edit distance from the parent. Node 0 is the root, the first item inserted.
//!
//! # Invariant
//!
//! For a child reached from `parent` via key `d`:
//!
//! ```text
//! levenshtein(parent.key, child.key) == d
//! ```
//!
//! Every descendant through that child is also at distance `d` from the parent.
//! Combined with the triangle inequality this is what lets a query at distance
//! `q` from the parent skip any child keyed outside `[q - t, q + t]`.
//!
//! # Shape
//!
//! A corpus where every pairwise distance is distinct degenerates into a chain,
//! so query cost is tree depth times the `O(mn)` distance. That is a property of
//! BK-trees, not a bug.

use std::collections::BTreeMap;

use super::levenshtein::levenshtein;

/// Arena index of a node.
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct BkNode {
    key: String,
    children: BTreeMap<usize, NodeId>,
}

/// A query hit: the stored key and its distance from the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match<'a> {
    pub distance: usize,
    pub key: &'a str,
}

/// Metric tree over strings under Levenshtein distance.
#[derive(Debug, Clone, Default)]
pub struct FuzzyIndex {
    nodes: Vec<BkNode>,
}

impl FuzzyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a batch. Duplicates collapse into one node.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for item in items {
            index.insert(item.as_ref());
        }
        index
    }

    /// Insert `item`. Returns `false` if it was already present.
    ///
    /// Descends by `levenshtein(item, current)` until that child slot is free,
    /// then attaches a new node there.
    pub fn insert(&mut self, item: &str) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(BkNode {
                key: item.to_string(),
                children: BTreeMap::new(),
            });
            return true;
        }

        let mut current = 0;
        loop {
            let d = levenshtein(item, &self.nodes[current].key);
            if d == 0 {
                return false;
            }
            match self.nodes[current].children.get(&d) {
                Some(&child) => current = child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(BkNode {
                        key: item.to_string(),
                        children: BTreeMap::new(),
                    });
                    self.nodes[current].children.insert(d, id);
                    return true;
                }
            }
        }
    }

    /// All keys within `tolerance` edits of `pattern`, lazily, in no particular order.
    ///
    /// The iterator only reads the tree; dropping it mid-traversal is safe.
    pub fn query<'a>(&'a self, pattern: &'a str, tolerance: usize) -> Matches<'a> {
        let stack = if self.nodes.is_empty() { vec![] } else { vec![0] };
        Matches {
            index: self,
            pattern,
            tolerance,
            stack,
        }
    }

    /// Like [`query`](Self::query), collected and ordered by `(distance, key)`.
    pub fn query_sorted<'a>(&'a self, pattern: &'a str, tolerance: usize) -> Vec<Match<'a>> {
        let mut matches: Vec<Match<'a>> = self.query(pattern, tolerance).collect();
        matches.sort_unstable();
        matches
    }

    /// Run independent queries for many patterns concurrently.
    #[cfg(feature = "parallel")]
    pub fn query_batch<'a, S>(&'a self, patterns: &'a [S], tolerance: usize) -> Vec<Vec<Match<'a>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        patterns
            .par_iter()
            .map(|p| self.query_sorted(p.as_ref(), tolerance))
            .collect()
    }

    /// Exact membership.
    pub fn contains(&self, item: &str) -> bool {
        self.query(item, 0).next().is_some()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.key.as_str())
    }

    /// Every `(parent_key, child_key, edge_distance)` in the tree.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, usize)> {
        self.nodes.iter().flat_map(move |parent| {
            parent
                .children
                .iter()
                .map(move |(&d, &child)| (parent.key.as_str(), self.nodes[child].key.as_str(), d))
        })
    }

    /// Longest root-to-leaf path, counted in nodes. Zero for an empty tree.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(0, 1)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.nodes[id].children.values().map(|&c| (c, depth + 1)));
        }
        deepest
    }
}

/// Depth-first, pruned traversal returned by [`FuzzyIndex::query`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    index: &'a FuzzyIndex,
    pattern: &'a str,
    tolerance: usize,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        while let Some(id) = self.stack.pop() {
            let node = &self.index.nodes[id];
            let d = levenshtein(self.pattern, &node.key);

            // Triangle inequality: only children keyed in [d - t, d + t] can hold a match.
            let lo = d.saturating_sub(self.tolerance);
            let hi = d.saturating_add(self.tolerance);
            self.stack
                .extend(node.children.range(lo..=hi).map(|(_, &child)| child));

            if d <= self.tolerance {
                return Some(Match {
                    distance: d,
                    key: &node.key,
                });
            }
        }
        None
    }
}
