// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the three engines.
//!
//! Debug-mode checks that the structural invariants hold. They:
//!
//! 1. Are **zero-cost in release builds** (compiled out without `debug_assertions`)
//! 2. **Fail fast**: a violated invariant is a bug in the engine, never a caller
//!    error, so these panic instead of returning `Err`
//! 3. Run after every document append and from the property tests
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Invariant                                        |
//! |--------------------------------|--------------------------------------------------|
//! | `check_suffix_tree_complete`   | one leaf per suffix, leaf path spells its suffix |
//! | `check_bktree_distances`       | child key == distance(parent, child)             |
//! | `check_no_false_negatives`     | every inserted item probably contained           |

use crate::exact::{is_sentinel, Corpus, Tree, ROOT};
use crate::fuzzy::{levenshtein, FuzzyIndex};
use crate::membership::MembershipIndex;

// ============================================================================
// SUFFIX TREE CONTRACTS
// ============================================================================

/// Check that the tree holds exactly one leaf per suffix of the corpus and
/// that each leaf sits at the depth its suffix demands.
///
/// # Panics (debug builds only)
/// Panics on a missing or duplicated suffix, a leaf at the wrong depth, a leaf
/// running past its document's sentinel, or a non-branching internal node.
#[inline]
pub(crate) fn check_suffix_tree_complete(tree: &Tree, corpus: &Corpus) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut starts = Vec::with_capacity(corpus.len());
    let mut stack = vec![(ROOT, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        let node = tree.node(id);

        match node.suffix_start {
            Some(suffix_start) => {
                starts.push(suffix_start);
                let parent_depth = depth - tree.edge_len(id);

                // INVARIANT: leaf label begins exactly `parent_depth` into its suffix
                assert_eq!(
                    node.start,
                    suffix_start + parent_depth,
                    "Contract violation: leaf for suffix {} labeled from {} at parent depth {}",
                    suffix_start,
                    node.start,
                    parent_depth
                );

                // INVARIANT: leaf label ends at its own document's sentinel
                let located = corpus.locate(suffix_start);
                let doc_end = located.and_then(|o| {
                    corpus
                        .document_len(o.document_id)
                        .map(|len| suffix_start - o.offset + len + 1)
                });
                assert_eq!(
                    Some(tree.end_of(id)),
                    doc_end,
                    "Contract violation: leaf for suffix {} does not end at its sentinel",
                    suffix_start
                );
                assert!(
                    is_sentinel(corpus.symbols()[tree.end_of(id) - 1]),
                    "Contract violation: leaf for suffix {} ends on a character",
                    suffix_start
                );
            }
            None if id != ROOT => {
                // INVARIANT: internal nodes branch (compressed trie)
                assert!(
                    node.children.len() >= 2,
                    "Contract violation: internal node {} has {} children",
                    id,
                    node.children.len()
                );
            }
            None => {}
        }

        for &child in node.children.values() {
            stack.push((child, depth + tree.edge_len(child)));
        }
    }

    // INVARIANT: every suffix of the working text is exactly one leaf
    starts.sort_unstable();
    assert!(
        starts.iter().copied().eq(0..corpus.len()),
        "Contract violation: {} leaves for a corpus of {} symbols",
        tree.leaf_count(),
        corpus.len()
    );
}

// ============================================================================
// BK-TREE CONTRACTS
// ============================================================================

/// Check that every child is keyed by its exact distance from its parent.
///
/// # Panics (debug builds only)
/// Panics if any edge key disagrees with the recomputed distance.
#[inline]
pub fn check_bktree_distances(index: &FuzzyIndex) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (parent, child, key) in index.edges() {
        // INVARIANT: child key == levenshtein(parent, child)
        let actual = levenshtein(parent, child);
        assert_eq!(
            key, actual,
            "Contract violation: child '{}' of '{}' keyed {} but distance is {}",
            child, parent, key, actual
        );
    }
}

// ============================================================================
// BLOOM FILTER CONTRACTS
// ============================================================================

/// Check that every inserted item still reports as present.
///
/// # Panics (debug builds only)
/// Panics on the first false negative.
#[inline]
pub fn check_no_false_negatives<S: AsRef<str>>(filter: &MembershipIndex, inserted: &[S]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for item in inserted {
        // INVARIANT: bits are never cleared, so inserted items always match
        assert!(
            filter.probably_contains(item.as_ref()),
            "Contract violation: false negative for '{}'",
            item.as_ref()
        );
    }
}
