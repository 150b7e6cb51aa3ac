// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: nearest matches under edit distance.
//!
//! A BK-tree indexes strings by pairwise Levenshtein distance. Because the
//! distance is a metric, a query at distance `d` from a node only has to visit
//! children keyed within `[d - t, d + t]`; everything else is pruned by the
//! triangle inequality.

mod bktree;
mod levenshtein;

pub use bktree::*;
pub use levenshtein::*;
