// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for BK-tree queries.
//!
//! Pruning by the triangle inequality is only safe if every edge carries the
//! exact distance. If it doesn't, matches vanish without any error. Compare the
//! pruned traversal with a linear scan over the same items.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suffixkart::verify::contracts::check_bktree_distances;
use suffixkart::{levenshtein, FuzzyIndex};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    items: Vec<String>,
    query: String,
    tolerance: u8,
}

fuzz_target!(|input: QueryInput| {
    // Cap sizes to avoid timeouts
    let items: Vec<String> = input
        .items
        .into_iter()
        .take(64)
        .map(|s| s.chars().take(16).collect())
        .collect();
    let query: String = input.query.chars().take(16).collect();
    let tolerance = usize::from(input.tolerance % 6);

    let index = FuzzyIndex::from_items(&items);
    check_bktree_distances(&index);

    let found: BTreeSet<&str> = index.query(&query, tolerance).map(|m| m.key).collect();
    let expected: BTreeSet<&str> = items
        .iter()
        .map(String::as_str)
        .filter(|item| levenshtein(item, &query) <= tolerance)
        .collect();

    // INVARIANT 1: pruned traversal finds exactly what a scan finds
    assert_eq!(found, expected, "query {:?} tolerance {}", query, tolerance);

    // INVARIANT 2: sorted results are strictly ordered by (distance, key)
    let sorted = index.query_sorted(&query, tolerance);
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
});
