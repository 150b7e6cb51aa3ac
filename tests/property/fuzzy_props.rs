//! Levenshtein and BK-tree properties.
//!
//! - `levenshtein` agrees with `strsim::levenshtein` (independent oracle)
//! - Metric axioms: identity, symmetry, triangle inequality
//! - BK-tree queries are sound and complete against a linear scan
//! - Results grow monotonically with tolerance

use std::collections::BTreeSet;

use proptest::prelude::*;
use suffixkart::verify::contracts::check_bktree_distances;
use suffixkart::{levenshtein, FuzzyIndex};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so that near neighbours are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcé]{0,7}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

/// Linear-scan oracle: every distinct item within `tolerance` of `query`.
fn scan(items: &[String], query: &str, tolerance: usize) -> BTreeSet<String> {
    items
        .iter()
        .filter(|item| strsim::levenshtein(item, query) <= tolerance)
        .cloned()
        .collect()
}

fn query_set(index: &FuzzyIndex, query: &str, tolerance: usize) -> BTreeSet<String> {
    index.query(query, tolerance).map(|m| m.key.to_string()).collect()
}

// ============================================================================
// DISTANCE PROPERTIES
// ============================================================================

proptest! {
    /// Property: Distance matches the strsim reference implementation.
    #[test]
    fn prop_levenshtein_matches_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: d(a, a) = 0 and d(a, b) = d(b, a).
    #[test]
    fn prop_identity_and_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    /// Property: Distance to the empty string is the char count.
    #[test]
    fn prop_distance_to_empty(a in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, ""), a.chars().count());
    }
}

// ============================================================================
// BK-TREE PROPERTIES
// ============================================================================

proptest! {
    /// Property: Query returns exactly the items a linear scan finds.
    #[test]
    fn prop_query_sound_and_complete(
        items in vocabulary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..4,
    ) {
        let index = FuzzyIndex::from_items(&items);
        prop_assert_eq!(query_set(&index, &query, tolerance), scan(&items, &query, tolerance));
    }

    /// Property: Every reported distance is the true distance.
    #[test]
    fn prop_reported_distance_exact(
        items in vocabulary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..4,
    ) {
        let index = FuzzyIndex::from_items(&items);
        for m in index.query(&query, tolerance) {
            prop_assert_eq!(m.distance, strsim::levenshtein(m.key, &query));
            prop_assert!(m.distance <= tolerance);
        }
    }

    /// Property: Raising the tolerance never loses a match.
    #[test]
    fn prop_tolerance_monotonic(
        items in vocabulary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..4,
    ) {
        let index = FuzzyIndex::from_items(&items);
        let narrow = query_set(&index, &query, tolerance);
        let wide = query_set(&index, &query, tolerance + 1);
        prop_assert!(narrow.is_subset(&wide));
    }

    /// Property: Child keys equal their distance to the parent; keys are distinct.
    #[test]
    fn prop_tree_well_formed(items in vocabulary_strategy()) {
        let index = FuzzyIndex::from_items(&items);
        check_bktree_distances(&index);
        let distinct: BTreeSet<&String> = items.iter().collect();
        prop_assert_eq!(index.len(), distinct.len());
    }

    /// Property: Sorted query is ordered by (distance, key).
    #[test]
    fn prop_query_sorted_ordering(items in vocabulary_strategy(), query in word_strategy()) {
        let index = FuzzyIndex::from_items(&items);
        let sorted = index.query_sorted(&query, 3);
        for pair in sorted.windows(2) {
            prop_assert!((pair[0].distance, pair[0].key) < (pair[1].distance, pair[1].key));
        }
    }
}
