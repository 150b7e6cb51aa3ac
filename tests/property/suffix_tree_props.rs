//! Generalized suffix tree properties.
//!
//! - `find_substring` equals a brute-force scan of every document
//! - No match ever crosses a document boundary
//! - Building incrementally equals building in one batch
//! - Every substring of every document is found at its own position

use proptest::prelude::*;
use suffixkart::ExactIndex;

use super::common::naive_find;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Tiny alphabet so repeats, and therefore internal nodes, are plentiful.
fn document_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abñ]{0,12}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 1..6)
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abñ]{1,4}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: Results equal the naive scan, in (document_id, offset) order.
    #[test]
    fn prop_find_matches_naive_scan(corpus in corpus_strategy(), pattern in pattern_strategy()) {
        let index = ExactIndex::from_documents(&corpus);
        prop_assert_eq!(index.find_substring(&pattern).unwrap(), naive_find(&corpus[..], &pattern));
    }

    /// Property: A pattern that only exists across a boundary is never found.
    #[test]
    fn prop_no_cross_document_matches(
        left in document_strategy(),
        right in document_strategy(),
    ) {
        let index = ExactIndex::from_documents([left.as_str(), right.as_str()]);
        let joined = format!("{}{}", left, right);
        let split = left.chars().count();
        let joined_chars: Vec<char> = joined.chars().collect();

        // Every window that crosses the join.
        for start in split.saturating_sub(3)..split {
            for end in split + 1..=joined_chars.len().min(split + 3) {
                let window: String = joined_chars[start..end].iter().collect();
                let expected = naive_find(&[left.as_str(), right.as_str()][..], &window);
                prop_assert_eq!(index.find_substring(&window).unwrap(), expected);
            }
        }
    }

    /// Property: Every substring of every document is found at its own position.
    #[test]
    fn prop_every_substring_found(corpus in corpus_strategy()) {
        let index = ExactIndex::from_documents(&corpus);
        for (document_id, document) in corpus.iter().enumerate() {
            let chars: Vec<char> = document.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let pattern: String = chars[start..end].iter().collect();
                    let hits = index.find_substring(&pattern).unwrap();
                    prop_assert!(
                        hits.iter().any(|o| o.document_id == document_id && o.offset == start),
                        "{:?} not found at ({}, {})", pattern, document_id, start
                    );
                }
            }
        }
    }

    /// Property: Adding documents one at a time, querying in between, ends
    /// in the same answers as a batch build.
    #[test]
    fn prop_incremental_equals_batch(corpus in corpus_strategy(), pattern in pattern_strategy()) {
        let batch = ExactIndex::from_documents(&corpus);
        let mut incremental = ExactIndex::new();
        for (i, document) in corpus.iter().enumerate() {
            incremental.add_document(document);
            let seen = &corpus[..=i];
            prop_assert_eq!(
                incremental.find_substring(&pattern).unwrap(),
                naive_find(seen, &pattern)
            );
        }
        prop_assert_eq!(
            incremental.find_substring(&pattern).unwrap(),
            batch.find_substring(&pattern).unwrap()
        );
        prop_assert_eq!(incremental.node_count(), batch.node_count());
    }

    /// Property: `contains` agrees with `find_substring` being non-empty.
    #[test]
    fn prop_contains_agrees(corpus in corpus_strategy(), pattern in pattern_strategy()) {
        let index = ExactIndex::from_documents(&corpus);
        prop_assert_eq!(index.contains(&pattern), !index.find_substring(&pattern).unwrap().is_empty());
    }
}
