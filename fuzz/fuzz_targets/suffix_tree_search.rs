// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for generalized suffix tree construction and search.
//!
//! Ukkonen's algorithm is all active-point bookkeeping: one off-by-one in the
//! walk-down or a stale suffix link and a suffix silently goes missing. Debug
//! builds run the completeness contract after every document; here we also
//! compare every search against a brute-force scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suffixkart::{ExactIndex, Occurrence};

#[derive(Debug, Arbitrary)]
struct TreeInput {
    documents: Vec<String>,
    patterns: Vec<String>,
}

fn naive(documents: &[String], pattern: &str) -> Vec<Occurrence> {
    let needle: Vec<char> = pattern.chars().collect();
    let mut found = Vec::new();
    for (document_id, document) in documents.iter().enumerate() {
        let hay: Vec<char> = document.chars().collect();
        for offset in 0..hay.len().saturating_sub(needle.len() - 1) {
            if hay[offset..offset + needle.len()] == needle[..] {
                found.push(Occurrence { document_id, offset });
            }
        }
    }
    found
}

fuzz_target!(|input: TreeInput| {
    // Cap sizes to avoid timeouts
    let documents: Vec<String> = input
        .documents
        .into_iter()
        .take(8)
        .map(|d| d.chars().take(64).collect())
        .collect();

    let mut index = ExactIndex::new();
    for (i, document) in documents.iter().enumerate() {
        // INVARIANT 1: ids are assigned densely in append order
        assert_eq!(index.add_document(document), i);
    }

    for pattern in input.patterns.iter().take(8) {
        let pattern: String = pattern.chars().take(8).collect();
        match index.find_substring(&pattern) {
            // INVARIANT 2: only the empty pattern is rejected
            Err(_) => assert!(pattern.is_empty()),
            Ok(hits) => {
                // INVARIANT 3: exactly the brute-force occurrences, in order
                assert_eq!(hits, naive(&documents, &pattern), "pattern {:?}", pattern);
                assert_eq!(index.contains(&pattern), !hits.is_empty());
            }
        }
    }

    // INVARIANT 4: every document can be read back
    for (i, document) in documents.iter().enumerate() {
        assert_eq!(index.document(i).as_deref(), Some(document.as_str()));
    }
});
