// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and oracles to avoid duplication.

#![doc(hidden)]

use crate::driver::Order;
use crate::exact::Occurrence;

/// The candidate list from the fuzzy-matching walkthrough.
pub const BOOK_ITEMS: [&str; 5] = ["book", "books", "boo", "boot", "cake"];

/// Build an order.
pub fn make_order(buyer: &str, item: &str) -> Order {
    Order {
        buyer: buyer.to_string(),
        item: item.to_string(),
    }
}

/// Orders from `(buyer, item)` pairs, in order.
pub fn make_orders(pairs: &[(&str, &str)]) -> Vec<Order> {
    pairs.iter().map(|(buyer, item)| make_order(buyer, item)).collect()
}

/// Every occurrence of `pattern` in `documents` by brute-force scan, offsets in chars.
///
/// Sorted by `(document_id, offset)`, the same order `find_substring` reports.
pub fn naive_find<S: AsRef<str>>(documents: &[S], pattern: &str) -> Vec<Occurrence> {
    let needle: Vec<char> = pattern.chars().collect();
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }
    for (document_id, document) in documents.iter().enumerate() {
        let hay: Vec<char> = document.as_ref().chars().collect();
        if hay.len() < needle.len() {
            continue;
        }
        for offset in 0..=hay.len() - needle.len() {
            if hay[offset..offset + needle.len()] == needle[..] {
                found.push(Occurrence { document_id, offset });
            }
        }
    }
    found
}
