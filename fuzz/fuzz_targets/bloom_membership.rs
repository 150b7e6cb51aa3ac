// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Bloom filter.
//!
//! Arbitrary sizes (including ones that aren't a multiple of the word size) and
//! arbitrary items. Nothing may panic, and nothing inserted may go missing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suffixkart::{BloomConfig, MembershipIndex};

#[derive(Debug, Arbitrary)]
struct BloomInput {
    bits: u16,
    hashes: u8,
    items: Vec<String>,
}

fuzz_target!(|input: BloomInput| {
    let config = BloomConfig::with_size(usize::from(input.bits), u32::from(input.hashes % 16));

    let mut filter = match MembershipIndex::new(config) {
        Ok(filter) => filter,
        Err(_) => {
            // INVARIANT 1: only a zero size is rejected
            assert!(config.bits == 0 || config.hashes == 0);
            return;
        }
    };

    for item in input.items.iter().take(256) {
        // INVARIANT 2: every position is inside the bit vector
        assert!(filter.positions(item).all(|p| p < config.bits));
        filter.insert(item);
    }

    // INVARIANT 3: no false negatives
    for item in input.items.iter().take(256) {
        assert!(filter.probably_contains(item), "false negative for {:?}", item);
    }
    assert!(filter.bits_set() <= config.bits);
});
