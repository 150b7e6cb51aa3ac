// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate membership: a Bloom filter over item names.
//!
//! The filter answers "definitely not seen" or "probably seen". It never
//! forgets an insert, so there are no false negatives, and its false-positive
//! rate is governed entirely by the bit count `N` and hash count `k` chosen at
//! construction. Size it with [`BloomConfig::with_accuracy`] when you know the
//! expected load.

mod bloom;
mod hash;

pub use bloom::*;
