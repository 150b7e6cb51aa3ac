// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size Bloom filter with explicit construction.
//!
//! No global bit array: every filter is a value owned by whoever built it.
//! Bits are packed into `u64` words and are only ever set, never cleared.
//!
//! # False-positive rate
//!
//! After `n` inserts into `N` bits with `k` hashes:
//!
//! ```text
//! p ≈ (1 - e^(-k·n/N))^k
//! ```
//!
//! `N` and `k` are configuration inputs. A caller with a target `p` should use
//! [`BloomConfig::with_accuracy`], which picks `N = -n·ln p / (ln 2)²` and
//! `k = (N/n)·ln 2`.

use serde::{Deserialize, Serialize};

use super::hash::Digests;
use crate::error::EngineError;

/// Default bit count. Keeps `p` under 0.1% for a couple of thousand items at `k = 3`.
pub const DEFAULT_BITS: usize = 1 << 16;

/// Default number of hash probes per item.
pub const DEFAULT_HASHES: u32 = 3;

const WORD_BITS: usize = 64;

/// Construction parameters for a [`MembershipIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Bit vector length `N`.
    pub bits: usize,
    /// Hash probes per item `k`.
    pub hashes: u32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        BloomConfig {
            bits: DEFAULT_BITS,
            hashes: DEFAULT_HASHES,
        }
    }
}

impl BloomConfig {
    /// Explicit size. Validated when the filter is built.
    pub fn with_size(bits: usize, hashes: u32) -> Self {
        BloomConfig { bits, hashes }
    }

    /// Size for `expected_items` inserts at false-positive probability `fpp`.
    pub fn with_accuracy(expected_items: usize, fpp: f64) -> Result<Self, EngineError> {
        if expected_items == 0 {
            return Err(EngineError::config("expected_items", expected_items));
        }
        if !(fpp > 0.0 && fpp < 1.0) {
            return Err(EngineError::config("fpp", fpp));
        }

        let n = expected_items as f64;
        let ln2 = std::f64::consts::LN_2;
        let bits = (-n * fpp.ln() / (ln2 * ln2)).ceil().max(1.0) as usize;
        let hashes = ((bits as f64 / n) * ln2).round().max(1.0) as u32;
        Ok(BloomConfig { bits, hashes })
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.bits == 0 {
            return Err(EngineError::config("bits", self.bits));
        }
        if self.hashes == 0 {
            return Err(EngineError::config("hashes", self.hashes));
        }
        Ok(())
    }
}

/// Probabilistic set of strings. False positives possible, false negatives never.
#[derive(Debug, Clone)]
pub struct MembershipIndex {
    words: Vec<u64>,
    bits: usize,
    hashes: u32,
    inserted: usize,
}

impl MembershipIndex {
    /// Build an empty filter. Rejects zero bits or zero hashes.
    pub fn new(config: BloomConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(MembershipIndex {
            words: vec![0; config.bits.div_ceil(WORD_BITS)],
            bits: config.bits,
            hashes: config.hashes,
            inserted: 0,
        })
    }

    /// Set the `k` bits for `item`. Re-inserting sets the same bits.
    pub fn insert(&mut self, item: &str) {
        let digests = Digests::of(item);
        for i in 0..self.hashes {
            let pos = digests.position(i, self.bits);
            self.words[pos / WORD_BITS] |= 1u64 << (pos % WORD_BITS);
        }
        self.inserted += 1;
    }

    /// Insert every item from an iterator.
    pub fn insert_all<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.insert(item.as_ref());
        }
    }

    /// True iff all `k` bits for `item` are set.
    pub fn probably_contains(&self, item: &str) -> bool {
        self.positions(item)
            .all(|pos| self.words[pos / WORD_BITS] & (1u64 << (pos % WORD_BITS)) != 0)
    }

    /// The `k` bit positions `item` maps to.
    pub fn positions(&self, item: &str) -> impl Iterator<Item = usize> + '_ {
        let digests = Digests::of(item);
        (0..self.hashes).map(move |i| digests.position(i, self.bits))
    }

    /// Bit vector length `N`.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Hash probes per item `k`.
    pub fn hashes(&self) -> u32 {
        self.hashes
    }

    /// Number of `insert` calls (duplicates included).
    pub fn len(&self) -> usize {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Theoretical false-positive probability for the current load.
    pub fn estimated_fpp(&self) -> f64 {
        false_positive_rate(self.bits, self.hashes, self.inserted)
    }
}

/// `(1 - e^(-k·n/N))^k`
pub fn false_positive_rate(bits: usize, hashes: u32, items: usize) -> f64 {
    let k = f64::from(hashes);
    let exponent = -k * items as f64 / bits as f64;
    (1.0 - exponent.exp()).powf(k)
}
