// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hash positions for the Bloom filter.
//!
//! One pair of 64-bit digests per item, then `k` positions by double hashing
//! (Kirsch-Mitzenmacher): `g_i = h1 + i * h2 mod N`. The digests come from two
//! CRC-32 passes (forward and reversed bytes) pushed through a 64-bit finalizer,
//! since CRC alone is affine in its input and would correlate `h1` and `h2`.

/// Salt separating `h2` from `h1` before finalization.
const SECOND_DIGEST_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// The two base digests for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digests {
    pub h1: u64,
    pub h2: u64,
}

impl Digests {
    pub fn of(item: &str) -> Self {
        let forward = crc32fast::hash(item.as_bytes());

        let mut reversed = crc32fast::Hasher::new();
        for byte in item.bytes().rev() {
            reversed.update(&[byte]);
        }
        let reversed = reversed.finalize();

        let seed = (u64::from(forward) << 32) | u64::from(reversed);
        let h1 = fmix64(seed ^ item.len() as u64);
        // Odd step so successive probes never collapse onto a single bit pattern.
        let h2 = fmix64(h1 ^ SECOND_DIGEST_SALT) | 1;
        Digests { h1, h2 }
    }

    /// The `i`-th probe position in `[0, bits)`.
    #[inline]
    pub fn position(&self, i: u32, bits: usize) -> usize {
        let combined = self.h1.wrapping_add(u64::from(i).wrapping_mul(self.h2));
        (combined % bits as u64) as usize
    }
}

/// MurmurHash3's 64-bit finalizer.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}
