// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! The BK-tree keys children by the exact distance, so this computes the full
//! distance every time. A bounded early exit would return some value above the
//! bound instead of the true one, which corrupts child keys and the pruning
//! window that relies on them.

/// Levenshtein distance: insertions, deletions and substitutions each cost 1.
///
/// Two-row DP, `O(len(a) · len(b))` time, `O(len(b))` space. Counts characters,
/// not bytes, so "café" and "cafe" are one edit apart.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}
