// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Driver configuration, filled in from CLI flags.

use serde::{Deserialize, Serialize};

use crate::membership::BloomConfig;

/// Fuzzy tolerance when a `bktree` request doesn't specify one.
pub const DEFAULT_TOLERANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Size of the session's Bloom filter.
    pub bloom: BloomConfig,
    pub default_tolerance: usize,
    /// Lowercase and strip diacritics from everything before indexing or querying.
    pub normalize: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            bloom: BloomConfig::default(),
            default_tolerance: DEFAULT_TOLERANCE,
            normalize: false,
        }
    }
}
