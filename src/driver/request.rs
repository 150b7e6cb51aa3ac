// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire shapes for requests and responses.
//!
//! Field names follow what the web app already sends (`item_name`,
//! `existing_items`, `total_matches`, ...), so the binary is a drop-in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DriverError;
use crate::exact::{DocumentId, Occurrence};

/// Which engine a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bloom,
    BkTree,
    SuffixTree,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bloom => "bloom",
            Algorithm::BkTree => "bktree",
            Algorithm::SuffixTree => "suffixtree",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bloom" => Ok(Algorithm::Bloom),
            "bktree" => Ok(Algorithm::BkTree),
            "suffixtree" => Ok(Algorithm::SuffixTree),
            other => Err(DriverError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// One line of `suffixkart session` input.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    pub algorithm: String,
    pub payload: serde_json::Value,
}

// ============================================================================
// BLOOM
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BloomRequest {
    /// `"insert"` or `"check"`.
    pub operation: String,
    pub item_name: String,
    /// Inserted before the operation runs.
    #[serde(default)]
    pub existing_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BloomInsertResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BloomCheckResponse {
    /// `true` when the filter has definitely not seen the item.
    pub is_unique: bool,
}

// ============================================================================
// BK-TREE
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BkTreeRequest {
    pub query: String,
    #[serde(default)]
    pub items: Vec<String>,
    /// Signed so a negative value reaches validation instead of a parse error.
    pub tolerance: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BkTreeResponse {
    /// Closest first, ties broken alphabetically.
    pub matches: Vec<String>,
    pub query: String,
    pub total_matches: usize,
}

// ============================================================================
// SUFFIX TREE
// ============================================================================

/// A purchase: indexed as the text `buyer + item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub buyer: String,
    pub item: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuffixTreeRequest {
    /// `"add"` or `"search"`.
    pub operation: String,
    /// Required for `add`.
    pub order: Option<Order>,
    /// Required for `search`: the substring to look for.
    pub item: Option<String>,
    /// Indexed before an `add`. A `search` sees them for that request only.
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderAddedResponse {
    pub success: bool,
    pub message: String,
    pub document_id: DocumentId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyerSearchResponse {
    /// Each buyer once, in the order their first matching order was added.
    pub buyers: Vec<String>,
    pub item: String,
    pub total_buyers: usize,
    pub occurrences: Vec<Occurrence>,
}
