// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suffixkart command-line interface.
//!
//! One subcommand per algorithm, each taking a single JSON payload and
//! printing a single JSON response, plus `session` for a long-lived process
//! that answers one request per stdin line and keeps its engines between them.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use suffixkart::driver::{Algorithm, DriverConfig, DEFAULT_TOLERANCE};
use suffixkart::membership::{BloomConfig, DEFAULT_BITS, DEFAULT_HASHES};

#[derive(Parser)]
#[command(
    name = "suffixkart",
    about = "Membership, fuzzy and substring search for marketplace records",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    #[command(subcommand)]
    pub command: Commands,
}

/// Engine configuration shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Bloom filter size in bits
    #[arg(long, global = true, default_value_t = DEFAULT_BITS)]
    pub bloom_bits: usize,

    /// Hash probes per Bloom filter item
    #[arg(long, global = true, default_value_t = DEFAULT_HASHES)]
    pub bloom_hashes: u32,

    /// Edit distance used when a bktree request omits `tolerance`
    #[arg(long, global = true, default_value_t = DEFAULT_TOLERANCE)]
    pub default_tolerance: usize,

    /// Lowercase and strip diacritics before indexing and querying
    #[arg(long, global = true)]
    pub normalize: bool,

    /// Print timings and engine statistics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Options {
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            bloom: BloomConfig::with_size(self.bloom_bits, self.bloom_hashes),
            default_tolerance: self.default_tolerance,
            normalize: self.normalize,
        }
    }
}

/// Where a one-shot request's JSON comes from.
#[derive(Args, Debug, Clone)]
pub struct PayloadArgs {
    /// JSON payload
    #[arg(required_unless_present = "payload_file", conflicts_with = "payload_file")]
    pub payload: Option<String>,

    /// Read the JSON payload from a file instead
    #[arg(long, value_name = "PATH")]
    pub payload_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bloom filter: `{"operation": "insert"|"check", "item_name", "existing_items"?}`
    Bloom(PayloadArgs),

    /// BK-tree fuzzy match: `{"query", "items", "tolerance"?}`
    Bktree(PayloadArgs),

    /// Suffix tree over orders: `{"operation": "add", "order"}` or `{"operation": "search", "item", "orders"?}`
    Suffixtree(PayloadArgs),

    /// Answer `{"algorithm", "payload"}` requests, one per stdin line
    Session,
}

impl Commands {
    /// The algorithm and payload source of a one-shot command.
    pub fn one_shot(&self) -> Option<(Algorithm, &PayloadArgs)> {
        match self {
            Commands::Bloom(args) => Some((Algorithm::Bloom, args)),
            Commands::Bktree(args) => Some((Algorithm::BkTree, args)),
            Commands::Suffixtree(args) => Some((Algorithm::SuffixTree, args)),
            Commands::Session => None,
        }
    }
}
