// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String search engines for a marketplace: membership, fuzzy and exact.
//!
//! Three independent, in-memory structures over short text records (item
//! names, buyer/order descriptors):
//!
//! | Engine            | Structure                  | Question it answers                      |
//! |-------------------|----------------------------|------------------------------------------|
//! | `MembershipIndex` | Bloom filter               | Have we (probably) seen this item name?  |
//! | `FuzzyIndex`      | BK-tree                    | Which names are within `t` edits of this?|
//! | `ExactIndex`      | Generalized suffix tree    | Where does this substring occur?         |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  membership  │   │    fuzzy     │   │    exact     │
//! │ (bloom, hash)│   │ (bktree, lev)│   │ (ukkonen,    │
//! │              │   │              │   │  tree,corpus)│
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │                  │                  │
//!        └─────────┬────────┴──────────────────┘
//!                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  driver: Session, JSON requests/responses           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The engines never depend on each other. `verify::contracts` checks their
//! invariants in debug builds; `concurrent` shares them across threads.
//!
//! # Usage
//!
//! ```
//! use suffixkart::{BloomConfig, ExactIndex, FuzzyIndex, MembershipIndex, Occurrence};
//!
//! let mut seen = MembershipIndex::new(BloomConfig::with_size(1000, 3)).unwrap();
//! seen.insert("apple");
//! assert!(seen.probably_contains("apple"));
//!
//! let names = FuzzyIndex::from_items(["book", "books", "boo", "boot", "cake"]);
//! assert_eq!(names.query("book", 1).count(), 4);
//!
//! let orders = ExactIndex::from_documents(["JohnApple", "AliceApple"]);
//! assert_eq!(
//!     orders.find_substring("Apple").unwrap(),
//!     vec![
//!         Occurrence { document_id: 0, offset: 4 },
//!         Occurrence { document_id: 1, offset: 5 },
//!     ]
//! );
//! ```

pub mod driver;
mod error;
pub mod exact;
pub mod fuzzy;
pub mod membership;
pub mod testing;
pub mod util;
pub mod verify;

#[cfg(feature = "parallel")]
pub mod concurrent;

// Re-exports for public API
pub use error::EngineError;
pub use exact::{DocumentId, ExactIndex, Occurrence};
pub use fuzzy::{levenshtein, FuzzyIndex, Match};
pub use membership::{BloomConfig, MembershipIndex};
pub use util::normalize::normalize;

#[cfg(feature = "parallel")]
pub use concurrent::SharedIndex;
