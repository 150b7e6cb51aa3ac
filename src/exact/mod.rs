// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring search across many documents.
//!
//! A generalized suffix tree: every suffix of every document is a root-to-leaf
//! path, so finding a pattern is one walk down from the root (`O(m)`) plus a
//! traversal of the subtree where the walk ends (`O(occurrences)`).
//!
//! Construction is Ukkonen's online algorithm, isolated in `ukkonen`. Documents
//! are separated by per-document sentinels that sit outside the character
//! alphabet (see `corpus`), so no match ever spans two documents.

mod corpus;
mod index;
mod tree;
mod ukkonen;

pub use corpus::{DocumentId, Occurrence, MAX_DOCUMENTS};
pub use index::ExactIndex;

pub(crate) use corpus::{is_sentinel, Corpus};
pub(crate) use tree::{Tree, ROOT};
