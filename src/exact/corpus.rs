// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The working text behind the suffix tree.
//!
//! Documents are stored back to back as symbols, each followed by its own
//! sentinel. A symbol is a `u32`: characters keep their scalar value, and the
//! sentinel of document `d` is `SENTINEL_BASE + d`. Scalar values stop at
//! `0x10FFFF`, so no `&str` can ever contain a sentinel and no two documents
//! share one. That is what keeps a match from running across a boundary.

use serde::{Deserialize, Serialize};

/// One position of the working text.
pub type Symbol = u32;

/// First sentinel value, one past the largest Unicode scalar value.
pub const SENTINEL_BASE: Symbol = 0x11_0000;

/// Largest number of documents a corpus can hold.
pub const MAX_DOCUMENTS: usize = (Symbol::MAX - SENTINEL_BASE) as usize + 1;

/// Sequential identifier assigned by `add_document`, starting at 0.
pub type DocumentId = usize;

/// A match position: document and character offset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub document_id: DocumentId,
    pub offset: usize,
}

#[inline]
pub fn is_sentinel(symbol: Symbol) -> bool {
    symbol >= SENTINEL_BASE
}

#[inline]
pub fn symbol_of(c: char) -> Symbol {
    c as Symbol
}

/// Concatenated documents plus the boundary table used to map offsets back.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    symbols: Vec<Symbol>,
    /// Global offset of each document's first symbol. Ascending.
    starts: Vec<usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and its sentinel. Returns the new id and the global range
    /// `[start, end)` it occupies, sentinel included.
    pub fn push_document(&mut self, text: &str) -> (DocumentId, std::ops::Range<usize>) {
        let id = self.starts.len();
        assert!(
            id < MAX_DOCUMENTS,
            "corpus holds at most {} documents",
            MAX_DOCUMENTS
        );

        let start = self.symbols.len();
        self.starts.push(start);
        self.symbols.extend(text.chars().map(symbol_of));
        self.symbols.push(SENTINEL_BASE + id as Symbol);
        (id, start..self.symbols.len())
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn document_count(&self) -> usize {
        self.starts.len()
    }

    /// Map a global offset to `(document, offset_in_document)`.
    ///
    /// Returns `None` past the end of the corpus.
    pub fn locate(&self, global: usize) -> Option<Occurrence> {
        if global >= self.symbols.len() {
            return None;
        }
        // Last document whose start is <= global.
        let document_id = self.starts.partition_point(|&s| s <= global) - 1;
        Some(Occurrence {
            document_id,
            offset: global - self.starts[document_id],
        })
    }

    /// Length of a document in characters, sentinel excluded.
    pub fn document_len(&self, id: DocumentId) -> Option<usize> {
        let start = *self.starts.get(id)?;
        let end = self.starts.get(id + 1).copied().unwrap_or(self.symbols.len());
        Some(end - start - 1)
    }

    /// The original text of a document.
    pub fn document(&self, id: DocumentId) -> Option<String> {
        let start = *self.starts.get(id)?;
        let len = self.document_len(id)?;
        Some(
            self.symbols[start..start + len]
                .iter()
                .filter_map(|&s| char::from_u32(s))
                .collect(),
        )
    }
}
