// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generalized suffix tree over a growing set of documents.

use super::corpus::{symbol_of, Corpus, DocumentId, Occurrence, Symbol};
use super::tree::{Tree, ROOT};
use super::ukkonen::Builder;
use crate::error::EngineError;
use crate::verify::contracts;

/// Exact substring index over many documents.
///
/// Documents are appended with [`add_document`](Self::add_document) and never
/// removed. Each append extends the tree online in time linear in the
/// document's length, and returns with the tree fully consistent: queries never
/// observe a half-processed document, because the only way to mutate is through
/// `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct ExactIndex {
    corpus: Corpus,
    tree: Tree,
    builder: Builder,
}

impl ExactIndex {
    pub fn new() -> Self {
        ExactIndex {
            corpus: Corpus::new(),
            tree: Tree::new(),
            builder: Builder::new(),
        }
    }

    /// Build from a batch of documents, ids assigned in order.
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for doc in documents {
            index.add_document(doc.as_ref());
        }
        index
    }

    /// Append `text` (plus its private sentinel) and extend the tree over it.
    pub fn add_document(&mut self, text: &str) -> DocumentId {
        let (id, range) = self.corpus.push_document(text);
        let symbols = self.corpus.symbols();
        for pos in range {
            self.builder.extend(&mut self.tree, symbols, pos);
        }
        self.builder.finish_document(&mut self.tree);

        contracts::check_suffix_tree_complete(&self.tree, &self.corpus);
        id
    }

    /// Every occurrence of `pattern`, sorted by `(document_id, offset)`.
    ///
    /// Offsets count characters. An empty pattern is rejected rather than
    /// matching everywhere. Occurrences never straddle two documents.
    pub fn find_substring(&self, pattern: &str) -> Result<Vec<Occurrence>, EngineError> {
        if pattern.is_empty() {
            return Err(EngineError::argument("find_substring", "pattern is empty"));
        }
        let pattern: Vec<Symbol> = pattern.chars().map(symbol_of).collect();

        let mut hits: Vec<Occurrence> = match self.locus(&pattern) {
            Some(node) => self
                .tree
                .leaves_below(node)
                .into_iter()
                .filter_map(|start| self.corpus.locate(start))
                .collect(),
            None => Vec::new(),
        };
        hits.sort_unstable();
        Ok(hits)
    }

    /// Distinct documents containing `pattern`, ascending.
    pub fn documents_containing(&self, pattern: &str) -> Result<Vec<DocumentId>, EngineError> {
        let mut docs: Vec<DocumentId> = self
            .find_substring(pattern)?
            .into_iter()
            .map(|o| o.document_id)
            .collect();
        docs.dedup();
        Ok(docs)
    }

    /// Whether `pattern` occurs anywhere. The empty pattern is trivially contained.
    pub fn contains(&self, pattern: &str) -> bool {
        let pattern: Vec<Symbol> = pattern.chars().map(symbol_of).collect();
        self.locus(&pattern).is_some()
    }

    /// Walk `pattern` down from the root. Returns the node at or just below the
    /// end of the walk, whose subtree holds exactly the suffixes starting with it.
    fn locus(&self, pattern: &[Symbol]) -> Option<usize> {
        let text = self.corpus.symbols();
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let child = self.tree.child(node, pattern[matched])?;
            let start = self.tree.node(child).start;
            let label = &text[start..self.tree.end_of(child)];

            let take = label.len().min(pattern.len() - matched);
            if label[..take] != pattern[matched..matched + take] {
                return None;
            }
            matched += take;
            node = child;
        }
        Some(node)
    }

    pub fn document(&self, id: DocumentId) -> Option<String> {
        self.corpus.document(id)
    }

    pub fn document_count(&self) -> usize {
        self.corpus.document_count()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Working text length in symbols, sentinels included.
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }
}
