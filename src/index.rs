// Copyright 2026-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: key registration and query evaluation.
//!
//! # Invariants (do not violate)
//!
//! 1. **MODE_FIXED**: the first indexing call locks the mode before
//!    touching its arguments; every key in the table was derived under the
//!    mode that is now locked in.
//! 2. **PIPELINE_SYMMETRY**: indexing and querying share one private
//!    sanitize-then-tokenize path, so both sides always agree on how text
//!    becomes tokens.
//! 3. **APPEND_ONLY**: ids accumulate into key sets by union; nothing is
//!    ever removed. Re-indexing the same (id, text) pair is a no-op at the
//!    observable level.
//! 4. **DETERMINISTIC_RESULTS**: `search` returns ids deduplicated and in
//!    ascending order, whatever order the hash sets hold them in.

use crate::config::{SanitizeFn, SearchConfig, TokenizeFn};
use crate::error::ModeLockedError;
use crate::keys::expand_token;
use crate::mode::ModeManager;
use crate::types::{DocumentId, IndexMode};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An in-memory, multi-field text-search index.
///
/// Callers register pieces of text against an opaque id — typically once
/// per field of the same document — and issue free-text queries that
/// return every id whose indexed text satisfies all query tokens under the
/// configured [`IndexMode`].
///
/// Writes take `&mut self` and reads take `&self`, so the single-writer
/// discipline the index needs is enforced by the borrow checker rather
/// than by internal locking.
///
/// ```
/// use suncus::SearchIndex;
///
/// let mut index = SearchIndex::new();
/// index.index_document(1, "One");
/// index.index_document(1, "The first document");
/// index.index_document(2, "Two");
/// index.index_document(2, "The second document");
///
/// assert_eq!(index.search("first"), vec![1]);
/// assert_eq!(index.search("the document"), vec![1, 2]);
/// assert_eq!(index.search("cond"), vec![2]);
/// ```
pub struct SearchIndex<K> {
    mode: ModeManager,
    sanitize: SanitizeFn,
    tokenize: TokenizeFn,
    /// Lookup key → ids whose indexed text produced that key.
    keys: HashMap<String, HashSet<K>>,
    /// Every id ever indexed, for the empty-query case.
    documents: HashSet<K>,
}

impl<K: DocumentId> SearchIndex<K> {
    /// An empty index with the default configuration: substring mode,
    /// lowercasing sanitizer, Unicode-aware tokenizer.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// An empty index with an explicit configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        let SearchConfig {
            index_mode,
            sanitize,
            tokenize,
        } = config;
        Self {
            mode: ModeManager::new(index_mode),
            sanitize,
            tokenize,
            keys: HashMap::new(),
            documents: HashSet::new(),
        }
    }

    /// The active index mode, readable whether or not indexing has begun.
    pub fn index_mode(&self) -> IndexMode {
        self.mode.mode()
    }

    /// Switch the index mode. Fails once any document has been indexed.
    pub fn set_index_mode(&mut self, mode: IndexMode) -> Result<(), ModeLockedError> {
        self.mode.set_mode(mode)
    }

    /// Whether the mode is locked, i.e. whether any indexing call has
    /// occurred.
    pub fn is_locked(&self) -> bool {
        self.mode.is_locked()
    }

    /// Number of distinct ids ever indexed.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct lookup keys in the table.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// True until the first id is indexed.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The one text-preparation path shared by indexing and querying.
    fn tokens_of(&self, text: &str) -> Vec<String> {
        let sanitized = (self.sanitize)(text);
        (self.tokenize)(&sanitized)
    }

    /// Register `text` against `id`: sanitize, tokenize, and insert every
    /// lookup key each token expands to under the active mode.
    ///
    /// The same id may be indexed any number of times — once per field is
    /// the common shape — and ends up associated with the union of all
    /// tokens from all calls. Never fails; empty text indexes the id with
    /// no keys, which still makes it reachable through the empty query.
    pub fn index_document(&mut self, id: K, text: &str) {
        // Locks the mode before the text is even looked at.
        self.mode.lock();
        let mode = self.mode.mode();

        let mut expanded = Vec::new();
        for token in self.tokens_of(text) {
            expand_token(mode, &token, &mut expanded);
        }
        for key in expanded {
            self.keys.entry(key).or_default().insert(id.clone());
        }
        self.documents.insert(id);
    }

    /// Bulk registration: map phase expands each document's keys on the
    /// rayon pool, reduce phase merges them into the table.
    ///
    /// Observable results are identical to looping [`index_document`];
    /// this exists because substring expansion is quadratic per token and
    /// dominates build time on large batches. Locks the mode exactly like
    /// `index_document` does, including for an empty batch.
    ///
    /// [`index_document`]: SearchIndex::index_document
    #[cfg(feature = "parallel")]
    pub fn index_documents(&mut self, batch: Vec<(K, String)>)
    where
        K: Send,
    {
        self.mode.lock();
        let mode = self.mode.mode();
        let sanitize = &self.sanitize;
        let tokenize = &self.tokenize;

        // MAP: per-document key sets, in parallel
        let per_doc: Vec<(K, HashSet<String>)> = batch
            .into_par_iter()
            .map(|(id, text)| {
                let sanitized = sanitize(&text);
                let mut expanded = Vec::new();
                for token in tokenize(&sanitized) {
                    expand_token(mode, &token, &mut expanded);
                }
                (id, expanded.into_iter().collect())
            })
            .collect();

        // REDUCE: merge into the shared table, single-threaded
        for (id, doc_keys) in per_doc {
            for key in doc_keys {
                self.keys.entry(key).or_default().insert(id.clone());
            }
            self.documents.insert(id);
        }
    }

    /// Sequential fallback with the same signature and behavior.
    #[cfg(not(feature = "parallel"))]
    pub fn index_documents(&mut self, batch: Vec<(K, String)>)
    where
        K: Send,
    {
        self.mode.lock();
        for (id, text) in batch {
            self.index_document(id, &text);
        }
    }

    /// Evaluate a free-text query: every id whose indexed text matches all
    /// query tokens under the active mode, deduplicated, ascending.
    ///
    /// An empty query — zero tokens after the pipeline runs — matches
    /// every id ever indexed. A query token with no matching key drains
    /// the result to empty immediately; intersection happens over ids, so
    /// tokens found in different fields of the same document still AND
    /// together.
    pub fn search(&self, query: &str) -> Vec<K> {
        let tokens = self.tokens_of(query);

        let mut ids: Vec<K> = match tokens.split_first() {
            None => self.documents.iter().cloned().collect(),
            Some((first, rest)) => {
                let mut matches: HashSet<K> = match self.keys.get(first) {
                    Some(candidates) => candidates.clone(),
                    None => return Vec::new(),
                };
                for token in rest {
                    match self.keys.get(token) {
                        Some(candidates) => matches.retain(|id| candidates.contains(id)),
                        None => return Vec::new(),
                    }
                    if matches.is_empty() {
                        return Vec::new();
                    }
                }
                matches.into_iter().collect()
            }
        };
        ids.sort_unstable();
        ids
    }
}

impl<K: DocumentId> Default for SearchIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for SearchIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("mode", &self.mode)
            .field("documents", &self.documents.len())
            .field("keys", &self.keys.len())
            .finish_non_exhaustive()
    }
}
