//! Engine configuration: matching strategy plus the text pipeline.

use crate::pipeline::{default_sanitize, default_tokenize};
use crate::types::IndexMode;
use std::fmt;

/// Pure function from raw text to normalized text.
pub type SanitizeFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Pure function from normalized text to an ordered sequence of non-empty
/// tokens.
pub type TokenizeFn = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Configuration captured once at index construction.
///
/// An injected sanitizer or tokenizer replaces the default entirely; there
/// is no composition. Whatever pipeline is configured here runs identically
/// during indexing and during querying, which is what makes matching
/// meaningful — swapping either function after keys exist would orphan
/// every key derived under the old pipeline.
///
/// ```
/// use suncus::{IndexMode, SearchConfig, SearchIndex};
///
/// let config = SearchConfig::new()
///     .index_mode(IndexMode::ExactWords)
///     .sanitize(|text| text.trim().to_lowercase());
/// let mut index = SearchIndex::with_config(config);
/// index.index_document(1, "  Hello  ");
/// assert_eq!(index.search("hello"), vec![1]);
/// ```
pub struct SearchConfig {
    pub(crate) index_mode: IndexMode,
    pub(crate) sanitize: SanitizeFn,
    pub(crate) tokenize: TokenizeFn,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_mode: IndexMode::default(),
            sanitize: Box::new(default_sanitize),
            tokenize: Box::new(default_tokenize),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting index mode. Still changeable through
    /// `SearchIndex::set_index_mode` until the first document is indexed.
    pub fn index_mode(mut self, mode: IndexMode) -> Self {
        self.index_mode = mode;
        self
    }

    /// Replace the default sanitizer.
    pub fn sanitize(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.sanitize = Box::new(f);
        self
    }

    /// Replace the default tokenizer.
    pub fn tokenize(mut self, f: impl Fn(&str) -> Vec<String> + Send + Sync + 'static) -> Self {
        self.tokenize = Box::new(f);
        self
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The pipeline closures are opaque; only the mode is showable.
        f.debug_struct("SearchConfig")
            .field("index_mode", &self.index_mode)
            .finish_non_exhaustive()
    }
}
