//! In-memory multi-field text search with pluggable tokenization.
//!
//! Register pieces of text against opaque document ids — typically one call
//! per field — then issue free-text queries that return the ascending set
//! of ids matching every query token under the configured strategy:
//! substring (default), prefix, or exact-word.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ pipeline.rs  │────▶│   keys.rs   │────▶│   index.rs   │
//! │ (sanitize,   │     │ (per-mode   │     │ (SearchIndex:│
//! │  tokenize)   │     │  expansion) │     │  build+query)│
//! └──────────────┘     └─────────────┘     └──────────────┘
//!        │                    │                   │
//!        ▼                    ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                       mode.rs                        │
//! │   (ModeManager - configurable until the first        │
//! │    write, locked forever after)                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use suncus::{IndexMode, SearchConfig, SearchIndex};
//!
//! let mut index = SearchIndex::new();
//! index.index_document(1, "One");
//! index.index_document(1, "The first document");
//! index.index_document(2, "Two");
//! index.index_document(2, "The second document");
//!
//! // Substring mode: any fragment of a token matches.
//! assert_eq!(index.search("eco"), vec![2]);
//! // Tokens AND together, across fields of the same document.
//! assert_eq!(index.search("one first"), vec![1]);
//! // The empty query matches everything ever indexed.
//! assert_eq!(index.search(""), vec![1, 2]);
//!
//! // Prefix mode, configured before the first write:
//! let mut prefix = SearchIndex::with_config(
//!     SearchConfig::new().index_mode(IndexMode::Prefixes),
//! );
//! prefix.index_document("doc-a", "searching");
//! assert_eq!(prefix.search("sear"), vec!["doc-a"]);
//! assert!(prefix.search("arching").is_empty());
//! ```
//!
//! The index is append-only and single-writer: writes take `&mut self`,
//! reads take `&self`, and there is no interior mutability, so concurrent
//! readers are safe whenever no writer is borrowing.

// Module declarations
mod config;
mod error;
mod index;
mod keys;
mod mode;
mod pipeline;
mod types;

// Re-exports for public API
pub use config::{SanitizeFn, SearchConfig, TokenizeFn};
pub use error::ModeLockedError;
pub use index::SearchIndex;
pub use pipeline::{default_sanitize, default_tokenize, normalize};
pub use types::{DocumentId, IndexMode};
