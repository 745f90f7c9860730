// Copyright 2026-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! Two things live here: the [`IndexMode`] strategy enum, which decides how
//! tokens become lookup keys, and the [`DocumentId`] bound, which is the
//! whole contract an identifier type has to satisfy.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexMode**: fixed for the lifetime of an index instance once the
//!   first unit of text has been indexed. `ModeManager` in `mode.rs`
//!   enforces this; nothing else is allowed to write the mode.
//!
//! - **DocumentId**: never interpreted. `Ord` exists so results can be
//!   returned in a deterministic ascending order, `Hash + Eq` so ids can
//!   live in sets. Assuming anything beyond that (numeric, string-like,
//!   contiguous) is a bug.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Matching strategy governing which lookup keys are derived from a token.
///
/// Serialized forms use the wire constants of the systems this crate
/// interoperates with: `"SUBSTRINGS"`, `"PREFIXES"`, `"EXACT_WORDS"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexMode {
    /// Every non-empty contiguous substring of a token is a key.
    ///
    /// A token `"second"` is reachable through `"sec"`, `"eco"`, `"cond"`,
    /// and so on. O(len²) keys per token, and the default.
    #[default]
    Substrings,
    /// Every non-empty prefix of a token is a key.
    ///
    /// `"fir"` reaches `"first"`; `"irst"` does not.
    Prefixes,
    /// The token itself is the only key.
    ExactWords,
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexMode::Substrings => "SUBSTRINGS",
            IndexMode::Prefixes => "PREFIXES",
            IndexMode::ExactWords => "EXACT_WORDS",
        };
        f.write_str(name)
    }
}

/// The full contract for document identifier types.
///
/// Blanket-implemented; callers never implement this by hand. Ids are
/// opaque values the caller associates with indexed text — integers,
/// strings, UUIDs, anything equality-comparable and orderable works.
pub trait DocumentId: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> DocumentId for T {}
