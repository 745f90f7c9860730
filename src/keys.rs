//! Lookup-key expansion: how one token becomes index entries.
//!
//! # Invariants (do not violate)
//!
//! 1. **CHAR_BOUNDARIES**: every emitted key is a slice of the token at
//!    character boundaries, never byte boundaries. Multi-byte scalar
//!    values are atomic units of the token text.
//! 2. **NON_EMPTY**: a zero-length token contributes no keys.
//! 3. **COVERAGE**: `Substrings` emits every (start, length) combination,
//!    `Prefixes` every prefix, `ExactWords` exactly the token — a direct
//!    lookup of a query token against the key table is then the entire
//!    matching rule.

use crate::types::IndexMode;

/// Pre-computed character-to-byte boundaries for a token.
/// Enables O(1) slicing by character position.
fn char_boundaries(token: &str) -> Vec<usize> {
    let mut boundaries: Vec<usize> = token.char_indices().map(|(i, _)| i).collect();
    boundaries.push(token.len()); // Sentinel for slicing to the end
    boundaries
}

/// Append every lookup key for `token` under `mode` to `keys`.
///
/// Duplicate keys (e.g. the two `"a"` substrings of `"ava"`) are emitted
/// as-is; the index unions them into one set entry.
pub(crate) fn expand_token(mode: IndexMode, token: &str, keys: &mut Vec<String>) {
    match mode {
        IndexMode::ExactWords => {
            if !token.is_empty() {
                keys.push(token.to_owned());
            }
        }
        IndexMode::Prefixes => {
            for &end in &char_boundaries(token)[1..] {
                keys.push(token[..end].to_owned());
            }
        }
        IndexMode::Substrings => {
            let boundaries = char_boundaries(token);
            let char_count = boundaries.len() - 1;
            for start in 0..char_count {
                for end in start + 1..=char_count {
                    keys.push(token[boundaries[start]..boundaries[end]].to_owned());
                }
            }
        }
    }
}
