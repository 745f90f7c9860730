//! Error types.

use crate::types::IndexMode;
use std::error::Error;
use std::fmt;

/// Returned by `set_index_mode` once indexing has begun.
///
/// The index mode is fixed from the first `index_document` call onward,
/// because every key already in the table was derived under the active
/// mode. This is a programmer-error class: configure the mode before
/// indexing, or construct a fresh index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeLockedError {
    /// The mode the index is locked to.
    pub active: IndexMode,
    /// The mode the caller tried to switch to.
    pub requested: IndexMode,
}

impl fmt::Display for ModeLockedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index mode is locked to {} after the first document was indexed; cannot switch to {}",
            self.active, self.requested
        )
    }
}

impl Error for ModeLockedError {}
