//! Mode lifecycle: configurable until the first write, locked after.
//!
//! The rule is small enough to be tempting to inline as a boolean check in
//! the engine, but it is an invariant worth testing in isolation, so it
//! lives here as an explicit two-state machine.

use crate::error::ModeLockedError;
use crate::types::IndexMode;

/// Where the index is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeState {
    /// No document has been indexed; the mode may still change.
    Configurable,
    /// At least one indexing call has occurred; the mode is fixed.
    Locked,
}

/// Holds the active [`IndexMode`] and enforces immutability-after-first-write.
#[derive(Debug, Clone)]
pub(crate) struct ModeManager {
    mode: IndexMode,
    state: ModeState,
}

impl ModeManager {
    pub(crate) fn new(mode: IndexMode) -> Self {
        Self {
            mode,
            state: ModeState::Configurable,
        }
    }

    /// The currently configured mode, readable in either state.
    pub(crate) fn mode(&self) -> IndexMode {
        self.mode
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.state == ModeState::Locked
    }

    /// Switch modes. Succeeds only before the first write; the state stays
    /// `Configurable` on success.
    pub(crate) fn set_mode(&mut self, mode: IndexMode) -> Result<(), ModeLockedError> {
        match self.state {
            ModeState::Configurable => {
                self.mode = mode;
                Ok(())
            }
            ModeState::Locked => Err(ModeLockedError {
                active: self.mode,
                requested: mode,
            }),
        }
    }

    /// The `Configurable → Locked` transition taken by the first indexing
    /// call, unconditionally and before any argument is inspected.
    /// Idempotent.
    pub(crate) fn lock(&mut self) {
        self.state = ModeState::Locked;
    }
}
