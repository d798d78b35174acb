//! In-memory storage backend.
//!
//! Keeps the last saved snapshot in process memory. Used by tests and by the
//! binary's `--ephemeral` mode, where nothing should touch the data directory.

use crate::domain::error::Result;
use crate::storage::backend::StateStorage;
use crate::storage::models::PersistedState;

/// In-process storage that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saved: Option<PersistedState>,
    writes: usize,
}

impl MemoryStorage {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds `state`, as if written by a
    /// previous process.
    #[must_use]
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            saved: Some(state),
            writes: 0,
        }
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Last saved snapshot.
    #[must_use]
    pub const fn saved(&self) -> Option<&PersistedState> {
        self.saved.as_ref()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.saved = Some(state.clone());
        self.writes += 1;
        tracing::trace!(writes = self.writes, "state saved in memory");
        Ok(())
    }
}
