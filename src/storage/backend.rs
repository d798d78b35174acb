//! Storage backend abstraction.
//!
//! This module defines the [`StateStorage`] trait, the persisted-state
//! collaborator behind the store. The store holds the whole snapshot in memory
//! and hands it to the backend on every commit, so the trait only needs a
//! whole-blob read and a whole-blob write.

use crate::domain::error::Result;
use crate::storage::models::PersistedState;

/// Abstraction over the persisted key-value blob.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): In-process, for tests and ephemeral runs
///
/// # Examples
///
/// ```no_run
/// use moviedeck::storage::{JsonStorage, StateStorage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/moviedeck/state.json"))?;
/// let state = storage.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait StateStorage {
    /// Reads the last written snapshot.
    ///
    /// Returns `Ok(None)` if nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<PersistedState>>;

    /// Overwrites the stored snapshot.
    ///
    /// Must be durable when it returns: the next `load` observes this state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&mut self, state: &PersistedState) -> Result<()>;
}

impl<T: StateStorage + ?Sized> StateStorage for Box<T> {
    fn load(&self) -> Result<Option<PersistedState>> {
        (**self).load()
    }

    fn save(&mut self, state: &PersistedState) -> Result<()> {
        (**self).save(state)
    }
}
