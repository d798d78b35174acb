//! JSON file-based storage backend.
//!
//! Stores the application snapshot as a single human-readable JSON file. Writes
//! go to a temporary sibling file that is then renamed over the target, so a
//! crash mid-write never leaves a truncated state file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "state": {
//!     "favorites": [{ "id": 603, "title": "The Matrix", ... }],
//!     "currentPage": 1,
//!     "totalPages": 3,
//!     "movies": [],
//!     "searchQuery": "batman",
//!     "searchResults": [...],
//!     "isDarkMode": false
//!   },
//!   "version": 0
//! }
//! ```

use crate::domain::error::{MovieDeckError, Result};
use crate::storage::backend::StateStorage;
use crate::storage::models::{PersistedState, StateEnvelope};
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// Holds no cached data; every `load` reads the file and every `save`
/// serializes the full snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Opens a JSON storage backend at `file_path`.
    ///
    /// Parent directories are created automatically. The file itself is not
    /// created until the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moviedeck::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/moviedeck/state.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tracing::debug!(parent = ?parent, "creating parent directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { file_path })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PersistedState> {
        let contents = std::fs::read_to_string(path)?;
        let envelope: StateEnvelope = serde_json::from_str(&contents)
            .map_err(|e| MovieDeckError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = envelope.version,
            favorites = envelope.state.favorites.len(),
            search_results = envelope.state.search_results.len(),
            "loaded persisted state"
        );

        Ok(envelope.state)
    }
}

impl StateStorage for JsonStorage {
    fn load(&self) -> Result<Option<PersistedState>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no state file yet");
            return Ok(None);
        }

        Self::load_from_file(&self.file_path).map(Some)
    }

    fn save(&mut self, state: &PersistedState) -> Result<()> {
        let _span = tracing::debug_span!("json_save", path = ?self.file_path).entered();

        let json = serde_json::to_string_pretty(&StateEnvelope::new(state.clone()))
            .map_err(|e| MovieDeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(favorites = state.favorites.len(), "state saved");
        Ok(())
    }
}
