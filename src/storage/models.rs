//! Persisted state models.
//!
//! [`PersistedState`] is the complete snapshot owned by the store. It is
//! written inside a [`StateEnvelope`] whose field names match the original
//! browser storage blob (`{"state": {...}, "version": 0}` with camelCase keys),
//! so an exported blob can be read back unchanged.

use crate::domain::Movie;
use serde::{Deserialize, Serialize};

/// Current envelope version. No migrations exist; the field is carried so a
/// future format change can be detected.
pub const STATE_VERSION: u32 = 0;

/// Snapshot of everything the application persists.
///
/// # Fields
///
/// - `favorites`: Insertion-ordered, unique by movie id
/// - `search_query`, `search_results`: Last executed search (cache, may be stale)
/// - `current_page`, `total_pages`: Pagination of the last search, `(1, 1)` before any fetch
/// - `is_dark_mode`: UI preference
/// - `movies`: Last listing written by the trending page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub favorites: Vec<Movie>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub search_results: Vec<Movie>,
    #[serde(default)]
    pub is_dark_mode: bool,
}

const fn default_page() -> u32 {
    1
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            current_page: 1,
            total_pages: 1,
            movies: Vec::new(),
            search_query: String::new(),
            search_results: Vec::new(),
            is_dark_mode: false,
        }
    }
}

/// On-disk container for [`PersistedState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEnvelope {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl StateEnvelope {
    /// Wraps a snapshot with the current version.
    #[must_use]
    pub fn new(state: PersistedState) -> Self {
        Self {
            state,
            version: STATE_VERSION,
        }
    }
}
