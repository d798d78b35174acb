//! Application state store.
//!
//! [`Store`] is the single writer for everything the application persists:
//! favorites, the search snapshot, pagination, the dark-mode preference, and
//! the last listing. It is passed explicitly to the page controllers rather
//! than reached through global state.
//!
//! # Write-through
//!
//! Every mutation computes the next snapshot from the current one, replaces the
//! in-memory state wholesale, and calls [`Store::commit`] synchronously before
//! returning. Two mutations issued back to back are two separate writes.
//!
//! # Failure Model
//!
//! Store operations are infallible from the caller's perspective. A failed
//! commit leaves the in-memory state updated and is logged; the next successful
//! commit writes the full snapshot again.

use super::queries;
use crate::domain::error::Result;
use crate::domain::Movie;
use crate::storage::{PersistedState, StateStorage};

/// Persisted state container with write-through commits.
#[derive(Debug)]
pub struct Store<S: StateStorage> {
    state: PersistedState,
    storage: S,
}

impl<S: StateStorage> Store<S> {
    /// Opens the store, reading the last committed snapshot from `storage`.
    ///
    /// Falls back to the default state (empty favorites, page `1` of `1`) if
    /// nothing was written yet or the stored blob cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviedeck::app::Store;
    /// use moviedeck::storage::MemoryStorage;
    ///
    /// let store = Store::open(MemoryStorage::new());
    /// assert!(store.favorites().is_empty());
    /// assert_eq!(store.current_page(), 1);
    /// ```
    pub fn open(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => {
                tracing::debug!(favorites = state.favorites.len(), "restored persisted state");
                state
            }
            Ok(None) => {
                tracing::debug!("no persisted state, starting fresh");
                PersistedState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted state, starting fresh");
                PersistedState::default()
            }
        };

        Self { state, storage }
    }

    /// Read-only view of the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &PersistedState {
        &self.state
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Writes the current snapshot to the storage backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if serialization or the write fails.
    pub fn commit(&mut self) -> Result<()> {
        self.storage.save(&self.state)
    }

    /// Replaces the state with `f` applied to a copy of it, then commits.
    fn replace_with(&mut self, operation: &'static str, f: impl FnOnce(&mut PersistedState)) {
        let mut next = self.state.clone();
        f(&mut next);
        self.state = next;

        if let Err(e) = self.commit() {
            tracing::warn!(operation = operation, error = %e, "failed to persist state");
        } else {
            tracing::trace!(operation = operation, "state committed");
        }
    }

    // ------------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------------

    /// Current favorites in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[Movie] {
        &self.state.favorites
    }

    /// Whether a movie with `id` is a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: u64) -> bool {
        queries::is_favorite(&self.state.favorites, id)
    }

    /// Appends `movie` to favorites.
    ///
    /// Adding an id that is already present is a no-op, so favorites stay
    /// unique by id.
    pub fn add_favorite(&mut self, movie: Movie) {
        if self.is_favorite(movie.id) {
            tracing::debug!(movie_id = movie.id, "movie already a favorite");
            return;
        }

        tracing::debug!(movie_id = movie.id, title = %movie.title, "adding favorite");
        self.replace_with("add_favorite", |state| state.favorites.push(movie));
    }

    /// Removes every favorite with `id`. No-op if absent.
    pub fn remove_favorite(&mut self, id: u64) {
        if !self.is_favorite(id) {
            tracing::debug!(movie_id = id, "movie not a favorite, nothing to remove");
            return;
        }

        tracing::debug!(movie_id = id, "removing favorite");
        self.replace_with("remove_favorite", |state| {
            state.favorites.retain(|movie| movie.id != id);
        });
    }

    /// Removes `movie` if it is a favorite, adds it otherwise.
    ///
    /// Returns `true` if the movie is a favorite afterwards.
    pub fn toggle_favorite(&mut self, movie: &Movie) -> bool {
        if self.is_favorite(movie.id) {
            self.remove_favorite(movie.id);
            false
        } else {
            self.add_favorite(movie.clone());
            true
        }
    }

    // ------------------------------------------------------------------------
    // Search snapshot and pagination
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    #[must_use]
    pub fn search_results(&self) -> &[Movie] {
        &self.state.search_results
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.state.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.replace_with("set_search_query", |state| state.search_query = query);
    }

    pub fn set_search_results(&mut self, results: Vec<Movie>) {
        self.replace_with("set_search_results", |state| state.search_results = results);
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.replace_with("set_current_page", |state| state.current_page = page);
    }

    pub fn set_total_pages(&mut self, pages: u32) {
        self.replace_with("set_total_pages", |state| state.total_pages = pages);
    }

    /// Resets the query and results. Pagination fields are left untouched.
    pub fn clear_search(&mut self) {
        self.replace_with("clear_search", |state| {
            state.search_query.clear();
            state.search_results.clear();
        });
    }

    // ------------------------------------------------------------------------
    // Listing and preferences
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.state.movies
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.replace_with("set_movies", |state| state.movies = movies);
    }

    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.replace_with("toggle_dark_mode", |state| state.is_dark_mode = !state.is_dark_mode);
    }
}
