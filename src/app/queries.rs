//! Read-only queries over store data.
//!
//! Kept apart from the mutation API so they can be called on any snapshot or
//! slice without access to the store itself.

use crate::domain::Movie;

/// Whether a movie with `id` is present in `favorites`.
///
/// Linear scan; favorites lists are small and insertion-ordered.
///
/// # Examples
///
/// ```
/// use moviedeck::app::queries::is_favorite;
/// use moviedeck::Movie;
///
/// let favorites = vec![Movie::new(603, "The Matrix")];
/// assert!(is_favorite(&favorites, 603));
/// assert!(!is_favorite(&favorites, 604));
/// ```
#[must_use]
pub fn is_favorite(favorites: &[Movie], id: u64) -> bool {
    favorites.iter().any(|movie| movie.id == id)
}

