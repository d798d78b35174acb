//! Favorites list page. Reads straight from the store; nothing is fetched.

use crate::app::Store;
use crate::storage::StateStorage;

pub const EMPTY_FAVORITES: &str = "You haven't marked any favorites yet.";

/// Favorites page controller.
#[derive(Debug, Default)]
pub struct FavoritesPage;

impl FavoritesPage {
    /// Mounts the page, clearing the search snapshot.
    pub fn mount<S: StateStorage>(store: &mut Store<S>) -> Self {
        tracing::debug!(favorites = store.favorites().len(), "favorites page mounted");
        store.clear_search();
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Movie;
    use crate::storage::MemoryStorage;

    #[test]
    fn mount_clears_search_but_keeps_favorites() {
        let mut store = Store::open(MemoryStorage::new());
        store.add_favorite(Movie::new(603, "The Matrix"));
        store.set_search_query("matrix");

        let _page = FavoritesPage::mount(&mut store);

        assert_eq!(store.search_query(), "");
        assert_eq!(store.favorites().len(), 1);
    }
}
