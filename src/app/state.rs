//! Application state container.
//!
//! [`AppState`] ties the persisted [`Store`] to the transient routing state:
//! the current location, the mounted page controller, and the generation that
//! stamps every fetch. It is mutated only by the event handler.
//!
//! # State Components
//!
//! - **Store**: Favorites, search snapshot, pagination, dark mode, listing
//! - **Route**: Current location
//! - **Page**: Controller mounted for the current location
//! - **Generation**: Token source shared by every controller
//! - **Notice**: One-shot message for rejected input, cleared on navigation

use super::store::Store;
use crate::domain::Movie;
use crate::routes::{
    DetailsPage, FavoritesPage, Generation, HomePage, HomeSettings, Phase, Route, SearchPage,
    TrendingPage,
};
use crate::storage::StateStorage;

/// The page controller mounted for the current location.
#[derive(Debug, Default)]
pub enum Page {
    /// Nothing has been navigated to yet.
    #[default]
    Unmounted,
    Home(HomePage),
    Search(SearchPage),
    Trending(TrendingPage),
    Details(DetailsPage),
    Favorites(FavoritesPage),
    NotFound,
}

impl Page {
    /// Whether this controller handles `route`, ignoring route parameters.
    #[must_use]
    pub fn serves(&self, route: &Route) -> bool {
        matches!(
            (self, route),
            (Self::Home(_), Route::Home)
                | (Self::Search(_), Route::Search { .. })
                | (Self::Trending(_), Route::Trending { .. })
                | (Self::Details(_), Route::MovieDetails { .. })
                | (Self::Favorites(_), Route::Favorites)
                | (Self::NotFound, Route::NotFound { .. })
        )
    }
}

/// Central application state.
#[derive(Debug)]
pub struct AppState<S: StateStorage> {
    pub store: Store<S>,
    pub route: Route,
    pub page: Page,
    pub generation: Generation,
    pub settings: HomeSettings,
    pub notice: Option<String>,
}

impl<S: StateStorage> AppState<S> {
    /// Creates a state with nothing mounted yet.
    ///
    /// The first `Navigate` event mounts a page.
    pub fn new(store: Store<S>, settings: HomeSettings) -> Self {
        Self {
            store,
            route: Route::Home,
            page: Page::Unmounted,
            generation: Generation::new(),
            settings,
            notice: None,
        }
    }

    /// Movies listed on the current page, in display order.
    ///
    /// Indexes into this list are what `open N` and `fav N` refer to.
    #[must_use]
    pub fn listed_movies(&self) -> Vec<&Movie> {
        match &self.page {
            Page::Home(home) => home.listed().collect(),
            Page::Search(_) => self.store.search_results().iter().collect(),
            Page::Trending(trending) => trending.movies.iter().collect(),
            Page::Favorites(_) => self.store.favorites().iter().collect(),
            Page::Details(_) | Page::NotFound | Page::Unmounted => Vec::new(),
        }
    }

    /// Load phase of the current page.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.page {
            Page::Home(home) => home.phase(),
            Page::Search(search) => search.phase().clone(),
            Page::Trending(trending) => trending.phase().clone(),
            Page::Details(details) => details.phase().clone(),
            Page::Favorites(_) | Page::NotFound | Page::Unmounted => Phase::Idle,
        }
    }

    /// `(current, total)` page numbers for pages with a pagination control.
    #[must_use]
    pub fn pagination(&self) -> Option<(u32, u32)> {
        match &self.page {
            Page::Search(_) => Some((self.store.current_page(), self.store.total_pages())),
            Page::Trending(trending) => Some((trending.page, trending.total_pages)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn new_state_is_unmounted_home() {
        let state = AppState::new(Store::open(MemoryStorage::new()), HomeSettings::default());
        assert_eq!(state.route, Route::Home);
        assert!(matches!(state.page, Page::Unmounted));
        assert!(state.listed_movies().is_empty());
        assert_eq!(state.pagination(), None);
    }

    #[test]
    fn page_serves_matching_routes_only() {
        assert!(Page::NotFound.serves(&Route::NotFound { path: "/x".into() }));
        assert!(Page::Favorites(FavoritesPage).serves(&Route::Favorites));
        assert!(!Page::Unmounted.serves(&Route::Home));
        assert!(!Page::Favorites(FavoritesPage).serves(&Route::Home));
    }

    #[test]
    fn favorites_page_lists_store_favorites() {
        let mut store = Store::open(MemoryStorage::new());
        store.add_favorite(Movie::new(603, "The Matrix"));
        let mut state = AppState::new(store, HomeSettings::default());
        state.page = Page::Favorites(FavoritesPage);
        assert_eq!(state.listed_movies()[0].id, 603);
    }
}
