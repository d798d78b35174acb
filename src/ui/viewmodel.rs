//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`] by [`compute_viewmodel`] and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data.
//!
//! Row positions are 1-based and match the indexes accepted by the `open N`
//! and `fav N` commands.

use crate::app::state::{AppState, Page};
use crate::domain::Movie;
use crate::routes::details::{DetailsPage, NO_MOVIE};
use crate::routes::favorites::EMPTY_FAVORITES;
use crate::routes::{page_window, PageItem, Phase, Route};
use crate::storage::StateStorage;

/// Poster size requested from the image service.
const POSTER_SIZE: &str = "w500";

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderInfo,
    pub status: Option<StatusLine>,
    /// One-shot message for rejected input.
    pub notice: Option<String>,
    pub sections: Vec<Section>,
    pub details: Option<DetailsBlock>,
    pub empty_state: Option<EmptyState>,
    pub pagination: Option<PaginationStrip>,
    pub footer: FooterInfo,
}

/// Title bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Current location, e.g. `/search?query=batman&page=1`.
    pub location: String,
}

/// Loading or error line shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    Error(String),
}

/// A titled group of movie rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub rows: Vec<MovieRow>,
}

/// One listed movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    /// 1-based position across all sections.
    pub position: usize,
    pub title: String,
    pub year: Option<i32>,
    pub rating: String,
    pub is_favorite: bool,
}

/// Details page contents for a loaded movie.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsBlock {
    pub title: String,
    pub year: Option<i32>,
    pub rating: String,
    pub vote_count: u64,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub overview: String,
    pub poster_url: Option<String>,
    /// `Name as Character` lines for the top-billed cast.
    pub cast: Vec<String>,
    pub trailer_url: Option<String>,
    pub is_favorite: bool,
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStrip {
    pub items: Vec<PageItem>,
    pub current: u32,
    pub total: u32,
}

/// Message shown when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Command hints for the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

const LIST_KEYS: &str = "open N | fav N | page N | search TEXT | back | dark | quit";
const DETAILS_KEYS: &str = "fav | back | dark | quit";
const NAV_KEYS: &str = "/ | /trending | /favorites | search TEXT | back | dark | quit";

/// Builds the view model for the current state.
///
/// `image_base_url` is the poster image service root.
pub fn compute_viewmodel<S: StateStorage>(state: &AppState<S>, image_base_url: &str) -> PageView {
    let store = &state.store;
    let row = |position: usize, movie: &Movie| MovieRow {
        position,
        title: movie.title.clone(),
        year: movie.release_year(),
        rating: movie.rating_label(),
        is_favorite: store.is_favorite(movie.id),
    };
    let section = |heading: String, movies: &[Movie], offset: usize| Section {
        heading,
        rows: movies
            .iter()
            .enumerate()
            .map(|(index, movie)| row(offset + index + 1, movie))
            .collect(),
    };

    let phase = state.phase();
    let status = match &phase {
        Phase::Loading => Some(StatusLine::Loading),
        Phase::Error(message) => Some(StatusLine::Error(message.clone())),
        Phase::Idle | Phase::Success => None,
    };

    let mut sections = Vec::new();
    let mut details = None;
    let mut empty_state = None;
    let mut keybindings = LIST_KEYS;

    match &state.page {
        Page::Home(home) => {
            sections.push(section("Trending This Week".to_string(), &home.trending, 0));
            sections.push(section(
                "Developer Picks".to_string(),
                &home.developer_picks,
                home.trending.len(),
            ));
        }
        Page::Search(_) => {
            let query = store.search_query();
            sections.push(section(
                format!("Results for \"{query}\""),
                store.search_results(),
                0,
            ));
            if phase == Phase::Success && store.search_results().is_empty() {
                empty_state = Some(EmptyState {
                    message: "No movies found".to_string(),
                    subtitle: format!("Nothing matched \"{query}\""),
                });
            }
        }
        Page::Trending(trending) => {
            sections.push(section("Trending Movies".to_string(), &trending.movies, 0));
        }
        Page::Favorites(_) => {
            sections.push(section("Your Favorites".to_string(), store.favorites(), 0));
            if store.favorites().is_empty() {
                empty_state = Some(EmptyState {
                    message: EMPTY_FAVORITES.to_string(),
                    subtitle: "Use fav N on any listing to add one".to_string(),
                });
            }
        }
        Page::Details(page) => {
            keybindings = DETAILS_KEYS;
            details = page
                .movie()
                .map(|movie| details_block(page, movie, store.is_favorite(movie.id), image_base_url));
            if details.is_none() && phase == Phase::Success {
                empty_state = Some(EmptyState {
                    message: NO_MOVIE.to_string(),
                    subtitle: format!("Movie #{} returned no details", page.id),
                });
            }
        }
        Page::NotFound => {
            keybindings = NAV_KEYS;
            empty_state = Some(EmptyState {
                message: "Page not found".to_string(),
                subtitle: format!("Nothing lives at {}", state.route),
            });
        }
        Page::Unmounted => keybindings = NAV_KEYS,
    }

    let pagination = state.pagination().map(|(current, total)| PaginationStrip {
        items: page_window(current, total),
        current,
        total,
    });

    PageView {
        header: HeaderInfo {
            title: title_for(&state.route),
            location: state.route.to_string(),
        },
        status,
        notice: state.notice.clone(),
        sections,
        details,
        empty_state,
        pagination,
        footer: FooterInfo {
            keybindings: keybindings.to_string(),
        },
    }
}

fn details_block(
    page: &DetailsPage,
    movie: &Movie,
    is_favorite: bool,
    image_base_url: &str,
) -> DetailsBlock {
    DetailsBlock {
        title: movie.title.clone(),
        year: movie.release_year(),
        rating: movie.rating_label(),
        vote_count: movie.vote_count,
        runtime: movie.runtime,
        genres: movie.genre_names().into_iter().map(String::from).collect(),
        overview: movie.overview.clone(),
        poster_url: movie.poster_url(image_base_url, POSTER_SIZE),
        cast: page
            .top_cast()
            .iter()
            .map(|member| format!("{} as {}", member.name, member.character))
            .collect(),
        trailer_url: page.trailer_url(),
        is_favorite,
    }
}

fn title_for(route: &Route) -> String {
    match route {
        Route::Home => "MovieDeck".to_string(),
        Route::Search { query, page } => format!("Search: {query} (page {page})"),
        Route::Trending { page } => format!("Trending (page {page})"),
        Route::MovieDetails { id } => format!("Movie #{id}"),
        Route::Favorites => "Favorites".to_string(),
        Route::NotFound { .. } => "Not Found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Store;
    use crate::domain::IMAGE_BASE_URL;
    use crate::routes::{FavoritesPage, HomeSettings};
    use crate::storage::MemoryStorage;

    fn state_with(page: Page, route: Route) -> AppState<MemoryStorage> {
        let mut state = AppState::new(Store::open(MemoryStorage::new()), HomeSettings::default());
        state.page = page;
        state.route = route;
        state
    }

    #[test]
    fn empty_favorites_show_message() {
        let state = state_with(Page::Favorites(FavoritesPage), Route::Favorites);
        let view = compute_viewmodel(&state, IMAGE_BASE_URL);

        assert_eq!(view.empty_state.unwrap().message, EMPTY_FAVORITES);
        assert_eq!(view.header.location, "/favorites");
        assert!(view.pagination.is_none());
    }

    #[test]
    fn favorite_rows_are_marked_and_numbered() {
        let mut state = state_with(Page::Favorites(FavoritesPage), Route::Favorites);
        state.store.add_favorite(Movie::new(603, "The Matrix"));
        state.store.add_favorite(Movie::new(155, "The Dark Knight"));

        let view = compute_viewmodel(&state, IMAGE_BASE_URL);
        let rows = &view.sections[0].rows;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].position, 2);
        assert!(rows.iter().all(|row| row.is_favorite));
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn not_found_mentions_path() {
        let route = Route::NotFound {
            path: "/nowhere".to_string(),
        };
        let state = state_with(Page::NotFound, route);
        let view = compute_viewmodel(&state, IMAGE_BASE_URL);

        assert!(view.empty_state.unwrap().subtitle.contains("/nowhere"));
        assert_eq!(view.footer.keybindings, NAV_KEYS);
    }
}
