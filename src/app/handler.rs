//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes navigation, user
//! commands, and fetch completions, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the driver (user input or a finished fetch)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The mounted page controller and the store are mutated
//! 4. Actions are collected and returned for the driver to execute
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`, `OpenListed`, `GoBack`
//! - **Pagination**: `PageSelected`, `PageInput`
//! - **Favorites**: `ToggleFavorite`, `ToggleListedFavorite`, `ToggleDetailsFavorite`
//! - **Preferences**: `ToggleDarkMode`
//! - **Fetch**: `FetchCompleted` with the token of the issuing controller

use super::state::{AppState, Page};
use super::Action;
use crate::domain::error::Result;
use crate::domain::Movie;
use crate::fetcher::FetchOutcome;
use crate::routes::{
    validate_page_input, DetailsPage, FavoritesPage, HomePage, RequestToken, Route, SearchPage,
    TrendingPage,
};
use crate::storage::StateStorage;

/// Events triggered by user input or by a finished fetch.
#[derive(Debug)]
pub enum Event {
    /// The location changed to this route.
    Navigate(Route),

    /// A fetch issued with `token` finished.
    FetchCompleted {
        token: RequestToken,
        outcome: FetchOutcome,
    },

    /// A page was chosen from the pagination strip.
    PageSelected(u32),

    /// Raw jump-to-page input; validated against the current page count.
    PageInput(String),

    /// Toggles favorite state of a movie card.
    ToggleFavorite(Movie),

    /// Toggles favorite state of the listed movie at this zero-based index.
    ToggleListedFavorite(usize),

    /// Opens the details page of the listed movie at this zero-based index.
    OpenListed(usize),

    /// Toggles favorite state of the movie on the details page.
    ToggleDetailsFavorite,

    /// "Go back" from the current page.
    GoBack,

    ToggleDarkMode,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A pair of (whether the view changed, actions to execute in order).
///
/// # Errors
///
/// Reserved for failures that cannot be expressed as page state. Remote and
/// persistence failures are absorbed by the controllers and the store.
///
/// # Example
///
/// ```rust
/// use moviedeck::app::{handle_event, AppState, Event, Store};
/// use moviedeck::routes::{HomeSettings, Route};
/// use moviedeck::storage::MemoryStorage;
///
/// let mut state = AppState::new(Store::open(MemoryStorage::new()), HomeSettings::default());
/// let (render, actions) = handle_event(&mut state, Event::Navigate(Route::Favorites))?;
/// assert!(render);
/// assert!(actions.is_empty());
/// # Ok::<(), moviedeck::MovieDeckError>(())
/// ```
pub fn handle_event<S: StateStorage>(
    state: &mut AppState<S>,
    event: Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", route = %state.route).entered();

    match event {
        Event::Navigate(route) => Ok((true, activate(state, route))),
        Event::FetchCompleted { token, outcome } => {
            let applied = apply_fetch(state, token, outcome);
            match applied {
                Some(actions) => Ok((true, actions)),
                None => {
                    tracing::debug!(token = %token, "discarding stale fetch completion");
                    Ok((false, vec![]))
                }
            }
        }
        Event::PageSelected(page) => Ok(select_page(state, page)),
        Event::PageInput(input) => {
            let Some((_, total)) = state.pagination() else {
                tracing::debug!("page input outside a paginated page");
                return Ok((false, vec![]));
            };

            match validate_page_input(&input, total) {
                Ok(page) => Ok(select_page(state, page)),
                Err(e) => {
                    tracing::debug!(input = %input, error = %e, "page input rejected");
                    state.notice = Some(e.to_string());
                    Ok((true, vec![]))
                }
            }
        }
        Event::ToggleFavorite(movie) => {
            let favorite = state.store.toggle_favorite(&movie);
            tracing::debug!(movie_id = movie.id, favorite = favorite, "favorite toggled");
            Ok((true, vec![]))
        }
        Event::ToggleListedFavorite(index) => {
            let Some(movie) = state.listed_movies().get(index).map(|movie| (*movie).clone()) else {
                tracing::debug!(index = index, "no listed movie at index");
                return Ok((false, vec![]));
            };
            state.store.toggle_favorite(&movie);
            Ok((true, vec![]))
        }
        Event::OpenListed(index) => {
            let Some(id) = state.listed_movies().get(index).map(|movie| movie.id) else {
                tracing::debug!(index = index, "no listed movie at index");
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::Navigate(Route::MovieDetails { id })]))
        }
        Event::ToggleDetailsFavorite => {
            let Page::Details(details) = &state.page else {
                return Ok((false, vec![]));
            };
            Ok((details.toggle_favorite(&mut state.store).is_some(), vec![]))
        }
        Event::GoBack => {
            if matches!(state.page, Page::Details(_)) {
                let target = DetailsPage::back_route(&state.store);
                tracing::debug!(target = %target, "leaving details page");
                return Ok((false, vec![Action::Navigate(target)]));
            }
            Ok((false, vec![Action::Back]))
        }
        Event::ToggleDarkMode => {
            state.store.toggle_dark_mode();
            Ok((true, vec![]))
        }
    }
}

/// Makes `route` the current location, mounting or updating its controller.
fn activate<S: StateStorage>(state: &mut AppState<S>, route: Route) -> Vec<Action> {
    state.notice = None;

    let same_page = state.page.serves(&route);
    if same_page && state.route == route {
        tracing::debug!(route = %route, "already at location");
        return vec![];
    }

    tracing::debug!(from = %state.route, to = %route, remount = !same_page, "activating route");
    state.route = route.clone();

    let AppState {
        store,
        page,
        generation,
        settings,
        ..
    } = state;

    if same_page {
        return match (&mut *page, &route) {
            (Page::Search(search), Route::Search { query, page }) => {
                search.activate(query, *page, store, generation)
            }
            (Page::Trending(trending), Route::Trending { page }) => {
                trending.show_page(*page, generation)
            }
            (Page::Details(details), Route::MovieDetails { id }) => details.show(*id, generation),
            _ => vec![],
        };
    }

    let (mounted, actions) = match &route {
        Route::Home => {
            let (home, actions) = HomePage::mount(store, generation, settings);
            (Page::Home(home), actions)
        }
        Route::Search { query, page } => {
            let mut search = SearchPage::default();
            let actions = search.activate(query, *page, store, generation);
            (Page::Search(search), actions)
        }
        Route::Trending { page } => {
            let (trending, actions) = TrendingPage::mount(*page, store, generation);
            (Page::Trending(trending), actions)
        }
        Route::MovieDetails { id } => {
            let (details, actions) = DetailsPage::mount(*id, generation);
            (Page::Details(details), actions)
        }
        Route::Favorites => (Page::Favorites(FavoritesPage::mount(store)), vec![]),
        Route::NotFound { path } => {
            tracing::debug!(path = %path, "no page for location");
            (Page::NotFound, vec![])
        }
    };

    *page = mounted;
    actions
}

/// Hands a fetch outcome to the mounted controller.
///
/// Returns `None` when no controller is waiting for `token`.
fn apply_fetch<S: StateStorage>(
    state: &mut AppState<S>,
    token: RequestToken,
    outcome: FetchOutcome,
) -> Option<Vec<Action>> {
    match &mut state.page {
        Page::Home(home) => home.on_fetch(token, outcome).then(Vec::new),
        Page::Search(search) => search.on_fetch(token, outcome, &mut state.store),
        Page::Trending(trending) => trending.on_fetch(token, outcome, &mut state.store),
        Page::Details(details) => details.on_fetch(token, outcome).then(Vec::new),
        Page::Favorites(_) | Page::NotFound | Page::Unmounted => None,
    }
}

fn select_page<S: StateStorage>(state: &mut AppState<S>, page: u32) -> (bool, Vec<Action>) {
    state.notice = None;
    match &mut state.page {
        Page::Search(search) => (
            true,
            search.select_page(page, &state.store, &mut state.generation),
        ),
        Page::Trending(trending) => (false, trending.select_page(page)),
        _ => {
            tracing::debug!(page = page, "page selection outside a paginated page");
            (false, vec![])
        }
    }
}
