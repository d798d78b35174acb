//! Paginated weekly trending listing.

use super::phase::{ActiveRequest, Generation, Phase, RequestToken};
use super::Route;
use crate::app::{Action, Store};
use crate::domain::Movie;
use crate::fetcher::{FetchOutcome, FetchRequest, FetchResponse};
use crate::storage::StateStorage;

pub const TRENDING_ERROR: &str = "Failed to fetch trending movies. Please try again.";

/// Trending page controller.
///
/// The page number lives only in the location. Page changes navigate; the
/// resulting location change triggers the fetch.
#[derive(Debug)]
pub struct TrendingPage {
    pub page: u32,
    pub total_pages: u32,
    pub movies: Vec<Movie>,
    phase: Phase,
    request: ActiveRequest,
}

impl TrendingPage {
    /// Mounts the page on `page`, clearing the search snapshot once.
    pub fn mount<S: StateStorage>(
        page: u32,
        store: &mut Store<S>,
        generation: &mut Generation,
    ) -> (Self, Vec<Action>) {
        store.clear_search();

        let mut controller = Self {
            page,
            total_pages: 1,
            movies: Vec::new(),
            phase: Phase::Idle,
            request: ActiveRequest::default(),
        };
        let actions = controller.load(generation);
        (controller, actions)
    }

    /// Follows a location change to another page of the listing.
    pub fn show_page(&mut self, page: u32, generation: &mut Generation) -> Vec<Action> {
        self.page = page;
        self.load(generation)
    }

    fn load(&mut self, generation: &mut Generation) -> Vec<Action> {
        tracing::debug!(page = self.page, "loading trending page");
        self.phase = Phase::Loading;
        let token = self.request.issue(generation);
        vec![Action::fetch(token, FetchRequest::Trending { page: self.page })]
    }

    /// Page control selection. Never touches local state directly.
    #[must_use]
    pub fn select_page(&self, page: u32) -> Vec<Action> {
        vec![Action::Navigate(Route::Trending { page })]
    }

    /// Applies a fetch completion.
    ///
    /// A page past the reported total rewrites the location to the last page.
    /// Returns `None` if the token is stale.
    pub fn on_fetch<S: StateStorage>(
        &mut self,
        token: RequestToken,
        outcome: FetchOutcome,
        store: &mut Store<S>,
    ) -> Option<Vec<Action>> {
        if !self.request.complete(token) {
            return None;
        }

        match outcome {
            Ok(FetchResponse::Page(result)) => {
                tracing::debug!(
                    page = self.page,
                    total_pages = result.total_pages,
                    results = result.results.len(),
                    "trending page loaded"
                );
                self.total_pages = result.total_pages.max(1);
                store.set_movies(result.results.clone());
                self.movies = result.results;
                self.phase = Phase::Success;

                if self.page > self.total_pages {
                    tracing::debug!(page = self.page, total_pages = self.total_pages, "clamping trending page");
                    return Some(vec![Action::ReplaceRoute(Route::Trending {
                        page: self.total_pages,
                    })]);
                }
                Some(Vec::new())
            }
            Ok(other) => {
                tracing::warn!(response = ?other, "unexpected response for trending page");
                self.phase = Phase::Error(TRENDING_ERROR.to_string());
                Some(Vec::new())
            }
            Err(e) => {
                tracing::warn!(page = self.page, error = %e, "failed to fetch trending movies");
                self.phase = Phase::Error(TRENDING_ERROR.to_string());
                Some(Vec::new())
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }
}
