//! Search results page.
//!
//! The location is the source of truth for the target `(query, page)`. The
//! store keeps the last completed search, and a fetch only happens when the
//! location asks for something the store does not already hold.

use super::phase::{ActiveRequest, Generation, Phase, RequestToken};
use super::Route;
use crate::app::{Action, Store};
use crate::fetcher::{FetchOutcome, FetchRequest, FetchResponse};
use crate::storage::StateStorage;

pub const SEARCH_ERROR: &str = "Failed to fetch movies. Please try again.";

/// Search page controller.
#[derive(Debug, Default)]
pub struct SearchPage {
    phase: Phase,
    request: ActiveRequest,
    pending: Option<(String, u32)>,
}

impl SearchPage {
    /// Activates the page for a location `(query, page)`.
    ///
    /// Used both on mount and whenever the location changes while the page is
    /// shown.
    pub fn activate<S: StateStorage>(
        &mut self,
        query: &str,
        page: u32,
        store: &Store<S>,
        generation: &mut Generation,
    ) -> Vec<Action> {
        let stale = query != store.search_query()
            || page != store.current_page()
            || store.search_results().is_empty();

        if !stale {
            tracing::debug!(query = %query, page = page, "search snapshot is current");
            return Vec::new();
        }

        self.run(query.to_string(), page, generation)
    }

    /// Re-runs the active query for another page.
    pub fn select_page<S: StateStorage>(
        &mut self,
        page: u32,
        store: &Store<S>,
        generation: &mut Generation,
    ) -> Vec<Action> {
        self.run(store.search_query().to_string(), page, generation)
    }

    fn run(&mut self, query: String, page: u32, generation: &mut Generation) -> Vec<Action> {
        tracing::debug!(query = %query, page = page, "searching movies");
        self.phase = Phase::Loading;
        let token = self.request.issue(generation);
        self.pending = Some((query.clone(), page));
        vec![Action::fetch(token, FetchRequest::Search { query, page })]
    }

    /// Applies a fetch completion.
    ///
    /// On success the store receives results, total pages, current page, and
    /// query, one commit each, and the location is rewritten to match.
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
        let (query, requested) = self.pending.take()?;

        match outcome {
            Ok(FetchResponse::Page(result)) => {
                let total_pages = result.total_pages.max(1);
                let page = requested.min(total_pages);
                tracing::debug!(
                    query = %query,
                    page = page,
                    total_pages = total_pages,
                    results = result.results.len(),
                    "search completed"
                );

                store.set_search_results(result.results);
                store.set_total_pages(total_pages);
                store.set_current_page(page);
                store.set_search_query(query.clone());
                self.phase = Phase::Success;

                Some(vec![Action::ReplaceRoute(Route::Search { query, page })])
            }
            Ok(other) => {
                tracing::warn!(response = ?other, "unexpected response for search");
                self.phase = Phase::Error(SEARCH_ERROR.to_string());
                Some(Vec::new())
            }
            Err(e) => {
                tracing::warn!(query = %query, page = requested, error = %e, "failed to fetch movies");
                self.phase = Phase::Error(SEARCH_ERROR.to_string());
                Some(Vec::new())
            }
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }
}
