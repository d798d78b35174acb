//! Movie details page.

use super::phase::{ActiveRequest, Generation, Phase, RequestToken};
use super::Route;
use crate::api::MovieBundle;
use crate::app::{Action, Store};
use crate::domain::{CastMember, Movie};
use crate::fetcher::{FetchOutcome, FetchRequest, FetchResponse};
use crate::storage::StateStorage;

pub const DETAILS_ERROR: &str = "Failed to fetch movie details. Please try again.";
pub const NO_MOVIE: &str = "No movie found";

/// Cast members shown on the details page.
pub const TOP_CAST: usize = 5;

/// Details page controller.
#[derive(Debug)]
pub struct DetailsPage {
    pub id: u64,
    bundle: Option<MovieBundle>,
    phase: Phase,
    request: ActiveRequest,
}

impl DetailsPage {
    /// Mounts the page for movie `id` and requests its bundle.
    pub fn mount(id: u64, generation: &mut Generation) -> (Self, Vec<Action>) {
        let mut page = Self {
            id,
            bundle: None,
            phase: Phase::Idle,
            request: ActiveRequest::default(),
        };
        let actions = page.load(generation);
        (page, actions)
    }

    /// Follows a location change. Only a different id triggers a fetch.
    pub fn show(&mut self, id: u64, generation: &mut Generation) -> Vec<Action> {
        if id == self.id {
            return Vec::new();
        }
        self.id = id;
        self.bundle = None;
        self.load(generation)
    }

    fn load(&mut self, generation: &mut Generation) -> Vec<Action> {
        tracing::debug!(movie_id = self.id, "loading movie details");
        self.phase = Phase::Loading;
        let token = self.request.issue(generation);
        vec![Action::fetch(token, FetchRequest::MovieBundle { id: self.id })]
    }

    /// Applies a fetch completion. Returns `false` if the token is stale.
    pub fn on_fetch(&mut self, token: RequestToken, outcome: FetchOutcome) -> bool {
        if !self.request.complete(token) {
            return false;
        }

        match outcome {
            Ok(FetchResponse::Bundle(bundle)) => {
                tracing::debug!(
                    movie_id = self.id,
                    cast = bundle.credits.cast.len(),
                    has_trailer = bundle.trailer.is_some(),
                    "movie details loaded"
                );
                self.bundle = Some(*bundle);
                self.phase = Phase::Success;
            }
            Ok(other) => {
                tracing::warn!(response = ?other, "unexpected response for movie details");
                self.phase = Phase::Error(DETAILS_ERROR.to_string());
            }
            Err(e) => {
                tracing::warn!(movie_id = self.id, error = %e, "failed to fetch movie details");
                self.phase = Phase::Error(DETAILS_ERROR.to_string());
            }
        }
        true
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn movie(&self) -> Option<&Movie> {
        self.bundle.as_ref().map(|bundle| &bundle.details)
    }

    #[must_use]
    pub fn top_cast(&self) -> &[CastMember] {
        match &self.bundle {
            Some(bundle) => bundle.credits.top_cast(TOP_CAST),
            None => &[],
        }
    }

    #[must_use]
    pub fn trailer_url(&self) -> Option<String> {
        self.bundle.as_ref().and_then(MovieBundle::trailer_url)
    }

    /// Removes the shown movie from favorites if present, adds it otherwise.
    ///
    /// Returns the new favorite state, or `None` if nothing is loaded.
    pub fn toggle_favorite<S: StateStorage>(&self, store: &mut Store<S>) -> Option<bool> {
        let movie = self.movie()?;
        Some(store.toggle_favorite(movie))
    }

    /// Where "go back" leads: the active search, or home.
    #[must_use]
    pub fn back_route<S: StateStorage>(store: &Store<S>) -> Route {
        if store.search_query().is_empty() {
            Route::Home
        } else {
            Route::Search {
                query: store.search_query().to_string(),
                page: store.current_page(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Credits, Video};
    use crate::storage::MemoryStorage;

    fn token(actions: &[Action]) -> RequestToken {
        match actions {
            [Action::Fetch { token, .. }] => *token,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    fn bundle(id: u64, trailer: Option<Video>) -> FetchOutcome {
        Ok(FetchResponse::Bundle(Box::new(MovieBundle {
            details: Movie::new(id, "Inception"),
            credits: Credits {
                cast: (1..=8)
                    .map(|n| CastMember {
                        id: n,
                        name: format!("Actor {n}"),
                        character: String::new(),
                        profile_path: None,
                    })
                    .collect(),
            },
            trailer,
        })))
    }

    #[test]
    fn bundle_without_trailer_is_success() {
        let mut generation = Generation::new();
        let (mut page, actions) = DetailsPage::mount(27205, &mut generation);

        assert!(page.on_fetch(token(&actions), bundle(27205, None)));

        assert_eq!(page.phase(), &Phase::Success);
        assert!(page.trailer_url().is_none());
        assert_eq!(page.movie().map(|m| m.id), Some(27205));
        assert_eq!(page.top_cast().len(), TOP_CAST);
    }

    #[test]
    fn trailer_url_uses_embed_player() {
        let mut generation = Generation::new();
        let (mut page, actions) = DetailsPage::mount(27205, &mut generation);
        let trailer = Video {
            kind: "Trailer".to_string(),
            site: "YouTube".to_string(),
            key: "YoHD9XEInc0".to_string(),
        };
        page.on_fetch(token(&actions), bundle(27205, Some(trailer)));
        assert_eq!(
            page.trailer_url().as_deref(),
            Some("https://www.youtube.com/embed/YoHD9XEInc0")
        );
    }

    #[test]
    fn failure_sets_error_without_movie() {
        let mut generation = Generation::new();
        let (mut page, actions) = DetailsPage::mount(1, &mut generation);
        page.on_fetch(token(&actions), Err(ApiError::NotFound("/movie/1".into())));
        assert_eq!(page.phase().error(), Some(DETAILS_ERROR));
        assert!(page.movie().is_none());
    }

    #[test]
    fn same_id_does_not_refetch() {
        let mut generation = Generation::new();
        let (mut page, _) = DetailsPage::mount(603, &mut generation);
        assert!(page.show(603, &mut generation).is_empty());
        assert_eq!(page.show(604, &mut generation).len(), 1);
    }

    #[test]
    fn favorite_toggle_uses_loaded_details() {
        let mut store = Store::open(MemoryStorage::new());
        let mut generation = Generation::new();
        let (mut page, actions) = DetailsPage::mount(27205, &mut generation);

        assert_eq!(page.toggle_favorite(&mut store), None);

        page.on_fetch(token(&actions), bundle(27205, None));
        assert_eq!(page.toggle_favorite(&mut store), Some(true));
        assert_eq!(store.favorites()[0].title, "Inception");
        assert_eq!(page.toggle_favorite(&mut store), Some(false));
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn back_route_follows_active_search() {
        let mut store = Store::open(MemoryStorage::new());
        assert_eq!(DetailsPage::back_route(&store), Route::Home);

        store.set_search_query("batman");
        store.set_current_page(2);
        assert_eq!(
            DetailsPage::back_route(&store).to_string(),
            "/search?query=batman&page=2"
        );
    }
}
