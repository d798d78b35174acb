//! Home page: developer picks and a trending preview.
//!
//! Both groups load independently and share one error slot; when both fail,
//! the message of the last failure to arrive is shown.

use super::phase::{ActiveRequest, Generation, Phase, RequestToken};
use crate::app::{Action, Store};
use crate::domain::Movie;
use crate::fetcher::{FetchOutcome, FetchRequest, FetchResponse};
use crate::storage::StateStorage;

pub const PICKS_ERROR: &str = "Failed to fetch developer picks. Please try again.";
pub const TRENDING_ERROR: &str = "Failed to fetch trending movies. Please try again.";

/// Movie ids shown as developer picks unless configured otherwise.
pub const DEFAULT_DEVELOPER_PICKS: [u64; 4] = [603, 157_336, 128, 155];

/// Trending movies shown on the home page unless configured otherwise.
pub const DEFAULT_TRENDING_PREVIEW: usize = 8;

/// What the home page loads on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSettings {
    pub developer_picks: Vec<u64>,
    pub trending_preview_count: usize,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            developer_picks: DEFAULT_DEVELOPER_PICKS.to_vec(),
            trending_preview_count: DEFAULT_TRENDING_PREVIEW,
        }
    }
}

/// Home page controller.
#[derive(Debug, Default)]
pub struct HomePage {
    pub developer_picks: Vec<Movie>,
    pub trending: Vec<Movie>,
    picks_phase: Phase,
    trending_phase: Phase,
    error: Option<String>,
    picks_request: ActiveRequest,
    trending_request: ActiveRequest,
}

impl HomePage {
    /// Mounts the page: clears the search snapshot and requests both groups.
    pub fn mount<S: StateStorage>(
        store: &mut Store<S>,
        generation: &mut Generation,
        settings: &HomeSettings,
    ) -> (Self, Vec<Action>) {
        store.clear_search();

        let mut page = Self {
            picks_phase: Phase::Loading,
            trending_phase: Phase::Loading,
            ..Self::default()
        };

        let picks = page.picks_request.issue(generation);
        let trending = page.trending_request.issue(generation);

        tracing::debug!(
            picks = settings.developer_picks.len(),
            preview = settings.trending_preview_count,
            "home page mounted"
        );

        let actions = vec![
            Action::fetch(
                picks,
                FetchRequest::DeveloperPicks {
                    ids: settings.developer_picks.clone(),
                },
            ),
            Action::fetch(
                trending,
                FetchRequest::TrendingPreview {
                    limit: settings.trending_preview_count,
                },
            ),
        ];

        (page, actions)
    }

    /// Applies a fetch completion. Returns `false` if the token is stale.
    pub fn on_fetch(&mut self, token: RequestToken, outcome: FetchOutcome) -> bool {
        if self.picks_request.complete(token) {
            match outcome {
                Ok(FetchResponse::Movies(movies)) => {
                    tracing::debug!(count = movies.len(), "developer picks loaded");
                    self.developer_picks = movies;
                    self.picks_phase = Phase::Success;
                }
                Ok(other) => {
                    tracing::warn!(response = ?other, "unexpected response for developer picks");
                    self.fail_picks();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to fetch developer picks");
                    self.fail_picks();
                }
            }
            return true;
        }

        if self.trending_request.complete(token) {
            match outcome {
                Ok(FetchResponse::Movies(movies)) => {
                    tracing::debug!(count = movies.len(), "trending preview loaded");
                    self.trending = movies;
                    self.trending_phase = Phase::Success;
                }
                Ok(other) => {
                    tracing::warn!(response = ?other, "unexpected response for trending preview");
                    self.fail_trending();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to fetch trending preview");
                    self.fail_trending();
                }
            }
            return true;
        }

        false
    }

    fn fail_picks(&mut self) {
        self.picks_phase = Phase::Error(PICKS_ERROR.to_string());
        self.error = Some(PICKS_ERROR.to_string());
    }

    fn fail_trending(&mut self) {
        self.trending_phase = Phase::Error(TRENDING_ERROR.to_string());
        self.error = Some(TRENDING_ERROR.to_string());
    }

    #[must_use]
    pub const fn picks_phase(&self) -> &Phase {
        &self.picks_phase
    }

    #[must_use]
    pub const fn trending_phase(&self) -> &Phase {
        &self.trending_phase
    }

    /// Combined phase of the page.
    ///
    /// Loading while either group is in flight, then the shared error if any
    /// group failed.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.picks_phase.is_loading() || self.trending_phase.is_loading() {
            return Phase::Loading;
        }
        if let Some(message) = &self.error {
            return Phase::Error(message.clone());
        }
        if self.picks_phase == Phase::Idle && self.trending_phase == Phase::Idle {
            return Phase::Idle;
        }
        Phase::Success
    }

    /// Movies listed on the page, trending preview first.
    pub fn listed(&self) -> impl Iterator<Item = &Movie> {
        self.trending.iter().chain(self.developer_picks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;
    use crate::storage::MemoryStorage;

    fn mounted() -> (HomePage, Vec<Action>, Store<MemoryStorage>) {
        let mut store = Store::open(MemoryStorage::new());
        store.set_search_query("batman");
        let mut generation = Generation::new();
        let (page, actions) = HomePage::mount(&mut store, &mut generation, &HomeSettings::default());
        (page, actions, store)
    }

    fn token(action: &Action) -> RequestToken {
        match action {
            Action::Fetch { token, .. } => *token,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn mount_clears_search_and_requests_both_groups() {
        let (page, actions, store) = mounted();
        assert_eq!(store.search_query(), "");
        assert_eq!(page.phase(), Phase::Loading);
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[0],
            Action::Fetch { request: FetchRequest::DeveloperPicks { ids }, .. }
                if ids == &vec![603, 157_336, 128, 155]
        ));
        assert!(matches!(
            &actions[1],
            Action::Fetch { request: FetchRequest::TrendingPreview { limit: 8 }, .. }
        ));
    }

    #[test]
    fn picks_failure_with_trending_success_shows_picks_error() {
        let (mut page, actions, _store) = mounted();

        assert!(page.on_fetch(token(&actions[1]), Ok(FetchResponse::Movies(vec![Movie::new(1, "A")]))));
        assert!(page.on_fetch(token(&actions[0]), Err(ApiError::NotFound("/movie/603".into()))));

        assert_eq!(page.phase(), Phase::Error(PICKS_ERROR.to_string()));
        assert_eq!(page.trending.len(), 1);
        assert!(page.developer_picks.is_empty());
    }

    #[test]
    fn last_error_wins() {
        let (mut page, actions, _store) = mounted();
        page.on_fetch(token(&actions[0]), Err(ApiError::Decode("bad".into())));
        page.on_fetch(token(&actions[1]), Err(ApiError::Decode("bad".into())));
        assert_eq!(page.phase().error(), Some(TRENDING_ERROR));
    }

    #[test]
    fn unknown_token_is_ignored() {
        let (mut page, _actions, _store) = mounted();
        let mut other = Generation::new();
        other.next_token();
        other.next_token();
        let foreign = other.next_token();
        assert!(!page.on_fetch(foreign, Ok(FetchResponse::Movies(Vec::new()))));
        assert_eq!(page.phase(), Phase::Loading);
    }

    #[test]
    fn listed_shows_trending_before_picks() {
        let (mut page, actions, _store) = mounted();
        page.on_fetch(token(&actions[0]), Ok(FetchResponse::Movies(vec![Movie::new(603, "Matrix")])));
        page.on_fetch(token(&actions[1]), Ok(FetchResponse::Movies(vec![Movie::new(1, "Now")])));
        let ids: Vec<u64> = page.listed().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 603]);
        assert_eq!(page.phase(), Phase::Success);
    }
}
