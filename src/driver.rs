//! Single-threaded driver executing handler actions.
//!
//! The [`Driver`] owns the application state, the remote client, the history
//! stack, and the set of in-flight fetches. It runs the event handler, turns
//! the returned actions into effects, and feeds every fetch completion back as
//! an [`Event::FetchCompleted`].
//!
//! Fetches are never cancelled. A completion that arrives after its page was
//! left or re-triggered carries a token nobody waits for and is dropped by the
//! handler.

use crate::api::MovieApi;
use crate::app::{handle_event, Action, AppState, Event, Page};
use crate::domain::error::Result;
use crate::fetcher::{self, FetchRequest};
use crate::routes::{RequestToken, Route};
use crate::storage::StateStorage;
use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use std::rc::Rc;

/// Drives an [`AppState`] against a [`MovieApi`].
pub struct Driver<A: MovieApi + 'static, S: StateStorage> {
    state: AppState<S>,
    api: Rc<A>,
    history: Vec<Route>,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Event>>,
}

impl<A: MovieApi + 'static, S: StateStorage> Driver<A, S> {
    pub fn new(state: AppState<S>, api: A) -> Self {
        Self {
            state,
            api: Rc::new(api),
            history: Vec::new(),
            in_flight: FuturesUnordered::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState<S> {
        &self.state
    }

    /// Current location.
    #[must_use]
    pub const fn location(&self) -> &Route {
        &self.state.route
    }

    /// Locations behind the current one, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Number of fetches that have not completed yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Consumes the driver, returning the application state.
    pub fn into_state(self) -> AppState<S> {
        self.state
    }

    /// Pushes `route` onto the history and activates it.
    ///
    /// Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn navigate(&mut self, route: Route) -> Result<bool> {
        let event = self.push_location(route);
        self.run(event)
    }

    /// Runs the handler for `event` and executes the resulting actions.
    ///
    /// Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        self.run(event)
    }

    /// Waits for the next fetch to complete and feeds it to the handler.
    ///
    /// Returns `None` when nothing is in flight.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub async fn next_completion(&mut self) -> Result<Option<bool>> {
        let Some(event) = self.in_flight.next().await else {
            return Ok(None);
        };
        self.run(event).map(Some)
    }

    /// Drives every in-flight fetch, including fetches they trigger, to
    /// completion.
    ///
    /// Returns the number of completions processed.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub async fn settle(&mut self) -> Result<usize> {
        let mut completed = 0;
        while self.next_completion().await?.is_some() {
            completed += 1;
        }
        tracing::debug!(completed = completed, "driver settled");
        Ok(completed)
    }

    fn run(&mut self, event: Event) -> Result<bool> {
        let mut pending = VecDeque::from([event]);
        let mut render = false;

        while let Some(event) = pending.pop_front() {
            let (changed, actions) = handle_event(&mut self.state, event)?;
            render |= changed;

            for action in actions {
                match action {
                    Action::Fetch { token, request } => self.spawn(token, request),
                    Action::Navigate(route) => pending.push_back(self.push_location(route)),
                    Action::ReplaceRoute(route) => {
                        if route == self.state.route {
                            tracing::trace!(route = %route, "location already current");
                        } else {
                            tracing::debug!(from = %self.state.route, to = %route, "replacing location");
                            pending.push_back(Event::Navigate(route));
                        }
                    }
                    Action::Back => match self.history.pop() {
                        Some(previous) => pending.push_back(Event::Navigate(previous)),
                        None => tracing::debug!("history is empty"),
                    },
                }
            }
        }

        Ok(render)
    }

    fn push_location(&mut self, route: Route) -> Event {
        let mounted = !matches!(self.state.page, Page::Unmounted);
        if mounted && route != self.state.route {
            self.history.push(self.state.route.clone());
        }
        Event::Navigate(route)
    }

    fn spawn(&mut self, token: RequestToken, request: FetchRequest) {
        tracing::debug!(token = %token, request = request.kind(), "queueing fetch");
        let api = Rc::clone(&self.api);
        self.in_flight.push(
            async move {
                let outcome = fetcher::execute(api.as_ref(), request).await;
                Event::FetchCompleted { token, outcome }
            }
            .boxed_local(),
        );
    }
}
