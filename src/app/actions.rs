//! Actions representing side effects to be executed by the driver.
//!
//! The event handler never performs I/O or touches the location itself. It
//! returns a `Vec<Action>` and the [`Driver`](crate::driver::Driver) executes
//! them in order: fetches are queued together, route changes are applied to
//! the location and fed back as navigation events.
//!
//! # Example
//!
//! ```rust
//! use moviedeck::app::Action;
//! use moviedeck::routes::Route;
//!
//! let actions = vec![Action::Navigate(Route::Trending { page: 2 })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::fetcher::FetchRequest;
use crate::routes::{RequestToken, Route};

/// Commands representing side effects to be executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a remote fetch and reports back with `token`.
    ///
    /// Every fetch emitted for one event is in flight before any of them is
    /// polled.
    Fetch {
        /// Token of the controller activation that issued the fetch.
        token: RequestToken,
        /// Work to perform.
        request: FetchRequest,
    },

    /// Pushes a new location onto the history and activates it.
    Navigate(Route),

    /// Rewrites the current location without a history entry.
    ///
    /// The page is re-activated only if the location actually changed.
    ReplaceRoute(Route),

    /// Returns to the previous history entry, if there is one.
    Back,
}

impl Action {
    /// Shorthand for a fetch action.
    #[must_use]
    pub const fn fetch(token: RequestToken, request: FetchRequest) -> Self {
        Self::Fetch { token, request }
    }
}
