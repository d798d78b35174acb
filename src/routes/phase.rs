//! Load phase and request tokens shared by every page controller.

use std::fmt;

/// Load state of a page controller.
///
/// `Idle -> Loading` on a trigger, `Loading -> Success | Error` when the fetch
/// resolves, and `Success | Error -> Loading` on the next trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    /// Fetch failed; carries the user-facing message.
    Error(String),
}

impl Phase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-facing error message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued fetch. Completions carrying any other token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`RequestToken`]s.
///
/// One generation is shared by all controllers, so a token is never reused
/// across pages for the lifetime of the application.
#[derive(Debug, Default)]
pub struct Generation {
    last: u64,
}

impl Generation {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Issues a token newer than every token issued before.
    pub fn next_token(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// Slot holding the token of the fetch a controller is waiting for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRequest(Option<RequestToken>);

impl ActiveRequest {
    /// Replaces the awaited token with a fresh one and returns it.
    pub fn issue(&mut self, generation: &mut Generation) -> RequestToken {
        let token = generation.next_token();
        self.0 = Some(token);
        token
    }

    /// Consumes the slot if `token` is the awaited one.
    ///
    /// Returns `false` for stale or unknown tokens, leaving the slot untouched.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if self.0 == Some(token) {
            self.0 = None;
            true
        } else {
            false
        }
    }
}
