//! Fetch executor for page controller requests.
//!
//! Page controllers never call the remote client directly. They emit
//! [`FetchRequest`]s; the driver runs them through [`execute`] and feeds each
//! [`FetchOutcome`] back as an event.
//!
//! # Architecture
//!
//! - `messages`: Request/response types
//! - `handler`: Mapping from a request to one aggregate client call

pub mod handler;
pub mod messages;

pub use handler::execute;
pub use messages::{FetchOutcome, FetchRequest, FetchResponse};
