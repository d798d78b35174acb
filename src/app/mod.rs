//! Application layer coordinating the store, page controllers, and actions.
//!
//! This module sits between the driver (and the binary) and the
//! domain/storage/routes layers. It implements the event-driven architecture
//! behind the interactive front end.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → Store / Controllers → Actions → Driver
//!                           ↑                                             ↓
//!                           └──────────── Fetch Completions ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`commands`]: Parsing of interactive input lines into events
//! - [`handler`]: Event processing and page activation
//! - [`queries`]: Pure read helpers over favorites
//! - [`state`]: Central application state container
//! - [`store`]: Persisted state store with write-through commits

pub mod actions;
pub mod commands;
pub mod handler;
pub mod queries;
pub mod state;
pub mod store;

pub use actions::Action;
pub use commands::{parse_command, Command};
pub use handler::{handle_event, Event};
pub use state::{AppState, Page};
pub use store::Store;
