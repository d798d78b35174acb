//! Storage layer for the persisted application snapshot.
//!
//! The store owns the state in memory and commits the whole snapshot through a
//! [`StateStorage`] backend after every mutation.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage with atomic writes
//! - `memory`: In-memory storage for tests and ephemeral runs
//! - `models`: Persisted snapshot and on-disk envelope

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::StateStorage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::{PersistedState, StateEnvelope, STATE_VERSION};
