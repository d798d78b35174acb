//! Structured logging to a rotating file.
//!
//! stdout belongs to the interactive front end, so every `tracing` event is
//! written to `moviedeck.log` in the data directory instead.
//!
//! # Features
//!
//! - **Level Filter**: `RUST_LOG`, then `trace_level` from the config, then `info`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer usable as a `MakeWriter`

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
