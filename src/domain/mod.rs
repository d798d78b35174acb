//! Domain layer for moviedeck.
//!
//! Core types shared by every other layer, independent of HTTP, storage, or
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie model and the metadata service payload shapes
//!
//! # Examples
//!
//! ```
//! use moviedeck::domain::{Movie, Result};
//!
//! fn pick() -> Result<Movie> {
//!     Ok(Movie::new(603, "The Matrix"))
//! }
//! # assert_eq!(pick().unwrap().id, 603);
//! ```

pub mod error;
pub mod movie;

pub use error::{ApiError, MovieDeckError, Result};
pub use movie::{
    find_trailer, CastMember, Credits, Genre, Movie, MoviePage, Video, VideoList, IMAGE_BASE_URL,
};
