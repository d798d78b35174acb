//! Remote data client for the movie metadata service.
//!
//! The [`MovieApi`] trait maps the five logical queries the application needs
//! onto the service. [`TmdbClient`] is the HTTP implementation; tests substitute
//! scripted fakes.
//!
//! # Modules
//!
//! - [`client`]: `reqwest`-backed client with the process-wide API key
//! - [`aggregate`]: Concurrent composition of several queries into one unit

pub mod aggregate;
pub mod client;

pub use aggregate::{fetch_details_for, fetch_movie_bundle, MovieBundle};
pub use client::TmdbClient;

use crate::domain::{ApiError, Credits, Movie, MoviePage, VideoList};

/// Read-only queries against the movie metadata service.
///
/// Implementations do not retry, cache, or swallow failures: a single failed
/// attempt is returned to the caller as-is.
#[allow(async_fn_in_trait)]
pub trait MovieApi {
    /// Searches movies by title, one page at a time (pages start at 1).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError>;

    /// Weekly trending movies, one page at a time (pages start at 1).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn trending_movies(&self, page: u32) -> Result<MoviePage, ApiError>;

    /// Full details for one movie, including genres and runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id does not exist.
    async fn movie_details(&self, id: u64) -> Result<Movie, ApiError>;

    /// Cast for one movie.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn movie_credits(&self, id: u64) -> Result<Credits, ApiError>;

    /// Videos (trailers, teasers, ...) for one movie.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn movie_videos(&self, id: u64) -> Result<VideoList, ApiError>;
}
