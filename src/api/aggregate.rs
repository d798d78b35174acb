//! Concurrent composition of several queries into one unit of work.
//!
//! Every request in an aggregate is created before any of them is awaited, so
//! they are in flight together. The aggregate succeeds only if all of them do;
//! the first failure is returned and partial results are dropped.

use super::MovieApi;
use crate::domain::{find_trailer, ApiError, Credits, Movie, Video};
use futures_util::future::try_join_all;

/// Details, cast, and trailer for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieBundle {
    pub details: Movie,
    pub credits: Credits,
    /// First YouTube trailer, `None` when the movie has none.
    pub trailer: Option<Video>,
}

impl MovieBundle {
    /// Embeddable trailer URL, if a trailer was found.
    #[must_use]
    pub fn trailer_url(&self) -> Option<String> {
        self.trailer.as_ref().map(Video::embed_url)
    }
}

/// Fetches details for every id in `ids`, preserving input order.
///
/// # Errors
///
/// Returns the first [`ApiError`] raised by any of the requests.
pub async fn fetch_details_for<A>(api: &A, ids: &[u64]) -> Result<Vec<Movie>, ApiError>
where
    A: MovieApi,
{
    tracing::debug!(count = ids.len(), "fetching movie details batch");
    try_join_all(ids.iter().map(|&id| api.movie_details(id))).await
}

/// Fetches details, credits, and videos for `id` together.
///
/// # Errors
///
/// Returns the first [`ApiError`] raised by any of the three requests.
pub async fn fetch_movie_bundle<A>(api: &A, id: u64) -> Result<MovieBundle, ApiError>
where
    A: MovieApi,
{
    tracing::debug!(movie_id = id, "fetching movie bundle");
    let (details, credits, videos) = futures_util::try_join!(
        api.movie_details(id),
        api.movie_credits(id),
        api.movie_videos(id)
    )?;

    let trailer = find_trailer(&videos.results).cloned();
    Ok(MovieBundle {
        details,
        credits,
        trailer,
    })
}
