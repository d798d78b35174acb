//! Fetch request and response types exchanged with the page controllers.
//!
//! Controllers describe what they need as a [`FetchRequest`]; the driver runs
//! it and returns a [`FetchOutcome`] tagged with the controller's token.

use crate::api::MovieBundle;
use crate::domain::{ApiError, Movie, MoviePage};

/// One unit of remote work requested by a page controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Details for a fixed list of movie ids, all in flight together.
    DeveloperPicks {
        /// Ids in display order.
        ids: Vec<u64>,
    },

    /// First trending page, truncated to `limit` movies.
    TrendingPreview {
        /// Maximum number of movies kept.
        limit: usize,
    },

    /// One page of title search results.
    Search {
        query: String,
        page: u32,
    },

    /// One page of the weekly trending listing.
    Trending {
        page: u32,
    },

    /// Details, credits, and videos for one movie.
    MovieBundle {
        id: u64,
    },
}

impl FetchRequest {
    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DeveloperPicks { .. } => "developer_picks",
            Self::TrendingPreview { .. } => "trending_preview",
            Self::Search { .. } => "search",
            Self::Trending { .. } => "trending",
            Self::MovieBundle { .. } => "movie_bundle",
        }
    }
}

/// Typed payload of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// A flat list (developer picks, trending preview).
    Movies(Vec<Movie>),

    /// One page of a paginated listing (search, trending).
    Page(MoviePage),

    /// Everything the details page shows for one movie.
    Bundle(Box<MovieBundle>),
}

/// Result of running one [`FetchRequest`].
pub type FetchOutcome = Result<FetchResponse, ApiError>;
