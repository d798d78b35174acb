//! Maps fetch requests onto the remote data client.

use super::messages::{FetchOutcome, FetchRequest, FetchResponse};
use crate::api::{fetch_details_for, fetch_movie_bundle, MovieApi};

/// Runs `request` against `api` and returns its typed outcome.
///
/// Each request maps to exactly one aggregate call; failures are passed
/// through untouched for the issuing controller to handle.
pub async fn execute<A: MovieApi>(api: &A, request: FetchRequest) -> FetchOutcome {
    let kind = request.kind();
    tracing::debug!(request = kind, "executing fetch");

    let outcome = match request {
        FetchRequest::DeveloperPicks { ids } => {
            fetch_details_for(api, &ids).await.map(FetchResponse::Movies)
        }
        FetchRequest::TrendingPreview { limit } => api.trending_movies(1).await.map(|page| {
            let mut movies = page.results;
            movies.truncate(limit);
            FetchResponse::Movies(movies)
        }),
        FetchRequest::Search { query, page } => {
            api.search_movies(&query, page).await.map(FetchResponse::Page)
        }
        FetchRequest::Trending { page } => {
            api.trending_movies(page).await.map(FetchResponse::Page)
        }
        FetchRequest::MovieBundle { id } => fetch_movie_bundle(api, id)
            .await
            .map(|bundle| FetchResponse::Bundle(Box::new(bundle))),
    };

    match &outcome {
        Ok(_) => tracing::debug!(request = kind, "fetch succeeded"),
        Err(e) => tracing::debug!(request = kind, error = %e, "fetch failed"),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Credits, Movie, MoviePage, VideoList};

    struct ListingApi;

    impl MovieApi for ListingApi {
        async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
            if query.is_empty() {
                return Err(ApiError::Service {
                    status: 422,
                    message: "query must be provided".to_string(),
                });
            }
            Ok(MoviePage::new(page, vec![Movie::new(268, query)], 3))
        }

        async fn trending_movies(&self, page: u32) -> Result<MoviePage, ApiError> {
            let results = (1..=20).map(|id| Movie::new(id, format!("Trending {id}"))).collect();
            Ok(MoviePage::new(page, results, 500))
        }

        async fn movie_details(&self, id: u64) -> Result<Movie, ApiError> {
            Ok(Movie::new(id, "Details"))
        }

        async fn movie_credits(&self, _id: u64) -> Result<Credits, ApiError> {
            Ok(Credits::default())
        }

        async fn movie_videos(&self, _id: u64) -> Result<VideoList, ApiError> {
            Ok(VideoList::default())
        }
    }

    #[tokio::test]
    async fn trending_preview_is_truncated() {
        let outcome = execute(&ListingApi, FetchRequest::TrendingPreview { limit: 8 }).await;
        let Ok(FetchResponse::Movies(movies)) = outcome else {
            panic!("expected a movie list");
        };
        assert_eq!(movies.len(), 8);
        assert_eq!(movies[0].id, 1);
    }

    #[tokio::test]
    async fn search_returns_requested_page() {
        let request = FetchRequest::Search {
            query: "batman".to_string(),
            page: 2,
        };
        let Ok(FetchResponse::Page(page)) = execute(&ListingApi, request).await else {
            panic!("expected a page");
        };
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn service_errors_pass_through() {
        let request = FetchRequest::Search {
            query: String::new(),
            page: 1,
        };
        let outcome = execute(&ListingApi, request).await;
        assert!(matches!(outcome, Err(ApiError::Service { status: 422, .. })));
    }

    #[tokio::test]
    async fn bundle_request_yields_bundle() {
        let outcome = execute(&ListingApi, FetchRequest::MovieBundle { id: 603 }).await;
        let Ok(FetchResponse::Bundle(bundle)) = outcome else {
            panic!("expected a bundle");
        };
        assert_eq!(bundle.details.id, 603);
        assert!(bundle.trailer.is_none());
    }
}
