//! HTTP client for the TMDB v3 API.

use super::MovieApi;
use crate::domain::error::{MovieDeckError, Result};
use crate::domain::{ApiError, Credits, Movie, MoviePage, VideoList};
use crate::Config;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::Instrument;

/// Longest response body excerpt carried in a service error.
const ERROR_BODY_LIMIT: usize = 200;

/// `reqwest`-backed [`MovieApi`] implementation.
///
/// One base URL and one `api_key` query parameter are attached to every
/// request. Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDeckError::Api`] if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| MovieDeckError::Api(ApiError::Transport(e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> std::result::Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let span = tracing::debug_span!("tmdb_get", path = %path);
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(url).query(&[("api_key", self.api_key.as_str())]);
        if let Some(query) = query {
            request = request.query(query);
        }

        async move {
            let response = request.send().await.map_err(|e| {
                tracing::debug!(error = %e, "request failed without response");
                ApiError::Transport(e)
            })?;
            Self::parse_response(path, response).await
        }
        .instrument(span)
        .await
    }

    async fn parse_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> std::result::Result<T, ApiError> {
        let status = response.status();
        tracing::debug!(path = %path, status = status.as_u16(), "response received");

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body.chars().take(ERROR_BODY_LIMIT).collect()
            };
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }
}

impl MovieApi for TmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> std::result::Result<MoviePage, ApiError> {
        let page = page.to_string();
        self.get_json("/search/movie", Some(&[("query", query), ("page", page.as_str())]))
            .await
    }

    async fn trending_movies(&self, page: u32) -> std::result::Result<MoviePage, ApiError> {
        let page = page.to_string();
        self.get_json("/trending/movie/week", Some(&[("page", page.as_str())]))
            .await
    }

    async fn movie_details(&self, id: u64) -> std::result::Result<Movie, ApiError> {
        let path = format!("/movie/{id}");
        self.get_json::<Movie, ()>(&path, None).await
    }

    async fn movie_credits(&self, id: u64) -> std::result::Result<Credits, ApiError> {
        let path = format!("/movie/{id}/credits");
        self.get_json::<Credits, ()>(&path, None).await
    }

    async fn movie_videos(&self, id: u64) -> std::result::Result<VideoList, ApiError> {
        let path = format!("/movie/{id}/videos");
        self.get_json::<VideoList, ()>(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = Config {
            api_base_url: "https://api.themoviedb.org/3/".to_string(),
            ..Config::default()
        };
        let client = TmdbClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.themoviedb.org/3");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        };
        let client = TmdbClient::new(&config).unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }

    #[tokio::test]
    async fn request_events_are_recorded_inside_span() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("client.log");
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(crate::observability::RotatingFileWriter::new(log_path.clone()))
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let config = Config {
            api_base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: Some(2),
            ..Config::default()
        };
        let client = TmdbClient::new(&config).unwrap();
        let _ = client.trending_movies(1).await;

        let log = std::fs::read_to_string(log_path).unwrap();
        assert!(log.contains("tmdb_get{path=/trending/movie/week}"));
    }
}
