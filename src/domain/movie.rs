//! Movie domain model and the payload shapes consumed from the metadata service.
//!
//! Movies are external entities: they are fetched, displayed, and copied
//! wholesale into favorites, but never mutated locally. Every field that list
//! endpoints may omit carries a serde default so that search and trending
//! payloads decode into the same type as the details payload.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default base URL for poster and profile images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Video type identifying a trailer.
pub const TRAILER_TYPE: &str = "Trailer";

/// Hosting site trailers are expected on.
pub const TRAILER_SITE: &str = "YouTube";

/// A genre attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A movie as returned by the metadata service.
///
/// # Fields
///
/// - `id`: Unique service identifier, the key for favorites
/// - `vote_average`: Rating in `0.0..=10.0`
/// - `runtime`: Minutes, only present in details payloads
/// - `genres`: Ordered genres, only present in details payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Movie {
    /// Creates a movie with only an identifier and title set.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviedeck::Movie;
    ///
    /// let movie = Movie::new(603, "The Matrix");
    /// assert_eq!(movie.id, 603);
    /// assert!(movie.genres.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
            vote_average: 0.0,
            vote_count: 0,
            overview: String::new(),
            runtime: None,
            genres: Vec::new(),
        }
    }

    /// Genre names in service order.
    #[must_use]
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    /// Year component of the release date, if the date parses as `YYYY-MM-DD`.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviedeck::Movie;
    ///
    /// let mut movie = Movie::new(603, "The Matrix");
    /// movie.release_date = Some("1999-03-30".to_string());
    /// assert_eq!(movie.release_year(), Some(1999));
    ///
    /// movie.release_date = Some(String::new());
    /// assert_eq!(movie.release_year(), None);
    /// ```
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year())
    }

    /// Rating rounded to one decimal place.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Full poster URL under `image_base` for the given size (e.g. `w500`).
    #[must_use]
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        let image_base = image_base.trim_end_matches('/');
        self.poster_path
            .as_ref()
            .map(|path| format!("{image_base}/{size}{path}"))
    }
}

/// One page of a paginated listing (search or trending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

const fn first_page() -> u32 {
    1
}

impl MoviePage {
    /// Builds a page from a result list, mostly useful for tests and fakes.
    #[must_use]
    pub fn new(page: u32, results: Vec<Movie>, total_pages: u32) -> Self {
        let total_results = results.len() as u64;
        Self {
            page,
            results,
            total_pages,
            total_results,
        }
    }
}

/// A cast member from the credits payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Credits payload for one movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl Credits {
    /// The first `count` billed cast members.
    #[must_use]
    pub fn top_cast(&self, count: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(count)]
    }
}

/// A video attached to a movie (trailer, teaser, featurette, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub key: String,
}

impl Video {
    /// Whether this video is a trailer hosted on the expected platform.
    #[must_use]
    pub fn is_trailer(&self) -> bool {
        self.kind == TRAILER_TYPE && self.site == TRAILER_SITE
    }

    /// Embeddable player URL.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.key)
    }
}

/// Videos payload for one movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Returns the first trailer in service order, if any.
#[must_use]
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|video| video.is_trailer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_payload_decodes_with_defaults() {
        let json = r#"{"id": 27205, "title": "Inception", "genre_ids": [28, 878], "vote_average": 8.4}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.runtime, None);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.rating_label(), "8.4");
    }

    #[test]
    fn details_payload_keeps_genre_order() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "release_date": "1999-03-30",
            "vote_average": 8.217,
            "vote_count": 26000,
            "overview": "Set in the 22nd century...",
            "runtime": 136,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.genre_names(), vec!["Action", "Science Fiction"]);
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.rating_label(), "8.2");
        assert_eq!(
            movie.poster_url(IMAGE_BASE_URL, "w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg")
        );
    }

    #[test]
    fn null_poster_and_date_are_accepted() {
        let json = r#"{"id": 1, "title": "Untitled", "poster_path": null, "release_date": null}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.poster_url(IMAGE_BASE_URL, "w500").is_none());
        assert!(movie.release_year().is_none());
    }

    #[test]
    fn page_defaults_total_pages_to_one() {
        let page: MoviePage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn trailer_requires_type_and_site() {
        let videos = vec![
            Video { kind: "Teaser".into(), site: "YouTube".into(), key: "t1".into() },
            Video { kind: "Trailer".into(), site: "Vimeo".into(), key: "v1".into() },
            Video { kind: "Trailer".into(), site: "YouTube".into(), key: "y1".into() },
            Video { kind: "Trailer".into(), site: "YouTube".into(), key: "y2".into() },
        ];
        let trailer = find_trailer(&videos).unwrap();
        assert_eq!(trailer.key, "y1");
        assert_eq!(trailer.embed_url(), "https://www.youtube.com/embed/y1");
    }

    #[test]
    fn no_trailer_when_only_teasers() {
        let videos = vec![Video { kind: "Teaser".into(), site: "YouTube".into(), key: "t1".into() }];
        assert!(find_trailer(&videos).is_none());
    }

    #[test]
    fn top_cast_is_bounded_by_cast_size() {
        let credits = Credits {
            cast: vec![CastMember {
                id: 6384,
                name: "Keanu Reeves".into(),
                character: "Neo".into(),
                profile_path: None,
            }],
        };
        assert_eq!(credits.top_cast(5).len(), 1);
    }
}
