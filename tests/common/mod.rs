//! Scripted metadata service shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use moviedeck::api::MovieApi;
use moviedeck::domain::{ApiError, CastMember, Credits, Movie, MoviePage, Video, VideoList};
use moviedeck::storage::{MemoryStorage, StateStorage};
use moviedeck::{initialize, Config, Driver};

/// Movies returned per listing page.
pub const PAGE_SIZE: usize = 10;

/// Record of every query the fake answered, e.g. `search:batman:1`.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// In-process `MovieApi` with deterministic answers.
///
/// Listing movies get ids `page * 100 + n`. Details succeed for every id not
/// marked missing.
#[derive(Debug, Default)]
pub struct FakeApi {
    pub search_total_pages: u32,
    pub trending_total_pages: u32,
    pub fail_search: bool,
    pub fail_trending: bool,
    pub missing: HashSet<u64>,
    pub videos: HashMap<u64, Vec<Video>>,
    pub calls: CallLog,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            search_total_pages: 3,
            trending_total_pages: 5,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn listing(prefix: &str, page: u32, total: u32) -> MoviePage {
        let results = (1..=PAGE_SIZE as u64)
            .map(|n| Movie::new(u64::from(page) * 100 + n, format!("{prefix} {page}.{n}")))
            .collect();
        MoviePage::new(page, results, total)
    }

    fn service_error() -> ApiError {
        ApiError::Service {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }
}

impl MovieApi for FakeApi {
    async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage, ApiError> {
        self.record(format!("search:{query}:{page}"));
        if self.fail_search {
            return Err(Self::service_error());
        }
        Ok(Self::listing(query, page, self.search_total_pages))
    }

    async fn trending_movies(&self, page: u32) -> Result<MoviePage, ApiError> {
        self.record(format!("trending:{page}"));
        if self.fail_trending {
            return Err(Self::service_error());
        }
        Ok(Self::listing("Trending", page, self.trending_total_pages))
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, ApiError> {
        self.record(format!("details:{id}"));
        if self.missing.contains(&id) {
            return Err(ApiError::NotFound(format!("/movie/{id}")));
        }
        Ok(Movie::new(id, format!("Movie {id}")))
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits, ApiError> {
        self.record(format!("credits:{id}"));
        Ok(Credits {
            cast: vec![CastMember {
                id: 6384,
                name: "Keanu Reeves".to_string(),
                character: "Neo".to_string(),
                profile_path: None,
            }],
        })
    }

    async fn movie_videos(&self, id: u64) -> Result<VideoList, ApiError> {
        self.record(format!("videos:{id}"));
        Ok(VideoList {
            results: self.videos.get(&id).cloned().unwrap_or_default(),
        })
    }
}

pub fn video(kind: &str, site: &str, key: &str) -> Video {
    Video {
        kind: kind.to_string(),
        site: site.to_string(),
        key: key.to_string(),
    }
}

/// Driver over in-memory storage with the default configuration.
pub fn driver(api: FakeApi) -> Driver<FakeApi, MemoryStorage> {
    driver_with(api, MemoryStorage::new())
}

pub fn driver_with<S: StateStorage>(api: FakeApi, storage: S) -> Driver<FakeApi, S> {
    Driver::new(initialize(&Config::default(), storage), api)
}

/// Number of logged calls starting with `prefix`.
pub fn count_calls(calls: &CallLog, prefix: &str) -> usize {
    calls
        .borrow()
        .iter()
        .filter(|call| call.starts_with(prefix))
        .count()
}
