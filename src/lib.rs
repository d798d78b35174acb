//! moviedeck: a terminal movie browser backed by a remote metadata service.
//!
//! moviedeck provides:
//! - A home view with developer picks and a trending preview
//! - Paginated trending and search listings with addressable routes
//! - A details view with cast, genres, and a trailer link
//! - Favorites and the last search persisted to a local JSON file
//! - Light and dark terminal themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Interactive shell (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Driver (driver.rs)                                 │  ← Runs actions
//! │  - History stack                                    │
//! │  - In-flight fetches                                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/, routes/)                  │  ← State machine
//! │  - Event handling                                   │
//! │  - Page controllers and generation tokens           │
//! │  - Store with write-through persistence             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (fetcher/,    │
//! │ - Rendering   │   │ - JSON I/O    │   │  api/)        │
//! │ - Theming     │   │ - In-memory   │   │ - HTTP client │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure, Domain, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: Metadata service client and aggregate fetches
//! - [`app`]: Event handler, actions, store, and commands
//! - [`domain`]: Movie model and error types
//! - [`driver`]: Executes actions and feeds fetch completions back
//! - [`fetcher`]: Fetch requests and their execution
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing to a rotating log file
//! - [`routes`]: Routes, page controllers, pagination
//! - [`storage`]: Persisted snapshot backends
//! - [`ui`]: Text rendering with theme support
//!
//! # Configuration
//!
//! Configuration is read from `config.toml` in the config directory. Every key
//! is optional:
//!
//! ```toml
//! api_base_url = "https://api.themoviedb.org/3"
//! api_key = "..."
//! image_base_url = "https://image.tmdb.org/t/p"
//! state_file = "~/.local/share/moviedeck/state.json"
//! developer_picks = [603, 157336, 128, 155]
//! trending_preview_count = 8
//! request_timeout_secs = 10
//! trace_level = "info"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use moviedeck::storage::MemoryStorage;
//! use moviedeck::{handle_event, initialize, Config, Event, Route};
//!
//! let mut state = initialize(&Config::default(), MemoryStorage::new());
//! let (_, actions) = handle_event(&mut state, Event::Navigate(Route::Favorites))?;
//! assert!(actions.is_empty());
//! # Ok::<(), moviedeck::MovieDeckError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod driver;
pub mod fetcher;
pub mod infrastructure;
pub mod observability;
pub mod routes;
pub mod storage;

pub mod ui;

pub use app::{handle_event, parse_command, Action, AppState, Command, Event, Store};
pub use domain::{ApiError, Movie, MovieDeckError, Result};
pub use driver::Driver;
pub use routes::Route;

use domain::IMAGE_BASE_URL;
use routes::HomeSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::StateStorage;

/// Default metadata service endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the persisted state inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// Environment variable overriding `api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Environment variable overriding `trace_level`.
pub const TRACE_LEVEL_ENV: &str = "MOVIEDECK_TRACE_LEVEL";

/// Application configuration.
///
/// Deserialized from TOML; omitted keys take their default.
///
/// # Example
///
/// ```rust
/// use moviedeck::Config;
///
/// let config = Config::from_toml_str("trending_preview_count = 4")?;
/// assert_eq!(config.trending_preview_count, 4);
/// assert_eq!(config.api_base_url, "https://api.themoviedb.org/3");
/// # Ok::<(), moviedeck::MovieDeckError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the metadata service. Default: [`DEFAULT_API_BASE_URL`]
    pub api_base_url: String,

    /// API key sent as the `api_key` query parameter.
    ///
    /// Overridden by `TMDB_API_KEY`.
    pub api_key: Option<String>,

    /// Base URL for poster images.
    pub image_base_url: String,

    /// Location of the persisted state. `~` is expanded.
    ///
    /// Default: `state.json` in the data directory.
    pub state_file: Option<String>,

    /// Movie ids fetched for the home page's picks.
    pub developer_picks: Vec<u64>,

    /// Number of trending movies shown on the home page.
    pub trending_preview_count: usize,

    /// Per-request timeout. `None` leaves the HTTP client's default.
    pub request_timeout_secs: Option<u64>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Overridden by
    /// `MOVIEDECK_TRACE_LEVEL`; `RUST_LOG` takes precedence over both.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let home = HomeSettings::default();
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            image_base_url: IMAGE_BASE_URL.to_string(),
            state_file: None,
            developer_picks: home.developer_picks,
            trending_preview_count: home.trending_preview_count,
            request_timeout_secs: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDeckError::ConfigParse`] on malformed TOML or wrongly
    /// typed values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `config.toml` from the config directory, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover() -> Result<Self> {
        let path = infrastructure::get_config_dir().join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies `TMDB_API_KEY` and `MOVIEDECK_TRACE_LEVEL` from the process
    /// environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` in place of the process environment.
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(level) = lookup(TRACE_LEVEL_ENV) {
            self.trace_level = Some(level);
        }
        self
    }

    /// Checks values that would make the application unusable.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDeckError::Config`] if the base URL or the developer
    /// picks are empty.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(MovieDeckError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.developer_picks.is_empty() {
            return Err(MovieDeckError::Config(
                "developer_picks must list at least one movie id".to_string(),
            ));
        }
        Ok(())
    }

    /// Home page settings derived from this configuration.
    #[must_use]
    pub fn home_settings(&self) -> HomeSettings {
        HomeSettings {
            developer_picks: self.developer_picks.clone(),
            trending_preview_count: self.trending_preview_count,
        }
    }

    /// Resolved location of the persisted state file.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.state_file.as_deref().map_or_else(
            || infrastructure::get_data_dir().join(STATE_FILE_NAME),
            infrastructure::expand_tilde,
        )
    }
}

/// Creates the application state over `storage`.
///
/// The persisted snapshot is loaded immediately; nothing is mounted until the
/// first navigation.
///
/// # Example
///
/// ```rust
/// use moviedeck::storage::MemoryStorage;
/// use moviedeck::{initialize, Config};
///
/// let state = initialize(&Config::default(), MemoryStorage::new());
/// assert!(state.store.favorites().is_empty());
/// ```
pub fn initialize<S: StateStorage>(config: &Config, storage: S) -> AppState<S> {
    tracing::debug!(
        picks = config.developer_picks.len(),
        preview = config.trending_preview_count,
        "initializing moviedeck"
    );

    AppState::new(Store::open(storage), config.home_settings())
}
