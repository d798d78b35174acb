//! Filesystem locations for state, configuration, and logs.
//!
//! Directories follow the XDG base directory layout: `$XDG_DATA_HOME` and
//! `$XDG_CONFIG_HOME` when set and absolute, otherwise `~/.local/share` and
//! `~/.config`. Each gets a `moviedeck` subdirectory.

use std::path::PathBuf;

const APP_DIR: &str = "moviedeck";

/// Returns the data directory, holding `state.json` and the log file.
///
/// # Examples
///
/// ```
/// use moviedeck::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("moviedeck"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_dir(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        &[".local", "share"],
    )
}

/// Returns the configuration directory, holding `config.toml`.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    resolve_dir(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        &[".config"],
    )
}

fn resolve_dir(xdg: Option<PathBuf>, home_fallback: &[&str]) -> PathBuf {
    let base = xdg.filter(|dir| dir.is_absolute()).unwrap_or_else(|| {
        home_fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
    });
    base.join(APP_DIR)
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Expands a leading `~` to the home directory.
///
/// # Examples
///
/// ```
/// use moviedeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// assert!(!expand_tilde("~/state.json").starts_with("~"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        home_dir()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else {
        PathBuf::from(path)
    }
}
