//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in themes ship with the binary, selected by the persisted dark
//! mode preference. Custom themes use the same TOML format.
//!
//! # Built-in Themes
//!
//! - `dark`: Used when dark mode is on
//! - `light`: Used otherwise
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! section_fg = "#89b4fa"
//! favorite_fg = "#f38ba8"
//! rating_fg = "#f9e2af"
//! current_page_fg = "#1e1e2e"
//! current_page_bg = "#f5c2e7"
//! error_fg = "#f38ba8"
//! loading_fg = "#94e2d5"
//! empty_state_fg = "#89b4fa"
//! link_fg = "#74c7ec"
//! ```
//!
//! # Example
//!
//! ```rust
//! use moviedeck::ui::theme::Theme;
//!
//! let theme = Theme::for_mode(true);
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "dark");
//! ```

use crate::domain::{MovieDeckError, Result};
use serde::{Deserialize, Serialize};

const DARK_THEME: &str = include_str!("../../themes/dark.toml");
const LIGHT_THEME: &str = include_str!("../../themes/light.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,
    /// Section heading color.
    pub section_fg: String,

    /// Favorite marker color.
    pub favorite_fg: String,
    /// Rating color.
    pub rating_fg: String,

    /// Current page in the pagination strip.
    pub current_page_fg: String,
    pub current_page_bg: String,

    /// Error line color.
    pub error_fg: String,
    /// Loading line color.
    pub loading_fg: String,
    /// Empty state message color.
    pub empty_state_fg: String,
    /// Trailer and poster link color.
    pub link_fg: String,
}

impl Theme {
    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MovieDeckError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| MovieDeckError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Built-in theme for the dark mode preference.
    ///
    /// # Panics
    ///
    /// Panics if a built-in theme fails to parse (should never occur).
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        let source = if dark { DARK_THEME } else { LIGHT_THEME };
        Self::from_toml_str(source).expect("built-in themes should always parse")
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moviedeck::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The dark theme.
    fn default() -> Self {
        Self::for_mode(true)
    }
}
