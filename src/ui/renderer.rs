//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PageView`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The theme follows the persisted dark mode preference.

use crate::app::AppState;
use crate::storage::StateStorage;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{compute_viewmodel, PageView};

/// Renders the current state as one ANSI-styled frame.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `image_base_url` - Root of the poster image service
/// * `cols` - Terminal width in columns
///
/// # Example
///
/// ```rust
/// use moviedeck::storage::MemoryStorage;
/// use moviedeck::ui::render;
/// use moviedeck::{initialize, Config};
///
/// let state = initialize(&Config::default(), MemoryStorage::new());
/// let frame = render(&state, "https://image.tmdb.org/t/p", 80);
/// assert!(frame.contains("MovieDeck"));
/// ```
pub fn render<S: StateStorage>(state: &AppState<S>, image_base_url: &str, cols: usize) -> String {
    let _span = tracing::debug_span!("render", route = %state.route).entered();

    let viewmodel = compute_viewmodel(state, image_base_url);
    let theme = Theme::for_mode(state.store.is_dark_mode());
    render_viewmodel(&viewmodel, &theme, cols)
}

/// Renders a pre-computed view model with `theme`.
#[must_use]
pub fn render_viewmodel(vm: &PageView, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_page(&mut out, vm, theme, cols);
    out
}
