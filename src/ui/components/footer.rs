//! Footer component renderer.

use crate::ui::helpers::{center, push_styled_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered in dimmed text.
///
/// Hints wider than the terminal are truncated.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    push_styled_line(
        out,
        &Theme::fg(&theme.colors.text_dim),
        &center(&footer.keybindings, cols),
    );
}
