//! Empty state component renderer.

use crate::ui::helpers::{center, push_styled_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Shown when:
/// - No favorites have been marked
/// - A search returned nothing
/// - A details fetch returned no movie
/// - The location is unknown
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank line]
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');
    push_styled_line(
        out,
        &Theme::fg(&theme.colors.empty_state_fg),
        &center(&empty.message, cols),
    );
    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    push_styled_line(out, &subtitle_style, &center(&empty.subtitle, cols));
    out.push('\n');
}
