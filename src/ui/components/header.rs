//! Header component renderer.

use crate::ui::helpers::{center, push_styled_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered bold title, then the location in dim text.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// [left padding] /location [right padding]
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    push_styled_line(out, &style, &center(&header.title, cols));

    let location_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    push_styled_line(out, &location_style, &center(&header.location, cols));
}
