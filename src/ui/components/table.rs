//! Movie list renderer.
//!
//! Each section renders as a heading followed by numbered rows with columns
//! for the favorite marker, the title, the release year, and the rating.

use crate::ui::helpers::{push_styled_line, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MovieRow, Section};

/// Width of the position column (`NNN. `).
const POSITION_WIDTH: usize = 5;

/// Width reserved after the title for year and rating.
const TRAILING_WIDTH: usize = 14;

/// Minimum title width on narrow terminals.
const MIN_TITLE_WIDTH: usize = 12;

/// Renders one section. Sections with no rows print only the heading.
pub fn render_section(out: &mut String, section: &Section, theme: &Theme, cols: usize) {
    let heading_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.section_fg));
    push_styled_line(out, &heading_style, &section.heading);

    for row in &section.rows {
        render_row(out, row, theme, cols);
    }
    out.push('\n');
}

/// Renders a single movie row.
///
/// # Layout
///
/// ```text
///   1. ★ The Matrix                     1999   ★ 8.2
/// ```
fn render_row(out: &mut String, row: &MovieRow, theme: &Theme, cols: usize) {
    let title_width = cols
        .saturating_sub(POSITION_WIDTH + 2 + TRAILING_WIDTH)
        .max(MIN_TITLE_WIDTH);
    let title = truncate(&row.title, title_width);
    let padding = title_width.saturating_sub(title.chars().count());
    let year = row.year.map_or_else(|| "----".to_string(), |year| year.to_string());

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("{:>3}. ", row.position));

    if row.is_favorite {
        out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        out.push_str("♥ ");
    } else {
        out.push_str("  ");
    }

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&title);
    out.push_str(&" ".repeat(padding));

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("  {year:>4}"));
    out.push_str(&Theme::fg(&theme.colors.rating_fg));
    out.push_str(&format!("  ★ {:>4}", row.rating));

    out.push_str(Theme::reset());
    out.push('\n');
}
