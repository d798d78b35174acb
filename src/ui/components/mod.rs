//! Composable UI component renderers.
//!
//! Each component appends ANSI-styled lines to a shared output buffer.
//!
//! # Components
//!
//! - [`header`]: Title and current location
//! - [`table`]: Numbered movie sections
//! - [`details`]: Single movie facts, cast, and links
//! - [`pagination`]: Page strip for search and trending
//! - [`empty`]: Empty state message
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Status / Notice]
//! [Sections | Details | Empty state]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

pub mod details;
pub mod empty;
pub mod footer;
pub mod header;
pub mod pagination;
pub mod table;

use crate::ui::helpers::push_styled_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, StatusLine};

/// Appends a horizontal border line.
fn render_border(out: &mut String, color: &str, cols: usize) {
    push_styled_line(out, &Theme::fg(color), &"─".repeat(cols));
}

/// Renders a full frame for `vm`.
///
/// While loading or on error, the listing is replaced by the status line.
pub fn render_page(out: &mut String, vm: &PageView, theme: &Theme, cols: usize) {
    header::render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        push_styled_line(out, &Theme::fg(&theme.colors.error_fg), notice);
    }

    match &vm.status {
        Some(StatusLine::Loading) => {
            push_styled_line(out, &Theme::fg(&theme.colors.loading_fg), "Loading...");
        }
        Some(StatusLine::Error(message)) => {
            push_styled_line(out, &Theme::fg(&theme.colors.error_fg), message);
        }
        None => {
            if let Some(details) = &vm.details {
                details::render_details(out, details, theme, cols);
            }
            for section in vm.sections.iter().filter(|section| !section.rows.is_empty()) {
                table::render_section(out, section, theme, cols);
            }
            if let Some(empty) = &vm.empty_state {
                empty::render_empty_state(out, empty, theme, cols);
            }
            if let Some(strip) = &vm.pagination {
                pagination::render_pagination(out, strip, theme, cols);
            }
        }
    }

    render_border(out, &theme.colors.border, cols);
    footer::render_footer(out, &vm.footer, theme, cols);
}
