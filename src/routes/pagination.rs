//! Pagination control: visible page window and jump-to-page input.

use thiserror::Error;

/// Numbered pages shown around the current one.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One entry of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    /// Marks skipped pages between two numbered entries.
    Ellipsis,
}

/// Rejected jump-to-page input. No navigation happens on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageInputError {
    #[error("'{0}' is not a page number")]
    NotANumber(String),

    #[error("page {page} is outside 1..={total}")]
    OutOfRange { page: i64, total: u32 },
}

/// Computes the pagination strip for `current` out of `total` pages.
///
/// Up to [`MAX_VISIBLE_PAGES`] consecutive pages are shown around `current`,
/// shifted to stay inside `1..=total`. The first and last page are always
/// reachable, with [`PageItem::Ellipsis`] standing in for skipped ranges.
///
/// # Examples
///
/// ```
/// use moviedeck::routes::pagination::{page_window, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(page_window(1, 3), vec![Page(1), Page(2), Page(3)]);
/// assert_eq!(
///     page_window(10, 20),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
/// );
/// ```
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    let mut items = Vec::with_capacity(MAX_VISIBLE_PAGES as usize + 4);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }

    items
}

/// Parses a jump-to-page input against `total` pages.
///
/// # Errors
///
/// Returns [`PageInputError::NotANumber`] for non-numeric input and
/// [`PageInputError::OutOfRange`] for numbers outside `1..=total`.
pub fn validate_page_input(input: &str, total: u32) -> Result<u32, PageInputError> {
    let trimmed = input.trim();
    let page: i64 = trimmed
        .parse()
        .map_err(|_| PageInputError::NotANumber(trimmed.to_string()))?;

    if page < 1 || page > i64::from(total) {
        return Err(PageInputError::OutOfRange { page, total });
    }

    u32::try_from(page).map_err(|_| PageInputError::OutOfRange { page, total })
}
