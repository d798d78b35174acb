//! Pagination strip renderer.

use crate::routes::PageItem;
use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationStrip;

/// Renders `‹ 1 … 4 [5] 6 … 20 ›` centered, highlighting the current page.
///
/// The arrows are dimmed on the first and last page.
pub fn render_pagination(out: &mut String, strip: &PaginationStrip, theme: &Theme, cols: usize) {
    let mut plain = String::new();
    let mut styled = String::new();

    let arrow = |enabled: bool, glyph: &str, styled: &mut String| {
        let color = if enabled {
            &theme.colors.text_normal
        } else {
            &theme.colors.border
        };
        styled.push_str(&Theme::fg(color));
        styled.push_str(glyph);
        styled.push_str(Theme::reset());
    };

    arrow(strip.current > 1, "‹", &mut styled);
    plain.push('‹');

    for item in &strip.items {
        styled.push(' ');
        plain.push(' ');
        match item {
            PageItem::Page(page) if *page == strip.current => {
                let label = format!("[{page}]");
                styled.push_str(Theme::bold());
                styled.push_str(&Theme::fg(&theme.colors.current_page_fg));
                styled.push_str(&Theme::bg(&theme.colors.current_page_bg));
                styled.push_str(&label);
                styled.push_str(Theme::reset());
                plain.push_str(&label);
            }
            PageItem::Page(page) => {
                let label = page.to_string();
                styled.push_str(&Theme::fg(&theme.colors.text_normal));
                styled.push_str(&label);
                styled.push_str(Theme::reset());
                plain.push_str(&label);
            }
            PageItem::Ellipsis => {
                styled.push_str(&Theme::fg(&theme.colors.text_dim));
                styled.push('…');
                styled.push_str(Theme::reset());
                plain.push('…');
            }
        }
    }

    styled.push(' ');
    plain.push(' ');
    arrow(strip.current < strip.total, "›", &mut styled);
    plain.push('›');

    // Center on the unstyled width; escapes take no columns.
    let centered = center(&plain, cols);
    let left = centered.len() - centered.trim_start().len();
    out.push_str(&" ".repeat(left));
    out.push_str(&styled);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::page_window;

    #[test]
    fn current_page_is_bracketed() {
        let strip = PaginationStrip {
            items: page_window(2, 3),
            current: 2,
            total: 3,
        };
        let mut out = String::new();
        render_pagination(&mut out, &strip, &Theme::default(), 40);

        assert!(out.contains("[2]"));
        assert!(!out.contains("[1]"));
        assert!(!out.contains('…'));
    }

    #[test]
    fn skipped_pages_show_ellipsis() {
        let strip = PaginationStrip {
            items: page_window(10, 20),
            current: 10,
            total: 20,
        };
        let mut out = String::new();
        render_pagination(&mut out, &strip, &Theme::default(), 80);

        assert_eq!(out.matches('…').count(), 2);
        assert!(out.contains("[10]"));
        assert!(out.contains("20"));
    }
}
