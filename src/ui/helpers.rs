//! Shared text layout helpers.
//!
//! All widths are measured in characters, not bytes, so titles with accents
//! or CJK text are truncated without splitting a code point.

use crate::ui::theme::Theme;

/// Truncates `text` to at most `max` characters, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use moviedeck::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Matrix", 20), "The Matrix");
/// assert_eq!(truncate("The Matrix", 6), "The M…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` with spaces on both sides to center it in `cols`.
///
/// Left padding is the smaller half when the split is uneven.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Appends `text` wrapped in `style` and a reset, followed by a newline.
pub fn push_styled_line(out: &mut String, style: &str, text: &str) {
    out.push_str(style);
    out.push_str(text);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are placed on their own line untouched.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
