//! Movie details renderer.

use crate::ui::helpers::{push_styled_line, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsBlock;

/// Renders title, facts, overview, cast, and links for one movie.
pub fn render_details(out: &mut String, details: &DetailsBlock, theme: &Theme, cols: usize) {
    let mut title = details.title.clone();
    if let Some(year) = details.year {
        title.push_str(&format!(" ({year})"));
    }
    if details.is_favorite {
        title.push_str(" ♥");
    }
    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    push_styled_line(out, &title_style, &title);

    let mut facts = vec![format!("★ {} ({} votes)", details.rating, details.vote_count)];
    if let Some(runtime) = details.runtime {
        facts.push(format!("{runtime} min"));
    }
    if !details.genres.is_empty() {
        facts.push(details.genres.join(", "));
    }
    push_styled_line(out, &Theme::fg(&theme.colors.rating_fg), &facts.join("  ·  "));
    out.push('\n');

    let body = Theme::fg(&theme.colors.text_normal);
    for line in wrap(&details.overview, cols.max(20)) {
        push_styled_line(out, &body, &line);
    }

    if !details.cast.is_empty() {
        out.push('\n');
        push_styled_line(out, &Theme::fg(&theme.colors.section_fg), "Cast");
        for member in &details.cast {
            push_styled_line(out, &body, &format!("  {member}"));
        }
    }

    out.push('\n');
    let link = Theme::fg(&theme.colors.link_fg);
    match &details.trailer_url {
        Some(url) => push_styled_line(out, &link, &format!("Trailer: {url}")),
        None => push_styled_line(out, &Theme::fg(&theme.colors.text_dim), "No trailer available"),
    }
    if let Some(poster) = &details.poster_url {
        push_styled_line(out, &link, &format!("Poster:  {poster}"));
    }
}
