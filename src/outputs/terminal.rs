//! Plain text rendering of an article list.

use crate::models::Article;
use crate::utils::display_date;
use std::fmt::Write;

/// Shown when there is nothing to list.
pub const EMPTY_STATE: &str = "No news found.";

/// Render one article as a block of lines.
pub fn render_article(article: &Article) -> String {
    let mut out = String::new();
    let date = display_date(article.date());
    if date.is_empty() {
        let _ = writeln!(out, "[{}]", article.section());
    } else {
        let _ = writeln!(out, "[{}] {}", article.section(), date);
    }
    let _ = writeln!(out, "{}", article.title());
    if let Some(author) = article.author() {
        let _ = writeln!(out, "by {author}");
    }
    let _ = writeln!(out, "{}", article.url());
    out
}

/// Render the full list, or the empty-state message when there is nothing
/// to show.
pub fn render_list(articles: Option<&[Article]>) -> String {
    match articles {
        Some(articles) if !articles.is_empty() => articles
            .iter()
            .map(render_article)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format!("{EMPTY_STATE}\n"),
    }
}
