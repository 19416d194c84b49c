use colored::Colorize;

use crate::config::Settings;
use crate::query::search::{SearchResult, body_excerpt, title_excerpt};

/// `[tag] title (score N)` followed by an indented excerpt.
pub fn format_search_result(
    result: &SearchResult,
    settings: &Settings,
    use_color: bool,
    full_text: bool,
) -> String {
    let tag = format!("[{}]", result.kind.tag());
    let title = title_excerpt(&result.text, settings.title_excerpt_chars);
    let score = format!("(score {})", result.score);
    let excerpt = if full_text {
        result.text.clone()
    } else {
        body_excerpt(&result.text, settings.body_excerpt_chars)
    };

    if use_color {
        format!(
            "{} {} {}\n  {}",
            tag.bright_blue(),
            title.bright_yellow(),
            score.dimmed(),
            excerpt
        )
    } else {
        format!("{tag} {title} {score}\n  {excerpt}")
    }
}

/// Summary line printed under a list of results.
pub fn results_summary(query: &str, count: usize) -> String {
    match count {
        0 => format!("No results found for \"{}\"", query.trim()),
        1 => "Found 1 result".to_string(),
        n => format!("Found {n} results"),
    }
}
