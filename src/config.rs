//! Tunables for the interaction layer.

use crate::query::sort::ComparisonRules;

/// Default number of filterable elements per page.
pub const ITEMS_PER_PAGE: usize = 20;

/// Quiet period after the last keystroke before a search runs.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a node stays highlighted after "View".
pub const HIGHLIGHT_MS: u64 = 2000;

#[derive(Clone, Debug)]
pub struct Settings {
    pub items_per_page: usize,
    pub search_debounce_ms: u64,
    pub highlight_ms: u64,
    pub title_excerpt_chars: usize,
    pub body_excerpt_chars: usize,
    /// Column keys compared numerically instead of lexically.
    pub numeric_columns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            highlight_ms: HIGHLIGHT_MS,
            title_excerpt_chars: crate::query::search::TITLE_EXCERPT_CHARS,
            body_excerpt_chars: crate::query::search::BODY_EXCERPT_CHARS,
            numeric_columns: Vec::new(),
        }
    }
}

impl Settings {
    pub fn comparison_rules(&self) -> ComparisonRules {
        ComparisonRules::new(&self.numeric_columns)
    }
}
