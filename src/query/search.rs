use rayon::prelude::*;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use super::fast_lowercase::{FastLowercase, Folded};
use crate::document::{Document, NodeId, NodeKind};

pub const TITLE_EXCERPT_CHARS: usize = 100;
pub const BODY_EXCERPT_CHARS: usize = 150;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    pub node: NodeId,
    pub text: String,
    pub score: u32,
    pub kind: NodeKind,
}

impl SearchResult {
    pub fn title(&self) -> String {
        title_excerpt(&self.text, TITLE_EXCERPT_CHARS)
    }

    pub fn excerpt(&self) -> String {
        body_excerpt(&self.text, BODY_EXCERPT_CHARS)
    }
}

/// A query normalized once: trimmed, lowercased and split into words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    phrase: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            phrase: raw.trim().fast_to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn words(&self) -> SmallVec<[&str; 4]> {
        self.phrase.split(' ').filter(|w| !w.is_empty()).collect()
    }

    pub fn matches(&self, text: &Folded) -> bool {
        text.contains(&self.phrase)
    }

    /// Per word: +1 if present, +2 if the whole phrase is present, +1 if the
    /// text starts with the word.
    pub fn relevance(&self, text: &Folded) -> u32 {
        let phrase_bonus = if text.contains(&self.phrase) { 2 } else { 0 };
        self.words()
            .iter()
            .map(|word| {
                let mut score = phrase_bonus;
                if text.contains(word) {
                    score += 1;
                }
                if text.starts_with(word) {
                    score += 1;
                }
                score
            })
            .sum()
    }
}

/// Scan every searchable node and rank the matches.
///
/// Results are ordered by descending score; equal scores keep document order.
pub fn search(document: &Document, query: &str) -> Vec<SearchResult> {
    let query = SearchQuery::new(query);
    if query.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<_> = document.searchable_nodes().collect();
    let mut results: Vec<SearchResult> = candidates
        .par_iter()
        .filter_map(|node| {
            let folded = Folded::new(&node.text);
            if !query.matches(&folded) {
                return None;
            }
            Some(SearchResult {
                node: node.id,
                text: node.text.trim().to_string(),
                score: query.relevance(&folded),
                kind: node.kind,
            })
        })
        .collect();

    // stable: ties stay in scan order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        query = query.phrase(),
        scanned = candidates.len(),
        matched = results.len(),
        "search completed"
    );
    results
}

pub fn title_excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn body_excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
