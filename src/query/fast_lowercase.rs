//! Case folding helpers shared by search, sort and filter.
//!
//! Document text is mostly ASCII, so the ASCII path avoids the Unicode
//! lowercase tables. Non-ASCII input falls back to `str::to_lowercase`.

pub trait FastLowercase {
    fn fast_to_lowercase(&self) -> String;
    fn fast_contains_ignore_case(&self, pattern: &str) -> bool;
}

impl FastLowercase for str {
    #[inline]
    fn fast_to_lowercase(&self) -> String {
        if self.is_ascii() {
            self.to_ascii_lowercase()
        } else {
            self.to_lowercase()
        }
    }

    #[inline]
    fn fast_contains_ignore_case(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return true;
        }
        if self.is_ascii() && pattern.is_ascii() {
            let haystack = self.as_bytes();
            let needle = pattern.as_bytes();
            if haystack.len() < needle.len() {
                return false;
            }
            haystack
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
        } else {
            self.to_lowercase().contains(&pattern.to_lowercase())
        }
    }
}

/// Text that has been lowercased once and is probed many times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folded(String);

impl Folded {
    pub fn new(text: &str) -> Self {
        Folded(text.trim().fast_to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}
