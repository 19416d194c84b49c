use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::fast_lowercase::FastLowercase;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// How the cells of one column are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Locale-style string comparison. `"100" < "60" < "90"`.
    #[default]
    Lexical,
    /// Numbers like `90`, `90%` or `1,200`; non-numeric cells sort after numeric ones.
    Numeric,
}

impl Comparison {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_in(a, b, SortOrder::Asc)
    }

    /// Compare for a sort in `order`. Non-numeric cells of a numeric column
    /// stay after the numbers in both directions.
    pub fn compare_in(&self, a: &str, b: &str, order: SortOrder) -> Ordering {
        match self {
            Comparison::Lexical => order.apply(locale_compare(a, b)),
            Comparison::Numeric => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => order.apply(x.total_cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => order.apply(locale_compare(a, b)),
            },
        }
    }
}

/// Case-insensitive first, lowercase before uppercase on ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.fast_to_lowercase()
        .cmp(&b.fast_to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn parse_numeric(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '$' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column keys that opt into numeric comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonRules {
    numeric: Vec<String>,
}

impl ComparisonRules {
    pub fn new<I, S>(numeric_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            numeric: numeric_columns
                .into_iter()
                .map(|s| s.as_ref().trim().fast_to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn for_header(&self, header: &str) -> Comparison {
        if self
            .numeric
            .iter()
            .any(|key| header.fast_contains_ignore_case(key))
        {
            Comparison::Numeric
        } else {
            Comparison::Lexical
        }
    }
}

/// Header matching the key, ignoring case: an exact match if there is one,
/// otherwise the first header containing the key.
pub fn resolve_column(headers: &[String], key: &str) -> Option<usize> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let folded = key.fast_to_lowercase();
    headers
        .iter()
        .position(|header| header.trim().fast_to_lowercase() == folded)
        .or_else(|| {
            headers
                .iter()
                .position(|header| header.fast_contains_ignore_case(key))
        })
}

/// Stable permutation that orders `values`.
pub fn sorted_order(values: &[String], order: SortOrder, comparison: Comparison) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| comparison.compare_in(&values[a], &values[b], order));
    indices
}

/// Direction after a click on `requested`: same key flips, a new key starts ascending.
pub fn toggle_sort(current_key: &str, current_order: SortOrder, requested: &str) -> SortOrder {
    if current_key == requested {
        current_order.flipped()
    } else {
        SortOrder::Asc
    }
}
