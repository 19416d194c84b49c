//! Pure matching, ranking, ordering, filtering and paging over plain data
//! extracted from a [`Document`](crate::document::Document).

pub mod fast_lowercase;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod sort;

pub use filter::{FilterCategory, FilterSelection, FilterValues};
pub use pagination::{PageControl, Pagination};
pub use search::{SearchQuery, SearchResult, search};
pub use sort::{Comparison, ComparisonRules, SortOrder};
