use crate::document::NodeId;
use crate::query::filter::FilterCategory;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search events
    QueryChanged(String),
    QuerySubmitted(String),
    SearchRequested,

    // Table sorting
    SortRequested(String),

    // Filter checkboxes
    FilterToggled {
        category: FilterCategory,
        value: String,
        checked: bool,
    },

    // Pagination
    PageSelected(usize),

    // Results panel "View" action
    ViewResult(NodeId),
    HighlightExpired,

    Reset,
}
