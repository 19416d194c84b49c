use serde::Serialize;

use super::commands::Command;
use super::events::Message;
use crate::config::ITEMS_PER_PAGE;
use crate::query::filter::FilterSelection;
use crate::query::sort::{SortOrder, toggle_sort};

/// Everything the user has chosen for the current page view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewState {
    pub search_query: String,
    pub current_page: usize,
    pub items_per_page: usize,
    pub sort_by: String,
    pub sort_order: SortOrder,
    pub filters: FilterSelection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl ViewState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            sort_by: String::new(),
            sort_order: SortOrder::Asc,
            filters: FilterSelection::new(),
        }
    }

    pub fn has_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    fn set_query(&mut self, query: String) -> bool {
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.current_page = 1;
        true
    }

    pub fn update(&mut self, message: Message) -> Command {
        match message {
            Message::QueryChanged(query) => {
                if self.set_query(query) {
                    Command::ScheduleSearch
                } else {
                    Command::None
                }
            }
            Message::QuerySubmitted(query) => {
                self.set_query(query);
                Command::ExecuteSearch
            }
            Message::SearchRequested => Command::ExecuteSearch,
            Message::SortRequested(key) => {
                let key = key.trim().to_string();
                if key.is_empty() {
                    return Command::None;
                }
                self.sort_order = toggle_sort(&self.sort_by, self.sort_order, &key);
                self.sort_by = key;
                Command::ApplySort
            }
            Message::FilterToggled {
                category,
                value,
                checked,
            } => {
                if self.filters.toggle(category, &value, checked) {
                    Command::ApplyFilters
                } else {
                    Command::None
                }
            }
            Message::PageSelected(page) => {
                self.current_page = page.max(1);
                Command::ScrollToTop
            }
            Message::ViewResult(node) => Command::ScrollToNode(node),
            Message::HighlightExpired => Command::ClearHighlight,
            Message::Reset => {
                self.search_query.clear();
                self.current_page = 1;
                self.filters.clear();
                Command::ResetView
            }
        }
    }
}
