#[cfg(test)]
mod tests {
    use super::super::commands::Command;
    use super::super::events::Message;
    use super::super::state::*;
    use crate::query::filter::FilterCategory;
    use crate::query::sort::SortOrder;

    fn create_test_state() -> ViewState {
        ViewState::default()
    }

    fn toggle(category: FilterCategory, value: &str, checked: bool) -> Message {
        Message::FilterToggled {
            category,
            value: value.to_string(),
            checked,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.search_query, "");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items_per_page, 20);
        assert_eq!(state.sort_by, "");
        assert_eq!(state.sort_order, SortOrder::Asc);
        assert!(state.filters.is_empty());
        assert_eq!(state.filters.categories().count(), 4);
    }

    #[test]
    fn test_query_changed_schedules_search_and_resets_page() {
        let mut state = create_test_state();
        state.current_page = 3;

        let command = state.update(Message::QueryChanged("payroll".to_string()));

        assert_eq!(state.search_query, "payroll");
        assert_eq!(state.current_page, 1);
        assert_eq!(command, Command::ScheduleSearch);
    }

    #[test]
    fn test_unchanged_query_is_ignored() {
        let mut state = create_test_state();
        state.update(Message::QueryChanged("payroll".to_string()));
        state.current_page = 2;

        let command = state.update(Message::QueryChanged("payroll".to_string()));

        assert_eq!(command, Command::None);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_submit_executes_immediately() {
        let mut state = create_test_state();

        let command = state.update(Message::QuerySubmitted("benefits".to_string()));

        assert_eq!(state.search_query, "benefits");
        assert_eq!(command, Command::ExecuteSearch);
        assert_eq!(state.update(Message::SearchRequested), Command::ExecuteSearch);
    }

    #[test]
    fn test_sort_toggle_semantics() {
        let mut state = create_test_state();

        assert_eq!(
            state.update(Message::SortRequested("performance".to_string())),
            Command::ApplySort
        );
        assert_eq!(state.sort_by, "performance");
        assert_eq!(state.sort_order, SortOrder::Asc);

        state.update(Message::SortRequested("performance".to_string()));
        assert_eq!(state.sort_order, SortOrder::Desc);

        state.update(Message::SortRequested("performance".to_string()));
        assert_eq!(state.sort_order, SortOrder::Asc);

        state.update(Message::SortRequested("performance".to_string()));
        state.update(Message::SortRequested("complexity".to_string()));
        assert_eq!(state.sort_by, "complexity");
        assert_eq!(state.sort_order, SortOrder::Asc);

        assert_eq!(
            state.update(Message::SortRequested("  ".to_string())),
            Command::None
        );
        assert_eq!(state.sort_by, "complexity");
    }

    #[test]
    fn test_filter_toggles() {
        let mut state = create_test_state();

        assert_eq!(
            state.update(toggle(FilterCategory::Complexity, "high", true)),
            Command::ApplyFilters
        );
        assert_eq!(
            state.update(toggle(FilterCategory::Complexity, "high", true)),
            Command::None
        );
        assert!(state.filters.is_selected(FilterCategory::Complexity, "high"));

        assert_eq!(
            state.update(toggle(FilterCategory::Complexity, "high", false)),
            Command::ApplyFilters
        );
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_page_selection_scrolls_to_top() {
        let mut state = create_test_state();

        assert_eq!(state.update(Message::PageSelected(4)), Command::ScrollToTop);
        assert_eq!(state.current_page, 4);

        state.update(Message::PageSelected(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_reset_clears_query_page_and_filters() {
        let mut state = create_test_state();
        state.update(Message::QueryChanged("payroll".to_string()));
        state.update(Message::PageSelected(3));
        state.update(toggle(FilterCategory::Priority, "5", true));
        state.update(toggle(FilterCategory::BusinessValue, "high", true));
        state.update(Message::SortRequested("page".to_string()));

        let command = state.update(Message::Reset);

        assert_eq!(command, Command::ResetView);
        assert_eq!(state.search_query, "");
        assert_eq!(state.current_page, 1);
        assert!(state.filters.is_empty());
        assert_eq!(state.filters.categories().count(), 4);
        assert_eq!(state.sort_by, "page");
    }

    #[test]
    fn test_view_result_and_highlight_messages() {
        let mut state = create_test_state();
        assert_eq!(state.update(Message::ViewResult(7)), Command::ScrollToNode(7));
        assert_eq!(state.update(Message::HighlightExpired), Command::ClearHighlight);
    }
}
