use crate::formatters::page::page_controls_line;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::query::sort::SortOrder;
use crate::view::DocumentView;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const HINTS: &str =
    "/: Search | Tab: Focus | 1-9: Sort | f: Filters | [ ]: Page | n: Nav | r: Reset | p: Print | ?: Help";

/// Counts, pager and sort state above a line of key hints.
#[derive(Default)]
pub struct StatusBar {
    summary: Vec<String>,
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: &DocumentView) {
        let mut summary = Vec::new();
        if view.total_count > 0 {
            summary.push(view.count_label.clone());
        }
        if let Some(pagination) = &view.pagination {
            let current = pagination.clamp(pagination.current_page);
            let total = pagination.total_pages().max(1);
            let mut pager = format!("Page {current} of {total}");
            let range = pagination.page_range();
            if !range.is_empty() {
                pager.push_str(&format!(" (items {}-{})", range.start + 1, range.end));
            }
            if !view.page_controls.is_empty() {
                pager.push_str("  ");
                pager.push_str(&page_controls_line(&view.page_controls, current));
            }
            summary.push(pager);
        }
        if let Some(key) = &view.sort_by {
            let arrow = match view.sort_order {
                SortOrder::Asc => "▲",
                SortOrder::Desc => "▼",
            };
            summary.push(format!("Sorted by {key} {arrow}"));
        }
        self.summary = summary;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn summary(&self) -> String {
        self.summary.join(" | ")
    }
}

impl Component for StatusBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let second = match &self.message {
            Some(message) => Line::from(Span::styled(message.clone(), Styles::label())),
            None => Line::from(Span::styled(HINTS, Styles::dimmed())),
        };
        let status = Paragraph::new(vec![
            Line::from(Span::styled(self.summary(), Styles::normal())),
            second,
        ])
        .alignment(Alignment::Center);
        f.render_widget(status, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::document::Document;
    use crate::view::DocView;

    #[test]
    fn test_summary_with_pager_and_sort() {
        let page = r#"
            <table><thead><tr><th>Name</th></tr></thead><tbody>
              <tr class="filterable"><td>a</td></tr>
              <tr class="filterable"><td>b</td></tr>
              <tr class="filterable"><td>c</td></tr>
            </tbody></table>
            <nav class="pagination"></nav>
        "#;
        let settings = Settings {
            items_per_page: 2,
            ..Settings::default()
        };
        let mut view = DocView::new(Document::parse_html(page), settings);
        view.sort("name");

        let mut bar = StatusBar::new();
        bar.set_view(&view.view());

        assert_eq!(
            bar.summary(),
            "3 of 3 shown | Page 1 of 2 (items 1-2)  [1]  2  Next › | Sorted by name ▲"
        );
    }

    #[test]
    fn test_summary_without_pagination_container() {
        let view = DocView::new(Document::parse_html("<p>text</p>"), Settings::default());

        let mut bar = StatusBar::new();
        bar.set_view(&view.view());

        assert_eq!(bar.summary(), "");
    }
}
