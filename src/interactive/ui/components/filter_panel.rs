use crate::document::Document;
use crate::interactive::constants::{DIALOG_MARGIN, FILTER_PANEL_MAX_WIDTH};
use crate::interactive::ui::components::{Component, centered_rect, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::query::filter::{FilterCategory, FilterSelection};
use crate::view::Message as ViewMessage;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub category: FilterCategory,
    pub value: String,
    pub checked: bool,
}

/// Every value a reader can filter on: the page's own checkboxes first, then
/// any other value carried by a filterable element. Grouped by category.
pub fn filter_options(document: &Document, selection: &FilterSelection) -> Vec<FilterOption> {
    let mut options = Vec::new();
    for category in FilterCategory::ALL {
        let mut values: Vec<&str> = Vec::new();
        let from_controls = document
            .filter_controls
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.value.as_str());
        let from_elements = document
            .filterables
            .iter()
            .filter_map(|f| f.value(category));
        for value in from_controls.chain(from_elements) {
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
        options.extend(values.into_iter().map(|value| FilterOption {
            category,
            value: value.to_string(),
            checked: selection.is_selected(category, value),
        }));
    }
    options
}

#[derive(Default)]
pub struct FilterPanel {
    options: Vec<FilterOption>,
    selected_index: usize,
    count_label: String,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, options: Vec<FilterOption>) {
        self.options = options;
        self.selected_index = self
            .selected_index
            .min(self.options.len().saturating_sub(1));
    }

    pub fn set_count_label(&mut self, label: String) {
        self.count_label = label;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut current: Option<FilterCategory> = None;
        for (i, option) in self.options.iter().enumerate() {
            if current != Some(option.category) {
                if current.is_some() {
                    lines.push(Line::from(""));
                }
                current = Some(option.category);
                lines.push(Line::styled(option.category.to_string(), Styles::title()));
            }
            let mark = if option.checked { "[x]" } else { "[ ]" };
            let mark_style = if option.checked {
                Styles::checked()
            } else {
                Styles::dimmed()
            };
            let value_style = if i == self.selected_index {
                Styles::selected()
            } else {
                Styles::normal()
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(mark, mark_style),
                Span::raw(" "),
                Span::styled(option.value.clone(), value_style),
            ]));
        }
        if self.options.is_empty() {
            lines.push(Line::styled("This page has nothing to filter", Styles::dimmed()));
        }
        lines
    }
}

impl Component for FilterPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut lines = self.lines();
        lines.push(Line::from(""));
        lines.push(Line::styled(self.count_label.clone(), Styles::label()));
        lines.push(Line::styled(
            "↑/↓: Move | Space: Toggle | Esc: Close",
            Styles::dimmed(),
        ));

        let height = lines.len() as u16 + 2;
        let dialog_area = centered_rect(area, FILTER_PANEL_MAX_WIDTH, height, DIALOG_MARGIN);
        f.render_widget(Clear, dialog_area);

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Filters ")
                .borders(Borders::ALL)
                .border_style(Styles::border(true)),
        );
        f.render_widget(panel, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < self.options.len() {
                    self.selected_index += 1;
                }
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
                let option = self.options.get(self.selected_index)?;
                Some(Message::View(ViewMessage::FilterToggled {
                    category: option.category,
                    value: option.value.clone(),
                    checked: !option.checked,
                }))
            }
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => Some(Message::CloseFilters),
            _ => None,
        }
    }
}
