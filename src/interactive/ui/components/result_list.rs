use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::query::search::SearchResult;
use crate::view::Message as ViewMessage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// The results panel: title, excerpt and a "View" action per hit.
#[derive(Default)]
pub struct ResultList {
    results: Vec<SearchResult>,
    selected_index: usize,
    focused: bool,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the results. Selection is kept only while the list is unchanged.
    pub fn set_results(&mut self, results: &[SearchResult]) {
        if self.results != results {
            self.results = results.to_vec();
            self.selected_index = 0;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected_index)
    }

    fn last_index(&self) -> usize {
        self.results.len().saturating_sub(1)
    }

    fn item(result: &SearchResult, selected: bool) -> ListItem<'static> {
        let title_style = if selected {
            Styles::selected()
        } else {
            Styles::label()
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", result.kind.tag()), Styles::dimmed()),
                Span::styled(result.title(), title_style),
                Span::styled(format!("  {}", result.score), Styles::dimmed()),
            ]),
            Line::from(Span::styled(format!("  {}", result.excerpt()), Styles::normal())),
        ])
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| Self::item(r, self.focused && i == self.selected_index))
            .collect();

        let title = format!("Results ({})", self.results.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected_index));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_index = (self.selected_index + 1).min(self.last_index());
                None
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.selected_index = self.selected_index.saturating_sub(1);
                None
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.selected_index = (self.selected_index + 1).min(self.last_index());
                None
            }
            KeyCode::PageUp => {
                self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.selected_index = (self.selected_index + PAGE_SIZE).min(self.last_index());
                None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                None
            }
            KeyCode::End => {
                self.selected_index = self.last_index();
                None
            }
            KeyCode::Enter => self
                .selected_result()
                .map(|r| Message::View(ViewMessage::ViewResult(r.node))),
            KeyCode::Esc => Some(Message::FocusSearch),
            _ => None,
        }
    }
}
