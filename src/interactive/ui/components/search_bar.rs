use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::view::Message as ViewMessage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line query input with readline-style editing.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_pending: bool,
    focused: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.cursor_position = self.char_count();
    }

    /// Take the query from the view without disturbing the cursor while it
    /// already matches.
    pub fn sync_query(&mut self, query: &str) {
        if self.query != query {
            self.set_query(query.to_string());
        }
    }

    pub fn set_pending(&mut self, is_pending: bool) {
        self.is_pending = is_pending;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(i, _)| i)
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Remove chars `start..end`, leaving the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }
        let (byte_start, byte_end) = (self.byte_index(start), self.byte_index(end));
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(self.changed())
    }

    fn insert(&mut self, c: char) -> Message {
        let byte_pos = self.byte_index(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        self.changed()
    }

    fn changed(&self) -> Message {
        Message::View(ViewMessage::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let spans = if self.focused {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let mut rest = self.query.chars().skip(self.cursor_position);
            let under = rest.next().unwrap_or(' ').to_string();
            let after: String = rest.collect();
            vec![
                Span::raw(before),
                Span::styled(under, cursor_style),
                Span::raw(after),
            ]
        } else {
            vec![Span::raw(self.query.as_str())]
        };

        let mut title = "Search".to_string();
        if self.is_pending {
            title.push_str(" …");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let input = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            )
            .style(Styles::label());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => {
                    let end = self.cursor_position;
                    self.delete_range(end.saturating_sub(1), end)
                }
                KeyCode::Char('d') => {
                    let start = self.cursor_position;
                    self.delete_range(start, start + 1)
                }
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some(self.insert(c)),
            KeyCode::Backspace => {
                let end = self.cursor_position;
                self.delete_range(end.saturating_sub(1), end)
            }
            KeyCode::Delete => {
                let start = self.cursor_position;
                self.delete_range(start, start + 1)
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            KeyCode::Enter => Some(Message::View(ViewMessage::QuerySubmitted(
                self.query.clone(),
            ))),
            KeyCode::Down => Some(Message::FocusResults),
            KeyCode::Esc => Some(Message::FocusContent),
            _ => None,
        }
    }
}
