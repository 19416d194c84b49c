use crate::document::{Document, NodeId, NodeKind};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Heading outline shown in the navigation sidebar.
#[derive(Default)]
pub struct Outline {
    entries: Vec<(NodeId, u8, String)>,
    highlighted: Option<NodeId>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document(&mut self, document: &Document) {
        self.entries = document
            .outline()
            .into_iter()
            .filter(|n| !n.hidden)
            .filter_map(|n| match n.kind {
                NodeKind::Heading(level) => Some((n.id, level, n.text.clone())),
                _ => None,
            })
            .collect();
        self.highlighted = document.highlighted;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Component for Outline {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|(id, level, text)| {
                let indent = "  ".repeat(level.saturating_sub(1) as usize);
                let style = if self.highlighted == Some(*id) {
                    Styles::highlighted()
                } else {
                    Styles::heading(*level)
                };
                Line::styled(format!("{indent}{text}"), style)
            })
            .collect();

        let outline = Paragraph::new(lines).block(
            Block::default()
                .title("Navigation")
                .borders(Borders::ALL)
                .border_style(Styles::border(false)),
        );
        f.render_widget(outline, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
