use std::collections::HashMap;

use crate::document::{Document, NodeId};
use crate::formatters::page::{Block as PageBlock, DisplayMode, blocks, table_lines, visible_rows};
use crate::interactive::constants::{PAGE_SIZE, SCROLL_CONTEXT_LINES};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::view::{DocumentView, ScrollTarget};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Heading(u8),
    Text,
    ListItem,
    TableHeader,
    TableRule,
    TableRow,
    Control,
    Blank,
}

/// One logical line of the rendered page, before wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct PaneLine {
    pub kind: LineKind,
    pub text: String,
    pub nodes: Vec<NodeId>,
}

impl PaneLine {
    fn new(kind: LineKind, text: impl Into<String>, nodes: Vec<NodeId>) -> Self {
        Self {
            kind,
            text: text.into(),
            nodes,
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "", Vec::new())
    }

    fn wraps(&self) -> bool {
        matches!(
            self.kind,
            LineKind::Heading(_) | LineKind::Text | LineKind::ListItem
        )
    }
}

/// Lay out the visible document as logical lines.
pub fn pane_lines(document: &Document, view: &DocumentView) -> Vec<PaneLine> {
    let mut lines = Vec::new();
    for block in blocks(document, DisplayMode::Screen) {
        match block {
            PageBlock::Heading { node, level, text } => {
                if !lines.is_empty() {
                    lines.push(PaneLine::blank());
                }
                lines.push(PaneLine::new(LineKind::Heading(level), text, vec![node]));
            }
            PageBlock::Paragraph { node, text } => {
                lines.push(PaneLine::new(LineKind::Text, text, vec![node]));
            }
            PageBlock::ListItem { node, text } => {
                lines.push(PaneLine::new(LineKind::ListItem, format!("• {text}"), vec![node]));
            }
            PageBlock::Table { table, .. } => {
                let text = table_lines(document, table, view.sort_by.as_deref(), view.sort_order);
                let row_nodes = visible_rows(document, table)
                    .map(|row| row.cells.iter().filter_map(|c| c.node).collect::<Vec<_>>());
                let has_header = !table.headers.is_empty();
                let mut text = text.into_iter();
                if has_header {
                    if let Some(header) = text.next() {
                        lines.push(PaneLine::new(LineKind::TableHeader, header, Vec::new()));
                    }
                    if let Some(rule) = text.next() {
                        lines.push(PaneLine::new(LineKind::TableRule, rule, Vec::new()));
                    }
                }
                for (row, nodes) in text.zip(row_nodes) {
                    lines.push(PaneLine::new(LineKind::TableRow, row, nodes));
                }
                lines.push(PaneLine::blank());
            }
            PageBlock::Control { node, label } => {
                lines.push(PaneLine::new(LineKind::Control, format!("[ {label} ]"), vec![node]));
            }
        }
    }
    lines
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.chars().count() <= width {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split(' ') {
        let mut word = word.to_string();
        let mut word_len = word.chars().count();
        while word_len > width {
            if current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            word_len -= width;
            out.push(head);
        }
        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&word);
        current_len += word_len;
    }
    if current_len > 0 || out.is_empty() {
        out.push(current);
    }
    out
}

/// Scrollable view of the page body.
#[derive(Default)]
pub struct DocumentPane {
    title: String,
    lines: Vec<PaneLine>,
    highlighted: Option<NodeId>,
    scroll_offset: usize,
    pending_node: Option<NodeId>,
    viewport_height: usize,
    max_scroll: usize,
    focused: bool,
    node_rows: HashMap<NodeId, usize>,
}

impl DocumentPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&mut self, document: &Document, view: &DocumentView) {
        self.title = document
            .title
            .clone()
            .unwrap_or_else(|| "Document".to_string());
        self.lines = pane_lines(document, view);
        self.highlighted = document.highlighted;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn scroll_to(&mut self, target: ScrollTarget) {
        match target {
            ScrollTarget::Top => {
                self.scroll_offset = 0;
                self.pending_node = None;
            }
            ScrollTarget::Node(node) => self.pending_node = Some(node),
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn lines(&self) -> &[PaneLine] {
        &self.lines
    }

    fn line_style(&self, line: &PaneLine) -> Style {
        if self
            .highlighted
            .is_some_and(|id| line.nodes.contains(&id))
        {
            return Styles::highlighted();
        }
        match line.kind {
            LineKind::Heading(level) => Styles::heading(level),
            LineKind::TableHeader => Styles::label(),
            LineKind::TableRule | LineKind::Control => Styles::dimmed(),
            _ => Styles::normal(),
        }
    }

    /// Wrap to `width` and record the first display row of every node.
    fn layout(&mut self, width: usize) -> Vec<Line<'static>> {
        let mut rows = Vec::with_capacity(self.lines.len());
        self.node_rows.clear();
        for line in &self.lines {
            for node in &line.nodes {
                self.node_rows.entry(*node).or_insert(rows.len());
            }
            let style = self.line_style(line);
            let pieces = if line.wraps() {
                wrap_text(&line.text, width)
            } else {
                vec![line.text.clone()]
            };
            rows.extend(pieces.into_iter().map(|p| Line::styled(p, style)));
        }
        rows
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(self.max_scroll);
    }
}

impl Component for DocumentPane {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        self.viewport_height = area.height.saturating_sub(2) as usize;

        let rows = self.layout(inner_width);
        self.max_scroll = rows.len().saturating_sub(self.viewport_height);
        if let Some(node) = self.pending_node.take() {
            if let Some(row) = self.node_rows.get(&node) {
                self.scroll_offset = row.saturating_sub(SCROLL_CONTEXT_LINES);
            }
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll);

        let paragraph = Paragraph::new(rows)
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            )
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));

        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let page = self.viewport_height.max(PAGE_SIZE) as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_offset = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll_offset = self.max_scroll,
            KeyCode::Esc => return Some(Message::FocusSearch),
            _ => {}
        }
        None
    }
}
