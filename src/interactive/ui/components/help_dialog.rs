use crate::interactive::constants::{DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "docview - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  / or Ctrl+K  - Focus the search box"),
            Line::from("  typing       - Search after a short pause"),
            Line::from("  Enter        - Search now"),
            Line::from("  ↓ / Tab      - Move to the results"),
            Line::from("  Enter (list) - View the selected result in the page"),
            Line::from("  Esc          - Leave the search box"),
            Line::from(""),
            Self::section("Page:"),
            Line::from("  ↑/↓ j/k      - Scroll"),
            Line::from("  PgUp/PgDn    - Scroll a screen"),
            Line::from("  1-9          - Sort tables by that column (again to reverse)"),
            Line::from("  f            - Filters"),
            Line::from("  [ / ]        - Previous / next page"),
            Line::from("  n            - Show or hide navigation"),
            Line::from("  r            - Reset search, page and filters"),
            Line::from("  p            - Print the page on exit"),
            Line::from(""),
            Self::section("General:"),
            Line::from("  ?            - Show this help"),
            Line::from("  q            - Quit"),
            Line::from("  Ctrl+C twice - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();
        let height = help_text.len() as u16 + 2;
        let dialog_area = centered_rect(area, HELP_DIALOG_MAX_WIDTH, height, DIALOG_MARGIN);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
