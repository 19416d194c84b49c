use ratatui::style::{Color, Modifier, Style};

pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const HIGHLIGHT: Color = Color::Yellow;
    pub const SUCCESS: Color = Color::Green;
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(level: u8) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if level <= 2 {
            style.fg(ColorScheme::PRIMARY)
        } else {
            style.fg(ColorScheme::TEXT)
        }
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    /// A node flashed by "View".
    pub fn highlighted() -> Style {
        Style::default()
            .bg(ColorScheme::HIGHLIGHT)
            .fg(Color::Black)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn checked() -> Style {
        Style::default().fg(ColorScheme::SUCCESS)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(ColorScheme::PRIMARY)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }
}
