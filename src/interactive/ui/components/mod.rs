pub mod document_pane;
pub mod filter_panel;
pub mod help_dialog;
pub mod outline;
pub mod result_list;
pub mod search_bar;
pub mod status_bar;
pub mod styles;


use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// A `width` x `height` rectangle centered in `area`, shrunk to leave `margin`.
pub fn centered_rect(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(margin));
    let height = height.min(area.height.saturating_sub(margin));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);

        assert_eq!(centered_rect(area, 40, 10, 4), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(area, 200, 200, 4), Rect::new(2, 2, 76, 20));

        let tiny = Rect::new(0, 0, 2, 2);
        assert_eq!(centered_rect(tiny, 40, 10, 4), Rect::new(1, 1, 0, 0));
    }
}
