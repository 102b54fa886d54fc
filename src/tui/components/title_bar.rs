//! # TitleBar Component
//!
//! Top status bar: translation, lookups in flight, and the engine's status line.
//!
//! Purely presentational. All three props come from the caller:
//!
//! 1. **Lookups pending**: `"Versepick (web) | 1 lookup pending | Looking up John 3:16..."`
//! 2. **Idle**: `"Versepick (web) | Choose a book"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub translation: String,
    pub status_message: String,
    pub pending_lookups: usize,
}

impl TitleBar {
    fn text(&self) -> String {
        let mut title = format!("Versepick ({})", self.translation);
        match self.pending_lookups {
            0 => {}
            1 => title.push_str(" | 1 lookup pending"),
            n => title.push_str(&format!(" | {n} lookups pending")),
        }
        if !self.status_message.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.status_message);
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.pending_lookups > 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_idle() {
        let bar = TitleBar {
            translation: "web".to_string(),
            status_message: "Choose a book".to_string(),
            pending_lookups: 0,
        };
        assert_eq!(bar.text(), "Versepick (web) | Choose a book");
    }

    #[test]
    fn test_title_with_pending_lookups() {
        let bar = TitleBar {
            translation: "kjv".to_string(),
            status_message: String::new(),
            pending_lookups: 2,
        };
        assert_eq!(bar.text(), "Versepick (kjv) | 2 lookups pending");
    }
}
