//! # Document Component
//!
//! The text field passages get inserted into. It is the `OutputSink` of the
//! terminal adapter: every delivered passage is appended as its own paragraph
//! and the view sticks to the newest one.
//!
//! On exit the whole buffer is handed back to `main`, which prints it.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::sink::OutputSink;
use crate::tui::component::Component;

#[derive(Default)]
pub struct DocumentState {
    pub text: String,
    pub scroll_state: ScrollViewState,
    pub inserts: usize,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for DocumentState {
    fn insert(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push_str("\n\n");
        }
        self.text.push_str(text);
        self.inserts += 1;
        self.scroll_state.scroll_to_bottom();
    }
}

/// Transient render wrapper for the document pane.
pub struct Document<'a> {
    state: &'a mut DocumentState,
}

impl<'a> Document<'a> {
    pub fn new(state: &'a mut DocumentState) -> Self {
        Self { state }
    }
}

impl Component for Document<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" Document ({} inserted) ", self.state.inserts))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.state.text.is_empty() {
            let hint = Paragraph::new("Confirmed verse ranges are inserted here.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
            return;
        }

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.state.text.as_str()).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
