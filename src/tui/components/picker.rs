//! # Picker Component
//!
//! One or two option lists fed entirely by a `PickerSource`. The picker
//! never looks at stages, books or verses; it only asks how many columns
//! there are, how many rows each has, and what each row says.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PickerState` lives in `TuiState` (highlighted rows, focused column)
//! - `Picker` is created each frame with borrowed state and source
//!
//! With two columns a "to" label sits between them (start verse *to* end verse).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::picker::PickerSource;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Persistent state for the picker: one highlighted row per column.
pub struct PickerState {
    pub rows: Vec<usize>,
    pub focused: usize,
    list_states: Vec<ListState>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PickerState {
    pub fn new(columns: usize) -> Self {
        let mut state = Self {
            rows: Vec::new(),
            focused: 0,
            list_states: Vec::new(),
        };
        state.reset(columns);
        state
    }

    /// Back to row 0 in every column, first column focused. Called when the stage changes.
    pub fn reset(&mut self, columns: usize) {
        self.rows = vec![0; columns];
        self.focused = 0;
        self.list_states = (0..columns)
            .map(|_| ListState::default().with_selected(Some(0)))
            .collect();
    }

    /// Handle a key event, returning a PickerEvent if the engine should hear about it.
    pub fn handle_event<S: PickerSource + ?Sized>(
        &mut self,
        event: &TuiEvent,
        source: &S,
    ) -> Option<PickerEvent> {
        let columns = source.column_count();
        if self.rows.len() != columns {
            self.reset(columns);
        }
        let column = self.focused;
        let count = source.option_count(column);

        match event {
            TuiEvent::CursorUp if count > 0 => {
                self.rows[column] = self.rows[column].saturating_sub(1);
                self.select(column);
                Some(PickerEvent::RowChanged {
                    column,
                    row: self.rows[column],
                })
            }
            TuiEvent::CursorDown if count > 0 => {
                self.rows[column] = (self.rows[column] + 1).min(count - 1);
                self.select(column);
                Some(PickerEvent::RowChanged {
                    column,
                    row: self.rows[column],
                })
            }
            TuiEvent::CursorLeft => {
                self.focused = self.focused.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                self.focused = (self.focused + 1).min(columns.saturating_sub(1));
                None
            }
            TuiEvent::Submit if source.confirm_enabled() => {
                Some(PickerEvent::Confirm(self.rows.clone()))
            }
            _ => None,
        }
    }

    fn select(&mut self, column: usize) {
        if let Some(list_state) = self.list_states.get_mut(column) {
            list_state.select(Some(self.rows[column]));
        }
    }
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    RowChanged { column: usize, row: usize },
    Confirm(Vec<usize>),
}

/// Transient render wrapper for the picker.
pub struct Picker<'a, S: PickerSource + ?Sized> {
    state: &'a mut PickerState,
    source: &'a S,
    title: &'a str,
}

impl<'a, S: PickerSource + ?Sized> Picker<'a, S> {
    pub fn new(state: &'a mut PickerState, source: &'a S, title: &'a str) -> Self {
        Self {
            state,
            source,
            title,
        }
    }

    fn items(&self, column: usize) -> Vec<ListItem<'static>> {
        (0..self.source.option_count(column))
            .filter_map(|row| self.source.option_label(column, row))
            .map(ListItem::new)
            .collect()
    }

    fn column_block(&self, column: usize, title: String) -> Block<'static> {
        let border_color = if column == self.state.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .padding(Padding::horizontal(1))
    }
}

impl<S: PickerSource + ?Sized> Component for Picker<'_, S> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = self.source.column_count();
        if self.state.rows.len() != columns {
            self.state.reset(columns);
        }

        let help_text = if self.source.confirm_enabled() {
            " ↑↓ Move  Enter Confirm "
        } else {
            " ↑↓ Move "
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let areas: Vec<Rect> = if self.source.shows_range_label() {
            let [start, to, end] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(4),
                Constraint::Fill(1),
            ])
            .areas(inner);
            let label = Paragraph::new("to")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            let [_, label_area, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(to);
            frame.render_widget(label, label_area);
            vec![start, end]
        } else {
            vec![inner]
        };

        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);

        for (column, column_area) in areas.into_iter().enumerate().take(columns) {
            let title = match (columns, column) {
                (2, 0) => " Start ".to_string(),
                (2, _) => " End ".to_string(),
                _ => format!(" {} options ", self.source.option_count(column)),
            };
            let items = self.items(column);
            let block = self.column_block(column, title);

            if items.is_empty() {
                let empty = Paragraph::new("Nothing to choose")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(empty, column_area);
                continue;
            }

            let list = List::new(items).block(block).highlight_style(highlight);
            frame.render_stateful_widget(list, column_area, &mut self.state.list_states[column]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::picker::PickerSource;
    use crate::test_support::test_engine;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cursor_moves_emit_row_changes() {
        let engine = test_engine();
        let mut state = PickerState::new(1);
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown, &engine),
            Some(PickerEvent::RowChanged { column: 0, row: 1 })
        );
        // Clamped at the last testament
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown, &engine),
            Some(PickerEvent::RowChanged { column: 0, row: 1 })
        );
        assert_eq!(
            state.handle_event(&TuiEvent::CursorUp, &engine),
            Some(PickerEvent::RowChanged { column: 0, row: 0 })
        );
    }

    #[test]
    fn test_submit_waits_for_row_change() {
        let mut engine = test_engine();
        let mut state = PickerState::new(1);
        assert_eq!(state.handle_event(&TuiEvent::Submit, &engine), None);

        if let Some(PickerEvent::RowChanged { column, row }) =
            state.handle_event(&TuiEvent::CursorDown, &engine)
        {
            engine.on_row_changed(column, row);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &engine),
            Some(PickerEvent::Confirm(vec![1]))
        );
    }

    #[test]
    fn test_focus_moves_between_verse_columns() {
        let mut engine = test_engine();
        engine.on_confirm(&[0]);
        engine.on_confirm(&[0]);
        engine.on_confirm(&[0]); // Genesis 1
        let mut state = PickerState::new(1);

        state.handle_event(&TuiEvent::CursorRight, &engine);
        assert_eq!(state.rows, vec![0, 0]);
        assert_eq!(state.focused, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown, &engine),
            Some(PickerEvent::RowChanged { column: 1, row: 1 })
        );
        state.handle_event(&TuiEvent::CursorRight, &engine);
        assert_eq!(state.focused, 1);
        state.handle_event(&TuiEvent::CursorLeft, &engine);
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn test_empty_column_emits_nothing() {
        let mut engine = test_engine();
        engine.on_confirm(&[0]);
        engine.on_confirm(&[1]); // Exodus, no chapters in fixture
        let mut state = PickerState::new(1);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &engine), None);
    }

    #[test]
    fn test_render_shows_range_label() {
        let mut engine = test_engine();
        engine.on_confirm(&[0]);
        engine.on_confirm(&[0]);
        engine.on_confirm(&[0]);
        let mut state = PickerState::new(2);
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Picker::new(&mut state, &engine, "Choose verses").render(f, area);
            })
            .unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("to"));
        assert!(rendered.contains("Start"));
        assert!(rendered.contains("None"));
    }
}
