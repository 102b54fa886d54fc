use crate::core::state::{Engine, prompt};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Document, Picker, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Rows given to the picker, borders included.
const PICKER_HEIGHT: u16 = 14;

pub fn draw_ui(frame: &mut Frame, engine: &Engine, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(PICKER_HEIGHT), Min(0), Length(1)]);
    let [title_area, picker_area, document_area, help_area] = layout.areas(frame.area());

    TitleBar {
        translation: tui.translation.clone(),
        status_message: engine.status_message.clone(),
        pending_lookups: engine.pending_lookups,
    }
    .render(frame, title_area);

    Picker::new(&mut tui.picker, engine, prompt(engine.stage())).render(frame, picker_area);
    Document::new(&mut tui.document).render(frame, document_area);

    let help = Span::styled(
        " ←→ Column  PgUp/PgDn Scroll  Esc Quit ",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(help, help_area);
}
