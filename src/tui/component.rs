use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into a region of the frame.
///
/// Props are plain struct fields; persistent state (highlighted rows, scroll
/// offsets) is borrowed mutably so a render pass can keep it in sync with
/// what is actually on screen.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
