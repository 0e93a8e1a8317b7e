use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data as props (struct fields) and render into a
/// `Rect`. Props are borrowed from the shelf and the coordinator for the
/// length of one frame; nothing is copied.
///
/// Components do not remember where they drew. Hit testing replays the
/// same `ShelfLayout` split in `ui::hit_test` instead.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
