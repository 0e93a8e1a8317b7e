//! # TitleBar Component
//!
//! Top status bar. Purely presentational: it receives everything as props
//! and has no internal state.
//!
//! The text is built left to right, most important first, so narrow
//! terminals still show the app name and clock:
//!
//! 1. `"EasyDrag 14:02"`
//! 2. `" | Dragging: Dune"` while a drag is active
//! 3. `" | Moved to finished"` for the last transition
//! 4. `" | ! disk full"` when the last save failed (shown in red)

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Wall clock, already formatted (e.g. "14:02")
    pub clock: String,
    /// Title of the book being dragged, if any
    pub dragging: Option<String>,
    /// Outcome of the last drag event
    pub status_message: String,
    /// Last persistence failure
    pub error: Option<String>,
}

impl TitleBar {
    pub fn new(clock: String, dragging: Option<String>, status_message: String, error: Option<String>) -> Self {
        Self {
            clock,
            dragging,
            status_message,
            error,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("EasyDrag {}", self.clock);
        if let Some(title) = &self.dragging {
            text.push_str(&format!(" | Dragging: {title}"));
        }
        if !self.status_message.is_empty() {
            text.push_str(&format!(" | {}", self.status_message));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(self.text())];
        if let Some(error) = &self.error {
            spans.push(Span::styled(format!(" | ! {error}"), Style::default().fg(Color::Red)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
