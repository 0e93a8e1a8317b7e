use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::DragCoordinator;
use crate::shelf::{Book, BookStatus, Shelf};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ShelfColumn, TitleBar};
use crate::tui::pointer::HitTarget;

const HELP_TEXT: &str = "drag with the mouse · Esc cancel · q quit";

/// Screen regions from the last draw, kept for hit testing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLayout {
    pub title: Rect,
    pub reading: Rect,
    pub finished: Rect,
    pub help: Rect,
}

impl ShelfLayout {
    pub fn compute(area: Rect) -> Self {
        use Constraint::{Length, Min, Percentage};
        let [title, main, help] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);
        let [reading, finished] = Layout::horizontal([Percentage(50), Percentage(50)]).areas(main);
        Self {
            title,
            reading,
            finished,
            help,
        }
    }

    pub fn column(&self, status: BookStatus) -> Rect {
        match status {
            BookStatus::Reading => self.reading,
            BookStatus::Finished => self.finished,
        }
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    shelf: &Shelf,
    coordinator: &DragCoordinator<Shelf, Book>,
    tui: &mut TuiState,
) {
    tui.layout = ShelfLayout::compute(frame.area());
    let dragged = coordinator.dragged();
    let hovered = tui.pointer.hovered();

    let mut title_bar = TitleBar::new(
        tui.clock.clone(),
        dragged.map(|b| b.display_title().to_string()),
        tui.status_message.clone(),
        shelf.last_error.clone(),
    );
    title_bar.render(frame, tui.layout.title);

    for status in BookStatus::ALL {
        let over_this_column = hovered.filter(|h| h.status == status);
        let mut column = ShelfColumn {
            status,
            books: shelf.list(status),
            dragged,
            hovered: over_this_column.and_then(|h| h.index),
            highlighted: dragged.is_some() && over_this_column.is_some(),
            config: coordinator.config(),
        };
        column.render(frame, tui.layout.column(status));
    }

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        tui.layout.help,
    );
}

/// Hit test: which column, and which row inside it, is at `(col, row)`.
///
/// The border counts as part of the column (so dropping on it still lands),
/// but only the inner rows resolve to an index.
pub fn hit_test(layout: &ShelfLayout, shelf: &Shelf, col: u16, row: u16) -> Option<HitTarget> {
    let position = Position::new(col, row);
    let status = BookStatus::ALL
        .into_iter()
        .find(|s| layout.column(*s).contains(position))?;

    let inner = layout.column(status).inner(Margin::new(1, 1));
    let index = if inner.contains(position) {
        let offset = (row - inner.y) as usize;
        (offset < shelf.list(status).len()).then_some(offset)
    } else {
        None
    };
    Some(HitTarget { status, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveConfig;
    use crate::test_support::shelf_with;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn layout_80x24() -> ShelfLayout {
        ShelfLayout::compute(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_layout_splits_columns() {
        let layout = layout_80x24();
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.reading.x, 0);
        assert_eq!(layout.finished.x, 40);
        assert_eq!(layout.reading.height, 22);
    }

    #[test]
    fn test_hit_test_rows() {
        let (shelf, _) = shelf_with(&["a", "b"], &[]);
        let layout = layout_80x24();
        // Title row, border, first inner row
        assert_eq!(hit_test(&layout, &shelf, 5, 0), None);
        assert_eq!(
            hit_test(&layout, &shelf, 5, 1),
            Some(HitTarget { status: BookStatus::Reading, index: None })
        );
        assert_eq!(
            hit_test(&layout, &shelf, 5, 2),
            Some(HitTarget { status: BookStatus::Reading, index: Some(0) })
        );
        assert_eq!(
            hit_test(&layout, &shelf, 5, 3),
            Some(HitTarget { status: BookStatus::Reading, index: Some(1) })
        );
        // Below the last book
        assert_eq!(
            hit_test(&layout, &shelf, 5, 4),
            Some(HitTarget { status: BookStatus::Reading, index: None })
        );
    }

    #[test]
    fn test_hit_test_empty_column() {
        let (shelf, _) = shelf_with(&["a"], &[]);
        let layout = layout_80x24();
        assert_eq!(
            hit_test(&layout, &shelf, 60, 2),
            Some(HitTarget { status: BookStatus::Finished, index: None })
        );
    }

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let (shelf, _) = shelf_with(&["Dune"], &["Emma"]);
        let coordinator = DragCoordinator::new(MoveConfig::default());
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, &shelf, &coordinator, &mut tui);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Reading now (1)"));
        assert!(text.contains("Finished (1)"));
        assert!(text.contains("Dune"));
        assert!(text.contains("Emma"));
        assert_eq!(tui.layout, layout_80x24());
    }
}
