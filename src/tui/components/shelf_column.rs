//! # ShelfColumn Component
//!
//! One status list drawn as a bordered column, one book per row:
//!
//! ```text
//! ┌Reading now (3)──────────────┐
//! │Dune · Frank Herbert      33%│
//! │Piranesi · Susanna Cl…     4%│
//! └─────────────────────────────┘
//! ```
//!
//! Row `i` sits at `inner.y + i`; `ui::hit_test` relies on that. An empty
//! list renders a placeholder instead, and the whole inner area acts as the
//! empty-list drop target.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::MoveConfig;
use crate::shelf::{Book, BookStatus};
use crate::tui::component::Component;

const EMPTY_PLACEHOLDER: &str = "Drop books here";

pub struct ShelfColumn<'a> {
    pub status: BookStatus,
    pub books: &'a [Book],
    /// Payload of the active drag, if any
    pub dragged: Option<&'a Book>,
    /// Row under the pointer while dragging
    pub hovered: Option<usize>,
    /// Pointer is somewhere over this column during a drag
    pub highlighted: bool,
    pub config: &'a MoveConfig,
}

impl<'a> ShelfColumn<'a> {
    fn title(&self) -> String {
        format!("{} ({})", self.status.label(), self.books.len())
    }

    fn row_style(&self, index: usize, book: &Book) -> Style {
        let mut style = Style::default();
        if self.dragged == Some(book) {
            if self.config.dragged_opacity() < 1.0 {
                style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
            }
            if self.config.scale_effect() > 1.0 {
                style = style.add_modifier(Modifier::BOLD);
            }
        }
        if self.hovered == Some(index) {
            style = style.bg(Color::DarkGray);
        }
        style
    }
}

impl<'a> Component for ShelfColumn<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.highlighted {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .title(self.title())
            .border_style(border_style)
            .title_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.books.is_empty() {
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(placeholder, inner);
            return;
        }

        for (index, book) in self.books.iter().enumerate() {
            if index as u16 >= inner.height {
                break;
            }
            let row_area = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let text = format_row(book, inner.width as usize);
            frame.render_widget(Paragraph::new(text).style(self.row_style(index, book)), row_area);
        }
    }
}

/// `"title · author"` on the left, progress right-aligned, fitted to `width`.
fn format_row(book: &Book, width: usize) -> String {
    let progress = book.progress_string();
    let label = match &book.author {
        Some(author) => format!("{} · {}", book.display_title(), author),
        None => book.display_title().to_string(),
    };
    let progress_width = progress.width() + 1;
    if width <= progress_width {
        return truncate_to_width(&label, width);
    }
    let label_width = width - progress_width;
    let label = truncate_to_width(&label, label_width);
    let padding = label_width - label.width();
    format!("{label}{} {progress}", " ".repeat(padding))
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
