//! # Pointer Tracker
//!
//! Turns raw left-button mouse events into [`DragEvent`]s for the
//! coordinator. Terminals report a drag as a stream of positions; the drop
//! zones only care when the pointer crosses into a different row, so the
//! tracker remembers the last hit and stays quiet until it changes.
//!
//! ```text
//! MouseDown on a row      → Begin(book)
//! MouseDrag onto new row  → Enter { list, hovered }
//! MouseDrag onto empty    → EnterEmpty { list }
//! MouseUp inside a column → Drop { list }
//! MouseUp elsewhere / Esc → Cancel
//! ```

use crate::core::DragEvent;
use crate::shelf::{Book, BookStatus, Shelf};
use crate::tui::event::TuiEvent;

/// What the pointer is over: a column, and the row within it if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub status: BookStatus,
    pub index: Option<usize>,
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    pressed: bool,
    last_target: Option<HitTarget>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row under the pointer during a drag, for hover highlighting.
    pub fn hovered(&self) -> Option<HitTarget> {
        if self.pressed { self.last_target } else { None }
    }

    /// Translate one event. `hit` is where the event landed, resolved
    /// against the last drawn layout.
    pub fn translate(
        &mut self,
        event: &TuiEvent,
        hit: Option<HitTarget>,
        shelf: &Shelf,
    ) -> Option<DragEvent<Book>> {
        match event {
            TuiEvent::MouseDown(..) => {
                let target = hit?;
                let book = shelf.list(target.status).get(target.index?)?.clone();
                self.pressed = true;
                self.last_target = Some(target);
                Some(DragEvent::Begin(book))
            }
            TuiEvent::MouseDrag(..) => {
                if !self.pressed || hit == self.last_target {
                    return None;
                }
                self.last_target = hit;
                let target = hit?;
                let list = shelf.list(target.status);
                match target.index {
                    Some(index) => Some(DragEvent::Enter {
                        list: target.status.list_id(),
                        hovered: list.get(index)?.clone(),
                    }),
                    None if list.is_empty() => Some(DragEvent::EnterEmpty {
                        list: target.status.list_id(),
                    }),
                    None => None,
                }
            }
            TuiEvent::MouseUp(..) => {
                if !self.pressed {
                    return None;
                }
                self.reset();
                match hit {
                    Some(target) => Some(DragEvent::Drop {
                        list: target.status.list_id(),
                    }),
                    None => Some(DragEvent::Cancel),
                }
            }
            TuiEvent::Cancel => {
                if !self.pressed {
                    return None;
                }
                self.reset();
                Some(DragEvent::Cancel)
            }
            TuiEvent::Quit | TuiEvent::Resize => None,
        }
    }

    fn reset(&mut self) {
        self.pressed = false;
        self.last_target = None;
    }
}
