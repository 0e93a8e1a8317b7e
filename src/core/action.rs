//! # Drag Events
//!
//! Everything that can happen during a drag session becomes a `DragEvent`.
//! Mouse pressed on a row? That's `DragEvent::Begin(item)`.
//! Pointer crossed into another row? That's `DragEvent::Enter { .. }`.
//!
//! The coordinator consumes an event and reports what it did as a
//! `Transition`. The adapter decides what to redraw from that.
//!
//! ```text
//! DragState + DragEvent  →  DragCoordinator::dispatch()  →  Transition
//! ```

use std::fmt;

/// Names one list taking part in a drag session (e.g. `"reading"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(String);

impl ListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Pointer-level input, already resolved to items and lists by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent<T> {
    /// Drag started on an item.
    Begin(T),
    /// Pointer entered the row of `hovered` inside `list`.
    Enter { list: ListId, hovered: T },
    /// Pointer entered the placeholder of an empty `list`.
    EnterEmpty { list: ListId },
    /// Pointer released over a zone of `list`.
    Drop { list: ListId },
    /// Pointer released outside every zone.
    Cancel,
}

/// What the coordinator did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed: no drag, unknown list, self-hover, missing item.
    Ignored,
    /// A drag session started (or its payload was replaced).
    Began,
    /// The dragged item moved within `list`.
    Reordered { list: ListId, from: usize, to: usize },
    /// The cross-list callback of `list` was invoked.
    MovedAcross { list: ListId },
    /// The drop landed on `list` and the session ended.
    Committed { list: ListId },
    /// The session ended without a drop.
    Cancelled,
}

impl Transition {
    /// True when the event changed list contents.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Transition::Reordered { .. } | Transition::MovedAcross { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_id_display_and_conversions() {
        let id: ListId = "reading".into();
        assert_eq!(id.to_string(), "reading");
        assert_eq!(id, ListId::from(String::from("reading")));
        assert_eq!(id.as_str(), "reading");
    }

    #[test]
    fn test_mutated() {
        assert!(Transition::MovedAcross { list: "a".into() }.mutated());
        assert!(
            Transition::Reordered {
                list: "a".into(),
                from: 0,
                to: 1
            }
            .mutated()
        );
        assert!(!Transition::Committed { list: "a".into() }.mutated());
        assert!(!Transition::Ignored.mutated());
    }
}
