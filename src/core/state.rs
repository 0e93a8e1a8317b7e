//! # Drag State
//!
//! The single slot every drop zone of one coordinator shares: either nothing
//! is being dragged, or exactly one item is.
//!
//! ```text
//!        begin_drag(x)            perform_drop / end_drag
//! Idle ───────────────▶ Dragging(x) ───────────────────────▶ Idle
//!                          │  ▲
//!                          └──┘ begin_drag(y): last writer wins
//! ```
//!
//! The slot lives inside [`DragCoordinator`](crate::core::coordinator::DragCoordinator),
//! never in a global.

#[derive(Debug, Clone, PartialEq)]
pub enum DragState<T> {
    Idle,
    Dragging(T),
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<T> DragState<T> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// The current payload, if any.
    pub fn dragged(&self) -> Option<&T> {
        match self {
            DragState::Dragging(item) => Some(item),
            DragState::Idle => None,
        }
    }

    /// Replace the payload, returning whatever was being dragged before.
    pub fn begin(&mut self, item: T) -> Option<T> {
        std::mem::replace(self, DragState::Dragging(item)).into_dragged()
    }

    /// Clear the slot, returning the payload that was being dragged.
    pub fn clear(&mut self) -> Option<T> {
        std::mem::take(self).into_dragged()
    }

    fn into_dragged(self) -> Option<T> {
        match self {
            DragState::Dragging(item) => Some(item),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state: DragState<u32> = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.dragged(), None);
    }

    #[test]
    fn test_begin_replaces_previous_payload() {
        let mut state = DragState::default();
        assert_eq!(state.begin(1), None);
        assert_eq!(state.begin(2), Some(1));
        assert_eq!(state.dragged(), Some(&2));
    }

    #[test]
    fn test_clear_returns_payload() {
        let mut state = DragState::Dragging("book");
        assert_eq!(state.clear(), Some("book"));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.clear(), None);
    }
}
