use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    /// Esc: abandon the current drag
    Cancel,

    // Left-button pointer events, (column, row)
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };
    translate(event)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => match (key_event.modifiers, key_event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
            (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
            (_, KeyCode::Esc) => Some(TuiEvent::Cancel),
            _ => None,
        },
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_button_maps_to_pointer_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(TuiEvent::MouseDown(3, 4))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
            Some(TuiEvent::MouseDrag(5, 6))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 7, 8)),
            Some(TuiEvent::MouseUp(7, 8))
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert_eq!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved, 0, 0)), None);
    }

    #[test]
    fn test_keys() {
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(translate(esc), Some(TuiEvent::Cancel));
        assert_eq!(translate(ctrl_c), Some(TuiEvent::Quit));
        assert_eq!(translate(q), Some(TuiEvent::Quit));
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
