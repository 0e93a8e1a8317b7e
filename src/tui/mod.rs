//! # TUI Adapter
//!
//! The ratatui-specific layer. Renders the shelf as two columns, turns
//! left-button mouse drags into `core::DragEvent` values, and feeds them to
//! the coordinator.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after input, a resize, or
//! when the title bar clock ticks over to a new minute. Between events it
//! sleeps in `poll` for up to a second.

mod component;
mod components;
mod event;
mod pointer;
mod ui;

use std::io::stdout;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info};

use crate::core::hooks::LoggingHooks;
use crate::core::{DragCoordinator, MoveConfig, Transition};
use crate::shelf::{Book, Shelf};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::pointer::PointerTracker;
use crate::tui::ui::ShelfLayout;

/// TUI-specific presentation state (not part of the shelf or the drag session)
pub struct TuiState {
    /// Regions from the last draw, for hit testing
    pub layout: ShelfLayout,
    pub pointer: PointerTracker,
    /// Outcome of the last drag event, shown in the title bar
    pub status_message: String,
    /// Minute shown by the last draw
    clock: String,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            layout: ShelfLayout::default(),
            pointer: PointerTracker::new(),
            status_message: String::new(),
            clock: String::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// List sizes, used to tell whether a cross-list callback actually moved
/// anything.
fn list_sizes(shelf: &Shelf) -> (usize, usize) {
    (shelf.reading.len(), shelf.finished.len())
}

/// Title bar text for a transition, or `None` to keep the previous one.
///
/// `lists_changed` is false when the cross-list callback declined the move
/// (the book already had that status).
fn status_for(transition: &Transition, lists_changed: bool) -> Option<String> {
    match transition {
        Transition::Ignored | Transition::Began => None,
        Transition::Reordered { list, from, to } => {
            Some(format!("Moved within {list}: {} → {}", from + 1, to + 1))
        }
        Transition::MovedAcross { .. } if !lists_changed => None,
        Transition::MovedAcross { list } => Some(format!("Moved to {list}")),
        Transition::Committed { list } => Some(format!("Saved {list}")),
        Transition::Cancelled => Some("Drag cancelled".to_string()),
    }
}

fn current_clock() -> String {
    Local::now().format("%H:%M").to_string()
}

pub fn run(mut shelf: Shelf, move_config: MoveConfig) -> std::io::Result<()> {
    let mut coordinator: DragCoordinator<Shelf, Book> =
        DragCoordinator::with_hooks(move_config, Box::new(LoggingHooks));
    Shelf::register_zones(&mut coordinator);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.clock = current_clock();
            terminal.draw(|f| ui::draw_ui(f, &shelf, &coordinator, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_secs(1));
        if first_event.is_none() {
            needs_redraw = tui.clock != current_clock();
            continue;
        }
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let hit = match event {
                TuiEvent::Quit => {
                    should_quit = true;
                    break;
                }
                TuiEvent::Resize => continue,
                TuiEvent::MouseDown(col, row)
                | TuiEvent::MouseDrag(col, row)
                | TuiEvent::MouseUp(col, row) => ui::hit_test(&tui.layout, &shelf, col, row),
                TuiEvent::Cancel => None,
            };

            let Some(drag_event) = tui.pointer.translate(&event, hit, &shelf) else {
                continue;
            };
            let sizes_before = list_sizes(&shelf);
            let transition = coordinator.dispatch(&mut shelf, drag_event);
            debug!("TUI transition: {:?}", transition);
            if let Some(message) = status_for(&transition, list_sizes(&shelf) != sizes_before) {
                tui.status_message = message;
            }
        }

        if should_quit {
            break;
        }
    }

    // Quitting mid-drag discards the session; hover reorders stay unsaved.
    if coordinator.state().is_dragging() {
        coordinator.end_drag();
    }
    info!("EasyDrag shutting down");
    ratatui::restore();
    Ok(())
}
