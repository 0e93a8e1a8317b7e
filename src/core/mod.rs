//! # Core Drag-and-Drop Logic
//!
//! This module decides what a drag does to a set of lists.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • DragState (slot)     │
//!                    │  • DragEvent (input)    │
//!                    │  • DragCoordinator      │
//!                    │  • move_item()          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Shelf    │      │   Hooks    │
//!     │  Adapter   │      │ (lists +   │      │ (haptics,  │
//!     │ (ratatui)  │      │  store)    │      │ animation) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`reorder`]: `move_item()`, the in-list reorder rule
//! - [`state`]: `DragState`, the one shared "currently dragged" slot
//! - [`action`]: `DragEvent`, `Transition`, `ListId`
//! - [`coordinator`]: `DragCoordinator`, routes events to drop zones
//! - [`hooks`]: haptic/animation side effects, injected
//! - [`move_config`]: `MoveConfig`, appearance and feedback switches
//! - [`config`]: config file loading and override resolution

pub mod action;
pub mod config;
pub mod coordinator;
pub mod hooks;
pub mod move_config;
pub mod reorder;
pub mod state;

pub use action::{DragEvent, ListId, Transition};
pub use coordinator::{DragCoordinator, DropZone};
pub use move_config::{DragAnimation, MoveConfig};
pub use reorder::{move_item, reorder};
