//! # Drag Coordinator
//!
//! Routes drag events to the lists that take part in one drag session.
//!
//! ```text
//! DragCoordinator<H, T>
//! ├── state: DragState<T>           // the one shared "currently dragged" slot
//! ├── zones: Vec<DropZone<H, T>>    // one per list id
//! ├── config: MoveConfig            // animation + haptics switches
//! └── hooks: Box<dyn TransitionHooks>
//! ```
//!
//! `H` is the host: whatever owns the lists (app state, a view model). The
//! coordinator never stores it; every event borrows it for the duration of
//! one call, and zone callbacks receive it back as `&mut H`. That keeps the
//! lists caller-owned without `Rc<RefCell<_>>` plumbing.
//!
//! ## Routing
//!
//! When the pointer enters a row of list L while X is dragged:
//!
//! - X already in L → reorder X next to the hovered row (in-list reorder)
//! - X not in L     → hand X to L's cross-list callback; the callback removes
//!   X from wherever it lives, because the coordinator does not know.
//!
//! Reordering happens on hover, not on release. Release only commits.
//!
//! Every event is handled synchronously on the caller's thread. The boxed
//! callbacks are neither `Send` nor `Sync`, so a coordinator cannot leak onto
//! another thread.

use std::fmt;

use log::{debug, info};

use crate::core::action::{DragEvent, ListId, Transition};
use crate::core::hooks::{HapticKind, NoHooks, TransitionHooks};
use crate::core::move_config::{Curve, MoveConfig};
use crate::core::reorder::move_item;
use crate::core::state::DragState;

/// Selects a zone's list inside the host.
pub type ItemsLens<H, T> = fn(&mut H) -> &mut Vec<T>;

type HostCallback<H> = Box<dyn FnMut(&mut H)>;
type CrossListCallback<H, T> = Box<dyn FnMut(&mut H, &T, &ListId)>;

/// A list that accepts drops, plus what to do when it does.
pub struct DropZone<H, T> {
    list: ListId,
    items: ItemsLens<H, T>,
    on_internal_reorder: Option<HostCallback<H>>,
    on_cross_list_move: Option<CrossListCallback<H, T>>,
    on_commit: Option<HostCallback<H>>,
}

impl<H, T> DropZone<H, T> {
    /// A zone for `list` with no callbacks. Without a cross-list callback it
    /// only reorders its own items.
    pub fn new(list: impl Into<ListId>, items: ItemsLens<H, T>) -> Self {
        Self {
            list: list.into(),
            items,
            on_internal_reorder: None,
            on_cross_list_move: None,
            on_commit: None,
        }
    }

    /// Called after the dragged item moved within this list.
    pub fn on_internal_reorder(mut self, f: impl FnMut(&mut H) + 'static) -> Self {
        self.on_internal_reorder = Some(Box::new(f));
        self
    }

    /// Called with the dragged item and this zone's id when an item from
    /// another list arrives.
    pub fn on_cross_list_move(mut self, f: impl FnMut(&mut H, &T, &ListId) + 'static) -> Self {
        self.on_cross_list_move = Some(Box::new(f));
        self
    }

    /// Called when the drag is released over this list.
    pub fn on_commit(mut self, f: impl FnMut(&mut H) + 'static) -> Self {
        self.on_commit = Some(Box::new(f));
        self
    }
}

impl<H, T> fmt::Debug for DropZone<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZone")
            .field("list", &self.list)
            .field("on_internal_reorder", &self.on_internal_reorder.is_some())
            .field("on_cross_list_move", &self.on_cross_list_move.is_some())
            .field("on_commit", &self.on_commit.is_some())
            .finish()
    }
}

pub struct DragCoordinator<H, T> {
    state: DragState<T>,
    zones: Vec<DropZone<H, T>>,
    config: MoveConfig,
    hooks: Box<dyn TransitionHooks>,
}

impl<H, T> DragCoordinator<H, T>
where
    T: PartialEq + Clone + fmt::Debug,
{
    pub fn new(config: MoveConfig) -> Self {
        Self::with_hooks(config, Box::new(NoHooks))
    }

    pub fn with_hooks(config: MoveConfig, hooks: Box<dyn TransitionHooks>) -> Self {
        Self {
            state: DragState::Idle,
            zones: Vec::new(),
            config,
            hooks,
        }
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    pub fn state(&self) -> &DragState<T> {
        &self.state
    }

    /// The item currently being dragged, if any.
    pub fn dragged(&self) -> Option<&T> {
        self.state.dragged()
    }

    /// Register a zone. A zone already registered for the same list is replaced.
    pub fn register_drop_zone(&mut self, zone: DropZone<H, T>) {
        debug!("Registering drop zone: {:?}", zone);
        if let Some(existing) = self.zones.iter_mut().find(|z| z.list == zone.list) {
            *existing = zone;
        } else {
            self.zones.push(zone);
        }
    }

    pub fn has_zone(&self, list: &ListId) -> bool {
        self.zones.iter().any(|z| &z.list == list)
    }

    /// Start dragging `item`. Replaces any payload already in the slot.
    pub fn begin_drag(&mut self, item: T) -> Transition {
        if let Some(previous) = self.state.begin(item) {
            debug!("Drag payload replaced (was {:?})", previous);
        }
        if self.config.enable_haptics {
            self.hooks.haptic(HapticKind::Light);
        }
        info!("Drag began: {:?}", self.state.dragged());
        Transition::Began
    }

    /// The pointer entered the row of `hovered` inside `list`.
    pub fn drag_entered(&mut self, host: &mut H, list: &ListId, hovered: &T) -> Transition {
        let Some(dragged) = self.state.dragged() else {
            return Transition::Ignored;
        };
        let Some(zone) = self.zones.iter_mut().find(|z| &z.list == list) else {
            debug!("Drag entered unregistered list '{}'", list);
            return Transition::Ignored;
        };

        let items = (zone.items)(host);
        if !items.contains(dragged) {
            return route_cross_list(zone, &mut *self.hooks, &self.config, host, dragged);
        }

        if dragged == hovered || !items.contains(hovered) {
            return Transition::Ignored;
        }

        self.hooks.animate(self.config.animation.curve_or_default());
        let Some(applied) = move_item(items, dragged, hovered) else {
            return Transition::Ignored;
        };
        debug!(
            "Reordered '{}': {:?} {} -> {}",
            list, dragged, applied.from, applied.to
        );

        if self.config.enable_haptics {
            self.hooks.haptic(HapticKind::Selection);
        }
        if let Some(callback) = zone.on_internal_reorder.as_mut() {
            callback(host);
        }

        Transition::Reordered {
            list: list.clone(),
            from: applied.from,
            to: applied.to,
        }
    }

    /// The pointer entered the placeholder of an empty `list`.
    ///
    /// There is no row to hover, so membership and indices are never
    /// consulted: the payload always goes to the cross-list callback.
    pub fn drag_entered_empty(&mut self, host: &mut H, list: &ListId) -> Transition {
        let Some(dragged) = self.state.dragged() else {
            return Transition::Ignored;
        };
        let Some(zone) = self.zones.iter_mut().find(|z| &z.list == list) else {
            debug!("Drag entered unregistered empty list '{}'", list);
            return Transition::Ignored;
        };
        let Some(callback) = zone.on_cross_list_move.as_mut() else {
            return Transition::Ignored;
        };

        self.hooks.animate(Curve::DEFAULT);
        callback(host, dragged, &zone.list);
        if self.config.enable_haptics {
            self.hooks.haptic(HapticKind::Light);
        }
        info!("Moved {:?} into empty list '{}'", dragged, list);
        Transition::MovedAcross { list: list.clone() }
    }

    /// The pointer was released over `list`: commit and end the session.
    ///
    /// Releasing over a list nobody registered counts as a cancel.
    pub fn perform_drop(&mut self, host: &mut H, list: &ListId) -> Transition {
        if !self.state.is_dragging() {
            return Transition::Ignored;
        }
        let Some(zone) = self.zones.iter_mut().find(|z| &z.list == list) else {
            debug!("Drop on unregistered list '{}', cancelling", list);
            return self.end_drag();
        };

        if let Some(callback) = zone.on_commit.as_mut() {
            callback(host);
        }
        let dropped = self.state.clear();
        if self.config.enable_haptics {
            self.hooks.haptic(HapticKind::Medium);
        }
        info!("Drop committed on '{}': {:?}", list, dropped);
        Transition::Committed { list: list.clone() }
    }

    /// End the session without committing. No callback fires.
    pub fn end_drag(&mut self) -> Transition {
        match self.state.clear() {
            Some(item) => {
                info!("Drag cancelled: {:?}", item);
                Transition::Cancelled
            }
            None => Transition::Ignored,
        }
    }

    /// Feed one event through the state machine.
    pub fn dispatch(&mut self, host: &mut H, event: DragEvent<T>) -> Transition {
        match event {
            DragEvent::Begin(item) => self.begin_drag(item),
            DragEvent::Enter { list, hovered } => self.drag_entered(host, &list, &hovered),
            DragEvent::EnterEmpty { list } => self.drag_entered_empty(host, &list),
            DragEvent::Drop { list } => self.perform_drop(host, &list),
            DragEvent::Cancel => self.end_drag(),
        }
    }
}

/// Hand `dragged` to `zone`'s cross-list callback.
fn route_cross_list<H, T: fmt::Debug>(
    zone: &mut DropZone<H, T>,
    hooks: &mut dyn TransitionHooks,
    config: &MoveConfig,
    host: &mut H,
    dragged: &T,
) -> Transition {
    let Some(callback) = zone.on_cross_list_move.as_mut() else {
        return Transition::Ignored;
    };

    hooks.animate(config.animation.curve_or_default());
    callback(host, dragged, &zone.list);
    if config.enable_haptics {
        hooks.haptic(HapticKind::Light);
    }
    info!("Moved {:?} across into '{}'", dragged, zone.list);
    Transition::MovedAcross {
        list: zone.list.clone(),
    }
}

impl<H, T: fmt::Debug> fmt::Debug for DragCoordinator<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCoordinator")
            .field("state", &self.state)
            .field("zones", &self.zones)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
