//! # Transition Hooks
//!
//! Side effects a host UI wants at well-defined points of a drag session:
//! a haptic tap and an animation wrapper. The coordinator fires them; what
//! they do is up to the adapter. A headless host uses [`NoHooks`].
//!
//! | transition        | haptic                  | animation |
//! |-------------------|-------------------------|-----------|
//! | drag start        | [`HapticKind::Light`]     | no      |
//! | internal reorder  | [`HapticKind::Selection`] | yes     |
//! | cross-list move   | [`HapticKind::Light`]     | yes     |
//! | commit (drop)     | [`HapticKind::Medium`]    | no      |
//!
//! Haptics are skipped entirely when `MoveConfig::enable_haptics` is off.

use log::debug;

use crate::core::move_config::Curve;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    /// Selection tick, fired on an in-list reorder.
    Selection,
    /// Light impact, fired when a drag starts and on a cross-list move.
    Light,
    /// Medium impact, fired when a drop commits.
    Medium,
}

pub trait TransitionHooks {
    /// Play a haptic pattern.
    fn haptic(&mut self, _kind: HapticKind) {}

    /// Called right before a list mutation that the host should animate.
    fn animate(&mut self, _curve: Curve) {}
}

/// Does nothing. For hosts without feedback hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl TransitionHooks for NoHooks {}

/// Writes every hook call to the debug log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHooks;

impl TransitionHooks for LoggingHooks {
    fn haptic(&mut self, kind: HapticKind) {
        debug!("haptic: {:?}", kind);
    }

    fn animate(&mut self, curve: Curve) {
        debug!("animate: {:?}", curve);
    }
}
