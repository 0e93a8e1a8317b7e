//! # Move Config
//!
//! Presentational knobs for a drag session: how the dragged row looks, which
//! animation accompanies a move, and whether haptics fire. The core never
//! renders anything; it only hands these values to the adapter and the
//! transition hooks.

use serde::{Deserialize, Serialize};

/// A concrete animation curve handed to [`TransitionHooks::animate`].
///
/// [`TransitionHooks::animate`]: crate::core::hooks::TransitionHooks::animate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Curve {
    EaseInOut { duration: f64 },
    Spring { response: f64, damping_fraction: f64 },
}

impl Curve {
    /// The curve used when the selected animation resolves to nothing.
    pub const DEFAULT: Curve = Curve::EaseInOut { duration: 0.35 };
}

/// Animation selection for list moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAnimation {
    /// Plain ease-in-out.
    #[default]
    Smooth,
    /// Springy with visible overshoot.
    Bouncy,
    /// Stiffer stock spring.
    Spring,
    /// Caller-supplied curve.
    Custom(Curve),
    /// No preference; transitions fall back to [`Curve::DEFAULT`].
    None,
}

impl DragAnimation {
    /// Resolve the selection to a curve, if it names one.
    pub fn curve(&self) -> Option<Curve> {
        match self {
            DragAnimation::Smooth => Some(Curve::EaseInOut { duration: 0.3 }),
            DragAnimation::Bouncy => Some(Curve::Spring {
                response: 0.3,
                damping_fraction: 0.6,
            }),
            DragAnimation::Spring => Some(Curve::Spring {
                response: 0.55,
                damping_fraction: 0.825,
            }),
            DragAnimation::Custom(curve) => Some(*curve),
            DragAnimation::None => None,
        }
    }

    /// The curve a transition actually runs with.
    pub fn curve_or_default(&self) -> Curve {
        self.curve().unwrap_or(Curve::DEFAULT)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DragAnimation::Smooth => "smooth",
            DragAnimation::Bouncy => "bouncy",
            DragAnimation::Spring => "spring",
            DragAnimation::Custom(_) => "custom",
            DragAnimation::None => "none",
        }
    }
}

/// Appearance and feedback settings for one drag scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveConfig {
    dragged_opacity: f64,
    scale_effect: f64,
    pub animation: DragAnimation,
    pub enable_haptics: bool,
}

pub const DEFAULT_DRAGGED_OPACITY: f64 = 0.7;
pub const DEFAULT_SCALE_EFFECT: f64 = 1.0;

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            dragged_opacity: DEFAULT_DRAGGED_OPACITY,
            scale_effect: DEFAULT_SCALE_EFFECT,
            animation: DragAnimation::Smooth,
            enable_haptics: true,
        }
    }
}

impl MoveConfig {
    pub fn new(
        dragged_opacity: f64,
        scale_effect: f64,
        animation: DragAnimation,
        enable_haptics: bool,
    ) -> Self {
        Self::default()
            .with_dragged_opacity(dragged_opacity)
            .with_scale_effect(scale_effect)
            .with_animation(animation)
            .with_haptics(enable_haptics)
    }

    /// Opacity of the dragged element, clamped to `[0, 1]`. NaN keeps the default.
    pub fn with_dragged_opacity(mut self, opacity: f64) -> Self {
        if !opacity.is_nan() {
            self.dragged_opacity = opacity.clamp(0.0, 1.0);
        }
        self
    }

    /// Scale of the dragged element. Non-positive or NaN values keep the default.
    pub fn with_scale_effect(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.scale_effect = scale;
        }
        self
    }

    pub fn with_animation(mut self, animation: DragAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_haptics(mut self, enable: bool) -> Self {
        self.enable_haptics = enable;
        self
    }

    pub fn dragged_opacity(&self) -> f64 {
        self.dragged_opacity
    }

    pub fn scale_effect(&self) -> f64 {
        self.scale_effect
    }
}
