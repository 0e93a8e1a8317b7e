//! EasyDrag library exports for testing

use clap::ValueEnum;

use crate::core::DragAnimation;

pub mod core;
pub mod shelf;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Animation presets selectable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AnimationArg {
    #[default]
    Smooth,
    Bouncy,
    Spring,
    None,
}

impl From<AnimationArg> for DragAnimation {
    fn from(arg: AnimationArg) -> Self {
        match arg {
            AnimationArg::Smooth => DragAnimation::Smooth,
            AnimationArg::Bouncy => DragAnimation::Bouncy,
            AnimationArg::Spring => DragAnimation::Spring,
            AnimationArg::None => DragAnimation::None,
        }
    }
}
