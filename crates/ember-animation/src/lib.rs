//! Animation boundary for Ember characters
//!
//! Gameplay code never touches clips or blend trees. It sends typed
//! [`AnimationCommand`]s to an [`AnimationSink`]; the host maps them onto its
//! own parameter names (see [`AnimationCommand::parameter`]).
//!
//! - `AnimationCommand`, `AnimTrigger`, `MotionState` - the command vocabulary
//! - `Animator` - parameter store with a one-shot trigger queue
//! - `Sprite` - horizontal flip flag of the visual representation

pub mod animator;
pub mod command;
pub mod sprite;

pub use animator::{AnimationSink, Animator};
pub use command::{AnimTrigger, AnimationCommand, MotionState};
pub use sprite::Sprite;
