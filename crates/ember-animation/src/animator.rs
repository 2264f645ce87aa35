//! Animator parameter store and the sink trait gameplay code writes to

use crate::command::{AnimTrigger, AnimationCommand, MotionState};

/// Receiver of animation commands. The host's animation system implements this.
pub trait AnimationSink {
    fn send(&mut self, command: AnimationCommand);
}

/// Recording sink: keeps every command in order
impl AnimationSink for Vec<AnimationCommand> {
    fn send(&mut self, command: AnimationCommand) {
        self.push(command);
    }
}

/// Current animator parameters plus the triggers not yet consumed by playback.
///
/// Continuous parameters hold the last written value. Triggers queue up until
/// the playback side calls [`Animator::take_triggers`].
#[derive(Debug, Clone, Default)]
pub struct Animator {
    pub air_speed_y: f32,
    pub anim_state: MotionState,
    pub grounded: bool,
    pub idle_block: bool,
    pending_triggers: Vec<AnimTrigger>,
    /// Total commands received since creation
    command_count: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the queued one-shot triggers in the order they fired
    pub fn take_triggers(&mut self) -> Vec<AnimTrigger> {
        std::mem::take(&mut self.pending_triggers)
    }

    /// Peek at queued triggers without consuming them
    pub fn pending_triggers(&self) -> &[AnimTrigger] {
        &self.pending_triggers
    }

    pub fn command_count(&self) -> u64 {
        self.command_count
    }
}

impl AnimationSink for Animator {
    fn send(&mut self, command: AnimationCommand) {
        self.command_count += 1;
        match command {
            AnimationCommand::AirSpeedY(v) => self.air_speed_y = v,
            AnimationCommand::AnimState(state) => self.anim_state = state,
            AnimationCommand::Grounded(g) => self.grounded = g,
            AnimationCommand::IdleBlock(b) => self.idle_block = b,
            AnimationCommand::Trigger(trigger) => {
                log::trace!("animation trigger {}", trigger.name());
                self.pending_triggers.push(trigger);
            }
        }
    }
}
