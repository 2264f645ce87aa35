//! Typed animation parameters and triggers

/// One-shot animation signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Jump,
    Attack1,
    Attack2,
    Attack3,
    Block,
}

impl AnimTrigger {
    /// Trigger for combo step `index` (1..=3)
    pub fn attack(index: u8) -> Option<Self> {
        match index {
            1 => Some(AnimTrigger::Attack1),
            2 => Some(AnimTrigger::Attack2),
            3 => Some(AnimTrigger::Attack3),
            _ => None,
        }
    }

    /// Host-side parameter name
    pub fn name(&self) -> &'static str {
        match self {
            AnimTrigger::Jump => "Jump",
            AnimTrigger::Attack1 => "Attack1",
            AnimTrigger::Attack2 => "Attack2",
            AnimTrigger::Attack3 => "Attack3",
            AnimTrigger::Block => "Block",
        }
    }
}

/// Locomotion state pushed as an integer parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
}

impl MotionState {
    pub fn as_int(&self) -> i32 {
        match self {
            MotionState::Idle => 0,
            MotionState::Moving => 1,
        }
    }
}

/// A single write to the animation system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    /// Vertical speed, drives rise/fall blending
    AirSpeedY(f32),
    AnimState(MotionState),
    Grounded(bool),
    /// Continuous guard pose flag
    IdleBlock(bool),
    Trigger(AnimTrigger),
}

impl AnimationCommand {
    /// Host-side parameter name this command writes
    pub fn parameter(&self) -> &'static str {
        match self {
            AnimationCommand::AirSpeedY(_) => "AirSpeedY",
            AnimationCommand::AnimState(_) => "AnimState",
            AnimationCommand::Grounded(_) => "Grounded",
            AnimationCommand::IdleBlock(_) => "IdleBlock",
            AnimationCommand::Trigger(trigger) => trigger.name(),
        }
    }
}
