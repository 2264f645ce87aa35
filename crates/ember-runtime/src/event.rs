//! Events produced by the input layer

/// An input event dispatched by name to gameplay components
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A bound action went from released to pressed
    ActionPressed(String),
    /// A bound action went from pressed to released
    ActionReleased(String),
    /// An axis changed its value (range -1.0..=1.0)
    AxisChanged { axis: String, value: f32 },
}

impl GameEvent {
    /// Name of the action or axis this event refers to
    pub fn name(&self) -> &str {
        match self {
            GameEvent::ActionPressed(name) | GameEvent::ActionReleased(name) => name,
            GameEvent::AxisChanged { axis, .. } => axis,
        }
    }
}
