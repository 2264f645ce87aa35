//! Ember Runtime - Host loop infrastructure
//!
//! Provides the building blocks a host uses to drive gameplay components:
//! - `GameClock` - fixed-timestep accumulator fed with explicit frame times
//! - `InputState` - key and mouse tracking that dispatches named action/axis events
//! - `GameEvent` / `EventBus` - typed event queue between input and consumers
//! - `RuntimeSystem` - trait for systems ticked by the host loop

mod clock;
mod event;
mod event_bus;
mod input;
mod system;

pub use clock::GameClock;
pub use event::GameEvent;
pub use event_bus::EventBus;
pub use input::{AxisConfig, InputConfig, InputState};
pub use system::RuntimeSystem;
