//! Ember Player - side-on player character controller
//!
//! The controller itself is host-driven: it owns no loop and reacts to input
//! events, fixed physics ticks and render ticks. `PlayerSession` is the host
//! used by the `ember-player` binary and the integration tests.
//!
//! - `PlayerController` - input latch, ground probe, combo timer, block toggle,
//!   velocity and animation sync
//! - `ControllerConfig` - tuning values, loadable from TOML
//! - `PlayerSession` - rapier world + clock + input wired to one controller
//! - `LevelFile` / `InputScript` - headless level and scripted input files

pub mod combo;
pub mod config;
pub mod controller;
pub mod ground;
pub mod level;
pub mod script;
mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use combo::{ComboStep, ComboTimer};
pub use config::ControllerConfig;
pub use controller::PlayerController;
pub use ground::{GroundProbe, GROUND_SKIN};
pub use level::{LevelFile, WorldSettings};
pub use script::{InputScript, ScriptPlayer, ScriptStep};
pub use session::PlayerSession;
