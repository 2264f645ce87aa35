//! Runtime system trait

use ember_core::Result;

/// A system that can be ticked by the host loop
///
/// `C` is whatever host context the system needs on each tick (for gameplay
/// components, the physics backend). Fixed update runs at a constant rate,
/// while update runs once per rendered frame.
pub trait RuntimeSystem<C> {
    /// Called once before the first tick
    fn initialize(&mut self, ctx: &mut C) -> Result<()>;

    /// Called at a fixed rate (e.g. 50Hz) for deterministic simulation
    fn fixed_update(&mut self, ctx: &mut C, dt: f64) -> Result<()>;

    /// Called once per frame for variable-rate logic
    fn update(&mut self, ctx: &mut C, dt: f64) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
