//! Game clock with fixed-timestep accumulator

/// Longest frame the clock will accept; anything slower is clamped
const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks game time and provides a fixed-timestep accumulator for physics updates.
///
/// The clock never reads wall time itself; the host passes the elapsed time of
/// every frame to [`GameClock::advance`].
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Total elapsed game time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Fixed timestep interval (default: 1/50 second)
    pub fixed_timestep: f64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::with_fixed_timestep(50.0)
    }
}

impl GameClock {
    /// Create a new game clock with default 50Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed rate in Hz
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            fixed_timestep: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Advance the clock by one frame of `elapsed` seconds. Call once per frame.
    pub fn advance(&mut self, elapsed: f64) {
        // Negative or NaN frame times count as an empty frame
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

        self.delta_time = elapsed.min(MAX_FRAME_TIME);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }

    /// Get the interpolation alpha for rendering between fixed steps
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulator / self.fixed_timestep
    }
}
