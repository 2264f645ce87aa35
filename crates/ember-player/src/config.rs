//! Controller tuning values

use ember_core::{EmberError, LayerMask, Result};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for speeds and impulses
const MAX_TUNING: f64 = 10_000.0;
/// Upper bound accepted for combo delays, in seconds
const MAX_DELAY: f64 = 60.0;

/// Tuning for a `PlayerController`, set before spawn and fixed afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed at full axis deflection (units/second)
    pub horizontal_speed: f32,
    /// Upward impulse applied on a grounded jump
    pub jump_power: f32,
    /// Attacks closer than this to the last accepted one are dropped
    pub attack_min_delay: f64,
    /// Attacks within this of the last accepted one continue the combo
    pub attack_max_delay: f64,
    /// Layers the ground probe treats as ground
    pub ground_mask: LayerMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: 5.0,
            jump_power: 25.0,
            attack_min_delay: 0.25,
            attack_max_delay: 0.5,
            ground_mask: LayerMask::layer(0),
        }
    }
}

impl ControllerConfig {
    /// Parse a `ControllerConfig` from a TOML document and validate it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ControllerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        EmberError::check_range("horizontal_speed", self.horizontal_speed as f64, 0.0, MAX_TUNING)?;
        EmberError::check_range("jump_power", self.jump_power as f64, 0.0, MAX_TUNING)?;
        EmberError::check_range("attack_min_delay", self.attack_min_delay, 0.0, MAX_DELAY)?;
        EmberError::check_range("attack_max_delay", self.attack_max_delay, 0.0, MAX_DELAY)?;

        if self.attack_min_delay > self.attack_max_delay {
            return Err(EmberError::ValidationError(format!(
                "attack_min_delay ({}) is larger than attack_max_delay ({})",
                self.attack_min_delay, self.attack_max_delay
            )));
        }

        if self.ground_mask.is_empty() {
            log::warn!("ground_mask is empty; the character will never be grounded");
        }

        Ok(())
    }
}
