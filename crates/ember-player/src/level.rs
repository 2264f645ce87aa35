//! Headless level files

use crate::config::ControllerConfig;
use ember_core::{EmberError, Result, Vec2};
use ember_physics::{CharacterBodyDesc, GroundDesc};
use ember_runtime::InputConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub gravity: Vec2,
    /// Fixed physics rate in Hz
    pub fixed_hz: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            fixed_hz: 50.0,
        }
    }
}

/// A level: world settings, the player body and controller tuning, ground
/// platforms and optional input bindings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelFile {
    pub world: WorldSettings,
    pub player: CharacterBodyDesc,
    pub controller: ControllerConfig,
    pub ground: Vec<GroundDesc>,
    pub input: InputConfig,
}

impl LevelFile {
    /// Load and validate a level from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let level: LevelFile = toml::from_str(source)?;
        level.validate()?;
        Ok(level)
    }

    pub fn validate(&self) -> Result<()> {
        EmberError::check_range("world.fixed_hz", self.world.fixed_hz, 1.0, 1000.0)?;
        self.controller.validate()?;
        self.input.validate()?;

        if self.ground.is_empty() {
            log::warn!("level has no ground platforms");
        } else if !self
            .ground
            .iter()
            .any(|g| g.layer.intersects(self.controller.ground_mask))
        {
            log::warn!("no ground platform is on a layer in controller.ground_mask");
        }
        Ok(())
    }
}
