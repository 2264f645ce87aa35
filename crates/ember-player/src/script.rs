//! Scripted input timelines for headless runs

use ember_core::{EmberError, Result};
use ember_runtime::InputState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use winit::keyboard::KeyCode;

/// One timed input change. Any combination of fields may be set; they are
/// applied in the order press, release, click, unclick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Game time in seconds at which the step is applied
    pub at: f64,
    pub press: Option<KeyCode>,
    pub release: Option<KeyCode>,
    /// Mouse button pressed
    pub click: Option<u32>,
    /// Mouse button released
    pub unclick: Option<u32>,
}

impl ScriptStep {
    fn is_empty(&self) -> bool {
        self.press.is_none() && self.release.is_none() && self.click.is_none() && self.unclick.is_none()
    }

    fn apply(&self, input: &mut InputState) {
        if let Some(key) = self.press {
            input.process_key_down(key);
        }
        if let Some(key) = self.release {
            input.process_key_up(key);
        }
        if let Some(button) = self.click {
            input.process_mouse_button_down(button);
        }
        if let Some(button) = self.unclick {
            input.process_mouse_button_up(button);
        }
    }
}

/// A list of `[[step]]` entries, sorted by time after loading
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub step: Vec<ScriptStep>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut script: InputScript = toml::from_str(source)?;
        for step in &script.step {
            if !(step.at.is_finite() && step.at >= 0.0) {
                return Err(EmberError::InputError(format!(
                    "script step time must be a non-negative number, got {}",
                    step.at
                )));
            }
            if step.is_empty() {
                return Err(EmberError::InputError(format!(
                    "script step at {}s has no input",
                    step.at
                )));
            }
        }
        // Stable sort keeps file order for steps sharing a timestamp
        script.step.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(script)
    }

    /// Time of the last step, 0.0 for an empty script
    pub fn duration(&self) -> f64 {
        self.step.last().map(|s| s.at).unwrap_or(0.0)
    }
}

/// Plays an `InputScript` into an `InputState` as game time advances
pub struct ScriptPlayer {
    script: InputScript,
    cursor: usize,
}

impl ScriptPlayer {
    pub fn new(script: InputScript) -> Self {
        Self { script, cursor: 0 }
    }

    /// Apply every not-yet-played step with `at <= time`. Returns how many were applied.
    pub fn feed(&mut self, time: f64, input: &mut InputState) -> usize {
        let start = self.cursor;
        while let Some(step) = self.script.step.get(self.cursor) {
            if step.at > time {
                break;
            }
            step.apply(input);
            self.cursor += 1;
        }
        self.cursor - start
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.step.len()
    }
}
