//! Input state management and named event dispatch

use crate::event::GameEvent;
use crate::event_bus::EventBus;
use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use winit::keyboard::KeyCode;

/// A one-dimensional axis driven by two opposing actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub name: String,
    /// Action that pushes the axis to -1.0
    pub negative: String,
    /// Action that pushes the axis to +1.0
    pub positive: String,
}

/// Action and axis bindings, loadable from an `[input]` TOML table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Action name -> keys bound to it
    pub actions: HashMap<String, Vec<KeyCode>>,
    /// Action name -> mouse button indices bound to it
    pub mouse_buttons: HashMap<String, Vec<u32>>,
    pub axes: Vec<AxisConfig>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut actions = HashMap::new();
        actions.insert("move_left".into(), vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
        actions.insert("move_right".into(), vec![KeyCode::KeyD, KeyCode::ArrowRight]);
        actions.insert("jump".into(), vec![KeyCode::Space, KeyCode::KeyW]);
        actions.insert("attack".into(), vec![KeyCode::KeyJ]);
        actions.insert("block".into(), vec![KeyCode::KeyK]);

        let mut mouse_buttons = HashMap::new();
        mouse_buttons.insert("attack".into(), vec![0]); // Left mouse button
        mouse_buttons.insert("block".into(), vec![1]); // Right mouse button

        Self {
            actions,
            mouse_buttons,
            axes: vec![AxisConfig {
                name: "movement".into(),
                negative: "move_left".into(),
                positive: "move_right".into(),
            }],
        }
    }
}

impl InputConfig {
    /// Every axis must reference actions that have at least one binding
    pub fn validate(&self) -> Result<()> {
        for axis in &self.axes {
            for action in [&axis.negative, &axis.positive] {
                if !self.actions.contains_key(action) && !self.mouse_buttons.contains_key(action) {
                    return Err(EmberError::InputError(format!(
                        "axis '{}' references unbound action '{}'",
                        axis.name, action
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Tracks held keys and mouse buttons and turns transitions into `GameEvent`s.
///
/// Consumers never poll keys; they drain the events produced since the last
/// drain and react to them by name.
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Mouse buttons currently held down
    mouse_buttons_down: HashSet<u32>,

    config: InputConfig,
    /// Last dispatched value per axis
    axis_values: HashMap<String, f32>,
    /// Events waiting to be drained
    pending: EventBus,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        let axis_values = config.axes.iter().map(|a| (a.name.clone(), 0.0)).collect();
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            config,
            axis_values,
            pending: EventBus::new(),
        }
    }

    /// Bind an action to one or more keys, replacing previous key bindings
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.config.actions.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        let before = self.pressed_actions();
        self.keys_down.insert(key);
        self.dispatch_changes(before);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        let before = self.pressed_actions();
        self.keys_down.remove(&key);
        self.dispatch_changes(before);
    }

    /// Process mouse button press
    pub fn process_mouse_button_down(&mut self, button: u32) {
        let before = self.pressed_actions();
        self.mouse_buttons_down.insert(button);
        self.dispatch_changes(before);
    }

    /// Process mouse button release
    pub fn process_mouse_button_up(&mut self, button: u32) {
        let before = self.pressed_actions();
        self.mouse_buttons_down.remove(&button);
        self.dispatch_changes(before);
    }

    /// Take every event produced since the last drain, in the order they happened
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.pending.drain()
    }

    /// Is an action currently held? (any bound key or mouse button is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        let key_match = self
            .config
            .actions
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false);
        let mouse_match = self
            .config
            .mouse_buttons
            .get(action)
            .map(|btns| btns.iter().any(|b| self.mouse_buttons_down.contains(b)))
            .unwrap_or(false);
        key_match || mouse_match
    }

    /// Current value of an axis, 0.0 for unknown axes
    pub fn axis(&self, name: &str) -> f32 {
        self.axis_values.get(name).copied().unwrap_or(0.0)
    }

    fn pressed_actions(&self) -> BTreeSet<String> {
        self.config
            .actions
            .keys()
            .chain(self.config.mouse_buttons.keys())
            .filter(|name| self.is_action_pressed(name))
            .cloned()
            .collect()
    }

    fn dispatch_changes(&mut self, before: BTreeSet<String>) {
        let after = self.pressed_actions();

        for action in after.difference(&before) {
            log::trace!("action pressed: {}", action);
            self.pending.push(GameEvent::ActionPressed(action.clone()));
        }
        for action in before.difference(&after) {
            log::trace!("action released: {}", action);
            self.pending.push(GameEvent::ActionReleased(action.clone()));
        }

        for i in 0..self.config.axes.len() {
            let axis = &self.config.axes[i];
            let mut value = 0.0;
            if self.is_action_pressed(&axis.positive) {
                value += 1.0;
            }
            if self.is_action_pressed(&axis.negative) {
                value -= 1.0;
            }

            let name = axis.name.clone();
            let previous = self.axis_values.insert(name.clone(), value);
            if previous != Some(value) {
                self.pending.push(GameEvent::AxisChanged { axis: name, value });
            }
        }
    }
}
