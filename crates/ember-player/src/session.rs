//! Headless host wiring a rapier world, clock and input to one controller

use crate::controller::PlayerController;
use crate::level::LevelFile;
use crate::script::ScriptPlayer;
use ember_core::Result;
use ember_physics::PhysicsWorld;
use ember_runtime::{GameClock, InputState, RuntimeSystem};

pub struct PlayerSession {
    pub physics: PhysicsWorld,
    pub clock: GameClock,
    pub input: InputState,
    pub controller: PlayerController<PhysicsWorld>,
}

impl PlayerSession {
    /// Build the world described by `level` and attach a controller to its player body
    pub fn from_level(level: &LevelFile) -> Result<Self> {
        level.validate()?;

        let mut physics = PhysicsWorld::with_gravity(level.world.gravity);
        for ground in &level.ground {
            physics.spawn_ground(ground)?;
        }
        let body = physics.spawn_character(&level.player)?;

        let mut controller =
            PlayerController::with_animator(level.controller.clone(), body, &physics)?;
        controller.initialize(&mut physics)?;

        log::info!(
            "session ready: {} ground platforms, {} Hz fixed step",
            level.ground.len(),
            level.world.fixed_hz
        );

        Ok(Self {
            physics,
            clock: GameClock::with_fixed_timestep(level.world.fixed_hz),
            input: InputState::with_config(level.input.clone()),
            controller,
        })
    }

    /// Current game time in seconds
    pub fn now(&self) -> f64 {
        self.clock.total_time
    }

    /// Run one frame of `elapsed` seconds
    pub fn tick(&mut self, elapsed: f64) -> Result<()> {
        self.clock.advance(elapsed);
        let now = self.clock.total_time;

        // Input callbacks run before any physics in the frame
        for event in self.input.drain_events() {
            self.controller.handle_event(&event, &mut self.physics, now);
        }

        // Fixed-timestep physics loop
        while self.clock.should_fixed_update() {
            let dt = self.clock.fixed_timestep;
            self.controller.fixed_update(&mut self.physics, dt)?;
            self.physics.step(dt as f32);
            self.clock.consume_fixed_step();
        }

        self.controller
            .update(&mut self.physics, self.clock.delta_time)
    }

    /// Feed the script steps due at the current time, then run one frame
    pub fn tick_scripted(&mut self, script: &mut ScriptPlayer, elapsed: f64) -> Result<()> {
        script.feed(self.clock.total_time, &mut self.input);
        self.tick(elapsed)
    }

    /// Run frames of `frame_time` until `seconds` of game time have passed
    pub fn run_for(&mut self, seconds: f64, frame_time: f64) -> Result<()> {
        let end = self.clock.total_time + seconds;
        while self.clock.total_time + 1e-9 < end {
            self.tick(frame_time)?;
        }
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.controller.shutdown()
    }
}
