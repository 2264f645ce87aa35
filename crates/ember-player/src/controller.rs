//! Side-on player character controller

use crate::combo::{ComboStep, ComboTimer};
use crate::config::ControllerConfig;
use crate::ground::GroundProbe;
use ember_animation::{AnimTrigger, AnimationCommand, AnimationSink, Animator, MotionState, Sprite};
use ember_core::{EmberError, Result, Vec2};
use ember_physics::PhysicsBackend;
use ember_runtime::{GameEvent, RuntimeSystem};

/// Axis carrying horizontal movement input
pub const MOVEMENT_AXIS: &str = "movement";
pub const JUMP_ACTION: &str = "jump";
pub const ATTACK_ACTION: &str = "attack";
pub const BLOCK_ACTION: &str = "block";

/// Player character controller.
///
/// Host handles (the physics body and its collider size) are resolved once in
/// [`PlayerController::new`]. After that the host calls the input callbacks
/// as events arrive, [`sync_velocity`](Self::sync_velocity) every fixed step
/// and [`sync_animation`](Self::sync_animation) every rendered frame.
pub struct PlayerController<P: PhysicsBackend, A: AnimationSink = Animator> {
    config: ControllerConfig,
    body: P::Body,
    ground: GroundProbe,
    combo: ComboTimer,

    /// Latest horizontal input in [-1, 1]
    horizontal_axis: f32,
    blocking: bool,

    animator: A,
    sprite: Sprite,
}

impl<P: PhysicsBackend> PlayerController<P, Animator> {
    /// Controller writing to a fresh `Animator`
    pub fn with_animator(config: ControllerConfig, body: P::Body, physics: &P) -> Result<Self> {
        Self::new(config, body, physics, Animator::new())
    }
}

impl<P: PhysicsBackend, A: AnimationSink> PlayerController<P, A> {
    /// Attach a controller to `body`.
    ///
    /// Fails if the configuration is invalid or the body has no collider.
    pub fn new(config: ControllerConfig, body: P::Body, physics: &P, animator: A) -> Result<Self> {
        config.validate()?;

        let size = physics.collider_size(body).ok_or_else(|| {
            EmberError::ComponentNotFound(format!("collider on player body {:?}", body))
        })?;
        let ground = GroundProbe::from_collider_size(size, config.ground_mask);
        let combo = ComboTimer::new(config.attack_min_delay, config.attack_max_delay);

        Ok(Self {
            config,
            body,
            ground,
            combo,
            horizontal_axis: 0.0,
            blocking: false,
            animator,
            sprite: Sprite::default(),
        })
    }

    // --- Input callbacks ---

    /// Latch the horizontal axis. Values are clamped to [-1, 1]; NaN reads as 0.
    pub fn on_movement(&mut self, axis: f32) {
        self.horizontal_axis = if axis.is_nan() { 0.0 } else { axis.clamp(-1.0, 1.0) };
    }

    /// Jump if grounded. Returns whether the jump happened.
    pub fn on_jump(&mut self, physics: &mut P) -> bool {
        if !self.is_grounded(physics) {
            return false;
        }

        physics.apply_impulse(self.body, Vec2::new(0.0, self.config.jump_power));
        self.animator.send(AnimationCommand::Trigger(AnimTrigger::Jump));
        log::debug!("jump (impulse {})", self.config.jump_power);
        true
    }

    /// Register an attack at game time `now`. Returns the combo step played,
    /// or `None` if the input came too soon after the last accepted attack.
    pub fn on_attack(&mut self, now: f64) -> Option<ComboStep> {
        let step = self.combo.register(now)?;
        if let Some(trigger) = AnimTrigger::attack(step.index()) {
            self.animator.send(AnimationCommand::Trigger(trigger));
        }
        log::debug!("attack {} at {:.3}s", step.index(), now);
        Some(step)
    }

    /// Toggle the blocking stance. Returns the new state.
    pub fn on_block(&mut self) -> bool {
        self.blocking = !self.blocking;
        if self.blocking {
            self.animator.send(AnimationCommand::Trigger(AnimTrigger::Block));
        }
        self.animator.send(AnimationCommand::IdleBlock(self.blocking));
        log::debug!("blocking: {}", self.blocking);
        self.blocking
    }

    /// Route a named input event to the matching callback. Unknown names and
    /// releases are ignored.
    pub fn handle_event(&mut self, event: &GameEvent, physics: &mut P, now: f64) {
        match event {
            GameEvent::AxisChanged { axis, value } if axis == MOVEMENT_AXIS => {
                self.on_movement(*value)
            }
            GameEvent::ActionPressed(action) => match action.as_str() {
                JUMP_ACTION => {
                    self.on_jump(physics);
                }
                ATTACK_ACTION => {
                    self.on_attack(now);
                }
                BLOCK_ACTION => {
                    self.on_block();
                }
                _ => {}
            },
            _ => {}
        }
    }

    // --- Per-tick sync ---

    /// Fixed step: horizontal velocity from the latched axis, vertical untouched
    pub fn sync_velocity(&mut self, physics: &mut P) {
        let Some(velocity) = physics.body_velocity(self.body) else {
            return;
        };
        let vx = self.horizontal_axis * self.config.horizontal_speed;
        physics.set_body_velocity(self.body, velocity.with_x(vx));
    }

    /// Render step: push vertical speed, motion state, facing and grounded flag
    pub fn sync_animation(&mut self, physics: &P) {
        let vy = physics.body_velocity(self.body).map(|v| v.y).unwrap_or(0.0);
        self.animator.send(AnimationCommand::AirSpeedY(vy));

        let state = if self.horizontal_axis != 0.0 {
            MotionState::Moving
        } else {
            MotionState::Idle
        };
        self.animator.send(AnimationCommand::AnimState(state));
        self.sprite.face(self.horizontal_axis);

        let grounded = self.is_grounded(physics);
        self.animator.send(AnimationCommand::Grounded(grounded));
    }

    // --- Queries ---

    pub fn is_grounded(&self, physics: &P) -> bool {
        self.ground.is_grounded(physics, self.body)
    }

    pub fn horizontal_axis(&self) -> f32 {
        self.horizontal_axis
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    pub fn combo(&self) -> &ComboTimer {
        &self.combo
    }

    pub fn ground_probe(&self) -> &GroundProbe {
        &self.ground
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body(&self) -> P::Body {
        self.body
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}

impl<P: PhysicsBackend, A: AnimationSink> RuntimeSystem<P> for PlayerController<P, A> {
    fn initialize(&mut self, physics: &mut P) -> Result<()> {
        log::info!(
            "player controller attached (probe {:.3}, grounded: {})",
            self.ground.distance,
            self.is_grounded(physics)
        );
        Ok(())
    }

    fn fixed_update(&mut self, physics: &mut P, _dt: f64) -> Result<()> {
        self.sync_velocity(physics);
        Ok(())
    }

    fn update(&mut self, physics: &mut P, _dt: f64) -> Result<()> {
        self.sync_animation(physics);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "player_controller"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockPhysics;
    use ember_core::LayerMask;

    const SIZE: Vec2 = Vec2::new(1.0, 2.0);

    /// Body at the origin standing on layer-0 ground
    fn grounded_setup() -> (MockPhysics, PlayerController<MockPhysics>) {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::ZERO, SIZE);
        physics.add_surface(-1.0, -10.0, 10.0, LayerMask::layer(0));
        let controller =
            PlayerController::with_animator(ControllerConfig::default(), body, &physics).unwrap();
        (physics, controller)
    }

    /// Body with nothing below it
    fn airborne_setup() -> (MockPhysics, PlayerController<MockPhysics>) {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::new(0.0, 5.0), SIZE);
        physics.add_surface(-1.0, -10.0, 10.0, LayerMask::layer(0));
        let controller =
            PlayerController::with_animator(ControllerConfig::default(), body, &physics).unwrap();
        (physics, controller)
    }

    #[test]
    fn test_missing_collider_is_rejected() {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::ZERO, SIZE);
        physics.bodies[body].size = None;

        let result = PlayerController::with_animator(ControllerConfig::default(), body, &physics);
        assert!(matches!(result, Err(EmberError::ComponentNotFound(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::ZERO, SIZE);
        let config = ControllerConfig {
            attack_min_delay: 1.0,
            attack_max_delay: 0.1,
            ..Default::default()
        };
        assert!(PlayerController::with_animator(config, body, &physics).is_err());
    }

    #[test]
    fn test_probe_distance_from_collider() {
        let (_, controller) = grounded_setup();
        assert!((controller.ground_probe().distance - 1.02).abs() < 1e-6);
    }

    #[test]
    fn test_grounded_jump_applies_impulse() {
        let (mut physics, mut controller) = grounded_setup();
        physics.bodies[0].velocity = Vec2::new(2.0, 0.0);

        assert!(controller.on_jump(&mut physics));
        assert_eq!(physics.bodies[0].velocity, Vec2::new(2.0, 25.0));
        assert_eq!(
            controller.animator_mut().take_triggers(),
            vec![AnimTrigger::Jump]
        );
    }

    #[test]
    fn test_airborne_jump_is_ignored() {
        let (mut physics, mut controller) = airborne_setup();
        physics.bodies[0].velocity = Vec2::new(1.0, -3.0);

        assert!(!controller.on_jump(&mut physics));
        assert_eq!(physics.bodies[0].velocity, Vec2::new(1.0, -3.0));
        assert!(controller.animator().pending_triggers().is_empty());
    }

    #[test]
    fn test_jump_ignores_non_ground_layers() {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::ZERO, SIZE);
        physics.add_surface(-1.0, -10.0, 10.0, LayerMask::layer(5));
        let mut controller =
            PlayerController::with_animator(ControllerConfig::default(), body, &physics).unwrap();

        assert!(!controller.on_jump(&mut physics));
        assert_eq!(physics.bodies[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn test_attack_sequence_fires_triggers() {
        let (_, mut controller) = grounded_setup();

        assert_eq!(controller.on_attack(0.0), Some(ComboStep::First));
        assert_eq!(controller.on_attack(0.3), Some(ComboStep::Second));
        assert_eq!(controller.on_attack(0.35), None);
        assert_eq!(controller.on_attack(1.0), Some(ComboStep::First));

        assert_eq!(
            controller.animator_mut().take_triggers(),
            vec![AnimTrigger::Attack1, AnimTrigger::Attack2, AnimTrigger::Attack1]
        );
        assert_eq!(controller.combo().last_attack_time(), Some(1.0));
    }

    #[test]
    fn test_combo_wraps_after_third() {
        let (_, mut controller) = grounded_setup();
        let steps: Vec<u8> = (0..6)
            .filter_map(|i| controller.on_attack(i as f64 * 0.3))
            .map(|s| s.index())
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_block_toggle() {
        let mut physics = MockPhysics::new();
        let body = physics.add_body(Vec2::ZERO, SIZE);
        let mut controller = PlayerController::new(
            ControllerConfig::default(),
            body,
            &physics,
            Vec::<AnimationCommand>::new(),
        )
        .unwrap();

        assert!(controller.on_block());
        assert!(!controller.on_block());
        assert!(!controller.is_blocking());

        assert_eq!(
            controller.animator(),
            &vec![
                AnimationCommand::Trigger(AnimTrigger::Block),
                AnimationCommand::IdleBlock(true),
                AnimationCommand::IdleBlock(false),
            ]
        );
    }

    #[test]
    fn test_velocity_sync_preserves_vertical() {
        let (mut physics, mut controller) = airborne_setup();
        physics.bodies[0].velocity = Vec2::new(0.0, -7.5);

        controller.on_movement(-0.5);
        controller.sync_velocity(&mut physics);
        assert_eq!(physics.bodies[0].velocity, Vec2::new(-2.5, -7.5));

        controller.on_movement(0.0);
        controller.sync_velocity(&mut physics);
        assert_eq!(physics.bodies[0].velocity, Vec2::new(0.0, -7.5));
    }

    #[test]
    fn test_movement_is_clamped() {
        let (_, mut controller) = grounded_setup();
        controller.on_movement(3.0);
        assert_eq!(controller.horizontal_axis(), 1.0);
        controller.on_movement(-2.0);
        assert_eq!(controller.horizontal_axis(), -1.0);
        controller.on_movement(f32::NAN);
        assert_eq!(controller.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_animation_sync() {
        let (mut physics, mut controller) = grounded_setup();
        physics.bodies[0].velocity = Vec2::new(0.0, 1.5);

        controller.on_movement(-1.0);
        controller.sync_animation(&physics);
        let animator = controller.animator();
        assert_eq!(animator.air_speed_y, 1.5);
        assert_eq!(animator.anim_state, MotionState::Moving);
        assert!(animator.grounded);
        assert!(controller.sprite().flip_x);

        // Idle keeps the last facing
        controller.on_movement(0.0);
        physics.bodies[0].position = Vec2::new(0.0, 4.0);
        controller.sync_animation(&physics);
        let animator = controller.animator();
        assert_eq!(animator.anim_state, MotionState::Idle);
        assert!(!animator.grounded);
        assert!(controller.sprite().flip_x);
    }

    #[test]
    fn test_handle_event_routing() {
        let (mut physics, mut controller) = grounded_setup();

        controller.handle_event(
            &GameEvent::AxisChanged {
                axis: MOVEMENT_AXIS.into(),
                value: 1.0,
            },
            &mut physics,
            0.0,
        );
        assert_eq!(controller.horizontal_axis(), 1.0);

        // Other axes do not touch movement
        controller.handle_event(
            &GameEvent::AxisChanged {
                axis: "look".into(),
                value: -1.0,
            },
            &mut physics,
            0.0,
        );
        assert_eq!(controller.horizontal_axis(), 1.0);

        controller.handle_event(&GameEvent::ActionPressed("attack".into()), &mut physics, 0.0);
        controller.handle_event(&GameEvent::ActionPressed("block".into()), &mut physics, 0.1);
        controller.handle_event(&GameEvent::ActionReleased("block".into()), &mut physics, 0.2);
        controller.handle_event(&GameEvent::ActionPressed("jump".into()), &mut physics, 0.2);
        controller.handle_event(&GameEvent::ActionPressed("dance".into()), &mut physics, 0.3);

        assert!(controller.is_blocking());
        assert_eq!(physics.bodies[0].velocity.y, 25.0);
        assert_eq!(
            controller.animator_mut().take_triggers(),
            vec![AnimTrigger::Attack1, AnimTrigger::Block, AnimTrigger::Jump]
        );
    }

    #[test]
    fn test_runtime_system_ticks() {
        let (mut physics, mut controller) = grounded_setup();
        assert_eq!(RuntimeSystem::<MockPhysics>::name(&controller), "player_controller");

        controller.initialize(&mut physics).unwrap();
        controller.on_movement(1.0);
        controller.fixed_update(&mut physics, 0.02).unwrap();
        assert_eq!(physics.bodies[0].velocity.x, 5.0);

        controller.update(&mut physics, 0.016).unwrap();
        assert_eq!(controller.animator().anim_state, MotionState::Moving);
        controller.shutdown().unwrap();
    }
}
