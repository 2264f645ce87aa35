//! Physics surface consumed by gameplay components

use ember_core::{LayerMask, Vec2};

/// Result of a successful ray cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    pub point: Vec2,
}

/// The operations a character component needs from the host physics engine.
///
/// The engine owns gravity integration and the body storage; a component only
/// keeps a `Body` handle resolved once at construction. Calls on a handle that
/// no longer exists read as `None` and writes are dropped.
pub trait PhysicsBackend {
    type Body: Copy + Eq + std::fmt::Debug;

    fn body_position(&self, body: Self::Body) -> Option<Vec2>;

    fn body_velocity(&self, body: Self::Body) -> Option<Vec2>;

    fn set_body_velocity(&mut self, body: Self::Body, velocity: Vec2);

    /// Apply an instantaneous impulse (velocity change scaled by inverse mass)
    fn apply_impulse(&mut self, body: Self::Body, impulse: Vec2);

    /// Full width/height of the first collider attached to `body`
    fn collider_size(&self, body: Self::Body) -> Option<Vec2>;

    /// Cast a ray against colliders whose layer intersects `mask`.
    ///
    /// `direction` need not be normalized. Colliders attached to `exclude`
    /// are skipped.
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
        exclude: Option<Self::Body>,
    ) -> Option<RayHit>;
}
