//! Downward ground probe

use ember_core::{LayerMask, Vec2};
use ember_physics::PhysicsBackend;

/// Extra reach below the collider's bottom edge
pub const GROUND_SKIN: f32 = 0.02;

/// A single downward ray from the character's center, just longer than half
/// its collider height, filtered to ground layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    /// Ray length
    pub distance: f32,
    pub mask: LayerMask,
}

impl GroundProbe {
    pub fn from_collider_size(size: Vec2, mask: LayerMask) -> Self {
        Self {
            distance: size.y * 0.5 + GROUND_SKIN,
            mask,
        }
    }

    /// True iff a ground-layer surface lies within `distance` straight below `body`
    pub fn is_grounded<P: PhysicsBackend>(&self, physics: &P, body: P::Body) -> bool {
        let Some(origin) = physics.body_position(body) else {
            return false;
        };
        physics
            .cast_ray(origin, Vec2::DOWN, self.distance, self.mask, Some(body))
            .is_some()
    }
}
