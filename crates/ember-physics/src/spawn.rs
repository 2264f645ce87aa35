//! Descriptors for spawning the player body and static ground into Rapier

use crate::world::{layer_groups, PhysicsWorld};
use ember_core::{EmberError, LayerMask, Result, Vec2};
use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

/// A dynamic, rotation-locked capsule body for a side-on character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterBodyDesc {
    pub position: Vec2,
    /// Full capsule width and height
    pub size: Vec2,
    pub mass: f32,
    pub friction: f32,
    /// Layers the character itself lives on
    pub layer: LayerMask,
    pub gravity_scale: f32,
}

impl Default for CharacterBodyDesc {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(0.8, 1.6),
            mass: 1.0,
            friction: 0.0,
            layer: LayerMask::layer(1),
            gravity_scale: 1.0,
        }
    }
}

/// A static box platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundDesc {
    pub position: Vec2,
    pub half_extents: Vec2,
    #[serde(default)]
    pub layer: LayerMask,
    #[serde(default = "default_ground_friction")]
    pub friction: f32,
}

fn default_ground_friction() -> f32 {
    0.5
}

impl PhysicsWorld {
    /// Spawn the character body with its capsule collider and return the body handle
    pub fn spawn_character(&mut self, desc: &CharacterBodyDesc) -> Result<RigidBodyHandle> {
        if !(desc.size.x > 0.0 && desc.size.y > 0.0) {
            return Err(EmberError::ValidationError(format!(
                "character size must be positive, got {:?}",
                desc.size
            )));
        }
        if !(desc.mass > 0.0) {
            return Err(EmberError::ValidationError(format!(
                "character mass must be positive, got {}",
                desc.mass
            )));
        }

        let body = RigidBodyBuilder::dynamic()
            .translation(vector![desc.position.x, desc.position.y])
            .lock_rotations()
            .additional_mass(desc.mass)
            .gravity_scale(desc.gravity_scale)
            .ccd_enabled(true)
            .build();
        let handle = self.insert_rigid_body(body);

        // Mass comes from the descriptor alone, so the shape is massless
        let radius = desc.size.x * 0.5;
        let half_height = (desc.size.y * 0.5 - radius).max(0.0);
        let collider = ColliderBuilder::capsule_y(half_height, radius)
            .density(0.0)
            .friction(desc.friction)
            .collision_groups(layer_groups(desc.layer))
            .build();
        self.insert_collider_with_parent(collider, handle);
        self.refresh_queries();

        log::debug!(
            "spawned character at ({}, {}) size {}x{}",
            desc.position.x,
            desc.position.y,
            desc.size.x,
            desc.size.y
        );
        Ok(handle)
    }

    /// Spawn a fixed ground platform
    pub fn spawn_ground(&mut self, desc: &GroundDesc) -> Result<ColliderHandle> {
        if !(desc.half_extents.x > 0.0 && desc.half_extents.y > 0.0) {
            return Err(EmberError::ValidationError(format!(
                "ground half_extents must be positive, got {:?}",
                desc.half_extents
            )));
        }

        let collider = ColliderBuilder::cuboid(desc.half_extents.x, desc.half_extents.y)
            .translation(vector![desc.position.x, desc.position.y])
            .friction(desc.friction)
            .collision_groups(layer_groups(desc.layer))
            .build();
        let handle = self.insert_collider(collider);
        self.refresh_queries();
        Ok(handle)
    }
}
