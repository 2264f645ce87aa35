//! Ember Physics - Rapier 2D integration
//!
//! Provides the physics side of the character host:
//! - `PhysicsBackend` - the narrow surface gameplay components talk to
//!   (velocity, impulses, collider size, layer-filtered ray casts)
//! - `PhysicsWorld` - wraps the Rapier pipeline, body/collider sets and implements
//!   `PhysicsBackend` with `RigidBodyHandle` bodies
//! - `CharacterBodyDesc` / `GroundDesc` - serializable descriptors used to
//!   spawn the player body and static ground platforms

pub mod backend;
pub mod spawn;
pub mod world;

pub use backend::{PhysicsBackend, RayHit};
pub use rapier2d::prelude::RigidBodyHandle;
pub use spawn::{CharacterBodyDesc, GroundDesc};
pub use world::PhysicsWorld;
