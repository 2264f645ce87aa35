//! Ember Core - Foundational types for the Ember 2D character stack
//!
//! This crate provides the types every other Ember crate depends on:
//! - `Vec2` - planar vectors for positions, velocities and impulses
//! - `LayerMask` - collision layer bitmask used to filter physics queries
//! - Error types and Result alias

mod error;
mod types;

pub use error::{EmberError, Result};
pub use types::{LayerMask, Vec2};
