//! Planar vector and collision layer types

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const DOWN: Self = Self { x: 0.0, y: -1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }

    /// Same vector with the horizontal component replaced
    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Bitmask of collision layers. Bit `n` set means layer `n` is included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing only layer `index`. `index` must be below 32.
    pub const fn layer(index: u32) -> Self {
        debug_assert!(index < 32, "layer index out of range");
        Self(1 << (index & 31))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// True if the two masks share at least one layer
    pub fn intersects(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::layer(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_ops() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a.with_x(7.0), Vec2::new(7.0, 2.0));
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        let n = Vec2::new(3.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_layer_mask() {
        let ground = LayerMask::layer(0);
        let player = LayerMask::layer(3);
        assert_eq!(player.bits(), 8);
        assert!(!ground.intersects(player));
        assert!(LayerMask::ALL.intersects(player));
        assert!(LayerMask::NONE.is_empty());
        assert_eq!(LayerMask::default(), ground);
    }

    #[test]
    fn test_layer_mask_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            mask: LayerMask,
        }
        let holder: Holder = toml::from_str("mask = 5").unwrap();
        assert_eq!(holder.mask, LayerMask(5));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "layer index out of range")]
    fn test_layer_index_past_31_panics_in_debug() {
        let _ = LayerMask::layer(32);
    }
}
