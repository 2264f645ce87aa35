//! Stub physics backend for controller tests: bodies are points with a
//! collider size, ground is horizontal line segments on layers.

use ember_core::{LayerMask, Vec2};
use ember_physics::{PhysicsBackend, RayHit};

pub struct MockBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Option<Vec2>,
    pub inv_mass: f32,
}

pub struct Surface {
    pub y: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub layer: LayerMask,
}

#[derive(Default)]
pub struct MockPhysics {
    pub bodies: Vec<MockBody>,
    pub surfaces: Vec<Surface>,
}

impl MockPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, position: Vec2, size: Vec2) -> usize {
        self.bodies.push(MockBody {
            position,
            velocity: Vec2::ZERO,
            size: Some(size),
            inv_mass: 1.0,
        });
        self.bodies.len() - 1
    }

    pub fn add_surface(&mut self, y: f32, min_x: f32, max_x: f32, layer: LayerMask) {
        self.surfaces.push(Surface {
            y,
            min_x,
            max_x,
            layer,
        });
    }
}

impl PhysicsBackend for MockPhysics {
    type Body = usize;

    fn body_position(&self, body: usize) -> Option<Vec2> {
        self.bodies.get(body).map(|b| b.position)
    }

    fn body_velocity(&self, body: usize) -> Option<Vec2> {
        self.bodies.get(body).map(|b| b.velocity)
    }

    fn set_body_velocity(&mut self, body: usize, velocity: Vec2) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.velocity = velocity;
        }
    }

    fn apply_impulse(&mut self, body: usize, impulse: Vec2) {
        if let Some(b) = self.bodies.get_mut(body) {
            b.velocity = b.velocity + impulse * b.inv_mass;
        }
    }

    fn collider_size(&self, body: usize) -> Option<Vec2> {
        self.bodies.get(body).and_then(|b| b.size)
    }

    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
        _exclude: Option<usize>,
    ) -> Option<RayHit> {
        // Only straight-down rays are modelled
        assert_eq!(direction, Vec2::DOWN);
        self.surfaces
            .iter()
            .filter(|s| s.layer.intersects(mask))
            .filter(|s| origin.x >= s.min_x && origin.x <= s.max_x)
            .map(|s| origin.y - s.y)
            .filter(|d| *d >= 0.0 && *d <= max_distance)
            .fold(None, |best: Option<f32>, d| Some(best.map_or(d, |b| b.min(d))))
            .map(|distance| RayHit {
                distance,
                point: Vec2::new(origin.x, origin.y - distance),
            })
    }
}
