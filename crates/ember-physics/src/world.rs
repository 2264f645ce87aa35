//! Physics world wrapping Rapier 2D

use crate::backend::{PhysicsBackend, RayHit};
use ember_core::{LayerMask, Vec2};
use rapier2d::prelude::*;

/// Wraps Rapier's physics pipeline and body/collider sets
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world with standard gravity
    pub fn new() -> Self {
        Self::with_gravity(Vec2::new(0.0, -9.81))
    }

    pub fn with_gravity(gravity: Vec2) -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![gravity.x, gravity.y],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Step the physics simulation by dt seconds
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Rebuild the query acceleration structure after inserting colliders
    /// outside of a step, so ray casts see them immediately
    pub fn refresh_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Insert a rigid body and return its handle
    pub fn insert_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Insert a collider attached to a rigid body
    pub fn insert_collider_with_parent(
        &mut self,
        collider: Collider,
        parent: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Insert a free-standing (static) collider
    pub fn insert_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Interaction groups for an object living on `layers` that collides with everything
pub(crate) fn layer_groups(layers: LayerMask) -> InteractionGroups {
    InteractionGroups::new(Group::from_bits_truncate(layers.bits()), Group::ALL)
}

impl PhysicsBackend for PhysicsWorld {
    type Body = RigidBodyHandle;

    fn body_position(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.get_rigid_body(body)
            .map(|b| Vec2::new(b.translation().x, b.translation().y))
    }

    fn body_velocity(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.get_rigid_body(body)
            .map(|b| Vec2::new(b.linvel().x, b.linvel().y))
    }

    fn set_body_velocity(&mut self, body: RigidBodyHandle, velocity: Vec2) {
        if let Some(b) = self.get_rigid_body_mut(body) {
            b.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vec2) {
        if let Some(b) = self.get_rigid_body_mut(body) {
            b.apply_impulse(vector![impulse.x, impulse.y], true);
        }
    }

    fn collider_size(&self, body: RigidBodyHandle) -> Option<Vec2> {
        let collider_handle = *self.get_rigid_body(body)?.colliders().first()?;
        let collider = self.collider_set.get(collider_handle)?;
        let extents = collider.shape().compute_local_aabb().extents();
        Some(Vec2::new(extents.x, extents.y))
    }

    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RayHit> {
        let dir = direction.normalized();
        if dir == Vec2::ZERO || mask.is_empty() {
            return None;
        }

        // Only colliders whose membership intersects the mask pass
        let mut filter = QueryFilter::default().groups(InteractionGroups::new(
            Group::ALL,
            Group::from_bits_truncate(mask.bits()),
        ));
        if let Some(body) = exclude {
            filter = filter.exclude_rigid_body(body);
        }

        let ray = Ray::new(point![origin.x, origin.y], vector![dir.x, dir.y]);
        let (_, toi) = self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_distance,
            true,
            filter,
        )?;

        let hit = ray.point_at(toi);
        Some(RayHit {
            distance: toi,
            point: Vec2::new(hit.x, hit.y),
        })
    }
}
