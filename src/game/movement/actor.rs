// Rapier-backed implementation of the movement capability traits

use glam::Vec2;
use rapier2d::prelude::{nalgebra, vector, InteractionGroups, LockedAxes, QueryFilter};
use thiserror::Error;

use super::backend::{CollisionQuery, LayerFilter, PhysicsBody};
use crate::engine::physics::{ColliderHandle, CollisionLayer, PhysicsWorld, RigidBodyHandle};

/// A missing collaborator is a precondition violation: the controller must
/// refuse to tick rather than silently no-op and corrupt later physics state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("rigid body handle does not resolve to a body in this world")]
    MissingBody,
    #[error("collider handle does not resolve to a collider in this world")]
    MissingCollider,
}

/// Borrowed view of one character's body and collider inside a
/// `PhysicsWorld`, exposing exactly the capabilities the movement
/// controller needs.
pub struct PhysicsActor<'a> {
    world: &'a mut PhysicsWorld,
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

impl<'a> PhysicsActor<'a> {
    /// Validate both handles up front. While the actor lives it exclusively
    /// borrows the world, so neither can be invalidated mid-tick.
    pub fn new(
        world: &'a mut PhysicsWorld,
        body: RigidBodyHandle,
        collider: ColliderHandle,
    ) -> Result<Self, ControllerError> {
        if world.get_rigid_body(body).is_none() {
            return Err(ControllerError::MissingBody);
        }
        if world.get_collider(collider).is_none() {
            return Err(ControllerError::MissingCollider);
        }
        Ok(Self {
            world,
            body,
            collider,
        })
    }

    fn query_filter(&self, filter: LayerFilter) -> QueryFilter {
        let targets = match filter {
            LayerFilter::Solid => CollisionLayer::solid_mask(),
            LayerFilter::WallJump => CollisionLayer::WallJumpSurface.group(),
        };
        QueryFilter::default()
            .exclude_rigid_body(self.body)
            .groups(InteractionGroups::new(
                CollisionLayer::Player.group(),
                targets,
            ))
    }
}

impl PhysicsBody for PhysicsActor<'_> {
    fn velocity(&self) -> Vec2 {
        let velocity = self
            .world
            .get_rigid_body(self.body)
            .expect("handle validated at construction")
            .linvel();
        Vec2::new(velocity.x, velocity.y)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.world
            .get_rigid_body_mut(self.body)
            .expect("handle validated at construction")
            .set_linvel(vector![velocity.x, velocity.y], true);
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.world
            .get_rigid_body_mut(self.body)
            .expect("handle validated at construction")
            .apply_impulse(vector![impulse.x, impulse.y], true);
    }

    fn freeze_position(&mut self) {
        self.world
            .get_rigid_body_mut(self.body)
            .expect("handle validated at construction")
            .set_locked_axes(
                LockedAxes::TRANSLATION_LOCKED | LockedAxes::ROTATION_LOCKED,
                true,
            );
    }

    fn unfreeze_position(&mut self) {
        self.world
            .get_rigid_body_mut(self.body)
            .expect("handle validated at construction")
            .set_locked_axes(LockedAxes::ROTATION_LOCKED, true);
    }
}

impl CollisionQuery for PhysicsActor<'_> {
    fn cast_shape(&self, direction: Vec2, max_distance: f32, filter: LayerFilter) -> bool {
        let collider = self
            .world
            .get_collider(self.collider)
            .expect("handle validated at construction");
        let shape = collider.shared_shape().clone();
        let shape_pos = *collider.position();

        self.world
            .cast_shape(
                &shape_pos,
                &vector![direction.x, direction.y],
                &*shape,
                max_distance,
                self.query_filter(filter),
            )
            .is_some()
    }

    fn cast_ray(&self, direction: Vec2, max_distance: f32, filter: LayerFilter) -> bool {
        let origin = *self
            .world
            .get_rigid_body(self.body)
            .expect("handle validated at construction")
            .translation();

        self.world
            .cast_ray(
                origin,
                vector![direction.x, direction.y],
                max_distance,
                true,
                self.query_filter(filter),
            )
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::presets;

    /// Floor at y=0 (top face), walls flanking x=±4, player standing at the origin
    fn arena() -> (PhysicsWorld, RigidBodyHandle, ColliderHandle) {
        let mut world = PhysicsWorld::new();

        let floor = world.add_rigid_body(presets::platform_body(0.0, -0.5));
        world.add_collider(presets::ground_collider(40.0, 1.0), floor);

        let left_wall = world.add_rigid_body(presets::platform_body(-4.5, 5.0));
        world.add_collider(presets::wall_jump_collider(1.0, 10.0), left_wall);
        let right_wall = world.add_rigid_body(presets::platform_body(4.5, 5.0));
        world.add_collider(presets::wall_jump_collider(1.0, 10.0), right_wall);

        // Bottom of the player sits 0.02 above the floor, inside ground-cast range
        let body = world.add_rigid_body(presets::player_body(0.0, 1.02));
        let collider = world.add_collider(presets::player_collider(1.0, 2.0), body);
        world.update_queries();

        (world, body, collider)
    }

    #[test]
    fn test_missing_body_fails_fast() {
        let (mut world, body, collider) = arena();
        world.remove_rigid_body(body);

        let result = PhysicsActor::new(&mut world, body, collider);
        assert!(matches!(result, Err(ControllerError::MissingBody)));
    }

    #[test]
    fn test_velocity_round_trip() {
        let (mut world, body, collider) = arena();
        let mut actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");

        actor.set_velocity(Vec2::new(3.0, -1.0));
        assert_eq!(actor.velocity(), Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_impulse_scales_by_mass() {
        let (mut world, body, collider) = arena();
        let mut actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");

        actor.apply_impulse(Vec2::new(0.0, presets::PLAYER_MASS * 2.0));
        let velocity = actor.velocity();
        assert!((velocity.y - 2.0).abs() < 1.0e-4);
    }

    #[test]
    fn test_ground_cast_hits_floor() {
        let (mut world, body, collider) = arena();
        let actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");

        // Player bottom sits on the floor; a short downward sweep connects
        assert!(actor.cast_shape(Vec2::NEG_Y, 0.1, LayerFilter::Solid));
        // Nothing solid within reach overhead
        assert!(!actor.cast_shape(Vec2::Y, 0.1, LayerFilter::Solid));
    }

    #[test]
    fn test_wall_rays_respect_layer_and_range() {
        let (mut world, body, collider) = arena();
        let actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");

        // Walls sit 4 units out: beyond the 1.3 gameplay range
        assert!(!actor.cast_ray(Vec2::NEG_X, 1.3, LayerFilter::WallJump));
        // A longer probe reaches them on both sides
        assert!(actor.cast_ray(Vec2::NEG_X, 6.0, LayerFilter::WallJump));
        assert!(actor.cast_ray(Vec2::X, 6.0, LayerFilter::WallJump));
        // The floor is not a wall-jump surface
        assert!(!actor.cast_ray(Vec2::NEG_Y, 6.0, LayerFilter::WallJump));
    }

    #[test]
    fn test_cast_excludes_own_collider() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::player_body(0.0, 1.0));
        let collider = world.add_collider(presets::player_collider(1.0, 2.0), body);
        world.update_queries();

        let actor = PhysicsActor::new(&mut world, body, collider).expect("player exists");
        // Alone in the world, every cast must miss
        assert!(!actor.cast_shape(Vec2::NEG_Y, 10.0, LayerFilter::Solid));
        assert!(!actor.cast_ray(Vec2::X, 10.0, LayerFilter::Solid));
    }

    #[test]
    fn test_freeze_locks_translation() {
        let (mut world, body, collider) = arena();
        let mut actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");

        actor.freeze_position();
        let locked = world
            .get_rigid_body(body)
            .expect("body exists")
            .locked_axes();
        assert!(locked.contains(LockedAxes::TRANSLATION_LOCKED));

        let mut actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");
        actor.unfreeze_position();
        let locked = world
            .get_rigid_body(body)
            .expect("body exists")
            .locked_axes();
        assert!(!locked.contains(LockedAxes::TRANSLATION_LOCKED));
        assert!(locked.contains(LockedAxes::ROTATION_LOCKED));
    }

    #[test]
    fn test_frozen_body_ignores_gravity() {
        let (mut world, body, collider) = arena();

        // Hoist the player into the air and freeze it there
        world
            .get_rigid_body_mut(body)
            .expect("body exists")
            .set_translation(vector![0.0, 5.0], true);
        let mut actor = PhysicsActor::new(&mut world, body, collider).expect("arena is valid");
        actor.freeze_position();

        for _ in 0..10 {
            world.step();
        }

        let y = world.get_rigid_body(body).expect("body exists").translation().y;
        assert!((y - 5.0).abs() < 1.0e-3, "Frozen body must hold position");
    }
}
