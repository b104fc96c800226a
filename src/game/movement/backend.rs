// Physics capability traits
//
// The controller never owns physics state. It depends on these two narrow
// interfaces, supplied by the surrounding engine integration, which keeps
// every movement phase testable without a real physics engine.

use glam::Vec2;

/// Read/write access to the rigid body the controller drives
pub trait PhysicsBody {
    /// Current linear velocity
    fn velocity(&self) -> Vec2;

    /// Overwrite the linear velocity
    fn set_velocity(&mut self, velocity: Vec2);

    /// Apply an instantaneous impulse (momentum change, scaled by mass)
    fn apply_impulse(&mut self, impulse: Vec2);

    /// Lock both translation axes, pinning the body in place
    fn freeze_position(&mut self);

    /// Release the translation lock, restoring the rotation-only lock
    fn unfreeze_position(&mut self);
}

/// Which colliders a movement cast should consider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFilter {
    /// Everything solid the character can collide with
    Solid,
    /// Only designated wall-jump surfaces
    WallJump,
}

/// Shape/ray-cast queries against the world
///
/// Casts originate at the controller's own collider/body and exclude it from
/// the results. Zero hits is a normal outcome, reported as `false`.
pub trait CollisionQuery {
    /// Sweep the character's collider along `direction`; true if anything is hit
    fn cast_shape(&self, direction: Vec2, max_distance: f32, filter: LayerFilter) -> bool;

    /// Cast a ray from the character's center along `direction`
    fn cast_ray(&self, direction: Vec2, max_distance: f32, filter: LayerFilter) -> bool;
}
