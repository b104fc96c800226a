// Horizontal velocity shaping

use glam::Vec2;

use super::backend::{CollisionQuery, LayerFilter, PhysicsBody};
use super::config::MovementConfig;
use crate::core::math::move_towards;

/// Per-tick step of the linear approach toward zero when there is no input
const STOP_DECEL_STEP: f32 = 0.85;
/// Horizontal damping factor applied while falling
const FALL_DAMPING: f32 = 0.85;
/// Lateral velocity nudge away from a wall in contact range
const WALL_NUDGE: f32 = 1.2;
/// Range of the wall-proximity casts
const NUDGE_CAST_RANGE: f32 = 0.3;

/// Phase state the shaper needs from the rest of the controller
pub struct ShapeContext {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// Fixed timestep in seconds
    pub dt: f32,
    /// False while the body is frozen for the post-jump impulse
    pub movement_enabled: bool,
    /// The character is past the apex of a jump
    pub falling: bool,
}

/// Shape the body's horizontal velocity and write it back.
///
/// With no input the velocity decays linearly toward zero and nothing else
/// runs, even while movement is disabled. With input and movement enabled,
/// velocity integrates toward the clamp bound, facing follows the input
/// sign, nearby walls push the velocity away on both sides independently,
/// and falling damps the result. Returns the horizontal velocity sampled
/// before shaping (the animator's speed value).
pub fn apply<A: PhysicsBody + CollisionQuery>(
    actor: &mut A,
    facing_right: &mut bool,
    config: &MovementConfig,
    ctx: &ShapeContext,
) -> f32 {
    let mut velocity = actor.velocity();
    let speed_info = velocity.x;

    if ctx.horizontal == 0.0 {
        // Kill inertia: constant-rate approach, never overshooting zero
        velocity.x = move_towards(velocity.x, 0.0, STOP_DECEL_STEP);
        actor.set_velocity(velocity);
        return speed_info;
    }

    if !ctx.movement_enabled {
        return speed_info;
    }

    velocity.x += ctx.horizontal * ctx.dt * config.acceleration;
    velocity.x = velocity.x.clamp(-config.max_speed, config.max_speed);

    *facing_right = ctx.horizontal > 0.0;

    // Soften wall contact: push away from anything in reach on either side
    if actor.cast_shape(Vec2::X, NUDGE_CAST_RANGE, LayerFilter::Solid) {
        velocity.x -= WALL_NUDGE;
    }
    if actor.cast_shape(Vec2::NEG_X, NUDGE_CAST_RANGE, LayerFilter::Solid) {
        velocity.x += WALL_NUDGE;
    }
    // The nudges must not break the speed bound
    velocity.x = velocity.x.clamp(-config.max_speed, config.max_speed);

    if ctx.falling {
        velocity.x *= FALL_DAMPING;
    }

    actor.set_velocity(velocity);
    speed_info
}
