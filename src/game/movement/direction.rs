// Jump direction resolution

use glam::Vec2;

use super::config::MovementConfig;

/// The two candidate impulse vectors for this tick, derived from the sign of
/// the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpDirectives {
    /// Impulse applied by a ground or wall jump
    pub jump: Vec2,
    /// Velocity the body is set to when the post-jump impulse fires
    pub post_jump: Vec2,
}

impl JumpDirectives {
    /// Recompute both vectors from the current input sign.
    ///
    /// Pure function, recomputed unconditionally every tick; zero input
    /// yields vertical-only vectors.
    pub fn resolve(config: &MovementConfig, horizontal: f32) -> Self {
        Self {
            jump: Self::directed(horizontal, config.jump_h_force, config.jump_force),
            post_jump: Self::directed(horizontal, config.impulse_h_force, config.impulse_force),
        }
    }

    fn directed(horizontal: f32, h_force: f32, v_force: f32) -> Vec2 {
        if horizontal > 0.0 {
            Vec2::new(h_force, v_force)
        } else if horizontal < 0.0 {
            Vec2::new(-h_force, v_force)
        } else {
            Vec2::new(0.0, v_force)
        }
    }
}
