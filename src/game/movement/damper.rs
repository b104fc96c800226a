// Wall-cling climb resistance

use super::backend::PhysicsBody;
use super::config::MovementConfig;
use super::state::MovementPhase;

/// Vertical damping factor applied while clinging
const CLING_DAMPING: f32 = 0.75;

/// Damp vertical velocity while clinging to a wall-jump surface.
///
/// Runs after the state machine, so a jump fired this tick leaves the
/// departure velocity untouched. With neutral directional input the damping
/// is skipped unless `damp_neutral_cling` is set (see `MovementConfig`).
pub fn apply<B: PhysicsBody>(
    actor: &mut B,
    phase: MovementPhase,
    horizontal: f32,
    config: &MovementConfig,
) {
    if phase != MovementPhase::WallClinging {
        return;
    }
    if horizontal == 0.0 && !config.damp_neutral_cling {
        return;
    }

    let mut velocity = actor.velocity();
    velocity.y *= CLING_DAMPING;
    actor.set_velocity(velocity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::movement::testing::MockActor;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn test_damps_while_clinging() {
        let mut actor = MockActor {
            velocity: Vec2::new(0.0, 4.0),
            ..Default::default()
        };

        apply(
            &mut actor,
            MovementPhase::WallClinging,
            -1.0,
            &MovementConfig::default(),
        );
        assert_relative_eq!(actor.velocity.y, 3.0);
    }

    #[test]
    fn test_no_damping_mid_jump() {
        let mut actor = MockActor {
            velocity: Vec2::new(0.0, 9.0),
            ..Default::default()
        };

        apply(
            &mut actor,
            MovementPhase::Jumping { impulse_armed: true },
            -1.0,
            &MovementConfig::default(),
        );
        assert_eq!(actor.velocity.y, 9.0, "Jump departure keeps its velocity");
    }

    #[test]
    fn test_neutral_input_rests_on_wall_by_default() {
        let mut actor = MockActor {
            velocity: Vec2::new(0.0, 4.0),
            ..Default::default()
        };

        apply(
            &mut actor,
            MovementPhase::WallClinging,
            0.0,
            &MovementConfig::default(),
        );
        assert_eq!(actor.velocity.y, 4.0);
    }

    #[test]
    fn test_neutral_input_damps_when_configured() {
        let mut actor = MockActor {
            velocity: Vec2::new(0.0, 4.0),
            ..Default::default()
        };
        let config = MovementConfig {
            damp_neutral_cling: true,
            ..MovementConfig::default()
        };

        apply(&mut actor, MovementPhase::WallClinging, 0.0, &config);
        assert_relative_eq!(actor.velocity.y, 3.0);
    }

    #[test]
    fn test_downward_velocity_also_damped() {
        let mut actor = MockActor {
            velocity: Vec2::new(0.0, -4.0),
            ..Default::default()
        };

        apply(
            &mut actor,
            MovementPhase::WallClinging,
            1.0,
            &MovementConfig::default(),
        );
        assert_relative_eq!(actor.velocity.y, -3.0);
    }
}
