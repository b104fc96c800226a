// Ground sensing - classifies what currently supports the character

use glam::Vec2;

use super::backend::{CollisionQuery, LayerFilter};

/// Range of the downward support cast
const GROUND_CAST_RANGE: f32 = 0.1;
/// Range of the sideways wall-jump rays
const WALL_RAY_RANGE: f32 = 1.3;

/// Per-tick classification of what surface, if any, supports the character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundState {
    /// Standing on ordinary ground
    Ground,
    /// Within reach of a wall-jump surface
    WallJumpSurface,
    /// Airborne, nothing in reach
    None,
}

/// One tick's sensor readings
///
/// The wall rays are kept alongside the classification because the wall-jump
/// branch needs them; the body's position cannot change within a tick, so a
/// re-query would return the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub state: GroundState,
    /// Wall-jump surface within ray range to the left
    pub wall_left: bool,
    /// Wall-jump surface within ray range to the right
    pub wall_right: bool,
}

/// Run the three support queries and classify the result.
///
/// Precedence: ground under the feet wins over a wall in reach. There is no
/// hysteresis; the classification is recomputed from scratch every tick, so
/// rapid oscillation at surface edges is possible and accepted.
pub fn sense<Q: CollisionQuery>(query: &Q) -> SensorSnapshot {
    let ground = query.cast_shape(Vec2::NEG_Y, GROUND_CAST_RANGE, LayerFilter::Solid);
    let wall_left = query.cast_ray(Vec2::NEG_X, WALL_RAY_RANGE, LayerFilter::WallJump);
    let wall_right = query.cast_ray(Vec2::X, WALL_RAY_RANGE, LayerFilter::WallJump);

    let state = if ground {
        GroundState::Ground
    } else if wall_left || wall_right {
        GroundState::WallJumpSurface
    } else {
        GroundState::None
    };

    SensorSnapshot {
        state,
        wall_left,
        wall_right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::movement::testing::MockActor;

    #[test]
    fn test_ground_wins_over_wall() {
        let actor = MockActor {
            ground_below: true,
            wall_left: true,
            wall_right: true,
            ..Default::default()
        };

        let snapshot = sense(&actor);
        assert_eq!(snapshot.state, GroundState::Ground);
    }

    #[test]
    fn test_either_wall_ray_classifies_wall() {
        let left_only = MockActor {
            wall_left: true,
            ..Default::default()
        };
        let right_only = MockActor {
            wall_right: true,
            ..Default::default()
        };

        assert_eq!(sense(&left_only).state, GroundState::WallJumpSurface);
        assert_eq!(sense(&right_only).state, GroundState::WallJumpSurface);
    }

    #[test]
    fn test_no_hits_is_none() {
        let actor = MockActor::default();

        let snapshot = sense(&actor);
        assert_eq!(snapshot.state, GroundState::None);
        assert!(!snapshot.wall_left);
        assert!(!snapshot.wall_right);
    }

    #[test]
    fn test_snapshot_keeps_wall_sides() {
        let actor = MockActor {
            wall_left: true,
            ..Default::default()
        };

        let snapshot = sense(&actor);
        assert!(snapshot.wall_left);
        assert!(!snapshot.wall_right);
    }
}
