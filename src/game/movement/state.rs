// Jump state machine
//
// One transition function consumes (phase, input, sensor snapshot) and
// produces the next phase plus at most one side effect for the controller
// to apply. Branches are mutually exclusive and evaluated in priority
// order; the first match wins.

use glam::Vec2;

use super::direction::JumpDirectives;
use super::sensor::{GroundState, SensorSnapshot};

/// Duration of the pre-impulse freeze, in seconds
const FREEZE_DURATION: f32 = 0.14;

/// Mutually exclusive movement phases
///
/// `Grounded` also covers walking off a ledge without jumping: no jump was
/// performed, so there is nothing to land from and no fall damping applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementPhase {
    /// Resting, nothing airborne-from-jump about the character
    Grounded,
    /// Within reach of a wall-jump surface and not mid-jump
    WallClinging,
    /// Airborne from a jump, still rising
    Jumping { impulse_armed: bool },
    /// Airborne from a jump, past the apex
    Falling { impulse_armed: bool },
    /// Frozen in place, counting down to the post-jump impulse
    ImpulseWindow { remaining: f32 },
}

impl MovementPhase {
    /// Airborne because of a jump (landing applies)
    pub fn is_jumping(&self) -> bool {
        matches!(self, Self::Jumping { .. } | Self::Falling { .. })
    }

    /// Past the apex of a jump
    pub fn is_falling(&self) -> bool {
        matches!(self, Self::Falling { .. })
    }

    /// A post-jump impulse may still be triggered
    pub fn impulse_armed(&self) -> bool {
        matches!(
            self,
            Self::Jumping { impulse_armed: true } | Self::Falling { impulse_armed: true }
        )
    }

    /// False only while frozen for the post-jump impulse
    pub fn movement_enabled(&self) -> bool {
        !matches!(self, Self::ImpulseWindow { .. })
    }

    /// The resting phase matching a sensor classification
    fn rest(sensor: GroundState) -> Self {
        if sensor == GroundState::WallJumpSurface {
            Self::WallClinging
        } else {
            Self::Grounded
        }
    }
}

impl Default for MovementPhase {
    fn default() -> Self {
        Self::Grounded
    }
}

/// The single side effect a transition can ask the controller to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpAction {
    /// Nothing to apply
    None,
    /// Apply this impulse to the body (ground or wall jump)
    Jump(Vec2),
    /// Lock the body in place; the impulse window has opened
    Freeze,
    /// Unlock the body and overwrite its velocity with the post-jump impulse
    Release(Vec2),
    /// Unlock the body without the impulse (window canceled by touching down)
    Cancel,
}

/// Everything one transition consumes
pub struct StepInput<'a> {
    /// A jump edge is latched and waiting to be consumed
    pub jump_requested: bool,
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    /// This tick's sensor readings
    pub snapshot: &'a SensorSnapshot,
    /// Vertical velocity after shaping
    pub vertical_velocity: f32,
    /// Fixed timestep in seconds
    pub dt: f32,
    /// This tick's directive vectors
    pub directives: JumpDirectives,
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub phase: MovementPhase,
    pub action: JumpAction,
    /// The latched jump request was consumed this tick
    pub consumed_jump: bool,
    /// A jump impulse fired this tick (animator feed)
    pub jumped: bool,
}

impl StepOutput {
    fn quiet(phase: MovementPhase) -> Self {
        Self {
            phase,
            action: JumpAction::None,
            consumed_jump: false,
            jumped: false,
        }
    }
}

/// Evaluate one tick's transition.
pub fn step(phase: MovementPhase, input: &StepInput) -> StepOutput {
    // Falling marker first; it never blocks the branch chain below
    let phase = match phase {
        MovementPhase::Jumping { impulse_armed } if input.vertical_velocity < 0.0 => {
            MovementPhase::Falling { impulse_armed }
        }
        other => other,
    };

    // A pending window supersedes everything else: only one may exist, and
    // new jump requests are rejected until it resolves.
    if let MovementPhase::ImpulseWindow { remaining } = phase {
        if input.snapshot.state != GroundState::None {
            // Touched down while frozen: unlock without the impulse
            return StepOutput {
                action: JumpAction::Cancel,
                ..StepOutput::quiet(MovementPhase::rest(input.snapshot.state))
            };
        }

        let remaining = remaining - input.dt;
        if remaining <= 0.0 {
            return StepOutput {
                phase: MovementPhase::Jumping {
                    impulse_armed: false,
                },
                action: JumpAction::Release(input.directives.post_jump),
                consumed_jump: false,
                jumped: false,
            };
        }
        return StepOutput::quiet(MovementPhase::ImpulseWindow { remaining });
    }

    // Ground jump
    if input.jump_requested && input.snapshot.state == GroundState::Ground {
        return StepOutput {
            phase: MovementPhase::Jumping { impulse_armed: true },
            action: JumpAction::Jump(input.directives.jump),
            consumed_jump: true,
            jumped: true,
        };
    }

    // Wall jump
    if input.jump_requested && input.snapshot.state == GroundState::WallJumpSurface {
        // Pushing into the wall grants the vertical pop only, so the jump
        // never drives the character further into the surface
        let into_left = input.snapshot.wall_left && input.horizontal < 0.0;
        let into_right = input.snapshot.wall_right && input.horizontal > 0.0;
        let impulse = if into_left || into_right {
            Vec2::new(0.0, input.directives.jump.y)
        } else {
            input.directives.jump
        };

        return StepOutput {
            phase: MovementPhase::Jumping { impulse_armed: true },
            action: JumpAction::Jump(impulse),
            consumed_jump: true,
            jumped: true,
        };
    }

    // Post-jump impulse: open the freeze window
    if input.jump_requested && phase.impulse_armed() {
        return StepOutput {
            phase: MovementPhase::ImpulseWindow {
                remaining: FREEZE_DURATION,
            },
            action: JumpAction::Freeze,
            consumed_jump: true,
            jumped: false,
        };
    }

    // Landing resets every marker
    if phase.is_jumping() && input.snapshot.state != GroundState::None {
        return StepOutput::quiet(MovementPhase::rest(input.snapshot.state));
    }

    // Resting bookkeeping tracks the sensor; mid-jump with no match, nothing
    // changes this tick
    if !phase.is_jumping() {
        return StepOutput::quiet(MovementPhase::rest(input.snapshot.state));
    }

    StepOutput::quiet(phase)
}
