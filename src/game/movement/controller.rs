// Movement controller - ties the five per-tick phases together

use log::debug;

use super::backend::{CollisionQuery, PhysicsBody};
use super::config::MovementConfig;
use super::damper;
use super::direction::JumpDirectives;
use super::sensor;
use super::shaping::{self, ShapeContext};
use super::state::{self, JumpAction, MovementPhase, StepInput};

/// One frame's worth of control input
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Horizontal axis in [-1, 1]; the sign picks facing and force direction
    pub horizontal: f32,
    /// True for the one frame in which the jump button went down
    pub jump_pressed: bool,
}

/// Derived values for the presentation layer, produced every tick
///
/// The animation and sprite systems consume this; the controller never
/// talks to them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Absolute horizontal velocity sampled before shaping (animator speed)
    pub speed: f32,
    /// Jump flag for the animator: the button edge, overwritten by an actual
    /// jump fired this tick (last write wins within the tick)
    pub is_jumping: bool,
    /// Which way the sprite should face
    pub facing_right: bool,
}

/// Converts directional and jump input into velocity and impulse writes on
/// an externally owned rigid body, once per fixed-timestep physics tick.
pub struct MovementController {
    config: MovementConfig,
    phase: MovementPhase,
    facing_right: bool,
    /// Jump edge latched until a state-machine branch consumes it
    jump_requested: bool,
}

impl MovementController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            phase: MovementPhase::Grounded,
            facing_right: true,
            jump_requested: false,
        }
    }

    /// Current movement phase
    pub fn phase(&self) -> MovementPhase {
        self.phase
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Run one fixed-timestep tick against the given physics actor.
    ///
    /// Phase order matters: sensing first, then velocity shaping, then the
    /// directive refresh the state machine depends on, then the state
    /// machine itself, and climb resistance last so a jump departure is
    /// never damped.
    pub fn tick<A>(&mut self, actor: &mut A, input: InputSample, dt: f32) -> TickOutput
    where
        A: PhysicsBody + CollisionQuery,
    {
        if input.jump_pressed {
            self.jump_requested = true;
        }

        let snapshot = sensor::sense(actor);

        let speed = shaping::apply(
            actor,
            &mut self.facing_right,
            &self.config,
            &ShapeContext {
                horizontal: input.horizontal,
                dt,
                movement_enabled: self.phase.movement_enabled(),
                falling: self.phase.is_falling(),
            },
        );

        let directives = JumpDirectives::resolve(&self.config, input.horizontal);

        let out = state::step(
            self.phase,
            &StepInput {
                jump_requested: self.jump_requested,
                horizontal: input.horizontal,
                snapshot: &snapshot,
                vertical_velocity: actor.velocity().y,
                dt,
                directives,
            },
        );

        if out.phase != self.phase {
            debug!("movement phase {:?} -> {:?}", self.phase, out.phase);
        }

        match out.action {
            JumpAction::None => {}
            JumpAction::Jump(impulse) => actor.apply_impulse(impulse),
            JumpAction::Freeze => actor.freeze_position(),
            JumpAction::Release(velocity) => {
                actor.unfreeze_position();
                actor.set_velocity(velocity);
            }
            JumpAction::Cancel => actor.unfreeze_position(),
        }

        if out.consumed_jump {
            self.jump_requested = false;
        }
        self.phase = out.phase;

        damper::apply(actor, self.phase, input.horizontal, &self.config);

        TickOutput {
            speed: speed.abs(),
            is_jumping: out.jumped || input.jump_pressed,
            facing_right: self.facing_right,
        }
    }

    /// Abort a pending impulse window (e.g. when despawning the character)
    /// so the body is never left position-locked.
    pub fn cancel_pending<B: PhysicsBody>(&mut self, actor: &mut B) {
        if let MovementPhase::ImpulseWindow { .. } = self.phase {
            debug!("movement phase {:?} aborted", self.phase);
            actor.unfreeze_position();
            self.phase = MovementPhase::Grounded;
        }
    }
}
