// Character movement controller
//
// Five cooperating phases run once per fixed-timestep physics tick, in
// order, each depending on state written by the previous:
//
// - `sensor`: classifies the current support (ground / wall-jump / none)
// - `shaping`: accelerates, clamps and damps horizontal velocity
// - `direction`: refreshes the jump and impulse vectors from the input sign
// - `state`: the jump state machine (ground jump, wall jump, freeze-then-
//   impulse window, landing)
// - `damper`: climb resistance while clinging to a wall-jump surface
//
// The controller reads and writes physics state through the capability
// traits in `backend`; `actor` supplies the rapier2d implementation.

pub mod actor;
pub mod backend;
pub mod config;

mod controller;
mod damper;
mod direction;
mod sensor;
mod shaping;
mod state;

// Re-export commonly used types
pub use actor::{ControllerError, PhysicsActor};
pub use backend::{CollisionQuery, LayerFilter, PhysicsBody};
pub use config::MovementConfig;
pub use controller::{InputSample, MovementController, TickOutput};
pub use direction::JumpDirectives;
pub use sensor::{GroundState, SensorSnapshot};
pub use state::MovementPhase;
