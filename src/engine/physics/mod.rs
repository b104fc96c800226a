// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{ColliderHandle, RigidBodyHandle};
pub use collision::CollisionLayer;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier2d::prelude::{nalgebra, Isometry, QueryFilter, Real, RigidBodyType, Vector};

// Re-export for internal use and future expansion
#[allow(unused_imports)]
pub use body::{BodyBuilder, ColliderBuilder2D};
