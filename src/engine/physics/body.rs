use super::collision::CollisionLayer;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    linvel: Vector<Real>,
    gravity_scale: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 1.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            gravity_scale: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the initial linear velocity
    pub fn linvel(mut self, x: Real, y: Real) -> Self {
        self.linvel = vector![x, y];
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (useful for player characters)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .linvel(self.linvel)
            .gravity_scale(self.gravity_scale)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    layer: CollisionLayer,
    friction: Real,
    restitution: Real,
    density: Option<Real>,
    mass: Option<Real>,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            layer: CollisionLayer::Default,
            friction: 0.5,
            restitution: 0.0,
            density: Some(1.0),
            mass: None,
        }
    }

    /// Set the collision layer for filtering
    pub fn layer(mut self, layer: CollisionLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set mass directly (overrides density)
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass = Some(mass);
        self.density = None;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        let mut builder = rapier2d::prelude::ColliderBuilder::new(self.shape)
            .collision_groups(self.layer.to_interaction_groups())
            .friction(self.friction)
            .restitution(self.restitution);

        // Set mass or density
        if let Some(mass) = self.mass {
            builder = builder.mass(mass);
        } else if let Some(density) = self.density {
            builder = builder.density(density);
        }

        builder.build()
    }
}

/// Common rigid body configurations for game objects
pub mod presets {
    use super::*;

    // The controller's force constants assume this exact body tuning
    pub const PLAYER_MASS: Real = 1.3;
    pub const PLAYER_GRAVITY_SCALE: Real = 4.0;

    /// Create a player character body (dynamic, rotation locked)
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(PLAYER_GRAVITY_SCALE)
            .can_sleep(false) // Players should never sleep
            .build()
    }

    /// Create a player character collider (box shape)
    pub fn player_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .layer(CollisionLayer::Player)
            .friction(0.0) // No friction for smooth movement
            .restitution(0.0) // No bounce
            .mass(PLAYER_MASS)
            .build()
    }

    /// Create a platform body (fixed/static)
    pub fn platform_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a ground collider (box shape)
    pub fn ground_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .layer(CollisionLayer::Ground)
            .friction(0.3)
            .restitution(0.0)
            .build()
    }

    /// Create a wall-jump surface collider (box shape)
    pub fn wall_jump_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .layer(CollisionLayer::WallJumpSurface)
            .friction(0.0)
            .restitution(0.0)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_builder_dynamic() {
        let body = BodyBuilder::new_dynamic()
            .position(10.0, 20.0)
            .linvel(5.0, 0.0)
            .build();

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert_eq!(body.translation().x, 10.0);
        assert_eq!(body.translation().y, 20.0);
    }

    #[test]
    fn test_body_builder_fixed_ignores_gravity() {
        let body = BodyBuilder::new_fixed().position(0.0, -1.0).build();

        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert_eq!(body.gravity_scale(), 0.0);
    }

    #[test]
    fn test_collider_builder_box() {
        let collider = ColliderBuilder2D::box_shape(1.0, 2.0).friction(0.3).build();

        assert!(!collider.is_sensor());
        assert_eq!(collider.friction(), 0.3);
    }

    #[test]
    fn test_player_preset() {
        let body = presets::player_body(0.0, 0.0);
        let collider = presets::player_collider(1.0, 2.0);

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert!(body.is_rotation_locked());
        assert_eq!(body.gravity_scale(), presets::PLAYER_GRAVITY_SCALE);
        assert_eq!(collider.friction(), 0.0);
    }

    #[test]
    fn test_wall_jump_preset_layer() {
        let collider = presets::wall_jump_collider(1.0, 6.0);
        let groups = collider.collision_groups();

        assert!(groups
            .memberships
            .contains(CollisionLayer::WallJumpSurface.group()));
    }
}
