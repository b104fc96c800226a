use rapier2d::prelude::*;

/// Collision layers for filtering what objects can collide with each other
///
/// The movement controller cares about two named gameplay layers: ordinary
/// ground and designated wall-jump surfaces. Everything else that should
/// block movement goes in the default layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Default solid geometry - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Ordinary ground and platforms
    Ground = 0b0000_0100,

    /// Surfaces that support clinging and wall-jumping
    WallJumpSurface = 0b0000_1000,
}

impl CollisionLayer {
    /// The membership bit for this layer
    pub fn group(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Every layer the player's movement casts treat as solid
    pub fn solid_mask() -> Group {
        Group::from_bits_truncate(
            CollisionLayer::Default as u32
                | CollisionLayer::Ground as u32
                | CollisionLayer::WallJumpSurface as u32,
        )
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = self.group();

        // Define what each layer can interact with
        let filter = match self {
            // Players collide with all solid geometry, not with other players
            CollisionLayer::Player => Self::solid_mask(),

            // Solid geometry collides with players and other solids
            CollisionLayer::Default | CollisionLayer::Ground | CollisionLayer::WallJumpSurface => {
                Group::from_bits_truncate(CollisionLayer::Player as u32) | Self::solid_mask()
            }
        };

        InteractionGroups::new(memberships, filter)
    }
}
