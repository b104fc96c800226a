// Movement tuning - fixed per deployment, never mutated at runtime

/// Force and speed constants for one character archetype
///
/// The magnitudes assume the player body preset (mass 1.3, gravity scale 4);
/// retuning one without the other changes the jump arc.
#[derive(Debug, Clone)]
pub struct MovementConfig {
    /// Horizontal acceleration (units/second²)
    pub acceleration: f32,
    /// Maximum horizontal speed (units/second)
    pub max_speed: f32,
    /// Vertical jump impulse magnitude
    pub jump_force: f32,
    /// Horizontal jump impulse magnitude
    pub jump_h_force: f32,
    /// Vertical post-jump impulse magnitude
    pub impulse_force: f32,
    /// Horizontal post-jump impulse magnitude
    pub impulse_h_force: f32,
    /// Also damp vertical velocity when clinging with no directional input.
    /// Off by default: neutral input lets the character rest on the wall,
    /// which can be climbed by repeated neutral hops. Kept switchable until
    /// product decides whether that is a feature.
    pub damp_neutral_cling: bool,
}

/// Baseline tuning used by the demo and the tests
pub const BASE_CONFIG: MovementConfig = MovementConfig {
    acceleration: 60.0,
    max_speed: 8.0,
    jump_force: 12.0,
    jump_h_force: 4.0,
    impulse_force: 12.0,
    impulse_h_force: 6.0,
    damp_neutral_cling: false,
};

impl Default for MovementConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}
