// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.contains(&action) {
            self.just_released.insert(action);
            self.pressed.remove(&action);
        }
    }

    /// Update input state for a new frame
    /// Call this once per frame after processing all events
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Get horizontal directional input in [-1, 1]
    pub fn horizontal_axis(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));

        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump); // held key repeat
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump); // Release without pressing
        assert!(!input.just_released(Action::Jump));
    }

    #[test]
    fn test_horizontal_axis_neutral() {
        let input = PlayerInput::new();
        assert_eq!(input.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_horizontal_axis_directions() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveRight);
        assert_eq!(input.horizontal_axis(), 1.0);

        input.release(Action::MoveRight);
        input.press(Action::MoveLeft);
        assert_eq!(input.horizontal_axis(), -1.0);
    }

    #[test]
    fn test_horizontal_axis_both_directions_cancel() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        assert_eq!(input.horizontal_axis(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();

        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.is_pressed(Action::MoveLeft));
        assert_eq!(input.horizontal_axis(), 0.0);
    }
}
