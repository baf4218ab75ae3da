// Per-player input state

use super::action::Action;
use std::collections::HashSet;

/// Read-only view of which actions are held this tick
///
/// Game logic only sees this trait, so tests can drive characters without a
/// window or keyboard.
pub trait ActionState {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Actions the local player is holding
#[derive(Debug, Default, Clone)]
pub struct PlayerInput {
    pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}

impl ActionState for PlayerInput {
    fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}
