// Input manager - turns window keyboard events into action state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::{ActionState, PlayerInput};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the local player's action state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    /// Create a manager with the default bindings
    pub fn new() -> Self {
        Self {
            config: InputConfig::with_defaults(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Held keys stay pressed across repeats, so repeats carry no news
            if event.repeat {
                return;
            }
            self.process_key(key_code, event.state);
        }
    }

    /// Apply one key transition through the bindings
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Drop every held action
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionState for InputManager {
    fn is_pressed(&self, action: Action) -> bool {
        self.player.is_pressed(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_key_presses_action() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowDown, ElementState::Pressed);
        assert!(manager.is_pressed(Action::MoveDown));

        manager.process_key(KeyCode::ArrowDown, ElementState::Released);
        assert!(!manager.is_pressed(Action::MoveDown));
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed);
        assert!(Action::ALL.iter().all(|&a| !manager.is_pressed(a)));
    }

    #[test]
    fn test_keys_combine() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ShiftLeft, ElementState::Pressed);
        manager.process_key(KeyCode::ArrowLeft, ElementState::Pressed);
        assert!(manager.is_pressed(Action::Fast));
        assert!(manager.is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowUp, ElementState::Pressed);
        manager.reset();
        assert!(!manager.is_pressed(Action::MoveUp));
    }
}
