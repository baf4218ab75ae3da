// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Held to move at the fast speed
    Fast,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Fast,
    ];
}

/// Physical input that can trigger an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: GamepadButton(gilrs::Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings: arrow keys to move, left shift to go fast
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ShiftLeft), Action::Fast),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::ArrowUp);
        assert_eq!(source, InputSource::Keyboard(KeyCode::ArrowUp));
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bound: HashSet<_> = default_bindings().into_iter().map(|(_, a)| a).collect();
        for action in Action::ALL {
            assert!(bound.contains(&action), "{action:?} has no default binding");
        }
    }

    #[test]
    fn test_no_duplicate_default_sources() {
        let mut seen = HashSet::new();
        for (source, _) in default_bindings() {
            assert!(seen.insert(source), "Duplicate input source {source:?}");
        }
    }
}
