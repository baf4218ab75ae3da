// Key binding configuration

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to game actions
///
/// Several sources may trigger the same action; each source triggers at most one.
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with the default bindings
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create a configuration from a list of bindings, later entries win
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action, replacing its previous binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults() {
        let config = InputConfig::with_defaults();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ShiftLeft)),
            Some(Action::Fast)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ArrowDown)),
            Some(Action::MoveDown)
        );
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyQ)), None);
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);

        config.bind(source, Action::MoveLeft);
        config.bind(source, Action::MoveRight);

        assert_eq!(config.get_action(source), Some(Action::MoveRight));
    }

    #[test]
    fn test_later_bindings_win() {
        let key = InputSource::key(KeyCode::KeyW);
        let config = InputConfig::from_bindings(vec![(key, Action::MoveDown), (key, Action::MoveUp)]);
        assert_eq!(config.get_action(key), Some(Action::MoveUp));
    }

    #[test]
    fn test_multiple_sources_per_action() {
        let mut config = InputConfig::with_defaults();
        config.bind(InputSource::key(KeyCode::KeyA), Action::MoveLeft);

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyA)), Some(Action::MoveLeft));
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::ArrowLeft)),
            Some(Action::MoveLeft)
        );
    }
}
