// Input handling system
//
// - `action`: game actions and default key bindings
// - `config`: key binding configuration
// - `player`: the `ActionState` trait game logic reads, and the local player's state
// - `manager`: feeds winit keyboard events through the bindings
//
// ```rust
// let mut input = InputManager::new();
// // in the event loop
// input.process_keyboard_event(&key_event);
// // game logic only needs `&impl ActionState`
// if input.is_pressed(Action::MoveDown) { /* ... */ }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::{ActionState, PlayerInput};
