// Actors and the per-tick rules that move them
//
// - `animation`: frame timing for the active sprite
// - `collision`: hitbox sampling against the passability grid
// - `actor`: positioned sprites and the `Entity` variants a level updates
// - `character`: the player-controlled actor

pub mod actor;
pub mod animation;
pub mod character;
pub mod collision;

pub use actor::{Actor, ActorId, Entity, TickContext};
pub use animation::Animator;
pub use character::{Character, CharacterSprites, CHARACTER_SPRITE_NAMES};
pub use collision::{collides, HitboxCells, HITBOX_SIZE, HITBOX_Y_OFFSET};
