// Player-controlled character: input-driven movement against the passability grid

use glam::IVec2;
use log::debug;

use super::actor::Actor;
use super::collision::collides;
use crate::engine::assets::{AssetError, AssetRegistry, SpriteHandle};
use crate::engine::input::{Action, ActionState};
use crate::game::map::PassabilityGrid;

/// Pixels moved per tick
const WALK_SPEED: i32 = 1;
const FAST_SPEED: i32 = 5;

/// Sprites a character switches between, in the order they are resolved
pub const CHARACTER_SPRITE_NAMES: [&str; 6] = [
    "char_idle_down_move",
    "char_idle_up_move",
    "char_idle_right_move",
    "char_idle_down",
    "char_idle_up",
    "char_idle_right",
];

/// Sprite handles resolved once when the character is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSprites {
    pub down_move: SpriteHandle,
    pub up_move: SpriteHandle,
    /// Used for both left and right, left is drawn mirrored
    pub right_move: SpriteHandle,
    pub idle_down: SpriteHandle,
    pub idle_up: SpriteHandle,
    pub idle_right: SpriteHandle,
}

impl CharacterSprites {
    pub fn resolve(assets: &AssetRegistry) -> Result<Self, AssetError> {
        let [down_move, up_move, right_move, idle_down, idle_up, idle_right] =
            CHARACTER_SPRITE_NAMES;
        Ok(Self {
            down_move: assets.sprite_handle(down_move)?,
            up_move: assets.sprite_handle(up_move)?,
            right_move: assets.sprite_handle(right_move)?,
            idle_down: assets.sprite_handle(idle_down)?,
            idle_up: assets.sprite_handle(idle_up)?,
            idle_right: assets.sprite_handle(idle_right)?,
        })
    }

    /// Idle counterpart of a moving sprite
    fn idle_for(&self, sprite: SpriteHandle) -> Option<SpriteHandle> {
        if sprite == self.down_move {
            Some(self.idle_down)
        } else if sprite == self.right_move {
            Some(self.idle_right)
        } else if sprite == self.up_move {
            Some(self.idle_up)
        } else {
            None
        }
    }
}

/// An actor steered by an [`ActionState`]
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    actor: Actor,
    sprites: CharacterSprites,
}

impl Character {
    /// Create a character at `pos`, facing down
    pub fn new(assets: &AssetRegistry, pos: IVec2) -> Result<Self, AssetError> {
        let sprites = CharacterSprites::resolve(assets)?;
        Ok(Self {
            actor: Actor::new(sprites.idle_down, pos),
            sprites,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn sprites(&self) -> &CharacterSprites {
        &self.sprites
    }

    /// One tick: animate, then move
    ///
    /// Vertical input is read first (down beats up) and picks the sprite;
    /// horizontal input (left beats right) still moves the character but only
    /// picks the sprite and facing when there was no vertical move. Each axis
    /// is walked back out of walls separately. With no input, a moving sprite
    /// drops to its idle counterpart.
    pub fn update(&mut self, grid: &PassabilityGrid, input: &dyn ActionState, assets: &AssetRegistry) {
        self.actor.update(assets);

        let speed = if input.is_pressed(Action::Fast) {
            FAST_SPEED
        } else {
            WALK_SPEED
        };
        let mut moved = false;

        let vertical = if input.is_pressed(Action::MoveDown) {
            Some((speed, self.sprites.down_move))
        } else if input.is_pressed(Action::MoveUp) {
            Some((-speed, self.sprites.up_move))
        } else {
            None
        };
        if let Some((dy, sprite)) = vertical {
            self.play(sprite, assets);
            self.actor.x_dir = 1;
            moved = true;
            self.step(IVec2::new(0, dy), grid);
        }

        let horizontal = if input.is_pressed(Action::MoveLeft) {
            Some((-speed, -1))
        } else if input.is_pressed(Action::MoveRight) {
            Some((speed, 1))
        } else {
            None
        };
        if let Some((dx, x_dir)) = horizontal {
            if !moved {
                self.play(self.sprites.right_move, assets);
                self.actor.x_dir = x_dir;
                moved = true;
            }
            self.step(IVec2::new(dx, 0), grid);
        }

        if !moved {
            if let Some(idle) = self.sprites.idle_for(self.actor.sprite()) {
                self.play(idle, assets);
            }
        }
    }

    fn play(&mut self, sprite: SpriteHandle, assets: &AssetRegistry) {
        if self.actor.animator_mut().play(sprite) {
            debug!("Character sprite -> {}", assets.sprite(sprite).name);
        }
    }

    /// Move by `delta`, then back off one pixel at a time while colliding
    ///
    /// Backing off stops at the starting point, so a character already inside
    /// a wall stays put instead of being pushed through it.
    fn step(&mut self, delta: IVec2, grid: &PassabilityGrid) {
        self.actor.pos += delta;

        let back = -delta.signum();
        let mut remaining = delta.abs().max_element();
        while remaining > 0 && collides(self.actor.pos, grid) {
            self.actor.pos += back;
            remaining -= 1;
        }
    }
}
