// Actors: positioned, animated sprites in a level

use glam::{IVec2, Vec2};

use super::animation::Animator;
use super::character::Character;
use crate::engine::assets::{Alignment, AssetRegistry, SpriteHandle};
use crate::engine::input::ActionState;
use crate::engine::renderer::DrawCommand;
use crate::game::map::PassabilityGrid;

/// Unique identifier for an actor within a level
pub type ActorId = u32;

/// Everything an entity may read during one tick
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    pub grid: &'a PassabilityGrid,
    pub input: &'a dyn ActionState,
    pub assets: &'a AssetRegistry,
}

/// A sprite placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    animator: Animator,
    /// Anchor position in world pixels
    pub pos: IVec2,
    /// Facing: 1 = right, -1 = left (drawn mirrored)
    pub x_dir: i32,
}

impl Actor {
    pub fn new(sprite: SpriteHandle, pos: IVec2) -> Self {
        Self {
            animator: Animator::new(sprite),
            pos,
            x_dir: 1,
        }
    }

    /// Advance the animation by one tick
    pub fn update(&mut self, assets: &AssetRegistry) {
        let sprite = assets.sprite(self.animator.sprite());
        self.animator.tick(sprite);
    }

    /// Switch sprites, restarting the animation
    pub fn change_sprite(&mut self, sprite: SpriteHandle) {
        self.animator.change_sprite(sprite);
    }

    pub fn sprite(&self) -> SpriteHandle {
        self.animator.sprite()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Describe the current frame as a draw call
    pub fn draw_command(&self, assets: &AssetRegistry) -> DrawCommand {
        let sprite = assets.sprite(self.animator.sprite());
        let frame = sprite.frame(self.animator.frame_index());

        let origin = match sprite.alignment {
            Alignment::Center => frame.rect.half_size(),
            Alignment::TopLeft => Vec2::ZERO,
        };

        DrawCommand {
            texture: frame.texture,
            source: frame.rect,
            position: (self.pos + IVec2::from(frame.offset)).as_vec2(),
            origin,
            flip_x: self.x_dir == -1,
        }
    }
}

/// Anything a level updates each tick
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// Plays its animation and nothing else
    Actor(Actor),
    /// Player-controlled, moves against the passability grid
    Character(Character),
}

impl Entity {
    pub fn update(&mut self, ctx: &TickContext<'_>) {
        match self {
            Entity::Actor(actor) => actor.update(ctx.assets),
            Entity::Character(character) => character.update(ctx.grid, ctx.input, ctx.assets),
        }
    }

    pub fn actor(&self) -> &Actor {
        match self {
            Entity::Actor(actor) => actor,
            Entity::Character(character) => character.actor(),
        }
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        match self {
            Entity::Actor(actor) => actor,
            Entity::Character(character) => character.actor_mut(),
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.actor().pos
    }
}

impl From<Actor> for Entity {
    fn from(actor: Actor) -> Self {
        Entity::Actor(actor)
    }
}

impl From<Character> for Entity {
    fn from(character: Character) -> Self {
        Entity::Character(character)
    }
}
