// Tick-driven sprite animation

use crate::engine::assets::{AssetRegistry, Frame, Sprite, SpriteHandle};

/// Playback state for one actor: active sprite, frame index, and ticks spent
/// on the current frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animator {
    sprite: SpriteHandle,
    frame_index: usize,
    frame_ticks: u32,
}

impl Animator {
    /// Start playing `sprite` from its first frame
    pub fn new(sprite: SpriteHandle) -> Self {
        Self {
            sprite,
            frame_index: 0,
            frame_ticks: 0,
        }
    }

    /// Advance by one tick
    ///
    /// A frame stays up until its tick count exceeds its duration, then the
    /// sequence moves on and wraps back to frame 0 after the last one.
    pub fn tick(&mut self, sprite: &Sprite) {
        self.frame_ticks += 1;
        if self.frame_ticks > sprite.frame(self.frame_index).duration {
            self.frame_ticks = 0;
            self.frame_index = (self.frame_index + 1) % sprite.frame_count();
        }
    }

    /// Switch to another sprite and restart from its first frame
    pub fn change_sprite(&mut self, sprite: SpriteHandle) {
        self.sprite = sprite;
        self.frame_index = 0;
        self.frame_ticks = 0;
    }

    /// Switch only if `sprite` is not already playing
    ///
    /// Returns whether a switch happened.
    pub fn play(&mut self, sprite: SpriteHandle) -> bool {
        if self.sprite == sprite {
            return false;
        }
        self.change_sprite(sprite);
        true
    }

    pub fn sprite(&self) -> SpriteHandle {
        self.sprite
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_ticks(&self) -> u32 {
        self.frame_ticks
    }

    /// The frame currently on screen
    pub fn current_frame<'a>(&self, assets: &'a AssetRegistry) -> &'a Frame {
        assets.sprite(self.sprite).frame(self.frame_index)
    }
}
