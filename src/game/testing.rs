// Shared fixtures for game-side tests

use crate::core::{IntPoint, IntRect};
use crate::engine::assets::{AssetRegistry, FrameRecord, SpriteRecord, Texture};
use crate::game::actors::CHARACTER_SPRITE_NAMES;

pub const SHEET: &str = "sheet.png";

/// A sprite record on [`SHEET`] with one 16x16 frame per duration
pub fn sprite_record(durations: &[u32]) -> SpriteRecord {
    SpriteRecord {
        frames: durations
            .iter()
            .map(|&duration| FrameRecord {
                rect: IntRect::new(0, 0, 16, 16),
                duration,
                offset: IntPoint::default(),
                spritesheet_name: SHEET.to_string(),
            })
            .collect(),
        loop_start_frame: 0,
        alignment: Default::default(),
        wrap_mode: Default::default(),
    }
}

/// A registry holding the spritesheet and every sprite a character needs
pub fn character_registry() -> AssetRegistry {
    let mut registry = AssetRegistry::new();
    registry.insert_texture(Texture::from_color(SHEET, 64, 64, [255; 4]));
    for name in CHARACTER_SPRITE_NAMES {
        registry.insert_sprite_record(name, sprite_record(&[3, 3])).unwrap();
    }
    registry
}
