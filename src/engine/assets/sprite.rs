// Sprite definitions
//
// Sprites arrive as JSON records naming their spritesheet per frame. The
// registry turns a record into a `Sprite` by resolving every spritesheet name
// to a texture handle up front.

use serde::Deserialize;

use super::handle::TextureHandle;
use super::AssetError;
use crate::core::{IntPoint, IntRect};

/// How a sprite is anchored to its actor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Frame is drawn around its center
    #[default]
    Center,
    /// Any other value anchors at the frame's top-left corner
    #[serde(other)]
    TopLeft,
}

/// What happens when the last frame finishes
///
/// Playback currently always wraps to frame 0; the mode is carried for
/// sprite data compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    #[default]
    Once,
    #[serde(other)]
    Loop,
}

/// One frame as stored on disk
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub rect: IntRect,
    pub duration: u32,
    pub offset: IntPoint,
    pub spritesheet_name: String,
}

/// A sprite file (`sprites/<name>.json`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteRecord {
    pub frames: Vec<FrameRecord>,
    #[serde(default)]
    pub loop_start_frame: usize,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub wrap_mode: WrapMode,
}

/// A single animation frame with its texture already resolved
#[derive(Debug, Clone)]
pub struct Frame {
    /// Source rectangle in the spritesheet
    pub rect: IntRect,
    /// Display time in ticks
    pub duration: u32,
    /// Pixel offset applied to the actor position when drawing
    pub offset: IntPoint,
    pub spritesheet_name: String,
    pub texture: TextureHandle,
}

/// A validated, ready-to-play frame sequence
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: String,
    frames: Vec<Frame>,
    pub loop_start_frame: usize,
    pub alignment: Alignment,
    pub wrap_mode: WrapMode,
}

impl Sprite {
    /// Build a sprite from a record, resolving spritesheet names with `resolve`
    ///
    /// Fails with [`AssetError::Format`] when the record has no frames or an
    /// out-of-range loop start, and with whatever `resolve` returns for an
    /// unknown spritesheet.
    pub fn from_record<F>(name: &str, record: SpriteRecord, mut resolve: F) -> Result<Self, AssetError>
    where
        F: FnMut(&str) -> Result<TextureHandle, AssetError>,
    {
        if record.frames.is_empty() {
            return Err(AssetError::Format(format!("sprite '{name}' has no frames")));
        }
        if record.loop_start_frame >= record.frames.len() {
            return Err(AssetError::Format(format!(
                "sprite '{name}' loops from frame {} but has {} frames",
                record.loop_start_frame,
                record.frames.len()
            )));
        }

        let frames = record
            .frames
            .into_iter()
            .map(|f| {
                Ok(Frame {
                    texture: resolve(&f.spritesheet_name)?,
                    rect: f.rect,
                    duration: f.duration,
                    offset: f.offset,
                    spritesheet_name: f.spritesheet_name,
                })
            })
            .collect::<Result<Vec<_>, AssetError>>()?;

        Ok(Self {
            name: name.to_string(),
            frames,
            loop_start_frame: record.loop_start_frame,
            alignment: record.alignment,
            wrap_mode: record.wrap_mode,
        })
    }

    /// All frames, never empty
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at `index`, wrapping out-of-range indices back into the sequence
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index % self.frames.len()]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::handle::AssetHandle;

    const WALK_JSON: &str = r#"{
        "frames": [
            {"rect": {"x1": 0, "y1": 0, "x2": 16, "y2": 24}, "duration": 2,
             "offset": {"x": 0, "y": -4}, "spritesheetName": "link.png"},
            {"rect": {"x1": 16, "y1": 0, "x2": 32, "y2": 24}, "duration": 3,
             "offset": {"x": 1, "y": -4}, "spritesheetName": "link.png"}
        ],
        "loopStartFrame": 0,
        "alignment": "center",
        "wrapMode": "loop"
    }"#;

    fn resolve_any(_: &str) -> Result<TextureHandle, AssetError> {
        Ok(AssetHandle::new(0))
    }

    #[test]
    fn test_parse_sprite_record() {
        let record: SpriteRecord = serde_json::from_str(WALK_JSON).unwrap();
        assert_eq!(record.frames.len(), 2);
        assert_eq!(record.frames[1].duration, 3);
        assert_eq!(record.frames[0].offset, IntPoint::new(0, -4));
        assert_eq!(record.alignment, Alignment::Center);
        assert_eq!(record.wrap_mode, WrapMode::Loop);
    }

    #[test]
    fn test_unknown_alignment_is_top_left() {
        let record: SpriteRecord = serde_json::from_str(
            r#"{"frames": [], "alignment": "bottom", "wrapMode": "once"}"#,
        )
        .unwrap();
        assert_eq!(record.alignment, Alignment::TopLeft);
        assert_eq!(record.loop_start_frame, 0);
    }

    #[test]
    fn test_from_record_resolves_textures() {
        let record: SpriteRecord = serde_json::from_str(WALK_JSON).unwrap();
        let mut asked = Vec::new();
        let sprite = Sprite::from_record("walk", record, |name| {
            asked.push(name.to_string());
            Ok(AssetHandle::new(5))
        })
        .unwrap();

        assert_eq!(sprite.name, "walk");
        assert_eq!(sprite.frame_count(), 2);
        assert_eq!(sprite.frame(1).texture.index(), 5);
        assert_eq!(asked, vec!["link.png", "link.png"]);
    }

    #[test]
    fn test_empty_sprite_rejected() {
        let record: SpriteRecord = serde_json::from_str(r#"{"frames": []}"#).unwrap();
        let err = Sprite::from_record("empty", record, resolve_any).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_bad_loop_start_rejected() {
        let mut record: SpriteRecord = serde_json::from_str(WALK_JSON).unwrap();
        record.loop_start_frame = 2;
        assert!(Sprite::from_record("walk", record, resolve_any).is_err());
    }

    #[test]
    fn test_unresolved_spritesheet_propagates() {
        let record: SpriteRecord = serde_json::from_str(WALK_JSON).unwrap();
        let err = Sprite::from_record("walk", record, |name| {
            Err(AssetError::UnknownTexture(name.to_string()))
        })
        .unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_frame_index_wraps() {
        let record: SpriteRecord = serde_json::from_str(WALK_JSON).unwrap();
        let sprite = Sprite::from_record("walk", record, resolve_any).unwrap();
        assert_eq!(sprite.frame(2).rect, sprite.frame(0).rect);
    }
}
