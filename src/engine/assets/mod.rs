// Asset management system
//
// Provides one-time loading of textures and sprites into a registry that hands
// out typed handles. Lookups by name happen at load or construction time only.

mod handle;
mod loader;
mod registry;
mod sprite;
mod texture;

pub use handle::{AssetHandle, SpriteAsset, SpriteHandle, TextureAsset, TextureHandle};
pub use loader::{file_name_key, file_stem_key, list_files, AssetLoader, AssetType};
pub use registry::{AssetRegistry, AssetStats};
pub use sprite::{Alignment, Frame, FrameRecord, Sprite, SpriteRecord, WrapMode};
pub use texture::Texture;

use std::path::PathBuf;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Malformed asset data: {0}")]
    Format(String),

    #[error("Unknown tile id: {0}")]
    UnknownTile(String),

    #[error("Unknown sprite: {0}")]
    UnknownSprite(String),

    #[error("Unknown texture: {0}")]
    UnknownTexture(String),

    #[error("Required file missing: {}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Malformed data (bad tile grid, empty sprite)
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Reference to something that was never loaded
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownTile(_) | Self::UnknownSprite(_) | Self::UnknownTexture(_)
        )
    }
}
