// Central asset registry

use super::loader::{file_name_key, file_stem_key, list_files, AssetLoader, AssetType};
use super::{AssetError, AssetHandle, Sprite, SpriteHandle, SpriteRecord, Texture, TextureHandle};
use anyhow::Result;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Owns every loaded texture and sprite for the lifetime of the game
///
/// Names are resolved to handles once; after that, handles index straight into
/// the tables. A handle is only valid for the registry that produced it.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    textures: Vec<Texture>,
    texture_names: HashMap<String, TextureHandle>,
    sprites: Vec<Sprite>,
    sprite_names: HashMap<String, SpriteHandle>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load spritesheets and sprite definitions from the standard directories
    pub fn load(&mut self, loader: &AssetLoader) -> Result<(), AssetError> {
        let sheets = self.load_textures_from_dir(&loader.type_directory(AssetType::Spritesheet))?;
        let sprites = self.load_sprites(loader)?;
        info!("Loaded {} spritesheets and {} sprites", sheets, sprites);
        Ok(())
    }

    /// Store a texture under its name, replacing any texture with the same name
    pub fn insert_texture(&mut self, texture: Texture) -> TextureHandle {
        if let Some(&handle) = self.texture_names.get(&texture.name) {
            self.textures[handle.index()] = texture;
            return handle;
        }

        let handle = AssetHandle::new(self.textures.len());
        self.texture_names.insert(texture.name.clone(), handle);
        self.textures.push(texture);
        handle
    }

    /// Decode and store one image file, keyed by its file name
    pub fn load_texture_file(&mut self, path: &Path) -> Result<TextureHandle> {
        let bytes = std::fs::read(path)?;
        let texture = Texture::from_bytes(&bytes, &file_name_key(path))?;
        Ok(self.insert_texture(texture))
    }

    /// Load every PNG in `dir`
    ///
    /// Images that fail to decode are logged and left out. A missing directory
    /// is [`AssetError::MissingFile`]. Returns the number of textures loaded.
    pub fn load_textures_from_dir(&mut self, dir: &Path) -> Result<usize, AssetError> {
        let mut loaded = 0;

        for path in list_files(dir, AssetType::Spritesheet.extensions())? {
            match self.load_texture_file(&path) {
                Ok(_) => {
                    debug!("Loaded texture {}", path.display());
                    loaded += 1;
                }
                Err(e) => warn!("Failed to load texture {}: {:#}", path.display(), e),
            }
        }

        Ok(loaded)
    }

    /// Load every sprite definition from the sprites directory
    ///
    /// A sprite file that cannot be read, parsed or resolved (e.g. its
    /// spritesheet failed to decode) is logged and skipped; whatever needs it
    /// later fails its own lookup. Only a missing directory is an error.
    pub fn load_sprites(&mut self, loader: &AssetLoader) -> Result<usize, AssetError> {
        let mut loaded = 0;

        for path in loader.list_assets(AssetType::Sprite)? {
            let inserted = loader
                .read_json::<SpriteRecord>(&path)
                .and_then(|record| self.insert_sprite_record(&file_stem_key(&path), record));

            match inserted {
                Ok(_) => loaded += 1,
                Err(e) => warn!("Skipping sprite {}: {}", path.display(), e),
            }
        }

        Ok(loaded)
    }

    /// Validate a sprite record and store it under `name`
    pub fn insert_sprite_record(
        &mut self,
        name: &str,
        record: SpriteRecord,
    ) -> Result<SpriteHandle, AssetError> {
        let sprite = Sprite::from_record(name, record, |sheet| self.texture_handle(sheet))?;
        debug!("Loaded sprite '{}' ({} frames)", name, sprite.frame_count());

        if let Some(&handle) = self.sprite_names.get(name) {
            self.sprites[handle.index()] = sprite;
            return Ok(handle);
        }

        let handle = AssetHandle::new(self.sprites.len());
        self.sprite_names.insert(name.to_string(), handle);
        self.sprites.push(sprite);
        Ok(handle)
    }

    /// Resolve a texture by file name
    pub fn texture_handle(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.texture_names
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownTexture(name.to_string()))
    }

    /// Resolve a sprite by name
    pub fn sprite_handle(&self, name: &str) -> Result<SpriteHandle, AssetError> {
        self.sprite_names
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
    }

    /// Get a texture by handle
    pub fn texture(&self, handle: TextureHandle) -> &Texture {
        &self.textures[handle.index()]
    }

    /// Get a sprite by handle
    pub fn sprite(&self, handle: SpriteHandle) -> &Sprite {
        &self.sprites[handle.index()]
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
            sprite_count: self.sprites.len(),
        }
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub texture_count: usize,
    pub sprite_count: usize,
}
