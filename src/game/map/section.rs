// Map records: tiles, tilesets and map sections

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::IntPoint;
use crate::engine::assets::AssetError;

/// Layer holding the collision hitboxes in exported map sections
pub const COLLISION_LAYER: usize = 1;

/// A tile definition from `tileset.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: i32,
    /// 0 is walkable, anything positive blocks movement
    pub hitbox_mode: i32,
    pub image_file_name: String,
    pub image_top_left_pos: IntPoint,
}

impl Tile {
    pub fn is_blocking(&self) -> bool {
        self.hitbox_mode > 0
    }
}

/// Tile definitions keyed by the decimal string form of their id
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Tileset {
    tiles: HashMap<String, Tile>,
}

impl Tileset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile under the key `tile.id.to_string()`
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.id.to_string(), tile);
    }

    /// Look up the tile a grid cell refers to
    pub fn get(&self, id: u16) -> Result<&Tile, AssetError> {
        let key = id.to_string();
        self.tiles
            .get(&key)
            .ok_or(AssetError::UnknownTile(key))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// One layer of a map section
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSectionLayer {
    /// Base64 tile-grid payload, see [`TileGrid`](super::TileGrid)
    pub tile_grid: String,
}

/// A map section (`map_sections/<name>.json`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapSection {
    pub layers: Vec<MapSectionLayer>,
}

impl MapSection {
    /// The layer collision is derived from
    pub fn collision_layer(&self) -> Result<&MapSectionLayer, AssetError> {
        self.layers.get(COLLISION_LAYER).ok_or_else(|| {
            AssetError::Format(format!(
                "map section has {} layers, collision layer {COLLISION_LAYER} is missing",
                self.layers.len()
            ))
        })
    }
}
