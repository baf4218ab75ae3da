// Tile maps
//
// - `tile_grid`: the base64 binary tile-id format used by map sections
// - `section`: tileset and map section records
// - `passability`: the blocking grid actors collide against

pub mod passability;
pub mod section;
pub mod tile_grid;

pub use passability::{PassabilityGrid, CELL_SIZE};
pub use section::{MapSection, MapSectionLayer, Tile, Tileset, COLLISION_LAYER};
pub use tile_grid::TileGrid;
