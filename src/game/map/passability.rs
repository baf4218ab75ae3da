// Passability grid built from a collision layer

use super::section::Tileset;
use super::tile_grid::TileGrid;
use crate::engine::assets::AssetError;

/// Side length of one grid cell in pixels
pub const CELL_SIZE: i32 = 8;

/// Rectangular grid of blocking flags, `true` = blocking
///
/// Built once when a level loads and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassabilityGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl PassabilityGrid {
    /// Grid with every cell passable
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build from nested rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, AssetError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(AssetError::Format(format!(
                "row {bad} has {} cells, expected {cols}",
                rows[bad].len()
            )));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Map every tile id through the tileset
    ///
    /// Fails on the first id with no tileset entry; no grid is produced then.
    pub fn from_tile_grid(grid: &TileGrid, tileset: &Tileset) -> Result<Self, AssetError> {
        let cells = grid
            .ids()
            .iter()
            .map(|&id| tileset.get(id).map(|tile| tile.is_blocking()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
        })
    }

    /// Decode a base64 collision layer straight into a passability grid
    pub fn decode(encoded: &str, tileset: &Tileset) -> Result<Self, AssetError> {
        Self::from_tile_grid(&TileGrid::decode(encoded)?, tileset)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether (`row`, `col`) blocks; out-of-range cells do not
    pub fn is_blocking(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn set_blocking(&mut self, row: usize, col: usize, blocking: bool) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = blocking;
        }
    }

    /// Map size in pixels
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.cols as i32 * CELL_SIZE, self.rows as i32 * CELL_SIZE)
    }
}
