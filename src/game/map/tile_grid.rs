// Binary tile-grid wire format
//
// Layout (little-endian):
//   [cols: u16][rows: u16] then rows * cols tile ids as u16, row-major.
// The whole blob is base64 encoded inside map section JSON.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::engine::assets::AssetError;

/// Size of the `[cols][rows]` header in bytes
pub const HEADER_LEN: usize = 4;

/// Decoded tile ids of one map layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    ids: Vec<u16>,
}

impl TileGrid {
    /// Build a grid from row-major ids
    ///
    /// Fails when `ids.len() != rows * cols` or a dimension does not fit in a `u16`.
    pub fn new(rows: usize, cols: usize, ids: Vec<u16>) -> Result<Self, AssetError> {
        if rows > u16::MAX as usize || cols > u16::MAX as usize {
            return Err(AssetError::Format(format!(
                "tile grid {rows}x{cols} exceeds the 16-bit size limit"
            )));
        }
        if ids.len() != rows * cols {
            return Err(AssetError::Format(format!(
                "tile grid {rows}x{cols} needs {} ids, got {}",
                rows * cols,
                ids.len()
            )));
        }
        Ok(Self { rows, cols, ids })
    }

    /// Grid of `rows` x `cols` cells all holding `id`
    pub fn filled(rows: usize, cols: usize, id: u16) -> Result<Self, AssetError> {
        Self::new(rows, cols, vec![id; rows * cols])
    }

    /// Parse the raw (already base64-decoded) wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.len() < HEADER_LEN {
            return Err(AssetError::Format(format!(
                "tile grid is {} bytes, shorter than its {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }

        let cols = u16::from_le_bytes([bytes[0], bytes[1]]) as usize;
        let rows = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;
        let expected = HEADER_LEN + 2 * rows * cols;
        if bytes.len() < expected {
            return Err(AssetError::Format(format!(
                "tile grid {rows}x{cols} needs {expected} bytes, got {}",
                bytes.len()
            )));
        }

        let ids = bytes[HEADER_LEN..expected]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self { rows, cols, ids })
    }

    /// Decode a base64 tile-grid string
    pub fn decode(encoded: &str) -> Result<Self, AssetError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AssetError::Format(format!("tile grid is not valid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + 2 * self.ids.len());
        bytes.extend_from_slice(&(self.cols as u16).to_le_bytes());
        bytes.extend_from_slice(&(self.rows as u16).to_le_bytes());
        for id in &self.ids {
            bytes.extend_from_slice(&id.to_le_bytes());
        }
        bytes
    }

    /// Serialize to the base64 form stored in map sections
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile id at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        if row < self.rows && col < self.cols {
            Some(self.ids[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, id: u16) {
        if row < self.rows && col < self.cols {
            self.ids[row * self.cols + col] = id;
        }
    }

    /// All ids in row-major order
    pub fn ids(&self) -> &[u16] {
        &self.ids
    }
}
