// Integer geometry shared by asset records and the collision grid

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Integer point in image pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<IntPoint> for IVec2 {
    fn from(p: IntPoint) -> Self {
        IVec2::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle `(x1, y1)`-`(x2, y2)` in spritesheet pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl IntRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle covering a whole `width` x `height` image
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Center pivot using integer halves, so odd sizes round toward the top-left
    pub fn half_size(&self) -> Vec2 {
        Vec2::new((self.width() / 2) as f32, (self.height() / 2) as f32)
    }
}

/// Clamp a signed grid index into `[0, len - 1]`
///
/// `len` must be non-zero.
pub fn clamp_index(index: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (index as i64).clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size() {
        let rect = IntRect::new(16, 8, 48, 40);
        assert_eq!(rect.width(), 32);
        assert_eq!(rect.height(), 32);
        assert_eq!(rect.half_size(), Vec2::new(16.0, 16.0));
    }

    #[test]
    fn test_odd_half_size_rounds_down() {
        let rect = IntRect::new(0, 0, 15, 21);
        assert_eq!(rect.half_size(), Vec2::new(7.0, 10.0));
    }

    #[test]
    fn test_rect_deserialize() {
        let rect: IntRect = serde_json::from_str(r#"{"x1":1,"y1":2,"x2":3,"y2":4}"#).unwrap();
        assert_eq!(rect, IntRect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-3, 10), 0);
        assert_eq!(clamp_index(4, 10), 4);
        assert_eq!(clamp_index(12, 10), 9);
        assert_eq!(clamp_index(i32::MAX, 1), 0);
    }
}
