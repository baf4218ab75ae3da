// Camera for the 2D world view
//
// World space is in pixels with y pointing down, matching image space.

use glam::Vec2;

/// 2D camera with a fixed-size view
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Center of the view in world space
    pub position: Vec2,
    /// View size in world pixels
    viewport_size: Vec2,
}

impl Camera {
    /// Create a camera centered at `position`
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            viewport_size: Vec2::new(viewport_width, viewport_height),
        }
    }

    /// Camera parked in the top-left corner of the world, showing `[0, size]`
    pub fn at_origin(viewport_width: f32, viewport_height: f32) -> Self {
        Self::new(
            Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
            viewport_width,
            viewport_height,
        )
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn half_extent(&self) -> Vec2 {
        self.viewport_size / 2.0
    }

    /// Dead-zone follow
    ///
    /// Each axis snaps to `target` only while the target is strictly more than
    /// half a view away from both world edges on that axis; otherwise the
    /// camera stays where it is.
    pub fn follow(&mut self, target: Vec2, world_size: Vec2) {
        let half = self.half_extent();

        if target.x > half.x && target.x < world_size.x - half.x {
            self.position.x = target.x;
        }
        if target.y > half.y && target.y < world_size.y - half.y {
            self.position.y = target.y;
        }
    }
}
