// Rendering front end
//
// Game code describes a frame as a sequence of draw commands against a
// `Canvas`. `DrawList` records them, `FrameBuffer` composites the recording
// into view-sized pixels and `Presenter` puts those pixels on the window.

mod camera;
mod frame;
mod gpu;

pub use camera::Camera;
pub use frame::FrameBuffer;
pub use gpu::Presenter;

use glam::Vec2;

use crate::core::IntRect;
use crate::engine::assets::TextureHandle;

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub texture: TextureHandle,
    /// Region of the texture to draw
    pub source: IntRect,
    /// World position the origin is placed at
    pub position: Vec2,
    /// Pivot inside the source region
    pub origin: Vec2,
    /// Mirror horizontally around the origin
    pub flip_x: bool,
}

/// A render target that accepts draw commands in painter's order
pub trait Canvas {
    /// Set the world-space view: `center` of the view and its `size` in pixels
    fn set_view(&mut self, center: Vec2, size: Vec2);

    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that records everything drawn into it
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    view_center: Vec2,
    view_size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn view_center(&self) -> Vec2 {
        self.view_center
    }

    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn set_view(&mut self, center: Vec2, size: Vec2) {
        self.view_center = center;
        self.view_size = size;
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
