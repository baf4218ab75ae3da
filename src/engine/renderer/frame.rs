// CPU compositor: turns a recorded draw list into view-sized RGBA pixels

use glam::Vec2;
use image::{Rgba, RgbaImage};

use super::{DrawCommand, DrawList};
use crate::engine::assets::{AssetRegistry, Texture};

const CLEAR_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One world pixel per frame buffer pixel, centered on the draw list's view
pub struct FrameBuffer {
    image: RgbaImage,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, CLEAR_COLOR),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Tightly packed RGBA rows, top row first
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Clear and draw every command in `list` in order
    pub fn compose(&mut self, list: &DrawList, assets: &AssetRegistry) {
        for pixel in self.image.pixels_mut() {
            *pixel = CLEAR_COLOR;
        }

        let size = Vec2::new(self.width() as f32, self.height() as f32);
        let view_min = list.view_center() - size / 2.0;

        for command in list.commands() {
            self.blit(command, assets.texture(command.texture), view_min);
        }
    }

    fn blit(&mut self, command: &DrawCommand, texture: &Texture, view_min: Vec2) {
        let source = command.source;
        let (w, h) = (source.width() as f32, source.height() as f32);
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        // World-space box covered by the quad
        let left = if command.flip_x {
            command.position.x + command.origin.x - w
        } else {
            command.position.x - command.origin.x
        };
        let top = command.position.y - command.origin.y;

        let (x_start, x_end) = pixel_span(left - view_min.x, w, self.width());
        let (y_start, y_end) = pixel_span(top - view_min.y, h, self.height());

        for dy in y_start..y_end {
            let wy = view_min.y + dy as f32 + 0.5;
            let ly = (command.origin.y + wy - command.position.y).floor();
            if ly < 0.0 || ly >= h {
                continue;
            }

            for dx in x_start..x_end {
                let wx = view_min.x + dx as f32 + 0.5;
                let offset = wx - command.position.x;
                let lx = if command.flip_x {
                    command.origin.x - offset
                } else {
                    command.origin.x + offset
                }
                .floor();
                if lx < 0.0 || lx >= w {
                    continue;
                }

                let sx = source.x1 + lx as i32;
                let sy = source.y1 + ly as i32;
                if sx < 0 || sy < 0 || sx as u32 >= texture.width || sy as u32 >= texture.height {
                    continue;
                }

                let src = *texture.pixels.get_pixel(sx as u32, sy as u32);
                let dst = self.image.get_pixel_mut(dx, dy);
                *dst = blend(src, *dst);
            }
        }
    }
}

/// Destination pixel range touched by a span starting `start` pixels into the
/// view, `len` pixels long, clipped to `[0, limit)`
fn pixel_span(start: f32, len: f32, limit: u32) -> (u32, u32) {
    let lo = start.floor().max(0.0);
    let hi = (start + len).ceil().min(limit as f32);
    if hi <= lo {
        return (0, 0);
    }
    (lo as u32, hi as u32)
}

/// Source-over with straight alpha
fn blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let a = src[3] as u32;
    match a {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - a;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
            Rgba([
                mix(src[0], dst[0]),
                mix(src[1], dst[1]),
                mix(src[2], dst[2]),
                (a + dst[3] as u32 * inv / 255) as u8,
            ])
        }
    }
}
