// CPU-side texture data
//
// Textures are decoded once at load time; uploading them to a GPU is the job of
// whatever backend consumes the draw list.

use anyhow::Result;
use image::{GenericImageView, RgbaImage};

/// A decoded texture
#[derive(Debug, Clone)]
pub struct Texture {
    /// File name the texture was loaded from (e.g. `main.000.png`)
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixels: RgbaImage,
}

impl Texture {
    /// Decode a texture from encoded image bytes (PNG or JPEG)
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();

        Ok(Self {
            name: name.to_string(),
            width,
            height,
            pixels: img.to_rgba8(),
        })
    }

    /// Create a solid color texture (useful for testing)
    pub fn from_color(name: &str, width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            pixels: RgbaImage::from_pixel(width, height, image::Rgba(color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageOutputFormat;
    use std::io::Cursor;

    #[test]
    fn test_from_color() {
        let texture = Texture::from_color("bg.png", 4, 2, [255, 0, 0, 255]);
        assert_eq!(texture.width, 4);
        assert_eq!(texture.height, 2);
        assert_eq!(texture.pixels.get_pixel(3, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_from_png_bytes() {
        let img = RgbaImage::from_pixel(3, 5, image::Rgba([0, 0, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();

        let texture = Texture::from_bytes(&bytes, "blue.png").unwrap();
        assert_eq!((texture.width, texture.height), (3, 5));
        assert_eq!(texture.name, "blue.png");
    }

    #[test]
    fn test_from_garbage_bytes_fails() {
        assert!(Texture::from_bytes(b"not an image", "bad.png").is_err());
    }
}
