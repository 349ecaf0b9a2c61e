//! Sprite images
//!
//! A `Sprite` is a macroquad texture plus an optional source rectangle, so
//! one sheet texture can back many sprites (one frame each). Image files
//! are decoded with the `image` crate (png/jpeg/bmp) and uploaded with
//! nearest-neighbor filtering, which keeps pixel art crisp when scaled.
//!
//! Decoding is split from the texture upload: decoding failures surface as
//! `SpriteError` before any GPU work happens.

use macroquad::prelude::*;

/// Error type for sprite loading
#[derive(Debug)]
pub enum SpriteError {
    IoError(std::io::Error),
    ImageError(image::ImageError),
}

impl From<std::io::Error> for SpriteError {
    fn from(e: std::io::Error) -> Self {
        SpriteError::IoError(e)
    }
}

impl From<image::ImageError> for SpriteError {
    fn from(e: image::ImageError) -> Self {
        SpriteError::ImageError(e)
    }
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpriteError::IoError(e) => write!(f, "IO error: {}", e),
            SpriteError::ImageError(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for SpriteError {}

/// An image drawn for a game element.
///
/// Either a whole texture, or one frame of a sheet texture when a source
/// rectangle is set. Cloning is cheap; the texture is shared.
#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Texture2D,
    source: Option<Rect>,
}

impl Sprite {
    /// Load a sprite from an image file (png/jpeg/bmp).
    ///
    /// Requires an active macroquad window for the texture upload.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, SpriteError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Load a sprite from in-memory encoded image bytes.
    ///
    /// Requires an active macroquad window for the texture upload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SpriteError> {
        let (width, height, rgba) = decode_rgba(bytes)?;
        let texture = Texture2D::from_rgba8(width as u16, height as u16, &rgba);
        texture.set_filter(FilterMode::Nearest);
        Ok(Self {
            texture,
            source: None,
        })
    }

    /// Wrap an existing texture as a whole-texture sprite.
    pub fn from_texture(texture: Texture2D) -> Self {
        Self {
            texture,
            source: None,
        }
    }

    /// One frame cropped out of a sheet texture.
    pub fn region(texture: Texture2D, frame: Rect) -> Self {
        Self {
            texture,
            source: Some(frame),
        }
    }

    /// The backing texture.
    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    /// The source frame within the texture, if this sprite is cropped.
    pub fn source(&self) -> Option<Rect> {
        self.source
    }

    /// Size of the drawn image: the source frame if cropped, otherwise the
    /// whole texture.
    pub fn size(&self) -> Vec2 {
        match self.source {
            Some(frame) => frame.size(),
            None => vec2(self.texture.width(), self.texture.height()),
        }
    }

    /// Draw the sprite with its top-left corner at `(x, y)`.
    pub fn draw(&self, x: f32, y: f32) {
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                source: self.source,
                ..Default::default()
            },
        );
    }
}

/// Decode encoded image bytes to raw RGBA dimensions and pixels.
fn decode_rgba(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), SpriteError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    Ok((rgba.width(), rgba.height(), rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    // A 4x3 solid red PNG, encoded in memory.
    fn tiny_png() -> Vec<u8> {
        let img = RgbaImage::from_pixel(4, 3, Rgba([255, 0, 0, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_rgba_dimensions_and_pixels() {
        let (width, height, rgba) = decode_rgba(&tiny_png()).unwrap();
        assert_eq!(width, 4);
        assert_eq!(height, 3);
        assert_eq!(rgba.len(), 4 * 3 * 4);
        assert_eq!(&rgba[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_rgba(b"not an image").unwrap_err();
        assert!(matches!(err, SpriteError::ImageError(_)));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        // Fails in fs::read, before any texture work.
        let err = Sprite::from_file("no/such/sprite.png").unwrap_err();
        assert!(matches!(err, SpriteError::IoError(_)));
    }
}
