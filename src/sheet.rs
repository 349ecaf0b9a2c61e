//! Sprite sheet frame tables
//!
//! A sheet manifest names the rectangular frames inside one image. It is
//! stored as a `.ron` file next to the image it describes:
//!
//! ```ron
//! (
//!     image: "player.png",
//!     frames: [
//!         (name: "idle", x: 0.0, y: 0.0, w: 16.0, h: 16.0),
//!         (name: "run_0", x: 16.0, y: 0.0, w: 16.0, h: 16.0),
//!     ],
//! )
//! ```
//!
//! Manifests are authored data, so unlike element rects they are validated
//! on load: duplicate frame names and negative frame sizes are rejected.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use macroquad::math::Rect;
use macroquad::texture::Texture2D;
use serde::{Deserialize, Serialize};

use crate::sprite::{Sprite, SpriteError};

/// Error type for sheet operations
#[derive(Debug)]
pub enum SheetError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
    SpriteError(SpriteError),
}

impl From<std::io::Error> for SheetError {
    fn from(e: std::io::Error) -> Self {
        SheetError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SheetError {
    fn from(e: ron::error::SpannedError) -> Self {
        SheetError::ParseError(e)
    }
}

impl From<ron::Error> for SheetError {
    fn from(e: ron::Error) -> Self {
        SheetError::SerializeError(e)
    }
}

impl From<SpriteError> for SheetError {
    fn from(e: SpriteError) -> Self {
        SheetError::SpriteError(e)
    }
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::IoError(e) => write!(f, "IO error: {}", e),
            SheetError::ParseError(e) => write!(f, "Parse error: {}", e),
            SheetError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SheetError::ValidationError(e) => write!(f, "Validation error: {}", e),
            SheetError::SpriteError(e) => write!(f, "Sprite error: {}", e),
        }
    }
}

impl std::error::Error for SheetError {}

/// A named rectangular frame inside a sheet image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame name, unique within the sheet
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Frame {
    /// The frame as a source rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Frame table for one sprite sheet image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Image filename, relative to the manifest file
    pub image: String,
    /// Named frames inside the image
    pub frames: Vec<Frame>,
}

impl SpriteSheet {
    /// Load and validate a manifest from a `.ron` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let text = std::fs::read_to_string(path)?;
        let sheet: SpriteSheet = ron::from_str(&text)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Write the manifest as pretty RON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SheetError> {
        self.validate()?;
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, text)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), SheetError> {
        let mut seen = HashSet::new();
        for frame in &self.frames {
            if frame.w < 0.0 || frame.h < 0.0 {
                return Err(SheetError::ValidationError(format!(
                    "frame '{}' has negative size",
                    frame.name
                )));
            }
            if !seen.insert(frame.name.as_str()) {
                return Err(SheetError::ValidationError(format!(
                    "duplicate frame name '{}'",
                    frame.name
                )));
            }
        }
        Ok(())
    }

    /// Look up a frame's source rectangle by name.
    pub fn frame(&self, name: &str) -> Option<Rect> {
        self.frames.iter().find(|f| f.name == name).map(Frame::rect)
    }

    /// Crop a sprite for the named frame out of the sheet texture.
    pub fn sprite(&self, texture: &Texture2D, name: &str) -> Option<Sprite> {
        self.frame(name)
            .map(|rect| Sprite::region(texture.clone(), rect))
    }

    /// Load a manifest and the image beside it, returning every frame as a
    /// named sprite sharing one texture.
    ///
    /// Requires an active macroquad window for the texture upload.
    pub fn load_sprites<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Sprite>, SheetError> {
        let path = path.as_ref();
        let sheet = Self::load(path)?;
        let image_path = match path.parent() {
            Some(dir) => dir.join(&sheet.image),
            None => sheet.image.clone().into(),
        };
        let texture = Sprite::from_file(image_path)?.texture().clone();

        let mut sprites = HashMap::new();
        for frame in &sheet.frames {
            sprites.insert(frame.name.clone(), Sprite::region(texture.clone(), frame.rect()));
        }
        Ok(sprites)
    }
}
