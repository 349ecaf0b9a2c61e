//! arcade-tools: utilities for 2D arcade hobby games
//!
//! A small toolbox shared between macroquad arcade projects:
//! - `GameElement`: position, size, velocity and collidability of one
//!   on-screen entity
//! - `Element`: the per-frame update / collision / draw seam that game
//!   entity types implement
//! - `Sprite` images and RON sprite-sheet frame tables
//! - Collision detection helpers and frame timing
//!
//! The element's rectangle is macroquad's `Rect`, held by composition:
//! position and size are reached as `element.rect.x` and friends, and the
//! rect is mutated in place as the entity moves.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod clock;
pub mod collision;
pub mod element;
pub mod sheet;
pub mod sprite;

// Re-export main types
pub use clock::{FixedStep, FrameClock};
pub use collision::{collisions_with, elements_collide, process_collisions, rects_overlap};
pub use element::{Element, GameElement};
pub use sheet::{Frame, SheetError, SpriteSheet};
pub use sprite::{Sprite, SpriteError};
