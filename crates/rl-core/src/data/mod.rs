//! Shared appearance data: colors, glyphs, and tile definitions.

pub mod colors;
pub mod tile;

pub use colors::Rgb;
pub use tile::{Glyph, Tile};
