//! Map tile definitions
//!
//! Tiles are plain values: a grid cell holds a copy of one of the shared
//! `const` definitions below. A tile carries two appearances, one for cells
//! inside the current field of view and one for cells only remembered.

use serde::{Deserialize, Serialize};

use super::colors::{self, Rgb};

/// A renderable cell appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Character to draw
    pub ch: char,
    /// Foreground color
    pub fg: Rgb,
    /// Background color
    pub bg: Rgb,
}

/// A single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Can be walked over
    pub walkable: bool,
    /// Does not block the field of view
    pub transparent: bool,
    /// Appearance when remembered but out of view
    pub dark: Glyph,
    /// Appearance when inside the field of view
    pub light: Glyph,
}

impl Tile {
    /// Appearance for the given lighting state
    pub fn appearance(&self, lit: bool) -> Glyph {
        if lit { self.light } else { self.dark }
    }
}

/// Appearance of a cell that has never been explored
pub const SHROUD: Glyph = Glyph {
    ch: ' ',
    fg: colors::WHITE,
    bg: colors::BLACK,
};

/// Open floor
pub const FLOOR: Tile = Tile {
    walkable: true,
    transparent: true,
    dark: Glyph {
        ch: ' ',
        fg: colors::WHITE,
        bg: Rgb(50, 50, 150),
    },
    light: Glyph {
        ch: ' ',
        fg: colors::WHITE,
        bg: Rgb(200, 180, 50),
    },
};

/// Solid wall
pub const WALL: Tile = Tile {
    walkable: false,
    transparent: false,
    dark: Glyph {
        ch: ' ',
        fg: colors::WHITE,
        bg: Rgb(0, 0, 100),
    },
    light: Glyph {
        ch: ' ',
        fg: colors::WHITE,
        bg: Rgb(130, 110, 50),
    },
};

/// Staircase leading down to the next level
pub const DOWN_STAIRS: Tile = Tile {
    walkable: true,
    transparent: true,
    dark: Glyph {
        ch: '>',
        fg: Rgb(0, 0, 100),
        bg: Rgb(50, 50, 150),
    },
    light: Glyph {
        ch: '>',
        fg: colors::WHITE,
        bg: Rgb(200, 180, 50),
    },
};
