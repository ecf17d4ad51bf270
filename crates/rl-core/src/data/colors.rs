//! Color definitions

use serde::{Deserialize, Serialize};

/// An RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Basic palette
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Actor colors
pub const PLAYER: Rgb = Rgb(255, 255, 255);
pub const ORC: Rgb = Rgb(63, 127, 63);
pub const TROLL: Rgb = Rgb(0, 127, 0);
pub const CORPSE: Rgb = Rgb(191, 0, 0);

/// Item colors
pub const HEALTH_POTION: Rgb = Rgb(127, 0, 255);
pub const FIREBALL_SCROLL: Rgb = Rgb(255, 0, 0);
pub const CONFUSION_SCROLL: Rgb = Rgb(207, 63, 255);
pub const LIGHTNING_SCROLL: Rgb = Rgb(255, 255, 0);

/// Status bar colors
pub const BAR_LOW: Rgb = Rgb(191, 0, 0);
pub const BAR_HALF: Rgb = Rgb(255, 191, 0);
pub const BAR_FULL: Rgb = Rgb(0, 191, 0);
