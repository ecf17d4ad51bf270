//! Dungeon system
//!
//! Contains the tile grid, level generation, population, and visibility.

mod corridor;
mod generation;
mod map;
mod rect;
mod spawn;
mod vision;

pub use corridor::{bresenham_line, tunnel_between};
pub use generation::{GenerationError, GenerationParams, generate_dungeon};
pub use map::GameMap;
pub use rect::Rect;
pub use spawn::{ItemKind, MonsterKind, cap_for_depth, populate_room};
pub use vision::{in_sight, update_visibility};
