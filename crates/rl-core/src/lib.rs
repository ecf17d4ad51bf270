//! rl-core: dungeon generation and turn resolution for a grid roguelike
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the embedding frontend feeds
//! discrete player actions in and reads tiles, masks, and entities back
//! out for drawing.

pub mod action;
pub mod combat;
pub mod data;
pub mod dungeon;
pub mod entity;
pub mod hud;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoop, GameState, Mode, TickResult, process_enemy_actors};
pub use rng::GameRng;
