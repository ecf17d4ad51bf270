//! Entities: actors, items, and their components
//!
//! An entity is a position plus render data plus optional components.
//! Components are tagged fields checked explicitly: a `Fighter` makes an
//! entity damageable, an `Ai` makes it act (or, for the player, marks it
//! as alive and driven by input).

mod fighter;

pub mod ai;
pub mod factories;

pub use ai::{AiAction, hostile_turn};
pub use fighter::Fighter;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::CORPSE_GLYPH;
use crate::data::colors;
use crate::data::colors::Rgb;

/// Unique identifier for entity instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Behavior attached to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Driven by external input. Present so the one-shot death transition
    /// applies to the player too; never run by the enemy batch.
    Player,
    /// Closes distance to the player and attacks when adjacent.
    Hostile,
}

/// Draw layering consumed by renderers: corpses under items under actors
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum RenderOrder {
    Corpse = 0,
    Item = 1,
    Actor = 2,
}

/// A placed game object: the player, a monster, an item, or a corpse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, assigned when added to a map
    pub id: EntityId,

    /// Position
    pub x: i32,
    pub y: i32,

    /// Display character
    pub glyph: char,

    /// Display color
    pub color: Rgb,

    /// Display name
    pub name: String,

    /// Other entities cannot enter this cell
    pub blocks_movement: bool,

    /// Draw layer
    pub render_order: RenderOrder,

    /// Combat statistics, if damageable
    pub fighter: Option<Fighter>,

    /// Behavior, if any
    pub ai: Option<Ai>,
}

impl Entity {
    /// Create an actor: blocks movement, drawn on top
    pub fn actor(glyph: char, color: Rgb, name: &str, fighter: Fighter, ai: Ai) -> Self {
        Self {
            id: EntityId(0),
            x: 0,
            y: 0,
            glyph,
            color,
            name: name.to_string(),
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            fighter: Some(fighter),
            ai: Some(ai),
        }
    }

    /// Create an item: walkable over, no components
    pub fn item(glyph: char, color: Rgb, name: &str) -> Self {
        Self {
            id: EntityId(0),
            x: 0,
            y: 0,
            glyph,
            color,
            name: name.to_string(),
            blocks_movement: false,
            render_order: RenderOrder::Item,
            fighter: None,
            ai: None,
        }
    }

    /// An actor with its AI cleared is a corpse, not alive
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Chebyshev distance to a cell (diagonal steps count as one)
    pub fn chebyshev_distance(&self, x: i32, y: i32) -> i32 {
        (self.x - x).abs().max((self.y - y).abs())
    }

    /// Convert a just-slain actor into a corpse.
    ///
    /// Clearing the AI reference is what makes the transition one-shot:
    /// a later lethal hp write finds no AI attached and does not re-enter.
    pub fn die(&mut self) {
        self.ai = None;
        self.glyph = CORPSE_GLYPH;
        self.color = colors::CORPSE;
        self.blocks_movement = false;
        self.render_order = RenderOrder::Corpse;
        self.name = format!("Remains of {}", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpse_transition() {
        let mut orc = factories::orc();
        assert!(orc.is_alive());
        assert!(orc.blocks_movement);

        orc.die();

        assert!(!orc.is_alive());
        assert!(orc.ai.is_none());
        assert!(!orc.blocks_movement);
        assert_eq!(orc.glyph, CORPSE_GLYPH);
        assert_eq!(orc.color, colors::CORPSE);
        assert_eq!(orc.render_order, RenderOrder::Corpse);
        assert_eq!(orc.name, "Remains of Orc");
    }

    #[test]
    fn test_render_order_layers() {
        assert!(RenderOrder::Corpse < RenderOrder::Item);
        assert!(RenderOrder::Item < RenderOrder::Actor);
    }

    #[test]
    fn test_chebyshev_distance() {
        let mut e = factories::orc();
        e.x = 5;
        e.y = 5;
        assert_eq!(e.chebyshev_distance(5, 5), 0);
        assert_eq!(e.chebyshev_distance(6, 6), 1);
        assert_eq!(e.chebyshev_distance(2, 7), 3);
    }
}
