//! Level structure
//!
//! A `GameMap` owns the tile grid for one dungeon level, the visibility
//! masks, and the entities living on it. Maps are replaced wholesale when
//! the player descends; only the player entity survives the swap.

use serde::{Deserialize, Serialize};

use super::Rect;
use crate::data::tile::{self, Tile};
use crate::entity::{Entity, EntityId};

/// One dungeon level: tiles, masks, and entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    /// Width in cells
    pub width: i32,

    /// Height in cells
    pub height: i32,

    /// Tile grid, indexed `[x][y]`
    pub tiles: Vec<Vec<Tile>>,

    /// Cells inside the current field of view (replaced every update)
    pub visible: Vec<Vec<bool>>,

    /// Cells seen at some point (grows monotonically, never cleared)
    pub explored: Vec<Vec<bool>>,

    /// All entities on this level
    pub entities: Vec<Entity>,

    /// Rooms accepted during generation, in acceptance order
    pub rooms: Vec<Rect>,

    /// Location of the staircase to the next level
    pub downstairs: (i32, i32),

    /// Next entity id to assign
    next_entity_id: u32,
}

impl GameMap {
    /// Create a level filled with solid wall
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width,
            height,
            tiles: vec![vec![tile::WALL; h]; w],
            visible: vec![vec![false; h]; w],
            explored: vec![vec![false; h]; w],
            entities: Vec::new(),
            rooms: Vec::new(),
            downstairs: (0, 0),
            next_entity_id: 1,
        }
    }

    /// Check if a position lies on the map
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Tile at position
    pub fn tile(&self, x: i32, y: i32) -> &Tile {
        &self.tiles[x as usize][y as usize]
    }

    /// Overwrite the tile at position; out-of-bounds writes are ignored
    pub fn set_tile(&mut self, x: i32, y: i32, t: Tile) {
        if self.in_bounds(x, y) {
            self.tiles[x as usize][y as usize] = t;
        }
    }

    /// Check if a position is on the map and walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tiles[x as usize][y as usize].walkable
    }

    /// Check if a position is on the map and does not block sight
    pub fn is_transparent(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.tiles[x as usize][y as usize].transparent
    }

    /// Check if a cell is currently inside the field of view
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.visible[x as usize][y as usize]
    }

    /// Check if a cell has ever been seen
    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.explored[x as usize][y as usize]
    }

    /// Add an entity, assigning it a fresh id
    pub fn add_entity(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity from the level
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Get entity by id
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get mutable entity by id
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// First entity occupying a cell, if any
    pub fn entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.x == x && e.y == y)
    }

    /// Entity blocking movement into a cell, if any
    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|e| e.blocks_movement && e.x == x && e.y == y)
            .map(|e| e.id)
    }

    /// Entities with combat statistics (live actors and the player)
    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.fighter.is_some())
    }

    /// Appearance of a cell for drawing: the light variant inside the
    /// field of view, the dark variant when only remembered, and the
    /// shroud when never explored
    pub fn appearance(&self, x: i32, y: i32) -> tile::Glyph {
        if self.is_visible(x, y) {
            self.tile(x, y).light
        } else if self.is_explored(x, y) {
            self.tile(x, y).dark
        } else {
            tile::SHROUD
        }
    }
}
