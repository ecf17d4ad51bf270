//! Level generation
//!
//! Carves up to `max_rooms` non-overlapping rectangular rooms into a solid
//! map, joins consecutive rooms with L-shaped corridors, places the player
//! in the first room and the downstairs at the center of the last.
//! Placement is first-fit: a candidate that collides with an accepted room
//! is abandoned, not resampled, so dense parameter sets can yield fewer
//! rooms than requested.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::corridor::tunnel_between;
use super::map::GameMap;
use super::rect::Rect;
use super::spawn::{self, cap_for_depth};
use crate::consts::{
    COMMON_MONSTER_CHANCE, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_MAX_ITEMS_PER_ROOM,
    DEFAULT_MAX_MONSTERS_PER_ROOM, DEFAULT_MAX_ROOMS, DEFAULT_ROOM_MIN_SIZE,
    DEFAULT_ROOM_MAX_SIZE,
};
use crate::data::tile;
use crate::entity::{Entity, EntityId};
use crate::rng::GameRng;

/// Invalid generation configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("max_rooms must be positive")]
    NoRooms,

    #[error("room sizes must be positive, got min {min} max {max}")]
    NonPositiveRoomSize { min: i32, max: i32 },

    #[error("room_min_size {min} exceeds room_max_size {max}")]
    RoomSizeInverted { min: i32, max: i32 },

    #[error("map dimensions must be positive, got {width}x{height}")]
    NonPositiveMapSize { width: i32, height: i32 },

    #[error("common_monster_chance must lie in [0, 1], got {0}")]
    ChanceOutOfRange(f64),
}

/// Everything the generator needs to build one level
///
/// All fields are required; `Default` carries the standard configuration.
/// Validation happens once, at the generation boundary, and rejects
/// mistakes loudly rather than clamping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of placement attempts (and upper bound on rooms)
    pub max_rooms: u32,

    /// Smallest room dimension sampled
    pub room_min_size: i32,

    /// Largest room dimension sampled
    pub room_max_size: i32,

    /// Map width in cells
    pub map_width: i32,

    /// Map height in cells
    pub map_height: i32,

    /// Flat per-room monster cap, used when no schedule is given
    pub max_monsters_per_room: u32,

    /// Flat per-room item cap, used when no schedule is given
    pub max_items_per_room: u32,

    /// Probability that a spawned monster is the common kind
    pub common_monster_chance: f64,

    /// Optional `(depth_threshold, cap)` schedule for monsters per room
    pub monster_schedule: Option<Vec<(u32, u32)>>,

    /// Optional `(depth_threshold, cap)` schedule for items per room
    pub item_schedule: Option<Vec<(u32, u32)>>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_rooms: DEFAULT_MAX_ROOMS,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            max_monsters_per_room: DEFAULT_MAX_MONSTERS_PER_ROOM,
            max_items_per_room: DEFAULT_MAX_ITEMS_PER_ROOM,
            common_monster_chance: COMMON_MONSTER_CHANCE,
            monster_schedule: None,
            item_schedule: None,
        }
    }
}

impl GenerationParams {
    /// Reject invalid configuration with a descriptive error
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_rooms == 0 {
            return Err(GenerationError::NoRooms);
        }
        if self.room_min_size <= 0 || self.room_max_size <= 0 {
            return Err(GenerationError::NonPositiveRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.room_min_size > self.room_max_size {
            return Err(GenerationError::RoomSizeInverted {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.map_width <= 0 || self.map_height <= 0 {
            return Err(GenerationError::NonPositiveMapSize {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if !(0.0..=1.0).contains(&self.common_monster_chance) {
            return Err(GenerationError::ChanceOutOfRange(self.common_monster_chance));
        }
        Ok(())
    }

    /// Monster cap per room at the given depth
    pub fn monster_cap(&self, depth: u32) -> u32 {
        match &self.monster_schedule {
            Some(schedule) => cap_for_depth(schedule, depth),
            None => self.max_monsters_per_room,
        }
    }

    /// Item cap per room at the given depth
    pub fn item_cap(&self, depth: u32) -> u32 {
        match &self.item_schedule {
            Some(schedule) => cap_for_depth(schedule, depth),
            None => self.max_items_per_room,
        }
    }
}

/// Generate a new dungeon level.
///
/// The player entity is inserted into the new map and moved to the first
/// accepted room's center; its fresh id is returned alongside the map.
pub fn generate_dungeon(
    params: &GenerationParams,
    depth: u32,
    player: Entity,
    rng: &mut GameRng,
) -> Result<(GameMap, EntityId), GenerationError> {
    params.validate()?;

    let mut map = GameMap::new(params.map_width, params.map_height);
    let player_id = map.add_entity(player);

    let monster_cap = params.monster_cap(depth);
    let item_cap = params.item_cap(depth);

    let mut rooms: Vec<Rect> = Vec::new();
    for _ in 0..params.max_rooms {
        let room_width = rng.range_inclusive(params.room_min_size, params.room_max_size);
        let room_height = rng.range_inclusive(params.room_min_size, params.room_max_size);

        // Top-left placement keeping the whole bounding box on the map.
        let max_x = params.map_width - room_width - 1;
        let max_y = params.map_height - room_height - 1;
        if max_x < 0 || max_y < 0 {
            continue;
        }
        let x = rng.range_inclusive(0, max_x);
        let y = rng.range_inclusive(0, max_y);

        let new_room = Rect::new(x, y, room_width, room_height);

        if rooms.iter().any(|other| new_room.intersects(other)) {
            continue;
        }

        for (cx, cy) in new_room.inner() {
            map.set_tile(cx, cy, tile::FLOOR);
        }

        if rooms.is_empty() {
            // The first room holds the player.
            let (cx, cy) = new_room.center();
            if let Some(p) = map.entity_mut(player_id) {
                p.x = cx;
                p.y = cy;
            }
        } else {
            let previous = rooms[rooms.len() - 1].center();
            for (cx, cy) in tunnel_between(rng, previous, new_room.center()) {
                map.set_tile(cx, cy, tile::FLOOR);
            }
        }

        spawn::populate_room(
            &mut map,
            &new_room,
            monster_cap,
            item_cap,
            params.common_monster_chance,
            rng,
        );
        rooms.push(new_room);
    }

    // The last accepted room's center becomes the descent point.
    if let Some(last) = rooms.last() {
        let (sx, sy) = last.center();
        map.set_tile(sx, sy, tile::DOWN_STAIRS);
        map.downstairs = (sx, sy);
    }
    map.rooms = rooms;

    Ok((map, player_id))
}
