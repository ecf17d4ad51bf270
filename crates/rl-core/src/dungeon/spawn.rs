//! Room population
//!
//! Scatters monsters and items into freshly generated rooms. Spawn counts
//! are uniform draws up to a cap; caps come either from the flat per-room
//! limits or from a floor-depth schedule. A sampled cell that is already
//! occupied is skipped silently, never resampled.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{GameMap, Rect};
use crate::entity::{Entity, factories};
use crate::rng::GameRng;

/// Monster species available to the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MonsterKind {
    Orc,
    Troll,
}

impl MonsterKind {
    /// Build a fresh entity of this kind
    pub fn build(self) -> Entity {
        match self {
            MonsterKind::Orc => factories::orc(),
            MonsterKind::Troll => factories::troll(),
        }
    }
}

/// Item kinds available to the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ItemKind {
    HealthPotion,
    FireballScroll,
    ConfusionScroll,
    LightningScroll,
}

impl ItemKind {
    /// Build a fresh entity of this kind
    pub fn build(self) -> Entity {
        match self {
            ItemKind::HealthPotion => factories::health_potion(),
            ItemKind::FireballScroll => factories::fireball_scroll(),
            ItemKind::ConfusionScroll => factories::confusion_scroll(),
            ItemKind::LightningScroll => factories::lightning_scroll(),
        }
    }
}

/// Cumulative probability tiers for item drops.
///
/// Checked in declaration order so the overlapping ranges resolve
/// deterministically to the first matching tier.
const ITEM_TIERS: [(f64, ItemKind); 3] = [
    (0.7, ItemKind::HealthPotion),
    (0.8, ItemKind::FireballScroll),
    (0.9, ItemKind::ConfusionScroll),
];

/// Item tier for a roll in `[0, 1)`
fn pick_item(roll: f64) -> ItemKind {
    for &(threshold, kind) in &ITEM_TIERS {
        if roll < threshold {
            return kind;
        }
    }
    ItemKind::LightningScroll
}

/// Resolve a floor-depth schedule: the cap of the highest threshold that
/// does not exceed `depth`, or 0 when no entry applies yet
pub fn cap_for_depth(schedule: &[(u32, u32)], depth: u32) -> u32 {
    schedule
        .iter()
        .filter(|(threshold, _)| *threshold <= depth)
        .max_by_key(|(threshold, _)| *threshold)
        .map(|(_, cap)| *cap)
        .unwrap_or(0)
}

/// Scatter monsters and items into one room.
///
/// Draws `U(0, monster_cap)` monsters and `U(0, item_cap)` items, each at
/// a uniformly random interior cell. Occupied cells lose their spawn.
pub fn populate_room(
    map: &mut GameMap,
    room: &Rect,
    monster_cap: u32,
    item_cap: u32,
    common_monster_chance: f64,
    rng: &mut GameRng,
) {
    let monster_count = rng.range(monster_cap + 1);
    for _ in 0..monster_count {
        let (x, y) = room.random_interior_point(rng);
        if map.entity_at(x, y).is_some() {
            continue;
        }
        let kind = if rng.chance(common_monster_chance) {
            MonsterKind::Orc
        } else {
            MonsterKind::Troll
        };
        let mut monster = kind.build();
        monster.x = x;
        monster.y = y;
        map.add_entity(monster);
    }

    let item_count = rng.range(item_cap + 1);
    for _ in 0..item_count {
        let (x, y) = room.random_interior_point(rng);
        if map.entity_at(x, y).is_some() {
            continue;
        }
        let mut item = pick_item(rng.unit()).build();
        item.x = x;
        item.y = y;
        map.add_entity(item);
    }
}
