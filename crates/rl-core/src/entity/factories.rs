//! Entity templates
//!
//! Each function returns a fresh entity at position (0, 0) with a
//! placeholder id; [`GameMap::add_entity`](crate::dungeon::GameMap::add_entity)
//! assigns the real id when the entity is placed.

use super::{Ai, Entity, Fighter};
use crate::data::colors;

/// The player character
pub fn player() -> Entity {
    Entity::actor('@', colors::PLAYER, "Player", Fighter::new(30, 2, 5), Ai::Player)
}

/// Common melee monster
pub fn orc() -> Entity {
    Entity::actor('o', colors::ORC, "Orc", Fighter::new(10, 0, 3), Ai::Hostile)
}

/// Rare, tougher melee monster
pub fn troll() -> Entity {
    Entity::actor('T', colors::TROLL, "Troll", Fighter::new(16, 1, 4), Ai::Hostile)
}

/// Healing consumable
pub fn health_potion() -> Entity {
    Entity::item('!', colors::HEALTH_POTION, "Health Potion")
}

/// Area damage scroll
pub fn fireball_scroll() -> Entity {
    Entity::item('~', colors::FIREBALL_SCROLL, "Fireball Scroll")
}

/// Crowd control scroll
pub fn confusion_scroll() -> Entity {
    Entity::item('~', colors::CONFUSION_SCROLL, "Confusion Scroll")
}

/// Single target damage scroll
pub fn lightning_scroll() -> Entity {
    Entity::item('~', colors::LIGHTNING_SCROLL, "Lightning Scroll")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_templates() {
        let p = player();
        assert_eq!(p.glyph, '@');
        assert_eq!(p.ai, Some(Ai::Player));
        assert_eq!(p.fighter.map(|f| (f.max_hp, f.defense, f.power)), Some((30, 2, 5)));

        let o = orc();
        assert_eq!(o.fighter.map(|f| (f.max_hp, f.defense, f.power)), Some((10, 0, 3)));
        assert_eq!(o.ai, Some(Ai::Hostile));

        let t = troll();
        assert_eq!(t.fighter.map(|f| (f.max_hp, f.defense, f.power)), Some((16, 1, 4)));
    }

    #[test]
    fn test_items_have_no_components() {
        for item in [
            health_potion(),
            fireball_scroll(),
            confusion_scroll(),
            lightning_scroll(),
        ] {
            assert!(item.fighter.is_none());
            assert!(item.ai.is_none());
            assert!(!item.blocks_movement);
        }
    }
}
