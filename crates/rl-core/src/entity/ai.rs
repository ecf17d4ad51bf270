//! Hostile actor behavior
//!
//! One decision per turn: idle while unseen, attack when adjacent to the
//! player, otherwise take a single step toward them. Because the field of
//! view is symmetric, "the player can see this monster" doubles as "this
//! monster can see the player".

use super::{Ai, EntityId};
use crate::dungeon::GameMap;

/// What a hostile actor decided to do with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// No useful move was available
    Waited,
    /// Stepped to a new position
    Moved(i32, i32),
    /// Adjacent to the player; the caller resolves the attack
    AttackedPlayer,
}

/// Run one turn of hostile AI for the given actor.
///
/// Movement is applied directly; attacks are only reported, since combat
/// resolution needs state the map does not own (messages, mode).
pub fn hostile_turn(map: &mut GameMap, id: EntityId, player_id: EntityId) -> AiAction {
    let Some(actor) = map.entity(id) else {
        return AiAction::Waited;
    };
    if actor.ai != Some(Ai::Hostile) {
        return AiAction::Waited;
    }
    let (mx, my) = (actor.x, actor.y);

    // Out of the player's sight means out of the fight.
    if !map.is_visible(mx, my) {
        return AiAction::Waited;
    }

    let Some(player) = map.entity(player_id) else {
        return AiAction::Waited;
    };
    if !player.is_alive() {
        return AiAction::Waited;
    }
    let (px, py) = (player.x, player.y);

    if (mx - px).abs().max((my - py).abs()) <= 1 {
        return AiAction::AttackedPlayer;
    }

    // Single greedy step toward the player.
    let (nx, ny) = (mx + (px - mx).signum(), my + (py - my).signum());
    if map.is_walkable(nx, ny) && map.blocking_entity_at(nx, ny).is_none() {
        if let Some(actor) = map.entity_mut(id) {
            actor.x = nx;
            actor.y = ny;
        }
        return AiAction::Moved(nx, ny);
    }

    AiAction::Waited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tile;
    use crate::dungeon::update_visibility;
    use crate::entity::factories;

    fn arena() -> GameMap {
        let mut map = GameMap::new(20, 20);
        for x in 0..20 {
            for y in 0..20 {
                map.set_tile(x, y, tile::FLOOR);
            }
        }
        map
    }

    fn place(map: &mut GameMap, mut e: crate::entity::Entity, x: i32, y: i32) -> EntityId {
        e.x = x;
        e.y = y;
        map.add_entity(e)
    }

    #[test]
    fn test_adjacent_monster_attacks() {
        let mut map = arena();
        let player_id = place(&mut map, factories::player(), 10, 10);
        let orc_id = place(&mut map, factories::orc(), 11, 11);
        update_visibility(&mut map, (10, 10), 8);

        assert_eq!(hostile_turn(&mut map, orc_id, player_id), AiAction::AttackedPlayer);
    }

    #[test]
    fn test_distant_monster_closes_in() {
        let mut map = arena();
        let player_id = place(&mut map, factories::player(), 10, 10);
        let orc_id = place(&mut map, factories::orc(), 14, 10);
        update_visibility(&mut map, (10, 10), 8);

        assert_eq!(hostile_turn(&mut map, orc_id, player_id), AiAction::Moved(13, 10));
        let orc = map.entity(orc_id).unwrap();
        assert_eq!((orc.x, orc.y), (13, 10));
    }

    #[test]
    fn test_unseen_monster_idles() {
        let mut map = arena();
        let player_id = place(&mut map, factories::player(), 2, 2);
        let orc_id = place(&mut map, factories::orc(), 18, 18);
        update_visibility(&mut map, (2, 2), 8);

        assert_eq!(hostile_turn(&mut map, orc_id, player_id), AiAction::Waited);
        let orc = map.entity(orc_id).unwrap();
        assert_eq!((orc.x, orc.y), (18, 18));
    }

    #[test]
    fn test_blocked_step_waits() {
        let mut map = arena();
        let player_id = place(&mut map, factories::player(), 10, 10);
        let orc_id = place(&mut map, factories::orc(), 13, 10);
        // Another actor already stands on the approach cell.
        place(&mut map, factories::troll(), 12, 10);
        update_visibility(&mut map, (10, 10), 8);

        assert_eq!(hostile_turn(&mut map, orc_id, player_id), AiAction::Waited);
    }

    #[test]
    fn test_dead_player_is_ignored() {
        let mut map = arena();
        let mut dead = factories::player();
        dead.die();
        let player_id = place(&mut map, dead, 10, 10);
        let orc_id = place(&mut map, factories::orc(), 11, 10);
        update_visibility(&mut map, (10, 10), 8);

        assert_eq!(hostile_turn(&mut map, orc_id, player_id), AiAction::Waited);
    }
}
