//! Player actions
//!
//! Actions arrive as discrete values from an external input layer. Invalid
//! movement is a silent no-op rather than an error: bad destinations come
//! from routine input and AI decisions, not from programmer mistakes.

use crate::dungeon::GenerationError;
use crate::entity::EntityId;
use crate::gameloop::GameState;

/// A discrete action resolved by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move (or bump-attack) by a delta
    Move { dx: i32, dy: i32 },
    /// Pass the turn
    Wait,
    /// Take the stairs down, when standing on them
    Descend,
    /// Terminate immediately; no save or cleanup hook runs
    Escape,
}

/// Move an actor by a delta, or attack whatever blocks the destination.
///
/// Out-of-bounds and unwalkable destinations change nothing. A blocking
/// entity stops the move; if it is a live fighter the move resolves as a
/// melee attack instead.
pub fn do_move(state: &mut GameState, actor: EntityId, dx: i32, dy: i32) {
    let Some(entity) = state.map.entity(actor) else {
        return;
    };
    let (dest_x, dest_y) = (entity.x + dx, entity.y + dy);

    if !state.map.in_bounds(dest_x, dest_y) {
        return;
    }
    if !state.map.is_walkable(dest_x, dest_y) {
        return;
    }

    if let Some(target) = state.map.blocking_entity_at(dest_x, dest_y) {
        let attackable = state
            .map
            .entity(target)
            .map(|t| t.is_alive() && t.fighter.is_some())
            .unwrap_or(false);
        if attackable {
            state.resolve_melee(actor, target);
        }
        return;
    }

    if let Some(entity) = state.map.entity_mut(actor) {
        entity.x = dest_x;
        entity.y = dest_y;
    }
}

/// Take the stairs down if the player stands on them.
///
/// The current level is discarded wholesale; only the player entity
/// carries over into the freshly generated one.
pub fn do_descend(state: &mut GameState) -> Result<(), GenerationError> {
    let on_stairs = state
        .map
        .entity(state.player_id)
        .map(|p| (p.x, p.y) == state.map.downstairs)
        .unwrap_or(false);

    if !on_stairs {
        state.message("There are no stairs here.");
        return Ok(());
    }

    state.descend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tile;
    use crate::entity::factories;
    use crate::gameloop::tests::crafted_state;

    #[test]
    fn test_move_applies_delta() {
        let mut state = crafted_state(10, 10);
        let player_id = state.player_id;
        do_move(&mut state, player_id, 1, 0);
        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!((p.x, p.y), (6, 5));
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let mut state = crafted_state(10, 10);
        if let Some(p) = state.map.entity_mut(state.player_id) {
            p.x = 0;
            p.y = 0;
        }
        state.map.set_tile(0, 0, tile::FLOOR);

        let player_id = state.player_id;
        do_move(&mut state, player_id, -1, 0);

        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!((p.x, p.y), (0, 0));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut state = crafted_state(10, 10);
        state.map.set_tile(6, 5, tile::WALL);
        let player_id = state.player_id;
        do_move(&mut state, player_id, 1, 0);
        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!((p.x, p.y), (5, 5));
    }

    #[test]
    fn test_move_into_monster_attacks() {
        let mut state = crafted_state(10, 10);
        let mut orc = factories::orc();
        orc.x = 6;
        orc.y = 5;
        let orc_id = state.map.add_entity(orc);

        let player_id = state.player_id;
        do_move(&mut state, player_id, 1, 0);

        // Player did not move; the orc took power - defense = 5 damage.
        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!((p.x, p.y), (5, 5));
        assert_eq!(state.map.entity(orc_id).unwrap().fighter.unwrap().hp(), 5);
        assert!(!state.messages.is_empty());
    }

    #[test]
    fn test_move_onto_corpse_is_blocked_silently() {
        let mut state = crafted_state(10, 10);
        let mut troll = factories::troll();
        troll.x = 6;
        troll.y = 5;
        troll.die();
        troll.blocks_movement = true; // a corpse wedged in place still blocks
        state.map.add_entity(troll);

        let player_id = state.player_id;
        do_move(&mut state, player_id, 1, 0);

        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!((p.x, p.y), (5, 5));
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_descend_off_stairs_changes_nothing() {
        let mut state = crafted_state(10, 10);
        state.map.downstairs = (2, 2);
        let depth_before = state.depth;

        do_descend(&mut state).unwrap();

        assert_eq!(state.depth, depth_before);
        assert_eq!(state.messages, vec!["There are no stairs here.".to_string()]);
    }

    #[test]
    fn test_descend_regenerates_level() {
        let mut state = crafted_state(10, 10);
        state.map.downstairs = (5, 5); // player already stands here
        state.params = crate::dungeon::GenerationParams::default();

        do_descend(&mut state).unwrap();

        assert_eq!(state.depth, 2);
        assert!(!state.map.rooms.is_empty());
        // The player entity survived the swap with its stats intact.
        let p = state.map.entity(state.player_id).unwrap();
        assert_eq!(p.name, "Player");
        assert_eq!((p.x, p.y), state.map.rooms[0].center());
    }
}
