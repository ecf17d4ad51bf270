//! Combat resolution
//!
//! Melee only: damage is attacker power minus defender defense, floored at
//! zero, written through the fighter's clamped setter. The death transition
//! fires here at most once per entity; mode changes (player death) are the
//! game loop's business, reported through the outcome.

use crate::dungeon::GameMap;
use crate::entity::EntityId;

/// Result of one resolved melee swing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// Damage actually dealt (can be zero)
    pub damage: i32,
    /// The target's death transition fired during this attack
    pub target_slain: bool,
}

/// Damage dealt by `power` against `defense`, never negative
pub fn melee_damage(power: i32, defense: i32) -> i32 {
    (power - defense).max(0)
}

/// Resolve a melee attack between two entities on the map.
///
/// Returns `None` when either side lacks a fighter component. The caller
/// decides what the outcome means (messages, game-over mode).
pub fn melee_attack(
    map: &mut GameMap,
    attacker: EntityId,
    target: EntityId,
) -> Option<AttackOutcome> {
    let power = map.entity(attacker)?.fighter.as_ref()?.power;

    let target_entity = map.entity_mut(target)?;
    let fighter = target_entity.fighter.as_mut()?;

    let damage = melee_damage(power, fighter.defense);
    let (_, died) = fighter.take_damage(damage);

    // Death fires only while an AI is still attached; the transition
    // clears it, so an already-dead target cannot die again.
    let target_slain = died && target_entity.ai.is_some();
    if target_slain {
        target_entity.die();
    }

    Some(AttackOutcome {
        damage,
        target_slain,
    })
}
