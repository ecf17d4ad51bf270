//! Combat statistics component

use serde::{Deserialize, Serialize};

/// Hit points, defense, and attack power for a damageable entity
///
/// `hp` is private: every write goes through [`Fighter::set_hp`], which
/// clamps into `[0, max_hp]` and reports whether the write was lethal.
/// Callers branch on that flag instead of re-reading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    hp: i32,
    /// Upper bound for hp
    pub max_hp: i32,
    /// Flat reduction applied to incoming damage
    pub defense: i32,
    /// Base outgoing damage
    pub power: i32,
}

impl Fighter {
    /// Create a fighter at full health
    pub fn new(max_hp: i32, defense: i32, power: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            defense,
            power,
        }
    }

    /// Current hit points, always in `[0, max_hp]`
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Set hit points, clamped into `[0, max_hp]`.
    ///
    /// Returns the applied value and whether it is zero. The died flag
    /// alone does not fire the death transition; the caller also checks
    /// that an AI is still attached, which keeps the transition one-shot.
    pub fn set_hp(&mut self, value: i32) -> (i32, bool) {
        self.hp = value.clamp(0, self.max_hp);
        (self.hp, self.hp == 0)
    }

    /// Apply damage through the clamped setter
    pub fn take_damage(&mut self, amount: i32) -> (i32, bool) {
        self.set_hp(self.hp - amount)
    }

    /// Restore hit points, capped at `max_hp`; returns the amount recovered
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        let (after, _) = self.set_hp(self.hp + amount);
        after - before
    }
}
