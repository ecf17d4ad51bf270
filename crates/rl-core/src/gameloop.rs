//! Main game loop
//!
//! Owns the per-session state and drives the strict turn sequence:
//! player action, visibility recompute from the post-move position, then
//! the deduplicated enemy batch. Interaction mode is an explicit enum; the
//! combat layer reports deaths and only this loop flips the mode.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::action::{self, Action};
use crate::combat;
use crate::consts::FOV_RADIUS;
use crate::dungeon::{
    GameMap, GenerationError, GenerationParams, generate_dungeon, update_visibility,
};
use crate::entity::{AiAction, Entity, EntityId, factories, hostile_turn};
use crate::rng::GameRng;

/// Interaction mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Normal per-turn play
    Playing,
    /// Terminal mode entered when the player dies
    GameOver,
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue playing
    Continue,
    /// The player died this turn
    PlayerDied,
    /// The player asked to quit; the embedder terminates the process
    /// immediately, and no save or cleanup hook runs here
    Quit,
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Generation configuration, validated at construction
    pub params: GenerationParams,

    /// Current level
    pub map: GameMap,

    /// The player's entity id on the current map
    pub player_id: EntityId,

    /// Dungeon depth, starting at 1; feeds the floor schedules
    pub depth: u32,

    /// Interaction mode
    pub mode: Mode,

    /// Random number generator
    pub rng: GameRng,

    /// Completed turn counter
    pub turns: u64,

    /// Messages for the current turn
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Permanent message history
    #[serde(skip)]
    pub message_history: Vec<String>,
}

impl GameState {
    /// Start a new game: validate the configuration, generate depth 1,
    /// and compute the opening field of view
    pub fn new(params: GenerationParams, mut rng: GameRng) -> Result<Self, GenerationError> {
        params.validate()?;
        let (map, player_id) = generate_dungeon(&params, 1, factories::player(), &mut rng)?;
        let mut state = Self {
            params,
            map,
            player_id,
            depth: 1,
            mode: Mode::Playing,
            rng,
            turns: 0,
            messages: Vec::new(),
            message_history: Vec::new(),
        };
        state.update_fov();
        Ok(state)
    }

    /// Add a message to the log
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
    }

    /// Clear the per-turn messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// The player entity, if still on the map
    pub fn player(&self) -> Option<&Entity> {
        self.map.entity(self.player_id)
    }

    /// Recompute the field of view from the player's position
    pub fn update_fov(&mut self) {
        if let Some((x, y)) = self.player().map(|p| (p.x, p.y)) {
            update_visibility(&mut self.map, (x, y), FOV_RADIUS);
        }
    }

    /// Resolve a melee attack, narrate it, and flip the mode when the
    /// slain party is the player
    pub fn resolve_melee(&mut self, attacker: EntityId, target: EntityId) {
        let Some(attacker_name) = self.map.entity(attacker).map(|e| e.name.clone()) else {
            return;
        };
        let Some(target_name) = self.map.entity(target).map(|e| e.name.clone()) else {
            return;
        };
        let Some(outcome) = combat::melee_attack(&mut self.map, attacker, target) else {
            return;
        };

        if outcome.damage > 0 {
            self.message(format!(
                "{} attacks {} for {} hit points.",
                attacker_name, target_name, outcome.damage
            ));
        } else {
            self.message(format!(
                "{} attacks {} but does no damage.",
                attacker_name, target_name
            ));
        }

        if outcome.target_slain {
            if target == self.player_id {
                self.message("You died!");
                self.mode = Mode::GameOver;
            } else {
                self.message(format!("{} is dead!", target_name));
            }
        }
    }

    /// Replace the current level with a freshly generated one, carrying
    /// only the player entity across
    pub fn descend(&mut self) -> Result<(), GenerationError> {
        let Some(player) = self.map.remove_entity(self.player_id) else {
            return Ok(());
        };
        self.depth += 1;
        let (map, player_id) = generate_dungeon(&self.params, self.depth, player, &mut self.rng)?;
        self.map = map;
        self.player_id = player_id;
        self.message("You descend the staircase.");
        self.update_fov();
        Ok(())
    }
}

/// Run one AI turn for every listed actor, at most once each.
///
/// The list may reference the same entity more than once; a hashed
/// identity set drops the duplicates before anything acts. The player is
/// skipped. Each actor's turn is independent: a no-op or a death earlier
/// in the batch never stops the rest.
pub fn process_enemy_actors(state: &mut GameState, actor_ids: &[EntityId]) {
    let mut processed: HashSet<EntityId> = HashSet::with_capacity(actor_ids.len());
    for &id in actor_ids {
        if id == state.player_id || !processed.insert(id) {
            continue;
        }
        if let AiAction::AttackedPlayer = hostile_turn(&mut state.map, id, state.player_id) {
            let player_id = state.player_id;
            state.resolve_melee(id, player_id);
        }
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Execute a single game turn for the given player action.
    ///
    /// An invalid move still consumes the turn: the position stays put but
    /// visibility updates and enemies act. In game-over mode every action
    /// except escape is ignored.
    pub fn tick(&mut self, action: Action) -> TickResult {
        if let Action::Escape = action {
            return TickResult::Quit;
        }
        if self.state.mode == Mode::GameOver {
            return TickResult::Continue;
        }

        match action {
            Action::Move { dx, dy } => {
                let player_id = self.state.player_id;
                action::do_move(&mut self.state, player_id, dx, dy);
            }
            Action::Wait => {}
            Action::Descend => {
                if let Err(err) = action::do_descend(&mut self.state) {
                    self.state.message(err.to_string());
                    return TickResult::Continue;
                }
            }
            Action::Escape => return TickResult::Quit,
        }

        // Enemies must see the player's post-move position.
        self.state.update_fov();
        self.run_enemy_turns();
        self.state.turns += 1;

        if self.state.mode == Mode::GameOver {
            return TickResult::PlayerDied;
        }
        TickResult::Continue
    }

    /// Let every non-player actor with an AI act once
    fn run_enemy_turns(&mut self) {
        let actor_ids: Vec<EntityId> = self
            .state
            .map
            .entities
            .iter()
            .filter(|e| e.ai.is_some())
            .map(|e| e.id)
            .collect();
        process_enemy_actors(&mut self.state, &actor_ids);
    }
}
