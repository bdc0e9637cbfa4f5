//! Game state: persistent game record and transient per-turn state.
//!
//! ## GameState
//!
//! The record that outlives individual turns:
//! - Ordered players (fixed once the game is initialized)
//! - Current player index, turn counter
//! - Game-over flag and winner
//!
//! ## TurnState
//!
//! Cleared on every turn rotation:
//! - Spinning/spun flags guarding one roll per turn
//! - Last spin result
//! - Pass-through bonuses from the latest move

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::player::{Player, PlayerId};
use crate::effects::PassThroughBonus;

/// Persistent game record.
///
/// Players live in an `im::Vector`: the engine replaces a player's
/// record wholesale after each move, and observers can hold a snapshot
/// at O(1) cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Players in seat order.
    pub players: Vector<Player>,

    /// Whose turn it is. Always in `[0, players.len())` once initialized.
    pub current_player_index: usize,

    /// Round counter, starting at 1. Increments when rotation wraps.
    pub turn_count: u32,

    /// Set when the end-of-game policy decides the game is over.
    pub is_game_over: bool,

    /// Winner, if the game finished with one.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Create a fresh state for the given players.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
            current_player_index: 0,
            turn_count: 1,
            is_game_over: false,
            winner: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Replace the record at `index`.
    pub fn replace_player(&mut self, index: usize, player: Player) {
        self.players.set(index, player);
    }

    /// Richest player. Ties go to the lowest seat.
    #[must_use]
    pub fn richest(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .max_by(|a, b| a.money.cmp(&b.money).then(b.id.cmp(&a.id)))
            .map(|p| p.id)
    }

    /// Move to the next seat, skipping seats for which `skip` is true.
    ///
    /// Increments `turn_count` if the rotation wraps past the last seat.
    /// If every other seat is skipped, lands on the next seat anyway.
    /// Returns true when the rotation wrapped.
    pub fn rotate(&mut self, skip: impl Fn(&Player) -> bool) -> bool {
        let count = self.players.len();
        if count == 0 {
            return false;
        }

        let current = self.current_player_index;
        let steps = (1..=count)
            .find(|&k| !skip(&self.players[(current + k) % count]))
            .unwrap_or(1);

        let wrapped = current + steps >= count;
        self.current_player_index = (current + steps) % count;
        if wrapped {
            self.turn_count += 1;
        }
        wrapped
    }
}

/// Transient per-turn state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TurnState {
    /// A roll has started and not yet settled.
    pub is_spinning: bool,

    /// The current player has used their roll.
    pub has_spun: bool,

    /// Value of the latest settled roll this turn.
    pub last_spin_result: Option<i64>,

    /// Bonuses collected while passing squares on the latest move.
    pub pass_through_bonuses: SmallVec<[PassThroughBonus; 4]>,
}

impl TurnState {
    /// Reset for a new turn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
