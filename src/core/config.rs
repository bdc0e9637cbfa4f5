//! Engine configuration.
//!
//! `EngineConfig` carries every tunable the engine reads: starting purse,
//! seat limits, spinner faces, the presentation settle delay, and the
//! end-of-game policy. Defaults reproduce the standard game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// What reaching the GOAL square means for the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalPolicy {
    /// GOAL only forces the President career. Rotation is unchanged and
    /// the game never finishes on its own.
    KeepCycling,
    /// The first player to land on GOAL wins and the game halts.
    FirstArrivalWins,
    /// Players on GOAL drop out of rotation. The game finishes once
    /// everyone has arrived; the richest player wins.
    #[default]
    AllArrive,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Money each player starts with.
    pub starting_money: i64,

    /// Fewest players a game may seat.
    pub min_players: usize,

    /// Most players a game may seat.
    pub max_players: usize,

    /// Spinner faces. Rolls are uniform over `1..=spin_faces`.
    pub spin_faces: u8,

    /// Pacing delay between starting and settling a roll.
    /// The engine never sleeps; callers use this to schedule `settle_roll`.
    pub settle_delay: Duration,

    /// End-of-game policy.
    pub goal_policy: GoalPolicy,

    /// Reject `next_turn` until the current player has rolled.
    pub require_spin_before_next_turn: bool,

    /// Seed for the default spinner. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_money: 100_000,
            min_players: 1,
            max_players: 4,
            spin_faces: 6,
            settle_delay: Duration::from_millis(1500),
            goal_policy: GoalPolicy::default(),
            require_spin_before_next_turn: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for headless runs: no settle delay, fixed seed.
    pub fn headless(seed: u64) -> Self {
        Self::default()
            .with_settle_delay(Duration::ZERO)
            .with_seed(seed)
    }

    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the number of spinner faces.
    #[must_use]
    pub fn with_spin_faces(mut self, faces: u8) -> Self {
        self.spin_faces = faces;
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the end-of-game policy.
    #[must_use]
    pub fn with_goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.goal_policy = policy;
        self
    }

    /// Require a roll before `next_turn` is accepted.
    #[must_use]
    pub fn requiring_spin_before_next_turn(mut self) -> Self {
        self.require_spin_before_next_turn = true;
        self
    }

    /// Set the spinner seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` when the player range is empty,
    /// starts at zero, exceeds 255 seats, or the spinner has no faces.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players == 0 {
            return Err(GameError::InvalidConfig("min_players must be at least 1".into()));
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }
        if self.max_players > usize::from(u8::MAX) {
            return Err(GameError::InvalidConfig("at most 255 players supported".into()));
        }
        if self.spin_faces == 0 {
            return Err(GameError::InvalidConfig("spinner needs at least one face".into()));
        }
        Ok(())
    }
}
