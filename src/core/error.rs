//! Engine error taxonomy.
//!
//! Every rejected operation surfaces as a `GameError` instead of a
//! silent no-op. All of them are recoverable: the engine state is left
//! untouched when an operation returns `Err`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Why a roll request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollRejection {
    /// A roll is already in flight.
    AlreadySpinning,
    /// The current player has already rolled this turn.
    AlreadySpun,
}

impl std::fmt::Display for RollRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollRejection::AlreadySpinning => f.write_str("a roll is already in flight"),
            RollRejection::AlreadySpun => f.write_str("already rolled this turn"),
        }
    }
}

/// Why a turn rotation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRejection {
    /// The in-flight roll has not settled yet.
    RollInFlight,
    /// The engine requires a roll before rotating and none happened.
    NotYetSpun,
}

impl std::fmt::Display for TurnRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnRejection::RollInFlight => f.write_str("a roll is still in flight"),
            TurnRejection::NotYetSpun => f.write_str("the current player has not rolled"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count {count} outside [{min}, {max}]")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("roll rejected: {0}")]
    RollRejected(RollRejection),
    #[error("invalid movement value {0}")]
    InvalidMovement(i64),
    #[error("no players in game")]
    EmptyGame,
    #[error("turn rotation rejected: {0}")]
    TurnRejected(TurnRejection),
    #[error("game is over")]
    GameOver,
    #[error("game already started")]
    GameAlreadyStarted,
    #[error("no roll in flight")]
    NoRollInFlight,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
