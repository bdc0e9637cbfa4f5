//! Core engine types: players, careers, state, configuration, errors, RNG.
//!
//! These are the building blocks the engine mutates. The board lives in
//! `board`, effect resolution in `effects`.

pub mod career;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use career::Career;
pub use config::{EngineConfig, GoalPolicy};
pub use error::{GameError, RollRejection, TurnRejection};
pub use player::{Player, PlayerColor, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, TurnState};
