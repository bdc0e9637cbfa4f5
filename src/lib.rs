//! # career-life
//!
//! Turn and movement engine for a career-progression board game.
//!
//! Players spin 1-6, move forward along a fixed 60-square board, and
//! collect salary, promotions, penalties and a marriage along the way.
//! The crate holds only the deterministic-given-a-spin core; rendering,
//! animation and input belong to the presentation layer, which reads
//! the engine's published state and calls its entry points.
//!
//! ## Design Principles
//!
//! 1. **Owned state machine**: `GameEngine` owns all game state and only
//!    its operations mutate it.
//!
//! 2. **Explicit results**: Every guarded operation returns
//!    `Result<_, GameError>` instead of silently doing nothing.
//!
//! 3. **Closed square types**: Effects match exhaustively on
//!    `SquareType`; a new square type is a compile-time decision.
//!
//! 4. **Injectable randomness**: Spins come from a `SpinSource`, so tests
//!    and replays can script exact sequences.
//!
//! ## Example
//!
//! ```
//! use career_life::core::EngineConfig;
//! use career_life::engine::{GameEngine, ScriptedSpins};
//!
//! let mut engine = GameEngine::with_spinner(EngineConfig::headless(0), ScriptedSpins::new([4])).unwrap();
//! engine.initialize_game(["Aoi", "Ren"]).unwrap();
//!
//! let outcome = engine.roll().unwrap();
//! assert_eq!(outcome.to, 4);
//!
//! let advance = engine.next_turn().unwrap();
//! assert_eq!(advance.player.index(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, careers, game state, configuration, errors, RNG
//! - `board`: The static square table
//! - `effects`: Landing and pass-through effect resolution
//! - `engine`: The `GameEngine` state machine, spin sources, events
//! - `simulation`: Headless batch play

pub mod core;
pub mod board;
pub mod effects;
pub mod engine;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Career, EngineConfig, GameError, GameRng, GameState, GoalPolicy, Player, PlayerColor,
    PlayerId, RollRejection, TurnRejection, TurnState,
};

pub use crate::board::{Board, Square, SquareType};

pub use crate::effects::{BonusKind, LandingEffect, PassThroughBonus};

pub use crate::engine::{
    GameEngine, GameEvent, MoveOutcome, Phase, RollTicket, ScriptedSpins, SpinSource,
    SubscriberId, TurnAdvance, TurnPhase,
};

pub use crate::simulation::{run_batch, run_game, SimulationConfig, SimulationSummary};
