//! The game engine and its collaborators.
//!
//! - `GameEngine`: owned state machine exposing `initialize_game`,
//!   `begin_roll`/`settle_roll`/`roll`, `move_player` and `next_turn`
//! - `SpinSource`: injectable movement-value source
//! - `GameEvent`: change notifications for the presentation layer

mod event;
mod game;
mod spinner;

pub use event::{GameEvent, SubscriberId};
pub use game::{GameEngine, MoveOutcome, Phase, RollTicket, TurnAdvance, TurnPhase};
pub use spinner::{ScriptedSpins, SpinSource};
