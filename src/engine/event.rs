//! Change notifications.
//!
//! Every state change the engine makes is described by a `GameEvent`.
//! Events are appended to the engine's journal and pushed to every
//! subscriber, in the order the changes happened.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::{LandingEffect, PassThroughBonus};

/// A state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was set up.
    GameInitialized { player_count: usize },

    /// A player's name changed before play began.
    PlayerRenamed { player: PlayerId, name: String },

    /// A roll began; it settles after the configured delay.
    RollStarted { player: PlayerId },

    /// A roll produced its movement value.
    RollSettled { player: PlayerId, value: i64 },

    /// A roll was dropped because the spin source produced an unusable
    /// value. The player may roll again.
    RollCancelled { player: PlayerId, value: i64 },

    /// A bonus was collected while passing a square.
    BonusAwarded { player: PlayerId, bonus: PassThroughBonus },

    /// A player's token moved.
    PlayerMoved { player: PlayerId, from: usize, to: usize },

    /// The landing square's effect was applied.
    EffectApplied { player: PlayerId, effect: LandingEffect },

    /// A player reached the GOAL square for the first time.
    PlayerFinished { player: PlayerId },

    /// The turn rotated.
    TurnAdvanced { player: PlayerId, turn_count: u32 },

    /// The game ended.
    GameFinished { winner: Option<PlayerId> },
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerRenamed { player, .. }
            | GameEvent::RollStarted { player }
            | GameEvent::RollSettled { player, .. }
            | GameEvent::RollCancelled { player, .. }
            | GameEvent::BonusAwarded { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::EffectApplied { player, .. }
            | GameEvent::PlayerFinished { player }
            | GameEvent::TurnAdvanced { player, .. } => Some(*player),
            GameEvent::GameFinished { winner } => *winner,
            GameEvent::GameInitialized { .. } => None,
        }
    }
}

/// Handle returned by `GameEngine::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u32);

/// Subscriber callback.
pub(crate) type Subscriber = Box<dyn FnMut(&GameEvent)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let p = PlayerId::new(1);

        assert_eq!(GameEvent::RollStarted { player: p }.player(), Some(p));
        assert_eq!(GameEvent::RollCancelled { player: p, value: 0 }.player(), Some(p));
        assert_eq!(GameEvent::GameInitialized { player_count: 2 }.player(), None);
        assert_eq!(GameEvent::GameFinished { winner: None }.player(), None);
        assert_eq!(GameEvent::GameFinished { winner: Some(p) }.player(), Some(p));
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::PlayerMoved { player: PlayerId::new(0), from: 3, to: 7 };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
