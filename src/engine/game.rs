//! The game engine: an owned state machine with explicit results.
//!
//! ## Lifecycle
//!
//! `NotStarted` → (`initialize_game`) → `InProgress` → `Finished`
//!
//! Within `InProgress` each turn cycles
//! `AwaitingRoll` → (`begin_roll`) → `Rolling` → (`settle_roll`) →
//! `AwaitingNextTurn` → (`next_turn`) → `AwaitingRoll`.
//!
//! `roll` performs both halves at once for headless use. Interactive
//! callers start the roll, wait `RollTicket::settle_delay`, then settle.
//!
//! ## Mutation discipline
//!
//! State changes only through these operations. A failed operation
//! leaves the state as it was, except that a roll whose spin source
//! produced an invalid value is cancelled so the player may roll again.

use std::time::Duration;

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::event::{GameEvent, Subscriber, SubscriberId};
use super::spinner::SpinSource;
use crate::board::Board;
use crate::core::{
    EngineConfig, GameError, GameRng, GameState, GoalPolicy, Player, PlayerId, RollRejection,
    TurnRejection, TurnState,
};
use crate::effects::{resolve_landing, resolve_pass_through, LandingEffect, PassThroughBonus};

/// Game lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TurnPhase {
    AwaitingRoll,
    Rolling,
    AwaitingNextTurn,
}

/// Issued by `begin_roll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollTicket {
    /// Player who is rolling.
    pub player: PlayerId,
    /// How long the presentation should wait before `settle_roll`.
    pub settle_delay: Duration,
}

/// Result of one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub steps: i64,
    pub from: usize,
    /// Landing square, after clamping to the GOAL square.
    pub to: usize,
    /// Bonuses from squares strictly between `from` and `to`, ascending.
    pub bonuses: Vec<PassThroughBonus>,
    pub landing: LandingEffect,
    /// True if this move brought the player onto GOAL for the first time.
    pub finished: bool,
}

/// Result of a turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TurnAdvance {
    /// Player whose turn it now is.
    pub player: PlayerId,
    pub turn_count: u32,
    /// True if rotation wrapped into a new round.
    pub new_round: bool,
}

/// The game engine.
///
/// Owns the board, the game record, the per-turn state, the spin source
/// and the event journal.
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    spinner: Box<dyn SpinSource>,
    state: GameState,
    turn: TurnState,
    phase: Phase,
    rolls_taken: u64,
    events: Vector<GameEvent>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u32,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("turn", &self.turn)
            .field("events", &self.events.len())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Create an engine on the standard board with the default spinner.
    ///
    /// The spinner is seeded from `config.seed`, or from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if the configuration is inconsistent.
    pub fn new(config: EngineConfig) -> Result<Self, GameError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_spinner(config, rng)
    }

    /// Create an engine with a custom spin source.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if the configuration is inconsistent.
    pub fn with_spinner(
        config: EngineConfig,
        spinner: impl SpinSource + 'static,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::standard(),
            spinner: Box::new(spinner),
            state: GameState::default(),
            turn: TurnState::default(),
            phase: Phase::NotStarted,
            rolls_taken: 0,
            events: Vector::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }

    /// Replace the board. Only possible before a game is initialized.
    ///
    /// # Errors
    ///
    /// Returns `GameError::GameAlreadyStarted` once a game exists.
    pub fn set_board(&mut self, board: Board) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::GameAlreadyStarted);
        }
        self.board = board;
        Ok(())
    }

    // === Subscriptions ===

    /// Register a callback invoked for every event.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the ID was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
        self.events.push_back(event);
    }

    // === Operations ===

    /// Start a new game with the given player names.
    ///
    /// Fully resets players, turn counter, per-turn state, winner and the
    /// event journal. Subscribers stay registered.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPlayerCount` if the number of names is
    /// outside the configured range.
    pub fn initialize_game<I, S>(&mut self, names: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let (min, max) = (self.config.min_players, self.config.max_players);
        if !(min..=max).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount { count: names.len(), min, max });
        }

        let starting_money = self.config.starting_money;
        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name, starting_money));

        self.state = GameState::new(players);
        self.turn.clear();
        self.phase = Phase::InProgress;
        self.rolls_taken = 0;
        self.events = Vector::new();

        let player_count = self.state.player_count();
        self.emit(GameEvent::GameInitialized { player_count });
        Ok(())
    }

    /// Rename a player. Allowed until play begins: the first roll, the
    /// first move or the first turn rotation, whichever comes first.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyGame` before initialization
    /// - `GameError::GameAlreadyStarted` once play has begun
    /// - `GameError::UnknownPlayer` for an ID outside the game
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), GameError> {
        if self.phase == Phase::NotStarted {
            return Err(GameError::EmptyGame);
        }
        if self.has_started() {
            return Err(GameError::GameAlreadyStarted);
        }
        let mut player = self.state.player(id).cloned().ok_or(GameError::UnknownPlayer(id))?;
        player.name = name.into();
        let name = player.name.clone();
        self.state.replace_player(id.index(), player);
        self.emit(GameEvent::PlayerRenamed { player: id, name });
        Ok(())
    }

    /// Start a roll for the current player.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyGame` before initialization
    /// - `GameError::GameOver` once the game has finished
    /// - `GameError::RollRejected` if a roll is in flight or already used
    pub fn begin_roll(&mut self) -> Result<RollTicket, GameError> {
        self.ensure_in_progress()?;
        if self.turn.is_spinning {
            return Err(GameError::RollRejected(RollRejection::AlreadySpinning));
        }
        if self.turn.has_spun {
            return Err(GameError::RollRejected(RollRejection::AlreadySpun));
        }

        let player = self.current_player_id()?;
        self.turn.is_spinning = true;
        self.turn.has_spun = true;
        self.rolls_taken += 1;
        self.emit(GameEvent::RollStarted { player });

        Ok(RollTicket {
            player,
            settle_delay: self.config.settle_delay,
        })
    }

    /// Settle the in-flight roll: draw a value and move the current player.
    ///
    /// # Errors
    ///
    /// - `GameError::NoRollInFlight` without a preceding `begin_roll`
    /// - `GameError::InvalidMovement` if the spin source produced a value
    ///   below 1; the roll is cancelled and may be retried
    pub fn settle_roll(&mut self) -> Result<MoveOutcome, GameError> {
        if !self.turn.is_spinning {
            return Err(GameError::NoRollInFlight);
        }

        let player = self.current_player_id()?;
        let value = self.spinner.spin(self.config.spin_faces);
        if value < 1 {
            self.turn.is_spinning = false;
            self.turn.has_spun = false;
            self.rolls_taken -= 1;
            self.emit(GameEvent::RollCancelled { player, value });
            return Err(GameError::InvalidMovement(value));
        }

        self.turn.last_spin_result = Some(value);
        self.emit(GameEvent::RollSettled { player, value });

        let outcome = self.apply_move(value);
        self.turn.is_spinning = false;
        Ok(outcome)
    }

    /// Start and settle a roll in one call.
    ///
    /// # Errors
    ///
    /// Any error from `begin_roll` or `settle_roll`.
    pub fn roll(&mut self) -> Result<MoveOutcome, GameError> {
        self.begin_roll()?;
        self.settle_roll()
    }

    /// Move the current player forward by `steps`, resolving effects.
    ///
    /// Does not consume the turn's roll; `roll` calls this internally.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyGame` / `GameError::GameOver` outside a game
    /// - `GameError::RollRejected` while a roll is in flight
    /// - `GameError::InvalidMovement` if `steps < 1`
    pub fn move_player(&mut self, steps: i64) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        if self.turn.is_spinning {
            return Err(GameError::RollRejected(RollRejection::AlreadySpinning));
        }
        if steps < 1 {
            return Err(GameError::InvalidMovement(steps));
        }
        Ok(self.apply_move(steps))
    }

    /// Rotate to the next player.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyGame` before initialization
    /// - `GameError::GameOver` once the game has finished
    /// - `GameError::TurnRejected` while a roll is in flight, or before
    ///   rolling when `require_spin_before_next_turn` is set
    pub fn next_turn(&mut self) -> Result<TurnAdvance, GameError> {
        self.ensure_in_progress()?;
        if self.turn.is_spinning {
            return Err(GameError::TurnRejected(TurnRejection::RollInFlight));
        }
        if self.config.require_spin_before_next_turn && !self.turn.has_spun {
            return Err(GameError::TurnRejected(TurnRejection::NotYetSpun));
        }

        let goal = self.board.last_index();
        let new_round = match self.config.goal_policy {
            GoalPolicy::AllArrive => self.state.rotate(|p| p.has_reached(goal)),
            GoalPolicy::KeepCycling | GoalPolicy::FirstArrivalWins => self.state.rotate(|_| false),
        };
        self.turn.clear();

        let player = self.current_player_id()?;
        let turn_count = self.state.turn_count;
        self.emit(GameEvent::TurnAdvanced { player, turn_count });

        Ok(TurnAdvance { player, turn_count, new_round })
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::NotStarted => Err(GameError::EmptyGame),
            Phase::Finished => Err(GameError::GameOver),
            Phase::InProgress if self.state.players.is_empty() => Err(GameError::EmptyGame),
            Phase::InProgress => Ok(()),
        }
    }

    fn has_started(&self) -> bool {
        self.phase == Phase::Finished
            || self.rolls_taken > 0
            || self.state.turn_count > 1
            || self.state.current_player_index > 0
            || self.state.players.iter().any(|p| p.position > 0)
    }

    fn current_player_id(&self) -> Result<PlayerId, GameError> {
        self.state.current_player().map(|p| p.id).ok_or(GameError::EmptyGame)
    }

    /// Core movement: clamp, pass-through, land, commit, publish.
    ///
    /// Callers have validated `steps >= 1` and that a current player exists.
    fn apply_move(&mut self, steps: i64) -> MoveOutcome {
        let index = self.state.current_player_index;
        let mut player = self.state.players[index].clone();
        let id = player.id;

        let goal = self.board.last_index();
        let from = player.position;
        let to = from.saturating_add(usize::try_from(steps).unwrap_or(usize::MAX)).min(goal);

        let mut bonuses: SmallVec<[PassThroughBonus; 4]> = SmallVec::new();
        for square in &self.board.squares()[(from + 1).min(to)..to] {
            if let Some(bonus) = resolve_pass_through(&mut player, square) {
                bonuses.push(bonus);
            }
        }

        player.position = to;
        let landing = resolve_landing(&mut player, &self.board[to]);
        let finished = from < goal && to == goal;

        self.state.replace_player(index, player);
        self.turn.pass_through_bonuses = bonuses.clone();

        self.emit(GameEvent::PlayerMoved { player: id, from, to });
        for bonus in &bonuses {
            self.emit(GameEvent::BonusAwarded { player: id, bonus: bonus.clone() });
        }
        self.emit(GameEvent::EffectApplied { player: id, effect: landing.clone() });

        if finished {
            self.emit(GameEvent::PlayerFinished { player: id });
            self.apply_goal_policy(id);
        }

        MoveOutcome {
            player: id,
            steps,
            from,
            to,
            bonuses: bonuses.into_vec(),
            landing,
            finished,
        }
    }

    fn apply_goal_policy(&mut self, arrived: PlayerId) {
        let goal = self.board.last_index();
        match self.config.goal_policy {
            GoalPolicy::KeepCycling => {}
            GoalPolicy::FirstArrivalWins => self.finish(Some(arrived)),
            GoalPolicy::AllArrive => {
                if self.state.players.iter().all(|p| p.has_reached(goal)) {
                    let winner = self.state.richest();
                    self.finish(winner);
                }
            }
        }
    }

    fn finish(&mut self, winner: Option<PlayerId>) {
        self.state.is_game_over = true;
        self.state.winner = winner;
        self.phase = Phase::Finished;
        self.emit(GameEvent::GameFinished { winner });
    }

    // === Published state ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The persistent game record.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The per-turn state.
    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.state.players
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// Seat index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.state.current_player_index
    }

    /// Round counter, starting at 1.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }

    /// True while a roll is in flight.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.turn.is_spinning
    }

    /// True once the current player has rolled this turn.
    #[must_use]
    pub fn has_spun(&self) -> bool {
        self.turn.has_spun
    }

    /// Value of this turn's roll, if it has settled.
    #[must_use]
    pub fn last_spin_result(&self) -> Option<i64> {
        self.turn.last_spin_result
    }

    /// Bonuses from the latest move this turn.
    #[must_use]
    pub fn pass_through_bonuses(&self) -> &[PassThroughBonus] {
        &self.turn.pass_through_bonuses
    }

    /// True once the goal policy has ended the game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    /// Winner of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn sub-phase. `None` unless the game is in progress.
    #[must_use]
    pub fn turn_phase(&self) -> Option<TurnPhase> {
        if self.phase != Phase::InProgress {
            return None;
        }
        Some(if self.turn.is_spinning {
            TurnPhase::Rolling
        } else if self.turn.has_spun {
            TurnPhase::AwaitingNextTurn
        } else {
            TurnPhase::AwaitingRoll
        })
    }

    /// Every event since the game was initialized.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }
}
