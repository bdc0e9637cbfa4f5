//! Headless game simulation.
//!
//! Plays complete games with no presentation layer: every turn rolls
//! immediately and rotates. Useful for balancing the board and for
//! soak-testing the engine's invariants.
//!
//! ```
//! use career_life::simulation::{run_batch, SimulationConfig};
//!
//! let summary = run_batch(&SimulationConfig::new().with_games(5)).unwrap();
//! assert_eq!(summary.games, 5);
//! ```

use rustc_hash::FxHashMap;

use crate::core::{Career, EngineConfig, GameError, GameRng, GoalPolicy, Player, PlayerId};
use crate::engine::GameEngine;

/// Configuration for a simulation batch.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Seats per game.
    pub players: usize,

    /// Rounds after which an unfinished game is abandoned.
    pub max_turns: u32,

    /// Base seed. Each game gets a forked stream.
    pub seed: u64,

    /// End-of-game policy used by every game.
    pub goal_policy: GoalPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            players: 2,
            max_turns: 200,
            seed: 0,
            goal_policy: GoalPolicy::AllArrive,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set seats per game.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the end-of-game policy.
    #[must_use]
    pub fn with_goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.goal_policy = policy;
        self
    }

    fn engine_config(&self, seed: u64) -> EngineConfig {
        EngineConfig::headless(seed).with_goal_policy(self.goal_policy)
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub seed: u64,
    /// Round counter when the game stopped.
    pub turns: u32,
    /// Rolls taken across all players.
    pub rolls: u32,
    /// False if the round limit was hit first.
    pub finished: bool,
    pub winner: Option<PlayerId>,
    pub final_players: Vec<Player>,
}

/// Play one game to completion or to the round limit.
///
/// # Errors
///
/// Propagates engine errors; with a valid config none are expected.
pub fn run_game(config: &SimulationConfig, seed: u64) -> Result<GameRecord, GameError> {
    let mut engine = GameEngine::new(config.engine_config(seed))?;
    engine.initialize_game((1..=config.players).map(|i| format!("Player {i}")))?;

    let mut rolls = 0;
    while !engine.is_game_over() && engine.turn_count() <= config.max_turns {
        engine.roll()?;
        rolls += 1;
        if engine.is_game_over() {
            break;
        }
        engine.next_turn()?;
    }

    Ok(GameRecord {
        seed,
        turns: engine.turn_count(),
        rolls,
        finished: engine.is_game_over(),
        winner: engine.winner(),
        final_players: engine.players().iter().cloned().collect(),
    })
}

/// Aggregate statistics over a batch.
#[derive(Clone, Debug, Default)]
pub struct SimulationSummary {
    pub games: usize,
    pub finished_games: usize,
    /// Mean round counter at game end.
    pub mean_turns: f64,
    /// Mean final money over every player of every game.
    pub mean_final_money: f64,
    /// Final career of every player, tallied.
    pub career_tally: FxHashMap<Career, usize>,
    /// Wins per seat.
    pub wins_by_seat: Vec<usize>,
}

impl SimulationSummary {
    /// Fraction of games that finished before the round limit.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.finished_games as f64 / self.games as f64
    }
}

/// Play `config.games` games and summarize them.
///
/// # Errors
///
/// Propagates the first engine error.
pub fn run_batch(config: &SimulationConfig) -> Result<SimulationSummary, GameError> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = SimulationSummary {
        wins_by_seat: vec![0; config.players],
        ..SimulationSummary::default()
    };

    let mut total_turns = 0u64;
    let mut total_money = 0i128;
    let mut player_samples = 0u64;

    for _ in 0..config.games {
        let record = run_game(config, rng.fork().seed())?;

        summary.games += 1;
        total_turns += u64::from(record.turns);
        if record.finished {
            summary.finished_games += 1;
        }
        if let Some(seat) = record.winner.and_then(|w| summary.wins_by_seat.get_mut(w.index())) {
            *seat += 1;
        }
        for player in &record.final_players {
            *summary.career_tally.entry(player.career).or_default() += 1;
            total_money += i128::from(player.money);
            player_samples += 1;
        }
    }

    if summary.games > 0 {
        summary.mean_turns = total_turns as f64 / summary.games as f64;
    }
    if player_samples > 0 {
        summary.mean_final_money = total_money as f64 / player_samples as f64;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_game_all_arrive_finishes() {
        let config = SimulationConfig::new().with_players(3);
        let record = run_game(&config, 42).unwrap();

        assert!(record.finished);
        assert!(record.winner.is_some());
        assert_eq!(record.final_players.len(), 3);
        for player in &record.final_players {
            assert_eq!(player.position, 59);
            assert_eq!(player.career, Career::President);
        }
    }

    #[test]
    fn test_run_game_is_deterministic() {
        let config = SimulationConfig::new();
        let a = run_game(&config, 7).unwrap();
        let b = run_game(&config, 7).unwrap();

        assert_eq!(a.rolls, b.rolls);
        assert_eq!(a.final_players, b.final_players);
    }

    #[test]
    fn test_keep_cycling_hits_round_limit() {
        let config = SimulationConfig::new()
            .with_goal_policy(GoalPolicy::KeepCycling)
            .with_max_turns(30);
        let record = run_game(&config, 1).unwrap();

        assert!(!record.finished);
        assert_eq!(record.turns, 31);
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_batch_summary() {
        let config = SimulationConfig::new().with_games(10).with_players(2).with_seed(3);
        let summary = run_batch(&config).unwrap();

        assert_eq!(summary.games, 10);
        assert_eq!(summary.finished_games, 10);
        assert!((summary.completion_rate() - 1.0).abs() < f64::EPSILON);
        assert_eq!(summary.wins_by_seat.iter().sum::<usize>(), 10);
        assert_eq!(summary.career_tally.get(&Career::President), Some(&20));
        assert!(summary.mean_turns >= 10.0);
    }

    #[test]
    fn test_empty_batch() {
        let summary = run_batch(&SimulationConfig::new().with_games(0)).unwrap();
        assert_eq!(summary.games, 0);
        assert!(summary.completion_rate().abs() < f64::EPSILON);
    }
}
