//! Turn rotation and game lifecycle tests.
//!
//! These verify rotation for every supported player count and that
//! re-initialization leaves nothing behind from the previous game.

use career_life::core::{Career, EngineConfig, GameError, GoalPolicy, PlayerId};
use career_life::engine::{GameEngine, Phase, ScriptedSpins};

fn engine(config: EngineConfig, spins: &[i64]) -> GameEngine {
    GameEngine::with_spinner(config, ScriptedSpins::new(spins.iter().copied())).unwrap()
}

/// N calls to `next_turn` return to the starting seat and add one round.
#[test]
fn test_next_turn_wraps_for_all_counts() {
    for count in 1..=4 {
        let mut engine = engine(EngineConfig::headless(0), &[1]);
        engine.initialize_game((0..count).map(|i| format!("P{i}"))).unwrap();

        for _ in 0..count {
            engine.next_turn().unwrap();
        }

        assert_eq!(engine.current_player_index(), 0);
        assert_eq!(engine.turn_count(), 2);
    }
}

#[test]
fn test_next_turn_without_roll_is_accepted_by_default() {
    let mut engine = engine(EngineConfig::headless(0), &[1]);
    engine.initialize_game(["A", "B", "C"]).unwrap();

    let advance = engine.next_turn().unwrap();
    assert_eq!(advance.player, PlayerId::new(1));
    assert_eq!(advance.turn_count, 1);
    assert!(!advance.new_round);
}

#[test]
fn test_one_roll_per_turn_across_rotation() {
    let mut engine = engine(EngineConfig::headless(0), &[1, 2]);
    engine.initialize_game(["A", "B"]).unwrap();

    engine.roll().unwrap();
    assert!(engine.roll().is_err());

    engine.next_turn().unwrap();
    let outcome = engine.roll().unwrap();
    assert_eq!(outcome.player, PlayerId::new(1));
    assert_eq!(outcome.to, 2);
}

#[test]
fn test_reinitialize_resets_everything() {
    let mut engine = engine(EngineConfig::headless(0), &[6, 5, 4]);
    engine.initialize_game(["A", "B"]).unwrap();

    engine.roll().unwrap();
    engine.next_turn().unwrap();
    engine.roll().unwrap();
    engine.next_turn().unwrap();
    engine.roll().unwrap();
    assert!(engine.turn_count() > 1);

    engine.initialize_game(["X", "Y", "Z"]).unwrap();

    assert_eq!(engine.players().len(), 3);
    assert_eq!(engine.current_player_index(), 0);
    assert_eq!(engine.turn_count(), 1);
    assert!(!engine.has_spun());
    assert!(!engine.is_spinning());
    assert_eq!(engine.last_spin_result(), None);
    assert!(engine.pass_through_bonuses().is_empty());
    assert_eq!(engine.events().len(), 1);

    for (i, player) in engine.players().iter().enumerate() {
        assert_eq!(player.id, PlayerId::new(i as u8));
        assert_eq!(player.position, 0);
        assert_eq!(player.money, 100_000);
        assert_eq!(player.career, Career::Analyst);
        assert!(!player.is_married);
        assert_eq!(player.children, 0);
    }
    assert_eq!(engine.players()[0].name, "X");
}

#[test]
fn test_reinitialize_after_game_over() {
    let config = EngineConfig::headless(0).with_goal_policy(GoalPolicy::FirstArrivalWins);
    let mut engine = engine(config, &[100]);
    engine.initialize_game(["A"]).unwrap();

    engine.roll().unwrap();
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.roll(), Err(GameError::GameOver));

    engine.initialize_game(["A"]).unwrap();
    assert_eq!(engine.phase(), Phase::InProgress);
    assert!(!engine.is_game_over());
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_colors_cycle_by_seat() {
    let mut engine = engine(EngineConfig::headless(0), &[1]);
    engine.initialize_game(["A", "B", "C", "D"]).unwrap();

    let colors: Vec<_> = engine.players().iter().map(|p| p.color.hex()).collect();
    assert_eq!(colors, vec!["#86bc25", "#435b14", "#a6d353", "#a6a6a6"]);
}

#[test]
fn test_custom_player_range_and_money() {
    let config = EngineConfig::headless(0)
        .with_player_range(2, 3)
        .with_starting_money(5);
    let mut engine = engine(config, &[1]);

    assert_eq!(
        engine.initialize_game(["solo"]),
        Err(GameError::InvalidPlayerCount { count: 1, min: 2, max: 3 })
    );
    engine.initialize_game(["A", "B"]).unwrap();
    assert_eq!(engine.players()[1].money, 5);
}

#[test]
fn test_invalid_config_rejected() {
    let config = EngineConfig::headless(0).with_player_range(0, 4);
    assert!(matches!(
        GameEngine::with_spinner(config, ScriptedSpins::new([1])),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn test_seeded_engines_agree() {
    let mut a = GameEngine::new(EngineConfig::headless(99)).unwrap();
    let mut b = GameEngine::new(EngineConfig::headless(99)).unwrap();
    a.initialize_game(["A", "B"]).unwrap();
    b.initialize_game(["A", "B"]).unwrap();

    for _ in 0..10 {
        if a.is_game_over() {
            break;
        }
        assert_eq!(a.roll().unwrap(), b.roll().unwrap());
        a.next_turn().unwrap();
        b.next_turn().unwrap();
    }
    assert_eq!(a.state(), b.state());
}
