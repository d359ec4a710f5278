//! Game session integration tests.
//!
//! Full games driven through `Game`, the way a training loop uses it.

use rust_backgammon::core::GameRng;
use rust_backgammon::{
    Action, Dice, EngineError, FirstTurn, GameBuilder, GameConfig, GameRngState, Position, RulesEngine, Side,
    StandardRules,
};

/// Play random legal actions until the game ends. Returns plies and the final reward.
fn play_out(seed: u64) -> (u32, i8) {
    let mut game = GameBuilder::new().seed(seed).build();
    let mut chooser = GameRng::new(seed ^ 0x5eed);
    let mut reward = 0;

    while !game.is_over() {
        assert!(game.ply() < 5000, "seed {seed}: game did not finish");
        let dice = game.roll();
        let actions = game.legal_actions(&dice);
        let action = chooser.choose(&actions).cloned().unwrap_or_else(Action::pass);

        let result = game.step(&dice, &action).unwrap();
        result.position.check_invariants().unwrap();
        reward = result.reward;
    }
    (game.ply(), reward)
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_random_self_play_finishes() {
    for seed in 0..10 {
        let (plies, reward) = play_out(seed);
        assert!(plies > 0);
        assert!(matches!(reward, -2 | -1 | 1 | 2), "seed {seed}: reward {reward}");
    }
}

#[test]
fn test_self_play_is_reproducible() {
    assert_eq!(play_out(77), play_out(77));
}

#[test]
fn test_reward_matches_final_outcome() {
    let mut game = GameBuilder::new().seed(5).build();
    let mut chooser = GameRng::new(6);
    let mut last = None;

    while !game.is_over() {
        let dice = game.roll();
        let actions = game.legal_actions(&dice);
        let action = chooser.choose(&actions).cloned().unwrap_or_else(Action::pass);
        last = Some(game.step(&dice, &action).unwrap());
    }

    let last = last.unwrap();
    let outcome = game.outcome().unwrap();
    assert!(last.done);
    assert_eq!(last.outcome, Some(outcome));
    assert_eq!(last.reward, outcome.reward());
    assert_eq!(outcome.reward_for(outcome.winner), outcome.magnitude() as i8);
    assert_eq!(game.position().side(outcome.winner).borne_off, 15);
}

// =============================================================================
// History and Reset
// =============================================================================

#[test]
fn test_history_alternates_sides() {
    let mut game = GameBuilder::new()
        .seed(11)
        .first_turn(FirstTurn::Fixed(Side::White))
        .build();

    for _ in 0..12 {
        let dice = game.roll();
        let action = game.legal_actions(&dice)[0].clone();
        game.step(&dice, &action).unwrap();
    }

    assert_eq!(game.history().len(), 12);
    for (i, record) in game.history().iter().enumerate() {
        let expected = if i % 2 == 0 { Side::White } else { Side::Black };
        assert_eq!(record.side, expected);
        assert_eq!(record.ply, i as u32);
    }
}

#[test]
fn test_reset_clears_history_and_keeps_dice_stream() {
    let mut game = GameBuilder::new()
        .seed(3)
        .first_turn(FirstTurn::Fixed(Side::Black))
        .build();
    let dice = game.roll();
    let action = game.legal_actions(&dice)[0].clone();
    game.step(&dice, &action).unwrap();

    let state_before = game.rng_state();
    let position = game.reset();

    assert_eq!(position, Position::starting(Side::Black));
    assert_eq!(game.ply(), 0);
    assert!(game.history().is_empty());
    // a fixed first turn draws nothing from the stream
    assert_eq!(game.rng_state(), state_before);
}

#[test]
fn test_saved_dice_stream_resumes_in_new_session() {
    let mut game = GameBuilder::new().seed(31).build();
    for _ in 0..5 {
        let dice = game.roll();
        let action = game.legal_actions(&dice)[0].clone();
        game.step(&dice, &action).unwrap();
    }

    let json = serde_json::to_string(&game.rng_state()).unwrap();
    let expected: Vec<Dice> = (0..8).map(|_| game.roll()).collect();

    let saved: GameRngState = serde_json::from_str(&json).unwrap();
    let mut resumed = GameBuilder::new().seed(31).rng_state(saved).build();
    let replayed: Vec<Dice> = (0..8).map(|_| resumed.roll()).collect();
    assert_eq!(replayed, expected);
}

#[test]
fn test_config_round_trip_through_builder() {
    let config = GameConfig::default()
        .with_seed(123)
        .with_first_turn(FirstTurn::Fixed(Side::White))
        .with_legality_checks(false);
    let game = GameBuilder::new().config(config.clone()).build();

    assert_eq!(game.config(), &config);
    assert_eq!(game.turn(), Side::White);
}

// =============================================================================
// Afterstates Through the Session
// =============================================================================

#[test]
fn test_session_afterstates_match_rules() {
    let game = GameBuilder::new()
        .first_turn(FirstTurn::Fixed(Side::White))
        .build();
    let dice = Dice::from_pair(4, 2);

    let from_game = game.legal_afterstates(&dice);
    let from_rules = StandardRules.legal_afterstates(game.position(), &dice);
    assert_eq!(from_game, from_rules);

    for (action, after) in &from_game {
        assert_eq!(game.simulate(action).unwrap(), *after);
    }
}

#[test]
fn test_set_position_from_signed_board() {
    let mut game = GameBuilder::new().first_turn(FirstTurn::Fixed(Side::White)).build();
    let mut broken = Position::starting(Side::White).to_signed(Side::White);
    broken.points[8] = 3;
    assert!(Position::from_signed(&broken).is_err());

    let signed = Position::starting(Side::Black).to_signed(Side::White);
    let position = Position::from_signed(&signed).unwrap();
    assert_eq!(game.set_position(position), Ok(()));
    assert_eq!(game.turn(), Side::Black);
}

#[test]
fn test_step_after_game_over_fails() {
    let mut game = GameBuilder::new().seed(8).build();
    let mut chooser = GameRng::new(8);
    while !game.is_over() {
        let dice = game.roll();
        let actions = game.legal_actions(&dice);
        let action = chooser.choose(&actions).cloned().unwrap_or_else(Action::pass);
        game.step(&dice, &action).unwrap();
    }

    let dice = game.roll();
    assert_eq!(game.step(&dice, &Action::pass()), Err(EngineError::GameOver));
}
