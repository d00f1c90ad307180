//! Whole-match tests: termination, determinism, checkpoints and custom rules.

mod common;

use common::*;
use rust_tcg::{
    starter_deck, ActionKind, GameEngine, GameState, MatchConfig, Phase, PlayerId,
    RandomDecisions, RecordingObserver, Rules, SlotRef, TracingObserver,
};

fn random_match(seed: u64) -> GameEngine<RandomDecisions, RecordingObserver> {
    GameEngine::new(
        MatchConfig::default().with_seed(seed),
        starter_deck().unwrap(),
        starter_deck().unwrap(),
        RandomDecisions::new(seed.wrapping_add(1)),
        RecordingObserver::new(),
    )
    .unwrap()
}

// =============================================================================
// Termination
// =============================================================================

/// Test that seeded random matches run to completion.
#[test]
fn test_random_matches_finish() {
    for seed in 0..10 {
        let mut engine = random_match(seed);

        let result = engine.run().unwrap();

        assert_eq!(engine.state().phase, Phase::GameOver);
        assert_eq!(engine.state().winner(), Some(result));
        assert!(engine.state().turn_number >= 1);
        assert!(engine.observer().contains("wins"));
    }
}

/// Test that a match runs with the tracing observer.
#[test]
fn test_tracing_observer_match() {
    let mut engine = GameEngine::new(
        MatchConfig::default().with_seed(5),
        starter_deck().unwrap(),
        starter_deck().unwrap(),
        RandomDecisions::new(5),
        TracingObserver,
    )
    .unwrap();

    assert!(engine.run().is_ok());
}

// =============================================================================
// Determinism
// =============================================================================

/// Test that the same seeds replay the same match.
#[test]
fn test_same_seed_same_match() {
    let mut first = random_match(21);
    let mut second = random_match(21);

    let a = first.run().unwrap();
    let b = second.run().unwrap();

    assert_eq!(a, b);
    assert_eq!(first.state().history, second.state().history);
    assert_eq!(first.state().turn_number, second.state().turn_number);
    assert_eq!(first.observer().entries(), second.observer().entries());
    for id in PlayerId::all() {
        assert_eq!(first.state().player(id), second.state().player(id));
    }
}

// =============================================================================
// Checkpoints
// =============================================================================

/// Test that a restored checkpoint continues exactly like the original.
#[test]
fn test_checkpoint_resumes_identically() {
    let mut original = random_match(8);
    original.setup().unwrap();
    for _ in 0..4 {
        if original.play_turn().is_some() {
            break;
        }
    }

    let bytes = original.state().checkpoint().unwrap();
    let mark = original.observer().entries().len();
    let restored_state = GameState::restore(&bytes).unwrap();
    let mut restored = GameEngine::from_state(
        restored_state,
        original.decisions().clone(),
        RecordingObserver::new(),
    );

    let a = original.run().unwrap();
    let b = restored.run().unwrap();

    assert_eq!(a, b);
    assert_eq!(original.state().history, restored.state().history);
    assert_eq!(&original.observer().entries()[mark..], restored.observer().entries());
}

/// Test that a finished match keeps its winner through a checkpoint.
#[test]
fn test_checkpoint_keeps_winner() {
    let mut engine = random_match(3);
    let result = engine.run().unwrap();

    let restored = GameState::restore(&engine.state().checkpoint().unwrap()).unwrap();

    assert_eq!(restored.winner(), Some(result));
    assert_eq!(restored.phase, Phase::GameOver);
    assert_eq!(restored.check_win_condition(), Some(result));
}

/// Test that garbage bytes are rejected.
#[test]
fn test_restore_rejects_garbage() {
    assert!(GameState::restore(&[0xff, 0x01]).is_err());
}

// =============================================================================
// Custom Rules
// =============================================================================

/// A variant where the active monster can never retreat.
struct NoRetreat;

impl Rules for NoRetreat {
    fn can_retreat(&self, _state: &GameState, _player: PlayerId) -> bool {
        false
    }
}

/// Test that an overridden predicate changes the offered actions.
#[test]
fn test_custom_rules() {
    let mut state = in_play(basic("Lead", 60), sparker());
    state.player_mut(P1).board.place_on_bench(basic("Reserve", 50), 0).unwrap();

    let standard = scripted(state.clone(), []);
    assert!(standard.available_actions().contains(&ActionKind::Retreat));

    let mut custom = scripted(state, [rust_tcg::Decision::Slot(SlotRef::Bench(0))]).with_rules(NoRetreat);
    assert!(!custom.available_actions().contains(&ActionKind::Retreat));

    custom.retreat();
    assert_eq!(
        custom.state().player(P1).board.active().card().unwrap().name,
        "Lead"
    );
    assert!(custom
        .observer()
        .messages(rust_tcg::LogLevel::Warn)
        .any(|m| m.contains("cannot retreat")));
}
