//! Attack, knockout, promotion and status condition tests.

mod common;

use common::*;
use rust_tcg::{
    ActionKind, Attack, Decision, Effect, EnergyType, GameResult, GameState, MonsterCard, Phase,
    SlotRef, StatusCondition, TrainerCard, WinReason,
};

/// Sparker on turn 3 with one Lightning attached, facing `defender`.
fn ready_to_attack(defender: MonsterCard) -> GameState {
    let mut state = in_play(sparker(), defender);
    attach(&mut state, P1, SlotRef::Active, EnergyType::Lightning);
    advance_to(&mut state, 3);
    state
}

// =============================================================================
// Damage
// =============================================================================

/// Test that three 20-damage attacks knock out a 60 HP monster.
#[test]
fn test_repeated_attacks_knock_out() {
    let mut engine = scripted(ready_to_attack(basic("Target", 60)), []);

    assert!(engine.attack());
    assert_eq!(engine.state().player(P2).board.active().hp_remaining(), 40);
    assert!(engine.attack());
    assert_eq!(engine.state().player(P2).board.active().hp_remaining(), 20);
    assert!(engine.state().winner().is_none());

    assert!(engine.attack());
    let state = engine.state();
    assert!(state.player(P2).board.active().is_empty());
    assert_eq!(state.player(P2).board.trash().count_named("Target"), 1);
    assert_eq!(state.player(P1).prize_count(), 5);
    assert_eq!(state.player(P1).hand.len(), 1);
    assert_eq!(
        state.winner(),
        Some(GameResult::new(P1, WinReason::NoMonstersInPlay))
    );
    assert_eq!(state.phase, Phase::GameOver);

    let log = engine.observer();
    assert!(log.contains("Ash's Sparker uses Jolt on Target for 20 damage"));
    assert!(log.contains("Brock's Target is knocked out"));
    assert!(log.contains("Ash takes a prize card (5 left)"));
    assert!(log.contains("Ash wins"));
}

/// Test that weakness doubles attack damage.
#[test]
fn test_weakness_applies() {
    let bird = basic("Bird", 70).with_weakness(EnergyType::Lightning, 2);
    let mut engine = scripted(ready_to_attack(bird), []);

    engine.attack();

    assert_eq!(engine.state().player(P2).board.active().damage(), 40);
    assert!(engine.observer().contains("uses Jolt on Bird for 40 damage"));
}

/// Test that resistance cannot take damage below zero.
#[test]
fn test_resistance_floors_damage() {
    let mole = basic("Mole", 70).with_resistance(EnergyType::Lightning, 30);
    let mut engine = scripted(ready_to_attack(mole), []);

    engine.attack();

    assert_eq!(engine.state().player(P2).board.active().damage(), 0);
}

/// Test that an attack with unpaid cost is refused and the main phase
/// continues.
#[test]
fn test_attack_without_energy() {
    let mut state = in_play(sparker(), basic("Target", 60));
    advance_to(&mut state, 3);
    let mut engine = scripted(
        state,
        [Decision::Action(ActionKind::Attack), Decision::Action(ActionKind::EndTurn)],
    );

    engine.play_turn();

    assert!(warned(&engine, "Sparker does not have enough energy to attack"));
    let history: Vec<ActionKind> = engine.state().history.iter().map(|r| r.action).collect();
    assert_eq!(history, vec![ActionKind::Attack, ActionKind::EndTurn]);
    assert_eq!(engine.state().player(P2).board.active().damage(), 0);
    assert_eq!(engine.state().turn_number, 4);
}

/// Test that an attack ends the main phase.
#[test]
fn test_attack_ends_main_phase() {
    let mut engine = scripted(
        ready_to_attack(basic("Target", 100)),
        [Decision::Action(ActionKind::Attack), Decision::Action(ActionKind::UseHandCard)],
    );

    assert!(engine.play_turn().is_none());

    assert_eq!(engine.decisions().remaining(), 1);
    assert_eq!(engine.state().player(P2).board.active().damage(), 20);
    assert_eq!(engine.state().current_player, P2);
}

/// Test that an attack effect resolves after damage.
#[test]
fn test_attack_effect_poisons() {
    let stinger = basic("Stinger", 60)
        .with_attack(Attack::new("Sting", 10).with_effect(Effect::inflict(StatusCondition::Poisoned)));
    let mut state = in_play(stinger, basic("Target", 100));
    advance_to(&mut state, 3);
    let mut engine = scripted(state, [Decision::Action(ActionKind::Attack)]);

    engine.play_turn();

    let target = engine.state().player(P2).board.active();
    assert_eq!(target.status(), Some(StatusCondition::Poisoned));
    // 10 from the attack, 10 from poison at end of turn.
    assert_eq!(target.damage(), 20);
    assert!(engine.observer().contains("Sting: opponent's active is now poisoned"));
}

/// Test that trainer damage can knock out the opposing active.
#[test]
fn test_trainer_damage_knockout() {
    let mut state = in_play(sparker(), basic("Target", 30));
    let bolt = TrainerCard::goods("Bolt").with_effect(Effect::damage(30));
    state.player_mut(P1).hand.add(bolt.into());
    let mut engine = scripted(state, []);

    engine.play_trainer(0);

    assert_eq!(
        engine.state().winner(),
        Some(GameResult::new(P1, WinReason::NoMonstersInPlay))
    );
}

// =============================================================================
// Knockouts and Promotion
// =============================================================================

/// Test that promotion re-asks until a benched monster is chosen.
#[test]
fn test_promotion_reprompt() {
    let mut state = ready_to_attack(basic("Target", 20));
    state.player_mut(P2).board.place_on_bench(basic("Reserve", 50), 0).unwrap();
    let mut engine = scripted(
        state,
        [
            Decision::Slot(SlotRef::Active),
            Decision::Slot(SlotRef::Bench(7)),
            Decision::Slot(SlotRef::Bench(0)),
        ],
    );

    assert!(engine.attack());

    assert!(warned(&engine, "not the active slot"));
    assert!(warned(&engine, "not the bench 8 slot"));
    let board = &engine.state().player(P2).board;
    assert_eq!(board.active().card().unwrap().name, "Reserve");
    assert!(board.bench().is_empty());
    assert!(engine.state().winner().is_none());
    assert_eq!(engine.decisions().remaining(), 0);
    assert!(engine.observer().contains("Brock promotes Reserve to the active slot"));
}

/// Test that the last prize card wins before any promotion.
#[test]
fn test_last_prize_wins() {
    let mut state = ready_to_attack(basic("Target", 20));
    state.player_mut(P1).prizes.truncate(1);
    state.player_mut(P2).board.place_on_bench(basic("Reserve", 50), 0).unwrap();
    let mut engine = scripted(state, [Decision::Action(ActionKind::Attack)]);

    let result = engine.play_turn();

    assert_eq!(result, Some(GameResult::new(P1, WinReason::PrizesTaken)));
    assert!(engine.state().player(P2).board.active().is_empty());
    assert_eq!(engine.state().player(P2).board.bench().len(), 1);
}

// =============================================================================
// Status Conditions
// =============================================================================

/// Test that poison deals 10 damage at every end of turn.
#[test]
fn test_poison_ticks() {
    let mut state = in_play(sparker(), basic("Target", 100));
    state
        .player_mut(P2)
        .board
        .active_mut()
        .set_status(StatusCondition::Poisoned);
    let mut engine = scripted(state, []);

    engine.end_of_turn();
    engine.end_of_turn();

    let target = engine.state().player(P2).board.active();
    assert_eq!(target.damage(), 20);
    assert_eq!(target.status(), Some(StatusCondition::Poisoned));
    assert!(engine.observer().contains("Target takes 10 poison damage"));
}

/// Test that paralysis wears off at the end of turn.
#[test]
fn test_paralysis_clears() {
    let mut state = in_play(sparker(), sparker());
    state
        .player_mut(P1)
        .board
        .active_mut()
        .set_status(StatusCondition::Paralyzed);
    let mut engine = scripted(state, []);

    engine.end_of_turn();

    assert_eq!(engine.state().player(P1).board.active().status(), None);
    assert!(engine.observer().contains("Sparker is no longer paralyzed"));
}

/// Test both outcomes of the burn coin flip.
#[test]
fn test_burn_coin_flip() {
    for seed in 0..16 {
        let mut state = in_play(sparker(), sparker());
        state.rng = rust_tcg::GameRng::new(seed);
        state.player_mut(P1).board.active_mut().set_status(StatusCondition::Burned);
        let mut engine = scripted(state, []);

        engine.end_of_turn();

        let active = engine.state().player(P1).board.active();
        assert_eq!(active.status(), Some(StatusCondition::Burned));
        if engine.observer().contains("flips heads") {
            assert_eq!(active.damage(), 0);
        } else {
            assert!(engine.observer().contains("flips tails and takes 20 burn damage"));
            assert_eq!(active.damage(), 20);
        }
    }
}

/// Test both outcomes of the sleep coin flip.
#[test]
fn test_sleep_coin_flip() {
    for seed in 0..16 {
        let mut state = in_play(sparker(), sparker());
        state.rng = rust_tcg::GameRng::new(seed);
        state.player_mut(P1).board.active_mut().set_status(StatusCondition::Asleep);
        let mut engine = scripted(state, []);

        engine.end_of_turn();

        let status = engine.state().player(P1).board.active().status();
        if engine.observer().contains("wakes up") {
            assert_eq!(status, None);
        } else {
            assert_eq!(status, Some(StatusCondition::Asleep));
        }
    }
}

/// Test that confusion does nothing at the end of turn.
#[test]
fn test_confusion_no_tick() {
    let mut state = in_play(sparker(), sparker());
    state.player_mut(P1).board.active_mut().set_status(StatusCondition::Confused);
    let mut engine = scripted(state, []);

    engine.end_of_turn();

    let active = engine.state().player(P1).board.active();
    assert_eq!(active.status(), Some(StatusCondition::Confused));
    assert_eq!(active.damage(), 0);
    assert!(engine.observer().entries().is_empty());
}

/// Test that a poison knockout awards a prize and forces a promotion.
#[test]
fn test_poison_knockout_promotes() {
    let mut state = in_play(sparker(), basic("Target", 10));
    state.player_mut(P2).board.place_on_bench(basic("Reserve", 50), 0).unwrap();
    state
        .player_mut(P2)
        .board
        .active_mut()
        .set_status(StatusCondition::Poisoned);
    let mut engine = scripted(state, []);

    engine.end_of_turn();

    let state = engine.state();
    assert_eq!(state.player(P1).prize_count(), 5);
    assert_eq!(state.player(P2).board.active().card().unwrap().name, "Reserve");
    assert_eq!(state.player(P2).board.active().status(), None);
    assert!(state.winner().is_none());
}

/// Test that a poison knockout with an empty bench ends the match.
#[test]
fn test_poison_knockout_empty_bench() {
    let mut state = in_play(basic("Frail", 10), sparker());
    state
        .player_mut(P1)
        .board
        .active_mut()
        .set_status(StatusCondition::Poisoned);
    let mut engine = scripted(state, [Decision::Action(ActionKind::EndTurn)]);

    let result = engine.play_turn();

    assert_eq!(result, Some(GameResult::new(P2, WinReason::NoMonstersInPlay)));
    assert_eq!(engine.state().turn_number, 1);
}
