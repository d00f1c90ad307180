//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_tcg::{
    Attack, Card, Decision, Deck, EnergyCard, EnergyType, GameEngine, GameRng, GameState,
    MatchConfig, MonsterCard, Player, PlayerId, PlayerMap, RecordingObserver, ScriptedDecisions,
    SlotRef, StartingPlayer,
};

pub const P1: PlayerId = PlayerId::FIRST;
pub const P2: PlayerId = PlayerId::SECOND;

pub type TestEngine = GameEngine<ScriptedDecisions, RecordingObserver>;

/// A 60 HP Lightning basic with a 20-damage attack costing one Lightning.
pub fn sparker() -> MonsterCard {
    MonsterCard::basic("Sparker", 60)
        .with_types([EnergyType::Lightning])
        .with_retreat_cost(1)
        .with_attack(Attack::new("Jolt", 20).with_cost([EnergyType::Lightning]))
}

pub fn basic(name: &str, hp: u32) -> MonsterCard {
    MonsterCard::basic(name, hp)
}

pub fn energy(kind: EnergyType) -> Card {
    EnergyCard::basic(kind).into()
}

/// `n` Grass energies.
pub fn filler(n: usize) -> Vec<Card> {
    (0..n).map(|_| energy(EnergyType::Grass)).collect()
}

/// Fixed starting player, names "Ash" and "Brock".
pub fn config() -> MatchConfig {
    MatchConfig::default()
        .with_starting_player(StartingPlayer::Fixed(P1))
        .with_player_names("Ash", "Brock")
}

/// A setup-phase state whose decks keep the given order.
pub fn stacked_state(config: MatchConfig, first: Vec<Card>, second: Vec<Card>) -> GameState {
    let capacity = config.bench_capacity;
    let [a, b] = config.player_names.clone();
    let players = PlayerMap::from_pair(
        Player::new(a, Deck::stacked(first), capacity),
        Player::new(b, Deck::stacked(second), capacity),
    );
    let rng = GameRng::new(config.seed);
    GameState::from_players(config, players, rng)
}

/// A state on turn 1 (first player to act) with the given actives,
/// 20-card decks and six prizes each.
pub fn in_play(first_active: MonsterCard, second_active: MonsterCard) -> GameState {
    let mut state = stacked_state(config(), filler(26), filler(26));
    for (id, active) in [(P1, first_active), (P2, second_active)] {
        let player = state.player_mut(id);
        player.set_aside_prizes(6);
        player.board.place_active(active, 0).unwrap();
    }
    state.begin_play(P1);
    state
}

/// Advance to `turn` without playing the intermediate turns.
pub fn advance_to(state: &mut GameState, turn: u32) {
    while state.turn_number < turn {
        state.next_turn();
    }
}

pub fn attach(state: &mut GameState, player: PlayerId, at: SlotRef, kind: EnergyType) {
    state
        .player_mut(player)
        .board
        .attach_energy(at, EnergyCard::basic(kind))
        .unwrap();
}

pub fn scripted(state: GameState, script: impl IntoIterator<Item = Decision>) -> TestEngine {
    GameEngine::from_state(state, ScriptedDecisions::new(script), RecordingObserver::new())
}

pub fn warned(engine: &TestEngine, needle: &str) -> bool {
    engine
        .observer()
        .messages(rust_tcg::LogLevel::Warn)
        .any(|m| m.contains(needle))
}
