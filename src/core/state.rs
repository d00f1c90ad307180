//! Match state: players, turn bookkeeping and win conditions.
//!
//! ## Player
//!
//! Everything one seat owns:
//! - Deck, hand, board (active, bench, trash) and prize cards
//! - Per-turn flags, reset once at the start of that player's own turn
//! - Lifetime counters (turns taken, mulligans)
//!
//! ## GameState
//!
//! Both players plus:
//! - Turn number, current and starting player, phase
//! - The latched winner, if any
//! - The match RNG and the action history

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionKind, ActionRecord};
use super::config::MatchConfig;
use super::error::{GameError, SetupError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::zones::{Board, Deck, Hand};

/// Where the match is in the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    Draw,
    Main,
    EndOfTurn,
    GameOver,
}

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner took their last prize card.
    PrizesTaken,
    /// The loser had to draw from an empty deck.
    DeckOut,
    /// The loser had no monster left in play.
    NoMonstersInPlay,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            WinReason::PrizesTaken => "took all prize cards",
            WinReason::DeckOut => "opponent could not draw",
            WinReason::NoMonstersInPlay => "opponent has no monsters in play",
        };
        f.write_str(text)
    }
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: PlayerId, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }
}

/// One seat's cards, flags and counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub deck: Deck,
    pub hand: Hand,
    pub board: Board,
    pub prizes: Vec<Card>,

    // === Per-turn flags ===
    pub used_supporter: bool,
    pub energy_attached_this_turn: bool,
    pub retreated_this_turn: bool,

    // === Lifetime counters ===
    pub turns_taken: u32,
    pub mulligan_count: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, deck: Deck, bench_capacity: usize) -> Self {
        Self {
            name: name.into(),
            deck,
            hand: Hand::new(),
            board: Board::with_bench_capacity(bench_capacity),
            prizes: Vec::new(),
            used_supporter: false,
            energy_attached_this_turn: false,
            retreated_this_turn: false,
            turns_taken: 0,
            mulligan_count: 0,
        }
    }

    /// Draw up to `count` cards into hand. Returns how many were drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        let drawn = self.deck.draw_many(count);
        let n = drawn.len();
        self.hand.extend(drawn);
        n
    }

    /// Move up to `count` cards from the top of the deck to the prize pile.
    pub fn set_aside_prizes(&mut self, count: usize) {
        self.prizes = self.deck.draw_many(count);
    }

    /// Move one prize card into hand. `None` if no prizes remain.
    pub fn take_prize(&mut self) -> Option<&Card> {
        if self.prizes.is_empty() {
            return None;
        }
        let prize = self.prizes.remove(0);
        self.hand.add(prize);
        self.hand.cards().last()
    }

    #[must_use]
    pub fn prize_count(&self) -> usize {
        self.prizes.len()
    }

    /// Clear the once-per-turn flags.
    pub fn reset_turn_flags(&mut self) {
        self.used_supporter = false;
        self.energy_attached_this_turn = false;
        self.retreated_this_turn = false;
    }

    #[must_use]
    pub fn has_monsters_in_play(&self) -> bool {
        self.board.has_monsters_in_play()
    }
}

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub config: MatchConfig,

    pub players: PlayerMap<Player>,

    /// Turn number (1 for the first turn after setup).
    pub turn_number: u32,

    pub current_player: PlayerId,

    pub starting_player: PlayerId,

    pub phase: Phase,

    /// Set once; authoritative afterwards.
    winner: Option<GameResult>,

    /// Deterministic RNG for shuffles, coin flips and seat selection.
    pub rng: GameRng,

    /// Main-phase decisions in order.
    pub history: Vector<ActionRecord>,

    action_sequence: u32,
}

impl GameState {
    /// Create a match in the setup phase. Both decks are shuffled.
    pub fn new(config: MatchConfig, first_deck: Vec<Card>, second_deck: Vec<Card>) -> Result<Self, SetupError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let first = Deck::shuffled(first_deck, &mut rng);
        let second = Deck::shuffled(second_deck, &mut rng);
        let [first_name, second_name] = config.player_names.clone();

        let players = PlayerMap::from_pair(
            Player::new(first_name, first, config.bench_capacity),
            Player::new(second_name, second, config.bench_capacity),
        );

        Ok(Self::from_players(config, players, rng))
    }

    /// Create a match from prepared players (decks keep their order).
    #[must_use]
    pub fn from_players(config: MatchConfig, players: PlayerMap<Player>, rng: GameRng) -> Self {
        Self {
            config,
            players,
            turn_number: 0,
            current_player: PlayerId::FIRST,
            starting_player: PlayerId::FIRST,
            phase: Phase::Setup,
            winner: None,
            rng,
            history: Vector::new(),
            action_sequence: 0,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Shuffle a player's deck with the match RNG.
    pub fn shuffle_deck(&mut self, id: PlayerId) {
        self.players[id].deck.shuffle(&mut self.rng);
    }

    /// Return a player's whole hand to the deck and shuffle.
    pub fn return_hand_to_deck(&mut self, id: PlayerId) {
        let player = &mut self.players[id];
        let hand = player.hand.take_all();
        player.deck.return_and_shuffle(hand, &mut self.rng);
    }

    // === Turns ===

    /// True during the starting player's first turn only.
    #[must_use]
    pub fn is_starting_players_first_turn(&self) -> bool {
        self.phase != Phase::Setup
            && self.turn_number == 1
            && self.current_player == self.starting_player
    }

    /// Enter turn 1 with `starting` to act.
    pub fn begin_play(&mut self, starting: PlayerId) {
        self.starting_player = starting;
        self.current_player = starting;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.phase = Phase::Draw;
        self.players[starting].reset_turn_flags();
    }

    /// Hand the turn to the other player.
    pub fn next_turn(&mut self) {
        self.players[self.current_player].turns_taken += 1;
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
        self.action_sequence = 0;
        self.phase = Phase::Draw;
        self.players[self.current_player].reset_turn_flags();
    }

    // === Action History ===

    /// Record a main-phase decision by the current player.
    pub fn record_action(&mut self, action: ActionKind) {
        let record = ActionRecord::new(self.current_player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    // === Win Conditions ===

    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.winner
    }

    /// Latch a winner. A winner that is already set is kept.
    pub fn set_winner(&mut self, result: GameResult) -> GameResult {
        *self.winner.get_or_insert(result)
    }

    /// Evaluate the win conditions without latching.
    ///
    /// Precedence: a latched winner, then a player with no prizes left,
    /// then a player with no monsters in play (who loses).
    #[must_use]
    pub fn check_win_condition(&self) -> Option<GameResult> {
        if let Some(result) = self.winner {
            return Some(result);
        }
        if self.phase == Phase::Setup {
            return None;
        }

        if let Some((id, _)) = self.players.iter().find(|(_, p)| p.prize_count() == 0) {
            return Some(GameResult::new(id, WinReason::PrizesTaken));
        }

        self.players
            .iter()
            .find(|(_, p)| !p.has_monsters_in_play())
            .map(|(id, _)| GameResult::new(id.opponent(), WinReason::NoMonstersInPlay))
    }

    // === Checkpoints ===

    /// Encode the complete state, including the RNG position.
    pub fn checkpoint(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::checkpoint`].
    pub fn restore(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EnergyCard, EnergyType, MonsterCard};

    fn deck(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    MonsterCard::basic(format!("Mon{i}"), 50).into()
                } else {
                    EnergyCard::basic(EnergyType::Grass).into()
                }
            })
            .collect()
    }

    fn in_play_state() -> GameState {
        let mut state = GameState::new(MatchConfig::default(), deck(20), deck(20)).unwrap();
        for id in PlayerId::all() {
            let player = state.player_mut(id);
            player.set_aside_prizes(6);
            player.board.place_active(MonsterCard::basic("Lead", 60), 0).unwrap();
        }
        state.begin_play(PlayerId::FIRST);
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(MatchConfig::default(), deck(10), deck(12)).unwrap();

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.player(PlayerId::FIRST).deck.len(), 10);
        assert_eq!(state.player(PlayerId::SECOND).deck.len(), 12);
        assert_eq!(state.player(PlayerId::SECOND).name, "Player 2");
        assert!(state.check_win_condition().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MatchConfig::default().with_prize_count(0);
        assert!(matches!(
            GameState::new(config, deck(10), deck(10)),
            Err(SetupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_player_draw_and_prizes() {
        let mut player = Player::new("P", Deck::stacked(deck(10)), 5);

        assert_eq!(player.draw(3), 3);
        player.set_aside_prizes(6);
        assert_eq!(player.prize_count(), 6);
        assert_eq!(player.deck.len(), 1);

        assert!(player.take_prize().is_some());
        assert_eq!(player.hand.len(), 4);
        assert_eq!(player.prize_count(), 5);
    }

    #[test]
    fn test_take_prize_when_empty() {
        let mut player = Player::new("P", Deck::default(), 5);
        assert!(player.take_prize().is_none());
        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_turn_advance_resets_new_current() {
        let mut state = in_play_state();
        assert!(state.is_starting_players_first_turn());

        state.player_mut(PlayerId::SECOND).used_supporter = true;
        state.player_mut(PlayerId::FIRST).used_supporter = true;
        state.next_turn();

        assert_eq!(state.turn_number, 2);
        assert_eq!(state.current_player, PlayerId::SECOND);
        assert!(!state.player(PlayerId::SECOND).used_supporter);
        assert!(state.player(PlayerId::FIRST).used_supporter);
        assert_eq!(state.player(PlayerId::FIRST).turns_taken, 1);
        assert!(!state.is_starting_players_first_turn());
    }

    #[test]
    fn test_win_latched_overrides_prizes() {
        let mut state = in_play_state();
        state.player_mut(PlayerId::FIRST).prizes.clear();

        state.set_winner(GameResult::new(PlayerId::SECOND, WinReason::DeckOut));

        assert_eq!(
            state.check_win_condition(),
            Some(GameResult::new(PlayerId::SECOND, WinReason::DeckOut))
        );
    }

    #[test]
    fn test_set_winner_keeps_first() {
        let mut state = in_play_state();
        state.set_winner(GameResult::new(PlayerId::FIRST, WinReason::PrizesTaken));
        let kept = state.set_winner(GameResult::new(PlayerId::SECOND, WinReason::DeckOut));

        assert_eq!(kept.winner, PlayerId::FIRST);
    }

    #[test]
    fn test_win_by_prizes() {
        let mut state = in_play_state();
        state.player_mut(PlayerId::SECOND).prizes.clear();

        let result = state.check_win_condition().unwrap();
        assert_eq!(result, GameResult::new(PlayerId::SECOND, WinReason::PrizesTaken));
    }

    #[test]
    fn test_win_by_empty_board() {
        let mut state = in_play_state();
        state.player_mut(PlayerId::FIRST).board.knockout_active();

        let result = state.check_win_condition().unwrap();
        assert_eq!(result, GameResult::new(PlayerId::SECOND, WinReason::NoMonstersInPlay));
        assert_eq!(result.loser(), PlayerId::FIRST);
    }

    #[test]
    fn test_record_action_sequence() {
        let mut state = in_play_state();
        state.record_action(ActionKind::UseHandCard);
        state.record_action(ActionKind::EndTurn);
        state.next_turn();
        state.record_action(ActionKind::Attack);

        let seqs: Vec<_> = state.history.iter().map(|r| (r.turn, r.sequence)).collect();
        assert_eq!(seqs, vec![(1, 0), (1, 1), (2, 0)]);
        assert_eq!(state.history[2].player, PlayerId::SECOND);
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut state = in_play_state();
        state.player_mut(PlayerId::FIRST).draw(2);
        state.record_action(ActionKind::EndTurn);

        let bytes = state.checkpoint().unwrap();
        let mut restored = GameState::restore(&bytes).unwrap();

        assert_eq!(restored.players, state.players);
        assert_eq!(restored.history, state.history);
        assert_eq!(restored.turn_number, state.turn_number);
        assert_eq!(restored.rng.flip_coin(), state.rng.flip_coin());
    }

    #[test]
    fn test_restore_garbage_fails() {
        assert!(matches!(
            GameState::restore(&[0xff, 0x01]),
            Err(GameError::Snapshot(_))
        ));
    }
}
