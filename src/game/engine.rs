//! The match orchestrator and its turn loop.
//!
//! ## Turn structure
//!
//! `Setup` runs once. Each turn then moves through:
//! 1. `Draw`: the current player draws; an empty deck loses the match
//! 2. `Main`: actions until `EndTurn`, an attack, or a winner
//! 3. `EndOfTurn`: status ticks and knockouts, in seat order
//!
//! Win conditions are checked at every phase boundary. Once a winner is
//! latched the phase becomes `GameOver` and nothing else executes.

use tracing::debug;

use crate::cards::Card;
use crate::core::{
    ActionKind, GameError, GameResult, GameState, MatchConfig, Phase, PlayerId, SetupError, WinReason,
};
use crate::interface::{DecisionProvider, GameObserver};
use crate::rules::{Rules, StandardRules};

/// Drives one match: owns the state and calls out for decisions and
/// notifications.
pub struct GameEngine<D, O, R = StandardRules> {
    pub(crate) state: GameState,
    pub(crate) decisions: D,
    pub(crate) observer: O,
    pub(crate) rules: R,
}

impl<D: DecisionProvider, O: GameObserver> GameEngine<D, O> {
    /// Create a match with freshly shuffled decks.
    pub fn new(
        config: MatchConfig,
        first_deck: Vec<Card>,
        second_deck: Vec<Card>,
        decisions: D,
        observer: O,
    ) -> Result<Self, SetupError> {
        let state = GameState::new(config, first_deck, second_deck)?;
        Ok(Self::from_state(state, decisions, observer))
    }

    /// Drive an existing state, e.g. one restored from a checkpoint.
    pub fn from_state(state: GameState, decisions: D, observer: O) -> Self {
        Self {
            state,
            decisions,
            observer,
            rules: StandardRules,
        }
    }
}

impl<D: DecisionProvider, O: GameObserver, R: Rules> GameEngine<D, O, R> {
    /// Replace the rule set.
    pub fn with_rules<R2: Rules>(self, rules: R2) -> GameEngine<D, O, R2> {
        GameEngine {
            state: self.state,
            decisions: self.decisions,
            observer: self.observer,
            rules,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn decisions(&self) -> &D {
        &self.decisions
    }

    pub fn decisions_mut(&mut self) -> &mut D {
        &mut self.decisions
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Turn Loop ===

    /// Run setup (if still pending) and play turns until a winner exists.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        if self.state.phase == Phase::Setup {
            self.setup()?;
        }
        loop {
            if let Some(result) = self.play_turn() {
                return Ok(result);
            }
        }
    }

    /// Play one full turn for the current player.
    ///
    /// Returns the result once the match is over.
    pub fn play_turn(&mut self) -> Option<GameResult> {
        if let Some(result) = self.state.winner() {
            return Some(result);
        }
        if self.state.phase == Phase::Setup {
            return None;
        }

        self.draw_phase();
        if self.check_winner() {
            return self.state.winner();
        }

        self.main_phase();
        if self.check_winner() {
            return self.state.winner();
        }

        self.end_of_turn();
        if self.check_winner() {
            return self.state.winner();
        }

        self.state.next_turn();
        None
    }

    /// The current player draws one card. An empty deck loses the match.
    pub fn draw_phase(&mut self) {
        self.enter_phase(Phase::Draw);
        let player = self.state.current_player;

        if self.state.player(player).deck.is_empty() {
            let name = self.name(player);
            self.observer.info(&format!("{name} cannot draw: the deck is empty"));
            self.declare_winner(GameResult::new(player.opponent(), WinReason::DeckOut));
            return;
        }

        self.state.player_mut(player).draw(1);
        let message = format!(
            "{} draws a card ({} left in deck)",
            self.name(player),
            self.state.player(player).deck.len()
        );
        self.observer.info(&message);
    }

    /// Offer legal actions until the turn ends, an attack resolves, or a
    /// winner exists.
    pub fn main_phase(&mut self) {
        self.enter_phase(Phase::Main);
        let player = self.state.current_player;

        loop {
            let available = self.available_actions();
            let choice = self.decisions.select_action(player, &available);
            if !available.contains(&choice) {
                self.observer.warn(&format!("{choice} is not available right now"));
                continue;
            }

            self.state.record_action(choice);
            let ends_phase = match choice {
                ActionKind::Retreat => {
                    self.retreat();
                    false
                }
                ActionKind::UseHandCard => {
                    self.use_hand_card();
                    false
                }
                ActionKind::Attack => self.attack(),
                ActionKind::EndTurn => true,
            };

            if self.check_winner() || ends_phase {
                return;
            }
        }
    }

    /// Actions the current player may pick right now.
    #[must_use]
    pub fn available_actions(&self) -> Vec<ActionKind> {
        let player = self.state.current_player;
        let mut actions = Vec::with_capacity(4);

        if self.rules.can_retreat(&self.state, player) {
            actions.push(ActionKind::Retreat);
        }
        if !self.state.player(player).hand.is_empty() {
            actions.push(ActionKind::UseHandCard);
        }
        if self.rules.can_attack(&self.state, player) {
            actions.push(ActionKind::Attack);
        }
        actions.push(ActionKind::EndTurn);
        actions
    }

    /// Resolve status conditions and knockouts for each seat in order.
    pub fn end_of_turn(&mut self) {
        self.enter_phase(Phase::EndOfTurn);

        for player in PlayerId::all() {
            if self.state.player(player).board.active().is_empty() {
                continue;
            }
            self.resolve_status(player);
            self.resolve_knockout(player);
            if self.check_winner() {
                return;
            }
        }
    }

    // === Win Handling ===

    /// Latch the result of the win check, if any. Returns true when the
    /// match is over.
    pub fn check_winner(&mut self) -> bool {
        match self.state.check_win_condition() {
            Some(result) => {
                self.declare_winner(result);
                true
            }
            None => false,
        }
    }

    pub(crate) fn declare_winner(&mut self, result: GameResult) {
        if self.state.phase == Phase::GameOver {
            return;
        }
        let result = self.state.set_winner(result);
        self.state.phase = Phase::GameOver;
        debug!(turn = self.state.turn_number, winner = %result.winner, reason = ?result.reason, "game over");

        let message = format!("{} wins: {}", self.name(result.winner), result.reason);
        self.observer.info(&message);
    }

    // === Helpers ===

    pub(crate) fn name(&self, player: PlayerId) -> String {
        self.state.player(player).name.clone()
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
        debug!(
            turn = self.state.turn_number,
            player = %self.state.current_player,
            phase = ?phase,
            "phase start"
        );
    }
}
