//! Match setup: starting player, mulligans, bonus draws, opening board,
//! prizes.

use tracing::debug;

use crate::cards::Card;
use crate::core::{Phase, PlayerId, SetupError, StartingPlayer};
use crate::interface::{DecisionProvider, GameObserver};
use crate::rules::Rules;

use super::GameEngine;

impl<D: DecisionProvider, O: GameObserver, R: Rules> GameEngine<D, O, R> {
    /// Run setup and enter turn 1.
    ///
    /// Fails without touching any hand when a deck holds no Basic monster,
    /// since no opening hand could ever be legal.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        if self.state.phase != Phase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        for player in PlayerId::all() {
            if !self.state.player(player).deck.contains(Card::is_basic_monster) {
                let who = self.name(player);
                self.observer.error(&format!("{who} has no Basic monster in their deck"));
                return Err(SetupError::NoBasicMonster(player));
            }
        }

        let starting = self.choose_starting_player();
        let who = self.name(starting);
        self.observer.info(&format!("{who} goes first"));

        for player in PlayerId::all() {
            self.draw_opening_hand(player);
        }
        for player in PlayerId::all() {
            self.offer_bonus_draws(player);
        }
        for player in PlayerId::all() {
            self.place_opening_active(player)?;
            self.place_opening_bench(player);
        }

        let prize_count = self.state.config.prize_count;
        for player in PlayerId::all() {
            self.state.player_mut(player).set_aside_prizes(prize_count);
            let message = format!(
                "{} sets aside {} prize cards",
                self.name(player),
                self.state.player(player).prize_count()
            );
            self.observer.info(&message);
        }

        self.state.begin_play(starting);
        debug!(starting = %starting, "setup complete");
        Ok(())
    }

    fn choose_starting_player(&mut self) -> PlayerId {
        match self.state.config.starting_player {
            StartingPlayer::Fixed(player) => player,
            StartingPlayer::Ask => self.decisions.choose_starting_player(),
            StartingPlayer::Random => {
                if self.state.rng.flip_coin() {
                    PlayerId::FIRST
                } else {
                    PlayerId::SECOND
                }
            }
        }
    }

    /// Draw until the hand holds a Basic monster, counting mulligans.
    fn draw_opening_hand(&mut self, player: PlayerId) {
        let hand_size = self.state.config.opening_hand_size;
        loop {
            self.state.player_mut(player).draw(hand_size);
            if self.state.player(player).hand.contains(Card::is_basic_monster) {
                break;
            }

            let seat = self.state.player_mut(player);
            seat.mulligan_count += 1;
            let revealed: Vec<&str> = seat.hand.cards().iter().map(Card::name).collect();
            let message = format!(
                "{} has no Basic monster and reveals [{}]: mulligan #{}",
                seat.name,
                revealed.join(", "),
                seat.mulligan_count
            );
            self.observer.info(&message);
            self.state.return_hand_to_deck(player);
        }
    }

    /// Let `player` draw up to one card per opponent mulligan.
    fn offer_bonus_draws(&mut self, player: PlayerId) {
        let max = self.state.player(player.opponent()).mulligan_count as usize;
        if max == 0 {
            return;
        }

        let requested = self.decisions.select_integer(player, 0, max);
        let count = requested.min(max);
        if requested > max {
            self.observer.warn(&format!("{requested} is more than {max}; drawing {max}"));
        }
        let drawn = self.state.player_mut(player).draw(count);
        let who = self.name(player);
        self.observer.info(&format!("{who} draws {drawn} bonus card(s)"));
    }

    fn place_opening_active(&mut self, player: PlayerId) -> Result<(), SetupError> {
        let who = self.name(player);
        loop {
            let Some(index) = self.choose_basic_from_hand(player) else {
                self.observer.warn("You must choose a Basic monster as your active monster");
                if !self.state.player(player).hand.contains(Card::is_basic_monster) {
                    return Err(SetupError::NoBasicMonster(player));
                }
                continue;
            };

            let seat = self.state.player_mut(player);
            if let Some(monster) = seat.hand.take_monster(index) {
                let name = monster.name.clone();
                if seat.board.place_active(monster, 0).is_ok() {
                    self.observer.info(&format!("{who} places {name} as the active monster"));
                    return Ok(());
                }
            }
        }
    }

    fn place_opening_bench(&mut self, player: PlayerId) {
        let who = self.name(player);
        loop {
            let seat = self.state.player(player);
            if seat.board.bench().is_full() || !seat.hand.contains(Card::is_basic_monster) {
                return;
            }
            if !self.decisions.confirm(player, "Place a Basic monster on the bench?") {
                return;
            }
            let Some(index) = self.choose_basic_from_hand(player) else {
                return;
            };

            let seat = self.state.player_mut(player);
            if let Some(monster) = seat.hand.take_monster(index) {
                let name = monster.name.clone();
                if seat.board.place_on_bench(monster, 0).is_ok() {
                    self.observer.info(&format!("{who} places {name} on the bench"));
                }
            }
        }
    }

    /// Ask for one of the Basic monsters in hand. Returns its storage index.
    fn choose_basic_from_hand(&mut self, player: PlayerId) -> Option<usize> {
        let hand = &self.state.player(player).hand;
        let indices = hand.indices_where(Card::is_basic_monster);
        let candidates: Vec<&Card> = indices.iter().map(|&i| &hand.cards()[i]).collect();

        let choice = self.decisions.select_card(player, &candidates)?;
        match indices.get(choice) {
            Some(&index) => Some(index),
            None => {
                self.observer.warn(&format!("Card choice {choice} is out of range"));
                None
            }
        }
    }
}
