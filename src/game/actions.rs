//! Main-phase actions: playing cards from hand and retreating.
//!
//! Each action asks the rules first. A refused action is reported through
//! `warn` and leaves the state untouched.

use crate::cards::{Card, TrainerKind};
use crate::core::PlayerId;
use crate::effects::EffectResolver;
use crate::interface::{DecisionProvider, GameObserver};
use crate::rules::Rules;
use crate::zones::SlotRef;

use super::GameEngine;

impl<D: DecisionProvider, O: GameObserver, R: Rules> GameEngine<D, O, R> {
    /// Choose a card from hand (in display order) and play it.
    pub fn use_hand_card(&mut self) {
        let player = self.state.current_player;
        let hand = &self.state.player(player).hand;
        let order = hand.sorted_indices();
        let candidates: Vec<&Card> = order.iter().map(|&i| &hand.cards()[i]).collect();

        let Some(choice) = self.decisions.select_card(player, &candidates) else {
            return;
        };
        let Some(&index) = order.get(choice) else {
            self.observer.warn(&format!("Card choice {choice} is out of range"));
            return;
        };

        let card = &self.state.player(player).hand.cards()[index];
        if card.is_basic_monster() {
            self.play_basic(index);
        } else if card.is_monster() {
            self.play_evolution(index);
        } else if card.is_energy() {
            self.attach_energy(index);
        } else {
            self.play_trainer(index);
        }
    }

    /// Put a Basic monster into play: the empty active slot when the player
    /// confirms, otherwise the bench.
    pub fn play_basic(&mut self, index: usize) {
        let player = self.state.current_player;
        let turn = self.state.turn_number;
        let who = self.name(player);
        let board = &self.state.player(player).board;

        let to_active = board.active().is_empty()
            && self.decisions.confirm(player, "Place this monster as your active monster?");
        if !to_active && board.bench().is_full() {
            self.observer.warn("Your bench is full");
            return;
        }

        let seat = self.state.player_mut(player);
        let Some(monster) = seat.hand.take_monster(index) else {
            return;
        };
        let name = monster.name.clone();
        let placed = if to_active {
            seat.board.place_active(monster, turn).map(|()| "as the active monster")
        } else {
            seat.board.place_on_bench(monster, turn).map(|()| "on the bench")
        };

        match placed {
            Ok(place) => self.observer.info(&format!("{who} places {name} {place}")),
            Err(err) => self.observer.warn(&err.to_string()),
        }
    }

    /// Evolve one of the slots the rules allow.
    pub fn play_evolution(&mut self, index: usize) {
        let player = self.state.current_player;
        let turn = self.state.turn_number;
        let card = &self.state.player(player).hand.cards()[index];
        let name = card.name().to_string();

        let targets: Vec<SlotRef> = self
            .state
            .player(player)
            .board
            .occupied_slots()
            .into_iter()
            .filter(|&at| self.rules.can_evolve(&self.state, player, at, card))
            .collect();
        if targets.is_empty() {
            self.observer.warn(&format!("Nothing can evolve into {name} right now"));
            return;
        }

        let at = self.decisions.select_slot(player, &targets);
        if !targets.contains(&at) {
            self.observer.warn(&format!("{name} cannot evolve the monster in the {at} slot"));
            return;
        }

        let seat = self.state.player_mut(player);
        let previous = seat
            .board
            .slot(at)
            .and_then(|slot| slot.card())
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let Some(evolution) = seat.hand.take_monster(index) else {
            return;
        };

        match seat.board.evolve(at, evolution, turn) {
            Ok(()) => {
                let who = self.name(player);
                self.observer.info(&format!("{who}'s {previous} evolves into {name}"));
            }
            Err(err) => self.observer.warn(&err.to_string()),
        }
    }

    /// Play a trainer and resolve its effect. The card goes to the trash.
    pub fn play_trainer(&mut self, index: usize) {
        let player = self.state.current_player;
        let Some(Card::Trainer(trainer)) = self.state.player(player).hand.cards().get(index) else {
            return;
        };
        let (name, kind) = (trainer.name.clone(), trainer.kind);

        if !self.rules.can_play_trainer(&self.state, player, kind) {
            let reason = match kind {
                TrainerKind::Supporter if self.state.player(player).used_supporter => {
                    "You already played a supporter this turn"
                }
                TrainerKind::Supporter => "You cannot play a supporter on the first turn",
                _ => "You cannot play that card right now",
            };
            self.observer.warn(reason);
            return;
        }
        if matches!(kind, TrainerKind::Tool | TrainerKind::Stadium) {
            self.observer.warn(&format!("{name} has no effect in play; it stays in your hand"));
            return;
        }

        let seat = self.state.player_mut(player);
        let Some(trainer) = seat.hand.take_trainer(index) else {
            return;
        };
        if kind == TrainerKind::Supporter {
            seat.used_supporter = true;
        }

        let who = self.name(player);
        match &trainer.effect {
            Some(effect) => {
                let result = EffectResolver::resolve(&mut self.state, player, effect);
                self.observer.info(&format!("{who} plays {name}: {result}"));
            }
            None => self.observer.info(&format!("{who} plays {name}")),
        }
        self.state.player_mut(player).board.trash_mut().add(trainer);
        self.resolve_knockout(player.opponent());
    }

    /// Attach an energy to one of the player's monsters.
    pub fn attach_energy(&mut self, index: usize) {
        let player = self.state.current_player;
        if !self.rules.can_attach_energy(&self.state, player) {
            self.observer.warn("You already attached an energy this turn");
            return;
        }

        let targets = self.state.player(player).board.occupied_slots();
        if targets.is_empty() {
            self.observer.warn("There is no monster to attach energy to");
            return;
        }
        let at = self.decisions.select_slot(player, &targets);
        if !targets.contains(&at) {
            self.observer.warn(&format!("There is no monster in the {at} slot"));
            return;
        }

        let seat = self.state.player_mut(player);
        let Some(energy) = seat.hand.take_energy(index) else {
            return;
        };
        let energy_name = energy.name.clone();
        let result = seat.board.attach_energy(at, energy);
        seat.energy_attached_this_turn = result.is_ok();

        match result {
            Ok(()) => {
                let target = self.monster_name(player, at);
                let who = self.name(player);
                self.observer.info(&format!("{who} attaches {energy_name} to {target}"));
            }
            Err(err) => self.observer.warn(&err.to_string()),
        }
    }

    /// Swap the active monster with a benched one, discarding energy equal
    /// to the retreat cost.
    pub fn retreat(&mut self) {
        let player = self.state.current_player;
        if !self.rules.can_retreat(&self.state, player) {
            self.observer.warn("Your active monster cannot retreat right now");
            return;
        }

        let board = &self.state.player(player).board;
        let cost = board.active().card().map_or(0, |c| c.retreat_cost) as usize;
        let targets: Vec<SlotRef> = (0..board.bench().len()).map(SlotRef::Bench).collect();
        let outgoing = self.monster_name(player, SlotRef::Active);

        let at = self.decisions.select_slot(player, &targets);
        let SlotRef::Bench(bench_index) = at else {
            self.observer.warn("Choose a benched monster to switch in");
            return;
        };
        if !targets.contains(&at) {
            self.observer.warn(&format!("There is no monster in the {at} slot"));
            return;
        }

        let seat = self.state.player_mut(player);
        match seat.board.retreat(bench_index, cost) {
            Ok(()) => {
                seat.retreated_this_turn = true;
                let incoming = self.monster_name(player, SlotRef::Active);
                let who = self.name(player);
                self.observer.info(&format!(
                    "{who} retreats {outgoing} (discarding {cost} energy); {incoming} is now active"
                ));
            }
            Err(err) => self.observer.warn(&err.to_string()),
        }
    }

    pub(crate) fn monster_name(&self, player: PlayerId, at: SlotRef) -> String {
        self.state
            .player(player)
            .board
            .slot(at)
            .and_then(|slot| slot.card())
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}
