//! Attacks, knockouts and status conditions.

use crate::cards::{Attack, MonsterCard};
use crate::core::{GameResult, PlayerId, WinReason};
use crate::effects::EffectResolver;
use crate::interface::{DecisionProvider, GameObserver};
use crate::rules::Rules;
use crate::zones::{SlotRef, StatusCondition};

use super::GameEngine;

/// Poison damage per end of turn.
pub const POISON_DAMAGE: u32 = 10;

/// Burn damage on a failed coin flip.
pub const BURN_DAMAGE: u32 = 20;

/// Apply the defender's weakness, then its resistance, to `base` damage.
///
/// Each applies only when the attacker has the matching type.
#[must_use]
pub fn modified_damage(base: u32, attacker: &MonsterCard, defender: &MonsterCard) -> u32 {
    let mut damage = base;
    if let Some(weakness) = defender.weakness {
        if attacker.has_type(weakness.energy) {
            damage = damage.saturating_mul(weakness.multiplier);
        }
    }
    if let Some(resistance) = defender.resistance {
        if attacker.has_type(resistance.energy) {
            damage = damage.saturating_sub(resistance.reduction);
        }
    }
    damage
}

impl<D: DecisionProvider, O: GameObserver, R: Rules> GameEngine<D, O, R> {
    /// Attack with the current player's active monster.
    ///
    /// Only attacks whose cost is paid are offered. Returns true when an
    /// attack resolved (which ends the main phase).
    pub fn attack(&mut self) -> bool {
        let player = self.state.current_player;
        if !self.rules.can_attack(&self.state, player) {
            self.observer.warn("Your active monster cannot attack right now");
            return false;
        }

        let active = self.state.player(player).board.active();
        let Some(attacker) = active.card() else {
            return false;
        };
        let affordable: Vec<&Attack> = attacker
            .attacks
            .iter()
            .filter(|attack| self.rules.meets_attack_cost(active, attack))
            .collect();
        if affordable.is_empty() {
            let message = format!("{} does not have enough energy to attack", attacker.name);
            self.observer.warn(&message);
            return false;
        }

        let choice = self.decisions.select_attack(player, &affordable);
        let Some(&attack) = affordable.get(choice) else {
            self.observer.warn(&format!("Attack choice {choice} is out of range"));
            return false;
        };
        let attack = attack.clone();
        let attacker = attacker.clone();

        let defender = player.opponent();
        let target = self.state.player_mut(defender).board.active_mut();
        let (damage, target_name) = match target.card() {
            Some(card) => (modified_damage(attack.damage, &attacker, card), card.name.clone()),
            None => (0, String::new()),
        };
        target.add_damage(damage);

        let who = self.name(player);
        self.observer.info(&format!(
            "{who}'s {} uses {} on {target_name} for {damage} damage",
            attacker.name, attack.name
        ));

        if let Some(effect) = &attack.effect {
            let result = EffectResolver::resolve(&mut self.state, player, effect);
            self.observer.info(&format!("{}: {result}", attack.name));
        }

        self.resolve_knockout(defender);
        true
    }

    /// Knock out `defender`'s active monster if it has no HP left.
    ///
    /// The opponent takes a prize. With an empty bench the defender loses;
    /// otherwise they must promote a benched monster. Returns true when a
    /// knockout happened.
    pub fn resolve_knockout(&mut self, defender: PlayerId) -> bool {
        if !self.state.player(defender).board.active().is_knocked_out() {
            return false;
        }
        let scorer = defender.opponent();

        let name = self
            .state
            .player_mut(defender)
            .board
            .knockout_active()
            .map(|c| c.name)
            .unwrap_or_default();
        let owner = self.name(defender);
        self.observer.info(&format!("{owner}'s {name} is knocked out"));

        if self.state.player_mut(scorer).take_prize().is_some() {
            let message = format!(
                "{} takes a prize card ({} left)",
                self.name(scorer),
                self.state.player(scorer).prize_count()
            );
            self.observer.info(&message);
        }

        if self.state.player(defender).board.bench().is_empty() {
            self.declare_winner(GameResult::new(scorer, WinReason::NoMonstersInPlay));
            return true;
        }
        if self.state.check_win_condition().is_some() {
            return true;
        }

        self.promote(defender);
        true
    }

    /// Ask `player` which benched monster replaces the empty active slot.
    /// Re-asks until a benched slot is chosen.
    fn promote(&mut self, player: PlayerId) {
        let candidates: Vec<SlotRef> = (0..self.state.player(player).board.bench().len())
            .map(SlotRef::Bench)
            .collect();

        loop {
            let at = self.decisions.select_slot(player, &candidates);
            if let SlotRef::Bench(index) = at {
                let board = &mut self.state.player_mut(player).board;
                if candidates.contains(&at) && board.promote_from_bench(index).is_ok() {
                    let incoming = self.monster_name(player, SlotRef::Active);
                    let who = self.name(player);
                    self.observer.info(&format!("{who} promotes {incoming} to the active slot"));
                    return;
                }
            }
            self.observer.warn(&format!("Choose one of your benched monsters, not the {at} slot"));
        }
    }

    /// Tick the status condition of `player`'s active monster.
    pub fn resolve_status(&mut self, player: PlayerId) {
        let active = self.state.player(player).board.active();
        let (Some(status), Some(card)) = (active.status(), active.card()) else {
            return;
        };
        let name = card.name.clone();

        let message = match status {
            StatusCondition::Poisoned => {
                self.state.player_mut(player).board.active_mut().add_damage(POISON_DAMAGE);
                format!("{name} takes {POISON_DAMAGE} poison damage")
            }
            StatusCondition::Burned => {
                if self.state.rng.flip_coin() {
                    format!("{name} flips heads and takes no burn damage")
                } else {
                    self.state.player_mut(player).board.active_mut().add_damage(BURN_DAMAGE);
                    format!("{name} flips tails and takes {BURN_DAMAGE} burn damage")
                }
            }
            StatusCondition::Asleep => {
                if self.state.rng.flip_coin() {
                    self.state.player_mut(player).board.active_mut().clear_status();
                    format!("{name} flips heads and wakes up")
                } else {
                    format!("{name} flips tails and stays asleep")
                }
            }
            StatusCondition::Paralyzed => {
                self.state.player_mut(player).board.active_mut().clear_status();
                format!("{name} is no longer paralyzed")
            }
            StatusCondition::Confused => return,
        };
        self.observer.info(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::EnergyType;

    fn sparker() -> MonsterCard {
        MonsterCard::basic("Sparker", 60).with_types([EnergyType::Lightning])
    }

    #[test]
    fn test_plain_damage() {
        let defender = MonsterCard::basic("Rock", 90);
        assert_eq!(modified_damage(20, &sparker(), &defender), 20);
    }

    #[test]
    fn test_weakness_doubles() {
        let defender = MonsterCard::basic("Bird", 70).with_weakness(EnergyType::Lightning, 2);
        assert_eq!(modified_damage(20, &sparker(), &defender), 40);
    }

    #[test]
    fn test_weakness_other_type_ignored() {
        let defender = MonsterCard::basic("Bird", 70).with_weakness(EnergyType::Fire, 2);
        assert_eq!(modified_damage(20, &sparker(), &defender), 20);
    }

    #[test]
    fn test_resistance_floors_at_zero() {
        let defender = MonsterCard::basic("Mole", 70).with_resistance(EnergyType::Lightning, 30);
        assert_eq!(modified_damage(20, &sparker(), &defender), 0);
        assert_eq!(modified_damage(50, &sparker(), &defender), 20);
    }

    #[test]
    fn test_weakness_before_resistance() {
        let defender = MonsterCard::basic("Odd", 70)
            .with_weakness(EnergyType::Lightning, 2)
            .with_resistance(EnergyType::Lightning, 30);
        assert_eq!(modified_damage(20, &sparker(), &defender), 10);
    }
}
