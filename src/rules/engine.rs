//! Legality predicates.
//!
//! Every predicate is pure: it reads the state and never mutates it.
//! The game engine asks before it acts and warns when the answer is no.

use crate::cards::{Attack, Card, TrainerKind};
use crate::core::{GameState, Phase, PlayerId};
use crate::zones::{Slot, SlotRef, StatusCondition};

/// Rules trait.
///
/// Default methods implement the standard rule subset. Implementors
/// override individual predicates to extend or restrict play.
///
/// ## Implementation Notes
///
/// - Predicates take the acting player explicitly; they do not assume the
///   player is the current one.
/// - `meets_attack_cost` checks energy only. Occupancy and status belong
///   to `can_attack`.
pub trait Rules {
    /// Active occupied, not asleep or paralyzed, and not the starting
    /// player's first turn.
    fn can_attack(&self, state: &GameState, player: PlayerId) -> bool {
        state.player(player).board.active().can_attack() && !is_opening_turn(state, player)
    }

    /// Supporter not yet played this turn, and not the starting player's
    /// first turn.
    fn can_play_supporter(&self, state: &GameState, player: PlayerId) -> bool {
        !state.player(player).used_supporter && !is_opening_turn(state, player)
    }

    /// Energy not yet attached this turn.
    fn can_attach_energy(&self, state: &GameState, player: PlayerId) -> bool {
        !state.player(player).energy_attached_this_turn
    }

    /// Whether `card` can evolve the monster at `at`.
    fn can_evolve(&self, state: &GameState, player: PlayerId, at: SlotRef, card: &Card) -> bool {
        let seat = state.player(player);
        let Some(evolution) = card.as_monster() else {
            return false;
        };
        let Some(slot) = seat.board.slot(at) else {
            return false;
        };
        let Some(current) = slot.card() else {
            return false;
        };
        let turn = state.turn_number;

        seat.turns_taken > 0
            && slot.entered_turn() != Some(turn)
            && slot.last_evolved_turn() != Some(turn)
            && evolution.stage.previous() == Some(current.stage)
            && evolution.evolves_from.as_deref() == Some(current.name.as_str())
    }

    /// Active occupied and not paralyzed, no retreat yet this turn, a bench
    /// monster to switch in, and enough energy for the retreat cost.
    fn can_retreat(&self, state: &GameState, player: PlayerId) -> bool {
        let seat = state.player(player);
        let active = seat.board.active();
        let Some(card) = active.card() else {
            return false;
        };

        active.status() != Some(StatusCondition::Paralyzed)
            && !seat.retreated_this_turn
            && !seat.board.bench().is_empty()
            && active.energies().len() >= card.retreat_cost as usize
    }

    /// Energy attached to `slot` pays for `attack`.
    fn meets_attack_cost(&self, slot: &Slot, attack: &Attack) -> bool {
        slot.meets_cost(&attack.cost)
    }

    fn can_play_goods(&self, _state: &GameState, _player: PlayerId) -> bool {
        true
    }

    fn can_play_tool(&self, _state: &GameState, _player: PlayerId) -> bool {
        true
    }

    fn can_play_stadium(&self, _state: &GameState, _player: PlayerId) -> bool {
        true
    }

    /// Dispatch on trainer kind.
    fn can_play_trainer(&self, state: &GameState, player: PlayerId, kind: TrainerKind) -> bool {
        match kind {
            TrainerKind::Supporter => self.can_play_supporter(state, player),
            TrainerKind::Goods => self.can_play_goods(state, player),
            TrainerKind::Tool => self.can_play_tool(state, player),
            TrainerKind::Stadium => self.can_play_stadium(state, player),
        }
    }
}

/// The standard rule subset.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl Rules for StandardRules {}

fn is_opening_turn(state: &GameState, player: PlayerId) -> bool {
    state.phase != Phase::Setup && state.turn_number == 1 && player == state.starting_player
}
