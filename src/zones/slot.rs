//! Board slots.
//!
//! A `Slot` is one board position (the active spot or one bench position).
//! It owns all mutable in-play state of its occupant: attached energy,
//! accumulated damage, status condition and the turn bookkeeping used by the
//! evolution rules.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{EnergyCard, EnergyType, MonsterCard};

/// Special condition on an active monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCondition {
    /// 10 damage at every end-of-turn check.
    Poisoned,
    /// Coin flip at every end-of-turn check: tails deals 20 damage.
    Burned,
    /// Cannot attack; coin flip at end of turn to wake up.
    Asleep,
    /// Cannot attack or retreat; cleared at the next end-of-turn check.
    Paralyzed,
    /// Resolved at attack time by rules outside this subset.
    Confused,
}

impl std::fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusCondition::Poisoned => "poisoned",
            StatusCondition::Burned => "burned",
            StatusCondition::Asleep => "asleep",
            StatusCondition::Paralyzed => "paralyzed",
            StatusCondition::Confused => "confused",
        };
        f.write_str(name)
    }
}

/// Address of a slot on one player's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotRef {
    Active,
    Bench(usize),
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotRef::Active => f.write_str("active"),
            SlotRef::Bench(i) => write!(f, "bench {}", i + 1),
        }
    }
}

/// One board position and the in-play state of its occupant.
///
/// Empty iff `card` is `None`. An empty slot carries no energy, damage or status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    card: Option<MonsterCard>,
    energies: Vec<EnergyCard>,
    damage: u32,
    status: Option<StatusCondition>,
    entered_turn: Option<u32>,
    last_evolved_turn: Option<u32>,
}

impl Slot {
    /// Create an empty slot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a slot whose occupant entered play on `turn`.
    #[must_use]
    pub fn occupied(card: MonsterCard, turn: u32) -> Self {
        Self {
            card: Some(card),
            entered_turn: Some(turn),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    #[must_use]
    pub fn card(&self) -> Option<&MonsterCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn energies(&self) -> &[EnergyCard] {
        &self.energies
    }

    #[must_use]
    pub fn damage(&self) -> u32 {
        self.damage
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    #[must_use]
    pub fn entered_turn(&self) -> Option<u32> {
        self.entered_turn
    }

    #[must_use]
    pub fn last_evolved_turn(&self) -> Option<u32> {
        self.last_evolved_turn
    }

    /// Append an energy. Per-turn limits are the caller's concern.
    pub fn attach_energy(&mut self, energy: EnergyCard) {
        self.energies.push(energy);
    }

    /// Remove up to `count` energies from the front of the list.
    pub fn remove_energies(&mut self, count: usize) -> Vec<EnergyCard> {
        let count = count.min(self.energies.len());
        self.energies.drain(..count).collect()
    }

    pub fn add_damage(&mut self, amount: u32) {
        self.damage = self.damage.saturating_add(amount);
    }

    pub fn set_status(&mut self, status: StatusCondition) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Replace the occupant, keeping damage, energy and status.
    ///
    /// Returns the previous occupant, or `None` (and does nothing) if empty.
    pub fn evolve(&mut self, card: MonsterCard, turn: u32) -> Option<MonsterCard> {
        let previous = self.card.replace(card)?;
        self.last_evolved_turn = Some(turn);
        Some(previous)
    }

    /// `max(hp - damage, 0)`; 0 for an empty slot.
    #[must_use]
    pub fn hp_remaining(&self) -> u32 {
        self.card
            .as_ref()
            .map_or(0, |card| card.hp.saturating_sub(self.damage))
    }

    /// Occupied and at zero remaining HP.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        !self.is_empty() && self.hp_remaining() == 0
    }

    /// Occupied and not prevented from attacking by a status condition.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.is_empty()
            && !matches!(
                self.status,
                Some(StatusCondition::Asleep | StatusCondition::Paralyzed)
            )
    }

    /// Whether the attached energy pays `cost`.
    ///
    /// Specific symbols consume one energy of that type each; `Colorless`
    /// symbols are then paid by whatever remains. Always false when empty.
    #[must_use]
    pub fn meets_cost(&self, cost: &[EnergyType]) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut pool: FxHashMap<EnergyType, u32> = FxHashMap::default();
        for energy in &self.energies {
            *pool.entry(energy.energy).or_insert(0) += 1;
        }

        let mut colorless = 0usize;
        for &symbol in cost {
            if symbol == EnergyType::Colorless {
                colorless += 1;
                continue;
            }
            match pool.get_mut(&symbol) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }

        let remaining: u32 = pool.values().sum();
        remaining as usize >= colorless
    }

    /// Empty the slot, returning the occupant and its energy.
    pub fn take_contents(&mut self) -> Option<(MonsterCard, Vec<EnergyCard>)> {
        let card = self.card.take()?;
        let energies = std::mem::take(&mut self.energies);
        *self = Self::default();
        Some((card, energies))
    }
}
