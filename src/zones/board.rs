//! A player's board: active slot, bench and trash.
//!
//! Board operations move cards between positions and keep the bench
//! invariants (capacity, no empty bench slots). They never consult the rules:
//! callers decide legality first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bench::{Bench, Trash};
use super::slot::{Slot, SlotRef};
use crate::cards::{EnergyCard, MonsterCard};

/// Board operation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("there is no active monster")]
    EmptyActive,
    #[error("the active slot is already occupied")]
    ActiveOccupied,
    #[error("bench index {index} is out of range (bench has {len} slots)")]
    BenchIndexOutOfRange { index: usize, len: usize },
    #[error("bench slot {0} is empty")]
    EmptyBenchSlot(usize),
    #[error("the bench is full")]
    BenchFull,
    #[error("no monster in the {0} slot")]
    EmptySlot(SlotRef),
}

/// One player's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    active: Slot,
    bench: Bench,
    trash: Trash,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bench_capacity(capacity: usize) -> Self {
        Self {
            bench: Bench::with_capacity(capacity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active(&self) -> &Slot {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut Slot {
        &mut self.active
    }

    #[must_use]
    pub fn bench(&self) -> &Bench {
        &self.bench
    }

    #[must_use]
    pub fn trash(&self) -> &Trash {
        &self.trash
    }

    pub fn trash_mut(&mut self) -> &mut Trash {
        &mut self.trash
    }

    /// Look up a slot by address.
    #[must_use]
    pub fn slot(&self, at: SlotRef) -> Option<&Slot> {
        match at {
            SlotRef::Active => Some(&self.active),
            SlotRef::Bench(i) => self.bench.get(i),
        }
    }

    pub fn slot_mut(&mut self, at: SlotRef) -> Option<&mut Slot> {
        match at {
            SlotRef::Active => Some(&mut self.active),
            SlotRef::Bench(i) => self.bench.get_mut(i),
        }
    }

    /// Addresses of every occupied slot, active first.
    #[must_use]
    pub fn occupied_slots(&self) -> Vec<SlotRef> {
        let active = (!self.active.is_empty()).then_some(SlotRef::Active);
        let bench = self
            .bench
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(i, _)| SlotRef::Bench(i));
        active.into_iter().chain(bench).collect()
    }

    /// Active or bench holds a monster.
    #[must_use]
    pub fn has_monsters_in_play(&self) -> bool {
        !self.active.is_empty() || self.bench.slots().iter().any(|s| !s.is_empty())
    }

    /// Put a monster into the empty active slot.
    pub fn place_active(&mut self, card: MonsterCard, turn: u32) -> Result<(), BoardError> {
        if !self.active.is_empty() {
            return Err(BoardError::ActiveOccupied);
        }
        self.active = Slot::occupied(card, turn);
        Ok(())
    }

    /// Put a monster onto the bench.
    pub fn place_on_bench(&mut self, card: MonsterCard, turn: u32) -> Result<(), BoardError> {
        if self.bench.add(card, turn) {
            Ok(())
        } else {
            Err(BoardError::BenchFull)
        }
    }

    /// Attach an energy to an occupied slot.
    pub fn attach_energy(&mut self, at: SlotRef, energy: EnergyCard) -> Result<(), BoardError> {
        let slot = self.occupied_slot_mut(at)?;
        slot.attach_energy(energy);
        Ok(())
    }

    /// Evolve the occupant of `at`. The replaced card goes to the trash.
    pub fn evolve(&mut self, at: SlotRef, card: MonsterCard, turn: u32) -> Result<(), BoardError> {
        let slot = self.occupied_slot_mut(at)?;
        if let Some(previous) = slot.evolve(card, turn) {
            self.trash.add(previous);
        }
        Ok(())
    }

    /// Swap the active monster with bench slot `bench_index`.
    ///
    /// First discards `energy_to_discard` energies from the front of the
    /// active slot. The complete slot state travels with each occupant.
    pub fn retreat(&mut self, bench_index: usize, energy_to_discard: usize) -> Result<(), BoardError> {
        if self.active.is_empty() {
            return Err(BoardError::EmptyActive);
        }
        self.check_bench_slot(bench_index)?;

        for energy in self.active.remove_energies(energy_to_discard) {
            self.trash.add(energy);
        }
        if let Some(bench_slot) = self.bench.get_mut(bench_index) {
            std::mem::swap(&mut self.active, bench_slot);
        }
        Ok(())
    }

    /// Move bench slot `bench_index` into the active position.
    ///
    /// The vacated bench slot is removed when it ends up empty.
    pub fn promote_from_bench(&mut self, bench_index: usize) -> Result<(), BoardError> {
        self.check_bench_slot(bench_index)?;

        if let Some(bench_slot) = self.bench.get_mut(bench_index) {
            std::mem::swap(&mut self.active, bench_slot);
        }
        self.bench.prune_empty();
        Ok(())
    }

    /// Send the occupant of `at` and its energy to the trash and empty the slot.
    ///
    /// A bench slot is removed from the bench. Returns the trashed monster.
    pub fn move_slot_to_trash(&mut self, at: SlotRef) -> Option<MonsterCard> {
        let (card, energies) = self.slot_mut(at)?.take_contents()?;
        for energy in energies {
            self.trash.add(energy);
        }
        self.trash.add(card.clone());
        if matches!(at, SlotRef::Bench(_)) {
            self.bench.prune_empty();
        }
        Some(card)
    }

    /// Trash the active monster. Returns it, or `None` if the slot was empty.
    pub fn knockout_active(&mut self) -> Option<MonsterCard> {
        self.move_slot_to_trash(SlotRef::Active)
    }

    fn occupied_slot_mut(&mut self, at: SlotRef) -> Result<&mut Slot, BoardError> {
        match self.slot_mut(at) {
            Some(slot) if !slot.is_empty() => Ok(slot),
            _ => Err(BoardError::EmptySlot(at)),
        }
    }

    fn check_bench_slot(&self, index: usize) -> Result<(), BoardError> {
        match self.bench.get(index) {
            None => Err(BoardError::BenchIndexOutOfRange {
                index,
                len: self.bench.len(),
            }),
            Some(slot) if slot.is_empty() => Err(BoardError::EmptyBenchSlot(index)),
            Some(_) => Ok(()),
        }
    }
}
