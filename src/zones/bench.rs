//! The bench and the trash.

use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::cards::{Card, MonsterCard};

/// Default bench capacity.
pub const BENCH_CAPACITY: usize = 5;

/// Ordered list of reserve slots, never longer than its capacity.
///
/// Emptied slots are removed from the list, so every listed slot is occupied
/// outside of the short window inside a board operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bench {
    slots: Vec<Slot>,
    capacity: usize,
}

impl Default for Bench {
    fn default() -> Self {
        Self::with_capacity(BENCH_CAPACITY)
    }
}

impl Bench {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Place a monster that entered play on `turn`.
    ///
    /// Returns false (and changes nothing) when the bench is full.
    pub fn add(&mut self, card: MonsterCard, turn: u32) -> bool {
        self.add_slot(Slot::occupied(card, turn))
    }

    /// Append an existing slot. Returns false when full.
    pub fn add_slot(&mut self, slot: Slot) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Remove and return the slot at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Slot> {
        (index < self.slots.len()).then(|| self.slots.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every slot that no longer has an occupant.
    pub(crate) fn prune_empty(&mut self) {
        self.slots.retain(|slot| !slot.is_empty());
    }
}

/// Discard pile. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trash {
    cards: Vec<Card>,
}

impl Trash {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: impl Into<Card>) {
        self.cards.push(card.into());
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of trashed cards with the given name.
    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name() == name).count()
    }
}
