//! Hands.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, EnergyCard, MonsterCard, TrainerCard};

/// Cards held by a player.
///
/// Storage order is insertion order; menus use [`Hand::sorted`], which
/// groups monsters, supporters, goods, tools, stadiums and energies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the card at storage index `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Remove the monster at `index`. `None` (hand unchanged) for any other card.
    pub fn take_monster(&mut self, index: usize) -> Option<MonsterCard> {
        match self.cards.get(index)? {
            Card::Monster(_) => match self.cards.remove(index) {
                Card::Monster(monster) => Some(monster),
                _ => None,
            },
            _ => None,
        }
    }

    /// Remove the trainer at `index`. `None` (hand unchanged) for any other card.
    pub fn take_trainer(&mut self, index: usize) -> Option<TrainerCard> {
        match self.cards.get(index)? {
            Card::Trainer(_) => match self.cards.remove(index) {
                Card::Trainer(trainer) => Some(trainer),
                _ => None,
            },
            _ => None,
        }
    }

    /// Remove the energy at `index`. `None` (hand unchanged) for any other card.
    pub fn take_energy(&mut self, index: usize) -> Option<EnergyCard> {
        match self.cards.get(index)? {
            Card::Energy(_) => match self.cards.remove(index) {
                Card::Energy(energy) => Some(energy),
                _ => None,
            },
            _ => None,
        }
    }

    /// Remove every card, leaving the hand empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Storage indices in display order. Ties keep insertion order.
    #[must_use]
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.cards.len()).collect();
        indices.sort_by_key(|&i| self.cards[i].display_rank());
        indices
    }

    /// Cards in display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Card> {
        self.sorted_indices().into_iter().map(|i| &self.cards[i]).collect()
    }

    /// Storage indices of cards matching `predicate`, in display order.
    #[must_use]
    pub fn indices_where(&self, predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
        self.sorted_indices()
            .into_iter()
            .filter(|&i| predicate(&self.cards[i]))
            .collect()
    }

    #[must_use]
    pub fn contains(&self, predicate: impl Fn(&Card) -> bool) -> bool {
        self.cards.iter().any(predicate)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
