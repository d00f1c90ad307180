//! Decks.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Ordered draw pile. The front is the top of the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a deck and shuffle it.
    #[must_use]
    pub fn shuffled(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut deck = Self::stacked(cards);
        deck.shuffle(rng);
        deck
    }

    /// Build a deck that keeps the given order (first card on top).
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Take up to `count` cards from the top.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    /// Remove and return the topmost card matching `predicate`.
    ///
    /// The deck is untouched when nothing matches.
    pub fn search(&mut self, predicate: impl Fn(&Card) -> bool) -> Option<Card> {
        let index = self.cards.iter().position(predicate)?;
        self.cards.remove(index)
    }

    /// Put cards on the bottom and shuffle.
    pub fn return_and_shuffle(&mut self, cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    /// Whether any card matches `predicate`.
    #[must_use]
    pub fn contains(&self, predicate: impl Fn(&Card) -> bool) -> bool {
        self.cards.iter().any(predicate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
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
