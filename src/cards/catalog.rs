//! Card catalog for definition lookup and deck construction.
//!
//! The `CardCatalog` stores card definitions by name and expands deck lists
//! into the ordered card sequence handed to a match. The engine never builds
//! cards itself; front ends (and tests) build decks here.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Attack, Card, EnergyCard, EnergyType, MonsterCard, TrainerCard};
use crate::effects::{CardFilter, Effect};

/// Deck construction errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no card named {0:?} in the catalog")]
    UnknownCard(String),
    #[error("a card named {0:?} is already registered")]
    Duplicate(String),
}

/// Catalog of card definitions keyed by name.
///
/// ## Example
///
/// ```
/// use rust_tcg::cards::{CardCatalog, EnergyCard, EnergyType, MonsterCard};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(MonsterCard::basic("Sprout", 50)).unwrap();
/// catalog.register(EnergyCard::basic(EnergyType::Grass)).unwrap();
///
/// let deck = catalog.build_deck(&[("Sprout", 4), ("Grass Energy", 8)]).unwrap();
/// assert_eq!(deck.len(), 12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition under its name.
    pub fn register(&mut self, card: impl Into<Card>) -> Result<(), CatalogError> {
        let card = card.into();
        let name = card.name().to_string();
        if self.cards.contains_key(&name) {
            return Err(CatalogError::Duplicate(name));
        }
        self.cards.insert(name, card);
        Ok(())
    }

    /// Look up a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find definitions matching a filter.
    pub fn find<'a>(&'a self, filter: &'a CardFilter) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.values().filter(move |card| filter.matches(card))
    }

    /// Expand a deck list of `(name, copies)` into cards, in list order.
    pub fn build_deck(&self, list: &[(&str, usize)]) -> Result<Vec<Card>, CatalogError> {
        let mut deck = Vec::with_capacity(list.iter().map(|(_, n)| n).sum());
        for &(name, copies) in list {
            let card = self
                .get(name)
                .ok_or_else(|| CatalogError::UnknownCard(name.to_string()))?;
            deck.extend(std::iter::repeat(card).take(copies).cloned());
        }
        Ok(deck)
    }
}

/// Catalog with the demo cards used by [`starter_deck`].
pub fn starter_catalog() -> Result<CardCatalog, CatalogError> {
    let mut catalog = CardCatalog::new();
    let cards: Vec<Card> = vec![
        MonsterCard::basic("Sparkmouse", 60)
            .with_types([EnergyType::Lightning])
            .with_retreat_cost(1)
            .with_weakness(EnergyType::Fighting, 2)
            .with_attack(Attack::new("Thunder Jolt", 20).with_cost([EnergyType::Lightning]))
            .into(),
        MonsterCard::basic("Seedling", 50)
            .with_types([EnergyType::Grass])
            .with_retreat_cost(1)
            .with_weakness(EnergyType::Fire, 2)
            .with_attack(Attack::new("Vine Whip", 10).with_cost([EnergyType::Grass]))
            .into(),
        TrainerCard::supporter("Family Visit")
            .with_effect(Effect::Draw { count: 3 })
            .into(),
        TrainerCard::supporter("Switcheroo").into(),
        TrainerCard::goods("Capture Ball")
            .with_effect(Effect::Search {
                filter: CardFilter::BasicMonster,
            })
            .into(),
        EnergyCard::basic(EnergyType::Lightning).into(),
        EnergyCard::basic(EnergyType::Grass).into(),
    ];
    for card in cards {
        catalog.register(card)?;
    }
    Ok(catalog)
}

/// The 60-card demo deck: 20 Basics, 10 supporters, 10 goods, 20 energies.
pub fn starter_deck() -> Result<Vec<Card>, CatalogError> {
    starter_catalog()?.build_deck(&[
        ("Sparkmouse", 10),
        ("Seedling", 10),
        ("Family Visit", 5),
        ("Switcheroo", 5),
        ("Capture Ball", 10),
        ("Lightning Energy", 10),
        ("Grass Energy", 10),
    ])
}
