//! Card filters used by search effects and the catalog.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, EnergyType, Stage, TrainerKind};

/// Predicate over card definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    /// Every card.
    Any,
    /// Any monster card.
    Monster,
    /// Basic monsters only.
    BasicMonster,
    /// Monsters of one stage.
    Stage(Stage),
    /// Energy cards, optionally of a single type.
    Energy(Option<EnergyType>),
    /// Trainer cards of one kind.
    Trainer(TrainerKind),
    /// Exact card name.
    Named(String),
    /// All filters match.
    All(Vec<CardFilter>),
}

impl CardFilter {
    /// Check if a card passes this filter.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::Any => true,
            CardFilter::Monster => card.is_monster(),
            CardFilter::BasicMonster => card.is_basic_monster(),
            CardFilter::Stage(stage) => card.as_monster().is_some_and(|m| m.stage == *stage),
            CardFilter::Energy(None) => card.is_energy(),
            CardFilter::Energy(Some(energy)) => {
                matches!(card, Card::Energy(e) if e.energy == *energy)
            }
            CardFilter::Trainer(kind) => card.trainer_kind() == Some(*kind),
            CardFilter::Named(name) => card.name() == name,
            CardFilter::All(filters) => filters.iter().all(|f| f.matches(card)),
        }
    }
}

impl std::fmt::Display for CardFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFilter::Any => write!(f, "any card"),
            CardFilter::Monster => write!(f, "a monster"),
            CardFilter::BasicMonster => write!(f, "a Basic monster"),
            CardFilter::Stage(stage) => write!(f, "a {stage:?} monster"),
            CardFilter::Energy(None) => write!(f, "an energy card"),
            CardFilter::Energy(Some(energy)) => write!(f, "a {energy} Energy"),
            CardFilter::Trainer(kind) => write!(f, "a {kind:?} card"),
            CardFilter::Named(name) => write!(f, "{name}"),
            CardFilter::All(_) => write!(f, "a matching card"),
        }
    }
}
