//! Effect definitions.
//!
//! Effects are small card actions attached to trainers and attacks.
//! They compose through `Batch`.

use serde::{Deserialize, Serialize};

use super::CardFilter;
use crate::zones::StatusCondition;

/// An atomic card effect.
///
/// ## Acting Player Effects
///
/// - `Draw`: Draw cards from the acting player's deck
/// - `Search`: Move the first matching deck card to hand, then shuffle; no match leaves the deck as is
///
/// ## Opponent Effects
///
/// Applied to the opponent's active monster:
/// - `Damage`: Extra damage counters, unaffected by weakness or resistance
/// - `InflictStatus`: Replace the special condition
///
/// ## Composite Effects
///
/// - `Batch`: Execute multiple effects in sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Draw {
        count: usize,
    },

    Search {
        filter: CardFilter,
    },

    Damage {
        amount: u32,
    },

    InflictStatus {
        condition: StatusCondition,
    },

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a draw effect.
    #[must_use]
    pub fn draw(count: usize) -> Self {
        Self::Draw { count }
    }

    /// Create a deck search effect.
    #[must_use]
    pub fn search(filter: CardFilter) -> Self {
        Self::Search { filter }
    }

    #[must_use]
    pub fn damage(amount: u32) -> Self {
        Self::Damage { amount }
    }

    #[must_use]
    pub fn inflict(condition: StatusCondition) -> Self {
        Self::InflictStatus { condition }
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_effect() {
        let effect = Effect::batch([Effect::damage(10), Effect::draw(1)]);

        match effect {
            Effect::Batch(effects) => assert_eq!(effects, vec![Effect::damage(10), Effect::draw(1)]),
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::batch([
            Effect::search(CardFilter::BasicMonster),
            Effect::inflict(StatusCondition::Paralyzed),
        ]);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
