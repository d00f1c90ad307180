//! Effect resolution: executing effects on game state.
//!
//! The acting player owns the deck and hand that `Draw` and `Search` touch.
//! `Damage` and `InflictStatus` land on the opponent's active monster.
//! Knockouts are not resolved here; the engine checks them afterwards.

use crate::core::{GameState, PlayerId};
use crate::zones::StatusCondition;

use super::Effect;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Cards drawn (may be fewer than requested).
    Drew(usize),
    /// A search moved the named card to hand.
    Found(String),
    /// A search found nothing; the deck is unchanged.
    NotFound,
    /// Damage added to the opponent's active monster.
    Damaged(u32),
    /// Special condition placed on the opponent's active monster.
    StatusApplied(StatusCondition),
    /// Effect could not apply (e.g., no opposing active monster).
    Failed(String),
    /// Results of each effect in a batch.
    Batch(Vec<ResolveResult>),
}

impl ResolveResult {
    /// Flatten nested batches into a list of leaf results.
    #[must_use]
    pub fn flatten(self) -> Vec<ResolveResult> {
        match self {
            ResolveResult::Batch(results) => results.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl std::fmt::Display for ResolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveResult::Drew(n) => write!(f, "drew {n} card(s)"),
            ResolveResult::Found(name) => write!(f, "found {name}"),
            ResolveResult::NotFound => write!(f, "found nothing"),
            ResolveResult::Damaged(n) => write!(f, "dealt {n} extra damage"),
            ResolveResult::StatusApplied(status) => write!(f, "opponent's active is now {status}"),
            ResolveResult::Failed(reason) => write!(f, "no effect: {reason}"),
            ResolveResult::Batch(results) => {
                let parts: Vec<String> = results.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` on behalf of `player`.
    pub fn resolve(state: &mut GameState, player: PlayerId, effect: &Effect) -> ResolveResult {
        match effect {
            Effect::Draw { count } => ResolveResult::Drew(state.player_mut(player).draw(*count)),

            Effect::Search { filter } => {
                let found = state.player_mut(player).deck.search(|c| filter.matches(c));
                match found {
                    Some(card) => {
                        state.shuffle_deck(player);
                        let name = card.name().to_string();
                        state.player_mut(player).hand.add(card);
                        ResolveResult::Found(name)
                    }
                    None => ResolveResult::NotFound,
                }
            }

            Effect::Damage { amount } => {
                let active = state.player_mut(player.opponent()).board.active_mut();
                if active.is_empty() {
                    return ResolveResult::Failed("no opposing active monster".to_string());
                }
                active.add_damage(*amount);
                ResolveResult::Damaged(*amount)
            }

            Effect::InflictStatus { condition } => {
                let active = state.player_mut(player.opponent()).board.active_mut();
                if active.is_empty() {
                    return ResolveResult::Failed("no opposing active monster".to_string());
                }
                active.set_status(*condition);
                ResolveResult::StatusApplied(*condition)
            }

            Effect::Batch(effects) => ResolveResult::Batch(
                effects
                    .iter()
                    .map(|sub_effect| Self::resolve(state, player, sub_effect))
                    .collect(),
            ),
        }
    }
}
