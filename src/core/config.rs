//! Match configuration.
//!
//! A front end configures a match at construction time:
//! - Seed for the injected RNG
//! - How the starting player is decided
//! - Table constants (opening hand, prizes, bench capacity)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PlayerId;

/// How the starting player is chosen during setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Uniformly random, drawn from the match RNG.
    #[default]
    Random,
    /// A fixed seat.
    Fixed(PlayerId),
    /// Ask the decision provider.
    Ask,
}

/// Invalid table constants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("opening hand size must be at least 1")]
    EmptyOpeningHand,
    #[error("prize count must be at least 1")]
    NoPrizes,
    #[error("bench capacity must be at least 1")]
    NoBench,
}

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the match RNG.
    /// Same seed and same decisions replay the same match.
    pub seed: u64,

    /// Starting player policy.
    pub starting_player: StartingPlayer,

    /// Cards drawn for the opening hand (and for every mulligan redraw).
    pub opening_hand_size: usize,

    /// Prize cards set aside per player after the opening hand resolves.
    pub prize_count: usize,

    /// Maximum number of bench slots.
    pub bench_capacity: usize,

    /// Display names, indexed by seat.
    pub player_names: [String; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_player: StartingPlayer::Random,
            opening_hand_size: 7,
            prize_count: 6,
            bench_capacity: 5,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl MatchConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting player policy.
    #[must_use]
    pub fn with_starting_player(mut self, policy: StartingPlayer) -> Self {
        self.starting_player = policy;
        self
    }

    /// Set the prize count.
    #[must_use]
    pub fn with_prize_count(mut self, count: usize) -> Self {
        self.prize_count = count;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Set the bench capacity.
    #[must_use]
    pub fn with_bench_capacity(mut self, capacity: usize) -> Self {
        self.bench_capacity = capacity;
        self
    }

    /// Set both display names.
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Check the table constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_hand_size == 0 {
            return Err(ConfigError::EmptyOpeningHand);
        }
        if self.prize_count == 0 {
            return Err(ConfigError::NoPrizes);
        }
        if self.bench_capacity == 0 {
            return Err(ConfigError::NoBench);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.opening_hand_size, 7);
        assert_eq!(config.prize_count, 6);
        assert_eq!(config.bench_capacity, 5);
        assert_eq!(config.starting_player, StartingPlayer::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::default()
            .with_seed(7)
            .with_starting_player(StartingPlayer::Fixed(PlayerId::SECOND))
            .with_prize_count(3)
            .with_player_names("Red", "Blue");

        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_player, StartingPlayer::Fixed(PlayerId::SECOND));
        assert_eq!(config.prize_count, 3);
        assert_eq!(config.player_names[1], "Blue");
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            MatchConfig::default().with_prize_count(0).validate(),
            Err(ConfigError::NoPrizes)
        );
        assert_eq!(
            MatchConfig::default().with_bench_capacity(0).validate(),
            Err(ConfigError::NoBench)
        );
        assert_eq!(
            MatchConfig::default().with_opening_hand_size(0).validate(),
            Err(ConfigError::EmptyOpeningHand)
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
