//! Error types.
//!
//! Only conditions that abort a match surface as `Err`. Rule violations and
//! out-of-range selections during play are reported to the observer and
//! leave the state untouched.

use thiserror::Error;

use super::config::ConfigError;
use super::player::PlayerId;

/// The match could not be set up. The supplied decks or configuration are at fault.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The deck cannot produce an opening hand with a Basic monster.
    #[error("{0} has no Basic monster in their deck")]
    NoBasicMonster(PlayerId),

    /// `setup` was called on a match that already left the setup phase.
    #[error("match setup has already completed")]
    AlreadyStarted,

    #[error("invalid match configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors returned by the match driver.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A checkpoint could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::NoBasicMonster(PlayerId::SECOND);
        assert_eq!(err.to_string(), "Player 2 has no Basic monster in their deck");
    }

    #[test]
    fn test_game_error_from_setup() {
        let err: GameError = SetupError::AlreadyStarted.into();
        assert!(matches!(err, GameError::Setup(SetupError::AlreadyStarted)));
        assert_eq!(err.to_string(), "match setup has already completed");
    }

    #[test]
    fn test_config_error_wraps() {
        let err: SetupError = ConfigError::NoBench.into();
        assert_eq!(
            err.to_string(),
            "invalid match configuration: bench capacity must be at least 1"
        );
    }
}
