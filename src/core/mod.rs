//! Core engine types: players, state, actions, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, MatchConfig, StartingPlayer};
pub use action::{ActionKind, ActionRecord};
pub use error::{GameError, SetupError};
pub use state::{GameResult, GameState, Phase, Player, WinReason};
