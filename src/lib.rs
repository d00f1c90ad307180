//! # rust-tcg
//!
//! A deterministic rules engine for a two-player monster trading card game.
//!
//! ## Design Principles
//!
//! 1. **Decisions Are Injected**: The engine never reads input. Every choice
//!    goes through a `DecisionProvider`, so tests, CLIs and network front ends
//!    drive it the same way.
//!
//! 2. **Pure Legality**: `Rules` predicates read the state and never mutate
//!    it. The engine asks first, then acts.
//!
//! 3. **Deterministic**: All randomness (shuffles, coin flips, the random
//!    starting player) comes from one seeded `GameRng` stored in the state.
//!    Same seed and same decisions replay the same match.
//!
//! ## Architecture
//!
//! - **Cards are data**: `Card` is a closed sum type. In-play state (damage,
//!   energy, status) lives in board `Slot`s, never in cards.
//!
//! - **Checkpoints**: `GameState` serializes completely, RNG position
//!   included, and restores with `bincode`.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Card definitions and the catalog
//! - `zones`: Slots, bench, trash, board, deck, hand
//! - `rules`: Legality predicates
//! - `effects`: Trainer and attack effects
//! - `interface`: Decision provider and observer contracts
//! - `game`: Setup, turn loop, actions and combat
//!
//! ## Example
//!
//! ```
//! use rust_tcg::{starter_deck, GameEngine, MatchConfig, RandomDecisions, RecordingObserver};
//!
//! let mut engine = GameEngine::new(
//!     MatchConfig::default().with_seed(7),
//!     starter_deck().unwrap(),
//!     starter_deck().unwrap(),
//!     RandomDecisions::new(7),
//!     RecordingObserver::new(),
//! )
//! .unwrap();
//!
//! let result = engine.run().unwrap();
//! assert_eq!(engine.state().winner(), Some(result));
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod interface;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig, StartingPlayer, ConfigError,
    ActionKind, ActionRecord,
    GameState, Player, Phase, GameResult, WinReason,
    GameError, SetupError,
};

pub use crate::zones::{Bench, Board, BoardError, Deck, Hand, Slot, SlotRef, StatusCondition, Trash};

pub use crate::cards::{
    starter_catalog, starter_deck,
    Attack, Card, CardCatalog, CatalogError, EnergyCard, EnergyType, MonsterCard,
    Resistance, Stage, TrainerCard, TrainerKind, Weakness,
};

pub use crate::rules::{Rules, StandardRules};

pub use crate::effects::{CardFilter, Effect, EffectResolver, ResolveResult};

pub use crate::interface::{
    Decision, DecisionProvider, RandomDecisions, ScriptedDecisions,
    GameObserver, LogLevel, RecordingObserver, TracingObserver,
};

pub use crate::game::GameEngine;
