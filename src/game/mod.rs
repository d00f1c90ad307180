//! The game engine: setup, turn loop, actions and combat.
//!
//! `GameEngine` owns the `GameState` and is the only code that mutates it
//! during a match. It consults `Rules` before every action, calls the
//! `DecisionProvider` for every choice, and reports every outcome to the
//! `GameObserver`.

mod engine;
mod setup;
mod actions;
mod combat;

pub use engine::GameEngine;
pub use combat::{modified_damage, BURN_DAMAGE, POISON_DAMAGE};
