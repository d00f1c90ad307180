//! Rule predicates for the game engine.
//!
//! `Rules` answers "may this player do this now?" for every main-phase
//! action. The game engine calls into `Rules` before mutating anything.

pub mod engine;

pub use engine::{Rules, StandardRules};
