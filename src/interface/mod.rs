//! Collaborator contracts the engine calls into.
//!
//! - `DecisionProvider`: every player choice
//! - `GameObserver`: every user-visible outcome

pub mod decision;
pub mod observer;

pub use decision::{Decision, DecisionProvider, RandomDecisions, ScriptedDecisions};
pub use observer::{GameObserver, LogLevel, RecordingObserver, TracingObserver};
