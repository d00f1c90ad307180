//! Main-phase actions and the action history.
//!
//! The main phase offers a small fixed menu of action kinds. Which kinds are
//! offered at a given moment is decided by the rules; the concrete target of
//! an action (which card, which slot, which attack) is chosen afterwards
//! through the decision provider.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A main-phase menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Swap the active monster with a benched one, paying the retreat cost.
    Retreat,
    /// Play a card from hand (monster, trainer or energy).
    UseHandCard,
    /// Attack with the active monster. Ends the main phase.
    Attack,
    /// End the main phase without attacking.
    EndTurn,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActionKind::Retreat => "Retreat",
            ActionKind::UseHandCard => "Use a card from hand",
            ActionKind::Attack => "Attack",
            ActionKind::EndTurn => "End turn",
        };
        f.write_str(label)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Checkpoint inspection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: ActionKind,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: ActionKind, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
