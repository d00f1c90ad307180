//! Player decisions.
//!
//! The engine never reads input itself. Every choice a player makes is a
//! synchronous call into a `DecisionProvider`:
//! - `ScriptedDecisions`: Replays a fixed queue of answers (tests, replays)
//! - `RandomDecisions`: Picks uniformly among the offered options

use std::collections::VecDeque;

use crate::cards::{Attack, Card};
use crate::core::{ActionKind, GameRng, PlayerId};
use crate::zones::SlotRef;

/// Source of player choices.
///
/// Implementations should answer within the offered domain. The engine
/// tolerates out-of-domain answers: it clamps integers, re-asks for
/// mandatory slot choices, and treats anything else as a cancelled action.
pub trait DecisionProvider {
    /// Pick the seat that takes the first turn.
    fn choose_starting_player(&mut self) -> PlayerId;

    /// Pick one of the currently legal main-phase actions.
    fn select_action(&mut self, player: PlayerId, available: &[ActionKind]) -> ActionKind;

    /// Pick a card by index into `candidates`. `None` backs out.
    fn select_card(&mut self, player: PlayerId, candidates: &[&Card]) -> Option<usize>;

    /// Pick one of `candidates`.
    fn select_slot(&mut self, player: PlayerId, candidates: &[SlotRef]) -> SlotRef;

    /// Pick an attack by index into `available`.
    fn select_attack(&mut self, player: PlayerId, available: &[&Attack]) -> usize;

    /// Pick a number in `min..=max`.
    fn select_integer(&mut self, player: PlayerId, min: usize, max: usize) -> usize;

    /// Answer a yes/no question.
    fn confirm(&mut self, player: PlayerId, prompt: &str) -> bool;
}

/// One scripted answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    StartingPlayer(PlayerId),
    Action(ActionKind),
    Card(Option<usize>),
    Slot(SlotRef),
    Attack(usize),
    Integer(usize),
    Confirm(bool),
}

/// Replays a queue of answers in order.
///
/// When the next queued answer does not fit the question being asked (or
/// the queue is empty) a fallback is used and the queue is left untouched:
/// - starting player: the first seat
/// - action: `EndTurn`
/// - card, slot, attack: the first candidate
/// - integer: `min`
/// - confirm: `false`
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    queue: VecDeque<Decision>,
    fallbacks: usize,
}

impl ScriptedDecisions {
    #[must_use]
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            queue: decisions.into_iter().collect(),
            fallbacks: 0,
        }
    }

    /// Append an answer.
    pub fn push(&mut self, decision: Decision) {
        self.queue.push_back(decision);
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// How many questions were answered by a fallback.
    #[must_use]
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    fn next_matching<T>(&mut self, extract: impl Fn(&Decision) -> Option<T>) -> Option<T> {
        let answer = self.queue.front().and_then(extract);
        if answer.is_some() {
            self.queue.pop_front();
        } else {
            self.fallbacks += 1;
        }
        answer
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn choose_starting_player(&mut self) -> PlayerId {
        self.next_matching(|d| match d {
            Decision::StartingPlayer(p) => Some(*p),
            _ => None,
        })
        .unwrap_or(PlayerId::FIRST)
    }

    fn select_action(&mut self, _player: PlayerId, _available: &[ActionKind]) -> ActionKind {
        self.next_matching(|d| match d {
            Decision::Action(a) => Some(*a),
            _ => None,
        })
        .unwrap_or(ActionKind::EndTurn)
    }

    fn select_card(&mut self, _player: PlayerId, candidates: &[&Card]) -> Option<usize> {
        self.next_matching(|d| match d {
            Decision::Card(c) => Some(*c),
            _ => None,
        })
        .unwrap_or((!candidates.is_empty()).then_some(0))
    }

    fn select_slot(&mut self, _player: PlayerId, candidates: &[SlotRef]) -> SlotRef {
        self.next_matching(|d| match d {
            Decision::Slot(s) => Some(*s),
            _ => None,
        })
        .or_else(|| candidates.first().copied())
        .unwrap_or(SlotRef::Active)
    }

    fn select_attack(&mut self, _player: PlayerId, _available: &[&Attack]) -> usize {
        self.next_matching(|d| match d {
            Decision::Attack(i) => Some(*i),
            _ => None,
        })
        .unwrap_or(0)
    }

    fn select_integer(&mut self, _player: PlayerId, min: usize, _max: usize) -> usize {
        self.next_matching(|d| match d {
            Decision::Integer(n) => Some(*n),
            _ => None,
        })
        .unwrap_or(min)
    }

    fn confirm(&mut self, _player: PlayerId, _prompt: &str) -> bool {
        self.next_matching(|d| match d {
            Decision::Confirm(b) => Some(*b),
            _ => None,
        })
        .unwrap_or(false)
    }
}

/// Uniformly random answers drawn from a private seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomDecisions {
    rng: GameRng,
}

impl RandomDecisions {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl DecisionProvider for RandomDecisions {
    fn choose_starting_player(&mut self) -> PlayerId {
        if self.rng.flip_coin() {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    fn select_action(&mut self, _player: PlayerId, available: &[ActionKind]) -> ActionKind {
        if available.is_empty() {
            return ActionKind::EndTurn;
        }
        available[self.rng.gen_index(available.len())]
    }

    fn select_card(&mut self, _player: PlayerId, candidates: &[&Card]) -> Option<usize> {
        (!candidates.is_empty()).then(|| self.rng.gen_index(candidates.len()))
    }

    fn select_slot(&mut self, _player: PlayerId, candidates: &[SlotRef]) -> SlotRef {
        if candidates.is_empty() {
            return SlotRef::Active;
        }
        candidates[self.rng.gen_index(candidates.len())]
    }

    fn select_attack(&mut self, _player: PlayerId, available: &[&Attack]) -> usize {
        if available.is_empty() {
            return 0;
        }
        self.rng.gen_index(available.len())
    }

    fn select_integer(&mut self, _player: PlayerId, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        min + self.rng.gen_index(max - min + 1)
    }

    fn confirm(&mut self, _player: PlayerId, _prompt: &str) -> bool {
        self.rng.flip_coin()
    }
}
