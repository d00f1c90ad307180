//! Card locations: board slots, bench, trash, deck and hand.
//!
//! Every container here is owned by exactly one `Player` and mutated only
//! through its own methods. None of them consult the rules.

pub mod bench;
pub mod board;
pub mod deck;
pub mod hand;
pub mod slot;

pub use bench::{Bench, Trash, BENCH_CAPACITY};
pub use board::{Board, BoardError};
pub use deck::Deck;
pub use hand::Hand;
pub use slot::{Slot, SlotRef, StatusCondition};
