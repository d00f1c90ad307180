//! Card system: immutable definitions and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Closed sum over `MonsterCard`, `TrainerCard`, `EnergyCard`
//! - `Stage`, `TrainerKind`, `EnergyType`: Explicit sub-kinds
//! - `Attack`: Name, energy cost, base damage, optional effect
//! - `CardCatalog`: Name lookup and deck-list expansion
//!
//! Cards never carry in-play state. Damage, energy and status are tracked by
//! the board slot that holds the card.

pub mod catalog;
pub mod definition;

pub use catalog::{starter_catalog, starter_deck, CardCatalog, CatalogError};
pub use definition::{
    Attack, Card, EnergyCard, EnergyType, MonsterCard, Resistance, Stage, TrainerCard, TrainerKind,
    Weakness,
};
