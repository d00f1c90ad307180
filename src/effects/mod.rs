//! Effect system for trainer cards and attacks.
//!
//! - `Effect`: Enumeration of card effects
//! - `CardFilter`: Which cards a search may pick
//! - `EffectResolver`: Executes effects on game state

mod effect;
mod targeting;
mod resolver;

pub use effect::Effect;
pub use targeting::CardFilter;
pub use resolver::{EffectResolver, ResolveResult};
