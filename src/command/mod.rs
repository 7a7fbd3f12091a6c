//! Command vocabulary
//!
//! Raw input token -> ExploreCommand / CombatCommand, depending on state.

pub mod parser;

pub use parser::{combat_menu, explore_menu, normalize, CombatCommand, ExploreCommand};
