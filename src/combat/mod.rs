pub mod constants;
pub mod events;
pub mod resolution;
pub mod stance;

pub use events::{TurnEvent, TurnLog};
pub use resolution::{mitigate, resolve_strike, roll_attack_damage, Combatant};
pub use stance::{DefenseStance, StanceTrigger};
