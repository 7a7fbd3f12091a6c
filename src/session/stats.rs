//! Run statistics

use std::fmt;

use serde::Serialize;

/// Counters accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Commands processed, including invalid ones
    pub turns: u32,
    pub encounters: u32,
    pub victories: u32,
    pub escapes: u32,
    /// Health actually removed from enemies
    pub damage_dealt: u32,
    /// Health actually removed from the player
    pub damage_taken: u32,
    /// Health actually restored to the player
    pub healed: u32,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} turns, {} encounters, {} victories, {} escapes, {} damage dealt, {} damage taken, {} healed",
            self.turns,
            self.encounters,
            self.victories,
            self.escapes,
            self.damage_dealt,
            self.damage_taken,
            self.healed
        )
    }
}
