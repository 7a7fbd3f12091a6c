//! Defense stance system
//!
//! Raising the shield lasts for exactly one blow. The stance is an explicit
//! state machine so every change can be recorded in the turn log.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Defense stance - the hero is always in exactly one stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DefenseStance {
    /// Shield lowered, blows land in full
    #[default]
    Ready,
    /// Shield raised, the next blow is mitigated
    Guarding,
}

impl DefenseStance {
    pub fn is_guarding(&self) -> bool {
        matches!(self, DefenseStance::Guarding)
    }

    /// Apply a transition trigger to get the next stance
    pub fn apply(self, trigger: StanceTrigger) -> DefenseStance {
        use DefenseStance::*;
        use StanceTrigger::*;

        match (self, trigger) {
            (_, RaiseShield) => Guarding,
            // Any blow consumes the guard, mitigated or not
            (_, HitTaken) => Ready,
        }
    }
}

impl fmt::Display for DefenseStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefenseStance::Ready => write!(f, "ready"),
            DefenseStance::Guarding => write!(f, "guarding"),
        }
    }
}

/// Events that trigger stance transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StanceTrigger {
    RaiseShield,
    HitTaken,
}
