//! Command token parsing
//!
//! Commands are single case-insensitive tokens. The same key means different
//! things while exploring and in combat.

use std::fmt;

/// Commands accepted while exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExploreCommand {
    /// `w` - press onward, maybe into a fight
    Advance,
    /// `q` - rest and recover
    Rest,
    /// `s` - end the run
    Quit,
}

/// Commands accepted during combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatCommand {
    /// `e` - strike the enemy
    Attack,
    /// `q` - raise the shield
    Defend,
    /// `w` - try to run
    Flee,
}

/// Normalize raw input; end-of-input reads as the empty token
pub fn normalize(input: Option<&str>) -> String {
    input.unwrap_or("").trim().to_ascii_lowercase()
}

impl ExploreCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "w" => Some(ExploreCommand::Advance),
            "q" => Some(ExploreCommand::Rest),
            "s" => Some(ExploreCommand::Quit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            ExploreCommand::Advance => 'w',
            ExploreCommand::Rest => 'q',
            ExploreCommand::Quit => 's',
        }
    }

    pub fn all() -> [ExploreCommand; 3] {
        [ExploreCommand::Advance, ExploreCommand::Rest, ExploreCommand::Quit]
    }
}

impl CombatCommand {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "e" => Some(CombatCommand::Attack),
            "q" => Some(CombatCommand::Defend),
            "w" => Some(CombatCommand::Flee),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            CombatCommand::Attack => 'e',
            CombatCommand::Defend => 'q',
            CombatCommand::Flee => 'w',
        }
    }

    pub fn all() -> [CombatCommand; 3] {
        [CombatCommand::Attack, CombatCommand::Defend, CombatCommand::Flee]
    }
}

impl fmt::Display for ExploreCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExploreCommand::Advance => "advance",
            ExploreCommand::Rest => "rest",
            ExploreCommand::Quit => "quit",
        };
        write!(f, "[{}] {}", self.key(), label)
    }
}

impl fmt::Display for CombatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CombatCommand::Attack => "attack",
            CombatCommand::Defend => "defend",
            CombatCommand::Flee => "flee",
        };
        write!(f, "[{}] {}", self.key(), label)
    }
}

/// Prompt line listing the exploring commands
pub fn explore_menu() -> String {
    menu(ExploreCommand::all().iter().map(|c| c.to_string()))
}

/// Prompt line listing the combat commands
pub fn combat_menu() -> String {
    menu(CombatCommand::all().iter().map(|c| c.to_string()))
}

fn menu(entries: impl Iterator<Item = String>) -> String {
    entries.collect::<Vec<_>>().join("  ")
}
