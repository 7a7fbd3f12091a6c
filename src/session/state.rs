//! Session states, outcomes and snapshots

use std::fmt;

use serde::Serialize;

use crate::combat::stance::DefenseStance;

/// Where the session is in its exploring -> combat -> game over cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum GameState {
    #[default]
    Exploring,
    Combat,
    /// Terminal
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Exploring => write!(f, "exploring"),
            GameState::Combat => write!(f, "combat"),
            GameState::GameOver => write!(f, "game over"),
        }
    }
}

/// How the run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    /// The player chose to stop
    Quit,
    /// The player was killed
    Slain { by: String },
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Quit => write!(f, "retired from the road"),
            GameOutcome::Slain { by } => write!(f, "slain by a {}", by),
        }
    }
}

/// Point-in-time view of the session for assertions and reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub player_health: u32,
    pub player_max_health: u32,
    pub player_stance: DefenseStance,
    pub enemy: Option<EnemySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemySnapshot {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
}
