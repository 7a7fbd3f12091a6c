//! Game session: state machine, statistics and the interactive loop

pub mod game;
pub mod runner;
pub mod state;
pub mod stats;

pub use game::GameSession;
pub use runner::SessionEnd;
pub use state::{EnemySnapshot, GameOutcome, GameState, SessionSnapshot};
pub use stats::SessionStats;
