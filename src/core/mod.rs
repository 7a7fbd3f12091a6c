pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, HeroConfig};
pub use error::{GameError, Result};
pub use rng::{RandomSource, RecordingRandom, ScriptedRandom, SeededRandom};
