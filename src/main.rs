//! Rogue Trail - Entry Point
//!
//! Sets up logging, loads configuration, asks for the hero's name and runs
//! one session on the console.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rogue_trail::core::error::Result;
use rogue_trail::core::{GameConfig, SeededRandom};
use rogue_trail::entity::Player;
use rogue_trail::rules::{load_enemy_catalog_or_builtin, EnemyCatalog};
use rogue_trail::session::{GameSession, SessionEnd};
use rogue_trail::ui::{CommandReader, ConsoleReader, ConsoleWriter, LineWriter};
use tracing_subscriber::EnvFilter;

/// Turn-based text adventure: explore, rest and fight until you quit or fall
#[derive(Parser, Debug)]
#[command(name = "rogue-trail")]
#[command(about = "Explore, rest and fight random monsters on the console")]
struct Args {
    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Game tuning file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enemy catalog file (TOML, [[enemy]] tables)
    #[arg(long)]
    enemies: Option<PathBuf>,

    /// Hero name; prompted for when absent
    #[arg(long)]
    name: Option<String>,

    /// Format of the end-of-run summary
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the narration
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rogue_trail=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let catalog = match &args.enemies {
        Some(path) => load_enemy_catalog_or_builtin(path)?,
        None => EnemyCatalog::builtin(),
    };

    let rng = match args.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), "rogue trail starting");

    let mut reader = ConsoleReader::stdin();
    let mut writer = ConsoleWriter::stdout();

    let name = match args.name {
        Some(name) => name,
        None => {
            writer.write_line("What is your name, hero?")?;
            reader.read_command()?.unwrap_or_default()
        }
    };
    let name = resolve_name(&name, &config.default_hero_name);

    writer.write_line(&format!("{} sets out down the trail.", name))?;

    let player = Player::new(name, &config.hero);
    let mut session = GameSession::new(player, catalog, config, rng);
    let end = session.run(&mut reader, &mut writer)?;

    match end {
        SessionEnd::GameOver(outcome) => {
            writer.write_line(&format!("{} was {}.", session.player().name(), outcome))?
        }
        SessionEnd::InputClosed => writer.write_line("The trail goes quiet.")?,
    }

    match args.summary {
        SummaryFormat::Text => writer.write_line(&format!("Run summary: {}", session.stats()))?,
        SummaryFormat::Json => writer.write_line(&serde_json::to_string(session.stats())?)?,
    }

    Ok(())
}

/// Blank or whitespace-only names fall back to the default
fn resolve_name(input: &str, default_name: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default_name.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name("  Aria ", "Knight"), "Aria");
        assert_eq!(resolve_name("   ", "Knight"), "Knight");
        assert_eq!(resolve_name("", "Knight"), "Knight");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["rogue-trail", "--seed", "7", "--summary", "json"]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.summary, SummaryFormat::Json);
        assert!(args.name.is_none());
    }
}
