//! Game configuration with documented constants
//!
//! Session-level odds and heal ranges are collected here. Per-blow combat
//! formulas live in `combat::constants`.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{GameError, Result};

/// Starting attributes of the hero
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub max_health: u32,
    pub attack_power: u32,
    /// Flat reduction applied to a blow taken while the shield is raised
    pub defense_power: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            attack_power: 20,
            defense_power: 10,
        }
    }
}

/// Configuration for the exploration and combat loop
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === EXPLORATION ===
    /// Percent chance (0-100) that advancing runs into a monster
    pub encounter_chance: u32,

    /// Heal granted when advancing finds nothing, if not at full health
    ///
    /// Every quiet step heals; there is no separate roll gating it.
    pub explore_heal: RangeInclusive<u32>,

    /// Heal granted by resting, if not at full health
    pub rest_heal: RangeInclusive<u32>,

    // === COMBAT ===
    /// Percent chance (0-100) that a flee attempt succeeds
    pub flee_chance: u32,

    /// Flat part of the heal after a victory
    ///
    /// The random part is drawn from 0..=(enemy attack power / 3).
    pub victory_heal_bonus: u32,

    // === HERO ===
    /// Name used when the player enters a blank name
    pub default_hero_name: String,

    pub hero: HeroConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            encounter_chance: 65,
            explore_heal: 3..=7,
            rest_heal: 10..=24,
            flee_chance: 40,
            victory_heal_bonus: 5,
            default_hero_name: "Knight".to_string(),
            hero: HeroConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (label, chance) in [
            ("encounter_chance", self.encounter_chance),
            ("flee_chance", self.flee_chance),
        ] {
            if chance > 100 {
                return Err(GameError::InvalidConfig(format!(
                    "{} ({}) must be a percentage between 0 and 100",
                    label, chance
                )));
            }
        }

        for (label, range) in [("explore_heal", &self.explore_heal), ("rest_heal", &self.rest_heal)] {
            if range.start() > range.end() {
                return Err(GameError::InvalidConfig(format!(
                    "{} range {}..={} is inverted",
                    label,
                    range.start(),
                    range.end()
                )));
            }
        }

        if self.hero.max_health == 0 {
            return Err(GameError::InvalidConfig(
                "hero.max_health must be positive".into(),
            ));
        }

        if self.default_hero_name.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "default_hero_name must not be blank".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.encounter_chance, 65);
        assert_eq!(config.flee_chance, 40);
        assert_eq!(config.hero.max_health, 100);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            flee_chance = 55

            [hero]
            attack_power = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.flee_chance, 55);
        assert_eq!(config.encounter_chance, 65);
        assert_eq!(config.hero.attack_power, 25);
        assert_eq!(config.hero.defense_power, 10);
        assert_eq!(config.rest_heal, 10..=24);
    }

    #[test]
    fn test_heal_range_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            rest_heal = { start = 1, end = 2 }
            "#,
        )
        .unwrap();
        assert_eq!(config.rest_heal, 1..=2);
    }

    #[test]
    fn test_rejects_chance_over_100() {
        let config = GameConfig {
            encounter_chance: 101,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_inverted_heal_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let config = GameConfig {
            rest_heal: 24..=10,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_hero_health() {
        let mut config = GameConfig::default();
        config.hero.max_health = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/game.toml");
        assert_eq!(GameConfig::load(&path).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = GameConfig::from_toml_str("flee_chance = \"often\"");
        assert!(matches!(result, Err(GameError::TomlError(_))));
    }
}
