//! Combatant records shared by the hero and the monsters

pub mod enemy;
pub mod player;

pub use enemy::{Enemy, EnemyTemplate};
pub use player::Player;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{HEALTH_BAR_GLYPH, HEALTH_BAR_SEGMENTS};
use crate::combat::events::{TurnEvent, TurnLog};

/// Attributes and health rules shared by every combatant
///
/// Health only moves through [`Entity::take_damage`] (down, clamped at 0)
/// and [`Entity::restore`] (up, clamped at max).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    name: String,
    health: u32,
    max_health: u32,
    attack_power: u32,
}

impl Entity {
    /// Create an entity at full health
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            attack_power,
        }
    }

    /// Same entity at a lower starting health, clamped to `0..=max_health`
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    /// Lose `amount` health, clamped at 0, and report it
    ///
    /// Returns health actually lost. Outside the crate, damage goes through
    /// [`Combatant::apply_damage`](crate::combat::Combatant::apply_damage) so
    /// the hero's shield always sees the blow.
    pub(crate) fn take_damage(&mut self, amount: u32, log: &mut TurnLog) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        log.push(TurnEvent::DamageTaken {
            name: self.name.clone(),
            amount,
            remaining: self.health,
        });
        before - self.health
    }

    /// Gain up to `amount` health, clamped at max. Returns health gained.
    pub(crate) fn restore(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// One glyph per tenth of max health, rounded down
    pub fn health_bar(&self) -> String {
        let per_segment = (self.max_health / HEALTH_BAR_SEGMENTS).max(1);
        let filled = (self.health / per_segment).min(HEALTH_BAR_SEGMENTS) as usize;
        HEALTH_BAR_GLYPH.to_string().repeat(filled)
    }

    pub fn display_stats(&self, log: &mut TurnLog) {
        log.push(TurnEvent::Stats {
            name: self.name.clone(),
            health: self.health,
            max_health: self.max_health,
            bar: self.health_bar(),
        });
    }
}
