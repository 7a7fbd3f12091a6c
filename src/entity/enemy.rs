//! Monsters and the templates they are spawned from

use serde::{Deserialize, Serialize};

use crate::combat::events::TurnLog;
use crate::combat::resolution::{resolve_strike, Combatant};
use crate::core::rng::RandomSource;
use crate::entity::Entity;

/// Stateless blueprint for a monster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_health: u32,
    pub attack_power: u32,
    pub description: String,
}

impl EnemyTemplate {
    pub fn new(name: &str, max_health: u32, attack_power: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            max_health,
            attack_power,
            description: description.to_string(),
        }
    }

    /// Fresh instance at full health
    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            Entity::new(self.name.clone(), self.max_health, self.attack_power),
            self.description.clone(),
        )
    }
}

/// A live monster in the current encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    entity: Entity,
    description: String,
}

impl Enemy {
    pub fn new(entity: Entity, description: impl Into<String>) -> Self {
        Self {
            entity,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_alive(&self) -> bool {
        self.entity.is_alive()
    }

    /// Strike `target`. Returns health the target actually lost.
    pub fn attack(
        &self,
        target: &mut dyn Combatant,
        rng: &mut dyn RandomSource,
        log: &mut TurnLog,
    ) -> u32 {
        resolve_strike(&self.entity, Some(&self.description), target, rng, log)
    }
}

impl Combatant for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}
