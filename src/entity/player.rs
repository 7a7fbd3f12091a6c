//! The hero
//!
//! Adds the shield stance on top of the shared [`Entity`] record. A raised
//! shield mitigates exactly one incoming blow and then drops.

use crate::combat::events::{TurnEvent, TurnLog};
use crate::combat::resolution::{mitigate, resolve_strike, Combatant};
use crate::combat::stance::{DefenseStance, StanceTrigger};
use crate::core::config::HeroConfig;
use crate::core::rng::RandomSource;
use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    entity: Entity,
    defense_power: u32,
    stance: DefenseStance,
}

impl Player {
    pub fn new(name: impl Into<String>, hero: &HeroConfig) -> Self {
        Self {
            entity: Entity::new(name, hero.max_health, hero.attack_power),
            defense_power: hero.defense_power,
            stance: DefenseStance::Ready,
        }
    }

    /// Build from an explicit entity record
    pub fn from_entity(entity: Entity, defense_power: u32) -> Self {
        Self {
            entity,
            defense_power,
            stance: DefenseStance::Ready,
        }
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn defense_power(&self) -> u32 {
        self.defense_power
    }

    pub fn stance(&self) -> DefenseStance {
        self.stance
    }

    pub fn is_defending(&self) -> bool {
        self.stance.is_guarding()
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
        resolve_strike(&self.entity, None, target, rng, log)
    }

    /// Raise the shield for the next incoming blow
    pub fn defend(&mut self, log: &mut TurnLog) {
        self.transition(StanceTrigger::RaiseShield, log);
    }

    /// Heal up to `amount`, clamped at max health
    ///
    /// The heal is narrated with the requested amount even when already at
    /// full health. Returns health actually gained.
    pub fn heal(&mut self, amount: u32, log: &mut TurnLog) -> u32 {
        let gained = self.entity.restore(amount);
        log.push(TurnEvent::Healed {
            name: self.entity.name().to_string(),
            amount,
            health: self.entity.health(),
            max_health: self.entity.max_health(),
        });
        gained
    }

    fn transition(&mut self, trigger: StanceTrigger, log: &mut TurnLog) {
        let from = self.stance;
        let to = from.apply(trigger);
        // Re-raising an already raised shield is still narrated
        if from != to || trigger == StanceTrigger::RaiseShield {
            log.push(TurnEvent::StanceChanged {
                name: self.entity.name().to_string(),
                from,
                to,
            });
        }
        self.stance = to;
    }
}

impl Combatant for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn apply_damage(&mut self, amount: u32, rng: &mut dyn RandomSource, log: &mut TurnLog) -> u32 {
        let amount = if self.is_defending() {
            let taken = mitigate(amount, self.defense_power, rng);
            tracing::debug!(incoming = amount, taken, "shield mitigated blow");
            log.push(TurnEvent::ShieldAbsorbed {
                name: self.entity.name().to_string(),
                incoming: amount,
                taken,
            });
            taken
        } else {
            amount
        };

        let lost = self.entity.take_damage(amount, log);
        self.transition(StanceTrigger::HitTaken, log);
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;
    use crate::entity::Enemy;

    fn knight() -> Player {
        Player::new("Knight", &HeroConfig::default())
    }

    #[test]
    fn test_new_player_from_hero_config() {
        let player = knight();
        assert_eq!(player.entity().max_health(), 100);
        assert_eq!(player.entity().attack_power(), 20);
        assert_eq!(player.defense_power(), 10);
        assert!(!player.is_defending());
    }

    #[test]
    fn test_defend_then_hit_mitigates_and_resets() {
        // Knight at 30/100 raises shield, takes 25 raw with a shield roll of 2
        let mut player = Player::from_entity(Entity::new("Knight", 100, 20).with_health(30), 10);
        let mut rng = ScriptedRandom::new([2]);
        let mut log = TurnLog::new();

        player.defend(&mut log);
        assert!(player.is_defending());

        player.apply_damage(25, &mut rng, &mut log);

        assert_eq!(player.entity().health(), 17);
        assert!(!player.is_defending());
        assert!(log.contains(|e| matches!(e, TurnEvent::ShieldAbsorbed { incoming: 25, taken: 13, .. })));
        assert_eq!(
            log.stance_changes("Knight"),
            vec![
                (DefenseStance::Ready, DefenseStance::Guarding),
                (DefenseStance::Guarding, DefenseStance::Ready),
            ]
        );
    }

    #[test]
    fn test_undefended_hit_takes_full_damage() {
        let mut player = knight();
        let mut rng = ScriptedRandom::default();
        let mut log = TurnLog::new();

        player.apply_damage(25, &mut rng, &mut log);

        assert_eq!(player.entity().health(), 75);
        assert!(!log.contains(|e| matches!(e, TurnEvent::ShieldAbsorbed { .. })));
        assert!(log.stance_changes("Knight").is_empty());
    }

    #[test]
    fn test_shield_only_covers_one_blow() {
        let mut player = knight();
        let mut rng = ScriptedRandom::new([0]);
        let mut log = TurnLog::new();

        player.defend(&mut log);
        player.apply_damage(15, &mut rng, &mut log);
        player.apply_damage(15, &mut rng, &mut log);

        // 15 - 10 - 0 = 5, then a full 15
        assert_eq!(player.entity().health(), 80);
    }

    #[test]
    fn test_dynamic_dispatch_consumes_guard() {
        let mut player = knight();
        let mut rng = ScriptedRandom::new([1]);
        let mut log = TurnLog::new();

        player.defend(&mut log);
        let target: &mut dyn Combatant = &mut player;
        target.apply_damage(20, &mut rng, &mut log);

        // 20 - 10 - 1
        assert_eq!(player.entity().health(), 91);
        assert!(!player.is_defending());
    }

    #[test]
    fn test_heal_clamps_and_reports() {
        let mut player = Player::from_entity(Entity::new("Knight", 100, 20).with_health(90), 10);
        let mut log = TurnLog::new();

        let gained = player.heal(24, &mut log);

        assert_eq!(gained, 10);
        assert_eq!(player.entity().health(), 100);
        assert_eq!(
            log.events(),
            &[TurnEvent::Healed { name: "Knight".into(), amount: 24, health: 100, max_health: 100 }]
        );
    }

    #[test]
    fn test_heal_at_full_health_still_narrates() {
        let mut player = knight();
        let mut log = TurnLog::new();
        assert_eq!(player.heal(5, &mut log), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_attack_damages_enemy() {
        let player = knight();
        let mut enemy = Enemy::new(Entity::new("Skeleton", 40, 9), "a rattling heap of bones");
        let mut rng = ScriptedRandom::new([5]);
        let mut log = TurnLog::new();

        player.attack(&mut enemy, &mut rng, &mut log);

        assert_eq!(enemy.entity().health(), 15);
        assert!(enemy.is_alive());
    }
}
