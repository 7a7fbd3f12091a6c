//! Strike resolution
//!
//! A strike rolls damage from the attacker's power and hands it to the
//! target's own damage handler, which may mitigate it before the shared
//! clamp is applied.

use crate::combat::constants::{ATTACK_BONUS_MAX, SHIELD_ROLL_MAX};
use crate::combat::events::{TurnEvent, TurnLog};
use crate::core::rng::RandomSource;
use crate::entity::Entity;

/// Anything that can be struck
///
/// Implementors expose their shared [`Entity`] record and may override
/// [`Combatant::apply_damage`] to intercept incoming blows.
pub trait Combatant {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Apply a raw blow, returning health actually lost
    fn apply_damage(&mut self, amount: u32, _rng: &mut dyn RandomSource, log: &mut TurnLog) -> u32 {
        self.entity_mut().take_damage(amount, log)
    }
}

/// Raw damage of one blow: attack power plus a bonus in `0..=ATTACK_BONUS_MAX`
pub fn roll_attack_damage(attack_power: u32, rng: &mut dyn RandomSource) -> u32 {
    attack_power.saturating_add(rng.next_in_range(0, ATTACK_BONUS_MAX))
}

/// Damage left after a raised shield: `incoming - defense - roll`, floored at 0
pub fn mitigate(incoming: u32, defense_power: u32, rng: &mut dyn RandomSource) -> u32 {
    let block = defense_power.saturating_add(rng.next_in_range(0, SHIELD_ROLL_MAX));
    incoming.saturating_sub(block)
}

/// Resolve one blow from `attacker` against `target`
///
/// `flavor` is the attacker's description, if it has one, and only affects
/// narration. Returns health actually lost by the target.
pub fn resolve_strike(
    attacker: &Entity,
    flavor: Option<&str>,
    target: &mut dyn Combatant,
    rng: &mut dyn RandomSource,
    log: &mut TurnLog,
) -> u32 {
    let damage = roll_attack_damage(attacker.attack_power(), rng);
    tracing::debug!(attacker = attacker.name(), damage, "strike rolled");

    log.push(TurnEvent::Attacked {
        attacker: attacker.name().to_string(),
        target: target.entity().name().to_string(),
        damage,
        flavor: flavor.map(str::to_string),
    });

    target.apply_damage(damage, rng, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;

    struct Dummy(Entity);

    impl Combatant for Dummy {
        fn entity(&self) -> &Entity {
            &self.0
        }

        fn entity_mut(&mut self) -> &mut Entity {
            &mut self.0
        }
    }

    #[test]
    fn test_attack_damage_adds_bonus() {
        let mut rng = ScriptedRandom::new([3]);
        assert_eq!(roll_attack_damage(20, &mut rng), 23);
    }

    #[test]
    fn test_mitigation_floors_at_zero() {
        let mut rng = ScriptedRandom::new([2]);
        assert_eq!(mitigate(5, 10, &mut rng), 0);
    }

    #[test]
    fn test_mitigation_subtracts_defense_and_roll() {
        let mut rng = ScriptedRandom::new([2]);
        assert_eq!(mitigate(25, 10, &mut rng), 13);
    }

    #[test]
    fn test_strike_uses_default_damage_handler() {
        let attacker = Entity::new("Knight", 100, 20);
        let mut target = Dummy(Entity::new("Goblin", 30, 8));
        let mut rng = ScriptedRandom::new([4]);
        let mut log = TurnLog::new();

        let lost = resolve_strike(&attacker, None, &mut target, &mut rng, &mut log);

        assert_eq!(lost, 24);
        assert_eq!(target.0.health(), 6);
        assert_eq!(log.len(), 2);
        assert!(matches!(log.events()[0], TurnEvent::Attacked { damage: 24, .. }));
    }

    #[test]
    fn test_strike_overkill_reports_health_lost() {
        let attacker = Entity::new("Ogre", 60, 14);
        let mut target = Dummy(Entity::new("Knight", 10, 20));
        let mut rng = ScriptedRandom::new([0]);
        let mut log = TurnLog::new();

        let lost = resolve_strike(&attacker, Some("a hulking brute"), &mut target, &mut rng, &mut log);

        assert_eq!(lost, 10);
        assert!(!target.0.is_alive());
    }
}
