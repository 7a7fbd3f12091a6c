//! Turn events and narration
//!
//! Every entity action and state transition is recorded as a [`TurnEvent`].
//! The session writes each event as one line of narration, in order.

use std::fmt;

use serde::Serialize;

use crate::combat::stance::DefenseStance;

/// A single narrated fact produced while resolving a turn
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TurnEvent {
    // Combat
    Attacked { attacker: String, target: String, damage: u32, flavor: Option<String> },
    DamageTaken { name: String, amount: u32, remaining: u32 },
    ShieldAbsorbed { name: String, incoming: u32, taken: u32 },
    StanceChanged { name: String, from: DefenseStance, to: DefenseStance },
    EnemyDefeated { enemy: String },
    FleeSucceeded { enemy: String },
    FleeFailed { enemy: String },
    PlayerDied { name: String },

    // Recovery
    Healed { name: String, amount: u32, health: u32, max_health: u32 },
    Rested { name: String },
    AlreadyFullHealth { name: String },

    // Exploration
    EncounterStarted { enemy: String, description: String },
    NothingHappens,

    // Status
    Stats { name: String, health: u32, max_health: u32, bar: String },

    // Session
    InvalidCommand { input: String },
    Quit { name: String },
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Attacked { attacker, target, damage, flavor: None } => {
                write!(f, "{} strikes {} for {} damage!", attacker, target, damage)
            }
            TurnEvent::Attacked { attacker, target, damage, flavor: Some(flavor) } => {
                write!(
                    f,
                    "The {}, {}, lunges at {} for {} damage!",
                    attacker, flavor, target, damage
                )
            }
            TurnEvent::DamageTaken { name, amount, remaining } => {
                write!(f, "{} takes {} damage. Health left: {}", name, amount, remaining)
            }
            TurnEvent::ShieldAbsorbed { name, incoming, taken } => write!(
                f,
                "{}'s shield absorbed part of the attack ({} of {} gets through).",
                name, taken, incoming
            ),
            TurnEvent::StanceChanged { name, to: DefenseStance::Guarding, .. } => {
                write!(f, "{} raises their shield and braces for the next blow.", name)
            }
            TurnEvent::StanceChanged { name, to: DefenseStance::Ready, .. } => {
                write!(f, "{} lowers their shield.", name)
            }
            TurnEvent::EnemyDefeated { enemy } => write!(f, "Victory! The {} has been slain.", enemy),
            TurnEvent::FleeSucceeded { enemy } => {
                write!(f, "You slip away from the {} and escape.", enemy)
            }
            TurnEvent::FleeFailed { enemy } => {
                write!(f, "The {} blocks your escape!", enemy)
            }
            TurnEvent::PlayerDied { name } => write!(f, "{} has fallen. Game over.", name),
            TurnEvent::Healed { name, amount, health, max_health } => write!(
                f,
                "{} heals {} HP. Health: {}/{}",
                name, amount, health, max_health
            ),
            TurnEvent::Rested { name } => write!(f, "{} rests by a small campfire.", name),
            TurnEvent::AlreadyFullHealth { name } => {
                write!(f, "{} is already at full health.", name)
            }
            TurnEvent::EncounterStarted { enemy, description } => {
                write!(f, "A {} appears! It is {}.", enemy, description)
            }
            TurnEvent::NothingHappens => {
                write!(f, "You press on through the quiet. Nothing happens.")
            }
            TurnEvent::Stats { name, health, max_health, bar } => {
                write!(f, "{:<10} {} {}/{}", name, bar, health, max_health)
            }
            TurnEvent::InvalidCommand { input } if input.is_empty() => {
                write!(f, "Invalid command.")
            }
            TurnEvent::InvalidCommand { input } => write!(f, "Invalid command: '{}'.", input),
            TurnEvent::Quit { name } => write!(f, "{} leaves the road. Farewell.", name),
        }
    }
}

/// Ordered events for one turn
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TurnLog {
    events: Vec<TurnEvent>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Narration lines in event order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(|event| event.to_string())
    }

    /// Total damage that actually landed on `name` this turn
    pub fn damage_to(&self, name: &str) -> u32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                TurnEvent::DamageTaken { name: target, amount, .. } if target == name => {
                    Some(*amount)
                }
                _ => None,
            })
            .sum()
    }

    /// Stance transitions recorded for `name`, oldest first
    pub fn stance_changes(&self, name: &str) -> Vec<(DefenseStance, DefenseStance)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TurnEvent::StanceChanged { name: who, from, to } if who == name => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, predicate: impl Fn(&TurnEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}

impl IntoIterator for TurnLog {
    type Item = TurnEvent;
    type IntoIter = std::vec::IntoIter<TurnEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
