//! Game session - the exploring / combat / game over state machine
//!
//! One command is resolved per call to [`GameSession::play_turn`]:
//! read command -> player action -> (victory | enemy action) -> death check.
//! The session never touches a console; it returns a [`TurnLog`] and the
//! runner writes it out.

use crate::combat::constants::VICTORY_HEAL_DIVISOR;
use crate::combat::events::{TurnEvent, TurnLog};
use crate::combat::resolution::Combatant;
use crate::command::{combat_menu, explore_menu, normalize, CombatCommand, ExploreCommand};
use crate::core::config::GameConfig;
use crate::core::rng::{RandomSource, SeededRandom};
use crate::entity::{Enemy, Player};
use crate::rules::catalog::EnemyCatalog;
use crate::session::state::{EnemySnapshot, GameOutcome, GameState, SessionSnapshot};
use crate::session::stats::SessionStats;

/// A single run: one hero, at most one live enemy
pub struct GameSession<R: RandomSource = SeededRandom> {
    player: Player,
    current_enemy: Option<Enemy>,
    state: GameState,
    outcome: Option<GameOutcome>,
    catalog: EnemyCatalog,
    config: GameConfig,
    rng: R,
    stats: SessionStats,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(player: Player, catalog: EnemyCatalog, config: GameConfig, rng: R) -> Self {
        Self {
            player,
            current_enemy: None,
            state: GameState::Exploring,
            outcome: None,
            catalog,
            config,
            rng,
            stats: SessionStats::default(),
        }
    }

    /// Start a session already in combat with `enemy`
    pub fn with_encounter(mut self, enemy: Enemy) -> Self {
        self.current_enemy = Some(enemy);
        self.state = GameState::Combat;
        self.stats.encounters += 1;
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.current_enemy.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let entity = self.player.entity();
        SessionSnapshot {
            state: self.state,
            player_health: entity.health(),
            player_max_health: entity.max_health(),
            player_stance: self.player.stance(),
            enemy: self.current_enemy.as_ref().map(|enemy| EnemySnapshot {
                name: enemy.name().to_string(),
                health: enemy.entity().health(),
                max_health: enemy.entity().max_health(),
            }),
        }
    }

    /// Health bars for the hero and, in combat, the enemy
    pub fn status(&self) -> TurnLog {
        let mut log = TurnLog::new();
        self.player.entity().display_stats(&mut log);
        if let Some(enemy) = &self.current_enemy {
            enemy.entity().display_stats(&mut log);
        }
        log
    }

    /// Commands available in the current state
    pub fn menu(&self) -> String {
        match self.state {
            GameState::Exploring => explore_menu(),
            GameState::Combat => combat_menu(),
            GameState::GameOver => String::new(),
        }
    }

    /// Resolve one command. `None` (end of input) counts as an empty command.
    pub fn play_turn(&mut self, input: Option<&str>) -> TurnLog {
        let mut log = TurnLog::new();
        let token = normalize(input);

        match self.state {
            GameState::GameOver => return log,
            GameState::Exploring => self.explore_turn(&token, &mut log),
            GameState::Combat => self.combat_turn(&token, &mut log),
        }

        self.stats.turns += 1;
        tracing::debug!(turn = self.stats.turns, state = %self.state, "turn resolved");
        log
    }

    fn explore_turn(&mut self, token: &str, log: &mut TurnLog) {
        let Some(command) = ExploreCommand::parse(token) else {
            log.push(TurnEvent::InvalidCommand { input: token.to_string() });
            return;
        };

        match command {
            ExploreCommand::Advance => self.advance(log),
            ExploreCommand::Rest => self.rest(log),
            ExploreCommand::Quit => {
                log.push(TurnEvent::Quit { name: self.player.name().to_string() });
                self.finish(GameOutcome::Quit);
            }
        }
    }

    fn advance(&mut self, log: &mut TurnLog) {
        let roll = self.rng.roll_percent();
        tracing::debug!(roll, chance = self.config.encounter_chance, "encounter roll");

        if roll < self.config.encounter_chance {
            let enemy = self.catalog.draw(&mut self.rng).spawn();
            tracing::info!(enemy = enemy.name(), "encounter started");
            log.push(TurnEvent::EncounterStarted {
                enemy: enemy.name().to_string(),
                description: enemy.description().to_string(),
            });
            self.current_enemy = Some(enemy);
            self.state = GameState::Combat;
            self.stats.encounters += 1;
            return;
        }

        log.push(TurnEvent::NothingHappens);
        if !self.player.entity().is_full_health() {
            let amount = self.roll_heal(self.config.explore_heal.clone());
            self.stats.healed += self.player.heal(amount, log);
        }
    }

    fn rest(&mut self, log: &mut TurnLog) {
        log.push(TurnEvent::Rested { name: self.player.name().to_string() });
        if self.player.entity().is_full_health() {
            log.push(TurnEvent::AlreadyFullHealth { name: self.player.name().to_string() });
            return;
        }
        let amount = self.roll_heal(self.config.rest_heal.clone());
        self.stats.healed += self.player.heal(amount, log);
    }

    fn combat_turn(&mut self, token: &str, log: &mut TurnLog) {
        // An invalid command skips the whole round, enemy included
        let Some(command) = CombatCommand::parse(token) else {
            log.push(TurnEvent::InvalidCommand { input: token.to_string() });
            return;
        };

        let Some(mut enemy) = self.current_enemy.take() else {
            tracing::warn!("combat state without an enemy, returning to exploration");
            self.state = GameState::Exploring;
            return;
        };

        match command {
            CombatCommand::Attack => {
                self.stats.damage_dealt += self.player.attack(&mut enemy, &mut self.rng, log);
                if !enemy.is_alive() {
                    self.resolve_victory(&enemy, log);
                    return;
                }
            }
            CombatCommand::Defend => self.player.defend(log),
            CombatCommand::Flee => {
                let roll = self.rng.roll_percent();
                tracing::debug!(roll, chance = self.config.flee_chance, "flee roll");
                if roll < self.config.flee_chance {
                    tracing::info!(enemy = enemy.name(), "escaped encounter");
                    log.push(TurnEvent::FleeSucceeded { enemy: enemy.name().to_string() });
                    self.stats.escapes += 1;
                    self.state = GameState::Exploring;
                    return;
                }
                log.push(TurnEvent::FleeFailed { enemy: enemy.name().to_string() });
            }
        }

        self.stats.damage_taken += enemy.attack(&mut self.player, &mut self.rng, log);

        if !self.player.is_alive() {
            log.push(TurnEvent::PlayerDied { name: self.player.name().to_string() });
            self.finish(GameOutcome::Slain { by: enemy.name().to_string() });
            return;
        }

        self.current_enemy = Some(enemy);
    }

    fn resolve_victory(&mut self, enemy: &Enemy, log: &mut TurnLog) {
        tracing::info!(enemy = enemy.name(), "enemy defeated");
        log.push(TurnEvent::EnemyDefeated { enemy: enemy.name().to_string() });

        let bonus_max = enemy.entity().attack_power() / VICTORY_HEAL_DIVISOR;
        let amount = self
            .rng
            .next_in_range(0, bonus_max)
            .saturating_add(self.config.victory_heal_bonus);
        self.stats.healed += self.player.heal(amount, log);

        self.stats.victories += 1;
        self.current_enemy = None;
        self.state = GameState::Exploring;
    }

    fn roll_heal(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.rng.next_in_range(*range.start(), *range.end())
    }

    fn finish(&mut self, outcome: GameOutcome) {
        tracing::info!(outcome = %outcome, stats = %self.stats, "game over");
        self.current_enemy = None;
        self.state = GameState::GameOver;
        self.outcome = Some(outcome);
    }
}

impl GameSession<SeededRandom> {
    /// Fresh session with the default bestiary and config
    pub fn seeded(player_name: &str, seed: u64) -> Self {
        let config = GameConfig::default();
        let player = Player::new(player_name, &config.hero);
        Self::new(player, EnemyCatalog::builtin(), config, SeededRandom::from_seed(seed))
    }
}
