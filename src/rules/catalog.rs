//! Enemy catalog - the fixed table encounters are drawn from

use std::collections::HashSet;

use crate::core::error::{GameError, Result};
use crate::core::rng::RandomSource;
use crate::entity::EnemyTemplate;

/// Set of monster templates, drawn from uniformly
///
/// Only constructed through [`EnemyCatalog::new`] or
/// [`EnemyCatalog::builtin`], so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyCatalog {
    templates: Vec<EnemyTemplate>,
}

impl Default for EnemyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EnemyCatalog {
    /// Build and validate a catalog from templates
    pub fn new(templates: Vec<EnemyTemplate>) -> Result<Self> {
        let catalog = Self { templates };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The default bestiary
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                EnemyTemplate::new("Goblin", 30, 8, "a sneering green raider with a rusty knife"),
                EnemyTemplate::new("Ogre", 60, 14, "a hulking brute dragging a tree-trunk club"),
                EnemyTemplate::new("Slime", 20, 5, "a quivering blob of acidic ooze"),
                EnemyTemplate::new("Wolf", 35, 10, "a lean grey hunter with bared fangs"),
                EnemyTemplate::new("Skeleton", 40, 9, "a rattling heap of bones clutching a notched sword"),
            ],
        }
    }

    pub fn templates(&self) -> &[EnemyTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EnemyTemplate> {
        self.templates
            .iter()
            .find(|template| template.name.eq_ignore_ascii_case(name))
    }

    /// Pick a template uniformly at random
    pub fn draw(&self, rng: &mut dyn RandomSource) -> &EnemyTemplate {
        let last = self.templates.len().saturating_sub(1) as u32;
        let index = rng.next_in_range(0, last) as usize;
        &self.templates[index.min(last as usize)]
    }

    /// Catalog entries are the only externally supplied numbers, so they
    /// are checked here once
    pub fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(GameError::InvalidCatalog("catalog has no enemies".into()));
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if template.name.trim().is_empty() {
                return Err(GameError::InvalidCatalog("enemy with blank name".into()));
            }
            if template.max_health == 0 {
                return Err(GameError::InvalidCatalog(format!(
                    "{}: max_health must be positive",
                    template.name
                )));
            }
            if !seen.insert(template.name.to_ascii_lowercase()) {
                return Err(GameError::InvalidCatalog(format!(
                    "duplicate enemy '{}'",
                    template.name
                )));
            }
        }

        Ok(())
    }
}
