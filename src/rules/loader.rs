//! Load the enemy catalog from TOML files

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{GameError, Result};
use crate::entity::EnemyTemplate;
use crate::rules::catalog::EnemyCatalog;

/// On-disk layout: a list of `[[enemy]]` tables
#[derive(Deserialize)]
struct CatalogFile {
    enemy: Vec<EnemyTemplate>,
}

/// Parse a catalog from TOML text made of `[[enemy]]` tables
pub fn parse_enemy_catalog(content: &str) -> Result<EnemyCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    EnemyCatalog::new(file.enemy)
}

/// Load a catalog file
pub fn load_enemy_catalog(path: &Path) -> Result<EnemyCatalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_enemy_catalog(&content)?;
    tracing::info!(path = %path.display(), enemies = catalog.len(), "loaded enemy catalog");
    Ok(catalog)
}

/// Load a catalog file, falling back to the built-in bestiary when the file
/// cannot be read. Parse and validation errors still fail.
pub fn load_enemy_catalog_or_builtin(path: &Path) -> Result<EnemyCatalog> {
    match load_enemy_catalog(path) {
        Err(GameError::IoError(err)) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "enemy catalog unreadable, using built-in bestiary"
            );
            Ok(EnemyCatalog::builtin())
        }
        other => other,
    }
}
