//! Enemy catalog, built in or loaded from TOML

pub mod catalog;
mod loader;

pub use catalog::EnemyCatalog;
pub use loader::{load_enemy_catalog, load_enemy_catalog_or_builtin, parse_enemy_catalog};
