//! Rogue Trail - turn-based text adventure combat

pub mod combat;
pub mod command;
pub mod core;
pub mod entity;
pub mod rules;
pub mod session;
pub mod ui;
