//! Configuration module for game data structures
//!
//! This module handles loading the event catalog from JSON and the game
//! rules from TOML.

mod event;
mod rules;

pub use event::*;
pub use rules::*;

use crate::error::{LifeGameError, Result};
use crate::event::Catalog;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::path::Path;

/// Event data shipped with the crate
pub const BUNDLED_EVENTS_JSON: &str = include_str!("../../data/events.json");

static BUNDLED_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    // The bundled file is covered by tests; an empty catalog is the fallback.
    load_catalog_str(BUNDLED_EVENTS_JSON).unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled event catalog failed to load");
        Catalog::default()
    })
});

/// Catalog parsed from the bundled `events.json`
pub fn bundled_catalog() -> &'static Catalog {
    &BUNDLED_CATALOG
}

/// Parse event records from a JSON document.
///
/// Accepts either `{"events": [...]}` or a bare array of records.
pub fn parse_events(json: &str) -> Result<Vec<EventRecord>> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| LifeGameError::InvalidCatalog(format!("malformed JSON: {}", e)))?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("events") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return Err(LifeGameError::InvalidCatalog(
                    "\"events\" must be an array".to_string(),
                ))
            }
            None => {
                return Err(LifeGameError::InvalidCatalog(
                    "events not found".to_string(),
                ))
            }
        },
        _ => {
            return Err(LifeGameError::InvalidCatalog(
                "expected an object or an array".to_string(),
            ))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<EventRecord>(entry).map_err(|e| {
                LifeGameError::InvalidCatalog(format!("event #{}: {}", index, e))
            })
        })
        .collect()
}

/// Parse and validate a catalog from a JSON string
pub fn load_catalog_str(json: &str) -> Result<Catalog> {
    let events = parse_events(json)?;
    let catalog = Catalog::new(events)?;
    tracing::info!(events = catalog.len(), "event catalog loaded");
    Ok(catalog)
}

/// Read a catalog from a JSON file
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let content = std::fs::read_to_string(path.as_ref())?;
    load_catalog_str(&content)
}

/// Parse game rules from TOML; absent keys keep their defaults
pub fn load_rules_str(content: &str) -> Result<GameRules> {
    let rules: GameRules =
        toml::from_str(content).map_err(|e| LifeGameError::InvalidConfig(e.to_string()))?;
    rules.validate()?;
    Ok(rules)
}

/// Read game rules from a TOML file
pub fn load_rules_file(path: impl AsRef<Path>) -> Result<GameRules> {
    let content = std::fs::read_to_string(path.as_ref())?;
    load_rules_str(&content)
}
