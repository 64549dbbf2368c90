//! Configuration loading from TOML files

mod rules;
mod tiers;

pub use rules::{CombatRules, LootRules, DEFAULT_STYLE_ID};
pub use tiers::{default_tiers, load_tiers, parse_tiers};

use crate::error::CombatError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] CombatError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate combat rules from a TOML file
pub fn load_rules(path: &Path) -> Result<CombatRules, ConfigError> {
    let rules: CombatRules = load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Load and validate combat rules from a TOML string
pub fn parse_rules(content: &str) -> Result<CombatRules, ConfigError> {
    let rules: CombatRules = parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}
