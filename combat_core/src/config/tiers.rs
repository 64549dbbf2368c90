//! Tier table loading

use super::ConfigError;
use crate::tier::{Tier, TierTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for tier configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiersConfig {
    #[serde(rename = "tiers")]
    pub tiers: Vec<Tier>,
}

/// Load the tier table from a TOML file
pub fn load_tiers(path: &Path) -> Result<TierTable, ConfigError> {
    let config: TiersConfig = super::load_toml(path)?;
    Ok(TierTable::new(config.tiers)?)
}

/// Load the tier table from a TOML string
pub fn parse_tiers(content: &str) -> Result<TierTable, ConfigError> {
    let config: TiersConfig = super::parse_toml(content)?;
    Ok(TierTable::new(config.tiers)?)
}

/// Get the default tier table
pub fn default_tiers() -> TierTable {
    let toml = include_str!("../../config/tiers.toml");
    parse_tiers(toml).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "embedded tier table rejected, using built-in tiers");
        TierTable::builtin()
    })
}
