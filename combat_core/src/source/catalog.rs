//! ContentCatalog - In-memory content, loadable from TOML

use super::ContentSource;
use crate::config::{self, CombatRules, ConfigError};
use crate::error::CombatError;
use crate::stats::EnemyType;
use crate::tier::{Tier, TierTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for catalog configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub enemies: Vec<EnemyType>,
    /// Optional tier override; the default table is used when absent
    #[serde(default)]
    pub tiers: Option<Vec<Tier>>,
}

/// Validated enemy types and tiers held in memory
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    enemies: HashMap<String, EnemyType>,
    tiers: TierTable,
}

impl ContentCatalog {
    /// Build a catalog, validating every enemy against `rules`
    pub fn new(
        tiers: TierTable,
        enemies: Vec<EnemyType>,
        rules: &CombatRules,
    ) -> Result<Self, CombatError> {
        let mut catalog = ContentCatalog {
            enemies: HashMap::new(),
            tiers,
        };
        for enemy in enemies {
            catalog.insert(enemy, rules)?;
        }
        Ok(catalog)
    }

    /// Add one enemy type. Duplicate ids are rejected.
    pub fn insert(&mut self, enemy: EnemyType, rules: &CombatRules) -> Result<(), CombatError> {
        if let Err(err) = enemy.validate(rules.stat_sum_tolerance) {
            tracing::warn!(enemy_id = %enemy.id, error = %err, "rejected enemy content");
            return Err(err);
        }
        self.tier_for(&enemy)?;
        if self.enemies.contains_key(&enemy.id) {
            return Err(CombatError::content(&enemy.id, "duplicate enemy id"));
        }
        self.enemies.insert(enemy.id.clone(), enemy);
        Ok(())
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path, rules: &CombatRules) -> Result<Self, ConfigError> {
        let config: CatalogConfig = config::load_toml(path)?;
        Self::from_config(config, rules)
    }

    /// Load a catalog from a TOML string
    pub fn parse(content: &str, rules: &CombatRules) -> Result<Self, ConfigError> {
        let config: CatalogConfig = config::parse_toml(content)?;
        Self::from_config(config, rules)
    }

    fn from_config(config: CatalogConfig, rules: &CombatRules) -> Result<Self, ConfigError> {
        let tiers = match config.tiers {
            Some(tiers) => TierTable::new(tiers)?,
            None => config::default_tiers(),
        };
        let catalog = Self::new(tiers, config.enemies, rules)?;
        tracing::info!(enemies = catalog.len(), "loaded content catalog");
        Ok(catalog)
    }

    /// Number of enemy types
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether the catalog has no enemy types
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// The tier table in use
    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Enemy ids, sorted
    pub fn enemy_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.enemies.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl ContentSource for ContentCatalog {
    fn enemy_type(&self, id: &str) -> Result<&EnemyType, CombatError> {
        self.enemies
            .get(id)
            .ok_or_else(|| CombatError::content(id, "no such enemy type"))
    }

    fn tier(&self, tier_num: u8) -> Result<&Tier, CombatError> {
        self.tiers.get(tier_num)
    }
}
