//! Combat rules configuration

use crate::error::CombatError;
use crate::zone::ZoneTable;
use serde::{Deserialize, Serialize};

/// Style id that means "no style override"
pub const DEFAULT_STYLE_ID: &str = "normal";

/// Tunable combat constants, passed explicitly into every operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRules {
    /// Absolute stat points per normalized point per level
    #[serde(default = "default_base_stat_unit")]
    pub base_stat_unit: f64,
    /// Allowed drift of a normalized stat sum from 1.0
    #[serde(default = "default_stat_sum_tolerance")]
    pub stat_sum_tolerance: f64,
    /// Floor on damage per exchange. A hit always deals at least this much.
    #[serde(default = "default_min_damage")]
    pub min_damage: f64,
    /// Zone table applied to every actor
    #[serde(default)]
    pub zone_table: ZoneTable,
    #[serde(default)]
    pub loot: LootRules,
}

impl Default for CombatRules {
    fn default() -> Self {
        CombatRules {
            base_stat_unit: default_base_stat_unit(),
            stat_sum_tolerance: default_stat_sum_tolerance(),
            min_damage: default_min_damage(),
            zone_table: ZoneTable::default(),
            loot: LootRules::default(),
        }
    }
}

fn default_base_stat_unit() -> f64 {
    10.0
}
fn default_stat_sum_tolerance() -> f64 {
    1e-4
}
fn default_min_damage() -> f64 {
    1.0
}

impl CombatRules {
    /// Default rules with a different zone table
    pub fn with_zone_table(zone_table: ZoneTable) -> Self {
        CombatRules {
            zone_table,
            ..Self::default()
        }
    }

    /// Check every tunable
    pub fn validate(&self) -> Result<(), CombatError> {
        if !self.base_stat_unit.is_finite() || self.base_stat_unit <= 0.0 {
            return Err(CombatError::content(
                "combat rules",
                format!("base_stat_unit must be positive, got {}", self.base_stat_unit),
            ));
        }
        if !self.stat_sum_tolerance.is_finite() || self.stat_sum_tolerance < 0.0 {
            return Err(CombatError::content(
                "combat rules",
                format!("stat_sum_tolerance must be non-negative, got {}", self.stat_sum_tolerance),
            ));
        }
        if !self.min_damage.is_finite() || self.min_damage < 0.0 {
            return Err(CombatError::content(
                "combat rules",
                format!("min_damage must be non-negative, got {}", self.min_damage),
            ));
        }
        self.zone_table.validate()?;
        self.loot.validate()
    }
}

/// Reward tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootRules {
    /// Gold = floor(gold_per_level × combat_level × gold_multiplier)
    #[serde(default = "default_gold_per_level")]
    pub gold_per_level: f64,
    /// XP = floor(xp_per_level × combat_level × xp_multiplier)
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: f64,
    /// Weight of the "nothing" outcome in the item roll
    #[serde(default = "default_item_no_drop_weight")]
    pub item_no_drop_weight: f64,
    /// Style a material drops with unless the enemy overrides it
    #[serde(default = "default_style_id")]
    pub default_style_id: String,
}

impl Default for LootRules {
    fn default() -> Self {
        LootRules {
            gold_per_level: default_gold_per_level(),
            xp_per_level: default_xp_per_level(),
            item_no_drop_weight: default_item_no_drop_weight(),
            default_style_id: default_style_id(),
        }
    }
}

fn default_gold_per_level() -> f64 {
    10.0
}
fn default_xp_per_level() -> f64 {
    20.0
}
fn default_item_no_drop_weight() -> f64 {
    100.0
}
fn default_style_id() -> String {
    DEFAULT_STYLE_ID.to_string()
}

impl LootRules {
    fn validate(&self) -> Result<(), CombatError> {
        for (label, value) in [
            ("gold_per_level", self.gold_per_level),
            ("xp_per_level", self.xp_per_level),
            ("item_no_drop_weight", self.item_no_drop_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CombatError::content(
                    "loot rules",
                    format!("{label} must be non-negative, got {value}"),
                ));
            }
        }
        if self.default_style_id.is_empty() {
            return Err(CombatError::content("loot rules", "default_style_id is empty"));
        }
        Ok(())
    }
}
