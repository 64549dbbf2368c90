//! EnemyType - Normalized enemy stat distribution and its resolution to absolute stats
//!
//! Attack and defense scale with the player's combat level:
//!
//! `stat = normalized × 8 × combat_level × difficulty_multiplier × base_stat_unit`
//!
//! The `8` is parity with the player's eight equipment slots: an enemy that
//! puts its whole budget (1.0) into one stat matches a fully-equipped player
//! of the same level in that stat.
//!
//! HP does NOT scale with combat level. It is `base_hp × difficulty_multiplier`
//! at every level, so fights stay the same length as players progress.

use super::CombatantStats;
use crate::config::CombatRules;
use crate::error::{ensure_non_negative, CombatError};
use crate::loot::LootDrop;
use crate::tier::Tier;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};

/// Stat parity factor with a fully-equipped player
pub const EQUIPMENT_PARITY: f64 = EquipmentSlot::COUNT as f64;

/// Authoring-time enemy definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyType {
    /// Unique enemy identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Absolute HP before the tier multiplier
    pub base_hp: f64,
    pub atk_power_normalized: f64,
    pub atk_accuracy_normalized: f64,
    pub def_power_normalized: f64,
    pub def_accuracy_normalized: f64,
    /// Tier number (1..=5)
    pub tier: u8,
    /// Visual style; `None` is unstyled, anything but the default forces styled drops
    #[serde(default)]
    pub style_id: Option<String>,
    /// Flat list of drop entries owned by this enemy
    #[serde(default)]
    pub loot_table: Vec<LootDrop>,
}

impl EnemyType {
    /// The four normalized fields as a stat set
    pub fn normalized_stats(&self) -> CombatantStats {
        CombatantStats::new(
            self.atk_power_normalized,
            self.atk_accuracy_normalized,
            self.def_power_normalized,
            self.def_accuracy_normalized,
        )
    }

    /// Validate authoring data: stat sum, HP and loot weights
    pub fn validate(&self, tolerance: f64) -> Result<(), CombatError> {
        self.normalized_stats().validate_normalized(&self.id, tolerance)?;

        if !self.base_hp.is_finite() || self.base_hp <= 0.0 {
            return Err(CombatError::content(
                &self.id,
                format!("base_hp must be positive, got {}", self.base_hp),
            ));
        }

        for drop in &self.loot_table {
            drop.validate()
                .map_err(|e| CombatError::content(&self.id, e.to_string()))?;
        }

        Ok(())
    }

    /// Style forced onto every material this enemy drops, if any
    pub fn style_override(&self, default_style_id: &str) -> Option<&str> {
        self.style_id
            .as_deref()
            .filter(|style| *style != default_style_id)
    }
}

/// Enemy stats resolved for one combat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEnemy {
    /// Absolute attack/defense stats
    pub stats: CombatantStats,
    /// Starting HP
    pub max_hp: f64,
}

/// Convert one normalized stat into an absolute value
pub fn resolve_enemy_combat_stat(
    normalized_value: f64,
    combat_level: u32,
    tier: &Tier,
    base_stat_unit: f64,
) -> Result<f64, CombatError> {
    let normalized_value = ensure_non_negative("normalized_value", normalized_value)?;
    if combat_level == 0 {
        return Err(CombatError::input("combat_level", "must be at least 1"));
    }
    if !base_stat_unit.is_finite() || base_stat_unit <= 0.0 {
        return Err(CombatError::input(
            "base_stat_unit",
            format!("must be positive, got {base_stat_unit}"),
        ));
    }

    Ok(normalized_value
        * EQUIPMENT_PARITY
        * f64::from(combat_level)
        * tier.difficulty_multiplier
        * base_stat_unit)
}

/// Absolute HP for an enemy. Independent of combat level.
pub fn resolve_enemy_hp(base_hp: f64, tier: &Tier) -> Result<f64, CombatError> {
    let base_hp = ensure_non_negative("base_hp", base_hp)?;
    Ok(base_hp * tier.difficulty_multiplier)
}

/// Validate an enemy and resolve all of its combat stats
pub fn resolve_enemy(
    enemy: &EnemyType,
    tier: &Tier,
    combat_level: u32,
    rules: &CombatRules,
) -> Result<ResolvedEnemy, CombatError> {
    if let Err(err) = enemy.validate(rules.stat_sum_tolerance) {
        tracing::warn!(enemy_id = %enemy.id, error = %err, "rejected enemy content");
        return Err(err);
    }
    if tier.tier_num != enemy.tier {
        return Err(CombatError::input(
            "tier",
            format!("enemy '{}' is tier {}, got tier {}", enemy.id, enemy.tier, tier.tier_num),
        ));
    }

    let unit = rules.base_stat_unit;
    let normalized = enemy.normalized_stats();
    let stats = CombatantStats {
        atk_power: resolve_enemy_combat_stat(normalized.atk_power, combat_level, tier, unit)?,
        atk_accuracy: resolve_enemy_combat_stat(normalized.atk_accuracy, combat_level, tier, unit)?,
        def_power: resolve_enemy_combat_stat(normalized.def_power, combat_level, tier, unit)?,
        def_accuracy: resolve_enemy_combat_stat(normalized.def_accuracy, combat_level, tier, unit)?,
    };
    let max_hp = resolve_enemy_hp(enemy.base_hp, tier)?;

    tracing::debug!(
        enemy_id = %enemy.id,
        tier = tier.tier_num,
        combat_level,
        atk_power = stats.atk_power,
        def_power = stats.def_power,
        max_hp,
        "resolved enemy stats"
    );

    Ok(ResolvedEnemy { stats, max_hp })
}
