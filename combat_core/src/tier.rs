//! Tier - Difficulty brackets applied multiplicatively to enemy stats and rewards

use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// A difficulty bracket (1..=5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Tier number, 1 (weakest) to 5 (boss)
    pub tier_num: u8,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Scales enemy attack, defense and HP
    pub difficulty_multiplier: f64,
    /// Scales gold rewards
    pub gold_multiplier: f64,
    /// Scales XP rewards
    pub xp_multiplier: f64,
}

impl Tier {
    /// Create a tier entry
    pub fn new(
        tier_num: u8,
        name: &str,
        difficulty_multiplier: f64,
        gold_multiplier: f64,
        xp_multiplier: f64,
    ) -> Self {
        Tier {
            tier_num,
            name: name.to_string(),
            difficulty_multiplier,
            gold_multiplier,
            xp_multiplier,
        }
    }

    fn entity_id(&self) -> String {
        format!("tier {}", self.tier_num)
    }
}

/// Fixed lookup table of the five tiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Number of tiers every table must define
    pub const TIER_COUNT: u8 = 5;

    /// Build a table, validating it first
    pub fn new(mut tiers: Vec<Tier>) -> Result<Self, CombatError> {
        tiers.sort_by_key(|t| t.tier_num);
        let table = TierTable { tiers };
        table.validate()?;
        Ok(table)
    }

    /// The built-in tier table
    pub fn builtin() -> Self {
        TierTable {
            tiers: vec![
                Tier::new(1, "Minion", 0.7, 0.5, 0.5),
                Tier::new(2, "Normal", 1.0, 1.0, 1.0),
                Tier::new(3, "Elite", 1.3, 1.5, 1.5),
                Tier::new(4, "Champion", 1.6, 2.0, 2.0),
                Tier::new(5, "Boss", 2.0, 2.5, 2.5),
            ],
        }
    }

    /// Look up a tier by number
    pub fn get(&self, tier_num: u8) -> Result<&Tier, CombatError> {
        self.tiers
            .iter()
            .find(|t| t.tier_num == tier_num)
            .ok_or_else(|| CombatError::content(format!("tier {tier_num}"), "no such tier in table"))
    }

    /// All tiers, ordered by tier number
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Check the table: tiers 1..=5 exactly, positive multipliers, non-decreasing by tier
    pub fn validate(&self) -> Result<(), CombatError> {
        let numbers: Vec<u8> = self.tiers.iter().map(|t| t.tier_num).collect();
        let expected: Vec<u8> = (1..=Self::TIER_COUNT).collect();
        if numbers != expected {
            return Err(CombatError::content(
                "tier table",
                format!("expected tiers {expected:?}, found {numbers:?}"),
            ));
        }

        for tier in &self.tiers {
            for (label, value) in [
                ("difficulty_multiplier", tier.difficulty_multiplier),
                ("gold_multiplier", tier.gold_multiplier),
                ("xp_multiplier", tier.xp_multiplier),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(CombatError::content(
                        tier.entity_id(),
                        format!("{label} must be positive, got {value}"),
                    ));
                }
            }
        }

        for pair in self.tiers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.difficulty_multiplier < lower.difficulty_multiplier
                || upper.gold_multiplier < lower.gold_multiplier
                || upper.xp_multiplier < lower.xp_multiplier
            {
                return Err(CombatError::content(
                    upper.entity_id(),
                    format!("multipliers must not decrease from tier {}", lower.tier_num),
                ));
            }
        }

        Ok(())
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = TierTable::builtin();
        assert!(table.validate().is_ok());
        assert_eq!(table.tiers().len(), 5);
    }

    #[test]
    fn test_builtin_difficulty_range() {
        let table = TierTable::builtin();
        assert!((table.get(1).unwrap().difficulty_multiplier - 0.7).abs() < f64::EPSILON);
        assert!((table.get(5).unwrap().difficulty_multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_tier_is_content_error() {
        let table = TierTable::builtin();
        let err = table.get(9).unwrap_err();
        assert!(err.is_content_error());
        assert!(err.to_string().contains("tier 9"));
    }

    #[test]
    fn test_new_sorts_tiers() {
        let mut tiers = TierTable::builtin().tiers().to_vec();
        tiers.reverse();
        let table = TierTable::new(tiers).unwrap();
        assert_eq!(table.tiers()[0].tier_num, 1);
    }

    #[test]
    fn test_rejects_decreasing_multiplier() {
        let mut tiers = TierTable::builtin().tiers().to_vec();
        tiers[3].gold_multiplier = 0.1;
        assert!(TierTable::new(tiers).is_err());
    }

    #[test]
    fn test_rejects_missing_tier() {
        let mut tiers = TierTable::builtin().tiers().to_vec();
        tiers.pop();
        assert!(TierTable::new(tiers).is_err());
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut tiers = TierTable::builtin().tiers().to_vec();
        tiers[0].xp_multiplier = 0.0;
        assert!(TierTable::new(tiers).is_err());
    }
}
