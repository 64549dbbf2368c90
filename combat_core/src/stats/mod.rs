//! Stat resolution - Normalized enemy stats and player gear -> absolute combat stats

mod enemy;
mod player;

pub use enemy::{
    resolve_enemy, resolve_enemy_combat_stat, resolve_enemy_hp, EnemyType, ResolvedEnemy,
    EQUIPMENT_PARITY,
};
pub use player::{EquippedItem, Loadout};

use crate::error::{ensure_non_negative, CombatError};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// The four combat stats every combatant carries
///
/// For an enemy type these are normalized (sum to 1.0). After resolution,
/// and for players, they are absolute values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub atk_power: f64,
    pub atk_accuracy: f64,
    pub def_power: f64,
    pub def_accuracy: f64,
}

impl CombatantStats {
    /// Create a stat set
    pub fn new(atk_power: f64, atk_accuracy: f64, def_power: f64, def_accuracy: f64) -> Self {
        CombatantStats {
            atk_power,
            atk_accuracy,
            def_power,
            def_accuracy,
        }
    }

    /// Sum of all four stats
    pub fn total(&self) -> f64 {
        self.atk_power + self.atk_accuracy + self.def_power + self.def_accuracy
    }

    /// Reject NaN, infinite or negative components
    pub fn validate_non_negative(&self) -> Result<(), CombatError> {
        ensure_non_negative("atk_power", self.atk_power)?;
        ensure_non_negative("atk_accuracy", self.atk_accuracy)?;
        ensure_non_negative("def_power", self.def_power)?;
        ensure_non_negative("def_accuracy", self.def_accuracy)?;
        Ok(())
    }

    /// Check that the four components form a normalized distribution
    ///
    /// Never renormalizes: an off-by-a-bit distribution is an authoring bug.
    pub fn validate_normalized(&self, entity_id: &str, tolerance: f64) -> Result<(), CombatError> {
        self.validate_non_negative()
            .map_err(|e| CombatError::content(entity_id, e.to_string()))?;

        let total = self.total();
        if (total - 1.0).abs() > tolerance {
            return Err(CombatError::content(
                entity_id,
                format!("normalized stats sum to {total}, expected 1.0 (±{tolerance})"),
            ));
        }
        Ok(())
    }
}

impl Add for CombatantStats {
    type Output = CombatantStats;

    fn add(self, rhs: CombatantStats) -> CombatantStats {
        CombatantStats {
            atk_power: self.atk_power + rhs.atk_power,
            atk_accuracy: self.atk_accuracy + rhs.atk_accuracy,
            def_power: self.def_power + rhs.def_power,
            def_accuracy: self.def_accuracy + rhs.def_accuracy,
        }
    }
}

impl Mul<f64> for CombatantStats {
    type Output = CombatantStats;

    fn mul(self, factor: f64) -> CombatantStats {
        CombatantStats {
            atk_power: self.atk_power * factor,
            atk_accuracy: self.atk_accuracy * factor,
            def_power: self.def_power * factor,
            def_accuracy: self.def_accuracy * factor,
        }
    }
}

/// Accuracy fed to the zone model: own accuracy against the opposing accuracy
///
/// Returns `own / (own + opposing)`, which is 0.5 for evenly matched sides
/// and when both are zero.
pub fn accuracy_contest(own: f64, opposing: f64) -> Result<f64, CombatError> {
    let own = ensure_non_negative("own_accuracy", own)?;
    let opposing = ensure_non_negative("opposing_accuracy", opposing)?;
    let total = own + opposing;
    if total <= 0.0 {
        return Ok(0.5);
    }
    Ok(own / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let stats = CombatantStats::new(0.33, 0.17, 0.33, 0.17);
        assert!((stats.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_normalized_within_tolerance() {
        let stats = CombatantStats::new(0.25, 0.25, 0.25, 0.25005);
        assert!(stats.validate_normalized("slime", 1e-4).is_ok());
    }

    #[test]
    fn test_validate_normalized_rejects_off_sum() {
        let stats = CombatantStats::new(0.3, 0.3, 0.3, 0.3);
        let err = stats.validate_normalized("slime", 1e-4).unwrap_err();
        assert!(err.is_content_error());
        assert!(err.to_string().contains("slime"));
    }

    #[test]
    fn test_validate_normalized_rejects_negative_component() {
        let stats = CombatantStats::new(1.2, -0.2, 0.0, 0.0);
        let err = stats.validate_normalized("slime", 1e-4).unwrap_err();
        assert!(err.is_content_error());
    }

    #[test]
    fn test_add_and_scale() {
        let a = CombatantStats::new(1.0, 2.0, 3.0, 4.0);
        let b = CombatantStats::new(0.5, 0.5, 0.5, 0.5);
        let sum = (a + b) * 2.0;
        assert!((sum.atk_power - 3.0).abs() < f64::EPSILON);
        assert!((sum.def_accuracy - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accuracy_contest() {
        assert!((accuracy_contest(50.0, 50.0).unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((accuracy_contest(0.0, 0.0).unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((accuracy_contest(30.0, 10.0).unwrap() - 0.75).abs() < f64::EPSILON);
        assert!((accuracy_contest(0.0, 10.0).unwrap() - 0.0).abs() < f64::EPSILON);
        assert!(accuracy_contest(-1.0, 10.0).is_err());
    }
}
