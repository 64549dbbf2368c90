//! ZoneTable - Damage multiplier and crit odds for each zone
//!
//! Two tables are on record for this game. They disagree on zones 2-4:
//!
//! | Zone    | enemy_stat            | player_attack          |
//! |---------|-----------------------|------------------------|
//! | Perfect | 1.5×, 100%, up to 2.0 | 1.5×, 100%, up to 2.0  |
//! | Great   | 1.0×, 75%, up to 1.5  | 1.25×, 30%, up to 1.7  |
//! | Good    | 0.75×, 50%, up to 1.25| 0.75×, 20%, up to 1.5  |
//! | Poor    | 0.5×, 25%, up to 1.1  | 0.5×, 10%, up to 1.2   |
//! | Miss    | 0.5×, never crits     | 0.5×, never crits      |
//!
//! A session uses exactly one table for every actor. `enemy_stat` is the default.

use crate::error::CombatError;
use crate::types::Zone;
use serde::{Deserialize, Serialize};

/// What landing in one zone is worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneProfile {
    /// Multiplier applied to the base stat
    pub multiplier: f64,
    /// Chance to crit (0.0 to 1.0)
    pub crit_chance: f64,
    /// Upper bound of the crit multiplier; crits roll uniformly in [1.0, max]
    pub crit_multiplier_max: f64,
}

impl ZoneProfile {
    /// Create a zone profile
    pub const fn new(multiplier: f64, crit_chance: f64, crit_multiplier_max: f64) -> Self {
        ZoneProfile {
            multiplier,
            crit_chance,
            crit_multiplier_max,
        }
    }

    /// Largest crit bonus on top of the base (multiplier − 1.0)
    pub fn max_crit_bonus(&self) -> f64 {
        self.crit_multiplier_max - 1.0
    }
}

/// Profiles for all five zones, zone 1 first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable {
    pub zones: [ZoneProfile; 5],
}

impl ZoneTable {
    /// Table from the enemy stat requirements (the default)
    pub fn enemy_stat() -> Self {
        ZoneTable {
            zones: [
                ZoneProfile::new(1.5, 1.0, 2.0),
                ZoneProfile::new(1.0, 0.75, 1.5),
                ZoneProfile::new(0.75, 0.5, 1.25),
                ZoneProfile::new(0.5, 0.25, 1.1),
                ZoneProfile::new(0.5, 0.0, 1.0),
            ],
        }
    }

    /// Table from the player attack requirements
    pub fn player_attack() -> Self {
        ZoneTable {
            zones: [
                ZoneProfile::new(1.5, 1.0, 2.0),
                ZoneProfile::new(1.25, 0.30, 1.7),
                ZoneProfile::new(0.75, 0.20, 1.5),
                ZoneProfile::new(0.5, 0.10, 1.2),
                ZoneProfile::new(0.5, 0.0, 1.0),
            ],
        }
    }

    /// Profile for a zone
    pub fn profile(&self, zone: Zone) -> &ZoneProfile {
        &self.zones[zone.slot()]
    }

    /// Check every profile and the miss rule
    pub fn validate(&self) -> Result<(), CombatError> {
        for zone in Zone::ALL {
            let profile = self.profile(zone);
            let id = format!("zone table ({})", zone.name());
            if !profile.multiplier.is_finite() || profile.multiplier < 0.0 {
                return Err(CombatError::content(
                    id,
                    format!("multiplier must be non-negative, got {}", profile.multiplier),
                ));
            }
            if !(0.0..=1.0).contains(&profile.crit_chance) {
                return Err(CombatError::content(
                    id,
                    format!("crit_chance must lie in [0, 1], got {}", profile.crit_chance),
                ));
            }
            if !profile.crit_multiplier_max.is_finite() || profile.crit_multiplier_max < 1.0 {
                return Err(CombatError::content(
                    id,
                    format!("crit_multiplier_max must be >= 1.0, got {}", profile.crit_multiplier_max),
                ));
            }
        }

        if self.profile(Zone::Miss).crit_chance > 0.0 {
            return Err(CombatError::content("zone table (Miss)", "a miss can never crit"));
        }
        Ok(())
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::enemy_stat()
    }
}
