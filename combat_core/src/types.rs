//! Core types shared across the combat engine

use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// Equipment slot for player gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Offhand,
    Head,
    Armor,
    Feet,
    Accessory1,
    Accessory2,
    Pet,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Offhand,
            EquipmentSlot::Head,
            EquipmentSlot::Armor,
            EquipmentSlot::Feet,
            EquipmentSlot::Accessory1,
            EquipmentSlot::Accessory2,
            EquipmentSlot::Pet,
        ]
    }

    /// Number of slots a fully-equipped player fills
    pub const COUNT: usize = 8;
}

/// Item rarity, scales an item's stat contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Stat multiplier applied to every component of an item of this rarity
    pub fn stat_multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.25,
            Rarity::Rare => 1.5,
            Rarity::Epic => 1.75,
            Rarity::Legendary => 2.0,
        }
    }
}

/// One of the five outcome buckets an action resolves into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Perfect,
    Great,
    Good,
    Poor,
    Miss,
}

impl Zone {
    /// All zones, ordered from zone 1 to zone 5
    pub const ALL: [Zone; 5] = [Zone::Perfect, Zone::Great, Zone::Good, Zone::Poor, Zone::Miss];

    /// 1-based zone number
    pub fn index(self) -> u8 {
        match self {
            Zone::Perfect => 1,
            Zone::Great => 2,
            Zone::Good => 3,
            Zone::Poor => 4,
            Zone::Miss => 5,
        }
    }

    /// Look up a zone from its 1-based number
    pub fn from_index(index: u8) -> Result<Zone, CombatError> {
        match index {
            1 => Ok(Zone::Perfect),
            2 => Ok(Zone::Great),
            3 => Ok(Zone::Good),
            4 => Ok(Zone::Poor),
            5 => Ok(Zone::Miss),
            other => Err(CombatError::input("zone", format!("expected 1..=5, got {other}"))),
        }
    }

    /// Position in zone-ordered arrays
    pub(crate) fn slot(self) -> usize {
        usize::from(self.index() - 1)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Zone::Perfect => "Perfect",
            Zone::Great => "Great",
            Zone::Good => "Good",
            Zone::Poor => "Poor",
            Zone::Miss => "Miss",
        }
    }
}
