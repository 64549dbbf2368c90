//! Loadout - Player absolute stats from equipped items
//!
//! Each item carries a normalized stat distribution. Its contribution is
//! `component × item_level × rarity_multiplier × base_stat_unit`, summed over
//! all equipped slots. The base stat unit keeps players on the same scale as
//! resolved enemy stats.

use super::CombatantStats;
use crate::error::CombatError;
use crate::types::{EquipmentSlot, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An item equipped in one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    /// Item identifier
    pub item_id: String,
    /// Slot this item occupies
    pub slot: EquipmentSlot,
    /// Item level (>= 1)
    pub level: u32,
    #[serde(default)]
    pub rarity: Rarity,
    /// Per-item stat distribution
    pub stats: CombatantStats,
}

impl EquippedItem {
    /// Absolute contribution of this item
    pub fn contribution(&self, base_stat_unit: f64) -> CombatantStats {
        self.stats * (f64::from(self.level) * self.rarity.stat_multiplier() * base_stat_unit)
    }

    fn validate(&self) -> Result<(), CombatError> {
        if self.level == 0 {
            return Err(CombatError::input(
                "level",
                format!("item '{}' must be at least level 1", self.item_id),
            ));
        }
        self.stats.validate_non_negative()
    }
}

/// The player's equipped items, one per slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    items: HashMap<EquipmentSlot, EquippedItem>,
}

impl Loadout {
    /// Create an empty loadout
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item, returning whatever was in that slot before
    pub fn equip(&mut self, item: EquippedItem) -> Result<Option<EquippedItem>, CombatError> {
        item.validate()?;
        Ok(self.items.insert(item.slot, item))
    }

    /// Remove the item in a slot
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EquippedItem> {
        self.items.remove(&slot)
    }

    /// Item in a slot, if any
    pub fn get(&self, slot: EquipmentSlot) -> Option<&EquippedItem> {
        self.items.get(&slot)
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no slot is filled
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every equipped item's contribution
    pub fn absolute_stats(&self, base_stat_unit: f64) -> CombatantStats {
        self.items
            .values()
            .map(|item| item.contribution(base_stat_unit))
            .fold(CombatantStats::default(), |acc, s| acc + s)
    }

    /// Average equipped item level, rounded, never below 1
    pub fn combat_level(&self) -> u32 {
        if self.items.is_empty() {
            return 1;
        }
        let total: u64 = self.items.values().map(|i| u64::from(i.level)).sum();
        let count = self.items.len() as u64;
        // Round half up in integer math
        let avg = (total * 2 + count) / (count * 2);
        u32::try_from(avg).unwrap_or(u32::MAX).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slot: EquipmentSlot, level: u32, rarity: Rarity, stats: CombatantStats) -> EquippedItem {
        EquippedItem {
            item_id: format!("{slot:?}").to_lowercase(),
            slot,
            level,
            rarity,
            stats,
        }
    }

    #[test]
    fn test_empty_loadout() {
        let loadout = Loadout::new();
        assert!(loadout.is_empty());
        assert_eq!(loadout.combat_level(), 1);
        assert!((loadout.absolute_stats(10.0).total() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contribution_formula() {
        // 0.5 atk × level 4 × rare 1.5 × 10 = 30
        let sword = item(
            EquipmentSlot::Weapon,
            4,
            Rarity::Rare,
            CombatantStats::new(0.5, 0.5, 0.0, 0.0),
        );
        let c = sword.contribution(10.0);
        assert!((c.atk_power - 30.0).abs() < 1e-9);
        assert!((c.def_power - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_loadout_matches_enemy_parity() {
        // Eight common items at level 10, all-in on attack = 8 × 10 × 10
        let mut loadout = Loadout::new();
        for slot in EquipmentSlot::all() {
            loadout
                .equip(item(*slot, 10, Rarity::Common, CombatantStats::new(1.0, 0.0, 0.0, 0.0)))
                .unwrap();
        }
        let stats = loadout.absolute_stats(10.0);
        assert!((stats.atk_power - 800.0).abs() < 1e-9);
        assert_eq!(loadout.combat_level(), 10);
    }

    #[test]
    fn test_equip_replaces_slot() {
        let mut loadout = Loadout::new();
        let first = item(EquipmentSlot::Head, 2, Rarity::Common, CombatantStats::new(0.0, 0.0, 1.0, 0.0));
        let second = item(EquipmentSlot::Head, 3, Rarity::Epic, CombatantStats::new(0.0, 0.0, 1.0, 0.0));
        assert!(loadout.equip(first.clone()).unwrap().is_none());
        assert_eq!(loadout.equip(second).unwrap(), Some(first));
        assert_eq!(loadout.len(), 1);
        assert_eq!(loadout.get(EquipmentSlot::Head).unwrap().level, 3);
    }

    #[test]
    fn test_combat_level_rounds_average() {
        let mut loadout = Loadout::new();
        let stats = CombatantStats::new(0.25, 0.25, 0.25, 0.25);
        loadout.equip(item(EquipmentSlot::Weapon, 3, Rarity::Common, stats)).unwrap();
        loadout.equip(item(EquipmentSlot::Feet, 4, Rarity::Common, stats)).unwrap();
        // 3.5 rounds up
        assert_eq!(loadout.combat_level(), 4);
        loadout.equip(item(EquipmentSlot::Pet, 3, Rarity::Common, stats)).unwrap();
        // 3.33 rounds down
        assert_eq!(loadout.combat_level(), 3);
    }

    #[test]
    fn test_rejects_level_zero_item() {
        let mut loadout = Loadout::new();
        let bad = item(EquipmentSlot::Pet, 0, Rarity::Common, CombatantStats::default());
        assert!(loadout.equip(bad).is_err());
        assert!(loadout.unequip(EquipmentSlot::Pet).is_none());
    }
}
