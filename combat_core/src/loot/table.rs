//! Loot table entries

use crate::error::{ensure_non_negative, CombatError};
use serde::{Deserialize, Serialize};

/// What a loot entry drops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootableType {
    Material,
    ItemType,
}

/// One entry in an enemy's loot table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub lootable_type: LootableType,
    /// Material id or item type id
    pub lootable_id: String,
    /// Relative mass in the weighted roll
    #[serde(default)]
    pub drop_weight: f64,
    /// Always drops, outside the weighted roll
    #[serde(default)]
    pub guaranteed: bool,
    /// The material's own style (materials only)
    #[serde(default)]
    pub style_id: Option<String>,
}

impl LootDrop {
    /// A weighted material entry
    pub fn material(id: &str, drop_weight: f64) -> Self {
        LootDrop {
            lootable_type: LootableType::Material,
            lootable_id: id.to_string(),
            drop_weight,
            guaranteed: false,
            style_id: None,
        }
    }

    /// A weighted item type entry
    pub fn item_type(id: &str, drop_weight: f64) -> Self {
        LootDrop {
            lootable_type: LootableType::ItemType,
            lootable_id: id.to_string(),
            drop_weight,
            guaranteed: false,
            style_id: None,
        }
    }

    /// Mark this entry as guaranteed
    pub fn guaranteed(mut self) -> Self {
        self.guaranteed = true;
        self
    }

    /// Give a material its own default style
    pub fn with_style(mut self, style_id: &str) -> Self {
        self.style_id = Some(style_id.to_string());
        self
    }

    /// Reject empty ids and bad weights
    pub fn validate(&self) -> Result<(), CombatError> {
        if self.lootable_id.is_empty() {
            return Err(CombatError::input("lootable_id", "must not be empty"));
        }
        ensure_non_negative("drop_weight", self.drop_weight)?;
        Ok(())
    }

    /// Whether this entry takes part in the weighted roll of its type
    pub(crate) fn is_weighted(&self, lootable_type: LootableType) -> bool {
        self.lootable_type == lootable_type && !self.guaranteed
    }
}
