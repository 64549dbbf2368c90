//! LootResult - What a victory pays out

use serde::{Deserialize, Serialize};

/// A dropped material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDrop {
    /// Material id
    pub id: String,
    /// Style the material drops with
    pub style_id: String,
    pub quantity: u32,
}

/// A dropped item type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub item_type_id: String,
}

/// A guaranteed entry that dropped alongside the weighted rolls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "lootable_type", rename_all = "snake_case")]
pub enum GuaranteedDrop {
    Material(MaterialDrop),
    ItemType(ItemDrop),
}

/// Rewards for one victorious combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootResult {
    /// Exactly one material from the weighted roll
    pub material: MaterialDrop,
    /// At most one item from the weighted roll
    pub item: Option<ItemDrop>,
    /// Guaranteed entries, in table order
    #[serde(default)]
    pub guaranteed: Vec<GuaranteedDrop>,
    pub gold: u64,
    pub xp: u64,
}

impl LootResult {
    /// All materials in this result, weighted pick first
    pub fn materials(&self) -> impl Iterator<Item = &MaterialDrop> {
        std::iter::once(&self.material).chain(self.guaranteed.iter().filter_map(|g| match g {
            GuaranteedDrop::Material(m) => Some(m),
            GuaranteedDrop::ItemType(_) => None,
        }))
    }

    /// All items in this result, weighted pick first
    pub fn items(&self) -> impl Iterator<Item = &ItemDrop> {
        self.item.iter().chain(self.guaranteed.iter().filter_map(|g| match g {
            GuaranteedDrop::ItemType(i) => Some(i),
            GuaranteedDrop::Material(_) => None,
        }))
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{}x {} ({})",
            self.material.quantity, self.material.id, self.material.style_id
        )];
        if let Some(ref item) = self.item {
            parts.push(item.item_type_id.clone());
        }
        if !self.guaranteed.is_empty() {
            parts.push(format!("{} guaranteed", self.guaranteed.len()));
        }
        parts.push(format!("{} gold", self.gold));
        parts.push(format!("{} xp", self.xp));
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LootResult {
        LootResult {
            material: MaterialDrop {
                id: "coffee_beans".to_string(),
                style_id: "normal".to_string(),
                quantity: 1,
            },
            item: Some(ItemDrop {
                item_type_id: "umbrella".to_string(),
            }),
            guaranteed: vec![
                GuaranteedDrop::Material(MaterialDrop {
                    id: "feather".to_string(),
                    style_id: "normal".to_string(),
                    quantity: 1,
                }),
                GuaranteedDrop::ItemType(ItemDrop {
                    item_type_id: "hat".to_string(),
                }),
            ],
            gold: 100,
            xp: 200,
        }
    }

    #[test]
    fn test_materials_and_items() {
        let loot = sample();
        let materials: Vec<&str> = loot.materials().map(|m| m.id.as_str()).collect();
        assert_eq!(materials, vec!["coffee_beans", "feather"]);
        let items: Vec<&str> = loot.items().map(|i| i.item_type_id.as_str()).collect();
        assert_eq!(items, vec!["umbrella", "hat"]);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert!(summary.contains("coffee_beans"));
        assert!(summary.contains("100 gold"));
        assert!(summary.contains("2 guaranteed"));
    }

    #[test]
    fn test_guaranteed_serializes_with_type_tag() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["guaranteed"][0]["lootable_type"], "material");
        assert_eq!(json["guaranteed"][1]["lootable_type"], "item_type");
        assert!(json["item"].is_object());
    }
}
