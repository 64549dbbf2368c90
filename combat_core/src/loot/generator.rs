//! Loot generation - Weighted material/item rolls, style inheritance, gold and XP
//!
//! 1. Split the enemy's table into weighted materials, weighted items and guaranteed entries
//! 2. Roll exactly one material from the weighted materials (never empty)
//! 3. Roll at most one item; a "no drop" outcome with its own weight is part of the roll
//! 4. Gold = floor(gold_per_level × level × gold_multiplier), same shape for XP
//!
//! A styled enemy forces its style onto every material it drops.

use super::result::{GuaranteedDrop, ItemDrop, LootResult, MaterialDrop};
use super::table::{LootDrop, LootableType};
use crate::config::LootRules;
use crate::error::CombatError;
use crate::stats::EnemyType;
use crate::tier::Tier;
use rand::Rng;

/// Produce the rewards for beating `enemy`
pub fn generate_loot(
    enemy: &EnemyType,
    combat_level: u32,
    tier: &Tier,
    rules: &LootRules,
    rng: &mut impl Rng,
) -> Result<LootResult, CombatError> {
    if combat_level == 0 {
        return Err(CombatError::input("combat_level", "must be at least 1"));
    }
    if tier.tier_num != enemy.tier {
        return Err(CombatError::input(
            "tier",
            format!("enemy '{}' is tier {}, got tier {}", enemy.id, enemy.tier, tier.tier_num),
        ));
    }
    for drop in &enemy.loot_table {
        drop.validate()
            .map_err(|e| CombatError::content(&enemy.id, e.to_string()))?;
    }

    let materials: Vec<&LootDrop> = enemy
        .loot_table
        .iter()
        .filter(|d| d.is_weighted(LootableType::Material))
        .collect();
    let items: Vec<&LootDrop> = enemy
        .loot_table
        .iter()
        .filter(|d| d.is_weighted(LootableType::ItemType))
        .collect();

    if materials.is_empty() {
        tracing::warn!(enemy_id = %enemy.id, "loot table has no weighted material entries");
        return Err(CombatError::content(
            &enemy.id,
            "loot table has no weighted material entries",
        ));
    }
    let material_entry = pick_weighted(&materials, 0.0, rng).ok_or_else(|| {
        CombatError::content(&enemy.id, "material drop weights sum to zero")
    })?;
    let material = material_drop(enemy, material_entry, rules);

    let item = pick_weighted(&items, rules.item_no_drop_weight, rng).map(|entry| ItemDrop {
        item_type_id: entry.lootable_id.clone(),
    });

    let guaranteed = enemy
        .loot_table
        .iter()
        .filter(|d| d.guaranteed)
        .map(|d| match d.lootable_type {
            LootableType::Material => GuaranteedDrop::Material(material_drop(enemy, d, rules)),
            LootableType::ItemType => GuaranteedDrop::ItemType(ItemDrop {
                item_type_id: d.lootable_id.clone(),
            }),
        })
        .collect();

    let loot = LootResult {
        material,
        item,
        guaranteed,
        gold: gold_reward(combat_level, tier, rules),
        xp: xp_reward(combat_level, tier, rules),
    };

    tracing::debug!(enemy_id = %enemy.id, combat_level, loot = %loot.summary(), "generated loot");
    Ok(loot)
}

/// floor(gold_per_level × combat_level × gold_multiplier)
pub fn gold_reward(combat_level: u32, tier: &Tier, rules: &LootRules) -> u64 {
    scaled_reward(rules.gold_per_level, combat_level, tier.gold_multiplier)
}

/// floor(xp_per_level × combat_level × xp_multiplier)
pub fn xp_reward(combat_level: u32, tier: &Tier, rules: &LootRules) -> u64 {
    scaled_reward(rules.xp_per_level, combat_level, tier.xp_multiplier)
}

fn scaled_reward(per_level: f64, combat_level: u32, multiplier: f64) -> u64 {
    let value = (per_level * f64::from(combat_level) * multiplier).floor();
    if value.is_finite() && value > 0.0 {
        // Saturates at u64::MAX
        value as u64
    } else {
        0
    }
}

fn material_drop(enemy: &EnemyType, entry: &LootDrop, rules: &LootRules) -> MaterialDrop {
    let style_id = enemy
        .style_override(&rules.default_style_id)
        .or(entry.style_id.as_deref())
        .unwrap_or(rules.default_style_id.as_str())
        .to_string();
    MaterialDrop {
        id: entry.lootable_id.clone(),
        style_id,
        quantity: 1,
    }
}

/// Cumulative weighted pick. `none_weight` is the mass of picking nothing.
fn pick_weighted<'a>(
    entries: &[&'a LootDrop],
    none_weight: f64,
    rng: &mut impl Rng,
) -> Option<&'a LootDrop> {
    let entry_weight: f64 = entries.iter().map(|e| e.drop_weight).sum();
    let total = entry_weight + none_weight;
    if entry_weight <= 0.0 || total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen::<f64>() * total;
    let mut last_positive = None;
    for entry in entries {
        if entry.drop_weight <= 0.0 {
            continue;
        }
        if roll < entry.drop_weight {
            return Some(*entry);
        }
        roll -= entry.drop_weight;
        last_positive = Some(*entry);
    }

    // Float drift past the last entry only counts when there is no "nothing" outcome
    if none_weight > 0.0 {
        None
    } else {
        last_positive
    }
}
