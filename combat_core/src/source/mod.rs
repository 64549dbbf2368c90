//! ContentSource - Lookup interface for enemy, tier and loot table data

mod catalog;

pub use catalog::{CatalogConfig, ContentCatalog};

use crate::error::CombatError;
use crate::loot::LootDrop;
use crate::stats::EnemyType;
use crate::tier::Tier;

/// Anything that can serve authoring data to the combat engine
///
/// The engine only reads through this trait. Where the data lives (SQL,
/// files, memory) is up to the implementor.
pub trait ContentSource: Send + Sync {
    /// Look up an enemy type by id
    fn enemy_type(&self, id: &str) -> Result<&EnemyType, CombatError>;

    /// Look up a tier by number
    fn tier(&self, tier_num: u8) -> Result<&Tier, CombatError>;

    /// Loot table owned by an enemy type
    fn loot_table(&self, enemy_id: &str) -> Result<&[LootDrop], CombatError> {
        Ok(&self.enemy_type(enemy_id)?.loot_table)
    }

    /// Tier an enemy type belongs to
    fn tier_for(&self, enemy: &EnemyType) -> Result<&Tier, CombatError> {
        self.tier(enemy.tier)
            .map_err(|_| CombatError::content(&enemy.id, format!("unknown tier {}", enemy.tier)))
    }
}
