//! combat_core - Combat resolution engine for Mystica
//!
//! This library provides:
//! - Stat resolution: normalized enemy stats + tier + combat level -> absolute stats
//! - ZoneDistribution: accuracy -> probability of landing in each hit zone
//! - Action resolution: zone + base stat -> final value with crit rolls
//! - CombatSession: turn-by-turn HP bookkeeping until victory or defeat
//! - Loot generation: weighted material/item drops with style inheritance
//!
//! Everything here is a pure computation over caller-supplied inputs.
//! Randomness always comes from an RNG passed in by the caller.

pub mod combat;
pub mod config;
pub mod error;
pub mod loot;
pub mod prelude;
pub mod source;
pub mod stats;
pub mod tier;
pub mod types;
pub mod zone;

// Re-export core types for convenience
pub use combat::{
    resolve_action, resolve_exchange, ActionInput, CombatSession, CombatSimulation, CombatStatus,
    CombatTurnResult, ExchangeResult, PlayerCombatant,
};
pub use config::{default_tiers, CombatRules, ConfigError, LootRules};
pub use error::CombatError;
pub use loot::{generate_loot, LootDrop, LootResult, LootableType};
pub use source::{ContentCatalog, ContentSource};
pub use stats::{
    accuracy_contest, resolve_enemy, resolve_enemy_combat_stat, resolve_enemy_hp, CombatantStats,
    EnemyType, EquippedItem, Loadout, ResolvedEnemy,
};
pub use tier::{Tier, TierTable};
pub use types::{EquipmentSlot, Rarity, Zone};
pub use zone::{ZoneDistribution, ZoneProfile, ZoneTable};
