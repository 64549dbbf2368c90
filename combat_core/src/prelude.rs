//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::error::CombatError;
pub use crate::types::{EquipmentSlot, Rarity, Zone};

// Stats
pub use crate::stats::{CombatantStats, EnemyType, EquippedItem, Loadout, ResolvedEnemy};
pub use crate::tier::{Tier, TierTable};

// Zones
pub use crate::zone::{ZoneDistribution, ZoneTable};

// Combat
pub use crate::combat::{
    ActionInput, CombatSession, CombatSimulation, CombatStatus, CombatTurnResult, ExchangeResult,
    PlayerCombatant, Side,
};

// Loot
pub use crate::loot::{LootDrop, LootResult, LootableType};

// Content and config
pub use crate::config::{CombatRules, LootRules};
pub use crate::source::{ContentCatalog, ContentSource};
