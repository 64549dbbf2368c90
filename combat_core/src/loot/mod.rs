//! Loot generation - Rewards for a victorious combat

mod generator;
mod result;
mod table;

pub use generator::{generate_loot, gold_reward, xp_reward};
pub use result::{GuaranteedDrop, ItemDrop, LootResult, MaterialDrop};
pub use table::{LootDrop, LootableType};
