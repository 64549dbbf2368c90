//! Per-action and per-exchange outcomes

use crate::types::Zone;
use serde::{Deserialize, Serialize};

/// Outcome of one attack or defense action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatTurnResult {
    /// Zone the action landed in
    pub zone: Zone,
    /// Whether the crit roll succeeded
    pub is_critical: bool,
    /// Crit multiplier (1.0 when not critical)
    pub crit_multiplier: f64,
    /// Multiplier from the zone table
    pub zone_multiplier: f64,
    /// Stat the action was based on
    pub base_value: f64,
    /// base_value × zone_multiplier × crit_multiplier
    pub final_value: f64,
}

impl CombatTurnResult {
    /// Crit bonus on top of the base (crit_multiplier − 1.0)
    pub fn crit_bonus(&self) -> f64 {
        self.crit_multiplier - 1.0
    }

    /// Short description, e.g. "Perfect CRIT x1.42 -> 318"
    pub fn summary(&self) -> String {
        if self.is_critical {
            format!(
                "{} CRIT x{:.2} -> {:.0}",
                self.zone.name(),
                self.crit_multiplier,
                self.final_value
            )
        } else {
            format!("{} -> {:.0}", self.zone.name(), self.final_value)
        }
    }
}

/// An attack resolved against a simultaneous defense
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub attack: CombatTurnResult,
    pub defense: CombatTurnResult,
    /// HP removed from the defender
    pub damage: f64,
}

impl ExchangeResult {
    /// Whether the damage floor kicked in
    pub fn was_floored(&self) -> bool {
        self.attack.final_value - self.defense.final_value < self.damage
    }
}

/// Which combatant acted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// One entry in a session's turn log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number
    pub turn: u32,
    /// Who attacked this turn
    pub attacker: Side,
    pub exchange: ExchangeResult,
    pub player_hp_after: f64,
    pub enemy_hp_after: f64,
}

impl TurnRecord {
    /// One-line log summary
    pub fn summary(&self) -> String {
        let who = match self.attacker {
            Side::Player => "Player",
            Side::Enemy => "Enemy",
        };
        format!(
            "Turn {}: {} attacks [{}] vs defense [{}] for {:.0} damage",
            self.turn,
            who,
            self.exchange.attack.summary(),
            self.exchange.defense.summary(),
            self.exchange.damage
        )
    }
}
