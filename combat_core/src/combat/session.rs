//! CombatSession - HP bookkeeping and the combat state machine
//!
//! `InProgress -> Victory | Defeat | Retreated | Abandoned`
//!
//! While in progress, each call resolves one attack against a simultaneous
//! defense and removes HP from the defender. The session ends the moment
//! either side reaches 0 HP. Retreat and abandon are player-initiated exits;
//! what they pay out is up to the caller. Loot is only available after a
//! victory, and only once.

use super::action::{pick_zone, resolve_action, resolve_exchange, ActionInput};
use super::result::{ExchangeResult, Side, TurnRecord};
use crate::config::CombatRules;
use crate::error::{ensure_non_negative, CombatError};
use crate::loot::{generate_loot, LootResult};
use crate::source::ContentSource;
use crate::stats::{accuracy_contest, resolve_enemy, CombatantStats, EnemyType, ResolvedEnemy};
use crate::tier::Tier;
use crate::zone::ZoneDistribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStatus {
    InProgress,
    Victory,
    Defeat,
    Retreated,
    Abandoned,
}

impl CombatStatus {
    /// Whether the session has ended
    pub fn is_finished(self) -> bool {
        !matches!(self, CombatStatus::InProgress)
    }
}

/// The player's side of a fight, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerCombatant {
    /// Absolute stats from equipped gear
    pub stats: CombatantStats,
    /// Starting HP
    pub max_hp: f64,
}

/// One fight between a player and an enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatSession {
    enemy: EnemyType,
    tier: Tier,
    combat_level: u32,
    rules: CombatRules,
    player: PlayerCombatant,
    resolved_enemy: ResolvedEnemy,
    player_hp: f64,
    enemy_hp: f64,
    status: CombatStatus,
    turns: Vec<TurnRecord>,
    loot_claimed: bool,
}

impl CombatSession {
    /// Start a fight. Resolves enemy stats and rejects bad content or input.
    pub fn new(
        player: PlayerCombatant,
        enemy: &EnemyType,
        tier: &Tier,
        combat_level: u32,
        rules: &CombatRules,
    ) -> Result<Self, CombatError> {
        rules.validate()?;
        player.stats.validate_non_negative()?;
        let max_hp = ensure_non_negative("player.max_hp", player.max_hp)?;
        if max_hp <= 0.0 {
            return Err(CombatError::input("player.max_hp", "must be positive"));
        }

        let resolved_enemy = resolve_enemy(enemy, tier, combat_level, rules)?;

        tracing::info!(
            enemy_id = %enemy.id,
            tier = tier.tier_num,
            combat_level,
            player_hp = max_hp,
            enemy_hp = resolved_enemy.max_hp,
            "combat started"
        );

        Ok(CombatSession {
            enemy: enemy.clone(),
            tier: tier.clone(),
            combat_level,
            rules: rules.clone(),
            player,
            resolved_enemy,
            player_hp: max_hp,
            enemy_hp: resolved_enemy.max_hp,
            status: CombatStatus::InProgress,
            turns: Vec::new(),
            loot_claimed: false,
        })
    }

    /// Start a fight against an enemy looked up from a content source
    pub fn from_source(
        source: &impl ContentSource,
        enemy_id: &str,
        player: PlayerCombatant,
        combat_level: u32,
        rules: &CombatRules,
    ) -> Result<Self, CombatError> {
        let enemy = source.enemy_type(enemy_id)?;
        let tier = source.tier_for(enemy)?;
        Self::new(player, enemy, tier, combat_level, rules)
    }

    // === Accessors ===

    pub fn status(&self) -> CombatStatus {
        self.status
    }

    pub fn player_hp(&self) -> f64 {
        self.player_hp
    }

    pub fn enemy_hp(&self) -> f64 {
        self.enemy_hp
    }

    /// Resolved enemy stats and starting HP
    pub fn enemy(&self) -> &ResolvedEnemy {
        &self.resolved_enemy
    }

    pub fn player(&self) -> &PlayerCombatant {
        &self.player
    }

    pub fn combat_level(&self) -> u32 {
        self.combat_level
    }

    /// Every exchange so far, in order
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Zone distribution for the player's attacks this fight
    pub fn player_attack_distribution(&self) -> Result<ZoneDistribution, CombatError> {
        let accuracy = accuracy_contest(
            self.player.stats.atk_accuracy,
            self.resolved_enemy.stats.def_accuracy,
        )?;
        ZoneDistribution::from_accuracy(accuracy)
    }

    /// Zone distribution for the player's defenses this fight
    pub fn player_defense_distribution(&self) -> Result<ZoneDistribution, CombatError> {
        let accuracy = accuracy_contest(
            self.player.stats.def_accuracy,
            self.resolved_enemy.stats.atk_accuracy,
        )?;
        ZoneDistribution::from_accuracy(accuracy)
    }

    fn enemy_attack_distribution(&self) -> Result<ZoneDistribution, CombatError> {
        let accuracy = accuracy_contest(
            self.resolved_enemy.stats.atk_accuracy,
            self.player.stats.def_accuracy,
        )?;
        ZoneDistribution::from_accuracy(accuracy)
    }

    fn enemy_defense_distribution(&self) -> Result<ZoneDistribution, CombatError> {
        let accuracy = accuracy_contest(
            self.resolved_enemy.stats.def_accuracy,
            self.player.stats.atk_accuracy,
        )?;
        ZoneDistribution::from_accuracy(accuracy)
    }

    // === Actions ===

    /// Player attacks; the enemy defends with the zone model
    pub fn player_attack(
        &mut self,
        input: ActionInput,
        rng: &mut impl Rng,
    ) -> Result<TurnRecord, CombatError> {
        self.ensure_in_progress("player_attack")?;
        let table = &self.rules.zone_table;

        let attack_zone = pick_zone(input, &self.player_attack_distribution()?, rng)?;
        let attack = resolve_action(self.player.stats.atk_power, attack_zone, table, rng)?;

        let defense_zone = self.enemy_defense_distribution()?.sample(rng);
        let defense = resolve_action(self.resolved_enemy.stats.def_power, defense_zone, table, rng)?;

        let exchange = resolve_exchange(attack, defense, &self.rules);
        self.enemy_hp = (self.enemy_hp - exchange.damage).max(0.0);
        let record = self.record(Side::Player, exchange);
        if self.enemy_hp <= 0.0 {
            self.finish(CombatStatus::Victory);
        }
        Ok(record)
    }

    /// Enemy attacks with the zone model; the player defends with `input`
    pub fn enemy_attack(
        &mut self,
        input: ActionInput,
        rng: &mut impl Rng,
    ) -> Result<TurnRecord, CombatError> {
        self.ensure_in_progress("enemy_attack")?;
        let table = &self.rules.zone_table;

        let attack_zone = self.enemy_attack_distribution()?.sample(rng);
        let attack = resolve_action(self.resolved_enemy.stats.atk_power, attack_zone, table, rng)?;

        let defense_zone = pick_zone(input, &self.player_defense_distribution()?, rng)?;
        let defense = resolve_action(self.player.stats.def_power, defense_zone, table, rng)?;

        let exchange = resolve_exchange(attack, defense, &self.rules);
        self.player_hp = (self.player_hp - exchange.damage).max(0.0);
        let record = self.record(Side::Enemy, exchange);
        if self.player_hp <= 0.0 {
            self.finish(CombatStatus::Defeat);
        }
        Ok(record)
    }

    /// Player leaves the fight early
    pub fn retreat(&mut self) -> Result<CombatStatus, CombatError> {
        self.ensure_in_progress("retreat")?;
        self.finish(CombatStatus::Retreated);
        Ok(self.status)
    }

    /// Player walks away without a result
    pub fn abandon(&mut self) -> Result<CombatStatus, CombatError> {
        self.ensure_in_progress("abandon")?;
        self.finish(CombatStatus::Abandoned);
        Ok(self.status)
    }

    /// Generate this fight's loot. Only after a victory, only once.
    pub fn claim_loot(&mut self, rng: &mut impl Rng) -> Result<LootResult, CombatError> {
        if self.status != CombatStatus::Victory {
            return Err(CombatError::input(
                "claim_loot",
                format!("loot requires victory, session is {:?}", self.status),
            ));
        }
        if self.loot_claimed {
            return Err(CombatError::input("claim_loot", "loot already claimed"));
        }

        let loot = generate_loot(&self.enemy, self.combat_level, &self.tier, &self.rules.loot, rng)?;
        self.loot_claimed = true;
        Ok(loot)
    }

    // === Internals ===

    fn ensure_in_progress(&self, action: &str) -> Result<(), CombatError> {
        if self.status.is_finished() {
            return Err(CombatError::input(
                action,
                format!("session already ended ({:?})", self.status),
            ));
        }
        Ok(())
    }

    fn finish(&mut self, status: CombatStatus) {
        self.status = status;
        tracing::info!(
            enemy_id = %self.enemy.id,
            status = ?status,
            turns = self.turns.len(),
            "combat ended"
        );
    }

    fn record(&mut self, attacker: Side, exchange: ExchangeResult) -> TurnRecord {
        let turn = u32::try_from(self.turns.len()).unwrap_or(u32::MAX).saturating_add(1);
        let record = TurnRecord {
            turn,
            attacker,
            exchange,
            player_hp_after: self.player_hp,
            enemy_hp_after: self.enemy_hp,
        };
        tracing::debug!(enemy_id = %self.enemy.id, "{}", record.summary());
        self.turns.push(record.clone());
        record
    }
}
