//! Action resolution - Zone + base stat -> final value, with crit rolls
//!
//! Per action:
//! 1. Pick a zone (zone model for automated actors, dial input for players)
//! 2. Roll against the zone's crit chance
//! 3. On a crit, draw the multiplier uniformly in [1.0, crit_multiplier_max]
//! 4. final = base × zone multiplier × crit multiplier
//!
//! Attack and defense are resolved the same way. An exchange subtracts the
//! defense value from the attack value and floors the result at `min_damage`.

use super::result::{CombatTurnResult, ExchangeResult};
use crate::config::CombatRules;
use crate::error::{ensure_non_negative, CombatError};
use crate::types::Zone;
use crate::zone::{ZoneDistribution, ZoneProfile, ZoneTable};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How an actor chooses where its action lands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ActionInput {
    /// Sample the zone model (enemies, auto-battle)
    Auto,
    /// Real-time dial position in [0, 1]
    Dial(f64),
    /// A zone already decided by the caller (1..=5)
    ZoneIndex(u8),
}

/// Turn an input into a zone using the actor's distribution
pub fn pick_zone(
    input: ActionInput,
    distribution: &ZoneDistribution,
    rng: &mut impl Rng,
) -> Result<Zone, CombatError> {
    match input {
        ActionInput::Auto => Ok(distribution.sample(rng)),
        ActionInput::Dial(position) => distribution.zone_at(position),
        ActionInput::ZoneIndex(index) => Zone::from_index(index),
    }
}

/// Roll the crit for a zone: (is_critical, multiplier)
fn roll_crit(profile: &ZoneProfile, rng: &mut impl Rng) -> (bool, f64) {
    if profile.crit_chance <= 0.0 || rng.gen::<f64>() >= profile.crit_chance {
        return (false, 1.0);
    }
    let multiplier = if profile.crit_multiplier_max > 1.0 {
        rng.gen_range(1.0..=profile.crit_multiplier_max)
    } else {
        1.0
    };
    (true, multiplier)
}

/// Resolve one action that landed in `zone`
pub fn resolve_action(
    base_stat: f64,
    zone: Zone,
    table: &ZoneTable,
    rng: &mut impl Rng,
) -> Result<CombatTurnResult, CombatError> {
    let base_value = ensure_non_negative("base_stat", base_stat)?;
    let profile = table.profile(zone);
    let (is_critical, crit_multiplier) = roll_crit(profile, rng);

    Ok(CombatTurnResult {
        zone,
        is_critical,
        crit_multiplier,
        zone_multiplier: profile.multiplier,
        base_value,
        final_value: base_value * profile.multiplier * crit_multiplier,
    })
}

/// Resolve an action from a 1-based zone index
pub fn resolve_zone_index(
    base_stat: f64,
    zone_index: u8,
    table: &ZoneTable,
    rng: &mut impl Rng,
) -> Result<CombatTurnResult, CombatError> {
    resolve_action(base_stat, Zone::from_index(zone_index)?, table, rng)
}

/// Combine an attack with the defender's simultaneous defense
pub fn resolve_exchange(
    attack: CombatTurnResult,
    defense: CombatTurnResult,
    rules: &CombatRules,
) -> ExchangeResult {
    let damage = (attack.final_value - defense.final_value).max(rules.min_damage);
    ExchangeResult {
        attack,
        defense,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_perfect_always_crits_within_bounds() {
        let table = ZoneTable::enemy_stat();
        let mut rng = rng();
        for _ in 0..1000 {
            let result = resolve_action(100.0, Zone::Perfect, &table, &mut rng).unwrap();
            assert!(result.is_critical);
            assert!(result.crit_multiplier >= 1.0 && result.crit_multiplier <= 2.0);
            assert!(result.crit_bonus() >= 0.0 && result.crit_bonus() <= 2.0);
            assert!(result.final_value >= 150.0 && result.final_value <= 300.0);
        }
    }

    #[test]
    fn test_miss_never_crits() {
        let table = ZoneTable::enemy_stat();
        let mut rng = rng();
        for _ in 0..1000 {
            let result = resolve_action(100.0, Zone::Miss, &table, &mut rng).unwrap();
            assert!(!result.is_critical);
            assert!((result.crit_multiplier - 1.0).abs() < f64::EPSILON);
            assert!((result.final_value - 50.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_crit_rate_tracks_table() {
        let table = ZoneTable::enemy_stat();
        let mut rng = rng();
        let rolls = 20_000;
        let crits = (0..rolls)
            .filter(|_| {
                resolve_action(10.0, Zone::Good, &table, &mut rng)
                    .unwrap()
                    .is_critical
            })
            .count();
        let rate = crits as f64 / f64::from(rolls);
        assert!((rate - 0.5).abs() < 0.02, "crit rate {rate}");
    }

    #[test]
    fn test_crit_multiplier_respects_zone_max() {
        let table = ZoneTable::player_attack();
        let mut rng = rng();
        for _ in 0..2000 {
            let result = resolve_action(10.0, Zone::Poor, &table, &mut rng).unwrap();
            assert!(result.crit_multiplier <= 1.2);
            assert!(result.crit_multiplier >= 1.0);
        }
    }

    #[test]
    fn test_final_value_formula() {
        let table = ZoneTable::enemy_stat();
        let mut rng = rng();
        let result = resolve_action(264.0, Zone::Perfect, &table, &mut rng).unwrap();
        let expected = 264.0 * 1.5 * result.crit_multiplier;
        assert!((result.final_value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_base() {
        let table = ZoneTable::enemy_stat();
        assert!(resolve_action(-1.0, Zone::Great, &table, &mut rng()).is_err());
    }

    #[test]
    fn test_zone_index_bounds() {
        let table = ZoneTable::enemy_stat();
        assert!(resolve_zone_index(10.0, 3, &table, &mut rng()).is_ok());
        assert!(resolve_zone_index(10.0, 0, &table, &mut rng()).is_err());
        assert!(resolve_zone_index(10.0, 6, &table, &mut rng()).is_err());
    }

    #[test]
    fn test_exchange_floors_damage() {
        let table = ZoneTable::enemy_stat();
        let rules = CombatRules::default();
        let mut rng = rng();
        let attack = resolve_action(10.0, Zone::Miss, &table, &mut rng).unwrap();
        let defense = resolve_action(500.0, Zone::Miss, &table, &mut rng).unwrap();
        let exchange = resolve_exchange(attack, defense, &rules);
        assert!((exchange.damage - 1.0).abs() < f64::EPSILON);
        assert!(exchange.was_floored());
    }

    #[test]
    fn test_exchange_subtracts_defense() {
        let table = ZoneTable::enemy_stat();
        let rules = CombatRules::default();
        let mut rng = rng();
        let attack = resolve_action(200.0, Zone::Miss, &table, &mut rng).unwrap();
        let defense = resolve_action(100.0, Zone::Miss, &table, &mut rng).unwrap();
        // 200 × 0.5 − 100 × 0.5
        let exchange = resolve_exchange(attack, defense, &rules);
        assert!((exchange.damage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pick_zone_inputs() {
        let dist = ZoneDistribution::from_accuracy(0.5).unwrap();
        let mut rng = rng();
        assert_eq!(pick_zone(ActionInput::Dial(0.1), &dist, &mut rng).unwrap(), Zone::Perfect);
        assert_eq!(pick_zone(ActionInput::ZoneIndex(4), &dist, &mut rng).unwrap(), Zone::Poor);
        assert!(pick_zone(ActionInput::Dial(1.5), &dist, &mut rng).is_err());
        assert!(pick_zone(ActionInput::Auto, &dist, &mut rng).is_ok());
    }
}
