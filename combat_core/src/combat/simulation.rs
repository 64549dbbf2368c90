//! Auto-combat simulation utilities

use super::action::ActionInput;
use super::result::Side;
use super::session::{CombatSession, CombatStatus};
use crate::error::CombatError;
use rand::Rng;

/// Run a session with both sides driven by the zone model
#[derive(Debug, Clone, PartialEq)]
pub struct CombatSimulation {
    /// Exchanges resolved
    pub turns: u32,
    pub player_damage_dealt: f64,
    pub enemy_damage_dealt: f64,
    pub player_crits: u32,
    pub enemy_crits: u32,
    /// Final status; still `InProgress` if the turn cap was hit
    pub outcome: CombatStatus,
}

impl CombatSimulation {
    /// Alternate player and enemy attacks until the session ends or `max_turns` exchanges pass
    pub fn run(
        session: &mut CombatSession,
        max_turns: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, CombatError> {
        let mut result = CombatSimulation {
            turns: 0,
            player_damage_dealt: 0.0,
            enemy_damage_dealt: 0.0,
            player_crits: 0,
            enemy_crits: 0,
            outcome: session.status(),
        };

        let mut next = Side::Player;
        while result.turns < max_turns && !session.status().is_finished() {
            let record = match next {
                Side::Player => session.player_attack(ActionInput::Auto, rng)?,
                Side::Enemy => session.enemy_attack(ActionInput::Auto, rng)?,
            };

            result.turns += 1;
            match record.attacker {
                Side::Player => {
                    result.player_damage_dealt += record.exchange.damage;
                    if record.exchange.attack.is_critical {
                        result.player_crits += 1;
                    }
                    next = Side::Enemy;
                }
                Side::Enemy => {
                    result.enemy_damage_dealt += record.exchange.damage;
                    if record.exchange.attack.is_critical {
                        result.enemy_crits += 1;
                    }
                    next = Side::Player;
                }
            }
        }

        result.outcome = session.status();
        tracing::debug!(
            turns = result.turns,
            outcome = ?result.outcome,
            player_damage = result.player_damage_dealt,
            enemy_damage = result.enemy_damage_dealt,
            "simulation finished"
        );
        Ok(result)
    }

    /// Average damage per player attack
    pub fn player_damage_per_attack(&self) -> f64 {
        let attacks = self.turns.div_ceil(2);
        if attacks == 0 {
            return 0.0;
        }
        self.player_damage_dealt / f64::from(attacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::PlayerCombatant;
    use crate::config::CombatRules;
    use crate::loot::LootDrop;
    use crate::stats::{CombatantStats, EnemyType};
    use crate::tier::TierTable;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session(player_power: f64, player_hp: f64) -> CombatSession {
        let enemy = EnemyType {
            id: "training_dummy".to_string(),
            name: String::new(),
            base_hp: 200.0,
            atk_power_normalized: 0.3,
            atk_accuracy_normalized: 0.2,
            def_power_normalized: 0.3,
            def_accuracy_normalized: 0.2,
            tier: 2,
            style_id: None,
            loot_table: vec![LootDrop::material("cloth", 1.0)],
        };
        let player = PlayerCombatant {
            stats: CombatantStats::new(player_power, 40.0, 60.0, 40.0),
            max_hp: player_hp,
        };
        let tiers = TierTable::builtin();
        CombatSession::new(player, &enemy, tiers.get(2).unwrap(), 3, &CombatRules::default()).unwrap()
    }

    #[test]
    fn test_strong_player_wins() {
        let mut s = session(1000.0, 10_000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let sim = CombatSimulation::run(&mut s, 100, &mut rng).unwrap();
        assert_eq!(sim.outcome, CombatStatus::Victory);
        assert!(sim.player_damage_dealt >= 200.0);
        assert!(sim.player_damage_per_attack() > 0.0);
    }

    #[test]
    fn test_weak_player_loses() {
        let mut s = session(0.0, 50.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let sim = CombatSimulation::run(&mut s, 10_000, &mut rng).unwrap();
        assert_eq!(sim.outcome, CombatStatus::Defeat);
        assert!(sim.enemy_damage_dealt >= 50.0);
    }

    #[test]
    fn test_turn_cap_leaves_session_open() {
        let mut s = session(0.0, 1_000_000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let sim = CombatSimulation::run(&mut s, 6, &mut rng).unwrap();
        assert_eq!(sim.turns, 6);
        assert_eq!(sim.outcome, CombatStatus::InProgress);
        assert_eq!(s.turns().len(), 6);
    }

    #[test]
    fn test_same_seed_same_fight() {
        let mut a = session(300.0, 2000.0);
        let mut b = session(300.0, 2000.0);
        let sim_a = CombatSimulation::run(&mut a, 200, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let sim_b = CombatSimulation::run(&mut b, 200, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(sim_a, sim_b);
    }
}
