//! ZoneDistribution - Accuracy -> probability of each hit zone
//!
//! 1. Clamp accuracy `a` to [0, 1]
//! 2. Zone 1 and zone 2 come from their anchor curves
//! 3. The remainder `max(0, 1 − p1 − p2)` is split across zones 3/4/5 with
//!    weights `1 − 0.2a`, `0.12(1 − a)^0.7` and `0.03(1 − a)^2.4`
//! 4. All five are renormalized to sum to exactly 1.0
//!
//! The same cumulative bands serve random sampling (a uniform draw) and
//! player input (a dial position in [0, 1]).

use super::curve::{GREAT_CURVE, PERFECT_CURVE};
use crate::error::CombatError;
use crate::types::Zone;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability of landing in each of the five zones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    pub zone1: f64,
    pub zone2: f64,
    pub zone3: f64,
    pub zone4: f64,
    pub zone5: f64,
}

impl ZoneDistribution {
    /// Build the distribution for an accuracy value
    ///
    /// Finite values outside [0, 1] are clamped. NaN is rejected.
    pub fn from_accuracy(accuracy: f64) -> Result<Self, CombatError> {
        if accuracy.is_nan() {
            return Err(CombatError::input("accuracy", "must be a number, got NaN"));
        }
        let a = accuracy.clamp(0.0, 1.0);

        let p1 = PERFECT_CURVE.eval(a);
        let p2 = GREAT_CURVE.eval(a);
        let remaining = (1.0 - p1 - p2).max(0.0);

        let miss_side = 1.0 - a;
        let w3 = 1.0 - 0.2 * a;
        let w4 = 0.12 * miss_side.powf(0.7);
        let w5 = 0.03 * miss_side.powf(2.4);
        let w_total = w3 + w4 + w5;

        let raw = [
            p1,
            p2,
            remaining * w3 / w_total,
            remaining * w4 / w_total,
            remaining * w5 / w_total,
        ];
        let total: f64 = raw.iter().sum();
        let [zone1, zone2, zone3, zone4, zone5] = raw.map(|p| p / total);

        Ok(ZoneDistribution {
            zone1,
            zone2,
            zone3,
            zone4,
            zone5,
        })
    }

    /// Probabilities ordered zone 1 to zone 5
    pub fn probabilities(&self) -> [f64; 5] {
        [self.zone1, self.zone2, self.zone3, self.zone4, self.zone5]
    }

    /// Probability of a single zone
    pub fn probability(&self, zone: Zone) -> f64 {
        self.probabilities()[zone.slot()]
    }

    /// Sum of all five probabilities
    pub fn total(&self) -> f64 {
        self.probabilities().iter().sum()
    }

    /// Map a dial position in [0, 1] onto the zone bands
    pub fn zone_at(&self, position: f64) -> Result<Zone, CombatError> {
        if !position.is_finite() || !(0.0..=1.0).contains(&position) {
            return Err(CombatError::input(
                "position",
                format!("must lie in [0, 1], got {position}"),
            ));
        }
        Ok(self.locate(position))
    }

    /// Draw a zone at random
    pub fn sample(&self, rng: &mut impl Rng) -> Zone {
        self.locate(rng.gen::<f64>())
    }

    fn locate(&self, position: f64) -> Zone {
        let mut cumulative = 0.0;
        let mut last_reachable = Zone::Perfect;
        for (zone, p) in Zone::ALL.into_iter().zip(self.probabilities()) {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_reachable = zone;
            if position < cumulative {
                return zone;
            }
        }
        // position == 1.0 or float drift past the last band
        last_reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sums_to_one_across_range() {
        for i in 0..=10_000 {
            let a = f64::from(i) / 10_000.0;
            let dist = ZoneDistribution::from_accuracy(a).unwrap();
            assert!((dist.total() - 1.0).abs() < 1e-9, "a = {a}");
            assert!(dist.probabilities().iter().all(|p| *p >= 0.0), "a = {a}");
        }
    }

    #[test]
    fn test_extremes() {
        let high = ZoneDistribution::from_accuracy(1.0).unwrap();
        assert!(high.zone1 > 0.9);
        assert!(high.zone4 + high.zone5 < 0.02);

        let low = ZoneDistribution::from_accuracy(0.0).unwrap();
        assert!(low.zone1 < 0.05);
        assert!((low.zone2 - 0.45).abs() < 1e-9);
        assert!(low.zone2 > low.zone1);
    }

    #[test]
    fn test_poor_and_miss_stay_rare() {
        for i in 0..=100 {
            let a = f64::from(i) / 100.0;
            let dist = ZoneDistribution::from_accuracy(a).unwrap();
            assert!(dist.zone4 + dist.zone5 < 0.15, "a = {a}");
        }
    }

    #[test]
    fn test_anchor_exactness_at_half() {
        let dist = ZoneDistribution::from_accuracy(0.5).unwrap();
        assert!((dist.zone1 - 0.50).abs() < 1e-9);
        assert!((dist.zone2 - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_out_of_range_accuracy() {
        let clamped = ZoneDistribution::from_accuracy(4.0).unwrap();
        let top = ZoneDistribution::from_accuracy(1.0).unwrap();
        assert_eq!(clamped, top);

        let clamped = ZoneDistribution::from_accuracy(-2.0).unwrap();
        let bottom = ZoneDistribution::from_accuracy(0.0).unwrap();
        assert_eq!(clamped, bottom);
    }

    #[test]
    fn test_rejects_nan() {
        assert!(ZoneDistribution::from_accuracy(f64::NAN).is_err());
    }

    #[test]
    fn test_zone_at_bands() {
        let dist = ZoneDistribution::from_accuracy(0.5).unwrap();
        assert_eq!(dist.zone_at(0.0).unwrap(), Zone::Perfect);
        assert_eq!(dist.zone_at(0.49).unwrap(), Zone::Perfect);
        assert_eq!(dist.zone_at(0.51).unwrap(), Zone::Great);
        assert_eq!(dist.zone_at(0.96).unwrap(), Zone::Good);
        assert_eq!(dist.zone_at(1.0).unwrap(), Zone::Miss);
    }

    #[test]
    fn test_zone_at_skips_empty_bands() {
        // At full accuracy zones 4 and 5 carry no mass
        let dist = ZoneDistribution::from_accuracy(1.0).unwrap();
        assert!((dist.zone4 - 0.0).abs() < f64::EPSILON);
        assert!((dist.zone5 - 0.0).abs() < f64::EPSILON);
        let top = dist.zone_at(1.0).unwrap();
        assert!(top != Zone::Poor && top != Zone::Miss);
    }

    #[test]
    fn test_zone_at_rejects_bad_position() {
        let dist = ZoneDistribution::from_accuracy(0.5).unwrap();
        assert!(dist.zone_at(-0.01).is_err());
        assert!(dist.zone_at(1.01).is_err());
        assert!(dist.zone_at(f64::NAN).is_err());
    }

    #[test]
    fn test_sampling_tracks_probabilities() {
        let dist = ZoneDistribution::from_accuracy(0.3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0u32; 5];
        let draws = 50_000;
        for _ in 0..draws {
            counts[dist.sample(&mut rng).slot()] += 1;
        }
        for (count, p) in counts.iter().zip(dist.probabilities()) {
            let observed = f64::from(*count) / f64::from(draws);
            assert!((observed - p).abs() < 0.01, "observed {observed}, expected {p}");
        }
    }

    #[test]
    fn test_serializes_named_zones() {
        let dist = ZoneDistribution::from_accuracy(0.5).unwrap();
        let json = serde_json::to_value(dist).unwrap();
        assert!(json.get("zone1").is_some());
        assert!(json.get("zone5").is_some());
    }
}
