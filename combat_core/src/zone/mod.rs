//! Zone model - Where an action lands and what that zone is worth
//!
//! - `curve`: piecewise smoothstep interpolation through anchor points
//! - `ZoneDistribution`: accuracy -> probability per zone, sampling and dial mapping
//! - `ZoneTable`: per-zone damage multiplier and crit odds

mod curve;
mod distribution;
mod table;

pub use curve::{smoothstep, AnchorCurve, GREAT_CURVE, PERFECT_CURVE};
pub use distribution::ZoneDistribution;
pub use table::{ZoneProfile, ZoneTable};
