//! # Reference Tables
//!
//! Static reference data for mix proportioning, built once at first use and
//! shared read-only across all calculations.
//!
//! ## Table Summary
//!
//! | Table                     | Keyed by     | Miss behavior          |
//! |---------------------------|--------------|------------------------|
//! | Durability limits         | grade fck    | Fatal (error)          |
//! | Standard deviation        | grade fck    | Default 5.0            |
//! | Margin factor             | grade fck    | Default 6.5            |
//! | Entrapped air content     | agg size mm  | Default 0.010 (20 mm)  |
//! | Base water (50 mm slump)  | agg size mm  | Fatal (error)          |
//! | Coarse aggregate volume   | zone x size  | Fatal (error)          |
//!
//! The soft defaults are deliberate permissiveness for grades and sizes the
//! standard tabulates no value for; do not tighten them into errors.
//!
//! ## Reference
//!
//! IS 456:2000 Table 5; IS 10262:2019 Tables 1-5.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::materials::FineAggregateZone;

/// Default standard deviation (N/mm2) for grades without a table entry
pub const DEFAULT_STD_DEVIATION: f64 = 5.0;

/// Default margin ("X") factor (N/mm2) for grades without a table entry
pub const DEFAULT_MARGIN_FACTOR: f64 = 6.5;

/// Default entrained air fraction, the 20 mm value
pub const DEFAULT_AIR_CONTENT: f64 = 0.010;

/// Durability limits per IS 456:2000 Table 5 (reinforced concrete)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurabilityLimits {
    /// Minimum cement content (kg/m3)
    pub min_cement_content: f64,
    /// Maximum free water-cement ratio
    pub max_wc_ratio: f64,
}

/// IS 456 Table 5 durability limits, keyed by characteristic strength fck
static DURABILITY_TABLE: Lazy<BTreeMap<u32, DurabilityLimits>> = Lazy::new(|| {
    BTreeMap::from([
        (15, DurabilityLimits { min_cement_content: 300.0, max_wc_ratio: 0.55 }),
        (20, DurabilityLimits { min_cement_content: 300.0, max_wc_ratio: 0.55 }),
        (25, DurabilityLimits { min_cement_content: 300.0, max_wc_ratio: 0.50 }),
        (30, DurabilityLimits { min_cement_content: 320.0, max_wc_ratio: 0.45 }),
        (35, DurabilityLimits { min_cement_content: 340.0, max_wc_ratio: 0.45 }),
        (40, DurabilityLimits { min_cement_content: 360.0, max_wc_ratio: 0.40 }),
    ])
});

/// Look up durability limits for a grade's characteristic strength.
/// Returns None for grades outside {15, 20, 25, 30, 35, 40}.
pub fn durability_limits(fck: u32) -> Option<DurabilityLimits> {
    DURABILITY_TABLE.get(&fck).copied()
}

/// Supported grades, ascending (the durability table keys)
pub fn supported_grades() -> Vec<u32> {
    DURABILITY_TABLE.keys().copied().collect()
}

/// Assumed standard deviation (N/mm2) for target strength, IS 10262 Table 2.
/// Grades without an entry use [`DEFAULT_STD_DEVIATION`].
pub fn std_deviation(fck: u32) -> f64 {
    match fck {
        30 | 35 | 40 => 5.0,
        _ => DEFAULT_STD_DEVIATION,
    }
}

/// Margin ("X") factor (N/mm2) for target strength, IS 10262 Table 1.
/// Grades without an entry use [`DEFAULT_MARGIN_FACTOR`].
pub fn margin_factor(fck: u32) -> f64 {
    match fck {
        30 | 35 | 40 => 6.5,
        _ => DEFAULT_MARGIN_FACTOR,
    }
}

/// Entrapped air as fraction of concrete volume, by nominal maximum
/// aggregate size. Unknown sizes use [`DEFAULT_AIR_CONTENT`] (the 20 mm
/// value); callers that reached this point have already passed the
/// base-water lookup, so the default is never hit on the normal path.
pub fn air_content(max_agg_size_mm: u32) -> f64 {
    match max_agg_size_mm {
        10 => 0.015,
        20 => 0.010,
        40 => 0.008,
        _ => DEFAULT_AIR_CONTENT,
    }
}

/// Base mixing water (kg/m3) for 50 mm slump, IS 10262 Table 4.
/// Returns None for sizes outside {10, 20, 40}; this miss is fatal.
pub fn base_water_content(max_agg_size_mm: u32) -> Option<f64> {
    match max_agg_size_mm {
        10 => Some(208.0),
        20 => Some(186.0),
        40 => Some(165.0),
        _ => None,
    }
}

/// Coarse aggregate volume fraction per unit total aggregate volume, for
/// w/c = 0.5, by fine aggregate zone and nominal maximum size
/// (IS 10262 Table 5). Returns None for sizes outside {10, 20, 40}; this
/// miss is fatal. The zone axis is closed by the enum.
pub fn coarse_agg_volume_fraction(zone: FineAggregateZone, max_agg_size_mm: u32) -> Option<f64> {
    let row = match zone {
        FineAggregateZone::I => [0.48, 0.60, 0.69],
        FineAggregateZone::II => [0.50, 0.62, 0.71],
        FineAggregateZone::III => [0.52, 0.64, 0.72],
        FineAggregateZone::IV => [0.54, 0.66, 0.73],
    };
    match max_agg_size_mm {
        10 => Some(row[0]),
        20 => Some(row[1]),
        40 => Some(row[2]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durability_table_coverage() {
        assert_eq!(supported_grades(), vec![15, 20, 25, 30, 35, 40]);
        let m35 = durability_limits(35).unwrap();
        assert_eq!(m35.min_cement_content, 340.0);
        assert_eq!(m35.max_wc_ratio, 0.45);
        assert!(durability_limits(45).is_none());
    }

    #[test]
    fn test_statistical_defaults() {
        // Tabulated grades
        assert_eq!(std_deviation(35), 5.0);
        assert_eq!(margin_factor(40), 6.5);
        // Off-table grades fall back, never error
        assert_eq!(std_deviation(15), DEFAULT_STD_DEVIATION);
        assert_eq!(margin_factor(55), DEFAULT_MARGIN_FACTOR);
    }

    #[test]
    fn test_air_content_default_is_20mm_value() {
        assert_eq!(air_content(10), 0.015);
        assert_eq!(air_content(40), 0.008);
        assert_eq!(air_content(25), air_content(20));
    }

    #[test]
    fn test_base_water_content() {
        assert_eq!(base_water_content(20), Some(186.0));
        assert_eq!(base_water_content(25), None);
    }

    #[test]
    fn test_coarse_agg_volume_full_grid() {
        for zone in FineAggregateZone::ALL {
            for size in [10, 20, 40] {
                let fraction = coarse_agg_volume_fraction(zone, size).unwrap();
                assert!(fraction > 0.4 && fraction < 0.8);
            }
        }
        assert_eq!(
            coarse_agg_volume_fraction(FineAggregateZone::II, 20),
            Some(0.62)
        );
        assert_eq!(coarse_agg_volume_fraction(FineAggregateZone::I, 25), None);
    }
}
