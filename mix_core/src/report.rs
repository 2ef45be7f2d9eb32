//! # Mix Design Report
//!
//! The nested read-only report returned by [`crate::design::calculate`].
//! Serde field names are the normative worksheet headings ("Target
//! Strength", "Mix (SSD Condition)", ...), so the JSON form is exactly the
//! nested key-value report consumers of the worksheet expect. All values are
//! already rounded to their reporting precision.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "Target Strength": 43.25,
//!   "Water-Cement Ratio": { "Adopted": 0.4, "Check": "OK", ... },
//!   "Water Content": { "Final (Ceiling)": 176.0, ... },
//!   "Cement Content": { "Calculated": 440, ... },
//!   "Volumes": { "Cement": 0.15172, ... },
//!   "Mix (SSD Condition)": { "Cement": 440.0, ... },
//!   "Mix (Field Condition)": { "Water": 188.14, ... },
//!   "Batching Ratios and Volumes": { "Weight Batching": { ... }, ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Advisory check outcome; never fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Adopted value satisfies the durability/strength limit
    #[serde(rename = "OK")]
    Ok,
    /// Adopted value violates the limit; the design still computes
    #[serde(rename = "NOT OK")]
    NotOk,
}

impl CheckStatus {
    /// Build from a predicate: true means the limit is satisfied
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            CheckStatus::Ok
        } else {
            CheckStatus::NotOk
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::NotOk => write!(f, "NOT OK"),
        }
    }
}

/// Water-cement ratio audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterCementRatioReport {
    /// The ratio required for target strength (the adopted value, echoed)
    #[serde(rename = "Required for Target Strength")]
    pub required_for_target_strength: f64,

    /// Maximum free w/c ratio permitted for durability (IS 456 Table 5)
    #[serde(rename = "Maximum for Durability")]
    pub maximum_for_durability: f64,

    /// The adopted free w/c ratio
    #[serde(rename = "Adopted")]
    pub adopted: f64,

    /// OK iff adopted <= durability maximum
    #[serde(rename = "Check")]
    pub check: CheckStatus,
}

/// Mixing water, stage by stage (kg/m3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterContentReport {
    /// Table value for 50 mm slump
    #[serde(rename = "Base (50mm slump)")]
    pub base_50mm_slump: f64,

    /// After the 3%-per-25mm slump adjustment
    #[serde(rename = "Adjusted for Slump")]
    pub adjusted_for_slump: f64,

    /// After the superplasticizer reduction (unchanged if none)
    #[serde(rename = "After Superplasticizer")]
    pub after_superplasticizer: f64,

    /// Rounded up to the next whole kg; feeds the cement content
    #[serde(rename = "Final (Ceiling)")]
    pub final_ceiling: f64,

    /// Water to actually add at the mixer once aggregate moisture and
    /// absorption corrections are applied
    #[serde(rename = "To Be Added (after aggregate corrections)")]
    pub to_be_added: f64,
}

/// Cement content audit (kg/m3)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CementContentReport {
    /// water_final / adopted w/c, rounded to the nearest kg
    #[serde(rename = "Calculated")]
    pub calculated: i64,

    /// Minimum required for durability (IS 456 Table 5), whole kg as the
    /// worksheet tabulates it
    #[serde(rename = "Minimum Required")]
    pub minimum_required: i64,

    /// OK iff calculated >= minimum
    #[serde(rename = "Check")]
    pub check: CheckStatus,
}

/// Absolute volumes, m3 per m3 of concrete (sum is 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumesReport {
    #[serde(rename = "Cement")]
    pub cement: f64,
    #[serde(rename = "Water")]
    pub water: f64,
    #[serde(rename = "Air")]
    pub air: f64,
    #[serde(rename = "Admixture")]
    pub admixture: f64,
    #[serde(rename = "Coarse Aggregate")]
    pub coarse_aggregate: f64,
    #[serde(rename = "Fine Aggregate")]
    pub fine_aggregate: f64,
}

/// Batch masses per m3 of concrete (kg/m3), SSD or field condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixQuantitiesReport {
    #[serde(rename = "Cement")]
    pub cement: f64,
    #[serde(rename = "Water")]
    pub water: f64,
    #[serde(rename = "Fine Aggregate")]
    pub fine_aggregate: f64,
    #[serde(rename = "Coarse Aggregate")]
    pub coarse_aggregate: f64,
    #[serde(rename = "Admixture")]
    pub admixture: f64,
}

/// One batching row, everything relative to cement = 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchingRow {
    #[serde(rename = "water")]
    pub water: f64,
    /// Always 1; the worksheet emits it as a bare integer
    #[serde(rename = "cement")]
    pub cement: i64,
    #[serde(rename = "sand")]
    pub sand: f64,
    #[serde(rename = "CA20")]
    pub ca20: f64,
    #[serde(rename = "CA10")]
    pub ca10: f64,
    #[serde(rename = "remarks")]
    pub remarks: String,
}

/// Apparent (bulk density) volumes of the batched materials, m3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialVolumesReport {
    #[serde(rename = "Cement")]
    pub cement: f64,
    #[serde(rename = "Fine Aggregate")]
    pub fine_aggregate: f64,
    #[serde(rename = "CA20")]
    pub ca20: f64,
    #[serde(rename = "CA10")]
    pub ca10: f64,
}

/// How the coarse aggregate splits between 20 mm and 10 mm stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaSplitReport {
    #[serde(rename = "CA20 Fraction")]
    pub ca20_fraction: f64,
    #[serde(rename = "CA10 Fraction")]
    pub ca10_fraction: f64,
    #[serde(rename = "CA20 Weight (kg)")]
    pub ca20_weight_kg: f64,
    #[serde(rename = "CA10 Weight (kg)")]
    pub ca10_weight_kg: f64,
}

/// The input bulk densities, echoed for the batching sheet (kg/l)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDensitiesReport {
    #[serde(rename = "Cement")]
    pub cement: f64,
    #[serde(rename = "Fine Aggregate")]
    pub fine_aggregate: f64,
    #[serde(rename = "CA20")]
    pub ca20: f64,
    #[serde(rename = "CA10")]
    pub ca10: f64,
}

/// Weight and volume batching, with supporting quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchingReport {
    #[serde(rename = "Weight Batching")]
    pub weight_batching: BatchingRow,
    #[serde(rename = "Volume Batching")]
    pub volume_batching: BatchingRow,
    #[serde(rename = "Volume of Materials (m3)")]
    pub volume_of_materials: MaterialVolumesReport,
    #[serde(rename = "CA Split")]
    pub ca_split: CaSplitReport,
    #[serde(rename = "Bulk Densities Used (kg/l)")]
    pub bulk_densities_used: BulkDensitiesReport,
}

/// Complete mix design report.
///
/// A pure function of the input plus the static reference tables; recomputing
/// with an identical input yields an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDesignReport {
    /// Target mean strength, N/mm2
    #[serde(rename = "Target Strength")]
    pub target_strength: f64,

    #[serde(rename = "Water-Cement Ratio")]
    pub water_cement_ratio: WaterCementRatioReport,

    #[serde(rename = "Water Content")]
    pub water_content: WaterContentReport,

    #[serde(rename = "Cement Content")]
    pub cement_content: CementContentReport,

    #[serde(rename = "Volumes")]
    pub volumes: VolumesReport,

    #[serde(rename = "Mix (SSD Condition)")]
    pub mix_ssd: MixQuantitiesReport,

    #[serde(rename = "Mix (Field Condition)")]
    pub mix_field: MixQuantitiesReport,

    #[serde(rename = "Batching Ratios and Volumes")]
    pub batching: BatchingReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_serializes_as_worksheet_strings() {
        assert_eq!(serde_json::to_string(&CheckStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&CheckStatus::NotOk).unwrap(),
            "\"NOT OK\""
        );
        assert_eq!(CheckStatus::from_bool(true), CheckStatus::Ok);
        assert_eq!(CheckStatus::NotOk.to_string(), "NOT OK");
    }

    #[test]
    fn test_normative_key_names() {
        let row = BatchingRow {
            water: 0.4,
            cement: 1,
            sand: 1.43,
            ca20: 1.53,
            ca10: 1.02,
            remarks: "wt. batching".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"CA20\""));
        assert!(json.contains("\"remarks\""));
    }
}
