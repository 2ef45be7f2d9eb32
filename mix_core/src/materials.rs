//! # Material Classifications
//!
//! Enumerated classifications used by the mix design: fine aggregate grading
//! zone (IS 383), exposure condition (IS 456 Table 3), and cement type.
//!
//! Exposure condition and cement type are informational in the core pipeline:
//! they are recorded with the design but do not alter the arithmetic. The
//! grading zone selects the coarse-aggregate volume fraction row.
//!
//! ## Example
//!
//! ```rust
//! use mix_core::materials::FineAggregateZone;
//!
//! let zone = FineAggregateZone::from_str_flexible("Zone II").unwrap();
//! assert_eq!(zone, FineAggregateZone::II);
//! assert_eq!(zone.code(), "II");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MixError, MixResult};

/// Fine aggregate grading zone per IS 383
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FineAggregateZone {
    /// Zone I (coarsest sand)
    I,
    /// Zone II
    II,
    /// Zone III
    III,
    /// Zone IV (finest sand)
    IV,
}

impl FineAggregateZone {
    /// All grading zone variants for UI selection
    pub const ALL: [FineAggregateZone; 4] = [
        FineAggregateZone::I,
        FineAggregateZone::II,
        FineAggregateZone::III,
        FineAggregateZone::IV,
    ];

    /// Get the roman-numeral code string (e.g., "II")
    pub fn code(&self) -> &'static str {
        match self {
            FineAggregateZone::I => "I",
            FineAggregateZone::II => "II",
            FineAggregateZone::III => "III",
            FineAggregateZone::IV => "IV",
        }
    }

    /// Parse from common string representations ("II", "Zone II", "zone-2")
    pub fn from_str_flexible(s: &str) -> MixResult<Self> {
        let normalized = s
            .to_uppercase()
            .replace("ZONE", "")
            .replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "I" | "1" => Ok(FineAggregateZone::I),
            "II" | "2" => Ok(FineAggregateZone::II),
            "III" | "3" => Ok(FineAggregateZone::III),
            "IV" | "4" => Ok(FineAggregateZone::IV),
            _ => Err(MixError::invalid_input(
                "fine_aggregate_zone",
                s,
                "Expected zone I, II, III, or IV",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FineAggregateZone::I => "Zone I",
            FineAggregateZone::II => "Zone II",
            FineAggregateZone::III => "Zone III",
            FineAggregateZone::IV => "Zone IV",
        }
    }
}

impl std::fmt::Display for FineAggregateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Environmental exposure condition per IS 456 Table 3.
///
/// Recorded with the design for traceability; the durability limits applied
/// by the pipeline are keyed by grade, not by exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExposureCondition {
    /// Protected interior concrete
    Mild,
    /// Sheltered from rain, or submerged in non-aggressive water
    #[default]
    Moderate,
    /// Alternate wetting and drying, coastal environment
    Severe,
    /// Sea water spray, aggressive chemical environment
    VerySevere,
    /// Tidal zone, direct aggressive chemical attack
    Extreme,
}

impl ExposureCondition {
    /// All exposure variants for UI selection
    pub const ALL: [ExposureCondition; 5] = [
        ExposureCondition::Mild,
        ExposureCondition::Moderate,
        ExposureCondition::Severe,
        ExposureCondition::VerySevere,
        ExposureCondition::Extreme,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ExposureCondition::Mild => "Mild",
            ExposureCondition::Moderate => "Moderate",
            ExposureCondition::Severe => "Severe",
            ExposureCondition::VerySevere => "Very Severe",
            ExposureCondition::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for ExposureCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Cement type (informational)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CementType {
    /// Ordinary Portland Cement, grade 33/43/53
    #[serde(rename = "OPC")]
    #[default]
    Opc,
    /// Portland Pozzolana Cement
    #[serde(rename = "PPC")]
    Ppc,
    /// Portland Slag Cement
    #[serde(rename = "PSC")]
    Psc,
}

impl CementType {
    /// All cement type variants for UI selection
    pub const ALL: [CementType; 3] = [CementType::Opc, CementType::Ppc, CementType::Psc];

    /// Get the code string (e.g., "PPC")
    pub fn code(&self) -> &'static str {
        match self {
            CementType::Opc => "OPC",
            CementType::Ppc => "PPC",
            CementType::Psc => "PSC",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> MixResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "OPC" | "ORDINARYPORTLANDCEMENT" => Ok(CementType::Opc),
            "PPC" | "PORTLANDPOZZOLANACEMENT" => Ok(CementType::Ppc),
            "PSC" | "PORTLANDSLAGCEMENT" => Ok(CementType::Psc),
            _ => Err(MixError::invalid_input(
                "cement_type",
                s,
                "Expected OPC, PPC, or PSC",
            )),
        }
    }
}

impl std::fmt::Display for CementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
