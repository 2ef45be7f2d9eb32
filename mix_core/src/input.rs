//! # Mix Design Input
//!
//! The immutable input configuration for a mix design. Required fields are
//! taken by [`MixDesignInput::new`]; everything else carries the defaults of
//! the standard proportioning worksheet and can be overridden with the
//! chainable `with_*` setters or supplied directly in JSON.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "grade_designation": "M35",
//!   "exposure_condition": "Severe",
//!   "cement_type": "PPC",
//!   "max_aggregate_size_mm": 20,
//!   "fine_aggregate_zone": "II",
//!   "cement_specific_gravity": 2.9,
//!   "fine_agg_specific_gravity": 2.65,
//!   "coarse_agg_specific_gravity": 2.66,
//!   "slump_target_mm": 140.0,
//!   "adopted_water_cement_ratio": 0.4,
//!   "use_superplasticizer": true,
//!   "superplasticizer_dosage_pct": 0.5,
//!   "water_reduction_pct": 15.0,
//!   "fine_agg_absorption_pct": 1.05
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{MixError, MixResult};
use crate::materials::{CementType, ExposureCondition, FineAggregateZone};

fn default_admixture_sg() -> f64 {
    1.25
}
fn default_ca_absorption() -> f64 {
    0.5
}
fn default_fa_absorption() -> f64 {
    1.0
}
fn default_bulk_density_cement() -> f64 {
    1.30
}
fn default_bulk_density_fine_agg() -> f64 {
    1.76
}
fn default_bulk_density_ca20() -> f64 {
    1.60
}
fn default_bulk_density_ca10() -> f64 {
    1.55
}
fn default_ca20_fraction() -> f64 {
    0.6
}
fn default_ca10_fraction() -> f64 {
    0.4
}

/// Input parameters for a concrete mix design.
///
/// Specific gravities are on the g/cm3 scale; bulk densities are kg per
/// litre of loose material; absorption and moisture are percentages of dry
/// mass. A moisture percentage of exactly 0 means "no free-moisture data
/// supplied" and selects the absorption-only field correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixDesignInput {
    /// Grade designation, numeric strength as suffix (e.g. "M35")
    pub grade_designation: String,

    /// Environmental exposure class (informational)
    pub exposure_condition: ExposureCondition,

    /// Cement type (informational)
    pub cement_type: CementType,

    /// Nominal maximum aggregate size in mm (10, 20, or 40)
    pub max_aggregate_size_mm: u32,

    /// Fine aggregate grading zone per IS 383
    pub fine_aggregate_zone: FineAggregateZone,

    /// Specific gravity of cement
    pub cement_specific_gravity: f64,

    /// Specific gravity of fine aggregate (SSD)
    pub fine_agg_specific_gravity: f64,

    /// Specific gravity of coarse aggregate (SSD)
    pub coarse_agg_specific_gravity: f64,

    /// Target slump in mm
    pub slump_target_mm: f64,

    /// Adopted free water-cement ratio
    pub adopted_water_cement_ratio: f64,

    /// Whether a superplasticizer admixture is used
    #[serde(default)]
    pub use_superplasticizer: bool,

    /// Superplasticizer dosage as % of cement mass
    #[serde(default)]
    pub superplasticizer_dosage_pct: f64,

    /// Water reduction from the superplasticizer, % of slump-adjusted water
    #[serde(default)]
    pub water_reduction_pct: f64,

    /// Specific gravity of the admixture
    #[serde(default = "default_admixture_sg")]
    pub admixture_specific_gravity: f64,

    /// Coarse aggregate water absorption, % of dry mass
    #[serde(default = "default_ca_absorption")]
    pub coarse_agg_absorption_pct: f64,

    /// Fine aggregate water absorption, % of dry mass
    #[serde(default = "default_fa_absorption")]
    pub fine_agg_absorption_pct: f64,

    /// Coarse aggregate free moisture, % of dry mass (0 = SSD / no data)
    #[serde(default)]
    pub coarse_agg_moisture_pct: f64,

    /// Fine aggregate free moisture, % of dry mass (0 = SSD / no data)
    #[serde(default)]
    pub fine_agg_moisture_pct: f64,

    /// Bulk density of cement (kg/l), for volume batching only
    #[serde(default = "default_bulk_density_cement")]
    pub bulk_density_cement: f64,

    /// Bulk density of fine aggregate (kg/l)
    #[serde(default = "default_bulk_density_fine_agg")]
    pub bulk_density_fine_agg: f64,

    /// Bulk density of 20 mm coarse aggregate (kg/l)
    #[serde(default = "default_bulk_density_ca20")]
    pub bulk_density_ca20: f64,

    /// Bulk density of 10 mm coarse aggregate (kg/l)
    #[serde(default = "default_bulk_density_ca10")]
    pub bulk_density_ca10: f64,

    /// Fraction of coarse aggregate batched as 20 mm
    #[serde(default = "default_ca20_fraction")]
    pub ca20_fraction: f64,

    /// Fraction of coarse aggregate batched as 10 mm
    #[serde(default = "default_ca10_fraction")]
    pub ca10_fraction: f64,
}

impl MixDesignInput {
    /// Create an input with the required fields; every optional field takes
    /// its worksheet default (no superplasticizer, SSD aggregates, standard
    /// bulk densities, 60/40 coarse split).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grade_designation: impl Into<String>,
        exposure_condition: ExposureCondition,
        cement_type: CementType,
        max_aggregate_size_mm: u32,
        fine_aggregate_zone: FineAggregateZone,
        cement_specific_gravity: f64,
        fine_agg_specific_gravity: f64,
        coarse_agg_specific_gravity: f64,
        slump_target_mm: f64,
        adopted_water_cement_ratio: f64,
    ) -> Self {
        MixDesignInput {
            grade_designation: grade_designation.into(),
            exposure_condition,
            cement_type,
            max_aggregate_size_mm,
            fine_aggregate_zone,
            cement_specific_gravity,
            fine_agg_specific_gravity,
            coarse_agg_specific_gravity,
            slump_target_mm,
            adopted_water_cement_ratio,
            use_superplasticizer: false,
            superplasticizer_dosage_pct: 0.0,
            water_reduction_pct: 0.0,
            admixture_specific_gravity: default_admixture_sg(),
            coarse_agg_absorption_pct: default_ca_absorption(),
            fine_agg_absorption_pct: default_fa_absorption(),
            coarse_agg_moisture_pct: 0.0,
            fine_agg_moisture_pct: 0.0,
            bulk_density_cement: default_bulk_density_cement(),
            bulk_density_fine_agg: default_bulk_density_fine_agg(),
            bulk_density_ca20: default_bulk_density_ca20(),
            bulk_density_ca10: default_bulk_density_ca10(),
            ca20_fraction: default_ca20_fraction(),
            ca10_fraction: default_ca10_fraction(),
        }
    }

    /// Enable the superplasticizer with a dosage (% of cement mass) and the
    /// water reduction it achieves (% of slump-adjusted water)
    pub fn with_superplasticizer(mut self, dosage_pct: f64, water_reduction_pct: f64) -> Self {
        self.use_superplasticizer = true;
        self.superplasticizer_dosage_pct = dosage_pct;
        self.water_reduction_pct = water_reduction_pct;
        self
    }

    /// Set the admixture specific gravity
    pub fn with_admixture_sg(mut self, sg: f64) -> Self {
        self.admixture_specific_gravity = sg;
        self
    }

    /// Set aggregate absorption percentages (coarse, fine)
    pub fn with_absorption(mut self, coarse_pct: f64, fine_pct: f64) -> Self {
        self.coarse_agg_absorption_pct = coarse_pct;
        self.fine_agg_absorption_pct = fine_pct;
        self
    }

    /// Set aggregate free moisture percentages (coarse, fine)
    pub fn with_moisture(mut self, coarse_pct: f64, fine_pct: f64) -> Self {
        self.coarse_agg_moisture_pct = coarse_pct;
        self.fine_agg_moisture_pct = fine_pct;
        self
    }

    /// Set the bulk densities (cement, fine agg, CA20, CA10), kg/l
    pub fn with_bulk_densities(mut self, cement: f64, fine: f64, ca20: f64, ca10: f64) -> Self {
        self.bulk_density_cement = cement;
        self.bulk_density_fine_agg = fine;
        self.bulk_density_ca20 = ca20;
        self.bulk_density_ca10 = ca10;
        self
    }

    /// Set the CA20/CA10 coarse aggregate split
    pub fn with_ca_split(mut self, ca20_fraction: f64, ca10_fraction: f64) -> Self {
        self.ca20_fraction = ca20_fraction;
        self.ca10_fraction = ca10_fraction;
        self
    }

    /// Parse the characteristic strength fck from the grade designation by
    /// stripping the non-digit prefix ("M35" -> 35).
    pub fn fck(&self) -> MixResult<u32> {
        let digits = self
            .grade_designation
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_digit());
        digits.parse::<u32>().map_err(|_| {
            MixError::invalid_grade_designation(
                &self.grade_designation,
                "No numeric strength suffix",
            )
        })
    }

    /// Opt-in soft validation. Never called by [`crate::design::calculate`];
    /// the pipeline accepts everything the worksheet accepts, including
    /// degenerate inputs that produce negative aggregate volumes. Call this
    /// first when rejecting such inputs is preferable to reproducing the
    /// worksheet output.
    pub fn validate(&self) -> MixResult<()> {
        for (field, value) in [
            ("cement_specific_gravity", self.cement_specific_gravity),
            ("fine_agg_specific_gravity", self.fine_agg_specific_gravity),
            ("coarse_agg_specific_gravity", self.coarse_agg_specific_gravity),
            ("admixture_specific_gravity", self.admixture_specific_gravity),
            ("slump_target_mm", self.slump_target_mm),
            ("adopted_water_cement_ratio", self.adopted_water_cement_ratio),
        ] {
            if value <= 0.0 {
                return Err(MixError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        let split = self.ca20_fraction + self.ca10_fraction;
        if (split - 1.0).abs() > 0.001 {
            return Err(MixError::invalid_input(
                "ca20_fraction + ca10_fraction",
                split.to_string(),
                "Coarse aggregate split must sum to 1.0",
            ));
        }
        Ok(())
    }
}
