//! # mix_core - Concrete Mix Proportioning Engine
//!
//! `mix_core` computes concrete mix designs following the IS 10262
//! proportioning procedure: from a target grade, exposure class, aggregate
//! properties and workability requirement it derives the water content,
//! cement content, aggregate proportions, and batching quantities under both
//! SSD and field-moisture conditions. All inputs and outputs are
//! JSON-serializable, making it easy to drive from CLIs, services, or AI
//! assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function takes an input and returns a report
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Normative Output**: Report keys match the standard proportioning sheet
//!
//! ## Quick Start
//!
//! ```rust
//! use mix_core::input::MixDesignInput;
//! use mix_core::materials::{CementType, ExposureCondition, FineAggregateZone};
//! use mix_core::design::calculate;
//!
//! let input = MixDesignInput::new(
//!     "M35",
//!     ExposureCondition::Severe,
//!     CementType::Ppc,
//!     20,
//!     FineAggregateZone::II,
//!     2.9,   // cement SG
//!     2.65,  // fine aggregate SG
//!     2.66,  // coarse aggregate SG
//!     140.0, // slump (mm)
//!     0.4,   // adopted w/c ratio
//! );
//!
//! let report = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("Mix (SSD Condition)"));
//! ```
//!
//! ## Modules
//!
//! - [`design`] - The mix design pipeline (`calculate`)
//! - [`input`] - The immutable input configuration
//! - [`report`] - The nested report structure returned by `calculate`
//! - [`tables`] - IS 456 / IS 10262 reference tables
//! - [`materials`] - Zone, exposure, and cement-type enums
//! - [`rounding`] - Ceiling and decimal rounding helpers
//! - [`errors`] - Structured error types

pub mod design;
pub mod errors;
pub mod input;
pub mod materials;
pub mod report;
pub mod rounding;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use design::calculate;
pub use errors::{MixError, MixResult};
pub use input::MixDesignInput;
pub use report::MixDesignReport;
