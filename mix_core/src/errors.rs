//! # Error Types
//!
//! Structured error types for mix_core. Each variant carries enough context
//! to understand and fix the problem programmatically.
//!
//! Only two conditions are fatal for a mix design: a grade with no durability
//! table entry, and an aggregate size with no water-content or
//! coarse-aggregate-volume entry. Every other out-of-table lookup falls back
//! to a documented default instead of erroring.
//!
//! ## Example
//!
//! ```rust
//! use mix_core::errors::{MixError, MixResult};
//!
//! fn require_positive(field: &str, value: f64) -> MixResult<()> {
//!     if value <= 0.0 {
//!         return Err(MixError::invalid_input(
//!             field,
//!             value.to_string(),
//!             "Value must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mix_core operations
pub type MixResult<T> = Result<T, MixError>;

/// Structured error type for mix design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MixError {
    /// Grade has no entry in the IS 456 Table 5 durability limits
    #[error("Unsupported grade '{grade}': no durability limits for fck = {fck} N/mm2")]
    UnsupportedGrade { grade: String, fck: u32 },

    /// Aggregate size has no entry in the water-content or
    /// coarse-aggregate-volume tables
    #[error("Unsupported maximum aggregate size: {size_mm} mm (supported: 10, 20, 40)")]
    UnsupportedAggregateSize { size_mm: u32 },

    /// Grade designation string could not be parsed (e.g. "M" with no number)
    #[error("Invalid grade designation '{designation}': {reason}")]
    InvalidGradeDesignation { designation: String, reason: String },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl MixError {
    /// Create an UnsupportedGrade error
    pub fn unsupported_grade(grade: impl Into<String>, fck: u32) -> Self {
        MixError::UnsupportedGrade {
            grade: grade.into(),
            fck,
        }
    }

    /// Create an UnsupportedAggregateSize error
    pub fn unsupported_aggregate_size(size_mm: u32) -> Self {
        MixError::UnsupportedAggregateSize { size_mm }
    }

    /// Create an InvalidGradeDesignation error
    pub fn invalid_grade_designation(
        designation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MixError::InvalidGradeDesignation {
            designation: designation.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MixError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MixError::UnsupportedGrade { .. } => "UNSUPPORTED_GRADE",
            MixError::UnsupportedAggregateSize { .. } => "UNSUPPORTED_AGGREGATE_SIZE",
            MixError::InvalidGradeDesignation { .. } => "INVALID_GRADE_DESIGNATION",
            MixError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
