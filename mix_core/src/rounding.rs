//! # Rounding Helpers
//!
//! Numeric helpers used at report assembly. The pipeline carries full
//! precision internally; rounding happens only when values land in the
//! report, except for the water-content ceiling which the later stages
//! consume deliberately.

/// Round `number` up to the next multiple of `significance` (spreadsheet
/// CEILING semantics). A significance of 0 returns 0, guarding the division.
pub fn ceiling_to_multiple(number: f64, significance: f64) -> f64 {
    if significance == 0.0 {
        return 0.0;
    }
    (number / significance).ceil() * significance
}

/// Round to `decimals` decimal places, half away from zero.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
