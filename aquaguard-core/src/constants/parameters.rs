//! Water Parameter Ranges and Weights
//!
//! Three different ranges exist for every parameter and they must not be
//! confused:
//!
//! ```text
//! physical bound   what a threshold may be set to at all      pH 0 .. 14
//! alert threshold  user-configurable "safe" band (defaults)   pH 6.5 .. 7.5
//! optimal band     fixed "ideal" band used for health score   pH 6.8 .. 7.4
//! ```
//!
//! Temperature and pH are two-sided (too low hurts as much as too high).
//! Turbidity and ammonia are one-sided: lower is always better, only a
//! maximum matters.

#![deny(missing_docs)]

// ===== TEMPERATURE (°C) =====

/// Lowest temperature threshold a user may configure (°C).
pub const TEMPERATURE_BOUND_MIN_C: f64 = 10.0;

/// Highest temperature threshold a user may configure (°C).
pub const TEMPERATURE_BOUND_MAX_C: f64 = 40.0;

/// Default lower alert threshold for a tropical freshwater tank (°C).
pub const TEMPERATURE_DEFAULT_MIN_C: f64 = 22.0;

/// Default upper alert threshold (°C).
pub const TEMPERATURE_DEFAULT_MAX_C: f64 = 28.0;

/// Lower edge of the temperature optimal band (°C), inclusive.
pub const TEMPERATURE_OPTIMAL_MIN_C: f64 = 24.0;

/// Upper edge of the temperature optimal band (°C), inclusive.
pub const TEMPERATURE_OPTIMAL_MAX_C: f64 = 26.0;

/// Health-score weight. Fish tolerate short temperature swings better than
/// chemistry problems.
pub const TEMPERATURE_WEIGHT: f64 = 0.8;

// ===== PH =====

/// Bottom of the pH scale.
pub const PH_BOUND_MIN: f64 = 0.0;

/// Top of the pH scale.
pub const PH_BOUND_MAX: f64 = 14.0;

/// Default lower alert threshold for most community fish.
pub const PH_DEFAULT_MIN: f64 = 6.5;

/// Default upper alert threshold.
pub const PH_DEFAULT_MAX: f64 = 7.5;

/// Lower edge of the pH optimal band, inclusive.
pub const PH_OPTIMAL_MIN: f64 = 6.8;

/// Upper edge of the pH optimal band, inclusive.
pub const PH_OPTIMAL_MAX: f64 = 7.4;

/// Health-score weight. pH damages gills and skin directly.
pub const PH_WEIGHT: f64 = 1.5;

// ===== TURBIDITY (NTU) =====

/// Lowest turbidity threshold a user may configure (NTU).
pub const TURBIDITY_BOUND_MIN_NTU: f64 = 0.0;

/// Highest turbidity threshold a user may configure (NTU).
pub const TURBIDITY_BOUND_MAX_NTU: f64 = 100.0;

/// Default alert maximum (NTU). Above this the filter needs attention.
pub const TURBIDITY_DEFAULT_MAX_NTU: f64 = 5.0;

/// Optimal maximum (NTU), exclusive: crystal clear water reads under 3.
pub const TURBIDITY_OPTIMAL_MAX_NTU: f64 = 3.0;

/// Health-score weight. Cloudiness is a symptom more than a threat.
pub const TURBIDITY_WEIGHT: f64 = 0.5;

// ===== AMMONIA (ppm) =====

/// Lowest ammonia threshold a user may configure (ppm).
pub const AMMONIA_BOUND_MIN_PPM: f64 = 0.0;

/// Highest ammonia threshold a user may configure (ppm).
pub const AMMONIA_BOUND_MAX_PPM: f64 = 5.0;

/// Default alert maximum (ppm). Above this, do a water change.
pub const AMMONIA_DEFAULT_MAX_PPM: f64 = 0.25;

/// Lower edge of the ammonia optimal band (ppm), inclusive.
pub const AMMONIA_OPTIMAL_MIN_PPM: f64 = 0.0;

/// Upper edge of the ammonia optimal band (ppm), inclusive.
pub const AMMONIA_OPTIMAL_MAX_PPM: f64 = 0.25;

/// Health-score weight. Even traces burn gills.
pub const AMMONIA_WEIGHT: f64 = 1.2;

// ===== TOTALS =====

/// Sum of all four weights; the health score's maximum with full coverage.
pub const TOTAL_PARAMETER_WEIGHT: f64 =
    TEMPERATURE_WEIGHT + PH_WEIGHT + TURBIDITY_WEIGHT + AMMONIA_WEIGHT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_four() {
        assert!((TOTAL_PARAMETER_WEIGHT - 4.0).abs() < 1e-12);
    }

    #[test]
    fn optimal_bands_sit_inside_default_thresholds() {
        assert!(TEMPERATURE_OPTIMAL_MIN_C >= TEMPERATURE_DEFAULT_MIN_C);
        assert!(TEMPERATURE_OPTIMAL_MAX_C <= TEMPERATURE_DEFAULT_MAX_C);
        assert!(PH_OPTIMAL_MIN >= PH_DEFAULT_MIN);
        assert!(PH_OPTIMAL_MAX <= PH_DEFAULT_MAX);
        assert!(TURBIDITY_OPTIMAL_MAX_NTU <= TURBIDITY_DEFAULT_MAX_NTU);
        assert!(AMMONIA_OPTIMAL_MAX_PPM <= AMMONIA_DEFAULT_MAX_PPM);
    }
}
