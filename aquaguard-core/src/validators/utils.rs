//! Common Validation Utilities
//!
//! Pure helpers shared by the evaluator and the draft validator. No
//! allocation, no panics: bad input comes back as a value.

use crate::{
    errors::{ThresholdError, ThresholdResult},
    parameter::Parameter,
    traits::Validatable,
};

/// One parsed form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Nothing typed
    Empty,
    /// Typed, but not a finite number
    Invalid,
    /// A usable number
    Number(f64),
}

impl Field {
    /// The number, if there is one
    pub fn number(self) -> Option<f64> {
        match self {
            Field::Number(v) => Some(v),
            _ => None,
        }
    }
}

/// Parse a raw form field
///
/// Surrounding whitespace is ignored. `NaN` and `inf` parse as floats in Rust
/// but are not thresholds anyone meant, so they count as invalid.
pub fn parse_field(text: &str) -> Field {
    let text = text.trim();
    if text.is_empty() {
        return Field::Empty;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_valid() => Field::Number(v),
        _ => Field::Invalid,
    }
}

/// Check a numeric band against ordering and the parameter's physical bound
///
/// `min` is ignored for one-sided parameters.
pub fn check_threshold(parameter: Parameter, min: Option<f64>, max: f64) -> ThresholdResult<()> {
    let bound = parameter.physical_bound();

    if parameter.has_min() {
        let min = min.ok_or(ThresholdError::MissingRange)?;
        if !min.is_valid() || !max.is_valid() {
            return Err(ThresholdError::RangeNotNumeric);
        }
        if min >= max {
            return Err(ThresholdError::MinNotBelowMax { min, max });
        }
        if min < bound.min || max > bound.max {
            return Err(ThresholdError::RangeOutOfBounds {
                lo: bound.min,
                hi: bound.max,
            });
        }
    } else {
        if !max.is_valid() {
            return Err(ThresholdError::MaxNotNumeric);
        }
        if !bound.contains(max) {
            return Err(ThresholdError::MaxOutOfBounds {
                lo: bound.min,
                hi: bound.max,
            });
        }
    }

    Ok(())
}

/// Round to a number of decimal places, half away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
