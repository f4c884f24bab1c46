//! Error Types for Threshold Validation and Engine Configuration
//!
//! ## Design Philosophy
//!
//! Nothing in the engine throws across its boundary. Bad sensor data becomes a
//! [`Status::Unknown`](crate::Status::Unknown), a flat-zero trend baseline
//! becomes a stable trend, and the only things reported as errors are inputs a
//! user can fix:
//!
//! - **Threshold input** (`ThresholdError`): one per parameter, collected into
//!   [`FieldErrors`] so a form can show every problem at once without losing
//!   the fields that were fine.
//! - **Engine configuration** (`ConfigError`): rejected up front by
//!   [`EngineConfig::validate`](crate::EngineConfig::validate).
//!
//! The `Display` text of `ThresholdError` is the message shown next to the
//! offending field, so keep it short and user facing.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use aquaguard_core::{Parameter, ThresholdDraft, ThresholdError};
//!
//! let mut draft = ThresholdDraft::default();
//! draft.get_mut(Parameter::Ph).min = "7.5".into();
//! draft.get_mut(Parameter::Ph).max = "6.5".into();
//!
//! match draft.validate() {
//!     Ok(_config) => {
//!         // persist it
//!     }
//!     Err(errors) => {
//!         assert!(matches!(
//!             errors.get(Parameter::Ph),
//!             Some(ThresholdError::MinNotBelowMax { .. })
//!         ));
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::parameter::Parameter;

/// Result type for per-parameter threshold checks
pub type ThresholdResult<T> = Result<T, ThresholdError>;

/// Why a single parameter's threshold input was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    /// Two-sided parameter with an empty min or max field
    #[error("Both min and max values are required")]
    MissingRange,

    /// One-sided parameter with an empty max field
    #[error("Max value is required")]
    MissingMax,

    /// Two-sided parameter with a min or max that is not a finite number
    #[error("Values must be numeric")]
    RangeNotNumeric,

    /// One-sided parameter with a max that is not a finite number
    #[error("Value must be numeric")]
    MaxNotNumeric,

    /// min >= max
    #[error("Min must be less than max")]
    MinNotBelowMax {
        /// Submitted minimum
        min: f64,
        /// Submitted maximum
        max: f64,
    },

    /// Two-sided range leaves the parameter's physical bound
    #[error("Values must be between {lo} and {hi}")]
    RangeOutOfBounds {
        /// Lowest physically meaningful value
        lo: f64,
        /// Highest physically meaningful value
        hi: f64,
    },

    /// One-sided max leaves the parameter's physical bound
    #[error("Value must be between {lo} and {hi}")]
    MaxOutOfBounds {
        /// Lowest physically meaningful value
        lo: f64,
        /// Highest physically meaningful value
        hi: f64,
    },
}

/// Threshold validation errors keyed by parameter
///
/// Only parameters that failed appear here. An empty map never escapes
/// validation: callers get `Ok(config)` instead.
#[derive(Error, Debug, Clone, Default, PartialEq)]
#[error("{} threshold(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Parameter, ThresholdError>);

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for a parameter, replacing any earlier one
    pub fn insert(&mut self, parameter: Parameter, error: ThresholdError) {
        self.0.insert(parameter, error);
    }

    /// Error recorded for a parameter, if any
    pub fn get(&self, parameter: Parameter) -> Option<&ThresholdError> {
        self.0.get(&parameter)
    }

    /// Whether a parameter failed validation
    pub fn contains(&self, parameter: Parameter) -> bool {
        self.0.contains_key(&parameter)
    }

    /// Number of failing parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate failing parameters in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &ThresholdError)> {
        self.0.iter().map(|(p, e)| (*p, e))
    }

    /// `{parameterKey: message}` map, ready to hand to a form
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(p, e)| (p.key(), e.to_string()))
            .collect()
    }

    /// `Ok(value)` when no errors were recorded, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Engine configuration values that make no sense
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Warning margin must be a fraction of the band width in [0, 0.5]
    #[error("Warning margin {value} outside [0, 0.5]")]
    WarningMarginOutOfRange {
        /// The rejected margin
        value: f64,
    },

    /// Trend threshold must be a finite, non-negative percentage
    #[error("Trend stable threshold {value}% is not a non-negative number")]
    InvalidTrendThreshold {
        /// The rejected threshold
        value: f64,
    },

    /// Moving-average window of zero samples
    #[error("Moving average window must hold at least one sample")]
    EmptyWindow,
}
