//! Threshold evaluator: classifies one reading against one safe band
//!
//! Classifies against:
//! - the band edges (outside is critical)
//! - a warning zone just inside each meaningful edge
//! - the reading itself (missing or non-finite is unknown)

use core::fmt;

use crate::{
    constants::quality::{DEFAULT_WARNING_MARGIN, MAX_WARNING_MARGIN},
    parameter::Parameter,
    thresholds::ParameterThreshold,
    traits::Validatable,
};

/// Where a reading sits relative to its safe band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Comfortably inside the band
    Optimal,
    /// Inside the band, close to an edge
    Warning,
    /// Outside the band
    Critical,
    /// No usable reading
    Unknown,
}

impl Status {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Optimal => "optimal",
            Status::Warning => "warning",
            Status::Critical => "critical",
            Status::Unknown => "unknown",
        }
    }

    /// Whether this status should raise an alert
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Status::Warning | Status::Critical)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies readings against configured safe bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdEvaluator {
    /// Warning zone width as a fraction of the band width
    warning_margin: f64,
}

impl Default for ThresholdEvaluator {
    fn default() -> Self {
        Self {
            warning_margin: DEFAULT_WARNING_MARGIN,
        }
    }
}

impl ThresholdEvaluator {
    /// Create an evaluator with a custom warning margin
    ///
    /// The margin is clamped to `[0, 0.5]`; a non-finite margin falls back to
    /// the default.
    pub fn new(warning_margin: f64) -> Self {
        let warning_margin = if warning_margin.is_valid() {
            warning_margin.clamp(0.0, MAX_WARNING_MARGIN)
        } else {
            DEFAULT_WARNING_MARGIN
        };
        Self { warning_margin }
    }

    /// Evaluator without a warning tier: every in-band reading is optimal
    pub fn two_tier() -> Self {
        Self { warning_margin: 0.0 }
    }

    /// Configured warning margin
    pub fn warning_margin(&self) -> f64 {
        self.warning_margin
    }

    /// Classify a reading of `parameter` against its band
    ///
    /// The band's `enabled` flag is not consulted: a disabled parameter still
    /// has a status, it just never alerts.
    pub fn classify(
        &self,
        parameter: Parameter,
        value: Option<f64>,
        threshold: &ParameterThreshold,
    ) -> Status {
        let value = match value {
            Some(v) if v.is_valid() => v,
            _ => return Status::Unknown,
        };

        let min = if parameter.has_min() { threshold.min } else { None };
        self.classify_value(value, min, threshold.max, parameter.physical_bound().min)
    }

    /// Classify a raw value against `[min, max]`
    ///
    /// `floor` stands in for the lower edge of a one-sided band when sizing
    /// its warning zone; it is never a violation boundary.
    pub fn classify_value(&self, value: f64, min: Option<f64>, max: f64, floor: f64) -> Status {
        if !value.is_valid() {
            return Status::Unknown;
        }

        if let Some(min) = min {
            if value < min {
                return Status::Critical;
            }
        }
        if value > max {
            return Status::Critical;
        }

        if self.warning_margin <= 0.0 {
            return Status::Optimal;
        }

        let lower = min.unwrap_or(floor);
        let width = max - lower;
        if width <= 0.0 {
            return Status::Optimal;
        }

        let zone = width * self.warning_margin;
        if value > max - zone {
            return Status::Warning;
        }
        if min.is_some() && value < lower + zone {
            return Status::Warning;
        }

        Status::Optimal
    }
}
