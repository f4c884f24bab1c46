//! Trend Direction and Chart Smoothing
//!
//! ## Direction
//!
//! A series is split at its integer midpoint (the first half takes the
//! smaller share when the length is odd) and the half means are compared:
//!
//! ```text
//! change = (mean(second) - mean(first)) / |mean(first)| × 100
//! ```
//!
//! The change is rounded to one decimal before being compared with the
//! stable threshold (2% by default), so 1.96% counts as 2.0% and is not
//! stable. Stable trends always report a change of 0.
//!
//! Degenerate input never errors: fewer than two usable samples, or a first
//! half averaging exactly zero, is simply stable.
//!
//! ## Moving Average
//!
//! Point `i` of the smoothed series is the mean of the up-to-`w` samples
//! ending at `i`. The window is clipped at the start of the series rather
//! than leaving the first `w - 1` points undefined, so output and input have
//! the same length.

use core::fmt;

use crate::{
    constants::quality::{
        DEFAULT_MOVING_AVERAGE_WINDOW, TREND_CHANGE_DECIMALS, TREND_STABLE_CHANGE_PCT,
    },
    traits::Validatable,
    validators::round_to,
};

/// Direction of a series over its analysis period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    /// Second half meaningfully higher
    Rising,
    /// Second half meaningfully lower
    Falling,
    /// Within the stable threshold
    Stable,
}

impl TrendDirection {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction plus signed half-over-half change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Classified direction
    pub direction: TrendDirection,
    /// Signed change in percent, one decimal; 0 when stable
    pub change_percent: f64,
}

impl Trend {
    /// Flat trend
    pub const STABLE: Trend = Trend {
        direction: TrendDirection::Stable,
        change_percent: 0.0,
    };

    /// Unsigned size of the change
    pub fn magnitude(&self) -> f64 {
        self.change_percent.abs()
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::STABLE
    }
}

/// Classifies series and smooths them for charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendClassifier {
    stable_threshold_pct: f64,
    window: usize,
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self {
            stable_threshold_pct: TREND_STABLE_CHANGE_PCT,
            window: DEFAULT_MOVING_AVERAGE_WINDOW,
        }
    }
}

impl TrendClassifier {
    /// Classifier with a custom stable threshold (%) and smoothing window
    pub fn new(stable_threshold_pct: f64, window: usize) -> Self {
        Self {
            stable_threshold_pct,
            window,
        }
    }

    /// Configured stable threshold
    pub fn stable_threshold_pct(&self) -> f64 {
        self.stable_threshold_pct
    }

    /// Configured smoothing window
    pub fn window(&self) -> usize {
        self.window
    }

    /// Classify a chronological series, oldest first
    ///
    /// Non-finite samples are skipped.
    pub fn classify(&self, values: &[f64]) -> Trend {
        let samples: Vec<f64> = values.iter().copied().filter(Validatable::is_valid).collect();
        if samples.len() < values.len() {
            log_debug!(
                "Skipped {} non-finite samples in trend input",
                values.len() - samples.len()
            );
        }
        if samples.len() < 2 {
            return Trend::STABLE;
        }

        let (first, second) = samples.split_at(samples.len() / 2);
        let first_mean = mean(first);
        let second_mean = mean(second);

        if first_mean == 0.0 {
            return Trend::STABLE;
        }

        let change = round_to(
            (second_mean - first_mean) / first_mean.abs() * 100.0,
            TREND_CHANGE_DECIMALS,
        );

        if !change.is_valid() || change.abs() < self.stable_threshold_pct {
            return Trend::STABLE;
        }

        Trend {
            direction: if change > 0.0 {
                TrendDirection::Rising
            } else {
                TrendDirection::Falling
            },
            change_percent: change,
        }
    }

    /// Moving average with the configured window
    pub fn moving_average(&self, values: &[f64]) -> Vec<f64> {
        moving_average(values, self.window)
    }
}

/// Trailing moving average, clipped at the series start
///
/// A window of 0 is treated as 1 (the series itself).
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean(&values[start..=i])
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
