//! Engine Configuration
//!
//! Tunables the product leaves open. Each has a default matching the
//! dashboard's behaviour and a builder-style setter; [`EngineConfig::legacy`]
//! reproduces the older two-tier, all-parameter scoring.
//!
//! ```rust
//! use aquaguard_core::{DenominatorPolicy, EngineConfig};
//!
//! let config = EngineConfig::default()
//!     .with_warning_margin(0.15)
//!     .with_denominator(DenominatorPolicy::AllParameters);
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    constants::quality::{
        DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_WARNING_MARGIN, MAX_WARNING_MARGIN,
        TREND_STABLE_CHANGE_PCT,
    },
    errors::ConfigError,
    traits::Validatable,
};

/// Which parameters the health score divides by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenominatorPolicy {
    /// Only parameters with a usable reading. A tank with an offline sensor
    /// is scored on what is known.
    #[default]
    PresentOnly,
    /// Every parameter. A missing reading counts against the tank.
    AllParameters,
}

impl DenominatorPolicy {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            DenominatorPolicy::PresentOnly => "presentOnly",
            DenominatorPolicy::AllParameters => "allParameters",
        }
    }
}

/// Tunable behaviour of the evaluation engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Warning zone width as a fraction of band width, in `[0, 0.5]`
    pub warning_margin: f64,
    /// Absolute change (%) below which a trend is stable
    pub trend_stable_threshold_pct: f64,
    /// Samples per moving-average window
    pub moving_average_window: usize,
    /// Health score denominator
    pub denominator: DenominatorPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warning_margin: DEFAULT_WARNING_MARGIN,
            trend_stable_threshold_pct: TREND_STABLE_CHANGE_PCT,
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            denominator: DenominatorPolicy::PresentOnly,
        }
    }
}

impl EngineConfig {
    /// Two-tier evaluation and all-parameter scoring
    pub fn legacy() -> Self {
        Self {
            warning_margin: 0.0,
            denominator: DenominatorPolicy::AllParameters,
            ..Self::default()
        }
    }

    /// Set the warning margin
    pub fn with_warning_margin(mut self, margin: f64) -> Self {
        self.warning_margin = margin;
        self
    }

    /// Set the stable-trend threshold
    pub fn with_trend_threshold(mut self, pct: f64) -> Self {
        self.trend_stable_threshold_pct = pct;
        self
    }

    /// Set the moving-average window
    pub fn with_moving_average_window(mut self, window: usize) -> Self {
        self.moving_average_window = window;
        self
    }

    /// Set the health denominator policy
    pub fn with_denominator(mut self, denominator: DenominatorPolicy) -> Self {
        self.denominator = denominator;
        self
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.warning_margin.is_valid()
            || !(0.0..=MAX_WARNING_MARGIN).contains(&self.warning_margin)
        {
            return Err(ConfigError::WarningMarginOutOfRange {
                value: self.warning_margin,
            });
        }
        if !self.trend_stable_threshold_pct.is_valid() || self.trend_stable_threshold_pct < 0.0 {
            return Err(ConfigError::InvalidTrendThreshold {
                value: self.trend_stable_threshold_pct,
            });
        }
        if self.moving_average_window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(())
    }
}
