//! Tank Health Score
//!
//! ## Overview
//!
//! A single weighted percentage answering "is this water good for fish?".
//! Each parameter whose current reading lies in its fixed optimal band
//! contributes its weight:
//!
//! ```text
//! score   = Σ weight(p)  for p with reading in optimal band
//! percent = score / max_score × 100
//! ```
//!
//! pH (1.5) and ammonia (1.2) dominate; turbidity (0.5) matters least.
//!
//! ## Denominator
//!
//! `max_score` depends on [`DenominatorPolicy`]:
//!
//! - `PresentOnly`: weights of parameters that have a usable reading. An
//!   offline sensor is neither a penalty nor a bonus.
//! - `AllParameters`: always the total weight (4.0).
//!
//! With no usable reading at all under `PresentOnly` there is nothing to score;
//! the result is 0% and `Concerned` so a dead tank never looks healthy.
//!
//! ## Tiers
//!
//! | percent     | tier      |
//! |-------------|-----------|
//! | ≥ 80        | Happy     |
//! | 60 ..< 80   | Neutral   |
//! | < 60        | Concerned |

use core::fmt;

use crate::{
    config::DenominatorPolicy,
    constants::{
        parameters::TOTAL_PARAMETER_WEIGHT,
        quality::{HEALTH_HAPPY_MIN_PCT, HEALTH_NEUTRAL_MIN_PCT},
    },
    parameter::{weight_of, Parameter},
    readings::ReadingSet,
};

/// Health score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthTier {
    /// 80% or better
    Happy,
    /// 60% up to 80%
    Neutral,
    /// Below 60%
    Concerned,
}

impl HealthTier {
    /// Tier for a percentage. NaN lands in `Concerned`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HEALTH_HAPPY_MIN_PCT {
            HealthTier::Happy
        } else if percent >= HEALTH_NEUTRAL_MIN_PCT {
            HealthTier::Neutral
        } else {
            HealthTier::Concerned
        }
    }

    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthTier::Happy => "happy",
            HealthTier::Neutral => "neutral",
            HealthTier::Concerned => "concerned",
        }
    }

    /// Face shown next to the score
    pub const fn emoji(&self) -> &'static str {
        match self {
            HealthTier::Happy => "😃",
            HealthTier::Neutral => "😐",
            HealthTier::Concerned => "😟",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one snapshot of readings
#[derive(Debug, Clone, PartialEq)]
pub struct HealthScore {
    /// Sum of weights of optimal parameters
    pub score: f64,
    /// Denominator used for `percent`
    pub max_score: f64,
    /// `score / max_score × 100`, unrounded
    pub percent: f64,
    /// Tier derived from `percent`
    pub tier: HealthTier,
    /// Parameters counted as optimal
    pub optimal: Vec<Parameter>,
    /// Parameters with a usable reading
    pub measured: Vec<Parameter>,
}

impl HealthScore {
    /// Whole-number percentage as displayed, rounded half away from zero
    pub fn rounded_percent(&self) -> i64 {
        self.percent.round() as i64
    }

    /// Number of optimal parameters
    pub fn optimal_count(&self) -> usize {
        self.optimal.len()
    }
}

/// Scores readings against the optimal bands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthScorer {
    denominator: DenominatorPolicy,
}

impl HealthScorer {
    /// Scorer with the given denominator policy
    pub fn new(denominator: DenominatorPolicy) -> Self {
        Self { denominator }
    }

    /// Configured denominator policy
    pub fn denominator(&self) -> DenominatorPolicy {
        self.denominator
    }

    /// Score a snapshot of readings
    pub fn score(&self, readings: &ReadingSet) -> HealthScore {
        let measured: Vec<Parameter> = readings.measured().collect();
        let optimal: Vec<Parameter> = measured
            .iter()
            .copied()
            .filter(|p| {
                readings
                    .usable(*p)
                    .is_some_and(|v| p.optimal_band().contains(v))
            })
            .collect();

        let score = weight_of(optimal.iter().copied());
        let max_score = match self.denominator {
            DenominatorPolicy::PresentOnly => weight_of(measured.iter().copied()),
            DenominatorPolicy::AllParameters => TOTAL_PARAMETER_WEIGHT,
        };

        let percent = if max_score > 0.0 {
            score / max_score * 100.0
        } else {
            log_warn!("No usable readings to score; reporting 0%");
            0.0
        };

        HealthScore {
            score,
            max_score,
            percent,
            tier: HealthTier::from_percent(percent),
            optimal,
            measured,
        }
    }
}
