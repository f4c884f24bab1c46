//! Water Quality Engine
//!
//! ## Overview
//!
//! One entry point bundling every component behind a single
//! [`EngineConfig`]:
//!
//! ```text
//!  ReadingSet ──► ThresholdEvaluator ──┬──► EvaluationResult (per parameter)
//!                                      └──► AlertPolicy ──► AlertDecision
//!  ReadingSet ──► HealthScorer ────────────► HealthScore
//!  ReadingHistory ──► TrendClassifier ─────► Trend (per parameter)
//! ```
//!
//! The engine is stateless apart from its configuration. It can be shared
//! freely between threads and called repeatedly with the same inputs for the
//! same output.
//!
//! ## Usage Example
//!
//! ```rust
//! use aquaguard_core::{
//!     Parameter, ReadingHistory, ReadingSeries, ReadingSet, Status, ThresholdConfig,
//!     TrendDirection, WaterQualityEngine,
//! };
//!
//! let engine = WaterQualityEngine::default();
//! let mut history = ReadingHistory::new();
//! history.insert(ReadingSeries::from_values(
//!     Parameter::Temperature,
//!     0,
//!     3_600_000,
//!     &[24.0, 24.5, 25.5, 26.0],
//! ));
//!
//! let report = engine.evaluate_history(&history, &ThresholdConfig::default());
//! let temperature = report.evaluation(Parameter::Temperature).unwrap();
//! assert_eq!(temperature.status, Status::Optimal);
//! assert_eq!(temperature.trend.direction, TrendDirection::Rising);
//! ```

use crate::{
    alerts::{AlertDecision, AlertPolicy},
    config::EngineConfig,
    errors::ConfigError,
    health::{HealthScore, HealthScorer},
    insights::{trend_insights, Insight},
    parameter::Parameter,
    readings::{ReadingHistory, ReadingSet},
    thresholds::ThresholdConfig,
    trend::{Trend, TrendClassifier},
    validators::{Status, ThresholdEvaluator},
};

/// Outcome for one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Evaluated parameter
    pub parameter: Parameter,
    /// Usable current value, if any
    pub value: Option<f64>,
    /// Position relative to the configured band
    pub status: Status,
    /// Direction over the supplied history
    pub trend: Trend,
}

/// Everything the engine derives for one tank
#[derive(Debug, Clone, PartialEq)]
pub struct TankReport {
    /// One entry per parameter, in parameter order
    pub evaluations: Vec<EvaluationResult>,
    /// Weighted health score
    pub health: HealthScore,
    /// Raised alerts and their routing
    pub alerts: AlertDecision,
}

impl TankReport {
    /// Result for one parameter
    pub fn evaluation(&self, parameter: Parameter) -> Option<&EvaluationResult> {
        self.evaluations.iter().find(|e| e.parameter == parameter)
    }

    /// Trend notes for temperature and pH
    pub fn insights(&self) -> Vec<Insight> {
        trend_insights(
            self.evaluation(Parameter::Temperature).map(|e| &e.trend),
            self.evaluation(Parameter::Ph).map(|e| &e.trend),
        )
    }

    /// Statuses in parameter order
    pub fn statuses(&self) -> impl Iterator<Item = (Parameter, Status)> + '_ {
        self.evaluations.iter().map(|e| (e.parameter, e.status))
    }
}

/// Stateless water-quality evaluation engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterQualityEngine {
    config: EngineConfig,
    evaluator: ThresholdEvaluator,
    scorer: HealthScorer,
    classifier: TrendClassifier,
    policy: AlertPolicy,
}

impl Default for WaterQualityEngine {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

impl WaterQualityEngine {
    /// Engine for a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let evaluator = ThresholdEvaluator::new(config.warning_margin);
        Self {
            config,
            evaluator,
            scorer: HealthScorer::new(config.denominator),
            classifier: TrendClassifier::new(
                config.trend_stable_threshold_pct,
                config.moving_average_window,
            ),
            policy: AlertPolicy::new(evaluator),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate current readings with their history
    pub fn evaluate(
        &self,
        readings: &ReadingSet,
        history: &ReadingHistory,
        thresholds: &ThresholdConfig,
    ) -> TankReport {
        let evaluations: Vec<EvaluationResult> = Parameter::ALL
            .into_iter()
            .map(|parameter| {
                let value = readings.usable(parameter);
                EvaluationResult {
                    parameter,
                    value,
                    status: self.evaluator.classify(parameter, value, thresholds.get(parameter)),
                    trend: self.trend(&history.values(parameter)),
                }
            })
            .collect();

        let alerts = evaluations
            .iter()
            .filter_map(|e| {
                let value = e.value?;
                self.policy.raise(
                    e.parameter,
                    value,
                    e.status,
                    thresholds.get(e.parameter),
                    thresholds,
                )
            })
            .collect();

        TankReport {
            health: self.health(readings),
            alerts: AlertDecision { alerts },
            evaluations,
        }
    }

    /// Evaluate using the newest reading of each series as the current value
    pub fn evaluate_history(
        &self,
        history: &ReadingHistory,
        thresholds: &ThresholdConfig,
    ) -> TankReport {
        self.evaluate(&history.latest(), history, thresholds)
    }

    /// Status of a single reading
    pub fn classify(
        &self,
        parameter: Parameter,
        value: Option<f64>,
        thresholds: &ThresholdConfig,
    ) -> Status {
        self.evaluator.classify(parameter, value, thresholds.get(parameter))
    }

    /// Health score of a snapshot
    pub fn health(&self, readings: &ReadingSet) -> HealthScore {
        self.scorer.score(readings)
    }

    /// Alerts for a snapshot
    pub fn alerts(&self, readings: &ReadingSet, thresholds: &ThresholdConfig) -> AlertDecision {
        self.policy.decide(readings, thresholds)
    }

    /// Trend of a chronological series
    pub fn trend(&self, values: &[f64]) -> Trend {
        self.classifier.classify(values)
    }

    /// Chart trend line for a chronological series
    pub fn moving_average(&self, values: &[f64]) -> Vec<f64> {
        self.classifier.moving_average(values)
    }
}
