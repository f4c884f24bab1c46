//! Core evaluation engine for AquaGuard
//!
//! Turns raw aquarium sensor readings (temperature, pH, turbidity, ammonia)
//! into the numbers a tank dashboard shows:
//!
//! - per-parameter status against the user's safe thresholds
//! - a weighted 0-100% tank health score against the optimal bands
//! - rising / falling / stable trends and smoothed chart series
//! - which alerts fire, and on which channels
//!
//! Everything here is a pure function of its inputs. Readings and threshold
//! configurations are fetched and stored elsewhere (see `aquaguard-monitor`),
//! and results are recomputed on every call rather than cached.
//!
//! ```
//! use aquaguard_core::{Parameter, ReadingSet, ThresholdConfig, WaterQualityEngine, ReadingHistory};
//!
//! let engine = WaterQualityEngine::default();
//! let readings = ReadingSet::new()
//!     .with(Parameter::Ph, 7.0)
//!     .with(Parameter::Ammonia, 0.1)
//!     .with(Parameter::Temperature, 25.0)
//!     .with(Parameter::Turbidity, 1.5);
//!
//! let report = engine.evaluate(&readings, &ReadingHistory::new(), &ThresholdConfig::default());
//! assert_eq!(report.health.percent, 100.0);
//! assert!(report.alerts.is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod alerts;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod health;
pub mod insights;
pub mod parameter;
pub mod readings;
pub mod thresholds;
pub mod time;
pub mod traits;
pub mod trend;
pub mod validators;

// Public API
pub use alerts::{Alert, AlertDecision, AlertPolicy, Channel, Severity};
pub use config::{DenominatorPolicy, EngineConfig};
pub use engine::{EvaluationResult, TankReport, WaterQualityEngine};
pub use errors::{ConfigError, FieldErrors, ThresholdError};
pub use health::{HealthScore, HealthScorer, HealthTier};
pub use insights::{Insight, InsightKind};
pub use parameter::{Directionality, OptimalBand, Parameter, PhysicalBound};
pub use readings::{Reading, ReadingHistory, ReadingSeries, ReadingSet};
pub use thresholds::{ParameterThreshold, ThresholdConfig};
pub use traits::Validatable;
pub use trend::{moving_average, Trend, TrendClassifier, TrendDirection};
pub use validators::{validate_config, ParameterDraft, Status, ThresholdDraft, ThresholdEvaluator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
