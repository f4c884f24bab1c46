//! JSON Wire Shapes for the AquaGuard Evaluation Engine
//!
//! ## Overview
//!
//! `aquaguard-core` speaks plain Rust types and never touches serde. This
//! crate is the boundary where those types meet JSON: tank APIs, dashboards
//! and configuration files. Every shape here uses camelCase keys, matching
//! what the web dashboard sends and expects.
//!
//! ## Shapes
//!
//! ### Reading
//! ```json
//! { "value": 7.1, "unit": "", "timestamp": "2024-03-01T12:00:00Z" }
//! ```
//!
//! A `null` (or absent) `value` means the sensor reported something that is
//! not a number; that parameter evaluates as unknown.
//!
//! Latest readings arrive keyed by parameter:
//! `{ "ph": {...}, "temperature": {...} }`. Missing keys mean the sensor is
//! offline; unknown keys are rejected.
//!
//! ### Threshold configuration
//! ```json
//! {
//!   "globalAlertsEnabled": true,
//!   "emailAlertsEnabled": true,
//!   "inAppAlertsEnabled": false,
//!   "temperature": { "enabled": true, "min": 22, "max": 28 },
//!   "ph":          { "enabled": true, "min": 6.5, "max": 7.5 },
//!   "turbidity":   { "enabled": true, "max": 5 },
//!   "ammonia":     { "enabled": false, "max": 0.25 }
//! }
//! ```
//!
//! Sections and toggles left out are filled from the product defaults, so a
//! partial document from an older client still loads. A section that is
//! present replaces its default as a whole.
//!
//! ### Field errors
//! ```json
//! { "ph": "Min must be less than max", "ammonia": "Value must be between 0 and 5" }
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use aquaguard_schemas::thresholds::parse_thresholds;
//!
//! let config = parse_thresholds(r#"{ "emailAlertsEnabled": false }"#)?;
//! assert!(!config.email_alerts_enabled);
//! assert_eq!(config.ph.max, 7.5);
//! # Ok::<(), aquaguard_schemas::SchemaError>(())
//! ```

use std::path::PathBuf;

use aquaguard_core::{ConfigError, FieldErrors};
use thiserror::Error;

pub mod config;
pub mod constraints;
pub mod evaluation;
pub mod readings;
pub mod thresholds;

pub use config::{load_engine_config, parse_engine_config, save_engine_config, EngineConfigDto};
pub use constraints::ParameterConstraints;
pub use evaluation::{AlertDto, EvaluationDto, HealthScoreDto, InsightDto, TankReportDto};
pub use readings::{
    format_timestamp, parse_timestamp, ChartDto, LatestReadingsDto, ReadingDto, TrendSeriesDto,
};
pub use thresholds::{
    field_error_map, parse_thresholds, thresholds_to_json, MaxThresholdDto, RangeThresholdDto,
    ThresholdConfigDto,
};

/// Schema-related errors
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Malformed JSON or wrong field types
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp not in ISO-8601 / RFC 3339 form, or before the epoch
    #[error("Invalid timestamp: {value}")]
    Timestamp {
        /// Offending text
        value: String,
    },

    /// Chart labels and values that do not pair up
    #[error("Series has {labels} labels but {values} values")]
    SeriesLength {
        /// Number of labels
        labels: usize,
        /// Number of values
        values: usize,
    },

    /// Key that is not a tracked parameter
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Threshold values that failed validation
    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] FieldErrors),

    /// Engine configuration values out of range
    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file could not be read or written
    #[error("Failed to access {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
