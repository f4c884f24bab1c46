//! Engine configuration files
//!
//! ```json
//! {
//!   "warningMargin": 0.1,
//!   "trendStableThresholdPct": 2.0,
//!   "movingAverageWindow": 5,
//!   "denominator": "presentOnly"
//! }
//! ```
//!
//! Every key is optional; omitted keys keep their defaults. Loaded values are
//! checked with [`EngineConfig::validate`] before they are returned.

use std::fs;
use std::path::Path;

use aquaguard_core::{DenominatorPolicy, EngineConfig};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Health denominator on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DenominatorDto {
    /// Divide by the weights of measured parameters
    PresentOnly,
    /// Divide by the total weight
    AllParameters,
}

impl From<DenominatorPolicy> for DenominatorDto {
    fn from(policy: DenominatorPolicy) -> Self {
        match policy {
            DenominatorPolicy::PresentOnly => DenominatorDto::PresentOnly,
            DenominatorPolicy::AllParameters => DenominatorDto::AllParameters,
        }
    }
}

impl From<DenominatorDto> for DenominatorPolicy {
    fn from(dto: DenominatorDto) -> Self {
        match dto {
            DenominatorDto::PresentOnly => DenominatorPolicy::PresentOnly,
            DenominatorDto::AllParameters => DenominatorPolicy::AllParameters,
        }
    }
}

/// Engine configuration document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfigDto {
    /// Warning zone as a fraction of band width
    pub warning_margin: f64,
    /// Stable-trend threshold in percent
    pub trend_stable_threshold_pct: f64,
    /// Moving-average window in samples
    pub moving_average_window: usize,
    /// Health denominator policy
    pub denominator: DenominatorDto,
}

impl Default for EngineConfigDto {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for EngineConfigDto {
    fn from(config: &EngineConfig) -> Self {
        Self {
            warning_margin: config.warning_margin,
            trend_stable_threshold_pct: config.trend_stable_threshold_pct,
            moving_average_window: config.moving_average_window,
            denominator: config.denominator.into(),
        }
    }
}

impl TryFrom<EngineConfigDto> for EngineConfig {
    type Error = SchemaError;

    fn try_from(dto: EngineConfigDto) -> Result<Self, Self::Error> {
        let config = EngineConfig {
            warning_margin: dto.warning_margin,
            trend_stable_threshold_pct: dto.trend_stable_threshold_pct,
            moving_average_window: dto.moving_average_window,
            denominator: dto.denominator.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse and validate an engine configuration from JSON text
pub fn parse_engine_config(json: &str) -> Result<EngineConfig, SchemaError> {
    let dto: EngineConfigDto = serde_json::from_str(json)?;
    EngineConfig::try_from(dto)
}

/// Load and validate an engine configuration file
pub fn load_engine_config(path: impl AsRef<Path>) -> Result<EngineConfig, SchemaError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_engine_config(&text)
}

/// Write an engine configuration file as pretty JSON
pub fn save_engine_config(path: impl AsRef<Path>, config: &EngineConfig) -> Result<(), SchemaError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(&EngineConfigDto::from(config))?;
    fs::write(path, text).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })
}
