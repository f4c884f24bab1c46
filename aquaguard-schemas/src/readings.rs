//! Reading and chart series shapes

use std::collections::BTreeMap;

use aquaguard_core::{
    time::Timestamp, Parameter, Reading, ReadingSeries, ReadingSet, WaterQualityEngine,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Parse an ISO-8601 / RFC 3339 timestamp into epoch milliseconds
pub fn parse_timestamp(text: &str) -> Result<Timestamp, SchemaError> {
    let invalid = || SchemaError::Timestamp {
        value: text.to_string(),
    };
    let parsed = DateTime::parse_from_rfc3339(text.trim()).map_err(|_| invalid())?;
    Timestamp::try_from(parsed.timestamp_millis()).map_err(|_| invalid())
}

/// Format epoch milliseconds as a UTC RFC 3339 timestamp, e.g.
/// `2024-03-01T12:00:00.000Z`
pub fn format_timestamp(timestamp: Timestamp) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One sensor reading on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDto {
    /// Measured value; `null` when the sensor reported garbage
    #[serde(default)]
    pub value: Option<f64>,
    /// Display unit; informational only
    #[serde(default)]
    pub unit: String,
    /// ISO-8601 timestamp
    pub timestamp: String,
}

impl ReadingDto {
    /// Wire form of a reading
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            value: Some(reading.value).filter(|v| v.is_finite()),
            unit: reading.parameter.unit().to_string(),
            timestamp: format_timestamp(reading.timestamp),
        }
    }

    /// Reading of `parameter`; a `null` value becomes NaN, which the engine
    /// classifies as unknown
    pub fn to_reading(&self, parameter: Parameter) -> Result<Reading, SchemaError> {
        Ok(Reading::new(
            parameter,
            self.value.unwrap_or(f64::NAN),
            parse_timestamp(&self.timestamp)?,
        ))
    }
}

/// Latest reading per parameter key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LatestReadingsDto(pub BTreeMap<String, ReadingDto>);

impl LatestReadingsDto {
    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wire form of the readings' latest values, stamped with `timestamp`
    pub fn from_reading_set(readings: &ReadingSet, timestamp: Timestamp) -> Self {
        let stamped = format_timestamp(timestamp);
        Self(
            readings
                .iter()
                .map(|(parameter, value)| {
                    let dto = ReadingDto {
                        value: Some(value).filter(|v| v.is_finite()),
                        unit: parameter.unit().to_string(),
                        timestamp: stamped.clone(),
                    };
                    (parameter.key().to_string(), dto)
                })
                .collect(),
        )
    }

    /// Typed readings; unknown keys are an error
    pub fn to_readings(&self) -> Result<Vec<Reading>, SchemaError> {
        self.0
            .iter()
            .map(|(key, dto)| {
                let parameter = Parameter::from_key(key)
                    .ok_or_else(|| SchemaError::UnknownParameter(key.clone()))?;
                dto.to_reading(parameter)
            })
            .collect()
    }

    /// Current-value snapshot for the engine
    pub fn to_reading_set(&self) -> Result<ReadingSet, SchemaError> {
        Ok(ReadingSet::from_latest(&self.to_readings()?))
    }
}

/// Chart series: parallel labels and values, oldest first
///
/// A `null` value is a gap in the chart and is left out of the typed series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeriesDto {
    /// X-axis labels (ISO-8601 timestamps)
    pub labels: Vec<String>,
    /// Y-axis values
    pub values: Vec<Option<f64>>,
}

impl TrendSeriesDto {
    /// Wire form of a series
    pub fn from_series(series: &ReadingSeries) -> Self {
        Self {
            labels: series
                .readings()
                .iter()
                .map(|r| format_timestamp(r.timestamp))
                .collect(),
            values: series
                .readings()
                .iter()
                .map(|r| Some(r.value).filter(|v| v.is_finite()))
                .collect(),
        }
    }

    /// Typed series of `parameter`
    ///
    /// Labels and values must pair up one-to-one and every label must be a
    /// timestamp, including those of gaps.
    pub fn to_series(&self, parameter: Parameter) -> Result<ReadingSeries, SchemaError> {
        if self.labels.len() != self.values.len() {
            return Err(SchemaError::SeriesLength {
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }

        let mut readings = Vec::with_capacity(self.values.len());
        for (label, value) in self.labels.iter().zip(&self.values) {
            let timestamp = parse_timestamp(label)?;
            if let Some(value) = value {
                readings.push(Reading::new(parameter, *value, timestamp));
            }
        }
        Ok(ReadingSeries::from_readings(parameter, readings))
    }
}

/// Trend chart data: the series, its moving average and its trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDto {
    /// Parameter key
    pub parameter: String,
    /// Display unit
    pub unit: String,
    /// X-axis labels
    pub labels: Vec<String>,
    /// Raw values
    pub values: Vec<f64>,
    /// Moving average, same length as `values`
    pub trend_line: Vec<f64>,
    /// `rising`, `falling` or `stable`
    pub direction: String,
    /// Signed change in percent
    pub change_percent: f64,
}

impl ChartDto {
    /// Build chart data for a series with the engine's smoothing and trend
    pub fn build(series: &ReadingSeries, engine: &WaterQualityEngine) -> Self {
        let labels = TrendSeriesDto::from_series(series).labels;
        let values = series.values();
        let trend = engine.trend(&values);
        Self {
            parameter: series.parameter().key().to_string(),
            unit: series.parameter().unit().to_string(),
            labels,
            trend_line: engine.moving_average(&values),
            values,
            direction: trend.direction.as_str().to_string(),
            change_percent: trend.change_percent,
        }
    }
}
