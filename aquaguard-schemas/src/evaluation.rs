//! Engine output shapes for dashboards
//!
//! Output only: these mirror core results one-to-one and are built with
//! `From`. Enum values go out as their lower-case wire names.

use aquaguard_core::{
    Alert, EvaluationResult, HealthScore, Insight, TankReport,
};
use serde::{Deserialize, Serialize};

/// Health score: `{ score, maxScore, percent, tier }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreDto {
    /// Sum of weights of optimal parameters
    pub score: f64,
    /// Denominator
    pub max_score: f64,
    /// Whole-number percentage as displayed
    pub percent: i64,
    /// `happy`, `neutral` or `concerned`
    pub tier: String,
    /// Keys of parameters in their optimal band
    pub optimal: Vec<String>,
}

impl From<&HealthScore> for HealthScoreDto {
    fn from(health: &HealthScore) -> Self {
        Self {
            score: health.score,
            max_score: health.max_score,
            percent: health.rounded_percent(),
            tier: health.tier.as_str().to_string(),
            optimal: health.optimal.iter().map(|p| p.key().to_string()).collect(),
        }
    }
}

/// Per-parameter result: `{ parameter, value, status, trend, changePercent }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    /// Parameter key
    pub parameter: String,
    /// Current value; null when the sensor is offline
    pub value: Option<f64>,
    /// `optimal`, `warning`, `critical` or `unknown`
    pub status: String,
    /// `rising`, `falling` or `stable`
    pub trend: String,
    /// Signed trend change in percent
    pub change_percent: f64,
}

impl From<&EvaluationResult> for EvaluationDto {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            parameter: result.parameter.key().to_string(),
            value: result.value,
            status: result.status.as_str().to_string(),
            trend: result.trend.direction.as_str().to_string(),
            change_percent: result.trend.change_percent,
        }
    }
}

/// Raised alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    /// Parameter key
    pub parameter: String,
    /// `warning` or `critical`
    pub severity: String,
    /// Triggering value
    pub value: f64,
    /// Human-readable explanation
    pub message: String,
    /// `email` / `inApp`; empty when suppressed
    pub channels: Vec<String>,
}

impl From<&Alert> for AlertDto {
    fn from(alert: &Alert) -> Self {
        Self {
            parameter: alert.parameter.key().to_string(),
            severity: alert.severity.as_str().to_string(),
            value: alert.value,
            message: alert.message.clone(),
            channels: alert.channels.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }
}

/// Trend note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightDto {
    /// `success`, `warning` or `info`
    #[serde(rename = "type")]
    pub kind: String,
    /// Icon for the note
    pub icon: String,
    /// Note text
    pub text: String,
}

impl From<&Insight> for InsightDto {
    fn from(insight: &Insight) -> Self {
        Self {
            kind: insight.kind.as_str().to_string(),
            icon: insight.icon.to_string(),
            text: insight.text.clone(),
        }
    }
}

/// Everything the dashboard needs for one tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankReportDto {
    /// One entry per parameter
    pub evaluations: Vec<EvaluationDto>,
    /// Weighted health score
    pub health: HealthScoreDto,
    /// Raised alerts
    pub alerts: Vec<AlertDto>,
    /// Trend notes
    pub insights: Vec<InsightDto>,
}

impl From<&TankReport> for TankReportDto {
    fn from(report: &TankReport) -> Self {
        Self {
            evaluations: report.evaluations.iter().map(EvaluationDto::from).collect(),
            health: HealthScoreDto::from(&report.health),
            alerts: report.alerts.alerts.iter().map(AlertDto::from).collect(),
            insights: report.insights().iter().map(InsightDto::from).collect(),
        }
    }
}
