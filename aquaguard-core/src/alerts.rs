//! Alert Decision and Channel Routing
//!
//! ## Overview
//!
//! Turns a snapshot of readings plus a tank's [`ThresholdConfig`] into the
//! alerts that should be raised and where each one goes.
//!
//! An alert is *raised* when an enabled parameter evaluates to `Warning` or
//! `Critical`. It is *delivered* on a channel only when three switches agree:
//!
//! ```text
//! globalAlertsEnabled ─┬─ emailAlertsEnabled ─┬─ parameter.enabled ──► Email
//!                      └─ inAppAlertsEnabled ─┴─ parameter.enabled ──► InApp
//! ```
//!
//! With the global switch off alerts are still raised (a dashboard can show
//! them) but their channel list is empty. `Unknown` readings raise nothing:
//! an offline sensor is not an emergency this layer can judge.

use core::fmt;

use crate::{
    parameter::Parameter,
    readings::ReadingSet,
    thresholds::{ParameterThreshold, ThresholdConfig},
    validators::{Status, ThresholdEvaluator},
};

/// Notification channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Email notification
    Email,
    /// In-app notification
    InApp,
}

impl Channel {
    /// Every channel, in routing order
    pub const ALL: [Channel; 2] = [Channel::Email, Channel::InApp];

    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::InApp => "inApp",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Close to a threshold
    Warning,
    /// Past a threshold
    Critical,
}

impl Severity {
    /// Severity for an evaluation status, if it warrants an alert
    pub fn from_status(status: Status) -> Option<Self> {
        match status {
            Status::Warning => Some(Severity::Warning),
            Status::Critical => Some(Severity::Critical),
            Status::Optimal | Status::Unknown => None,
        }
    }

    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raised alert
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Offending parameter
    pub parameter: Parameter,
    /// Warning or critical
    pub severity: Severity,
    /// The reading that triggered it
    pub value: f64,
    /// Human-readable explanation
    pub message: String,
    /// Channels it is delivered on; empty when suppressed
    pub channels: Vec<Channel>,
}

impl Alert {
    /// Whether any channel will carry this alert
    pub fn is_delivered(&self) -> bool {
        !self.channels.is_empty()
    }

    /// Whether this alert goes out on `channel`
    pub fn delivered_on(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}

/// Every alert raised for one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDecision {
    /// Raised alerts in parameter order
    pub alerts: Vec<Alert>,
}

impl AlertDecision {
    /// True when nothing was raised
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Number of raised alerts
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Alerts that reach at least one channel
    pub fn deliveries(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_delivered())
    }

    /// Alerts delivered on one channel
    pub fn for_channel(&self, channel: Channel) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |a| a.delivered_on(channel))
    }

    /// Number of alerts reaching at least one channel
    pub fn delivered_count(&self) -> usize {
        self.deliveries().count()
    }

    /// Alert for a parameter, if one was raised
    pub fn get(&self, parameter: Parameter) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.parameter == parameter)
    }
}

/// Decides which alerts to raise and where to send them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlertPolicy {
    evaluator: ThresholdEvaluator,
}

impl AlertPolicy {
    /// Policy classifying with the given evaluator
    pub fn new(evaluator: ThresholdEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluate every enabled parameter and route the resulting alerts
    pub fn decide(&self, readings: &ReadingSet, thresholds: &ThresholdConfig) -> AlertDecision {
        let alerts = thresholds
            .iter()
            .filter(|(_, threshold)| threshold.enabled)
            .filter_map(|(parameter, threshold)| {
                let value = readings.usable(parameter)?;
                let status = self.evaluator.classify(parameter, Some(value), threshold);
                self.raise(parameter, value, status, threshold, thresholds)
            })
            .collect();

        AlertDecision { alerts }
    }

    /// Alert for an already-evaluated reading, if its status warrants one
    pub fn raise(
        &self,
        parameter: Parameter,
        value: f64,
        status: Status,
        threshold: &ParameterThreshold,
        thresholds: &ThresholdConfig,
    ) -> Option<Alert> {
        if !threshold.enabled {
            return None;
        }
        let severity = Severity::from_status(status)?;
        let channels = thresholds.delivery_channels(parameter);
        if channels.is_empty() {
            log_debug!("{} alert raised but not delivered", parameter.key());
        }

        Some(Alert {
            parameter,
            severity,
            value,
            message: alert_message(parameter, value, severity, threshold),
            channels,
        })
    }
}

/// Message text, e.g. `pH is 6, below the minimum of 6.5`
fn alert_message(
    parameter: Parameter,
    value: f64,
    severity: Severity,
    threshold: &ParameterThreshold,
) -> String {
    let min = threshold.min.filter(|_| parameter.has_min());
    let low_side = match min {
        Some(min) => value < (min + threshold.max) / 2.0,
        None => false,
    };

    let (relation, edge) = match (severity, low_side, min) {
        (Severity::Critical, true, Some(min)) => ("below the minimum of", min),
        (Severity::Warning, true, Some(min)) => ("approaching the minimum of", min),
        (Severity::Critical, _, _) => ("above the maximum of", threshold.max),
        (Severity::Warning, _, _) => ("approaching the maximum of", threshold.max),
    };

    format!(
        "{} is {}, {} {}",
        parameter.label(),
        parameter.format_value(value),
        relation,
        parameter.format_value(edge)
    )
}
