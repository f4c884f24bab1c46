//! Common fixtures for integration tests
//!
//! This module provides:
//! - Reading snapshots for healthy and troubled tanks
//! - Hourly history builders
//! - Named scenarios with their expected outcomes

#![allow(dead_code)]

use aquaguard_core::{
    time::Timestamp, Parameter, Reading, ReadingHistory, ReadingSeries, ReadingSet,
};

pub mod scenarios;

/// One hour in milliseconds
pub const HOUR_MS: u64 = 3_600_000;

/// Start of every generated history
pub const START: Timestamp = 1_700_000_000_000;

/// Every parameter inside its optimal band
pub fn optimal_readings() -> ReadingSet {
    ReadingSet::new()
        .with(Parameter::Ph, 7.0)
        .with(Parameter::Ammonia, 0.1)
        .with(Parameter::Temperature, 25.0)
        .with(Parameter::Turbidity, 1.5)
}

/// pH and ammonia out of their optimal bands
pub fn acidic_ammonia_spike() -> ReadingSet {
    ReadingSet::new()
        .with(Parameter::Ph, 6.0)
        .with(Parameter::Ammonia, 0.5)
        .with(Parameter::Temperature, 25.0)
        .with(Parameter::Turbidity, 1.5)
}

/// Hourly series for one parameter starting at [`START`]
pub fn hourly(parameter: Parameter, values: &[f64]) -> ReadingSeries {
    ReadingSeries::from_values(parameter, START, HOUR_MS, values)
}

/// History with hourly series for several parameters
pub fn hourly_history(series: &[(Parameter, &[f64])]) -> ReadingHistory {
    let mut history = ReadingHistory::new();
    for (parameter, values) in series {
        history.insert(hourly(*parameter, values));
    }
    history
}

/// Raw readings, newest first, the way an API page returns them
pub fn newest_first(parameter: Parameter, values: &[f64]) -> Vec<Reading> {
    let mut readings = hourly(parameter, values).readings().to_vec();
    readings.reverse();
    readings
}
