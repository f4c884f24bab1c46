//! Sensor Readings: single samples, current snapshots and history
//!
//! Three shapes cover every caller:
//!
//! - [`Reading`]: one `{parameter, value, timestamp}` sample
//! - [`ReadingSet`]: the current value of each parameter, any of which may be
//!   missing (sensor offline)
//! - [`ReadingSeries`] / [`ReadingHistory`]: time-ordered samples per parameter
//!   for trends and charts
//!
//! ## Ordering
//!
//! A series is always sorted ascending by timestamp, whatever order the
//! samples arrived in. Two samples with the same timestamp cannot both be
//! right, so the one supplied last wins.

use std::collections::BTreeMap;

use crate::parameter::Parameter;
use crate::time::Timestamp;
use crate::traits::Validatable;

/// Single reading with timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Which parameter was measured
    pub parameter: Parameter,
    /// Measured value in the parameter's unit
    pub value: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: Timestamp,
}

impl Reading {
    /// Create a reading
    pub fn new(parameter: Parameter, value: f64, timestamp: Timestamp) -> Self {
        Self {
            parameter,
            value,
            timestamp,
        }
    }

    /// Whether the value is a real measurement
    pub fn is_valid(&self) -> bool {
        self.value.is_valid()
    }
}

/// Current value of each parameter
///
/// Stores whatever the sensor reported, including NaN. Use [`usable`] when a
/// trustworthy number is needed.
///
/// [`usable`]: ReadingSet::usable
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadingSet {
    values: [Option<f64>; Parameter::COUNT],
}

impl ReadingSet {
    /// Empty set: every sensor offline
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.set(parameter, value);
        self
    }

    /// Set the current value of a parameter
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        self.values[parameter.index()] = Some(value);
    }

    /// Mark a parameter as missing
    pub fn clear(&mut self, parameter: Parameter) {
        self.values[parameter.index()] = None;
    }

    /// Raw value as reported, possibly non-finite
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.values[parameter.index()]
    }

    /// Value only if it is a finite number
    pub fn usable(&self, parameter: Parameter) -> Option<f64> {
        self.get(parameter).filter(Validatable::is_valid)
    }

    /// Parameters with a usable value, in parameter order
    pub fn measured(&self) -> impl Iterator<Item = Parameter> + '_ {
        Parameter::ALL
            .into_iter()
            .filter(move |p| self.usable(*p).is_some())
    }

    /// Present values (raw) in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|v| (p, v)))
    }

    /// True when no parameter has any value
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Latest value per parameter from an unordered batch of readings
    ///
    /// On a timestamp tie the reading that comes later in the batch wins.
    pub fn from_latest<'a, I>(readings: I) -> Self
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        let mut latest: [Option<&Reading>; Parameter::COUNT] = [None; Parameter::COUNT];
        for reading in readings {
            let index = reading.parameter.index();
            let newer = match latest[index] {
                Some(current) => reading.timestamp >= current.timestamp,
                None => true,
            };
            if newer {
                latest[index] = Some(reading);
            }
        }

        let mut set = Self::new();
        for reading in latest.into_iter().flatten() {
            set.set(reading.parameter, reading.value);
        }
        set
    }
}

impl FromIterator<(Parameter, f64)> for ReadingSet {
    fn from_iter<I: IntoIterator<Item = (Parameter, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (parameter, value) in iter {
            set.set(parameter, value);
        }
        set
    }
}

/// Time-ordered readings of one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSeries {
    parameter: Parameter,
    readings: Vec<Reading>,
}

impl ReadingSeries {
    /// Empty series
    pub fn new(parameter: Parameter) -> Self {
        Self {
            parameter,
            readings: Vec::new(),
        }
    }

    /// Build a series from readings in any order
    ///
    /// Readings of other parameters are dropped. Samples are sorted by
    /// timestamp and duplicate timestamps collapse to the last one supplied.
    pub fn from_readings<I>(parameter: Parameter, readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut samples: Vec<Reading> = readings
            .into_iter()
            .filter(|r| {
                let matches = r.parameter == parameter;
                if !matches {
                    log_debug!(
                        "Dropping {} reading from {} series",
                        r.parameter.key(),
                        parameter.key()
                    );
                }
                matches
            })
            .collect();

        // Stable sort keeps arrival order among equal timestamps
        samples.sort_by_key(|r| r.timestamp);

        let mut readings: Vec<Reading> = Vec::with_capacity(samples.len());
        for sample in samples {
            match readings.last_mut() {
                Some(last) if last.timestamp == sample.timestamp => *last = sample,
                _ => readings.push(sample),
            }
        }

        Self { parameter, readings }
    }

    /// Series built from plain values at a fixed sampling interval
    pub fn from_values(parameter: Parameter, start: Timestamp, interval_ms: u64, values: &[f64]) -> Self {
        let readings = values
            .iter()
            .enumerate()
            .map(|(i, v)| Reading::new(parameter, *v, start + i as u64 * interval_ms))
            .collect();
        Self { parameter, readings }
    }

    /// Append a reading, keeping the series ordered
    pub fn push(&mut self, reading: Reading) {
        if reading.parameter != self.parameter {
            log_warn!(
                "Ignoring {} reading pushed onto {} series",
                reading.parameter.key(),
                self.parameter.key()
            );
            return;
        }

        match self.readings.last() {
            Some(last) if last.timestamp < reading.timestamp => self.readings.push(reading),
            None => self.readings.push(reading),
            Some(_) => {
                let mut all = core::mem::take(&mut self.readings);
                all.push(reading);
                *self = Self::from_readings(self.parameter, all);
            }
        }
    }

    /// Which parameter this series tracks
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Readings oldest first
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Values oldest first
    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.value).collect()
    }

    /// Most recent reading
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Reading series for every parameter of one tank
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingHistory {
    series: BTreeMap<Parameter, ReadingSeries>,
}

impl ReadingHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a mixed batch of readings into per-parameter series
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut grouped: BTreeMap<Parameter, Vec<Reading>> = BTreeMap::new();
        for reading in readings {
            grouped.entry(reading.parameter).or_default().push(reading);
        }

        let series = grouped
            .into_iter()
            .map(|(p, rs)| (p, ReadingSeries::from_readings(p, rs)))
            .collect();
        Self { series }
    }

    /// Replace the series of its parameter
    pub fn insert(&mut self, series: ReadingSeries) {
        self.series.insert(series.parameter(), series);
    }

    /// Series for a parameter, if any readings exist
    pub fn get(&self, parameter: Parameter) -> Option<&ReadingSeries> {
        self.series.get(&parameter)
    }

    /// Values of a parameter oldest first; empty when unknown
    pub fn values(&self, parameter: Parameter) -> Vec<f64> {
        self.get(parameter).map(ReadingSeries::values).unwrap_or_default()
    }

    /// Latest value of every parameter that has history
    pub fn latest(&self) -> ReadingSet {
        ReadingSet::from_latest(self.series.values().filter_map(ReadingSeries::latest))
    }

    /// True when no parameter has readings
    pub fn is_empty(&self) -> bool {
        self.series.values().all(ReadingSeries::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_set_separates_raw_and_usable() {
        let set = ReadingSet::new()
            .with(Parameter::Ph, 7.0)
            .with(Parameter::Ammonia, f64::NAN);

        assert_eq!(set.get(Parameter::Ph), Some(7.0));
        assert!(set.get(Parameter::Ammonia).is_some());
        assert_eq!(set.usable(Parameter::Ammonia), None);
        assert_eq!(set.usable(Parameter::Temperature), None);
        assert_eq!(set.measured().collect::<Vec<_>>(), vec![Parameter::Ph]);
    }

    #[test]
    fn series_sorts_and_collapses_duplicates() {
        let series = ReadingSeries::from_readings(
            Parameter::Temperature,
            vec![
                Reading::new(Parameter::Temperature, 26.0, 3000),
                Reading::new(Parameter::Temperature, 24.0, 1000),
                Reading::new(Parameter::Temperature, 25.0, 2000),
                Reading::new(Parameter::Temperature, 25.5, 2000),
                Reading::new(Parameter::Ph, 7.0, 1500),
            ],
        );

        assert_eq!(series.values(), vec![24.0, 25.5, 26.0]);
        assert_eq!(series.latest().map(|r| r.timestamp), Some(3000));
    }

    #[test]
    fn push_out_of_order_keeps_series_sorted() {
        let mut series = ReadingSeries::new(Parameter::Ph);
        series.push(Reading::new(Parameter::Ph, 7.0, 2000));
        series.push(Reading::new(Parameter::Ph, 6.9, 1000));
        series.push(Reading::new(Parameter::Ph, 7.2, 3000));
        series.push(Reading::new(Parameter::Ammonia, 0.1, 4000));

        assert_eq!(series.values(), vec![6.9, 7.0, 7.2]);
    }

    #[test]
    fn history_latest_picks_newest_per_parameter() {
        let history = ReadingHistory::from_readings(vec![
            Reading::new(Parameter::Ph, 6.9, 1000),
            Reading::new(Parameter::Ph, 7.1, 2000),
            Reading::new(Parameter::Turbidity, 1.5, 500),
        ]);

        let latest = history.latest();
        assert_eq!(latest.get(Parameter::Ph), Some(7.1));
        assert_eq!(latest.get(Parameter::Turbidity), Some(1.5));
        assert_eq!(latest.get(Parameter::Ammonia), None);
        assert!(history.values(Parameter::Ammonia).is_empty());
    }

    #[test]
    fn from_latest_prefers_later_entry_on_tie() {
        let readings = [
            Reading::new(Parameter::Ammonia, 0.1, 1000),
            Reading::new(Parameter::Ammonia, 0.2, 1000),
        ];
        assert_eq!(ReadingSet::from_latest(&readings).get(Parameter::Ammonia), Some(0.2));
    }
}
