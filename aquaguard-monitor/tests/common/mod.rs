//! Shared fixtures for monitor integration tests

#![allow(dead_code)]

use aquaguard_core::{
    Parameter, ReadingHistory, ReadingSeries, ReadingSet, ThresholdConfig,
};
use aquaguard_monitor::{DataSourceError, InMemoryDataSource, TankDataSource, TankId};
use async_trait::async_trait;
use tokio::sync::Notify;

pub const HOUR_MS: u64 = 3_600_000;
pub const START: u64 = 1_709_294_400_000;

/// Every parameter inside its optimal band
pub fn healthy_readings() -> ReadingSet {
    ReadingSet::new()
        .with(Parameter::Temperature, 25.0)
        .with(Parameter::Ph, 7.0)
        .with(Parameter::Turbidity, 1.5)
        .with(Parameter::Ammonia, 0.1)
}

/// Acidic tank with an ammonia spike
pub fn acidic_readings() -> ReadingSet {
    ReadingSet::new()
        .with(Parameter::Temperature, 25.0)
        .with(Parameter::Ph, 6.0)
        .with(Parameter::Turbidity, 1.5)
        .with(Parameter::Ammonia, 0.5)
}

/// Temperature climbing about 5% over a day of hourly samples
pub fn warming_history() -> ReadingHistory {
    let mut history = ReadingHistory::new();
    history.insert(ReadingSeries::from_values(
        Parameter::Temperature,
        START,
        HOUR_MS,
        &[23.8, 24.0, 24.0, 24.2, 25.0, 25.2, 25.2, 25.4],
    ));
    history
}

/// Store holding tank 1 (healthy) and tank 2 (acidic)
pub async fn two_tanks() -> InMemoryDataSource {
    let source = InMemoryDataSource::new();
    source.insert_latest(1, healthy_readings()).await;
    source.insert_history(1, warming_history()).await;
    source.insert_latest(2, acidic_readings()).await;
    source
}

/// Source whose fetches for one tank block until released
pub struct GatedSource {
    pub inner: InMemoryDataSource,
    pub slow_tank: TankId,
    pub started: Notify,
    pub release: Notify,
}

impl GatedSource {
    pub fn new(inner: InMemoryDataSource, slow_tank: TankId) -> Self {
        Self {
            inner,
            slow_tank,
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl TankDataSource for GatedSource {
    async fn latest_readings(&self, tank: TankId) -> Result<ReadingSet, DataSourceError> {
        if tank == self.slow_tank {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.inner.latest_readings(tank).await
    }

    async fn history(
        &self,
        tank: TankId,
        parameter: Parameter,
    ) -> Result<ReadingSeries, DataSourceError> {
        self.inner.history(tank, parameter).await
    }

    async fn thresholds(&self, tank: TankId) -> Result<Option<ThresholdConfig>, DataSourceError> {
        self.inner.thresholds(tank).await
    }

    async fn save_thresholds(
        &self,
        tank: TankId,
        config: &ThresholdConfig,
    ) -> Result<(), DataSourceError> {
        self.inner.save_thresholds(tank, config).await
    }
}
