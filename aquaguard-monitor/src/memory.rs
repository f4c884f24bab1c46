//! In-memory tank store

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use aquaguard_core::{Parameter, ReadingHistory, ReadingSeries, ReadingSet, ThresholdConfig};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::source::{TankDataSource, TankId};
use crate::DataSourceError;

#[derive(Debug, Clone, Default)]
struct TankRecord {
    latest: ReadingSet,
    history: ReadingHistory,
    thresholds: Option<ThresholdConfig>,
}

/// [`TankDataSource`] kept in process memory
///
/// Tanks exist once anything has been inserted for them; unknown ids report
/// [`DataSourceError::NotFound`]. Saves can be made to fail to exercise
/// error paths.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    tanks: RwLock<HashMap<TankId, TankRecord>>,
    fail_saves: AtomicBool,
}

impl InMemoryDataSource {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest readings of a tank
    pub async fn insert_latest(&self, tank: TankId, readings: ReadingSet) {
        self.tanks.write().await.entry(tank).or_default().latest = readings;
    }

    /// Replace the history of a tank
    pub async fn insert_history(&self, tank: TankId, history: ReadingHistory) {
        self.tanks.write().await.entry(tank).or_default().history = history;
    }

    /// Store thresholds directly, bypassing [`fail_saves`](Self::fail_saves)
    pub async fn insert_thresholds(&self, tank: TankId, config: ThresholdConfig) {
        self.tanks.write().await.entry(tank).or_default().thresholds = Some(config);
    }

    /// Make every following save fail (or succeed again)
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    async fn with_tank<T>(
        &self,
        tank: TankId,
        read: impl FnOnce(&TankRecord) -> T + Send,
    ) -> Result<T, DataSourceError> {
        let tanks = self.tanks.read().await;
        tanks
            .get(&tank)
            .map(read)
            .ok_or(DataSourceError::NotFound { tank })
    }
}

#[async_trait]
impl TankDataSource for InMemoryDataSource {
    async fn latest_readings(&self, tank: TankId) -> Result<ReadingSet, DataSourceError> {
        self.with_tank(tank, |record| record.latest).await
    }

    async fn history(
        &self,
        tank: TankId,
        parameter: Parameter,
    ) -> Result<ReadingSeries, DataSourceError> {
        self.with_tank(tank, |record| {
            record
                .history
                .get(parameter)
                .cloned()
                .unwrap_or_else(|| ReadingSeries::new(parameter))
        })
        .await
    }

    async fn thresholds(&self, tank: TankId) -> Result<Option<ThresholdConfig>, DataSourceError> {
        self.with_tank(tank, |record| record.thresholds.clone()).await
    }

    async fn save_thresholds(
        &self,
        tank: TankId,
        config: &ThresholdConfig,
    ) -> Result<(), DataSourceError> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(DataSourceError::Backend("store unavailable".to_string()));
        }
        self.tanks.write().await.entry(tank).or_default().thresholds = Some(config.clone());
        Ok(())
    }
}
