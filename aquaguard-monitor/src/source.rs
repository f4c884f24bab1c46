//! Data access seam

use aquaguard_core::{Parameter, ReadingHistory, ReadingSeries, ReadingSet, ThresholdConfig};
use async_trait::async_trait;

use crate::DataSourceError;

/// Tank identifier
pub type TankId = u64;

/// Where tank readings and threshold configurations live
///
/// Implementations wrap whatever backend the deployment uses. The engine
/// only ever sees the values returned here.
#[async_trait]
pub trait TankDataSource: Send + Sync {
    /// Latest reading of each parameter; offline sensors are simply absent
    async fn latest_readings(&self, tank: TankId) -> Result<ReadingSet, DataSourceError>;

    /// Time-ordered samples of one parameter
    async fn history(
        &self,
        tank: TankId,
        parameter: Parameter,
    ) -> Result<ReadingSeries, DataSourceError>;

    /// Stored thresholds, `None` if the tank was never configured
    async fn thresholds(&self, tank: TankId) -> Result<Option<ThresholdConfig>, DataSourceError>;

    /// Persist thresholds for a tank
    async fn save_thresholds(
        &self,
        tank: TankId,
        config: &ThresholdConfig,
    ) -> Result<(), DataSourceError>;

    /// History of every parameter
    async fn full_history(&self, tank: TankId) -> Result<ReadingHistory, DataSourceError> {
        let mut history = ReadingHistory::new();
        for parameter in Parameter::ALL {
            history.insert(self.history(tank, parameter).await?);
        }
        Ok(history)
    }

    /// Stored thresholds, or the product defaults
    async fn thresholds_or_default(&self, tank: TankId) -> Result<ThresholdConfig, DataSourceError> {
        Ok(self.thresholds(tank).await?.unwrap_or_default())
    }
}
