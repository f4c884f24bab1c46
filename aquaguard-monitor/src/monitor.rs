//! Tank refresh loop step: fetch, evaluate, drop if stale

use std::sync::Arc;

use aquaguard_core::time::{SystemTime, TimeSource, Timestamp};
use aquaguard_core::{ReadingHistory, ReadingSet, TankReport, ThresholdConfig, WaterQualityEngine};

use crate::generation::RequestGenerations;
use crate::source::{TankDataSource, TankId};
use crate::DataSourceError;

/// Evaluated state of one tank at one moment
#[derive(Debug, Clone, PartialEq)]
pub struct TankSnapshot {
    /// Tank the data belongs to
    pub tank: TankId,
    /// Readings the report was computed from
    pub readings: ReadingSet,
    /// Thresholds in force, defaults if none were stored
    pub thresholds: ThresholdConfig,
    /// Engine output
    pub report: TankReport,
    /// When the report was computed
    pub evaluated_at: Timestamp,
}

/// Fetches tank data and runs the engine over it
///
/// Only the most recent [`refresh`](Self::refresh) produces a snapshot. One
/// that finishes after a newer refresh has started yields `Ok(None)`, even
/// when its fetch failed.
pub struct TankMonitor<S> {
    source: S,
    engine: WaterQualityEngine,
    generations: RequestGenerations,
    clock: Arc<dyn TimeSource>,
}

impl<S: TankDataSource> TankMonitor<S> {
    /// Monitor with the default engine and the system clock
    pub fn new(source: S) -> Self {
        Self {
            source,
            engine: WaterQualityEngine::default(),
            generations: RequestGenerations::new(),
            clock: Arc::new(SystemTime),
        }
    }

    /// Use a configured engine
    pub fn with_engine(mut self, engine: WaterQualityEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Stamp snapshots from another clock
    pub fn with_clock(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Underlying data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Engine in use
    pub fn engine(&self) -> &WaterQualityEngine {
        &self.engine
    }

    /// Discard every refresh still in flight
    pub fn cancel_pending(&self) {
        self.generations.invalidate();
    }

    /// Fetch and evaluate a tank, `None` if superseded
    pub async fn refresh(&self, tank: TankId) -> Result<Option<TankSnapshot>, DataSourceError> {
        let generation = self.generations.begin();
        let fetched = self.fetch(tank).await;

        if !self.generations.is_current(generation) {
            log::debug!(
                "Dropping stale response for tank {} (generation {})",
                tank,
                generation.value()
            );
            return Ok(None);
        }

        let (readings, history, thresholds) = fetched?;
        let report = self.engine.evaluate(&readings, &history, &thresholds);
        log::debug!(
            "Tank {}: health {:.1}%, {} alert(s)",
            tank,
            report.health.percent,
            report.alerts.len()
        );

        Ok(Some(TankSnapshot {
            tank,
            readings,
            thresholds,
            report,
            evaluated_at: self.clock.now(),
        }))
    }

    async fn fetch(
        &self,
        tank: TankId,
    ) -> Result<(ReadingSet, ReadingHistory, ThresholdConfig), DataSourceError> {
        let readings = self.source.latest_readings(tank).await?;
        let history = self.source.full_history(tank).await?;
        let thresholds = self.source.thresholds_or_default(tank).await?;
        Ok((readings, history, thresholds))
    }
}
