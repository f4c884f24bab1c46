//! Tank Data Access and Threshold Editing for AquaGuard
//!
//! ## Overview
//!
//! `aquaguard-core` is pure: it never fetches or stores anything. This crate
//! is the async edge around it. A dashboard session uses it to:
//!
//! - read the latest readings, history and thresholds of a tank through a
//!   [`TankDataSource`] and run the engine over them ([`TankMonitor`])
//! - drop responses that arrive after the user has moved to another tank
//!   ([`RequestGenerations`])
//! - edit a tank's thresholds as text, validate them and save them
//!   ([`ThresholdEditor`])
//!
//! ## Stale Responses
//!
//! Fetches for a tank can still be in flight when the user selects another
//! one. Every refresh takes a generation token before it awaits anything and
//! checks it again once the data is in. If a newer refresh started in the
//! meantime, the result is discarded and `refresh` returns `Ok(None)`.
//!
//! ```text
//! select tank 1 ──► gen 1 ──► fetch ........................► stale, dropped
//! select tank 2 ─────────────► gen 2 ──► fetch ──► current ──► shown
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use aquaguard_core::{Parameter, ReadingSet};
//! use aquaguard_monitor::{InMemoryDataSource, TankMonitor};
//!
//! # async fn example() -> Result<(), aquaguard_monitor::DataSourceError> {
//! let source = InMemoryDataSource::new();
//! source
//!     .insert_latest(1, ReadingSet::new().with(Parameter::Ph, 7.1))
//!     .await;
//!
//! let monitor = TankMonitor::new(source);
//! if let Some(snapshot) = monitor.refresh(1).await? {
//!     println!("health {}%", snapshot.report.health.rounded_percent());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod editor;
pub mod generation;
pub mod memory;
pub mod monitor;
pub mod source;

pub use editor::{SaveError, ThresholdEditor};
pub use generation::{Generation, RequestGenerations};
pub use memory::InMemoryDataSource;
pub use monitor::{TankMonitor, TankSnapshot};
pub use source::{TankDataSource, TankId};

use thiserror::Error;

/// Errors from a tank data source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// No tank with this id
    #[error("Tank {tank} not found")]
    NotFound {
        /// Requested tank
        tank: TankId,
    },

    /// Storage or transport failure
    #[error("Backend error: {0}")]
    Backend(String),
}
