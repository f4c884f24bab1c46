//! Threshold editing session for one tank

use aquaguard_core::{FieldErrors, ThresholdConfig, ThresholdDraft};
use thiserror::Error;

use crate::source::{TankDataSource, TankId};
use crate::DataSourceError;

/// Why a save did not happen
///
/// The display text is what the settings page shows; per-field messages are
/// available through [`field_errors`](Self::field_errors).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    /// At least one enabled parameter failed validation
    #[error("Please fix the validation errors before saving.")]
    Invalid(FieldErrors),

    /// Data source rejected the write
    #[error("Failed to save thresholds. Please try again.")]
    Backend(#[source] DataSourceError),
}

impl SaveError {
    /// Per-parameter messages, if validation failed
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SaveError::Invalid(errors) => Some(errors),
            SaveError::Backend(_) => None,
        }
    }
}

/// Last-saved thresholds of a tank plus the form being edited
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEditor {
    tank: TankId,
    saved: ThresholdConfig,
    draft: ThresholdDraft,
}

impl ThresholdEditor {
    /// Editor over an already-known configuration
    pub fn new(tank: TankId, saved: ThresholdConfig) -> Self {
        let draft = ThresholdDraft::from_config(&saved);
        Self { tank, saved, draft }
    }

    /// Editor over the stored configuration, defaults if there is none
    pub async fn load<S>(source: &S, tank: TankId) -> Result<Self, DataSourceError>
    where
        S: TankDataSource + ?Sized,
    {
        Ok(Self::new(tank, source.thresholds_or_default(tank).await?))
    }

    /// Tank being edited
    pub fn tank(&self) -> TankId {
        self.tank
    }

    /// Configuration as last saved
    pub fn saved(&self) -> &ThresholdConfig {
        &self.saved
    }

    /// Form fields
    pub fn draft(&self) -> &ThresholdDraft {
        &self.draft
    }

    /// Editable form fields
    pub fn draft_mut(&mut self) -> &mut ThresholdDraft {
        &mut self.draft
    }

    /// Whether the form differs from the saved configuration
    pub fn is_dirty(&self) -> bool {
        self.draft != ThresholdDraft::from_config(&self.saved)
    }

    /// Put the product defaults in the form; nothing is saved
    pub fn reset_to_defaults(&mut self) {
        self.draft = ThresholdDraft::default();
    }

    /// Put the saved configuration back in the form
    pub fn discard_changes(&mut self) {
        self.draft = ThresholdDraft::from_config(&self.saved);
    }

    /// Validate the form without saving
    pub fn validate(&self) -> Result<ThresholdConfig, FieldErrors> {
        self.draft.validate()
    }

    /// Validate and persist the form
    ///
    /// On success the form is refilled from what was stored. On failure the
    /// saved configuration and the form are left as they were.
    pub async fn save<S>(&mut self, source: &S) -> Result<&ThresholdConfig, SaveError>
    where
        S: TankDataSource + ?Sized,
    {
        let config = self.draft.validate().map_err(SaveError::Invalid)?;

        if let Err(error) = source.save_thresholds(self.tank, &config).await {
            log::warn!("Saving thresholds for tank {} failed: {}", self.tank, error);
            return Err(SaveError::Backend(error));
        }

        log::debug!("Saved thresholds for tank {}", self.tank);
        self.draft = ThresholdDraft::from_config(&config);
        self.saved = config;
        Ok(&self.saved)
    }
}
