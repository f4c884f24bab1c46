//! Threshold drafts: raw form input awaiting validation

use crate::{
    errors::{FieldErrors, ThresholdError, ThresholdResult},
    parameter::Parameter,
    thresholds::{ParameterThreshold, ThresholdConfig},
};

use super::utils::{check_threshold, parse_field, Field};

/// One parameter's form fields exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterDraft {
    /// Alert switch
    pub enabled: bool,
    /// Minimum field; unused for one-sided parameters
    pub min: String,
    /// Maximum field
    pub max: String,
}

impl ParameterDraft {
    /// Draft pre-filled from a stored band
    pub fn from_threshold(parameter: Parameter, threshold: &ParameterThreshold) -> Self {
        let min = match threshold.min {
            Some(min) if parameter.has_min() => min.to_string(),
            _ => String::new(),
        };
        Self {
            enabled: threshold.enabled,
            min,
            max: threshold.max.to_string(),
        }
    }

    /// Parse and check this draft as a band for `parameter`
    ///
    /// Ignores the `enabled` flag; the caller decides whether to skip.
    pub fn parse(&self, parameter: Parameter) -> ThresholdResult<ParameterThreshold> {
        let max_field = parse_field(&self.max);

        let threshold = if parameter.has_min() {
            let (min, max) = match (parse_field(&self.min), max_field) {
                (Field::Number(min), Field::Number(max)) => (min, max),
                (Field::Empty, _) | (_, Field::Empty) => {
                    return Err(ThresholdError::MissingRange)
                }
                _ => return Err(ThresholdError::RangeNotNumeric),
            };
            ParameterThreshold::two_sided(min, max)
        } else {
            let max = match max_field {
                Field::Number(max) => max,
                Field::Empty => return Err(ThresholdError::MissingMax),
                Field::Invalid => return Err(ThresholdError::MaxNotNumeric),
            };
            ParameterThreshold::one_sided(max)
        };

        check_threshold(parameter, threshold.min, threshold.max)?;

        Ok(ParameterThreshold {
            enabled: self.enabled,
            ..threshold
        })
    }
}

/// Editable copy of a tank's threshold configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdDraft {
    /// Master switch
    pub global_alerts_enabled: bool,
    /// Email channel switch
    pub email_alerts_enabled: bool,
    /// In-app channel switch
    pub in_app_alerts_enabled: bool,
    parameters: [ParameterDraft; Parameter::COUNT],
}

impl Default for ThresholdDraft {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}

impl ThresholdDraft {
    /// Draft pre-filled from a stored configuration
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            global_alerts_enabled: config.global_alerts_enabled,
            email_alerts_enabled: config.email_alerts_enabled,
            in_app_alerts_enabled: config.in_app_alerts_enabled,
            parameters: Parameter::ALL
                .map(|p| ParameterDraft::from_threshold(p, config.get(p))),
        }
    }

    /// Fields of one parameter
    pub fn get(&self, parameter: Parameter) -> &ParameterDraft {
        &self.parameters[parameter.index()]
    }

    /// Mutable fields of one parameter
    pub fn get_mut(&mut self, parameter: Parameter) -> &mut ParameterDraft {
        &mut self.parameters[parameter.index()]
    }

    /// Validate every enabled parameter and build the configuration
    ///
    /// All failures are reported together. A disabled parameter is never an
    /// error: its fields are kept if they form a valid band, otherwise the
    /// product default is stored with alerts off.
    pub fn validate(&self) -> Result<ThresholdConfig, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut config = ThresholdConfig {
            global_alerts_enabled: self.global_alerts_enabled,
            email_alerts_enabled: self.email_alerts_enabled,
            in_app_alerts_enabled: self.in_app_alerts_enabled,
            ..ThresholdConfig::default()
        };

        for parameter in Parameter::ALL {
            let draft = self.get(parameter);
            let threshold = match draft.parse(parameter) {
                Ok(threshold) => threshold,
                Err(error) if draft.enabled => {
                    log_debug!("Rejected {} threshold: {}", parameter.key(), error);
                    errors.insert(parameter, error);
                    continue;
                }
                Err(_) => ParameterThreshold::default_for(parameter).disabled(),
            };
            *config.get_mut(parameter) = threshold;
        }

        errors.into_result(config)
    }
}

/// Check an already-numeric configuration, enabled parameters only
pub fn validate_config(config: &ThresholdConfig) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for (parameter, threshold) in config.iter().filter(|(_, t)| t.enabled) {
        if let Err(error) = check_threshold(parameter, threshold.min, threshold.max) {
            errors.insert(parameter, error);
        }
    }
    errors.into_result(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_validates_to_default_config() {
        assert_eq!(ThresholdDraft::default().validate(), Ok(ThresholdConfig::default()));
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut draft = ThresholdDraft::default();
        draft.get_mut(Parameter::Temperature).min = String::new();
        draft.get_mut(Parameter::Ph).max = "seven".into();
        draft.get_mut(Parameter::Turbidity).max = String::new();
        draft.get_mut(Parameter::Ammonia).max = "999".into();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Parameter::Temperature), Some(&ThresholdError::MissingRange));
        assert_eq!(errors.get(Parameter::Ph), Some(&ThresholdError::RangeNotNumeric));
        assert_eq!(errors.get(Parameter::Turbidity), Some(&ThresholdError::MissingMax));
        assert_eq!(
            errors.get(Parameter::Ammonia),
            Some(&ThresholdError::MaxOutOfBounds { lo: 0.0, hi: 5.0 })
        );
    }

    #[test]
    fn turbidity_bound_is_zero_to_hundred() {
        let mut draft = ThresholdDraft::default();
        draft.get_mut(Parameter::Turbidity).max = "100".into();
        assert!(draft.validate().is_ok());

        draft.get_mut(Parameter::Turbidity).max = "100.5".into();
        assert_eq!(
            draft.validate().unwrap_err().get(Parameter::Turbidity),
            Some(&ThresholdError::MaxOutOfBounds { lo: 0.0, hi: 100.0 })
        );
    }

    #[test]
    fn disabled_parameter_is_skipped() {
        let mut draft = ThresholdDraft::default();
        let ammonia = draft.get_mut(Parameter::Ammonia);
        ammonia.enabled = false;
        ammonia.max = "lots".into();

        let config = draft.validate().unwrap();
        assert!(!config.ammonia.enabled);
        assert_eq!(config.ammonia.max, 0.25);
    }

    #[test]
    fn disabled_parameter_keeps_valid_edits() {
        let mut draft = ThresholdDraft::default();
        let temp = draft.get_mut(Parameter::Temperature);
        temp.enabled = false;
        temp.min = "20".into();
        temp.max = "30".into();

        let config = draft.validate().unwrap();
        assert_eq!(config.temperature, ParameterThreshold::two_sided(20.0, 30.0).disabled());
    }

    #[test]
    fn toggles_carry_through() {
        let mut draft = ThresholdDraft::default();
        draft.email_alerts_enabled = false;
        let config = draft.validate().unwrap();
        assert!(!config.email_alerts_enabled);
        assert!(config.in_app_alerts_enabled);
    }

    #[test]
    fn one_sided_min_field_is_ignored() {
        let mut draft = ThresholdDraft::default();
        draft.get_mut(Parameter::Turbidity).min = "garbage".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_round_trips_a_config() {
        let config = ThresholdConfig::default()
            .with(Parameter::Ph, ParameterThreshold::two_sided(6.8, 7.2));
        let draft = ThresholdDraft::from_config(&config);
        assert_eq!(draft.get(Parameter::Ph).min, "6.8");
        assert_eq!(draft.get(Parameter::Turbidity).min, "");
        assert_eq!(draft.validate(), Ok(config));
    }

    #[test]
    fn stored_config_check_skips_disabled() {
        let mut config = ThresholdConfig::default();
        config.ph = ParameterThreshold::two_sided(8.0, 7.0);
        assert!(validate_config(&config).is_err());

        config.ph = config.ph.disabled();
        assert!(validate_config(&config).is_ok());
    }
}
