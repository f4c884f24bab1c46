//! Threshold configuration shape and its conversion to the engine's types
//!
//! Numbers arrive untrusted. Conversion goes through the same validation as
//! the threshold form ([`ThresholdDraft::validate`]) so a stored document can
//! never hold a band the form would have refused.

use std::collections::BTreeMap;

use aquaguard_core::{
    FieldErrors, Parameter, ParameterThreshold, ThresholdConfig, ThresholdDraft,
};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

fn enabled_default() -> bool {
    true
}

fn field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Two-sided band: `{ enabled, min, max }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeThresholdDto {
    /// Alert switch; on when omitted
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Lower edge
    pub min: Option<f64>,
    /// Upper edge
    pub max: Option<f64>,
}

/// One-sided band: `{ enabled, max }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxThresholdDto {
    /// Alert switch; on when omitted
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Upper edge
    pub max: Option<f64>,
}

impl RangeThresholdDto {
    fn from_threshold(threshold: &ParameterThreshold) -> Self {
        Self {
            enabled: threshold.enabled,
            min: threshold.min,
            max: Some(threshold.max),
        }
    }
}

impl MaxThresholdDto {
    fn from_threshold(threshold: &ParameterThreshold) -> Self {
        Self {
            enabled: threshold.enabled,
            max: Some(threshold.max),
        }
    }
}

/// Full threshold configuration document
///
/// Missing toggles and sections fall back to the product defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThresholdConfigDto {
    /// Master switch
    pub global_alerts_enabled: bool,
    /// Email channel switch
    pub email_alerts_enabled: bool,
    /// In-app channel switch
    pub in_app_alerts_enabled: bool,
    /// Temperature band (°C)
    pub temperature: RangeThresholdDto,
    /// pH band
    pub ph: RangeThresholdDto,
    /// Turbidity maximum (NTU)
    pub turbidity: MaxThresholdDto,
    /// Ammonia maximum (ppm)
    pub ammonia: MaxThresholdDto,
}

impl Default for ThresholdConfigDto {
    fn default() -> Self {
        Self::from(&ThresholdConfig::default())
    }
}

impl From<&ThresholdConfig> for ThresholdConfigDto {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            global_alerts_enabled: config.global_alerts_enabled,
            email_alerts_enabled: config.email_alerts_enabled,
            in_app_alerts_enabled: config.in_app_alerts_enabled,
            temperature: RangeThresholdDto::from_threshold(&config.temperature),
            ph: RangeThresholdDto::from_threshold(&config.ph),
            turbidity: MaxThresholdDto::from_threshold(&config.turbidity),
            ammonia: MaxThresholdDto::from_threshold(&config.ammonia),
        }
    }
}

impl ThresholdConfigDto {
    /// Form draft holding this document's values
    pub fn to_draft(&self) -> ThresholdDraft {
        let mut draft = ThresholdDraft::default();
        draft.global_alerts_enabled = self.global_alerts_enabled;
        draft.email_alerts_enabled = self.email_alerts_enabled;
        draft.in_app_alerts_enabled = self.in_app_alerts_enabled;

        for (parameter, band) in [
            (Parameter::Temperature, &self.temperature),
            (Parameter::Ph, &self.ph),
        ] {
            let fields = draft.get_mut(parameter);
            fields.enabled = band.enabled;
            fields.min = field(band.min);
            fields.max = field(band.max);
        }
        for (parameter, band) in [
            (Parameter::Turbidity, &self.turbidity),
            (Parameter::Ammonia, &self.ammonia),
        ] {
            let fields = draft.get_mut(parameter);
            fields.enabled = band.enabled;
            fields.min = String::new();
            fields.max = field(band.max);
        }

        draft
    }
}

impl TryFrom<ThresholdConfigDto> for ThresholdConfig {
    type Error = FieldErrors;

    fn try_from(dto: ThresholdConfigDto) -> Result<Self, Self::Error> {
        dto.to_draft().validate()
    }
}

/// Parse and validate a threshold document
pub fn parse_thresholds(json: &str) -> Result<ThresholdConfig, SchemaError> {
    let dto: ThresholdConfigDto = serde_json::from_str(json)?;
    Ok(ThresholdConfig::try_from(dto)?)
}

/// Serialize a configuration as a threshold document
pub fn thresholds_to_json(config: &ThresholdConfig) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(&ThresholdConfigDto::from(config))?)
}

/// `{ "<parameterKey>": "<message>" }` map for a form
pub fn field_error_map(errors: &FieldErrors) -> BTreeMap<String, String> {
    errors
        .messages()
        .into_iter()
        .map(|(key, message)| (key.to_string(), message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaguard_core::ThresholdError;

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(parse_thresholds("{}").unwrap(), ThresholdConfig::default());
    }

    #[test]
    fn present_section_replaces_default() {
        let config = parse_thresholds(
            r#"{ "ph": { "enabled": true, "min": 6.0, "max": 8.0 }, "inAppAlertsEnabled": false }"#,
        )
        .unwrap();
        assert_eq!(config.ph, ParameterThreshold::two_sided(6.0, 8.0));
        assert!(!config.in_app_alerts_enabled);
        assert_eq!(config.temperature, ParameterThreshold::two_sided(22.0, 28.0));
    }

    #[test]
    fn missing_bound_in_enabled_section_is_an_error() {
        let err = parse_thresholds(r#"{ "temperature": { "max": 28 } }"#).unwrap_err();
        match err {
            SchemaError::Thresholds(errors) => assert_eq!(
                errors.get(Parameter::Temperature),
                Some(&ThresholdError::MissingRange)
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn disabled_section_may_be_incomplete() {
        let config = parse_thresholds(r#"{ "ammonia": { "enabled": false } }"#).unwrap();
        assert!(!config.ammonia.enabled);
        assert_eq!(config.ammonia.max, 0.25);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json: serde_json::Value =
            serde_json::from_str(&thresholds_to_json(&ThresholdConfig::default()).unwrap())
                .unwrap();
        assert_eq!(json["globalAlertsEnabled"], true);
        assert_eq!(json["turbidity"]["max"], 5.0);
        assert!(json["turbidity"].get("min").is_none());
        assert_eq!(json["temperature"]["min"], 22.0);
    }

    #[test]
    fn config_round_trips() {
        let config = ThresholdConfig::default()
            .with(Parameter::Ph, ParameterThreshold::two_sided(6.8, 7.2).disabled());
        let json = thresholds_to_json(&config).unwrap();
        assert_eq!(parse_thresholds(&json).unwrap(), config);
    }

    #[test]
    fn field_errors_map_to_messages() {
        let err = parse_thresholds(r#"{ "ammonia": { "max": 999 } }"#).unwrap_err();
        let SchemaError::Thresholds(errors) = err else {
            panic!("expected threshold errors");
        };
        let map = field_error_map(&errors);
        assert_eq!(map["ammonia"], "Value must be between 0 and 5");
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"ammonia":"Value must be between 0 and 5"}"#
        );
    }

    #[test]
    fn wrong_types_are_json_errors() {
        assert!(matches!(
            parse_thresholds(r#"{ "ph": { "min": "low" } }"#),
            Err(SchemaError::Json(_))
        ));
    }
}
