//! Per-Tank Alert Threshold Configuration
//!
//! A tank's configuration holds a safe band per parameter plus three alert
//! toggles. Delivery needs all three levels switched on:
//!
//! ```text
//! global ──► channel (email / in-app) ──► parameter
//! ```
//!
//! Defaults are those of a tropical freshwater tank: 22-28 °C, pH 6.5-7.5,
//! turbidity up to 5 NTU, ammonia up to 0.25 ppm, everything enabled.
//!
//! Values here are trusted numbers. User input goes through
//! [`ThresholdDraft::validate`](crate::ThresholdDraft::validate) first.

use crate::alerts::Channel;
use crate::constants::parameters::*;
use crate::parameter::Parameter;

/// Safe band for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterThreshold {
    /// Whether alerts for this parameter are wanted
    pub enabled: bool,
    /// Lower edge; only meaningful for two-sided parameters
    pub min: Option<f64>,
    /// Upper edge
    pub max: f64,
}

impl ParameterThreshold {
    /// Enabled band with both edges
    pub fn two_sided(min: f64, max: f64) -> Self {
        Self {
            enabled: true,
            min: Some(min),
            max,
        }
    }

    /// Enabled band with only a maximum
    pub fn one_sided(max: f64) -> Self {
        Self {
            enabled: true,
            min: None,
            max,
        }
    }

    /// Same band with alerts switched off
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Product default for a parameter
    pub fn default_for(parameter: Parameter) -> Self {
        match parameter {
            Parameter::Temperature => {
                Self::two_sided(TEMPERATURE_DEFAULT_MIN_C, TEMPERATURE_DEFAULT_MAX_C)
            }
            Parameter::Ph => Self::two_sided(PH_DEFAULT_MIN, PH_DEFAULT_MAX),
            Parameter::Turbidity => Self::one_sided(TURBIDITY_DEFAULT_MAX_NTU),
            Parameter::Ammonia => Self::one_sided(AMMONIA_DEFAULT_MAX_PPM),
        }
    }
}

/// Alert thresholds and toggles for one tank
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Master switch for every alert
    pub global_alerts_enabled: bool,
    /// Email channel switch
    pub email_alerts_enabled: bool,
    /// In-app channel switch
    pub in_app_alerts_enabled: bool,
    /// Temperature band (°C)
    pub temperature: ParameterThreshold,
    /// pH band
    pub ph: ParameterThreshold,
    /// Turbidity maximum (NTU)
    pub turbidity: ParameterThreshold,
    /// Ammonia maximum (ppm)
    pub ammonia: ParameterThreshold,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            global_alerts_enabled: true,
            email_alerts_enabled: true,
            in_app_alerts_enabled: true,
            temperature: ParameterThreshold::default_for(Parameter::Temperature),
            ph: ParameterThreshold::default_for(Parameter::Ph),
            turbidity: ParameterThreshold::default_for(Parameter::Turbidity),
            ammonia: ParameterThreshold::default_for(Parameter::Ammonia),
        }
    }
}

impl ThresholdConfig {
    /// Band for a parameter
    pub fn get(&self, parameter: Parameter) -> &ParameterThreshold {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::Ph => &self.ph,
            Parameter::Turbidity => &self.turbidity,
            Parameter::Ammonia => &self.ammonia,
        }
    }

    /// Mutable band for a parameter
    pub fn get_mut(&mut self, parameter: Parameter) -> &mut ParameterThreshold {
        match parameter {
            Parameter::Temperature => &mut self.temperature,
            Parameter::Ph => &mut self.ph,
            Parameter::Turbidity => &mut self.turbidity,
            Parameter::Ammonia => &mut self.ammonia,
        }
    }

    /// Builder-style band replacement
    pub fn with(mut self, parameter: Parameter, threshold: ParameterThreshold) -> Self {
        *self.get_mut(parameter) = threshold;
        self
    }

    /// Whether a channel's own switch is on (ignores the global switch)
    pub fn channel_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Email => self.email_alerts_enabled,
            Channel::InApp => self.in_app_alerts_enabled,
        }
    }

    /// Channels an alert for `parameter` is delivered on
    ///
    /// Empty unless global, channel and parameter switches are all on.
    pub fn delivery_channels(&self, parameter: Parameter) -> Vec<Channel> {
        if !self.global_alerts_enabled || !self.get(parameter).enabled {
            return Vec::new();
        }
        Channel::ALL
            .into_iter()
            .filter(|c| self.channel_enabled(*c))
            .collect()
    }

    /// Bands in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &ParameterThreshold)> {
        Parameter::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_freshwater_tank() {
        let config = ThresholdConfig::default();
        assert_eq!(config.temperature, ParameterThreshold::two_sided(22.0, 28.0));
        assert_eq!(config.ph, ParameterThreshold::two_sided(6.5, 7.5));
        assert_eq!(config.turbidity, ParameterThreshold::one_sided(5.0));
        assert_eq!(config.ammonia, ParameterThreshold::one_sided(0.25));
        assert!(config.global_alerts_enabled);
    }

    #[test]
    fn routing_needs_every_level() {
        let mut config = ThresholdConfig::default();
        assert_eq!(
            config.delivery_channels(Parameter::Ph),
            vec![Channel::Email, Channel::InApp]
        );

        config.email_alerts_enabled = false;
        assert_eq!(config.delivery_channels(Parameter::Ph), vec![Channel::InApp]);

        config.ph = config.ph.disabled();
        assert!(config.delivery_channels(Parameter::Ph).is_empty());
        assert_eq!(config.delivery_channels(Parameter::Ammonia), vec![Channel::InApp]);

        config.global_alerts_enabled = false;
        for p in Parameter::ALL {
            assert!(config.delivery_channels(p).is_empty());
        }
    }

    #[test]
    fn get_mut_edits_the_right_band() {
        let mut config = ThresholdConfig::default();
        config.get_mut(Parameter::Ammonia).max = 0.5;
        assert_eq!(config.ammonia.max, 0.5);
        assert_eq!(config.turbidity.max, 5.0);
    }
}
