//! Parameter Constraints Catalog
//!
//! Everything fixed about each tracked parameter, in one serializable
//! record. Dashboards read this instead of hard-coding units, weights,
//! bounds and bands, so a change in the engine shows up everywhere.
//!
//! ```json
//! {
//!   "key": "ph",
//!   "label": "pH",
//!   "unit": "",
//!   "weight": 1.5,
//!   "twoSided": true,
//!   "boundMin": 0.0,
//!   "boundMax": 14.0,
//!   "optimalMin": 6.8,
//!   "optimalMax": 7.4,
//!   "optimalMaxInclusive": true,
//!   "defaultMin": 6.5,
//!   "defaultMax": 7.5
//! }
//! ```

use aquaguard_core::{Parameter, ParameterThreshold};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Complete set of constraints for one parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterConstraints {
    /// Wire key
    pub key: String,

    /// Display label
    pub label: String,

    /// Display unit, empty for pH
    pub unit: String,

    /// Weight in the health score
    pub weight: f64,

    /// Whether a minimum threshold applies
    pub two_sided: bool,

    /// Lowest value a threshold may take
    pub bound_min: f64,

    /// Highest value a threshold may take
    pub bound_max: f64,

    /// Lower edge of the optimal band, if it has one
    pub optimal_min: Option<f64>,

    /// Upper edge of the optimal band
    pub optimal_max: f64,

    /// Whether `optimal_max` itself is optimal
    pub optimal_max_inclusive: bool,

    /// Default alert minimum (two-sided only)
    pub default_min: Option<f64>,

    /// Default alert maximum
    pub default_max: f64,
}

impl ParameterConstraints {
    /// Constraints of one parameter
    pub fn for_parameter(parameter: Parameter) -> Self {
        let bound = parameter.physical_bound();
        let optimal = parameter.optimal_band();
        let default = ParameterThreshold::default_for(parameter);

        Self {
            key: parameter.key().to_string(),
            label: parameter.label().to_string(),
            unit: parameter.unit().to_string(),
            weight: parameter.weight(),
            two_sided: parameter.has_min(),
            bound_min: bound.min,
            bound_max: bound.max,
            optimal_min: optimal.min,
            optimal_max: optimal.max,
            optimal_max_inclusive: optimal.max_inclusive,
            default_min: default.min,
            default_max: default.max,
        }
    }

    /// Typed parameter for this record's key
    pub fn parameter(&self) -> Result<Parameter, SchemaError> {
        Parameter::from_key(&self.key).ok_or_else(|| SchemaError::UnknownParameter(self.key.clone()))
    }

    /// Constraints of every parameter in display order
    pub fn catalog() -> Vec<Self> {
        Parameter::ALL.into_iter().map(Self::for_parameter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_parameters() {
        let catalog = ParameterConstraints::catalog();
        assert_eq!(catalog.len(), 4);
        for (entry, parameter) in catalog.iter().zip(Parameter::ALL) {
            assert_eq!(entry.parameter().unwrap(), parameter);
        }
    }

    #[test]
    fn turbidity_constraints() {
        let turbidity = ParameterConstraints::for_parameter(Parameter::Turbidity);
        assert!(!turbidity.two_sided);
        assert_eq!(turbidity.bound_max, 100.0);
        assert_eq!(turbidity.optimal_max, 3.0);
        assert!(!turbidity.optimal_max_inclusive);
        assert_eq!(turbidity.default_min, None);
        assert_eq!(turbidity.default_max, 5.0);
    }

    #[test]
    fn weights_sum_to_four() {
        let total: f64 = ParameterConstraints::catalog().iter().map(|c| c.weight).sum();
        assert!((total - 4.0).abs() < 1e-12);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ParameterConstraints::for_parameter(Parameter::Ph)).unwrap();
        assert_eq!(json["optimalMin"], 6.8);
        assert_eq!(json["boundMax"], 14.0);
        assert_eq!(json["twoSided"], true);
    }
}
