//! The Four Tracked Water Parameters
//!
//! Every reading, threshold and evaluation is keyed by a [`Parameter`]. The
//! enum carries everything that is fixed about a parameter: its unit, its
//! weight in the health score, whether both ends of its range matter, the
//! physical bound thresholds must respect, and the optimal band.
//!
//! ```text
//! parameter    unit  weight  sides  bound      optimal
//! temperature  °C    0.8     two    10..40     24..=26
//! ph           -     1.5     two    0..14      6.8..=7.4
//! turbidity    NTU   0.5     one    0..100     < 3
//! ammonia      ppm   1.2     one    0..5       0..=0.25
//! ```

use core::fmt;

use crate::constants::parameters::*;

/// Tracked water parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Parameter {
    /// Water temperature (°C)
    Temperature = 0,
    /// Acidity / alkalinity (unitless, 0-14)
    Ph = 1,
    /// Cloudiness (NTU)
    Turbidity = 2,
    /// Dissolved ammonia (ppm)
    Ammonia = 3,
}

/// Which edges of a parameter's range matter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directionality {
    /// Both too low and too high are harmful
    TwoSided,
    /// Only a maximum matters; lower is always better
    OneSided,
}

/// Range a threshold value may take at all
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalBound {
    /// Lowest meaningful value
    pub min: f64,
    /// Highest meaningful value
    pub max: f64,
}

impl PhysicalBound {
    /// Inclusive containment
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ideal range used by the health score
///
/// Tighter than the alert thresholds. `max_inclusive` exists because the
/// turbidity band is strictly below its maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalBand {
    /// Lower edge (inclusive), if the band has one
    pub min: Option<f64>,
    /// Upper edge
    pub max: f64,
    /// Whether `max` itself is optimal
    pub max_inclusive: bool,
}

impl OptimalBand {
    /// Whether a value is optimal. Non-finite values never are.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        }
    }
}

impl Parameter {
    /// Number of tracked parameters
    pub const COUNT: usize = 4;

    /// All parameters in display order
    pub const ALL: [Parameter; Parameter::COUNT] = [
        Parameter::Temperature,
        Parameter::Ph,
        Parameter::Turbidity,
        Parameter::Ammonia,
    ];

    /// Dense index for fixed-size per-parameter tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire key used in JSON payloads and error maps
    pub const fn key(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Ph => "ph",
            Parameter::Turbidity => "turbidity",
            Parameter::Ammonia => "ammonia",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Ph => "pH",
            Parameter::Turbidity => "Turbidity",
            Parameter::Ammonia => "Ammonia",
        }
    }

    /// Display unit, empty for pH
    pub const fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Ph => "",
            Parameter::Turbidity => "NTU",
            Parameter::Ammonia => "ppm",
        }
    }

    /// Relative importance in the health score
    pub const fn weight(&self) -> f64 {
        match self {
            Parameter::Temperature => TEMPERATURE_WEIGHT,
            Parameter::Ph => PH_WEIGHT,
            Parameter::Turbidity => TURBIDITY_WEIGHT,
            Parameter::Ammonia => AMMONIA_WEIGHT,
        }
    }

    /// Whether a minimum threshold applies
    pub const fn directionality(&self) -> Directionality {
        match self {
            Parameter::Temperature | Parameter::Ph => Directionality::TwoSided,
            Parameter::Turbidity | Parameter::Ammonia => Directionality::OneSided,
        }
    }

    /// Shorthand for `directionality() == TwoSided`
    pub const fn has_min(&self) -> bool {
        matches!(self.directionality(), Directionality::TwoSided)
    }

    /// Range thresholds must lie within
    pub const fn physical_bound(&self) -> PhysicalBound {
        match self {
            Parameter::Temperature => PhysicalBound {
                min: TEMPERATURE_BOUND_MIN_C,
                max: TEMPERATURE_BOUND_MAX_C,
            },
            Parameter::Ph => PhysicalBound {
                min: PH_BOUND_MIN,
                max: PH_BOUND_MAX,
            },
            Parameter::Turbidity => PhysicalBound {
                min: TURBIDITY_BOUND_MIN_NTU,
                max: TURBIDITY_BOUND_MAX_NTU,
            },
            Parameter::Ammonia => PhysicalBound {
                min: AMMONIA_BOUND_MIN_PPM,
                max: AMMONIA_BOUND_MAX_PPM,
            },
        }
    }

    /// Fixed ideal band used by the health score
    pub const fn optimal_band(&self) -> OptimalBand {
        match self {
            Parameter::Temperature => OptimalBand {
                min: Some(TEMPERATURE_OPTIMAL_MIN_C),
                max: TEMPERATURE_OPTIMAL_MAX_C,
                max_inclusive: true,
            },
            Parameter::Ph => OptimalBand {
                min: Some(PH_OPTIMAL_MIN),
                max: PH_OPTIMAL_MAX,
                max_inclusive: true,
            },
            Parameter::Turbidity => OptimalBand {
                min: None,
                max: TURBIDITY_OPTIMAL_MAX_NTU,
                max_inclusive: false,
            },
            Parameter::Ammonia => OptimalBand {
                min: Some(AMMONIA_OPTIMAL_MIN_PPM),
                max: AMMONIA_OPTIMAL_MAX_PPM,
                max_inclusive: true,
            },
        }
    }

    /// Parse a wire key. Accepts any letter case ("pH", "Temperature").
    pub fn from_key(key: &str) -> Option<Parameter> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Value with its unit, e.g. `25°C`, `0.5 ppm`, `7.1`
    pub fn format_value(&self, value: f64) -> String {
        match self.unit() {
            "" => format!("{}", value),
            "°C" => format!("{}°C", value),
            unit => format!("{} {}", value, unit),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sum of the weights of the given parameters
pub fn weight_of<I: IntoIterator<Item = Parameter>>(parameters: I) -> f64 {
    parameters.into_iter().map(|p| p.weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for p in Parameter::ALL {
            assert_eq!(Parameter::from_key(p.key()), Some(p));
        }
        assert_eq!(Parameter::from_key("pH"), Some(Parameter::Ph));
        assert_eq!(Parameter::from_key("nitrate"), None);
    }

    #[test]
    fn indices_are_dense() {
        for (i, p) in Parameter::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn directionality_matches_threshold_shape() {
        assert!(Parameter::Temperature.has_min());
        assert!(Parameter::Ph.has_min());
        assert!(!Parameter::Turbidity.has_min());
        assert!(!Parameter::Ammonia.has_min());
    }

    #[test]
    fn turbidity_optimal_is_strictly_below_max() {
        let band = Parameter::Turbidity.optimal_band();
        assert!(band.contains(2.99));
        assert!(!band.contains(3.0));
    }

    #[test]
    fn ph_optimal_edges_are_inclusive() {
        let band = Parameter::Ph.optimal_band();
        assert!(band.contains(6.8));
        assert!(band.contains(7.4));
        assert!(!band.contains(6.79));
        assert!(!band.contains(f64::NAN));
    }

    #[test]
    fn values_format_with_units() {
        assert_eq!(Parameter::Temperature.format_value(25.0), "25°C");
        assert_eq!(Parameter::Ammonia.format_value(0.5), "0.5 ppm");
        assert_eq!(Parameter::Ph.format_value(7.1), "7.1");
    }

    #[test]
    fn all_weights_sum_to_total() {
        assert!((weight_of(Parameter::ALL) - TOTAL_PARAMETER_WEIGHT).abs() < 1e-12);
    }
}
