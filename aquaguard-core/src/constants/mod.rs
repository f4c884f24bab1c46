//! Constants for AquaGuard Core
//!
//! Centralized numbers used across the engine. Every value here comes from
//! the aquarium product's own defaults or from freshwater husbandry practice;
//! the engine code should never carry a bare literal for a range or weight.
//!
//! ## Organization
//!
//! - **Parameters**: physical bounds, default alert thresholds, optimal bands
//!   and health weights for each tracked water parameter
//! - **Quality**: health-tier cutoffs, trend sensitivity and chart smoothing
//!
//! Names carry their unit where one applies (`_C`, `_NTU`, `_PPM`, `_PCT`).

/// Per-parameter ranges, defaults and weights.
pub mod parameters;

/// Health tiers, trend sensitivity and smoothing defaults.
pub mod quality;

pub use parameters::{
    AMMONIA_WEIGHT, PH_WEIGHT, TEMPERATURE_WEIGHT, TURBIDITY_WEIGHT,
    TOTAL_PARAMETER_WEIGHT,
};

pub use quality::{
    DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_WARNING_MARGIN, HEALTH_HAPPY_MIN_PCT,
    HEALTH_NEUTRAL_MIN_PCT, TREND_STABLE_CHANGE_PCT,
};
