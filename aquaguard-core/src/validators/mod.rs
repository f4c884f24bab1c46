//! Threshold Evaluation and Threshold Input Validation
//!
//! ## Overview
//!
//! Two jobs share this module because both are about a parameter's safe band:
//!
//! 1. **Evaluation** ([`ThresholdEvaluator`]): where does a reading sit
//!    relative to the band the user configured?
//! 2. **Validation** ([`ThresholdDraft`]): is the band the user typed in
//!    acceptable at all?
//!
//! ## Evaluation Tiers
//!
//! ```text
//!             min                                   max
//!   critical   │ warning │      optimal      │ warning │   critical
//! ─────────────┼─────────┼───────────────────┼─────────┼─────────────
//!              └ margin ─┘                   └ margin ─┘
//! ```
//!
//! The warning zones are a fraction of the band width (10% by default). A
//! one-sided parameter (turbidity, ammonia) only has the upper zone; its band
//! is measured from the parameter's physical floor. Margin 0 gives the plain
//! two-tier optimal / critical split.
//!
//! A missing or non-finite reading is `Unknown`, never `Optimal`: bad sensor
//! data must not look healthy.
//!
//! ## Validation Layers
//!
//! Checked per parameter, in order, stopping at the first failure:
//!
//! 1. **Presence**: two-sided needs min and max, one-sided needs max
//! 2. **Numeric**: each field parses to a finite number
//! 3. **Ordering**: min < max
//! 4. **Physical bound**: e.g. pH within 0-14, temperature within 10-40 °C
//!
//! Disabled parameters are skipped so a half-typed field does not block
//! saving the others.
//!
//! ## Usage Example
//!
//! ```rust
//! use aquaguard_core::{Parameter, ParameterThreshold, Status, ThresholdEvaluator};
//!
//! let evaluator = ThresholdEvaluator::default();
//! let band = ParameterThreshold::two_sided(6.5, 7.5);
//!
//! assert_eq!(evaluator.classify(Parameter::Ph, Some(7.0), &band), Status::Optimal);
//! assert_eq!(evaluator.classify(Parameter::Ph, Some(7.48), &band), Status::Warning);
//! assert_eq!(evaluator.classify(Parameter::Ph, Some(8.1), &band), Status::Critical);
//! assert_eq!(evaluator.classify(Parameter::Ph, None, &band), Status::Unknown);
//! ```

mod draft;
mod evaluator;
mod utils;

pub use draft::{validate_config, ParameterDraft, ThresholdDraft};
pub use evaluator::{Status, ThresholdEvaluator};
pub use utils::{check_threshold, parse_field, round_to, Field};
