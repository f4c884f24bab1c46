//! Health Tiers, Trend Sensitivity and Smoothing
//!
//! Fixed cutoffs used when turning evaluations into the values a dashboard
//! shows. The health tiers are part of the product's vocabulary and are not
//! configurable; the trend and warning values are defaults for
//! [`EngineConfig`](crate::EngineConfig).

// ===== HEALTH TIERS =====

/// Percent at or above which a tank is "happy".
pub const HEALTH_HAPPY_MIN_PCT: f64 = 80.0;

/// Percent at or above which a tank is "neutral". Below this it is
/// "concerned".
pub const HEALTH_NEUTRAL_MIN_PCT: f64 = 60.0;

// ===== THRESHOLD EVALUATION =====

/// Width of the warning zone at each edge of a safe band, as a fraction of
/// the band width.
///
/// A 22-28 °C band has a 0.6 °C warning zone at each end.
pub const DEFAULT_WARNING_MARGIN: f64 = 0.10;

/// Largest warning margin accepted. At 0.5 the two zones meet in the middle.
pub const MAX_WARNING_MARGIN: f64 = 0.5;

// ===== TRENDS =====

/// Half-over-half change (%) below which a series counts as stable.
pub const TREND_STABLE_CHANGE_PCT: f64 = 2.0;

/// Decimal places the trend change is rounded to before classification.
pub const TREND_CHANGE_DECIMALS: i32 = 1;

/// Samples per moving-average window for chart trend lines.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;
