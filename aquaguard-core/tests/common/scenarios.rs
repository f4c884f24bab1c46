//! Named tank scenarios with expected outcomes

use aquaguard_core::{HealthTier, Parameter, ReadingSet, Status};

use super::{acidic_ammonia_spike, optimal_readings};

/// Expected results for one snapshot against default thresholds
pub struct Expected {
    pub percent: f64,
    pub tier: HealthTier,
    pub statuses: [(Parameter, Status); 4],
    pub alerts: usize,
}

/// Snapshot plus what the engine should make of it
pub struct Scenario {
    pub name: &'static str,
    pub readings: ReadingSet,
    pub expected: Expected,
}

/// Snapshots covering each health tier
pub fn standard() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "healthy_tank",
            readings: optimal_readings(),
            expected: Expected {
                percent: 100.0,
                tier: HealthTier::Happy,
                statuses: [
                    (Parameter::Temperature, Status::Optimal),
                    (Parameter::Ph, Status::Optimal),
                    (Parameter::Turbidity, Status::Optimal),
                    (Parameter::Ammonia, Status::Optimal),
                ],
                alerts: 0,
            },
        },
        Scenario {
            name: "acidic_with_ammonia",
            readings: acidic_ammonia_spike(),
            expected: Expected {
                percent: 32.5,
                tier: HealthTier::Concerned,
                statuses: [
                    (Parameter::Temperature, Status::Optimal),
                    (Parameter::Ph, Status::Critical),
                    (Parameter::Turbidity, Status::Optimal),
                    (Parameter::Ammonia, Status::Critical),
                ],
                alerts: 2,
            },
        },
        Scenario {
            // 0.8 + 1.5 + 1.2 = 3.5 of 4.0
            name: "cloudy_water",
            readings: optimal_readings().with(Parameter::Turbidity, 3.0),
            expected: Expected {
                percent: 87.5,
                tier: HealthTier::Happy,
                statuses: [
                    (Parameter::Temperature, Status::Optimal),
                    (Parameter::Ph, Status::Optimal),
                    (Parameter::Turbidity, Status::Optimal),
                    (Parameter::Ammonia, Status::Optimal),
                ],
                alerts: 0,
            },
        },
        Scenario {
            // 0.8 + 1.2 + 0.5 = 2.5 of 4.0
            name: "slightly_alkaline",
            readings: optimal_readings().with(Parameter::Ph, 7.45),
            expected: Expected {
                percent: 62.5,
                tier: HealthTier::Neutral,
                statuses: [
                    (Parameter::Temperature, Status::Optimal),
                    (Parameter::Ph, Status::Warning),
                    (Parameter::Turbidity, Status::Optimal),
                    (Parameter::Ammonia, Status::Optimal),
                ],
                alerts: 1,
            },
        },
    ]
}
