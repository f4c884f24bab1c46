//! Plain-language notes derived from temperature and pH trends

use crate::trend::{Trend, TrendDirection};

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightKind {
    /// Good news
    Success,
    /// Worth acting on
    Warning,
    /// Informational
    Info,
}

impl InsightKind {
    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Success => "success",
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
        }
    }

    /// Icon shown next to the note
    pub const fn icon(&self) -> &'static str {
        match self {
            InsightKind::Success => "✅",
            InsightKind::Warning => "⚠️",
            InsightKind::Info => "💧",
        }
    }
}

/// Closing note on every trend analysis
pub const WATER_CHANGE_NOTE: &str =
    "Based on current trends, next water change recommended in 3-4 days.";

/// One note for the trends page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    /// Tone
    pub kind: InsightKind,
    /// Icon shown next to the note, usually the kind's
    pub icon: &'static str,
    /// Text shown to the user
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            text: text.into(),
        }
    }

    fn water_change() -> Self {
        Self {
            icon: "📅",
            ..Self::new(InsightKind::Info, WATER_CHANGE_NOTE)
        }
    }
}

/// Notes for the temperature and pH trends, then the water-change reminder
///
/// A missing trend produces no note for that parameter; the reminder is
/// always last.
pub fn trend_insights(temperature: Option<&Trend>, ph: Option<&Trend>) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(3);

    if let Some(trend) = temperature {
        insights.push(match trend.direction {
            TrendDirection::Stable => Insight::new(
                InsightKind::Success,
                "Temperature has remained stable within optimal range for the analysis period.",
            ),
            TrendDirection::Rising => Insight::new(
                InsightKind::Warning,
                format!(
                    "Temperature shows an upward trend of {}%. Monitor your heater settings.",
                    trend.magnitude()
                ),
            ),
            TrendDirection::Falling => Insight::new(
                InsightKind::Warning,
                format!(
                    "Temperature shows a downward trend of {}%. Check your heater is working.",
                    trend.magnitude()
                ),
            ),
        });
    }

    if let Some(trend) = ph {
        insights.push(match trend.direction {
            TrendDirection::Falling => Insight::new(
                InsightKind::Warning,
                "pH shows a slight downward trend. Consider checking your substrate and water source.",
            ),
            TrendDirection::Rising | TrendDirection::Stable => Insight::new(
                InsightKind::Info,
                "pH levels are maintaining within acceptable parameters.",
            ),
        });
    }

    insights.push(Insight::water_change());
    insights
}
