//! Background theme selection.
//!
//! Pure mapping from the report's coarse condition category to one of six
//! fixed themes. No state, no side effects.

use crate::model::WeatherReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Default,
}

impl Theme {
    /// Map a condition category to a theme. Matching is case-insensitive;
    /// unrecognized categories fall back to [`Theme::Default`].
    pub fn for_condition(condition: &str) -> Self {
        match condition.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "thunderstorm" => Self::Thunderstorm,
            "drizzle" => Self::Drizzle,
            _ => Self::Default,
        }
    }

    /// Theme for a report, if any. No report means no theme override.
    pub fn for_report(report: Option<&WeatherReport>) -> Option<Self> {
        report.map(|r| match r.condition.as_deref() {
            Some(condition) => Self::for_condition(condition),
            None => Self::Default,
        })
    }

    /// Background gradient color pair (start, end).
    pub const fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Self::Clear => ("#60a5fa", "#2563eb"),
            Self::Clouds => ("#9ca3af", "#4b5563"),
            Self::Rain => ("#1e40af", "#312e81"),
            Self::Snow => ("#ffffff", "#bfdbfe"),
            Self::Thunderstorm => ("#111827", "#1e3a8a"),
            Self::Drizzle => ("#93c5fd", "#3b82f6"),
            Self::Default => ("#3b82f6", "#1d4ed8"),
        }
    }

    /// Glyph shown next to the condition line.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Drizzle => "🌦️",
            Self::Default => "🌡️",
        }
    }
}
