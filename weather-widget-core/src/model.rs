use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of current conditions for one queried location.
///
/// Replaced wholesale on every successful lookup; never merged or mutated
/// field-by-field. Fields the API may omit are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    /// ISO country code, e.g. "FR".
    pub country: Option<String>,
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    /// Coarse condition category, e.g. "Clear" or "Rain". Drives theme selection.
    pub condition: Option<String>,
    /// Longer condition text, e.g. "light rain".
    pub description: Option<String>,
    /// Provider icon identifier, e.g. "01d".
    pub icon: Option<String>,
    pub humidity_pct: Option<u8>,
    pub wind_speed_mps: Option<f64>,
    pub observation_time: DateTime<Utc>,
}
