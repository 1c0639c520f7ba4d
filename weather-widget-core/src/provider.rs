use crate::model::WeatherReport;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Errors from a weather provider.
///
/// The lifecycle controller collapses every variant into one fixed
/// user-facing message; the detail here exists for logs and tests.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city name, metric units.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}
