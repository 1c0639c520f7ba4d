use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{config::Config, model::WeatherReport, provider::ProviderError};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host; tests use this to target a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(city, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(ProviderError::Body)?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        Ok(parsed.into_report())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        self.fetch_current(city).await
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
    sys: Option<OwSys>,
}

impl OwCurrentResponse {
    fn into_report(self) -> WeatherReport {
        let observation_time = self.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

        let primary = self.weather.into_iter().next();
        let (condition, description, icon) = match primary {
            Some(w) => (Some(w.main), Some(w.description), Some(w.icon)),
            None => (None, None, None),
        };

        WeatherReport {
            location_name: self.name,
            country: self.sys.and_then(|s| s.country),
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            condition,
            description,
            icon,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.map(|w| w.speed),
            observation_time,
        }
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
