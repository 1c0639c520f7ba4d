use anyhow::{Result, anyhow};
use std::env;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Environment variable overriding the API base URL (used in tests).
pub const BASE_URL_VAR: &str = "WEATHER_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Runtime configuration, loaded once at startup. The API key is always
/// injected from the environment, never embedded in source.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: DEFAULT_BASE_URL.to_string() }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var(API_KEY_VAR).ok(), env::var(BASE_URL_VAR).ok())
    }

    /// Build a config from already-looked-up values. Split out from
    /// [`Config::from_env`] so tests never touch the process environment.
    pub fn from_values(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: export {API_KEY_VAR}=<your OpenWeather API key> and run again."
                )
            })?;

        let cfg = match base_url {
            Some(url) if !url.trim().is_empty() => {
                Self::new(api_key).with_base_url(url.trim().trim_end_matches('/'))
            }
            _ => Self::new(api_key),
        };

        Ok(cfg)
    }
}
