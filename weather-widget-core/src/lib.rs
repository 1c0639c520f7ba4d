//! Core library for the `weather-widget` lookup tool.
//!
//! This crate defines:
//! - Credential handling (environment-injected API key)
//! - The request lifecycle controller (idle/loading/success/failed)
//! - Abstraction over the weather provider + the OpenWeather implementation
//! - The background theme selector
//!
//! It is used by `weather-widget-cli`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod provider;
pub mod theme;

pub use config::Config;
pub use lifecycle::{LOCATION_NOT_FOUND, RequestState, Ticket, WidgetController};
pub use model::WeatherReport;
pub use provider::{ProviderError, WeatherProvider, openweather::OpenWeatherProvider};
pub use theme::Theme;
