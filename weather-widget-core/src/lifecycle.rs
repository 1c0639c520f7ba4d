//! Request lifecycle for the lookup widget.
//!
//! One controller owns the query text and the request state. Exactly one
//! logical request is awaited at a time; completions of superseded requests
//! are detected by sequence number and dropped.

use crate::{
    model::WeatherReport,
    provider::{ProviderError, WeatherProvider},
};
use tracing::debug;

/// Fixed user-facing failure message. Transport errors and non-2xx statuses
/// both surface as this; the distinction stays in [`ProviderError`].
pub const LOCATION_NOT_FOUND: &str = "Location not found. Please check the city name.";

/// The widget is always in exactly one of these.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherReport),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            Self::Success(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Handle for a started request. Carries the sequence number used to detect
/// completions that arrive after a newer request has begun.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    pub query: String,
}

#[derive(Debug, Default)]
pub struct WidgetController {
    query: String,
    state: RequestState,
    seq: u64,
}

impl WidgetController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start a request for the current query.
    ///
    /// Returns `None` without any state transition when the trimmed query is
    /// empty. Otherwise the state becomes [`RequestState::Loading`] before
    /// any network activity happens.
    pub fn begin(&mut self) -> Option<Ticket> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.seq += 1;
        self.state = RequestState::Loading;

        Some(Ticket { seq: self.seq, query: trimmed.to_string() })
    }

    /// Apply the outcome of a request started with [`WidgetController::begin`].
    ///
    /// A ticket whose sequence number is no longer current belongs to a
    /// superseded request; its outcome is dropped so a slow response cannot
    /// overwrite newer state.
    pub fn finish(&mut self, ticket: &Ticket, outcome: Result<WeatherReport, ProviderError>) {
        if ticket.seq != self.seq {
            debug!(stale = ticket.seq, current = self.seq, "dropping stale completion");
            return;
        }

        match outcome {
            Ok(report) => {
                self.state = RequestState::Success(report);
                // Clear the input after a successful search.
                self.query.clear();
            }
            Err(err) => {
                debug!(error = %err, query = %ticket.query, "weather lookup failed");
                self.state = RequestState::Failed(LOCATION_NOT_FOUND.to_string());
            }
        }
    }

    /// Drive one request end-to-end against a provider.
    pub async fn submit(&mut self, provider: &dyn WeatherProvider) {
        let Some(ticket) = self.begin() else {
            return;
        };

        let outcome = provider.current_weather(&ticket.query).await;
        self.finish(&ticket, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn report(city: &str, temp: f64) -> WeatherReport {
        WeatherReport {
            location_name: city.to_string(),
            country: Some("FR".to_string()),
            temperature_c: temp,
            feels_like_c: Some(temp - 0.5),
            condition: Some("Clear".to_string()),
            description: Some("clear sky".to_string()),
            icon: Some("01d".to_string()),
            humidity_pct: Some(60),
            wind_speed_mps: Some(3.4),
            observation_time: Utc::now(),
        }
    }

    fn not_found() -> ProviderError {
        ProviderError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: r#"{"cod":"404","message":"city not found"}"#.to_string(),
        }
    }

    #[derive(Debug)]
    struct StubProvider {
        outcome: Result<WeatherReport, ()>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn succeeding(report: WeatherReport) -> Self {
            Self { outcome: Ok(report), calls: AtomicUsize::new(0) }
        }

        fn failing() -> Self {
            Self { outcome: Err(()), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReport, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(report) => Ok(report.clone()),
                Err(()) => Err(not_found()),
            }
        }
    }

    #[tokio::test]
    async fn whitespace_query_is_a_noop() {
        let provider = StubProvider::succeeding(report("Paris", 18.3));
        let mut controller = WidgetController::new();

        controller.set_query("   ");
        controller.submit(&provider).await;

        assert_eq!(*controller.state(), RequestState::Idle);
        assert_eq!(controller.query(), "   ");
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn begin_sets_loading_before_any_network_activity() {
        let mut controller = WidgetController::new();
        controller.set_query("Paris");

        let ticket = controller.begin().expect("non-empty query must start a request");

        assert!(controller.state().is_loading());
        assert_eq!(ticket.query, "Paris");
    }

    #[test]
    fn begin_trims_the_query() {
        let mut controller = WidgetController::new();
        controller.set_query("  Paris  ");

        let ticket = controller.begin().expect("non-empty query must start a request");
        assert_eq!(ticket.query, "Paris");
    }

    #[tokio::test]
    async fn success_stores_report_and_clears_query() {
        let provider = StubProvider::succeeding(report("Paris", 18.3));
        let mut controller = WidgetController::new();

        controller.set_query("Paris");
        controller.submit(&provider).await;

        let state = controller.state();
        assert!(!state.is_loading());
        let stored = state.report().expect("state must hold the report");
        assert_eq!(stored.location_name, "Paris");
        assert_eq!(controller.query(), "");
    }

    #[tokio::test]
    async fn failure_yields_fixed_message_and_no_report() {
        let provider = StubProvider::failing();
        let mut controller = WidgetController::new();

        controller.set_query("Zzzzz");
        controller.submit(&provider).await;

        let state = controller.state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(LOCATION_NOT_FOUND));
        assert!(state.report().is_none());
    }

    #[tokio::test]
    async fn failure_discards_previous_report() {
        let mut controller = WidgetController::new();

        let ok = StubProvider::succeeding(report("Paris", 18.3));
        controller.set_query("Paris");
        controller.submit(&ok).await;
        assert!(controller.state().report().is_some());

        let bad = StubProvider::failing();
        controller.set_query("Zzzzz");
        controller.submit(&bad).await;

        assert!(controller.state().report().is_none());
        assert_eq!(controller.state().error(), Some(LOCATION_NOT_FOUND));
    }

    #[test]
    fn loading_replaces_previous_report() {
        let mut controller = WidgetController::new();

        controller.set_query("Paris");
        let ticket = controller.begin().expect("request must start");
        controller.finish(&ticket, Ok(report("Paris", 18.3)));
        assert!(controller.state().report().is_some());

        controller.set_query("London");
        controller.begin().expect("request must start");

        assert!(controller.state().is_loading());
        assert!(controller.state().report().is_none());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut controller = WidgetController::new();

        controller.set_query("Paris");
        let slow = controller.begin().expect("first request must start");

        controller.set_query("London");
        let fast = controller.begin().expect("second request must start");

        controller.finish(&fast, Ok(report("London", 12.0)));
        controller.finish(&slow, Ok(report("Paris", 18.3)));

        let stored = controller.state().report().expect("state must hold a report");
        assert_eq!(stored.location_name, "London");
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_success() {
        let mut controller = WidgetController::new();

        controller.set_query("Zzzzz");
        let slow = controller.begin().expect("first request must start");

        controller.set_query("London");
        let fast = controller.begin().expect("second request must start");

        controller.finish(&fast, Ok(report("London", 12.0)));
        controller.finish(&slow, Err(not_found()));

        assert!(controller.state().report().is_some());
        assert!(controller.state().error().is_none());
    }
}
