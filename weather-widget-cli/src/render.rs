//! Human-friendly output formatting.
//!
//! Pure string builders so each piece is testable without a terminal.

use weather_widget_core::{RequestState, Theme, WeatherReport};

const PLACEHOLDER: &str = "Enter a location to get weather details.";

/// Round a Celsius value the way the widget displays it: whole degrees.
pub fn format_temp_c(value: f64) -> String {
    format!("{}°C", value.round() as i64)
}

/// Render the current request state as a block of output lines.
pub fn state(state: &RequestState) -> String {
    match state {
        RequestState::Idle => PLACEHOLDER.to_string(),
        RequestState::Loading => "Loading weather data...".to_string(),
        RequestState::Failed(msg) => msg.clone(),
        RequestState::Success(report) => self::report(report),
    }
}

fn report(report: &WeatherReport) -> String {
    let theme = match report.condition.as_deref() {
        Some(condition) => Theme::for_condition(condition),
        None => Theme::Default,
    };

    let location = match report.country.as_deref() {
        Some(country) => format!("{}, {}", report.location_name, country),
        None => report.location_name.clone(),
    };

    let mut lines = vec![format!(
        "{} {}  {}",
        theme.emoji(),
        format_temp_c(report.temperature_c),
        themed(&location, theme),
    )];

    if let Some(description) = &report.description {
        lines.push(description.clone());
    }
    if let Some(feels_like) = report.feels_like_c {
        lines.push(format!("Feels like: {}", format_temp_c(feels_like)));
    }
    lines.push(format!(
        "Humidity: {}",
        report.humidity_pct.map_or_else(|| "N/A".to_string(), |h| format!("{h}%")),
    ));
    lines.push(format!(
        "Wind speed: {}",
        report.wind_speed_mps.map_or_else(|| "N/A".to_string(), |w| format!("{w} m/s")),
    ));

    lines.join("\n")
}

/// Color `text` with the theme's gradient start color (24-bit ANSI).
fn themed(text: &str, theme: Theme) -> String {
    let (start, _) = theme.gradient();
    match parse_hex(start) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
