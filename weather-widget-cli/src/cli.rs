use clap::Parser;
use weather_widget_core::{Config, OpenWeatherProvider, WidgetController};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "City weather lookup")]
pub struct Cli {
    /// City to look up. Without it, an interactive prompt loop starts.
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let provider = OpenWeatherProvider::from_config(&config);
        let mut controller = WidgetController::new();

        match self.city {
            Some(city) => {
                controller.set_query(city);
                controller.submit(&provider).await;
                println!("{}", render::state(controller.state()));
                Ok(())
            }
            None => interactive_loop(&provider, &mut controller).await,
        }
    }
}

/// Prompt for a location, look it up, render, repeat. Ctrl-C / Esc exits.
async fn interactive_loop(
    provider: &OpenWeatherProvider,
    controller: &mut WidgetController,
) -> anyhow::Result<()> {
    loop {
        let input = match inquire::Text::new("Enter location:").prompt() {
            Ok(input) => input,
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        controller.set_query(input);
        controller.submit(provider).await;
        println!("{}", render::state(controller.state()));
    }
}
