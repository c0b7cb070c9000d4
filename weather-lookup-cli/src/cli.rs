use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{CustomUserError, InquireError, Password, Text, validator::Validation};
use tracing::info;
use weather_lookup_core::{LookupConfig, OpenWeatherProvider, QueryError, WeatherLookup};

use crate::surface::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Current weather for a city")]
pub struct Cli {
    /// Use this API key instead of the configured one.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Without a command, looks up the default city and then prompts for more.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default city.
    Configure,

    /// Show weather for a single city and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = LookupConfig::load()?;

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Show { city }) => {
                if let Some(key) = self.api_key {
                    config.set_api_key(key);
                }
                let lookup = build_lookup(&config)?;
                lookup.search(&city).await?;
                Ok(())
            }
            None => {
                if let Some(key) = self.api_key {
                    config.set_api_key(key);
                }
                interactive(&config).await
            }
        }
    }
}

fn build_lookup(
    config: &LookupConfig,
) -> anyhow::Result<WeatherLookup<OpenWeatherProvider, TerminalSurface>> {
    let provider = OpenWeatherProvider::new(config)?;
    Ok(WeatherLookup::new(provider, config, TerminalSurface))
}

fn configure(mut config: LookupConfig) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_validator(require_non_blank)
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let default_city = Text::new("Default city:")
        .with_default(&config.default_city)
        .with_validator(require_city)
        .prompt()
        .context("Failed to read default city")?;
    config.default_city = default_city.trim().to_string();

    config.save()?;
    println!("Saved configuration to {}", LookupConfig::config_file_path()?.display());

    Ok(())
}

async fn interactive(config: &LookupConfig) -> anyhow::Result<()> {
    let lookup = build_lookup(config)?;

    info!(city = %config.default_city, "loading default city");
    lookup.load_default().await?;

    loop {
        let input = match Text::new("City:").with_validator(require_city).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        lookup.search(&input).await?;
    }

    Ok(())
}

/// Blocks submission of blank input, so Enter on an empty prompt never searches.
fn require_city(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid(QueryError::EmptyCity.to_string().into()))
    } else {
        Ok(Validation::Valid)
    }
}

fn require_non_blank(input: &str) -> Result<Validation, CustomUserError> {
    if input.trim().is_empty() {
        Ok(Validation::Invalid("Value must not be empty.".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// Determine log filter level from verbosity count.
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
