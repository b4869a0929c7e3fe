use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;

use cityweather_core::{Config, WeatherLookup, provider_from_config};

use crate::surface::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city.
    Lookup {
        /// City name; prompted for interactively when absent.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Lookup { city } => lookup(city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_owned());
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn lookup(city: Option<String>) -> anyhow::Result<()> {
    let raw = match city {
        Some(city) => city,
        None => Text::new("City:")
            .prompt()
            .context("Failed to read city name")?,
    };

    let Some(city) = submitted_city(&raw) else {
        // Empty input aborts before any network call.
        eprintln!("Enter your city");
        return Ok(());
    };

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let lookup = WeatherLookup::new(provider);

    let mut surface = TerminalSurface;

    // Both failure kinds are already rendered onto the surface as notices;
    // they are recovered here rather than propagated.
    let _ = lookup.run(city, &mut surface).await;

    Ok(())
}

/// The trigger-side input rule: trim, refuse empty.
fn submitted_city(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
