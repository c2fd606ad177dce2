use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, Select};
use tracing::debug;
use weather_core::{
    CommandSpeaker, Config, Language, LocationResolver, Speaker, WeatherModel, spoken_summary,
    translate_model,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and default language.
    Configure,

    /// Show weather for a place name, or `coords:<lat>,<lon>`.
    Show {
        /// Address or location name.
        location: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show weather for a latitude/longitude pair.
    #[command(allow_negative_numbers = true)]
    Here {
        lat: f64,
        lon: f64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Language code for descriptions and speech, e.g. "es". Defaults to the configured one.
    #[arg(long)]
    lang: Option<String>,

    /// Print the forecast as JSON.
    #[arg(long)]
    json: bool,

    /// Read the current conditions aloud.
    #[arg(long)]
    speak: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { location, output } => {
                let config = Config::load()?.with_env_overrides();
                let model = LocationResolver::from_config(&config).resolve(&location).await?;
                present(&model, &config, &output).await?;
            }
            Command::Here { lat, lon, output } => {
                let config = Config::load()?.with_env_overrides();
                let model =
                    LocationResolver::from_config(&config).resolve_by_coordinates(lat, lon).await?;
                present(&model, &config, &output).await?;
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let language = Select::new("Default language:", Language::ALL.to_vec())
        .prompt()
        .context("Failed to read language")?;

    config.api_key = Some(api_key.trim().to_owned());
    config.language = Some(language.code().to_owned());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn present(model: &WeatherModel, config: &Config, output: &OutputArgs) -> anyhow::Result<()> {
    let lang = match &output.lang {
        Some(code) => code.parse::<Language>()?,
        None => config.language()?,
    };
    debug!(lang = lang.code(), "presenting forecast");

    let model = translate_model(model, lang);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print!("{}", render::render(&model));
    }

    if output.speak {
        CommandSpeaker::new(config.speech_command())
            .speak(&spoken_summary(&model, lang), lang)
            .await?;
    }

    Ok(())
}
