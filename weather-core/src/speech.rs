//! Spoken summaries of the current conditions.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::process::Command;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::WeatherModel,
    translate::Language,
};

pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";

/// One-paragraph summary of `model.current` in `lang`.
///
/// Languages without a template get the English text.
pub fn spoken_summary(model: &WeatherModel, lang: Language) -> String {
    let location = &model.location;
    let c = &model.current;
    let (desc, temp, humidity, wind) = (&c.description, c.temperature, c.humidity, c.wind_speed);

    match lang {
        Language::Es => format!(
            "El clima actual en {location} es {desc} con una temperatura de {temp} grados Celsius. \
             La humedad es del {humidity}% y la velocidad del viento es de {wind} kilómetros por hora."
        ),
        Language::Fr => format!(
            "Le temps actuel à {location} est {desc} avec une température de {temp} degrés Celsius. \
             L'humidité est de {humidity}% et la vitesse du vent est de {wind} kilomètres par heure."
        ),
        Language::De => format!(
            "Das aktuelle Wetter in {location} ist {desc} mit einer Temperatur von {temp} Grad Celsius. \
             Die Luftfeuchtigkeit beträgt {humidity}% und die Windgeschwindigkeit {wind} Kilometer pro Stunde."
        ),
        _ => format!(
            "The current weather in {location} is {desc} with a temperature of {temp} degrees Celsius. \
             The humidity is {humidity}% and the wind speed is {wind} kilometers per hour."
        ),
    }
}

#[async_trait]
pub trait Speaker: Send + Sync + Debug {
    async fn speak(&self, text: &str, lang: Language) -> Result<()>;
}

/// Runs an external TTS program as `<program> -v <locale> <text>`.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for CommandSpeaker {
    fn default() -> Self {
        Self::new(DEFAULT_SPEECH_COMMAND)
    }
}

#[async_trait]
impl Speaker for CommandSpeaker {
    async fn speak(&self, text: &str, lang: Language) -> Result<()> {
        let locale = lang.speech_locale();
        debug!(program = %self.program, locale, "speaking summary");

        let status = Command::new(&self.program)
            .arg("-v")
            .arg(locale)
            .arg(text)
            .status()
            .await
            .map_err(|e| WeatherError::Speech(format!("failed to run `{}`: {e}", self.program)))?;

        if !status.success() {
            return Err(WeatherError::Speech(format!("`{}` exited with {status}", self.program)));
        }

        Ok(())
    }
}
