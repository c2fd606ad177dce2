//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com client and location resolution
//! - Normalization of provider forecasts into [`WeatherModel`]
//! - Static condition translations and spoken summaries
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod clock;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod resolver;
pub mod speech;
pub mod translate;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::WeatherError;
pub use location::LocationInput;
pub use model::{CurrentConditions, DailyForecast, HourlyForecast, WeatherModel};
pub use provider::{WeatherApiProvider, WeatherProvider};
pub use resolver::LocationResolver;
pub use speech::{CommandSpeaker, Speaker, spoken_summary};
pub use translate::{Language, translate_model};
