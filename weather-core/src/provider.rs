use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, error::Result, location::LocationInput};

pub mod weatherapi;

pub use weatherapi::{DEFAULT_BASE_URL, ForecastResponse, WeatherApiProvider};

/// Days requested per lookup: today plus three.
pub const FORECAST_DAYS: u8 = 4;

/// One forecast request against the upstream weather service.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        api_key: &str,
        location: &LocationInput,
    ) -> Result<ForecastResponse>;
}

/// Construct the WeatherAPI client, honouring a base URL override from config.
pub fn provider_from_config(config: &Config) -> WeatherApiProvider {
    WeatherApiProvider::new(config.base_url())
}
