use tracing::{debug, info};

use crate::{
    Config,
    clock::{Clock, SystemClock},
    error::{Result, WeatherError},
    location::LocationInput,
    model::WeatherModel,
    normalize::normalize,
    provider::{WeatherApiProvider, WeatherProvider, provider_from_config},
};

/// Turns a location into a [`WeatherModel`]: one provider request, then
/// normalization against the clock.
///
/// Calls are independent. Overlapping calls may complete out of order; callers
/// that allow this must drop stale results themselves.
#[derive(Debug)]
pub struct LocationResolver<P = WeatherApiProvider, C = SystemClock> {
    provider: P,
    clock: C,
    api_key: Option<String>,
}

impl LocationResolver {
    /// WeatherAPI provider and system clock, configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(provider_from_config(config), SystemClock, config.api_key().map(str::to_owned))
    }
}

impl<P: WeatherProvider, C: Clock> LocationResolver<P, C> {
    pub fn new(provider: P, clock: C, api_key: Option<String>) -> Self {
        Self { provider, clock, api_key }
    }

    pub async fn resolve_by_coordinates(&self, lat: f64, lon: f64) -> Result<WeatherModel> {
        self.resolve_location(&LocationInput::Coordinates { lat, lon }).await
    }

    pub async fn resolve_by_query(&self, query: &str) -> Result<WeatherModel> {
        self.resolve_location(&LocationInput::Query(query.to_owned())).await
    }

    /// Single entry point for free text and `coords:<lat>,<lon>` input.
    pub async fn resolve(&self, input: &str) -> Result<WeatherModel> {
        let location = LocationInput::parse(input)?;
        self.resolve_location(&location).await
    }

    pub async fn resolve_location(&self, location: &LocationInput) -> Result<WeatherModel> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        debug!(location = %location, "resolving forecast");
        let response = self.provider.fetch_forecast(api_key, location).await?;
        let model = normalize(&response, self.clock.now())?;

        info!(location = %model.location, "forecast resolved");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, provider::ForecastResponse, test_support::forecast};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(String, LocationInput)>>,
    }

    impl RecordingProvider {
        fn calls(&self) -> Vec<(String, LocationInput)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for RecordingProvider {
        async fn fetch_forecast(
            &self,
            api_key: &str,
            location: &LocationInput,
        ) -> Result<ForecastResponse> {
            self.calls.lock().unwrap().push((api_key.to_owned(), location.clone()));
            Ok(forecast(&["2025-06-01", "2025-06-02", "2025-06-03", "2025-06-04"]))
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(23, 15, 0).unwrap())
    }

    fn resolver(api_key: Option<&str>) -> LocationResolver<RecordingProvider, FixedClock> {
        LocationResolver::new(RecordingProvider::default(), clock(), api_key.map(str::to_owned))
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        for key in [None, Some("")] {
            let resolver = resolver(key);

            let err = resolver.resolve_by_query("Paris").await.unwrap_err();
            assert!(matches!(err, WeatherError::MissingApiKey));
            let err = resolver.resolve_by_coordinates(48.8, 2.3).await.unwrap_err();
            assert!(matches!(err, WeatherError::MissingApiKey));

            assert!(resolver.provider.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn coordinates_reach_the_provider_unvalidated() {
        let resolver = resolver(Some("KEY"));
        resolver.resolve_by_coordinates(123.0, -456.5).await.unwrap();

        let calls = resolver.provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "KEY");
        assert_eq!(calls[0].1, LocationInput::Coordinates { lat: 123.0, lon: -456.5 });
    }

    #[tokio::test]
    async fn sentinel_input_routes_to_coordinates() {
        let resolver = resolver(Some("KEY"));
        resolver.resolve("coords:48.85,2.35").await.unwrap();
        resolver.resolve("Paris").await.unwrap();

        let calls = resolver.provider.calls();
        assert_eq!(calls[0].1, LocationInput::Coordinates { lat: 48.85, lon: 2.35 });
        assert_eq!(calls[1].1, LocationInput::Query("Paris".into()));
    }

    #[tokio::test]
    async fn malformed_sentinel_makes_no_request() {
        let resolver = resolver(Some("KEY"));
        let err = resolver.resolve("coords:north").await.unwrap_err();

        assert!(matches!(err, WeatherError::InvalidInput(_)));
        assert!(resolver.provider.calls().is_empty());
    }

    #[tokio::test]
    async fn model_uses_the_injected_clock() {
        let model = resolver(Some("KEY")).resolve_by_query("Paris").await.unwrap();

        assert_eq!(model.location, "Paris, France");
        assert_eq!(model.today_hourly.len(), 1);
        assert_eq!(model.today_hourly[0].time, "2025-06-01 23:00");
        assert_eq!(model.forecast.len(), 3);
    }
}
