use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    location::LocationInput,
};

use super::{FORECAST_DAYS, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com `forecast.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url.trim_end_matches('/'))
    }
}

impl Default for WeatherApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_forecast(
        &self,
        api_key: &str,
        location: &LocationInput,
    ) -> Result<ForecastResponse> {
        let q = location.to_query();
        let days = FORECAST_DAYS.to_string();
        debug!(q = %q, days = FORECAST_DAYS, "requesting WeatherAPI forecast");

        let res = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("key", api_key),
                ("q", q.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), body = %truncate_body(&body), "WeatherAPI request failed");
            return Err(status_error(status, location));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn status_error(status: StatusCode, location: &LocationInput) -> WeatherError {
    match (status, location) {
        // WeatherAPI answers 403 for disabled or over-quota keys.
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => WeatherError::InvalidApiKey,
        (StatusCode::BAD_REQUEST, LocationInput::Coordinates { .. }) => {
            WeatherError::InvalidCoordinates
        }
        (StatusCode::BAD_REQUEST, LocationInput::Query(query)) => {
            WeatherError::LocationNotFound(query.clone())
        }
        (other, _) => WeatherError::Upstream { status: other.as_u16() },
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Raw `forecast.json` payload. Only the fields the normalizer reads are
/// declared; everything else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub(crate) location: WaLocation,
    pub(crate) current: WaCurrent,
    pub(crate) forecast: WaForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaLocation {
    pub(crate) name: String,
    pub(crate) country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaCondition {
    pub(crate) text: String,
    pub(crate) icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaCurrent {
    pub(crate) temp_c: f64,
    pub(crate) feelslike_c: f64,
    pub(crate) humidity: u8,
    pub(crate) wind_kph: f64,
    pub(crate) pressure_mb: f64,
    pub(crate) vis_km: f64,
    pub(crate) uv: f64,
    pub(crate) condition: WaCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaForecastHour {
    pub(crate) time: String,
    pub(crate) temp_c: f64,
    pub(crate) feelslike_c: f64,
    pub(crate) humidity: u8,
    pub(crate) wind_kph: f64,
    pub(crate) condition: WaCondition,
    #[serde(default)]
    pub(crate) chance_of_rain: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaDay {
    pub(crate) maxtemp_c: f64,
    pub(crate) mintemp_c: f64,
    pub(crate) avghumidity: u8,
    pub(crate) condition: WaCondition,
    #[serde(default)]
    pub(crate) daily_chance_of_rain: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaForecastDay {
    pub(crate) date: String,
    pub(crate) day: WaDay,
    pub(crate) hour: Vec<WaForecastHour>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WaForecast {
    pub(crate) forecastday: Vec<WaForecastDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::forecast_json;

    #[test]
    fn unauthorized_maps_to_invalid_key() {
        let loc = LocationInput::Query("Paris".into());
        assert!(matches!(status_error(StatusCode::UNAUTHORIZED, &loc), WeatherError::InvalidApiKey));
    }

    #[test]
    fn bad_request_depends_on_input_shape() {
        let coords = LocationInput::Coordinates { lat: 91.0, lon: 0.0 };
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, &coords),
            WeatherError::InvalidCoordinates
        ));

        let query = LocationInput::Query("Nowhere12345".into());
        let err = status_error(StatusCode::BAD_REQUEST, &query);
        assert!(err.to_string().contains("Nowhere12345"));
    }

    #[test]
    fn other_statuses_are_upstream_errors() {
        let loc = LocationInput::Query("Paris".into());
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, &loc);
        assert_eq!(err.to_string(), "Weather API error: 500");
    }

    #[test]
    fn forecast_url_ignores_trailing_slash() {
        let provider = WeatherApiProvider::new("http://localhost:1234/v1/");
        assert_eq!(provider.forecast_url(), "http://localhost:1234/v1/forecast.json");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(300);
        assert_eq!(truncate_body(&body).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn parses_payload_without_rain_chances() {
        let mut json = forecast_json("Paris", "France", &["2025-06-01"]);
        json["forecast"]["forecastday"][0]["hour"][0]
            .as_object_mut()
            .unwrap()
            .remove("chance_of_rain");
        json["forecast"]["forecastday"][0]["day"]
            .as_object_mut()
            .unwrap()
            .remove("daily_chance_of_rain");

        let parsed: ForecastResponse = serde_json::from_value(json).unwrap();
        let day = &parsed.forecast.forecastday[0];
        assert_eq!(day.hour[0].chance_of_rain, None);
        assert_eq!(day.day.daily_chance_of_rain, None);
    }

    #[test]
    fn missing_current_block_is_rejected() {
        let mut json = forecast_json("Paris", "France", &["2025-06-01"]);
        json.as_object_mut().unwrap().remove("current");

        assert!(serde_json::from_value::<ForecastResponse>(json).is_err());
    }
}
