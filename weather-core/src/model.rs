use serde::{Deserialize, Serialize};

/// UI-ready forecast for one location.
///
/// Built fresh on every successful lookup and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherModel {
    /// `"City, Country"`.
    pub location: String,
    pub current: CurrentConditions,
    /// Today's hours from the current hour onwards.
    pub today_hourly: Vec<HourlyForecast>,
    /// Up to three days following today.
    pub forecast: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub description: String,
    pub humidity: u8,
    /// km/h
    pub wind_speed: i32,
    /// Provider-relative icon path, e.g. `//cdn.weatherapi.com/...`.
    pub icon: String,
    pub feels_like: i32,
    /// mb
    pub pressure: i32,
    /// km
    pub visibility: i32,
    pub uv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Provider local time, `YYYY-MM-DD HH:MM`.
    pub time: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: i32,
    pub icon: String,
    pub chance_of_rain: u8,
    pub feels_like: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// English weekday name, e.g. `"Monday"`.
    pub day_name: String,
    pub max_temp: i32,
    pub min_temp: i32,
    pub description: String,
    pub icon: String,
    pub chance_of_rain: u8,
    pub humidity: u8,
    pub hourly: Vec<HourlyForecast>,
}
