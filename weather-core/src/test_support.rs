//! JSON builders shaped like WeatherAPI `forecast.json` responses.

use serde_json::{Value, json};

use crate::provider::ForecastResponse;

pub(crate) fn hour_json(date: &str, hour: u32) -> Value {
    json!({
        "time_epoch": 0,
        "time": format!("{date} {hour:02}:00"),
        "temp_c": 10.0 + f64::from(hour) * 0.5,
        "temp_f": 50.0,
        "is_day": 1,
        "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png", "code": 1000 },
        "wind_kph": 12.6,
        "humidity": 60,
        "feelslike_c": 9.5 + f64::from(hour) * 0.5,
        "chance_of_rain": hour,
        "chance_of_snow": 0,
        "vis_km": 10.0,
        "uv": 3.0
    })
}

pub(crate) fn day_json(date: &str) -> Value {
    json!({
        "date": date,
        "date_epoch": 0,
        "day": {
            "maxtemp_c": 24.6,
            "mintemp_c": 11.4,
            "avgtemp_c": 18.0,
            "maxwind_kph": 20.0,
            "avghumidity": 71,
            "daily_will_it_rain": 1,
            "daily_chance_of_rain": 85,
            "condition": { "text": "Light rain", "icon": "//cdn.weatherapi.com/weather/64x64/day/296.png", "code": 1183 },
            "uv": 4.0
        },
        "astro": { "sunrise": "05:50 AM", "sunset": "09:50 PM" },
        "hour": (0..24).map(|h| hour_json(date, h)).collect::<Vec<_>>()
    })
}

pub(crate) fn forecast_json(name: &str, country: &str, dates: &[&str]) -> Value {
    json!({
        "location": {
            "name": name,
            "region": "",
            "country": country,
            "lat": 48.87,
            "lon": 2.33,
            "tz_id": "Europe/Paris",
            "localtime_epoch": 0,
            "localtime": "2025-06-01 10:00"
        },
        "current": {
            "last_updated_epoch": 0,
            "temp_c": 21.5,
            "temp_f": 70.7,
            "is_day": 1,
            "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png", "code": 1003 },
            "wind_kph": 14.4,
            "pressure_mb": 1013.4,
            "humidity": 55,
            "feelslike_c": 20.6,
            "vis_km": 9.6,
            "uv": 5.3
        },
        "forecast": {
            "forecastday": dates.iter().map(|d| day_json(d)).collect::<Vec<_>>()
        }
    })
}

pub(crate) fn forecast(dates: &[&str]) -> ForecastResponse {
    serde_json::from_value(forecast_json("Paris", "France", dates)).expect("fixture should parse")
}
