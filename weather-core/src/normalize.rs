//! Conversion of a raw provider forecast into a [`WeatherModel`].
//!
//! This is the only place that knows the provider's payload layout. A change
//! upstream should touch nothing outside this module and
//! [`crate::provider::weatherapi`].

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::{debug, warn};

use crate::{
    error::{Result, WeatherError},
    model::{CurrentConditions, DailyForecast, HourlyForecast, WeatherModel},
    provider::weatherapi::{ForecastResponse, WaCurrent, WaForecastDay, WaForecastHour},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Days shown after today.
pub const FUTURE_DAYS: usize = 3;

/// Build the model for a response, relative to the caller's local time `now`.
///
/// Fails on the first missing or malformed piece; never returns a partially
/// filled model.
pub fn normalize(response: &ForecastResponse, now: NaiveDateTime) -> Result<WeatherModel> {
    let days = &response.forecast.forecastday;

    let today = select_today(days, now.date())?;
    let today_hourly = hours_from(&today.hour, now.hour())?;

    let forecast = days
        .iter()
        .skip(1)
        .take(FUTURE_DAYS)
        .map(daily)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        day = %today.date,
        hours = today_hourly.len(),
        future_days = forecast.len(),
        "normalized forecast"
    );

    Ok(WeatherModel {
        location: format!("{}, {}", response.location.name, response.location.country),
        current: current(&response.current),
        today_hourly,
        forecast,
    })
}

/// Day whose date equals `today`, or the first day when none does.
fn select_today(days: &[WaForecastDay], today: NaiveDate) -> Result<&WaForecastDay> {
    let key = today.format(DATE_FORMAT).to_string();

    if let Some(day) = days.iter().find(|day| day.date == key) {
        return Ok(day);
    }

    let first = days.first().ok_or_else(|| WeatherError::shape("forecast contains no days"))?;
    // TODO: surface this as a shape error once callers can tell clock skew from provider lag.
    warn!(today = %key, first = %first.date, "no forecast day matches today, using the first day");
    Ok(first)
}

/// Hours at or after `current_hour`, in provider order.
fn hours_from(hours: &[WaForecastHour], current_hour: u32) -> Result<Vec<HourlyForecast>> {
    let mut window = Vec::with_capacity(hours.len());
    for hour in hours {
        if hour_of(&hour.time)? >= current_hour {
            window.push(hourly(hour));
        }
    }
    Ok(window)
}

fn hour_of(time: &str) -> Result<u32> {
    NaiveDateTime::parse_from_str(time, HOUR_FORMAT)
        .map(|t| t.hour())
        .map_err(|e| WeatherError::shape(format!("bad hour time `{time}`: {e}")))
}

fn current(c: &WaCurrent) -> CurrentConditions {
    CurrentConditions {
        temperature: round(c.temp_c),
        description: c.condition.text.clone(),
        humidity: c.humidity,
        wind_speed: round(c.wind_kph),
        icon: c.condition.icon.clone(),
        feels_like: round(c.feelslike_c),
        pressure: round(c.pressure_mb),
        visibility: round(c.vis_km),
        uv: c.uv,
    }
}

fn hourly(h: &WaForecastHour) -> HourlyForecast {
    HourlyForecast {
        time: h.time.clone(),
        temperature: round(h.temp_c),
        description: h.condition.text.clone(),
        humidity: h.humidity,
        wind_speed: round(h.wind_kph),
        icon: h.condition.icon.clone(),
        chance_of_rain: h.chance_of_rain.unwrap_or(0),
        feels_like: round(h.feelslike_c),
    }
}

fn daily(d: &WaForecastDay) -> Result<DailyForecast> {
    let date = NaiveDate::parse_from_str(&d.date, DATE_FORMAT)
        .map_err(|e| WeatherError::shape(format!("bad forecast date `{}`: {e}", d.date)))?;

    Ok(DailyForecast {
        date: d.date.clone(),
        day_name: date.format("%A").to_string(),
        max_temp: round(d.day.maxtemp_c),
        min_temp: round(d.day.mintemp_c),
        description: d.day.condition.text.clone(),
        icon: d.day.condition.icon.clone(),
        chance_of_rain: d.day.daily_chance_of_rain.unwrap_or(0),
        humidity: d.day.avghumidity,
        hourly: d.hour.iter().map(hourly).collect(),
    })
}

/// Nearest integer, halves away from zero.
fn round(value: f64) -> i32 {
    value.round() as i32
}
