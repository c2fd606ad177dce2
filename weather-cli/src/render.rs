use chrono::NaiveDateTime;
use std::fmt::Write;
use weather_core::{HourlyForecast, WeatherModel};

/// Icon paths from the provider are scheme-relative.
fn icon_url(icon: &str) -> String {
    format!("https:{icon}")
}

/// `HH:MM` part of a provider hour stamp; the raw value if it doesn't parse.
fn clock_time(time: &str) -> String {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| time.to_string())
}

fn hour_line(out: &mut String, h: &HourlyForecast) {
    let _ = writeln!(
        out,
        "  {:>5}  {:>4}°C (feels {:>3}°C)  {:>3}% rain  {:>3} km/h  {}",
        clock_time(&h.time),
        h.temperature,
        h.feels_like,
        h.chance_of_rain,
        h.wind_speed,
        h.description,
    );
}

/// Plain-text view of current conditions, today's remaining hours and the
/// next days.
pub fn render(model: &WeatherModel) -> String {
    let mut out = String::new();
    let c = &model.current;

    let _ = writeln!(out, "{}", model.location);
    let _ = writeln!(out, "Now: {}°C, {} (feels like {}°C)", c.temperature, c.description, c.feels_like);
    let _ = writeln!(
        out,
        "  Humidity {}%  Wind {} km/h  Pressure {} mb  Visibility {} km  UV {}",
        c.humidity, c.wind_speed, c.pressure, c.visibility, c.uv
    );
    let _ = writeln!(out, "  Icon: {}", icon_url(&c.icon));

    if !model.today_hourly.is_empty() {
        let _ = writeln!(out, "\nToday");
        for h in &model.today_hourly {
            hour_line(&mut out, h);
        }
    }

    if !model.forecast.is_empty() {
        let _ = writeln!(out, "\nNext days");
        for day in &model.forecast {
            let _ = writeln!(
                out,
                "  {:<9} {}  {:>3}°C / {:>3}°C  {:>3}% rain  {:>3}% humidity  {}",
                day.day_name,
                day.date,
                day.max_temp,
                day.min_temp,
                day.chance_of_rain,
                day.humidity,
                day.description,
            );
        }
    }

    out
}
