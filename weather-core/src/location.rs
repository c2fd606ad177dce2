use std::{fmt, str::FromStr};

use crate::error::WeatherError;

/// Prefix that marks a free-text input as encoded coordinates, e.g.
/// `coords:48.85,2.35`.
pub const COORDS_PREFIX: &str = "coords:";

/// Where to look up the weather.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    /// Degrees, passed to the provider unvalidated.
    Coordinates { lat: f64, lon: f64 },
    /// Free-text place name, passed to the provider as typed.
    Query(String),
}

impl LocationInput {
    /// Decode user input; anything without the coordinate prefix is a query.
    pub fn parse(input: &str) -> Result<Self, WeatherError> {
        let Some(rest) = input.strip_prefix(COORDS_PREFIX) else {
            return Ok(Self::Query(input.to_owned()));
        };

        let (lat, lon) = rest.split_once(',').ok_or_else(|| {
            WeatherError::invalid_input(format!("expected `{COORDS_PREFIX}<lat>,<lon>`, got `{input}`"))
        })?;

        Ok(Self::Coordinates { lat: parse_degrees(lat, input)?, lon: parse_degrees(lon, input)? })
    }

    /// Value for the provider's `q` parameter.
    pub fn to_query(&self) -> String {
        match self {
            Self::Coordinates { lat, lon } => format!("{lat},{lon}"),
            Self::Query(query) => query.clone(),
        }
    }
}

fn parse_degrees(raw: &str, input: &str) -> Result<f64, WeatherError> {
    raw.trim()
        .parse()
        .map_err(|_| WeatherError::invalid_input(format!("invalid coordinate `{raw}` in `{input}`")))
}

impl FromStr for LocationInput {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats back into the single-entry-point form accepted by [`LocationInput::parse`].
impl fmt::Display for LocationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates { lat, lon } => write!(f, "{COORDS_PREFIX}{lat},{lon}"),
            Self::Query(query) => f.write_str(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_query() {
        let input = LocationInput::parse("  New York ").unwrap();
        assert_eq!(input, LocationInput::Query("  New York ".into()));
    }

    #[test]
    fn sentinel_decodes_to_coordinates() {
        let input = LocationInput::parse("coords:48.8566,2.3522").unwrap();
        assert_eq!(input, LocationInput::Coordinates { lat: 48.8566, lon: 2.3522 });
    }

    #[test]
    fn sentinel_tolerates_spaces_and_negatives() {
        let input: LocationInput = "coords:-33.87, 151.21".parse().unwrap();
        assert_eq!(input, LocationInput::Coordinates { lat: -33.87, lon: 151.21 });
    }

    #[test]
    fn prefix_match_is_literal() {
        let input = LocationInput::parse("Coords:1,2").unwrap();
        assert!(matches!(input, LocationInput::Query(_)));
    }

    #[test]
    fn malformed_sentinel_is_rejected() {
        assert!(matches!(LocationInput::parse("coords:12.5"), Err(WeatherError::InvalidInput(_))));
        assert!(matches!(LocationInput::parse("coords:abc,1"), Err(WeatherError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let input = LocationInput::parse("coords:123,456").unwrap();
        assert_eq!(input.to_query(), "123,456");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let input = LocationInput::Coordinates { lat: 51.5, lon: -0.12 };
        assert_eq!(input.to_string(), "coords:51.5,-0.12");
        assert_eq!(LocationInput::parse(&input.to_string()).unwrap(), input);
    }
}
