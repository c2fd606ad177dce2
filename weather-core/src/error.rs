use thiserror::Error;

/// Every way a resolve-and-normalize cycle can fail.
///
/// The variants only distinguish the cause; callers are expected to show the
/// message as-is.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("API key not configured. Set WEATHER_API_KEY or run `weather configure`.")]
    MissingApiKey,

    #[error("Invalid API key. Please check your WeatherAPI.com API key.")]
    InvalidApiKey,

    #[error("Invalid location coordinates.")]
    InvalidCoordinates,

    #[error("City \"{0}\" not found. Please check the spelling and try again.")]
    LocationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Weather API error: {status}")]
    Upstream { status: u16 },

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected weather data: {0}")]
    Shape(String),

    #[error("Speech output failed: {0}")]
    Speech(String),
}

impl WeatherError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Drops the request URL, which carries the API key.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Shape(err.to_string())
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
