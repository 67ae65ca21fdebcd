//! Lookup configuration handed to the effect handler at startup

/// Current-conditions endpoint of OpenWeatherMap.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const UNITS: &str = "metric";
pub const LANG: &str = "es";

/// Everything a lookup needs besides the city name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    /// Sent as-is; a missing key is left for the upstream to reject.
    pub api_key: Option<String>,
    pub units: String,
    pub lang: String,
}

impl LookupConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            units: UNITS.to_string(),
            lang: LANG.to_string(),
        }
    }

    /// Point lookups at a different base URL (mock servers, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}
