//! OpenWeatherMap current-conditions client

use std::sync::OnceLock;

use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LookupConfig;
use crate::state::WeatherResult;

/// Why a lookup failed. The UI shows one message for all of these.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("city not found")]
    NotFound,
    #[error("API key rejected")]
    InvalidKey,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response parse error: {0}")]
    Parse(String),
}

impl LookupError {
    /// Short machine-friendly name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Network(_) => "network",
            LookupError::NotFound => "not_found",
            LookupError::InvalidKey => "invalid_key",
            LookupError::Status(_) => "status",
            LookupError::Parse(_) => "parse",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: CurrentMain,
    weather: Vec<Condition>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

/// Full request URL for `city`, with the city percent-encoded.
pub fn request_url(config: &LookupConfig, city: &str) -> String {
    format!(
        "{}?q={}&appid={}&units={}&lang={}",
        config.endpoint,
        urlencoding::encode(city),
        urlencoding::encode(config.api_key.as_deref().unwrap_or_default()),
        config.units,
        config.lang,
    )
}

/// Map a non-success status to a failure kind.
fn classify_status(status: StatusCode) -> LookupError {
    match status {
        StatusCode::NOT_FOUND => LookupError::NotFound,
        StatusCode::UNAUTHORIZED => LookupError::InvalidKey,
        other => LookupError::Status(other.as_u16()),
    }
}

/// Project the provider payload; only the first condition entry is used.
pub fn parse_current(body: &str) -> Result<WeatherResult, LookupError> {
    let data: CurrentResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Parse("empty weather list".into()))?;

    Ok(WeatherResult {
        city_name: data.name,
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        wind_speed_mps: data.wind.speed,
        condition_description: condition.description,
    })
}

/// Fetch current conditions for `city`.
pub async fn fetch_current_weather(
    config: &LookupConfig,
    city: &str,
) -> Result<WeatherResult, LookupError> {
    let url = request_url(config, city);
    log::debug!("GET {} q={city:?}", config.endpoint);

    let response = http_client()
        .get(&url)
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(classify_status(status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    parse_current(&body)
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
