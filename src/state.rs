//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::LookupError;

/// Shown when a lookup is submitted with an empty city.
pub const EMPTY_INPUT_MESSAGE: &str = "Ingresa una ciudad primero";

/// Shown for every failed lookup, whatever the cause.
pub const LOOKUP_FAILED_MESSAGE: &str = "No se encontró la ciudad";

/// Spinner animation timing for the loading indicator.
pub const SPINNER_TICK_MS: u64 = 120;
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Current conditions for one city, projected from the provider response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub city_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub wind_speed_mps: f64,
    pub condition_description: String,
}

impl WeatherResult {
    /// Whole degrees, halves rounded up (21.5 -> 22, -2.5 -> -2).
    pub fn temperature_label(&self) -> String {
        format!("{}°C", (self.temperature_celsius + 0.5).floor() as i64)
    }

    pub fn description_label(&self) -> String {
        capitalize_first(&self.condition_description)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    pub fn wind_label(&self) -> String {
        format!("{} m/s", self.wind_speed_mps)
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Which search control receives key events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Input,
    Button,
}

impl Focus {
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

/// What to do with a result that arrives after a newer attempt was issued
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum StalePolicy {
    /// Apply every result; whichever resolves last wins.
    #[default]
    LastResolved,
    /// Only apply the result of the most recently issued attempt.
    LatestIssued,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Search state (visible in debug) ---
    /// Raw input text, only ever changed by keystrokes
    #[debug(section = "Search", label = "City")]
    pub city: String,

    /// True while a lookup is in flight
    #[debug(section = "Search", label = "Loading")]
    pub loading: bool,

    /// User-facing error text, empty when there is none
    #[debug(section = "Search", label = "Error")]
    pub error: String,

    /// Latest successful result
    #[debug(section = "Search", label = "Weather", debug_fmt)]
    pub weather: Option<WeatherResult>,

    // --- Diagnostics ---
    /// Number of lookups sent so far; also the id of the latest one
    #[debug(section = "Lookup", label = "Attempts")]
    pub attempts_issued: u64,

    #[debug(section = "Lookup", label = "Stale results", debug_fmt)]
    pub stale_policy: StalePolicy,

    /// Classified cause of the latest failure; cleared by a success
    #[debug(section = "Lookup", label = "Last failure", debug_fmt)]
    pub last_failure: Option<LookupError>,

    // --- UI internals (skipped) ---
    #[debug(skip)]
    pub focus: Focus,

    #[debug(skip)]
    pub spinner_tick: u32,
}

impl AppState {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            city: String::new(),
            loading: false,
            error: String::new(),
            weather: None,
            attempts_issued: 0,
            stale_policy,
            last_failure: None,
            focus: Focus::default(),
            spinner_tick: 0,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Whether a result for `attempt` should be dropped under the current policy.
    pub fn is_stale(&self, attempt: u64) -> bool {
        match self.stale_policy {
            StalePolicy::LastResolved => false,
            StalePolicy::LatestIssued => attempt != self.attempts_issued,
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}
