//! Actions for the lookup screen

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::LookupError;
use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City input =====
    /// Input text changed (one keystroke or edit)
    CityChange(String),

    // ===== Lookup category =====
    /// Intent: run a lookup for the current city (Enter or "Buscar")
    LookupSubmit,

    /// Result: lookup `attempt` succeeded
    LookupDidLoad { attempt: u64, weather: WeatherResult },

    /// Result: lookup `attempt` failed
    LookupDidError { attempt: u64, error: LookupError },

    // ===== UI category =====
    /// Move focus between the input and the button
    UiFocusNext,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
