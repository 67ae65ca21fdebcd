//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, EMPTY_INPUT_MESSAGE, LOOKUP_FAILED_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::CityChange(city) => {
            if state.city == city {
                return DispatchResult::unchanged();
            }
            state.city = city;
            DispatchResult::changed()
        }

        // ===== Lookup actions =====
        Action::LookupSubmit => {
            if state.city.is_empty() {
                state.error = EMPTY_INPUT_MESSAGE.to_string();
                return DispatchResult::changed();
            }

            state.loading = true;
            state.error.clear();
            state.spinner_tick = 0;
            state.attempts_issued += 1;
            DispatchResult::changed_with(Effect::FetchWeather {
                attempt: state.attempts_issued,
                city: state.city.clone(),
            })
        }

        Action::LookupDidLoad { attempt, weather } => {
            if state.is_stale(attempt) {
                return DispatchResult::unchanged();
            }
            state.weather = Some(weather);
            state.error.clear();
            state.last_failure = None;
            state.loading = false;
            DispatchResult::changed()
        }

        Action::LookupDidError { attempt, error } => {
            if state.is_stale(attempt) {
                return DispatchResult::unchanged();
            }
            state.error = LOOKUP_FAILED_MESSAGE.to_string();
            state.weather = None;
            state.last_failure = Some(error);
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiFocusNext => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading {
                state.spinner_tick = state.spinner_tick.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
