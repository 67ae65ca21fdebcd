//! Lookup flows through EffectStoreTestHarness
//!
//! Store, effects, simulated async completions and rendering together.

use clima::{
    action::Action,
    api::LookupError,
    components::{Component, LookupView, LookupViewProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, EMPTY_INPUT_MESSAGE, LOOKUP_FAILED_MESSAGE, StalePolicy, WeatherResult},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind};

fn weather_for(city: &str, temp: f64) -> WeatherResult {
    WeatherResult {
        city_name: city.into(),
        temperature_celsius: temp,
        humidity_percent: 40.0,
        wind_speed_mps: 3.1,
        condition_description: "cielo claro".into(),
    }
}

fn state_with_city(city: &str) -> AppState {
    AppState {
        city: city.into(),
        ..Default::default()
    }
}

// ============================================================================
// Lookup flows
// ============================================================================

#[test]
fn test_lookup_success_flow() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Madrid"), reducer);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.assert_state(|s| s.loading);
    harness.assert_state(|s| s.error.is_empty());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { attempt: 1, city } if city == "Madrid"),
    );

    harness.complete_action(Action::LookupDidLoad {
        attempt: 1,
        weather: weather_for("Madrid", 21.7),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.error.is_empty());
    harness.assert_state(|s| s.weather.as_ref().unwrap().city_name == "Madrid");
}

#[test]
fn test_lookup_error_flow() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Atlantis"), reducer);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.assert_state(|s| s.loading);

    harness.complete_action(Action::LookupDidError {
        attempt: 1,
        error: LookupError::NotFound,
    });
    harness.process_emitted();

    harness.assert_state(|s| !s.loading);
    harness.assert_state(|s| s.weather.is_none());
    harness.assert_state(|s| s.error == LOOKUP_FAILED_MESSAGE);
    harness.assert_state(|s| s.last_failure == Some(LookupError::NotFound));
}

#[test]
fn test_every_failure_kind_shows_same_message() {
    let failures = [
        LookupError::Network("dns".into()),
        LookupError::NotFound,
        LookupError::InvalidKey,
        LookupError::Status(503),
        LookupError::Parse("eof".into()),
    ];

    for error in failures {
        let mut harness = EffectStoreTestHarness::new(state_with_city("Lima"), reducer);
        harness.dispatch_collect(Action::LookupSubmit);
        harness.complete_action(Action::LookupDidError { attempt: 1, error });
        harness.process_emitted();
        harness.assert_state(|s| s.error == LOOKUP_FAILED_MESSAGE);
    }
}

#[test]
fn test_empty_city_emits_no_effect() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit);

    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.error == EMPTY_INPUT_MESSAGE);
    harness.assert_state(|s| !s.loading);
}

#[test]
fn test_loading_flag_cycles_once_per_attempt() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Quito"), reducer);
    harness.assert_state(|s| !s.loading);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.assert_state(|s| s.loading);

    harness.complete_action(Action::LookupDidError {
        attempt: 1,
        error: LookupError::Status(500),
    });
    harness.process_emitted();
    harness.assert_state(|s| !s.loading);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.assert_state(|s| s.loading);

    harness.complete_action(Action::LookupDidLoad {
        attempt: 2,
        weather: weather_for("Quito", 14.0),
    });
    harness.process_emitted();
    harness.assert_state(|s| !s.loading);
}

// ============================================================================
// Overlapping lookups
// ============================================================================

#[test]
fn test_overlapping_lookups_last_resolved_wins() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Roma"), reducer);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.dispatch_collect(Action::CityChange("Oslo".into()));
    harness.dispatch_collect(Action::LookupSubmit);

    let effects = harness.drain_effects();
    effects.effects_count(2);

    // Second attempt answers first, first attempt answers last
    harness.complete_action(Action::LookupDidLoad {
        attempt: 2,
        weather: weather_for("Oslo", 4.0),
    });
    harness.complete_action(Action::LookupDidLoad {
        attempt: 1,
        weather: weather_for("Roma", 25.0),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.weather.as_ref().unwrap().city_name == "Roma");
    harness.assert_state(|s| !s.loading);
}

#[test]
fn test_overlapping_lookups_latest_issued_wins() {
    let mut state = AppState::new(StalePolicy::LatestIssued);
    state.city = "Roma".into();
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.dispatch_collect(Action::LookupSubmit);
    harness.dispatch_collect(Action::CityChange("Oslo".into()));
    harness.dispatch_collect(Action::LookupSubmit);

    harness.complete_action(Action::LookupDidLoad {
        attempt: 2,
        weather: weather_for("Oslo", 4.0),
    });
    harness.complete_action(Action::LookupDidLoad {
        attempt: 1,
        weather: weather_for("Roma", 25.0),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 1, "Stale result should be dropped");
    harness.assert_state(|s| s.weather.as_ref().unwrap().city_name == "Oslo");
}

#[test]
fn test_new_attempt_keeps_previous_card_while_loading() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            city: "Lima".into(),
            weather: Some(weather_for("Quito", 14.0)),
            ..Default::default()
        },
        reducer,
    );

    harness.dispatch_collect(Action::LookupSubmit);

    harness.assert_state(|s| s.loading && s.weather.is_some());
}

// ============================================================================
// Component + Store Integration
// ============================================================================

#[test]
fn test_button_press_triggers_lookup() {
    let mut store = EffectStore::new(state_with_city("Madrid"), reducer);
    let mut component = LookupView::default();

    let mut route = |state: &AppState, code: KeyCode| -> Vec<Action> {
        let props = LookupViewProps {
            state,
            is_focused: true,
        };
        let event = EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE));
        component.handle_event(&event, props).into_iter().collect()
    };

    for action in route(store.state(), KeyCode::Tab) {
        store.dispatch(action);
    }
    let actions = route(store.state(), KeyCode::Enter);
    actions.assert_count(1);
    actions.assert_first(Action::LookupSubmit);

    let result = store.dispatch(Action::LookupSubmit);
    assert!(store.state().loading);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::FetchWeather { attempt: 1, .. }]
    ));
}

#[test]
fn test_render_after_success() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Madrid"), reducer);
    let mut component = LookupView::default();

    harness.dispatch_collect(Action::LookupSubmit);
    harness.complete_action(Action::LookupDidLoad {
        attempt: 1,
        weather: weather_for("Madrid", 21.7),
    });
    harness.process_emitted();

    let output = harness.render_plain(60, 24, |frame, area, state| {
        let props = LookupViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Cielo claro"),
        "Capitalized description should be visible:\n{}",
        output
    );
    assert!(output.contains("Humedad: 40%"), "Humidity missing:\n{}", output);
    assert!(output.contains("Viento: 3.1 m/s"), "Wind missing:\n{}", output);
}

#[test]
fn test_render_after_failure() {
    let mut harness = EffectStoreTestHarness::new(state_with_city("Atlantis"), reducer);
    let mut component = LookupView::default();

    harness.dispatch_collect(Action::LookupSubmit);
    harness.complete_action(Action::LookupDidError {
        attempt: 1,
        error: LookupError::NotFound,
    });
    harness.process_emitted();

    let output = harness.render_plain(60, 24, |frame, area, state| {
        let props = LookupViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });

    assert!(
        output.contains(LOOKUP_FAILED_MESSAGE),
        "Error should be visible:\n{}",
        output
    );
    assert!(!output.contains("Humedad"));
}
