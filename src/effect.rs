//! Effects - side effects declared by the reducer

use tui_dispatch::{TaskKey, TaskManager};

use crate::action::Action;
use crate::api;
use crate::config::LookupConfig;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for `city`; the result is tagged with `attempt`
    FetchWeather { attempt: u64, city: String },
}

/// Task key for one lookup attempt. Keys are unique per attempt so a newer
/// lookup never cancels one still in flight.
pub fn lookup_task_key(attempt: u64) -> TaskKey {
    TaskKey::new(format!("lookup_{attempt}"))
}

/// Spawn the request for `attempt`; its outcome comes back as an action.
pub fn spawn_lookup(
    tasks: &mut TaskManager<Action>,
    config: &LookupConfig,
    attempt: u64,
    city: String,
) {
    log::info!("lookup #{attempt}: {city:?}");
    let config = config.clone();
    tasks.spawn(lookup_task_key(attempt), async move {
        match api::fetch_current_weather(&config, &city).await {
            Ok(weather) => {
                log::info!("lookup #{attempt}: found {}", weather.city_name);
                Action::LookupDidLoad { attempt, weather }
            }
            Err(error) => {
                log::warn!("lookup #{attempt} failed ({}): {error}", error.kind());
                Action::LookupDidError { attempt, error }
            }
        }
    });
}
