//! Clima - city weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use clima::action::Action;
use clima::components::{Component, LookupView, LookupViewProps};
use clima::config::{API_KEY_ENV, DEFAULT_ENDPOINT, LookupConfig};
use clima::effect::{Effect, spawn_lookup};
use clima::logging;
use clima::reducer::reducer;
use clima::state::{AppState, SPINNER_TICK_MS, StalePolicy};
use clima::theme::{Theme, ThemeName};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Look up current weather for a city (OpenWeatherMap)
#[derive(Parser, Debug)]
#[command(name = "clima")]
#[command(about = "Type a city, press Enter, see the weather")]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Current-weather endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Visual preset
    #[arg(long, value_enum, default_value_t = ThemeName::Classic)]
    theme: ThemeName,

    /// Ignore results from lookups superseded by a newer one
    #[arg(long)]
    latest_only: bool,

    /// Log file (defaults to clima.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ClimaComponentId {
    Lookup,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ClimaContext {
    Main,
}

impl EventRoutingState<ClimaComponentId, ClimaContext> for AppState {
    fn focused(&self) -> Option<ClimaComponentId> {
        Some(ClimaComponentId::Lookup)
    }

    fn modal(&self) -> Option<ClimaComponentId> {
        None
    }

    fn binding_context(&self, _id: ClimaComponentId) -> ClimaContext {
        ClimaContext::Main
    }

    fn default_context(&self) -> ClimaContext {
        ClimaContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        endpoint,
        theme,
        latest_only,
        log_file,
        log_level,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init_file_logger(&log_path, log_level)?;

    let config = LookupConfig::new(api_key).with_endpoint(endpoint);
    if !config.has_api_key() {
        log::warn!("{API_KEY_ENV} is not set; lookups will be rejected upstream");
    }
    let stale_policy = if latest_only {
        StalePolicy::LatestIssued
    } else {
        StalePolicy::LastResolved
    };
    log::info!(
        "starting: endpoint={} theme={:?} stale_policy={:?}",
        config.endpoint,
        theme,
        stale_policy
    );

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(stale_policy))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        Theme::from_name(theme),
        config,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    log::info!("exiting");
    Ok(())
}

struct ClimaUi {
    view: LookupView,
}

impl ClimaUi {
    fn new(theme: Theme) -> Self {
        Self {
            view: LookupView::new(theme),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ClimaComponentId>,
    ) {
        event_ctx.set_component_area(ClimaComponentId::Lookup, area);

        let props = LookupViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = LookupViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    theme: Theme,
    config: LookupConfig,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ClimaUi::new(theme)));
    let mut bus: EventBus<AppState, Action, ClimaComponentId, ClimaContext> = EventBus::new();
    let keybindings: Keybindings<ClimaContext> = Keybindings::new();

    let ui_lookup = Rc::clone(&ui);
    bus.register(ClimaComponentId::Lookup, move |event, state| {
        ui_lookup.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &config),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, config: &LookupConfig) {
    match effect {
        Effect::FetchWeather { attempt, city } => {
            spawn_lookup(ctx.tasks(), config, attempt, city);
        }
    }
}
