use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, oneshot, watch};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod handlers;
mod ui;

use dasper::config::{self, Config, API_URL_ENV};
use dasper::model::{Model, SessionState};
use dasper::services::{
    spawn_startup, ApiRequest, ApiResponse, HealthProbeResolver, SessionHolder,
    SplashHandle, StartupOutcome, StartupPhase, StartupSequencer,
};
use dasper::session_store::{SessionStore, SharedSessionStore};
use dasper::{utils, ColorScheme};

/// DASPER terminal client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (dasper-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend URL to try before the configured endpoints
    #[arg(long)]
    api_url: Option<String>,

    /// Start with the light palette
    #[arg(long)]
    light: bool,
}

/// Env var holding a tracing filter directive (e.g. `dasper=debug`)
const LOG_ENV: &str = "DASPER_LOG";

/// Spinner frame interval
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Background health check interval once connected
const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_path = utils::get_debug_log_path();
    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %log_path.display(), "Logging initialized");
        }
        // Writing to stderr would corrupt the TUI
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

pub struct App {
    pub model: Model,
    pub config: Config,
    pub store: SharedSessionStore,
    /// Owned here so the session outlives worker restarts
    pub session: Arc<SessionHolder>,
    session_rx: watch::Receiver<SessionState>,
    pub splash: SplashHandle,
    pub startup_phase: StartupPhase,
    startup_rx: Option<oneshot::Receiver<StartupOutcome>>,
    /// Request worker, available once startup is ready
    pub api_tx: Option<mpsc::UnboundedSender<ApiRequest>>,
    api_rx: Option<mpsc::UnboundedReceiver<ApiResponse>>,
    last_spinner_tick: Instant,
    pub last_health_check: Instant,
}

impl App {
    fn new(config: Config, force_light: bool) -> Result<Self> {
        let store = match SessionStore::open(&config.session_db_path()) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "Session store unavailable, sessions will not persist");
                SessionStore::in_memory()?
            }
        }
        .into_shared();

        let color_scheme = if force_light {
            ColorScheme::Light
        } else {
            let stored = store
                .lock()
                .ok()
                .and_then(|store| store.get_dark_mode().ok().flatten());
            ColorScheme::from_dark_mode(stored.unwrap_or(config.dark_mode))
        };

        let session = Arc::new(SessionHolder::new());
        let session_rx = session.subscribe();
        let splash = SplashHandle::new();

        let sequencer = StartupSequencer::new(
            HealthProbeResolver::from_config(&config),
            splash.clone(),
            config.min_splash(),
        );
        let startup_rx = spawn_startup(sequencer);

        Ok(Self {
            model: Model::new(color_scheme),
            config,
            store,
            session,
            session_rx,
            splash,
            startup_phase: StartupPhase::Pending,
            startup_rx: Some(startup_rx),
            api_tx: None,
            api_rx: None,
            last_spinner_tick: Instant::now(),
            last_health_check: Instant::now(),
        })
    }

    /// Handle API response from the request worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// React to a new session published by the auth service
    /// Delegated to handlers::session module
    fn handle_session_change(&mut self, next: SessionState) {
        handlers::handle_session_change(self, next);
    }

    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }

    /// Drain everything that arrived since the last frame
    fn process_background(&mut self) {
        self.poll_startup();

        if self.session_rx.has_changed().unwrap_or(false) {
            let next = self.session_rx.borrow_and_update().clone();
            self.handle_session_change(next);
        }

        let mut responses = Vec::new();
        if let Some(api_rx) = self.api_rx.as_mut() {
            while let Ok(response) = api_rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.handle_api_response(response);
        }

        if self.last_spinner_tick.elapsed() >= SPINNER_INTERVAL {
            self.model.ui.spinner_tick = self.model.ui.spinner_tick.wrapping_add(1);
            self.last_spinner_tick = Instant::now();
        }

        if self.startup_phase == StartupPhase::Ready
            && self.last_health_check.elapsed() >= HEALTH_CHECK_INTERVAL
        {
            self.send_request(ApiRequest::CheckHealth);
            self.last_health_check = Instant::now();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.debug);

    let config_path = config::find_config_path(args.config.as_deref())?;
    tracing::debug!(?config_path, "Loading config");
    let mut config = Config::load(config_path.as_deref())?;

    // CLI wins over env, env over the config file
    if let Ok(url) = std::env::var(API_URL_ENV) {
        config.prepend_endpoint(&url);
    }
    if let Some(url) = &args.api_url {
        config.prepend_endpoint(url);
    }

    let mut app = App::new(config, args.light)?;

    let mut terminal = setup_terminal()?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result
}

/// Enter raw mode and the alternate screen, undoing both if either step fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let terminal = (|| -> Result<_> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    })();

    undo_on_error(terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.model, app.splash.is_visible());
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        app.process_background();

        // Short poll keeps the spinner moving without a separate tick task
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        tokio::task::yield_now().await;
    }

    tracing::info!("Quitting");
    Ok(())
}
