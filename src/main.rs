use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use meterdash::api::{DataSource, SnapshotSource};
use meterdash::config::Config;
use meterdash::controller::LoadOutcome;
use meterdash::model::{Field, PollSchedule, Slot};
use meterdash::prefs::{MemoryPrefs, PreferenceStore, PrefsDb};
use meterdash::services::fetch::{spawn_fetch_service, FetchRequest, FetchResponse};
use meterdash::utils;
use meterdash::view::{Screen, ViewPort};
use meterdash::Dashboard;

mod handlers;
mod ui;

/// Electricity prepayment meter dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp>/meterdash-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Data file path or URL, overriding `data_source`
    #[arg(short, long)]
    source: Option<String>,

    /// Seconds between automatic loads
    #[arg(short, long)]
    interval: Option<u64>,

    /// Load once, print the values and exit
    #[arg(long)]
    once: bool,
}

pub struct App {
    pub dashboard: Dashboard<Screen, Box<dyn PreferenceStore>>,
    pub schedule: PollSchedule,
    pub source_label: String,
    pub should_quit: bool,

    fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    fetch_rx: mpsc::UnboundedReceiver<FetchResponse>,
}

impl App {
    fn new(config: &Config) -> Self {
        Self::with_prefs(config, open_prefs(config))
    }

    fn with_prefs(config: &Config, prefs: Box<dyn PreferenceStore>) -> Self {
        let source = config.data_source();
        let source_label = source.describe();

        let dashboard = Dashboard::new(Screen::new(), prefs);
        let (fetch_tx, fetch_rx) = spawn_fetch_service(source, dashboard.sequence());

        App {
            dashboard,
            schedule: PollSchedule::new(config.poll_interval()),
            source_label,
            should_quit: false,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Queue a scheduled load and restart the poll timer
    pub fn request_poll(&mut self) {
        if self.fetch_tx.send(FetchRequest::scheduled()).is_err() {
            tracing::error!("fetch service unavailable, scheduled load skipped");
        }
        self.schedule.mark_polled(Instant::now());
    }

    /// Start a manual refresh unless one is already running
    pub fn request_refresh(&mut self) {
        let Some(request) = self.dashboard.begin_refresh() else {
            tracing::debug!("refresh ignored: already in progress");
            return;
        };

        if self.fetch_tx.send(request).is_err() {
            self.dashboard
                .finish_refresh(Err(anyhow::anyhow!("fetch service unavailable")));
        }
    }
}

fn open_prefs(config: &Config) -> Box<dyn PreferenceStore> {
    let path = config
        .prefs_path
        .clone()
        .unwrap_or_else(PrefsDb::default_path);

    match PrefsDb::open(&path) {
        Ok(db) => {
            tracing::debug!("Preferences at {}", path.display());
            Box::new(db)
        }
        Err(e) => {
            tracing::warn!("Preferences unavailable, using session store: {:#}", e);
            Box::new(MemoryPrefs::new())
        }
    }
}

/// Route tracing output to the debug log file; nothing is installed otherwise
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log at {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meterdash=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Single load for scripts: print the six values, fail if nothing loaded
async fn run_once(source: DataSource) -> Result<()> {
    let mut dashboard = Dashboard::new(Screen::new(), MemoryPrefs::new());
    let outcome = dashboard.load_data(&source).await;

    for field in Field::ALL {
        println!(
            "{:<19}{}",
            format!("{}:", field.label()),
            dashboard.view().text(Slot::Field(field))
        );
    }

    match outcome {
        LoadOutcome::Applied => Ok(()),
        LoadOutcome::Empty => anyhow::bail!("No data available from {}", source.describe()),
        LoadOutcome::Failed | LoadOutcome::Stale => {
            anyhow::bail!("Failed to load meter data from {}", source.describe())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    tracing::debug!("Debug mode enabled");

    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    match &config_path {
        Some(path) => tracing::debug!("Loaded config from {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }

    // CLI flags win over the file
    if let Some(source) = args.source {
        config.data_source = source;
    }
    if let Some(interval) = args.interval {
        config.poll_interval_secs = interval;
    }

    if args.once {
        return run_once(config.data_source()).await;
    }

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.dashboard.expire_notifications(Instant::now());

        if app.should_quit {
            break;
        }

        // Process fetch responses (non-blocking)
        while let Ok(response) = app.fetch_rx.try_recv() {
            handlers::handle_fetch_response(app, response);
        }

        if app.schedule.is_due(Instant::now()) {
            app.request_poll();
        }

        // Short poll keeps banner animation and the countdown moving
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
