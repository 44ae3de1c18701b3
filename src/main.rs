use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/// NYIT Final Exam Schedule TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the platform temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Read the schedule from a registrar CSV export instead of the network
    #[arg(long)]
    csv: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod app;
mod cache;
mod config;
mod gateway;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::{CalendarClient, ScheduleClient};
use cache::CacheDb;
use config::Config;
use gateway::{CsvFileSource, ScheduleGateway, SystemClock};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: model::Model,

    service_tx: tokio::sync::mpsc::UnboundedSender<services::ServiceRequest>,
    service_rx: tokio::sync::mpsc::UnboundedReceiver<services::ServiceEvent>,

    /// Whether a calendar is configured; drives the export hotkey's legend entry
    pub calendar_enabled: bool,

    /// Table rows visible in the viewport, recorded during render for paging
    pub visible_rows: usize,
}

impl App {
    fn new(config: Config, csv_path: Option<String>) -> Result<Self> {
        let calendar = config.calendar.as_ref().map(|calendar_config| {
            CalendarClient::new(
                calendar_config.base_url.clone(),
                calendar_config.calendar_id.clone(),
                calendar_config.token.clone(),
            )
        });
        let calendar_enabled = calendar.is_some();

        // CSV mode swaps the network source for the file and keeps the
        // cache in memory, so the on-disk cache stays untouched
        let (service_tx, service_rx) = match csv_path {
            Some(path) => {
                log_debug(&format!("Offline mode, reading schedule from {}", path));
                let gateway = ScheduleGateway::new(
                    CacheDb::open_in_memory()?,
                    CsvFileSource::new(PathBuf::from(path)),
                    SystemClock,
                );
                services::spawn_schedule_service(gateway, calendar, config.timezone.clone())
            }
            None => {
                let gateway = ScheduleGateway::new(
                    CacheDb::new()?,
                    ScheduleClient::new(config.schedule_url.clone()),
                    SystemClock,
                );
                services::spawn_schedule_service(gateway, calendar, config.timezone.clone())
            }
        };

        // The service performs the startup load on its first tick
        let mut model = model::Model::new();
        model.schedule.loading = true;

        Ok(App {
            model,
            service_tx,
            service_rx,
            calendar_enabled,
            visible_rows: 0,
        })
    }
}

fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/examtui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("examtui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config anywhere: the defaults point at the published schedule,
    // so the app still works without a file
    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let config = match get_config_path(args.config)? {
        Some(config_path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", config_path));
            }
            Config::load(&config_path)?
        }
        None => Config::default(),
    };

    // Initialize app
    let mut app = App::new(config, args.csv)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after a few seconds
        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process service events (non-blocking)
        while let Ok(event) = app.service_rx.try_recv() {
            app.handle_service_event(event);
        }

        // Poll timeout keeps CPU low when idle
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
