use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use connect_four::config::{AppConfig, BoardSize, LogConfig};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Preselected board size (overrides the config file)
    #[arg(long, value_enum)]
    size: Option<BoardSize>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Handle for swapping in the configured filter once the config is loaded.
/// `None` when `RUST_LOG` decides the filter.
type FilterHandle = Option<reload::Handle<EnvFilter, Registry>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging comes up before the config so config loading can log too.
    let filter_handle = match &cli.log_file {
        Some(path) => init_logging(path)?,
        None => None,
    };

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(handle) = filter_handle {
        let filter = EnvFilter::try_new(&config.log.filter)?;
        handle.reload(filter).context("applying log.filter")?;
    }

    // A size on the command line replaces any configured dimensions.
    if let Some(size) = cli.size {
        config.game.size = size;
        config.game.height = None;
        config.game.width = None;
    }

    let mut app = App::new(&config).context("creating game")?;
    run(&mut app).context("running terminal UI")
}

fn init_logging(path: &Path) -> Result<FilterHandle> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::try_new(LogConfig::default().filter)?, false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();

    tracing::info!("Connect Four starting");
    Ok((!from_env).then_some(handle))
}

fn run(app: &mut App) -> std::io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
