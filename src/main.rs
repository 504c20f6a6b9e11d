//! datatable - browse and edit a JSON table in the terminal.

use std::io::{stdout, Stdout};
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

use datatable::app::App;
use datatable::config::{Config, Settings};
use datatable::data::{self, Column, Rows};
use datatable::error::{AppError, Result};
use datatable::events::EventHandler;
use datatable::logging;

/// Browse, select, expand and edit rows of a JSON table.
#[derive(Debug, Parser)]
#[command(name = "datatable", version, about)]
struct Cli {
    /// JSON file with an array of row objects.
    #[arg(long)]
    rows: Option<PathBuf>,

    /// JSON file with an array of column descriptors.
    #[arg(long)]
    columns: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    let result = run(cli);
    if let Err(e) = &result {
        error!(error = %e, "Exiting with error");
        eprintln!("{}", e.user_message());
    }
    logging::shutdown();
    result.map_err(Into::into)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let (rows, columns) = load_data(&cli, &config.settings)?;

    let mut app = App::new(rows, columns, &config.settings);
    let events = EventHandler::with_tick_rate(config.settings.tick_rate_ms);

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    result
}

/// Rows and columns from the command line, then the settings, then the
/// bundled sample.
fn load_data(cli: &Cli, settings: &Settings) -> Result<(Rows, Vec<Column>)> {
    let rows = match cli.rows.as_ref().or(settings.rows_path.as_ref()) {
        Some(path) => data::load_rows(path)?,
        None => data::sample_rows()?,
    };
    let columns = match cli.columns.as_ref().or(settings.columns_path.as_ref()) {
        Some(path) => data::load_columns(path)?,
        None => data::sample_columns()?,
    };
    Ok((rows, columns))
}

/// Chain a hook that runs `restore` before the current panic hook, so a
/// panic message is not printed into the alternate screen in raw mode.
fn install_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

fn init_terminal() -> Result<Tui> {
    install_panic_hook(|| {
        let _ = restore_terminal();
    });

    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let terminal = stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))
        .and_then(|_| Ok(Terminal::new(CrosstermBackend::new(stdout()))?));

    // Raw mode is already on; leave the terminal usable for the error message
    if terminal.is_err() {
        let _ = restore_terminal();
    }
    terminal
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    stdout()
        .execute(LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))?;
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        app.update(events.next()?);
    }
    Ok(())
}
