//! File logging for the table session.
//!
//! The table owns the terminal, so log records go to `datatable.log` in a
//! per-user directory, rotated daily. What ends up there depends on the
//! `RUST_LOG` filter:
//!
//! - `info`: data files and config loaded, rows bulk deleted, quit
//! - `debug`: expansion and selection toggles, editors opening and closing,
//!   each published cell edit
//! - `trace`: every key, and every numeric draft that failed to parse
//!
//! Edits dropped because their row disappeared are logged at `warn`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "datatable=info,warn";

/// Log file name prefix; the appender adds the date.
const LOG_FILE: &str = "datatable.log";

/// Install the global file subscriber.
///
/// The directory is `datatable/logs` under the platform's local data
/// directory (`~/.local/share` on Linux).
///
/// # Errors
///
/// Fails if the directory cannot be determined or created, or if a global
/// subscriber is already set.
pub fn init() -> anyhow::Result<()> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "Table session started"
    );

    Ok(())
}

fn log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("datatable").join("logs"))
}

/// Record the end of the session.
pub fn shutdown() {
    tracing::info!("Table session ended");
}
