// tripdeck - terminal browser for the trip API
//
// Lists trips, filters them by category and shows one trip's guide and
// packing items. Runs as a TUI by default; `list` and `show` print to stdout.
//
// Architecture:
// - API client (reqwest): GET /trips and GET /trips/{id}
// - State record: filter + detail slot, updated by messages, emits effects
// - TUI (ratatui): renders the state, turns input into messages
// - Runtime: tokio tasks execute effects and report back over mpsc

mod api;
mod cli;
mod config;
mod logging;
mod state;
mod trips;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before logging so their output stays clean
    if let Some(command) = &cli.command {
        if cli::handle_config_command(command)? {
            return Ok(());
        }
    }

    let config = Config::from_env();
    let log_buffer = LogBuffer::new();
    let tui_mode = cli.command.is_none();

    // Must stay alive until exit so buffered file logs flush
    let _file_guard = init_tracing(&config.logging, tui_mode.then(|| log_buffer.clone()));

    match cli.command {
        Some(Commands::List { category }) => cli::run_list(&config, category).await,
        Some(Commands::Show { id }) => cli::run_show(&config, id).await,
        Some(Commands::Config { .. }) => Ok(()),
        None => tui::run_tui(config, log_buffer).await,
    }
}

/// Initialize tracing
///
/// In TUI mode logs go to the in-memory buffer (stderr would garble the
/// display); otherwise to stderr so stdout stays pipeable. File logging
/// adds a JSON layer on a rolling file.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, tui_buffer: Option<LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("tripdeck={},reqwest=warn", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_writer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    let console_layer = match tui_buffer {
        Some(_) => None,
        None => Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_buffer.map(TuiLogLayer::new))
        .with(console_layer)
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
        }))
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled and usable
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    Some(tracing_appender::non_blocking(file_appender))
}
