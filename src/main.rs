//! Tablescope - inspect HTML tables from the command line.
//!
//! Main entry point for the `tablescope` CLI.

mod cli;
mod cmd_table;
mod render;

use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tablescope_config::{ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::Cli;

/// Keeps the file writer flushing until the process exits.
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // File layer (text format without colors), only when a directory is configured
    let file_layer = match &logging.file_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("tablescope")
                .filename_suffix("log")
                .max_log_files(30)
                .build(log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = GUARD.set(guard);
            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        // Console layer on stderr so stdout carries only command output
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::discover(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    let validation = ConfigValidator::validate(&config)?;
    for warning in &validation.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }
    if let Some(err) = validation.into_error() {
        return Err(err.into());
    }
    debug!("Configuration: {:?}", config);

    cmd_table::handle_command(cli.command, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
