//! `clarify` application entry point.
//!
//! Runs the bundled ring buffer suite and writes the TAP-like report to
//! stdout. It uses `eyre` for opaque error handling at the application
//! boundary, converting domain-specific errors into human-readable reports.
//! Diagnostic logs go to stderr so stdout stays a clean report stream.
//!
//! Configuration is loaded with layered precedence via `OrthoConfig`:
//! 1. Application defaults
//! 2. Configuration file (`~/.config/clarify/config.toml` or path from `CLARIFY_CONFIG_PATH`)
//! 3. Environment variables (`CLARIFY_*`)
//! 4. Command-line arguments

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clarify::api::{self, CommandOutcome};
use clarify::config::{AppConfig, Cli, Commands, load_config};
use clarify::demo::ring_buffer_suite;
use clarify::error::Result as ClarifyResult;
use eyre::{Report, Result as EyreResult};
use tracing::info;

/// Application entry point.
///
/// Loads configuration, installs the stderr log subscriber, then dispatches
/// to the subcommand. The process exit code is the number of failed tests,
/// capped at 255.
fn main() -> EyreResult<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli).map_err(Report::from)?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.log.level))
        .with_writer(io::stderr)
        .init();

    let outcome = run(cli.command, &config).map_err(Report::from)?;
    Ok(ExitCode::from(outcome.exit_code()))
}

/// Execute the CLI command, returning domain-specific errors.
///
/// Keeps semantic errors inside the run loop so the CLI boundary owns
/// conversion to `eyre::Report`.
fn run(command: Commands, config: &AppConfig) -> ClarifyResult<CommandOutcome> {
    let suite = ring_buffer_suite()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Run => {
            let summary = api::run_suite(&suite, config, &mut out)?;
            Ok(summary.outcome())
        }
        Commands::Plan => {
            let count = api::plan_suite(&suite, &mut out)?;
            out.flush()?;
            info!(combinations = count, "plan listed");
            Ok(CommandOutcome::Success)
        }
    }
}
