//! Command-line argument definitions for clarify.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use super::LogLevel;

/// Command-line interface for clarify.
#[derive(Debug, Parser)]
#[command(name = "clarify")]
#[command(
    author,
    version,
    about = "GIVEN/WHEN/THEN scenario runner with TAP-like output"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Name printed in the report banner.
    #[arg(long, global = true)]
    pub suite_name: Option<String>,

    /// Diagnostic log level written to stderr.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run every scenario and write the report to stdout.
    Run,

    /// List the combinations a run would execute, without running them.
    Plan,
}
