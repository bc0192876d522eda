//! Configuration data types for clarify.

use clap::ValueEnum;
use ortho_config::{OrthoConfig, OrthoResult, PostMergeContext, PostMergeHook};
use serde::{Deserialize, Serialize};

/// Verbosity of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Scenario and suite completion.
    Info,
    /// Every pass and combination.
    Debug,
    /// Every skip decision of the clause walk.
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Which parts of the TAP-like report are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Write the three-line banner before the first result.
    pub header: bool,

    /// Write the `#Failed` count and the `1..N` plan line after the last result.
    pub summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: true,
            summary: true,
        }
    }
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Maximum level written to stderr.
    pub level: LogLevel,
}

/// Root application configuration.
///
/// This structure is loaded from configuration files, environment variables,
/// and command-line arguments with layered precedence. The precedence order
/// (lowest to highest) is: defaults, configuration file, environment variables,
/// command-line arguments.
///
/// Configuration files are discovered in this order, and the first existing
/// file wins:
/// 1. Path given with `--config`
/// 2. Path specified via `CLARIFY_CONFIG_PATH` environment variable
/// 3. `.clarify.toml` in the current working directory
/// 4. `.clarify.toml` in the home directory
/// 5. `~/.config/clarify/config.toml` (XDG default)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "CLARIFY",
    post_merge_hook,
    discovery(
        app_name = "clarify",
        env_var = "CLARIFY_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".clarify.toml",
        config_cli_long = "config",
        config_cli_visible = true,
    )
)]
pub struct AppConfig {
    /// Replaces the suite's own name in the report banner.
    pub suite_name: Option<String>,

    /// Report layout.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub report: ReportConfig,

    /// Diagnostic logging.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub log: LogConfig,
}

impl PostMergeHook for AppConfig {
    fn post_merge(&mut self, _ctx: &PostMergeContext) -> OrthoResult<()> {
        // A blank name would print an empty banner; fall back to the suite's.
        if self
            .suite_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            self.suite_name = None;
        }
        Ok(())
    }
}
