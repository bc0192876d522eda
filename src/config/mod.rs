//! Configuration system for clarify.
//!
//! This module provides the configuration structures and CLI definitions for
//! the clarify runner. Loading and precedence merging is handled by the
//! `ortho_config` crate: CLI flags override environment variables, which
//! override configuration files, which override defaults.
//!
//! The configuration file is expected at `~/.config/clarify/config.toml` by
//! default, or `.clarify.toml` in the working directory.
//!
//! # Example Configuration
//!
//! ```toml
//! suite_name = "ring buffer"
//!
//! [report]
//! header = true
//! summary = true
//!
//! [log]
//! level = "warn"
//! ```

mod cli;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands};
pub use loader::{env_var_names, load_config, load_config_with_env};
pub use types::{AppConfig, LogConfig, LogLevel, ReportConfig};
