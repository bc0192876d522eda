//! Configuration loading with layered precedence.
//!
//! This module loads configuration with the precedence order (lowest to
//! highest): application defaults, configuration file, environment variables,
//! command-line arguments.
//!
//! # Why manual layer composition?
//!
//! The `OrthoConfig` derive provides `load()`, which expects to own the whole
//! command line. The `Cli` struct dispatches subcommands through clap, so this
//! loader drives `MergeComposer` itself and honours `--config` before falling
//! back to discovery.
//!
//! # Environment variable handling
//!
//! Typed variables with unparseable values (for example
//! `CLARIFY_REPORT_HEADER=maybe`) return `ConfigError::InvalidValue`
//! immediately instead of silently falling back to defaults. String fields
//! such as `CLARIFY_SUITE_NAME` are always accepted. Variables are read through
//! [`mockable::Env`] so the environment layer can be tested without touching
//! the process environment.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::ValueEnum;
use mockable::{DefaultEnv, Env};
use ortho_config::discovery::ConfigDiscovery;
use ortho_config::serde_json::{self, Map, Value};
use ortho_config::{MergeComposer, toml};
use tracing::debug;

use crate::config::{AppConfig, Cli, LogLevel};
use crate::error::{ConfigError, Result};

/// The type of value expected from an environment variable.
#[derive(Clone, Copy)]
enum EnvVarType {
    /// String value (always accepted).
    String,
    /// Boolean value (`true`/`false`).
    Bool,
    /// One of the [`LogLevel`] names, case-insensitive.
    Level,
}

/// Specification for a single environment variable mapping.
struct EnvVarSpec {
    /// The environment variable name (e.g., `CLARIFY_SUITE_NAME`).
    env_var: &'static str,
    /// The JSON path segments (e.g., `["report", "header"]`).
    path: &'static [&'static str],
    /// The expected value type.
    var_type: EnvVarType,
}

/// Table of all environment variables and their JSON paths.
const ENV_VAR_SPECS: &[EnvVarSpec] = &[
    EnvVarSpec {
        env_var: "CLARIFY_SUITE_NAME",
        path: &["suite_name"],
        var_type: EnvVarType::String,
    },
    EnvVarSpec {
        env_var: "CLARIFY_REPORT_HEADER",
        path: &["report", "header"],
        var_type: EnvVarType::Bool,
    },
    EnvVarSpec {
        env_var: "CLARIFY_REPORT_SUMMARY",
        path: &["report", "summary"],
        var_type: EnvVarType::Bool,
    },
    EnvVarSpec {
        env_var: "CLARIFY_LOG_LEVEL",
        path: &["log", "level"],
        var_type: EnvVarType::Level,
    },
];

const CONFIG_PATH_VAR: &str = "CLARIFY_CONFIG_PATH";

/// Returns the environment variable names recognised by the config loader.
///
/// Tests use this to clear every `CLARIFY_*` variable without keeping a
/// separate list in sync.
#[must_use]
pub fn env_var_names() -> Vec<&'static str> {
    ENV_VAR_SPECS
        .iter()
        .map(|spec| spec.env_var)
        .chain(std::iter::once(CONFIG_PATH_VAR))
        .collect()
}

/// Load a configuration file and push it to the composer.
///
/// Reads through `cap_std::fs_utf8`, opening the parent directory with
/// ambient authority and the file relative to it.
fn load_config_file(path: &Utf8Path, composer: &mut MergeComposer) -> Result<()> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ParseError {
            message: format!("failed to read {path}: {e}"),
        })?;

    let value =
        toml::from_str::<serde_json::Value>(&content).map_err(|e| ConfigError::ParseError {
            message: format!("failed to parse {path}: {e}"),
        })?;

    debug!(%path, "loaded configuration file");
    composer.push_file(value, Some(path.to_path_buf()));
    Ok(())
}

/// Load configuration with full layer precedence from the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a configuration file is malformed, a typed
/// environment variable has an invalid value, or the merged layers do not
/// form a valid configuration.
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    load_config_with_env(cli, &DefaultEnv::new())
}

/// Load configuration with full layer precedence.
///
/// Sources, later overriding earlier:
/// 1. Application defaults
/// 2. Configuration file (`--config`, `CLARIFY_CONFIG_PATH`, or discovery)
/// 3. `CLARIFY_*` environment variables read from `env`
/// 4. Command-line arguments
///
/// # Errors
///
/// Returns `ConfigError` if a configuration file is malformed, a typed
/// environment variable has an invalid value, or the merged layers do not
/// form a valid configuration.
pub fn load_config_with_env<E: Env>(cli: &Cli, env: &E) -> Result<AppConfig> {
    let mut composer = MergeComposer::new();

    let defaults =
        serde_json::to_value(AppConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    if let Some(path) = resolve_config_path(cli, env) {
        load_config_file(&path, &mut composer)?;
    }

    let env_values = collect_env_vars(env)?;
    if !env_values.is_null() {
        composer.push_environment(env_values);
    }

    let cli_overrides = build_cli_overrides(cli)?;
    if !cli_overrides.is_null() {
        composer.push_cli(cli_overrides);
    }

    let config =
        AppConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;
    Ok(config)
}

/// Picks the configuration file: an existing `--config` path, then an
/// existing `CLARIFY_CONFIG_PATH`, then the first discovered candidate.
fn resolve_config_path<E: Env>(cli: &Cli, env: &E) -> Option<Utf8PathBuf> {
    cli.config
        .clone()
        .filter(|path| path.exists())
        .or_else(|| {
            env.string(CONFIG_PATH_VAR)
                .map(Utf8PathBuf::from)
                .filter(|path| path.exists())
        })
        .or_else(|| {
            let discovery = ConfigDiscovery::builder("clarify")
                .config_file_name("config.toml")
                .dotfile_name(".clarify.toml")
                .build();
            discovery
                .candidates()
                .into_iter()
                .filter(|path| path.exists())
                .find_map(|path| Utf8PathBuf::try_from(path).ok())
        })
}

/// Collect `CLARIFY_*` environment variables into a JSON value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a typed variable has an
/// unparseable value.
fn collect_env_vars<E: Env>(env: &E) -> Result<Value> {
    let mut root = Map::new();

    for spec in ENV_VAR_SPECS {
        let Some(raw_value) = env.string(spec.env_var) else {
            continue;
        };
        let json_value = parse_env_value(spec, raw_value)?;
        insert_at_path(&mut root, spec.path, json_value);
    }

    if root.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(root))
    }
}

fn parse_env_value(spec: &EnvVarSpec, raw_value: String) -> Result<Value> {
    match spec.var_type {
        EnvVarType::String => Ok(Value::String(raw_value)),
        EnvVarType::Bool => raw_value.parse::<bool>().map(Value::Bool).map_err(|_| {
            ConfigError::InvalidValue {
                field: spec.env_var.to_owned(),
                reason: format!("expected bool (true/false), got '{raw_value}'"),
            }
            .into()
        }),
        EnvVarType::Level => LogLevel::from_str(raw_value.trim(), true)
            .map_err(|_| {
                ConfigError::InvalidValue {
                    field: spec.env_var.to_owned(),
                    reason: format!(
                        "expected one of error, warn, info, debug, trace, got '{raw_value}'"
                    ),
                }
                .into()
            })
            .and_then(level_value),
    }
}

fn level_value(level: LogLevel) -> Result<Value> {
    serde_json::to_value(level).map_err(|e| {
        ConfigError::ParseError {
            message: format!("failed to serialise log level: {e}"),
        }
        .into()
    })
}

/// Insert a value at a nested path in a JSON map, creating intermediate
/// objects as needed.
fn insert_at_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((&field, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for &segment in parents {
        let entry = current
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(obj) = entry.as_object_mut() else {
            return;
        };
        current = obj;
    }

    current.insert(field.to_owned(), value);
}

/// Build a JSON value containing CLI overrides.
fn build_cli_overrides(cli: &Cli) -> Result<Value> {
    let mut overrides = Map::new();

    if let Some(ref name) = cli.suite_name {
        overrides.insert("suite_name".to_owned(), Value::String(name.clone()));
    }

    if let Some(level) = cli.log_level {
        insert_at_path(&mut overrides, &["log", "level"], level_value(level)?);
    }

    if overrides.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(overrides))
    }
}
