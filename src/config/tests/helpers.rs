//! Shared fixtures and helper functions for config tests.

use std::sync::Arc;

use mockable::MockEnv;
use ortho_config::MergeComposer;
use rstest::fixture;

use crate::config::{AppConfig, Cli, Commands, LogLevel};

/// Fixture providing an `AppConfig` parsed from a full TOML example.
#[fixture]
pub fn app_config_from_full_toml() -> AppConfig {
    let toml = r#"
        suite_name = "ring buffer"

        [report]
        header = false
        summary = true

        [log]
        level = "debug"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing an `AppConfig` parsed from a minimal TOML example.
#[fixture]
pub fn app_config_from_partial_toml() -> AppConfig {
    let toml = r#"
        [report]
        summary = false
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing a `run` command line with no global options.
#[fixture]
pub fn bare_cli() -> Cli {
    Cli {
        command: Commands::Run,
        config: None,
        suite_name: None,
        log_level: None,
    }
}

/// Helper: a mocked environment holding exactly `vars`.
pub fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let owned: Vec<(String, String)> = vars
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string().returning(move |key| {
        owned
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    });
    env
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> Result<MergeComposer, serde_json::Error> {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(AppConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `AppConfig`.
pub fn merge_config(composer: MergeComposer) -> Result<AppConfig, Arc<ortho_config::OrthoError>> {
    AppConfig::merge_from_layers(composer.layers())
}

/// Helper: Asserts that a config has all default values.
pub fn assert_config_has_defaults(config: &AppConfig) {
    assert!(config.suite_name.is_none(), "suite_name should be None");
    assert!(config.report.header, "report.header should be true");
    assert!(config.report.summary, "report.summary should be true");
    assert_eq!(config.log.level, LogLevel::Warn, "log.level should be warn");
}

/// Helper: Creates a `MergeComposer` with defaults, file, and env layers for
/// testing layer precedence.
pub fn create_composer_with_file_and_env() -> Result<MergeComposer, serde_json::Error> {
    use ortho_config::serde_json::json;

    let mut composer = create_composer_with_defaults()?;

    composer.push_file(
        json!({
            "suite_name": "from file",
            "report": { "header": false },
            "log": { "level": "info" }
        }),
        None,
    );

    composer.push_environment(json!({
        "suite_name": "from env"
    }));

    Ok(composer)
}
