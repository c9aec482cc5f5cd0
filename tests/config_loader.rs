use ppvcalc::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.defaults.sensitivity_pct, 90.0);
    assert_eq!(config.defaults.specificity_pct, 95.0);
    assert_eq!(config.defaults.prevalence_pct, 5.0);
    assert_eq!(config.defaults.population, 10_000);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_guard, path) = write_config(
        r#"[defaults]
prevalence_pct = 12.5
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.prevalence_pct, 12.5);
    assert_eq!(config.defaults.sensitivity_pct, 90.0);
    assert_eq!(config.defaults.population, 10_000);
}

#[test]
fn full_file_round_trips() {
    let (_guard, path) = write_config(
        r#"[defaults]
sensitivity_pct = 80.0
specificity_pct = 99.5
prevalence_pct = 1.0
population = 100000

[ui]
tick_rate_ms = 100
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.sensitivity_pct, 80.0);
    assert_eq!(config.defaults.specificity_pct, 99.5);
    assert_eq!(config.defaults.prevalence_pct, 1.0);
    assert_eq!(config.defaults.population, 100_000);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn out_of_range_percentage_is_rejected() {
    let (_guard, path) = write_config(
        r#"[defaults]
sensitivity_pct = 130.0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_positive_population_is_rejected() {
    let (_guard, path) = write_config(
        r#"[defaults]
population = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_guard, path) = write_config("defaults = [not toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
