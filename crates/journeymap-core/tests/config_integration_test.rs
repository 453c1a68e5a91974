//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use journeymap_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig, MAX_ZOOM};
use journeymap_core::models::{FilterType, ValidityMode};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var("JOURNEYMAP_DATA");
    env::remove_var("JOURNEYMAP_VALIDITY");
    env::remove_var("JOURNEYMAP_FILTER");
    env::remove_var("JOURNEYMAP_ZOOM");
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("JOURNEYMAP_DATA", "/srv/map.json");
    env::set_var("JOURNEYMAP_VALIDITY", "STRICT");
    env::set_var("JOURNEYMAP_FILTER", "conference");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
data_path = "file.json"
validity = "lenient"
default_filter = "work"
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.data_path.value, PathBuf::from("/srv/map.json"));
    assert_eq!(config.data_path.source, ConfigSource::Environment);
    assert_eq!(config.validity.value, ValidityMode::Strict);
    assert_eq!(config.default_filter.value, FilterType::Conference);
    assert_eq!(config.default_filter.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("JOURNEYMAP_VALIDITY", "sometimes");
    env::set_var("JOURNEYMAP_FILTER", "home");
    env::set_var("JOURNEYMAP_ZOOM", "far");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.validity.source, ConfigSource::Default);
    assert_eq!(config.default_filter.source, ConfigSource::Default);
    assert_eq!(config.initial_zoom.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_environment_zoom_is_clamped() {
    clear_env();
    env::set_var("JOURNEYMAP_ZOOM", "42");

    let config = LayeredConfig::with_defaults().load_from_env();
    assert_eq!(config.initial_zoom.value, MAX_ZOOM);
    assert_eq!(config.initial_zoom.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_all() {
    clear_env();
    env::set_var("JOURNEYMAP_FILTER", "travel");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"default_filter = "work""#).unwrap();

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();
    assert_eq!(config.default_filter.value, FilterType::Travel);

    config.update_from_cli(CliConfigOverrides {
        default_filter: Some(FilterType::Education),
        initial_zoom: Some(3.0),
        ..Default::default()
    });

    assert_eq!(config.default_filter.value, FilterType::Education);
    assert_eq!(config.default_filter.source, ConfigSource::Cli);
    assert_eq!(config.initial_zoom.value, 3.0);

    // Verify precedence levels
    assert!(ConfigSource::Cli.precedence() > ConfigSource::Environment.precedence());
    assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
    assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());

    clear_env();
}

#[test]
fn test_missing_config_file() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/journeymap.toml");
    assert!(result.is_err());
}
