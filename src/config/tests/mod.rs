//! Unit tests for config module
//!
//! Tests configuration types, defaults, parsing and validation.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{fs, time::Duration};

use tempfile::TempDir;

use crate::PanelError;
use crate::config::{Config, LogLevel, PollMode};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.panel.poll_interval_ms, 1000);
    assert_eq!(config.panel.poll_mode, PollMode::Overlapping);
    assert_eq!(config.panel.poll_interval(), Duration::from_secs(1));
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[panel]"));
    assert!(toml_str.contains("poll_mode = \"overlapping\""));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [panel]
        poll_interval_ms = 250
        poll_mode = "sequential"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.panel.poll_interval(), Duration::from_millis(250));
    assert_eq!(config.panel.poll_mode, PollMode::Sequential);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_panel_section_keeps_defaults() {
    let config = Config::from_toml("[panel]\npoll_mode = \"sequential\"\n").unwrap();

    assert_eq!(config.panel.poll_interval_ms, 1000);
    assert_eq!(config.panel.poll_mode, PollMode::Sequential);
}

#[test]
fn config_zero_interval_rejected() {
    let result = Config::from_toml("[panel]\npoll_interval_ms = 0\n");

    assert!(matches!(
        result,
        Err(PanelError::ConfigValidation { ref component, .. }) if component == "panel"
    ));
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result = Config::from_toml(invalid_toml);
    assert!(matches!(result, Err(PanelError::TomlParseError { .. })));
}

#[test]
fn config_unknown_log_level_rejected() {
    let result = Config::from_toml("[general]\nlog_level = \"loud\"\n");
    assert!(result.is_err());
}

#[test]
fn config_unknown_fields() {
    let toml_with_unknown = r#"
        [general]
        log_level = "info"
        unknown_field = "should be ignored"

        [unknown_section]
        some_field = "ignored"
    "#;

    let config = Config::from_toml(toml_with_unknown).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_creates_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert!(fs::read_to_string(&path).unwrap().starts_with('#'));
}

#[test]
fn load_from_reads_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[panel]\npoll_interval_ms = 500\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.panel.poll_interval_ms, 500);
}

#[test]
fn load_from_reports_file_location_on_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[panel\n").unwrap();

    match Config::load_from(&path) {
        Err(PanelError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn log_level_display() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}
