//! Tests for GameConfig loading and defaults.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use ringside::config::GameConfig;

/// Writes a config file into the temp dir and returns its path.
fn write_config(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_defaults_apply_when_fields_omitted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "partial.toml",
        r#"backend_url = "http://example.test:9000"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.backend_url(), "http://example.test:9000");
    assert_eq!(config.lobby_delay(), Duration::from_millis(1000));
    assert_eq!(config.ping_interval(), Duration::from_secs(5));
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
}

#[test]
fn test_full_config_parses() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "full.toml",
        r#"backend_url = "http://example.test:9000"
connect_timeout_secs = 3
ping_interval_secs = 1
lobby_delay_ms = 250
log_file = "client.log"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.connect_timeout(), Duration::from_secs(3));
    assert_eq!(config.ping_interval(), Duration::from_secs(1));
    assert_eq!(config.lobby_delay(), Duration::from_millis(250));
    assert_eq!(config.log_file(), "client.log");
}

#[test]
fn test_invalid_toml_fails_with_context() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "bad.toml", "this is not valid toml !!!@@@");

    let err = GameConfig::from_file(&path)
        .err()
        .expect("Invalid TOML should fail");
    assert!(
        err.message.contains("parse"),
        "Unexpected message: {}",
        err.message
    );
}

#[test]
fn test_missing_file_fails() {
    let result = GameConfig::from_file("/this/path/does/not/exist/ringside.toml");
    assert!(result.is_err());
}

#[test]
fn test_backend_settings_derive_from_config() {
    let config = GameConfig::default();
    let backend = config.backend();
    assert_eq!(backend.base_url(), config.backend_url());
    assert_eq!(*backend.ping_interval(), config.ping_interval());
    assert_eq!(*backend.connect_timeout(), config.connect_timeout());
}
