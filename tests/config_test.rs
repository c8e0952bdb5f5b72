//! Configuration loading tests
//!
//! Priority order: environment variables > configuration file > default values.
//! Every test reads the process environment, so all of them run serially.

use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;
use webprof::config::{load_config, validate_config, ConfigError, ClientConfig};

/// Sets `WEBPROF_*` variables and removes them again when dropped
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        EnvVars(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.0 {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_load_without_file_gives_defaults() {
    let config = load_config(None).expect("Defaults must load");

    assert_eq!(config.buffer_size, ClientConfig::default().buffer_size);
    assert_eq!(config.http_port, 80);
}

#[test]
#[serial]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{
            "http_port": 8080,
            "https_port": 8443,
            "buffer_size": 4096,
            "request_timeout_secs": 15,
            "max_concurrency": 32,
            "log_level": "debug"
        }}"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).expect("Failed to load config from file");

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.https_port, 8443);
    assert_eq!(config.buffer_size, 4096);
    assert_eq!(config.request_timeout_secs, Some(15));
    assert_eq!(config.max_concurrency, Some(32));
    assert_eq!(config.log_level, "debug");
}

#[test]
#[serial]
fn test_load_partial_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_concurrency": 4 }}"#).unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.max_concurrency, Some(4));
    assert_eq!(config.https_port, 443);
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
#[serial]
fn test_load_invalid_values() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "buffer_size": 0 }}"#).unwrap();

    let config = load_config(Some(file.path())).expect("Loading does not validate");
    assert!(matches!(
        validate_config(&config),
        Err(ConfigError::InvalidValue(_, _))
    ));
}

#[test]
#[serial]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    assert!(matches!(load_config(Some(&path)), Err(ConfigError::FileNotFound(_))));
}

#[test]
#[serial]
fn test_env_vars_without_file() {
    let _env = EnvVars::set(&[
        ("WEBPROF_HTTPS_PORT", "8443"),
        ("WEBPROF_MAX_CONCURRENCY", "7"),
    ]);

    let config = load_config(None).unwrap();

    assert_eq!(config.https_port, 8443);
    assert_eq!(config.max_concurrency, Some(7));
    assert_eq!(config.http_port, 80);
}

#[test]
#[serial]
fn test_env_vars_override_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "https_port": 9443, "max_concurrency": 2, "buffer_size": 2048 }}"#
    )
    .unwrap();

    let _env = EnvVars::set(&[
        ("WEBPROF_HTTPS_PORT", "8443"),
        ("WEBPROF_MAX_CONCURRENCY", "7"),
    ]);

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.https_port, 8443);
    assert_eq!(config.max_concurrency, Some(7));
    // Keys missing from the environment keep the file's value
    assert_eq!(config.buffer_size, 2048);
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    let _env = EnvVars::set(&[("WEBPROF_MAX_CONCURRENCY", "7")]);

    let config = load_config(None).unwrap().with_overrides(None, None, Some(3));

    assert_eq!(config.max_concurrency, Some(3));
}
