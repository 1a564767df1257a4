//! Configuration tests
//!
//! Guards that `to_toml` stays in sync with the file structs: every field
//! written out must parse back to the same value.

use super::*;
use crate::trips::{DisplayOptions, StalePolicy};

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.api_url = "http://localhost:7070/api".to_string();
    config.theme = "Nord".to_string();
    config.display.date_format = "%Y-%m-%d".to_string();
    config.display.currency = "EUR".to_string();
    config.detail.stale_responses = StalePolicy::Accept;
    config.logging.level = "tripdeck=debug,reqwest=warn".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = FileConfig::parse(&config.to_toml()).expect("round-trip");
    let loaded = Config::resolve(file, EnvOverrides::default());

    assert_eq!(loaded.api_url, config.api_url);
    assert_eq!(loaded.theme, "Nord");
    assert_eq!(loaded.display, config.display);
    assert_eq!(loaded.detail.stale_responses, StalePolicy::Accept);
    assert_eq!(loaded.logging.level, "tripdeck=debug,reqwest=warn");
    assert!(loaded.logging.file_enabled);
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_quotes_are_escaped() {
    let mut config = Config::default();
    config.display.date_format = r#"%d "of" %B"#.to_string();

    let file = FileConfig::parse(&config.to_toml()).expect("round-trip");
    let display = DisplayOptions::from_file(file.display);
    assert_eq!(display.date_format, r#"%d "of" %B"#);
}

#[test]
fn test_display_section_resolves_to_display_options() {
    let file = FileConfig::parse("[display]\ncurrency = \"EUR\"\n").expect("valid toml");
    let config = Config::resolve(file, EnvOverrides::default());

    assert_eq!(
        config.display,
        DisplayOptions {
            currency: "EUR".to_string(),
            ..DisplayOptions::default()
        }
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), EnvOverrides::default());
    assert_eq!(config.api_url, "https://tripapi.cphbusinessapps.dk/api");
    assert_eq!(config.theme, "Dark");
    assert_eq!(config.display.date_format, "%d/%m/%Y");
    assert_eq!(config.display.currency, "DKK");
    assert_eq!(config.detail.stale_responses, StalePolicy::Discard);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_file_overrides_defaults() {
    let file = FileConfig::parse(
        r#"
api_url = "http://file/api"

[detail]
stale_responses = "accept"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, EnvOverrides::default());
    assert_eq!(config.api_url, "http://file/api");
    assert_eq!(config.theme, "Dark");
    assert_eq!(config.detail.stale_responses, StalePolicy::Accept);
}

#[test]
fn test_env_overrides_file() {
    let file = FileConfig::parse("api_url = \"http://file/api\"\ntheme = \"Nord\"").unwrap();
    let env = EnvOverrides {
        api_url: Some("http://env/api".to_string()),
        theme: None,
    };

    let config = Config::resolve(file, env);
    assert_eq!(config.api_url, "http://env/api");
    assert_eq!(config.theme, "Nord");
}

#[test]
fn test_unknown_policy_falls_back_to_discard() {
    let file = FileConfig::parse("[detail]\nstale_responses = \"sometimes\"").unwrap();
    let config = Config::resolve(file, EnvOverrides::default());
    assert_eq!(config.detail.stale_responses, StalePolicy::Discard);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(FileConfig::parse("api_url = ").is_err());
    assert!(FileConfig::parse("[logging]\nfile_enabled = \"yes\"").is_err());
}

#[test]
fn test_write_default_refuses_to_overwrite() {
    let dir = std::env::temp_dir().join(format!("tripdeck-config-{}", std::process::id()));
    let path = dir.join("config.toml");
    let _ = std::fs::remove_dir_all(&dir);

    Config::write_default(&path, false).expect("first write");
    assert!(FileConfig::parse(&std::fs::read_to_string(&path).unwrap()).is_ok());

    assert!(Config::write_default(&path, false).is_err());
    assert!(Config::write_default(&path, true).is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}
