/*!
 * Tests for application configuration loading and validation
 */

use anyhow::Result;
use leafscan::app_config::{BackendConfig, Config, LogLevel};
use leafscan::language::Language;

use crate::common;

/// Test that a config written to disk loads back identically
#[test]
fn test_config_writtenToDisk_shouldLoadBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config {
        display_language: "hi".to_string(),
        backend: BackendConfig {
            endpoint: "http://farm-server:5000".to_string(),
            timeout_secs: 10,
        },
        log_level: LogLevel::Debug,
    };

    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    let loaded: Config = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
    assert_eq!(loaded.display_language, "hi");
    assert_eq!(loaded.backend.endpoint, "http://farm-server:5000");
    assert_eq!(loaded.backend.timeout_secs, 10);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    assert!(loaded.validate().is_ok());

    Ok(())
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"backend": {"endpoint": "http://10.0.0.2:5000"}}"#)?;

    assert_eq!(config.display_language, "en");
    assert_eq!(config.backend.endpoint, "http://10.0.0.2:5000");
    assert_eq!(config.backend.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Info);

    Ok(())
}

/// Test language parsing from the configured code
#[test]
fn test_displayLanguage_withSupportedCodes_shouldParse() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"display_language": "hi"}"#)?;
    assert_eq!(config.display_language()?, Language::Hi);

    let config = Config::default();
    assert_eq!(config.display_language()?, Language::En);

    Ok(())
}

/// Test validation failures
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let bad_endpoint = Config {
        backend: BackendConfig {
            endpoint: "farm-server without scheme".to_string(),
            ..BackendConfig::default()
        },
        ..Config::default()
    };
    assert!(bad_endpoint.validate().is_err());

    let bad_language = Config {
        display_language: "zz".to_string(),
        ..Config::default()
    };
    assert!(bad_language.validate().is_err());

    let zero_timeout = Config {
        backend: BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        },
        ..Config::default()
    };
    assert!(zero_timeout.validate().is_err());
}
