/*!
 * Tests for application configuration functionality
 */

use clozecoach::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind_address(), "127.0.0.1:8080");

    assert!(config.database.path.is_none());
    assert!(!config.database.in_memory);

    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Empty host
    config.server.host = "   ".to_string();
    assert!(config.validate().is_err());
    config.server.host = "0.0.0.0".to_string();
    assert!(config.validate().is_ok());

    // Port 0
    config.server.port = 0;
    assert!(config.validate().is_err());
    config.server.port = 8080;

    // A database path and in-memory mode cannot both be set
    config.database.in_memory = true;
    config.database.path = Some("vocab.db".into());
    assert!(config.validate().is_err());

    config.database.path = None;
    assert!(config.validate().is_ok());
}

/// Test that partial config files deserialize with defaults filled in
#[test]
fn test_config_deserialization_withPartialJson_shouldApplyDefaults() {
    let config: Config = serde_json::from_str(r#"{ "server": { "port": 9000 } }"#)
        .expect("Partial config should parse");

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test log level serialization format
#[test]
fn test_logLevel_serde_shouldUseLowercaseNames() {
    let config: Config = serde_json::from_str(r#"{ "log_level": "debug" }"#)
        .expect("Config with log level should parse");
    assert_eq!(config.log_level, LogLevel::Debug);

    let serialized = serde_json::to_string(&Config::default()).unwrap();
    assert!(serialized.contains(r#""log_level":"info""#));
}

/// Test log level to filter mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapAllVariants() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

/// Test round-trip through JSON
#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.server.port = 3000;
    config.database.in_memory = true;
    config.log_level = LogLevel::Trace;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.server.port, 3000);
    assert!(parsed.database.in_memory);
    assert_eq!(parsed.log_level, LogLevel::Trace);
}
