use coinsel_common::logging::{sanitize_for_logging, sanitize_hex, LogConfig, LogLevel, SafeLog};
use coinsel_common::types::{AssetId, OutputRef};
use log::LevelFilter;

use test_helpers::{setup, tx_id, utxo};

#[test]
fn test_logging_init_is_idempotent() {
    setup();
    assert!(coinsel_common::init().is_ok());
    assert!(coinsel_common::init().is_ok());
    assert!(coinsel_common::logging::init(&LogConfig::default()).is_ok());
}

#[test]
fn test_short_identifiers_are_masked() {
    assert_eq!(sanitize_for_logging(""), "");
    assert_eq!(sanitize_for_logging("abcd"), "*****");
    assert_eq!(sanitize_for_logging("12345678"), "*****");
    assert_eq!(sanitize_for_logging("123456789"), "1234...6789");
}

#[test]
fn test_output_ref_is_truncated() {
    let output_ref = OutputRef::new(tx_id(0xab), 3);

    assert_eq!(output_ref.safe_log_format(), "abab...abab#3");
    assert!(!output_ref.safe_log_format().contains(&hex::encode(tx_id(0xab))));
}

#[test]
fn test_asset_and_utxo_formats() {
    let token = AssetId::new(vec![0x0f; 28], b"HOSKY".to_vec());
    assert_eq!(token.safe_log_format(), format!("0f0f...0f0f.{}", hex::encode("HOSKY")));

    let utxos = vec![utxo(0x11, 0, 5), utxo(0x22, 1, 7)];
    assert_eq!(
        utxos[..].safe_log_format(),
        "[1111...1111#0 (5 lovelace), 2222...2222#1 (7 lovelace)]"
    );
    assert_eq!(sanitize_hex(&[0xff; 2]), "*****");
}

#[test]
fn test_level_conversion() {
    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
}

#[test]
fn test_log_config_defaults_fill_missing_fields() {
    let config: LogConfig = toml::from_str("level = \"warn\"").unwrap();
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(config.log_file, None);
    assert!(config.console_logging);
    assert!(config.include_timestamps);
}

#[test]
fn test_level_can_be_raised_after_init() {
    setup();

    coinsel_common::logging::set_log_level(LogLevel::Debug);
    let debug_enabled = log::log_enabled!(log::Level::Debug);
    coinsel_common::logging::set_log_level(LogLevel::Error);

    assert!(debug_enabled, "debug records should pass once the level is raised");
    assert!(!log::log_enabled!(log::Level::Warn));
}
