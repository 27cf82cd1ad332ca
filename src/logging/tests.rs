// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert!(LogLevel::from_u8(6).is_none());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
}

#[test]
fn test_log_level_filter_strings() {
    let directives: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        directives,
        vec!["off", "error", "warn", "info", "debug", "trace"]
    );
}

#[test]
fn test_log_level_roundtrip() {
    let level = LogLevel::try_from(2u8).unwrap();
    assert_eq!(u8::from(level), 2);
    assert_eq!(level, LogLevel::WARN);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::ERROR)
        .with_file_level(LogLevel::DEBUG)
        .with_log_file("entourage.log".to_string())
        .with_show_target(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::ERROR);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("entourage.log"));
    assert!(config.show_target());
}
