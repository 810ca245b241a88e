// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides and rejection of out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitcoach::config::{AppConfig, Environment};
use fitcoach::constants::env_config;
use fitcoach::errors::ErrorCode;
use fitcoach::i18n::Language;
use fitcoach::logging::{LogFormat, LoggingConfig};
use fitcoach::models::SubscriptionTier;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 5] = [
    env_config::NUTRITION_WINDOW_DAYS,
    env_config::DEFAULT_DIAL_CODE,
    env_config::LANGUAGE,
    env_config::STATE_PATH,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.nutrition.window_days, 7);
    assert_eq!(config.default_dial_code, "+966");
    assert_eq!(config.language, Language::En);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::NUTRITION_WINDOW_DAYS, "30");
    env::set_var(env_config::DEFAULT_DIAL_CODE, "971");
    env::set_var(env_config::LANGUAGE, "Arabic");
    env::set_var(env_config::STATE_PATH, "/tmp/fitcoach-test/state.json");
    env::set_var(env_config::ENVIRONMENT, "testing");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Testing);
    assert_eq!(config.default_dial_code, "+971");
    assert_eq!(config.language, Language::Ar);
    assert_eq!(
        config.state_path,
        Some(PathBuf::from("/tmp/fitcoach-test/state.json"))
    );

    let calculator = config.expiry_calculator();
    assert_eq!(calculator.window_days(), 30);
    let now = common::fixed_now();
    let status = calculator.compute(common::days_ago(29), SubscriptionTier::Freemium, now);
    assert_eq!(status.days_remaining, Some(1));
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_config::NUTRITION_WINDOW_DAYS, "  ");
    let config = AppConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.nutrition.window_days, 7);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    let cases = [
        (env_config::NUTRITION_WINDOW_DAYS, "0"),
        (env_config::NUTRITION_WINDOW_DAYS, "366"),
        (env_config::NUTRITION_WINDOW_DAYS, "a week"),
        (env_config::DEFAULT_DIAL_CODE, "+49"),
        (env_config::LANGUAGE, "fr"),
    ];

    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        let result = AppConfig::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert!(err.message.contains(var), "{var}={value}: {}", err.message);
    }
}

#[test]
#[serial]
fn test_cli_logging_defaults() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(quiet.service_name, "fitcoach-cli");

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, "debug");
}
