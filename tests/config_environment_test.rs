// ABOUTME: Tests for environment-based configuration loading
// ABOUTME: Covers defaults, store URL overrides, invalid numbers, and environment parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use fittrack::config::environment::{AppConfig, Environment, StorageConfig, TrackerConfig};
use fittrack::context::TrackerContext;
use fittrack::errors::ErrorCode;
use fittrack::logging::LogFormat;
use fittrack::sensors::SimulatedStepSensor;
use serial_test::serial;
use std::env;
use std::sync::Arc;

const VARS: [&str; 4] = [
    "FITTRACK_STORE_URL",
    "RECOMMENDED_WORKOUT_MINUTES",
    "ENVIRONMENT",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    assert!(Environment::Production.is_production());
    assert!(Environment::Testing.is_testing());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_defaults_without_env() -> Result<()> {
    clear_env();
    let config = AppConfig::from_env()?;

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.tracker, TrackerConfig::default());
    assert_eq!(config.tracker.recommended_workout_minutes, 15);
    assert_eq!(config.tracker.weekly_window_days, 7);
    assert_eq!(config.storage.url, StorageConfig::default_url());
    if cfg!(feature = "sqlite") {
        assert!(config.storage.url.starts_with("sqlite:"));
        assert!(config.storage.url.ends_with("fittrack.db"));
    }
    Ok(())
}

#[test]
#[serial]
fn test_env_overrides() -> Result<()> {
    clear_env();
    env::set_var("FITTRACK_STORE_URL", "memory:");
    env::set_var("RECOMMENDED_WORKOUT_MINUTES", " 20 ");
    env::set_var("ENVIRONMENT", "production");

    let config = AppConfig::from_env()?;
    clear_env();

    assert_eq!(config.storage, StorageConfig::in_memory());
    assert_eq!(config.tracker.recommended_workout_minutes, 20);
    assert!(config.environment.is_production());
    Ok(())
}

#[test]
fn test_summary_reflects_settings_applied_after_load() {
    let mut config = AppConfig::for_testing();
    config.storage.url = "sqlite:/tmp/fittrack-override.db".into();
    config.logging = config.logging.with_level("debug");

    let summary = config.summary();
    assert_eq!(summary["store_url"], "sqlite:/tmp/fittrack-override.db");
    assert_eq!(summary["environment"], "testing");
    assert_eq!(summary["log_level"], "debug");
    assert_eq!(summary["recommended_workout_minutes"], 15);
    assert_eq!(summary["weekly_window_days"], 7);
    config.log_summary();
}

#[test]
#[serial]
fn test_invalid_minutes_are_config_errors() {
    clear_env();

    env::set_var("RECOMMENDED_WORKOUT_MINUTES", "fifteen");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    env::set_var("RECOMMENDED_WORKOUT_MINUTES", "0");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[tokio::test]
async fn test_context_from_testing_config() -> Result<()> {
    let context = TrackerContext::from_config(AppConfig::for_testing()).await?;
    assert!(!context.steps().is_available().await);
    assert!((context.water().add_glass().await - 1.0).abs() < f64::EPSILON);

    let with_sensor = context.with_sensor(Arc::new(SimulatedStepSensor::new()));
    assert!(with_sensor.steps().is_available().await);
    Ok(())
}
