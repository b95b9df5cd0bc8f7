// ABOUTME: Tests for analytics configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use habitrack_analytics::config::env_vars;
use habitrack_analytics::{AnalyticsConfig, ConfigError, TrendConfig, ZoneConfig};
use habitrack_core::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

fn clear_env() {
    for name in env_vars::ALL {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults() {
    let config = AnalyticsConfig::default();
    assert_eq!(config.trend.moving_average_window_days, 7);
    assert_eq!(config.trend.trend_lookback_days, 7);
    assert!((config.trend.stable_epsilon - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.trend.volatility_window_days, 14);
    assert_eq!(config.forecast.horizon_days, 14);
    assert!((config.zones.heart_rate_low_below_bpm - 60.0).abs() < f64::EPSILON);
    assert!((config.zones.visceral_fat_high_min - 15.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var(env_vars::FORECAST_HORIZON_DAYS, "30");
    env::set_var(env_vars::TREND_STABLE_EPSILON, " 0.25 ");
    env::set_var(env_vars::HR_ELEVATED_ABOVE_BPM, "95");

    let config = AnalyticsConfig::load().unwrap();
    clear_env();

    assert_eq!(config.forecast.horizon_days, 30);
    assert!((config.trend.stable_epsilon - 0.25).abs() < f64::EPSILON);
    assert!((config.zones.heart_rate_elevated_above_bpm - 95.0).abs() < f64::EPSILON);
    assert_eq!(config.trend.moving_average_window_days, 7);
}

#[test]
#[serial]
fn test_unparsable_env_value() {
    clear_env();
    env::set_var(env_vars::MOVING_AVERAGE_WINDOW_DAYS, "a week");

    let result = AnalyticsConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_load_rejects_invalid_env_combination() {
    clear_env();
    env::set_var(env_vars::VISCERAL_HEALTHY_MAX, "20");

    let result = AnalyticsConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validate_rejects_zero_windows() {
    let config = AnalyticsConfig {
        trend: TrendConfig {
            volatility_window_days: 0,
            ..TrendConfig::default()
        },
        ..AnalyticsConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_validate_rejects_inverted_heart_rate_range() {
    let config = AnalyticsConfig {
        zones: ZoneConfig {
            heart_rate_low_below_bpm: 110.0,
            ..ZoneConfig::default()
        },
        ..AnalyticsConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::Parse("bad".to_owned()).into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.to_string().contains("bad"));
}

#[test]
fn test_config_deserializes_partial_json() {
    let config: AnalyticsConfig =
        serde_json::from_str(r#"{ "forecast": { "horizon_days": 5 } }"#).unwrap();
    assert_eq!(config.forecast.horizon_days, 5);
    assert_eq!(config.trend, TrendConfig::default());
}
