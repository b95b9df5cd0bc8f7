// ABOUTME: Analytics configuration orchestrating trend, forecast, and zone settings
// ABOUTME: Provides defaults, HABITRACK_* environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! Analytics Configuration
//!
//! Tunable constants of the engine grouped by concern:
//! - `trend` - moving-average window, look-back, stability epsilon, volatility window
//! - `forecast` - projection horizon
//! - `zones` - heart-rate and visceral-fat thresholds
//!
//! Configuration is an explicit value handed to the analyzers; there is no
//! process-wide instance.

pub mod error;
pub mod forecast;
pub mod trend;
pub mod zones;

pub use error::ConfigError;
pub use forecast::ForecastConfig;
pub use trend::TrendConfig;
pub use zones::ZoneConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable names recognised by `AnalyticsConfig::from_env`
pub mod env_vars {
    /// Overrides `trend.moving_average_window_days`
    pub const MOVING_AVERAGE_WINDOW_DAYS: &str = "HABITRACK_MOVING_AVERAGE_WINDOW_DAYS";
    /// Overrides `trend.trend_lookback_days`
    pub const TREND_LOOKBACK_DAYS: &str = "HABITRACK_TREND_LOOKBACK_DAYS";
    /// Overrides `trend.stable_epsilon`
    pub const TREND_STABLE_EPSILON: &str = "HABITRACK_TREND_STABLE_EPSILON";
    /// Overrides `trend.volatility_window_days`
    pub const VOLATILITY_WINDOW_DAYS: &str = "HABITRACK_VOLATILITY_WINDOW_DAYS";
    /// Overrides `forecast.horizon_days`
    pub const FORECAST_HORIZON_DAYS: &str = "HABITRACK_FORECAST_HORIZON_DAYS";
    /// Overrides `zones.heart_rate_low_below_bpm`
    pub const HR_LOW_BELOW_BPM: &str = "HABITRACK_HR_LOW_BELOW_BPM";
    /// Overrides `zones.heart_rate_elevated_above_bpm`
    pub const HR_ELEVATED_ABOVE_BPM: &str = "HABITRACK_HR_ELEVATED_ABOVE_BPM";
    /// Overrides `zones.visceral_fat_healthy_max`
    pub const VISCERAL_HEALTHY_MAX: &str = "HABITRACK_VISCERAL_HEALTHY_MAX";
    /// Overrides `zones.visceral_fat_high_min`
    pub const VISCERAL_HIGH_MIN: &str = "HABITRACK_VISCERAL_HIGH_MIN";

    /// Every recognised variable
    pub const ALL: [&str; 9] = [
        MOVING_AVERAGE_WINDOW_DAYS,
        TREND_LOOKBACK_DAYS,
        TREND_STABLE_EPSILON,
        VOLATILITY_WINDOW_DAYS,
        FORECAST_HORIZON_DAYS,
        HR_LOW_BELOW_BPM,
        HR_ELEVATED_ABOVE_BPM,
        VISCERAL_HEALTHY_MAX,
        VISCERAL_HIGH_MIN,
    ];
}

/// Main analytics configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Trend analysis settings
    pub trend: TrendConfig,
    /// Forecast settings
    pub forecast: ForecastConfig,
    /// Zone thresholds
    pub zones: ZoneConfig,
}

impl AnalyticsConfig {
    /// Defaults with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value or
    /// the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `HABITRACK_*` environment overrides applied (not validated)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        Self::apply_env_var(
            env_vars::MOVING_AVERAGE_WINDOW_DAYS,
            &mut config.trend.moving_average_window_days,
        )?;
        Self::apply_env_var(
            env_vars::TREND_LOOKBACK_DAYS,
            &mut config.trend.trend_lookback_days,
        )?;
        Self::apply_env_var(
            env_vars::TREND_STABLE_EPSILON,
            &mut config.trend.stable_epsilon,
        )?;
        Self::apply_env_var(
            env_vars::VOLATILITY_WINDOW_DAYS,
            &mut config.trend.volatility_window_days,
        )?;
        Self::apply_env_var(
            env_vars::FORECAST_HORIZON_DAYS,
            &mut config.forecast.horizon_days,
        )?;
        Self::apply_env_var(
            env_vars::HR_LOW_BELOW_BPM,
            &mut config.zones.heart_rate_low_below_bpm,
        )?;
        Self::apply_env_var(
            env_vars::HR_ELEVATED_ABOVE_BPM,
            &mut config.zones.heart_rate_elevated_above_bpm,
        )?;
        Self::apply_env_var(
            env_vars::VISCERAL_HEALTHY_MAX,
            &mut config.zones.visceral_fat_healthy_max,
        )?;
        Self::apply_env_var(
            env_vars::VISCERAL_HIGH_MIN,
            &mut config.zones.visceral_fat_high_min,
        )?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let trend = &self.trend;
        if trend.moving_average_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "moving_average_window_days must be at least 1",
            ));
        }
        if trend.trend_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_lookback_days must be at least 1",
            ));
        }
        if trend.volatility_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "volatility_window_days must be at least 1",
            ));
        }
        if !trend.stable_epsilon.is_finite() || trend.stable_epsilon < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stable_epsilon must be a finite, non-negative number",
            ));
        }

        let zones = &self.zones;
        if !zones.heart_rate_low_below_bpm.is_finite()
            || !zones.heart_rate_elevated_above_bpm.is_finite()
            || !zones.visceral_fat_healthy_max.is_finite()
            || !zones.visceral_fat_high_min.is_finite()
        {
            return Err(ConfigError::ValueOutOfRange(
                "zone thresholds must be finite numbers",
            ));
        }
        if zones.heart_rate_low_below_bpm > zones.heart_rate_elevated_above_bpm {
            return Err(ConfigError::InvalidRange(
                "heart_rate_low_below_bpm must be <= heart_rate_elevated_above_bpm",
            ));
        }
        if zones.visceral_fat_healthy_max >= zones.visceral_fat_high_min {
            return Err(ConfigError::InvalidRange(
                "visceral_fat_healthy_max must be < visceral_fat_high_min",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val:?}")))?;
        }
        Ok(())
    }
}
