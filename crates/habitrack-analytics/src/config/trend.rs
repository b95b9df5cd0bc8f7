// ABOUTME: Trend analysis configuration: moving-average window, look-back, epsilon, volatility window
// ABOUTME: Defaults come from the core trend constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use habitrack_core::constants::trend;
use serde::{Deserialize, Serialize};

/// Trend analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Trailing window of the moving average used for trend classification
    pub moving_average_window_days: u32,
    /// How far back the comparison moving-average point lies
    pub trend_lookback_days: u32,
    /// Absolute difference below which the trend is `stable`
    pub stable_epsilon: f64,
    /// Trailing window for volatility
    pub volatility_window_days: u32,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            moving_average_window_days: trend::MOVING_AVERAGE_WINDOW_DAYS,
            trend_lookback_days: trend::LOOKBACK_DAYS,
            stable_epsilon: trend::STABLE_EPSILON,
            volatility_window_days: trend::VOLATILITY_WINDOW_DAYS,
        }
    }
}
