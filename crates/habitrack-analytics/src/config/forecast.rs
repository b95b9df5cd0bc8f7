// ABOUTME: Forecast configuration: default projection horizon
// ABOUTME: Defaults come from the core forecast constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use habitrack_core::constants::forecast;
use serde::{Deserialize, Serialize};

/// Forecast settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Days projected past the last observation
    pub horizon_days: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: forecast::HORIZON_DAYS,
        }
    }
}
