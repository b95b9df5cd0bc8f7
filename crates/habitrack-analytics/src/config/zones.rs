// ABOUTME: Zone classification thresholds for heart rate and visceral fat
// ABOUTME: Defaults come from the core zone constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use habitrack_core::constants::zones;
use serde::{Deserialize, Serialize};

/// Zone thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Heart rate strictly below this is `low`
    pub heart_rate_low_below_bpm: f64,
    /// Heart rate strictly above this is `elevated`
    pub heart_rate_elevated_above_bpm: f64,
    /// Visceral fat ratings up to this are `healthy`
    pub visceral_fat_healthy_max: f64,
    /// Visceral fat ratings from this upward are `high`
    pub visceral_fat_high_min: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            heart_rate_low_below_bpm: zones::HEART_RATE_LOW_BELOW_BPM,
            heart_rate_elevated_above_bpm: zones::HEART_RATE_ELEVATED_ABOVE_BPM,
            visceral_fat_healthy_max: zones::VISCERAL_FAT_HEALTHY_MAX,
            visceral_fat_high_min: zones::VISCERAL_FAT_HIGH_MIN,
        }
    }
}
