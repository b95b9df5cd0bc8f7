// ABOUTME: Threshold zone classification for heart rate and visceral fat, plus morning/evening split
// ABOUTME: Pure lookups; thresholds come from ZoneConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::{NaiveDate, NaiveTime, Timelike};
use habitrack_core::constants::zones::MIDDAY_HOUR;
use habitrack_core::MetricEntry;
use serde::{Deserialize, Serialize};

use crate::config::ZoneConfig;

/// Resting heart-rate zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartRateZone {
    /// Below the normal range
    Low,
    /// Within the normal range
    Normal,
    /// Above the normal range
    Elevated,
}

/// Visceral fat rating zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisceralFatZone {
    /// Healthy rating
    Healthy,
    /// Elevated rating
    Elevated,
    /// High rating
    High,
}

/// First and last reading of a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MorningEvening {
    /// Earliest reading of the day
    pub morning: Option<f64>,
    /// Latest reading of the day
    pub evening: Option<f64>,
}

impl MorningEvening {
    /// Evening minus morning, when both readings exist
    #[must_use]
    pub fn difference(&self) -> Option<f64> {
        Some(self.evening? - self.morning?)
    }
}

/// Zone classifier with configurable thresholds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneClassifier {
    thresholds: ZoneConfig,
}

impl ZoneClassifier {
    /// Create a classifier with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from configuration
    #[must_use]
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self {
            thresholds: config.clone(),
        }
    }

    /// Classify a heart rate; `None` for a non-finite reading
    #[must_use]
    pub fn heart_rate_zone(&self, bpm: f64) -> Option<HeartRateZone> {
        if !bpm.is_finite() {
            return None;
        }
        let zone = if bpm < self.thresholds.heart_rate_low_below_bpm {
            HeartRateZone::Low
        } else if bpm > self.thresholds.heart_rate_elevated_above_bpm {
            HeartRateZone::Elevated
        } else {
            HeartRateZone::Normal
        };
        Some(zone)
    }

    /// Classify a visceral fat rating; `None` for a non-finite rating
    #[must_use]
    pub fn visceral_fat_zone(&self, rating: f64) -> Option<VisceralFatZone> {
        if !rating.is_finite() {
            return None;
        }
        let zone = if rating <= self.thresholds.visceral_fat_healthy_max {
            VisceralFatZone::Healthy
        } else if rating < self.thresholds.visceral_fat_high_min {
            VisceralFatZone::Elevated
        } else {
            VisceralFatZone::High
        };
        Some(zone)
    }

    /// Earliest and latest timed reading of `field` on `date`
    ///
    /// A day with a single reading fills one side only: `morning` when it was
    /// taken before noon, `evening` otherwise. Untimed entries are ignored.
    #[must_use]
    pub fn morning_vs_evening(entries: &[MetricEntry], date: NaiveDate, field: &str) -> MorningEvening {
        let mut readings: Vec<(NaiveTime, f64)> = entries
            .iter()
            .filter(|entry| entry.date == date)
            .filter_map(|entry| Some((entry.time?, entry.value(field)?)))
            .collect();
        readings.sort_by_key(|(time, _)| *time);

        match readings.as_slice() {
            [] => MorningEvening::default(),
            [(time, value)] if time.hour() < MIDDAY_HOUR => MorningEvening {
                morning: Some(*value),
                evening: None,
            },
            [(_, value)] => MorningEvening {
                morning: None,
                evening: Some(*value),
            },
            [(_, first), .., (_, last)] => MorningEvening {
                morning: Some(*first),
                evening: Some(*last),
            },
        }
    }
}
