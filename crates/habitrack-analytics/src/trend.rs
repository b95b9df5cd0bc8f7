// ABOUTME: Trend analysis over calendar-day windows: moving average, direction, volatility, weekly change
// ABOUTME: Windows span calendar days, so sparse data yields fewer samples instead of interpolated ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::NaiveDate;
use habitrack_core::constants::{fields, trend};
use habitrack_core::MetricEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregator::Aggregator;
use crate::calendar;
use crate::config::TrendConfig;
use crate::statistics;

/// Days between the two values compared by `week_trend`
const WEEK_DAYS: u32 = 7;

/// Direction of a series' recent movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Moving average rose by at least the stability epsilon
    Up,
    /// Moving average fell by at least the stability epsilon
    Down,
    /// Change below the epsilon, or too little history to tell
    Stable,
}

impl TrendDirection {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trailing moving-average value at one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    /// Date the window ends on
    pub date: NaiveDate,
    /// Mean of the daily averages inside the window
    pub average: f64,
    /// Days with data that contributed
    pub samples: u32,
}

/// Trend analyzer with configurable windows and stability epsilon
#[derive(Debug, Clone, PartialEq)]
pub struct TrendAnalyzer {
    window_days: u32,
    lookback_days: u32,
    stable_epsilon: f64,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Create an analyzer with the standard 7-day window, 7-day look-back and 0.1 epsilon
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_days: trend::MOVING_AVERAGE_WINDOW_DAYS,
            lookback_days: trend::LOOKBACK_DAYS,
            stable_epsilon: trend::STABLE_EPSILON,
        }
    }

    /// Create an analyzer with a metric-specific stability epsilon
    #[must_use]
    pub const fn with_epsilon(stable_epsilon: f64) -> Self {
        Self {
            window_days: trend::MOVING_AVERAGE_WINDOW_DAYS,
            lookback_days: trend::LOOKBACK_DAYS,
            stable_epsilon,
        }
    }

    /// Create an analyzer from configuration
    #[must_use]
    pub fn from_config(config: &TrendConfig) -> Self {
        Self {
            window_days: config.moving_average_window_days,
            lookback_days: config.trend_lookback_days,
            stable_epsilon: config.stable_epsilon,
        }
    }

    /// Stability epsilon in use
    #[must_use]
    pub const fn stable_epsilon(&self) -> f64 {
        self.stable_epsilon
    }

    /// Trailing moving average of `field` for every date with a valid value
    ///
    /// Each day contributes its own daily average once, so several same-day
    /// entries are not double counted. A `window_days` of 0 is treated as 1.
    #[must_use]
    pub fn moving_average(
        entries: &[MetricEntry],
        field: &str,
        window_days: u32,
    ) -> Vec<MovingAveragePoint> {
        let daily = Aggregator::daily_average(entries, field);
        let span = window_days.max(1) - 1;

        let mut points = Vec::with_capacity(daily.len());
        let mut start = 0_usize;
        for (end, day) in daily.iter().enumerate() {
            let window_start = calendar::days_before(day.date, span);
            while daily[start].date < window_start {
                start += 1;
            }

            let values: Vec<f64> = daily[start..=end].iter().map(|d| d.average).collect();
            if let Some(average) = statistics::mean(&values) {
                points.push(MovingAveragePoint {
                    date: day.date,
                    average,
                    samples: u32::try_from(values.len()).unwrap_or(u32::MAX),
                });
            }
        }
        points
    }

    /// Classify the recent direction of `field`
    ///
    /// Compares the latest moving-average point with the last point at least
    /// `lookback_days` earlier, falling back to the earliest point when the
    /// history is shorter. Fewer than two moving-average points is `Stable`.
    #[must_use]
    pub fn trend_direction(&self, entries: &[MetricEntry], field: &str) -> TrendDirection {
        let points = Self::moving_average(entries, field, self.window_days);
        if points.len() < trend::MIN_TREND_POINTS {
            return TrendDirection::Stable;
        }
        let (Some(first), Some(latest)) = (points.first(), points.last()) else {
            return TrendDirection::Stable;
        };

        let cutoff = calendar::days_before(latest.date, self.lookback_days);
        let reference = points
            .iter()
            .rev()
            .find(|point| point.date <= cutoff)
            .unwrap_or(first);

        self.classify_change(latest.average - reference.average)
    }

    /// Classify a signed change against the stability epsilon
    #[must_use]
    pub fn classify_change(&self, change: f64) -> TrendDirection {
        if !change.is_finite() || change.abs() < self.stable_epsilon {
            TrendDirection::Stable
        } else if change > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    /// Population standard deviation of raw `field` values in the trailing window
    ///
    /// The window ends at the latest entry with a valid value. Returns `0.0`
    /// when fewer than two values fall inside it.
    #[must_use]
    pub fn volatility(entries: &[MetricEntry], field: &str, window_days: u32) -> f64 {
        let observations = calendar::observations(entries, field);
        let Some(latest) = observations.last() else {
            return 0.0;
        };

        let window_start = calendar::days_before(latest.date, window_days.max(1) - 1);
        let values: Vec<f64> = observations
            .iter()
            .filter(|o| o.date >= window_start)
            .map(|o| o.value)
            .collect();

        statistics::population_std_dev(&values)
    }

    /// Week-over-week change of the single-valued `value` field
    #[must_use]
    pub fn weekly_change(entries: &[MetricEntry]) -> Option<f64> {
        Self::week_trend(entries, fields::VALUE)
    }

    /// Latest value of `field` minus the value about a week earlier
    ///
    /// The comparison value comes from the last entry dated seven or more days
    /// before the latest one; if none is that old, the earliest entry
    /// is used as long as it precedes the latest date. `None` when no entry
    /// lies at least one day before the latest.
    #[must_use]
    pub fn week_trend(entries: &[MetricEntry], field: &str) -> Option<f64> {
        let observations = calendar::observations(entries, field);
        let latest = observations.last()?;
        let target = calendar::days_before(latest.date, WEEK_DAYS);

        let reference = observations
            .iter()
            .rev()
            .find(|o| o.date <= target)
            .or_else(|| observations.first().filter(|o| o.date < latest.date))?;

        Some(latest.value - reference.value)
    }
}
