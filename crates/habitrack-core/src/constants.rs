// ABOUTME: Analytics constants organized by domain for the Habitrack metrics engine
// ABOUTME: Default windows, stability epsilons, forecast limits, and zone thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! Constants module
//!
//! Defaults used by the analytics engine when no explicit configuration is
//! supplied. Every tunable here has a matching field in the analytics
//! configuration so deployments can override it.

/// Well-known field names of the tracked record shapes
pub mod fields {
    /// Field name of single-valued series (body weight, generic scalar logs)
    pub const VALUE: &str = "value";
    /// Body weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Resting heart rate in beats per minute (smart scale)
    pub const HEART_RATE: &str = "heart_rate";
    /// Visceral fat rating (smart scale, body scan)
    pub const VISCERAL_FAT: &str = "visceral_fat";
    /// Body fat percentage (smart scale, body scan)
    pub const BODY_FAT: &str = "body_fat";
    /// Raw record key holding the calendar date
    pub const DATE: &str = "date";
    /// Raw record key holding the wall-clock time
    pub const TIME: &str = "time";
}

/// Trend analysis defaults
pub mod trend {
    /// Trailing moving-average window used for trend classification (days)
    pub const MOVING_AVERAGE_WINDOW_DAYS: u32 = 7;
    /// Distance between the two moving-average points compared (days)
    pub const LOOKBACK_DAYS: u32 = 7;
    /// Absolute moving-average difference below which a trend is stable.
    /// Calibrated for body weight in kilograms.
    pub const STABLE_EPSILON: f64 = 0.1;
    /// Trailing window for volatility (days)
    pub const VOLATILITY_WINDOW_DAYS: u32 = 14;
    /// Minimum moving-average points needed to classify a trend
    pub const MIN_TREND_POINTS: usize = 2;
}

/// Forecast defaults
pub mod forecast {
    /// Minimum valid observations needed for a projection
    pub const MIN_POINTS: usize = 3;
    /// Default projection horizon (days)
    pub const HORIZON_DAYS: u32 = 14;
    /// Residual spread below this is reported as an exact fit
    pub const EXACT_FIT_TOLERANCE: f64 = 1e-9;
}

/// Zone classification thresholds
pub mod zones {
    /// Heart rate strictly below this is `low` (bpm)
    pub const HEART_RATE_LOW_BELOW_BPM: f64 = 60.0;
    /// Heart rate strictly above this is `elevated` (bpm)
    pub const HEART_RATE_ELEVATED_ABOVE_BPM: f64 = 100.0;
    /// Visceral fat ratings up to and including this are `healthy`
    pub const VISCERAL_FAT_HEALTHY_MAX: f64 = 9.0;
    /// Visceral fat ratings from this value upward are `high`
    pub const VISCERAL_FAT_HIGH_MIN: f64 = 15.0;
    /// Hour splitting a lone same-day reading into morning or evening
    pub const MIDDAY_HOUR: u32 = 12;
}

/// Calendar bucketing
pub mod calendar {
    /// Width of a time-of-day heatmap slot (minutes)
    pub const HEATMAP_SLOT_MINUTES: u32 = 30;
    /// Days in a week
    pub const DAYS_PER_WEEK: usize = 7;
}
