// ABOUTME: Time-series metrics analytics engine for habit and health tracking data
// ABOUTME: Normalizes entries and derives aggregates, trends, streaks, records, forecasts, and zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![deny(unsafe_code)]

//! # Habitrack Analytics
//!
//! A library of independent, composable functions over an immutable,
//! caller-supplied slice of `MetricEntry`. Every operation re-sorts its own
//! view of the input, never mutates the caller's data, performs no I/O, and
//! signals "not enough data" with `None` or an empty collection instead of an
//! error.
//!
//! ## Components
//!
//! - **normalizer**: chronological ordering and raw record conversion
//! - **aggregator**: daily/weekly/monthly aggregates, weekday and time-slot heatmaps
//! - **trend**: moving average, trend direction, volatility, week-over-week change
//! - **streaks**: current/longest streaks and rest-day distribution
//! - **records**: all-time extremes, check-in time extremes, busiest day, longest break
//! - **forecast**: linear extrapolation with a constant uncertainty band
//! - **zones**: heart-rate and visceral-fat threshold lookups, morning vs evening
//! - **summary**: per-field and attendance bundles for dashboard cards

/// Analytics configuration (windows, epsilons, thresholds)
pub mod config;

/// Calendar helpers shared by the analyzers
pub mod calendar;

/// Descriptive statistics and least-squares regression
pub mod statistics;

/// Chronological normalization and raw record conversion
pub mod normalizer;

/// Calendar aggregates and heatmaps
pub mod aggregator;

/// Moving averages, trend classification, volatility
pub mod trend;

/// Attendance streaks and gap distribution
pub mod streaks;

/// All-time records and extremes
pub mod records;

/// Linear trend forecasting
pub mod forecast;

/// Threshold zone classification
pub mod zones;

/// Dashboard summaries combining the analyzers
pub mod summary;

pub use aggregator::{
    Aggregator, DailyAverage, HeatmapCell, MonthlyAverage, WeekdayCount, WeeklyCount,
};
pub use config::{AnalyticsConfig, ConfigError, ForecastConfig, TrendConfig, ZoneConfig};
pub use forecast::{Forecast, ForecastPoint, ForecastProjector};
pub use normalizer::Normalizer;
pub use records::{Break, BusiestDay, CheckinTime, Extremes, RecordsFinder, ValueAt};
pub use statistics::LinearFit;
pub use streaks::{RestDayBucket, StreakAnalyzer, StreakSpan};
pub use summary::{AttendanceSummary, MetricSummary, SeriesSummarizer};
pub use trend::{MovingAveragePoint, TrendAnalyzer, TrendDirection};
pub use zones::{HeartRateZone, MorningEvening, VisceralFatZone, ZoneClassifier};
