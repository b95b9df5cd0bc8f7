// ABOUTME: Benchmark fixtures generating realistic smart-scale and check-in series
// ABOUTME: Deterministic generation from a fixed start date for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! Benchmark fixtures for metric series.

use chrono::{Days, NaiveDate, NaiveTime};
use habitrack::{MetricEntry, RawRecord};
use habitrack_core::MetricEntryBuilder;
use serde_json::Value;

/// Predefined series lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SeriesSize {
    /// One month of daily readings
    Month,
    /// One year of daily readings
    Year,
    /// Five years of daily readings
    FiveYears,
}

impl SeriesSize {
    /// Number of days in the series
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Year => 365,
            Self::FiveYears => 1825,
        }
    }

    /// All sizes, smallest first
    pub const ALL: [Self; 3] = [Self::Month, Self::Year, Self::FiveYears];
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// Day `index` of the series; every seventh day is skipped to leave gaps
fn series_date(index: usize) -> NaiveDate {
    let offset = (index + index / 6) as u64;
    start_date()
        .checked_add_days(Days::new(offset))
        .unwrap_or_default()
}

/// Morning or evening reading time, alternating
fn reading_time(index: usize) -> NaiveTime {
    let hour = if index % 2 == 0 { 7 } else { 19 };
    NaiveTime::from_hms_opt(hour, (index * 7 % 60) as u32, 0).unwrap_or_default()
}

/// Smart-scale readings with slow drift and a weekly wobble
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_scale_series(size: SeriesSize) -> Vec<MetricEntry> {
    (0..size.days())
        .map(|index| {
            let drift = index as f64 * 0.01;
            let wobble = ((index % 7) as f64 - 3.0) * 0.15;
            let mut builder = MetricEntryBuilder::new(series_date(index))
                .time(reading_time(index))
                .field("weight", 88.0 - drift + wobble)
                .field("heart_rate", 62.0 + (index % 11) as f64)
                .field("visceral_fat", 11.0 - drift / 10.0);
            if index % 13 == 0 {
                builder = builder.missing("body_fat");
            } else {
                builder = builder.field("body_fat", 24.0 - drift / 5.0);
            }
            builder.build()
        })
        .collect()
}

/// Raw JSON records equivalent to `generate_scale_series`
#[must_use]
pub fn generate_raw_records(size: SeriesSize) -> Vec<RawRecord> {
    generate_scale_series(size)
        .into_iter()
        .map(|entry| {
            let mut record = RawRecord::new(entry.date.format("%Y-%m-%d").to_string());
            if let Some(time) = entry.time {
                record = record.with_time(time.format("%H:%M").to_string());
            }
            for (name, value) in entry.fields {
                record = record.with_column(name, value.map_or(Value::Null, Value::from));
            }
            record
        })
        .collect()
}
