// ABOUTME: Shared fixtures for analytics integration tests
// ABOUTME: Date helpers and small series builders for scalar, multi-field, and timed entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

use chrono::{Days, NaiveDate, NaiveTime};
use habitrack_core::{MetricEntry, MetricEntryBuilder};

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Wall-clock time shorthand
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// `start` moved forward by `offset` days
pub fn day(start: NaiveDate, offset: u64) -> NaiveDate {
    start.checked_add_days(Days::new(offset)).unwrap()
}

/// Single-valued entries on consecutive days starting at `start`
pub fn daily_values(start: NaiveDate, values: &[f64]) -> Vec<MetricEntry> {
    values
        .iter()
        .zip(0_u64..)
        .map(|(value, offset)| MetricEntry::scalar(day(start, offset), *value))
        .collect()
}

/// Entries for `field` on consecutive days starting at `start`
pub fn field_series(field: &str, start: NaiveDate, values: &[f64]) -> Vec<MetricEntry> {
    values
        .iter()
        .zip(0_u64..)
        .map(|(value, offset)| {
            MetricEntryBuilder::new(day(start, offset))
                .field(field, *value)
                .build()
        })
        .collect()
}

/// A value-less check-in at `hour:minute` on `date`
pub fn checkin(date: NaiveDate, hour: u32, minute: u32) -> MetricEntry {
    MetricEntryBuilder::new(date).time(time(hour, minute)).build()
}

/// Value-less check-ins, one per date
pub fn checkins_on(dates: &[NaiveDate]) -> Vec<MetricEntry> {
    dates.iter().map(|d| MetricEntry::new(*d)).collect()
}
