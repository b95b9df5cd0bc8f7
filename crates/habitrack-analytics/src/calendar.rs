// ABOUTME: Calendar helpers shared by the analyzers: chronological views, distinct dates, runs, gaps
// ABOUTME: Works on borrowed entries so the caller's slice is never reordered or copied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike};
use habitrack_core::constants::calendar::HEATMAP_SLOT_MINUTES;
use habitrack_core::MetricEntry;
use std::collections::BTreeSet;

/// A single finite value of one field, positioned in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Calendar date of the source entry
    pub date: NaiveDate,
    /// Wall-clock time of the source entry
    pub time: Option<NaiveTime>,
    /// Field value
    pub value: f64,
}

/// A maximal run of consecutive calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRun {
    /// First day of the run
    pub from: NaiveDate,
    /// Last day of the run
    pub to: NaiveDate,
    /// Number of days in the run
    pub length: u32,
}

/// Borrowed view of `entries` sorted by date then time
///
/// The sort is stable, so entries with equal keys keep their input order.
#[must_use]
pub fn chronological(entries: &[MetricEntry]) -> Vec<&MetricEntry> {
    let mut view: Vec<&MetricEntry> = entries.iter().collect();
    view.sort_by_key(|entry| entry.sort_key());
    view
}

/// Chronological observations of `field`, skipping entries without a finite value
#[must_use]
pub fn observations(entries: &[MetricEntry], field: &str) -> Vec<Observation> {
    chronological(entries)
        .into_iter()
        .filter_map(|entry| {
            entry.value(field).map(|value| Observation {
                date: entry.date,
                time: entry.time,
                value,
            })
        })
        .collect()
}

/// Sorted, deduplicated entry dates
#[must_use]
pub fn distinct_dates(entries: &[MetricEntry]) -> Vec<NaiveDate> {
    entries
        .iter()
        .map(|entry| entry.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `date` moved back by `days`, saturating at the earliest representable date
#[must_use]
pub fn days_before(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// `date` moved forward by `days`, or `None` past the calendar's end
#[must_use]
pub fn days_after(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}

/// Maximal runs of consecutive days over sorted, distinct `dates`
#[must_use]
pub fn day_runs(dates: &[NaiveDate]) -> Vec<DayRun> {
    let mut runs: Vec<DayRun> = Vec::new();
    for &date in dates {
        match runs.last_mut() {
            Some(run) if days_between(run.to, date) == 1 => {
                run.to = date;
                run.length += 1;
            }
            _ => runs.push(DayRun {
                from: date,
                to: date,
                length: 1,
            }),
        }
    }
    runs
}

/// `(earlier, later, days_between)` for each pair of neighbouring sorted dates
pub fn gaps(dates: &[NaiveDate]) -> impl Iterator<Item = (NaiveDate, NaiveDate, i64)> + '_ {
    dates
        .windows(2)
        .map(|pair| (pair[0], pair[1], days_between(pair[0], pair[1])))
}

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    days_before(date, date.weekday().num_days_from_monday())
}

/// Start of the 30-minute slot containing `time`, as `HH:MM`
#[must_use]
pub fn slot_label(time: NaiveTime) -> String {
    let minute = time.minute() - time.minute() % HEATMAP_SLOT_MINUTES;
    format!("{:02}:{minute:02}", time.hour())
}
