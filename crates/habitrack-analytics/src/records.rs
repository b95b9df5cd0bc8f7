// ABOUTME: All-time records over a series: value extremes, check-in time extremes, busiest day, longest break
// ABOUTME: Ties always resolve to the earliest date so results are deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::{NaiveDate, NaiveTime};
use habitrack_core::MetricEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar;

/// A value and the date it was recorded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAt {
    /// Recorded value
    pub value: f64,
    /// Date of the recording
    pub date: NaiveDate,
}

/// All-time minimum and maximum of a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    /// Smallest value, earliest on ties
    pub min: Option<ValueAt>,
    /// Largest value, earliest on ties
    pub max: Option<ValueAt>,
}

/// A check-in at a particular time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinTime {
    /// Date of the check-in
    pub date: NaiveDate,
    /// Wall-clock time of the check-in
    pub time: NaiveTime,
}

/// The date with the most entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusiestDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Entries recorded that day
    pub count: u32,
}

/// The widest gap between consecutive entry dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// Last entry date before the gap
    pub from: NaiveDate,
    /// First entry date after the gap
    pub to: NaiveDate,
    /// Calendar days from `from` to `to`
    pub days: u32,
}

/// Record finder for personal bests and attendance extremes
pub struct RecordsFinder;

impl RecordsFinder {
    /// Global minimum and maximum of `field`
    #[must_use]
    pub fn all_time_extremes(entries: &[MetricEntry], field: &str) -> Extremes {
        let mut extremes = Extremes::default();
        for observation in calendar::observations(entries, field) {
            let candidate = ValueAt {
                value: observation.value,
                date: observation.date,
            };
            if extremes.min.map_or(true, |min| candidate.value < min.value) {
                extremes.min = Some(candidate);
            }
            if extremes.max.map_or(true, |max| candidate.value > max.value) {
                extremes.max = Some(candidate);
            }
        }
        extremes
    }

    /// The timed entry with the smallest time of day; the earliest date wins ties
    #[must_use]
    pub fn earliest_checkin(entries: &[MetricEntry]) -> Option<CheckinTime> {
        Self::timed(entries).min_by_key(|checkin| (checkin.time, checkin.date))
    }

    /// The timed entry with the largest time of day; the earliest date wins ties
    #[must_use]
    pub fn latest_checkin(entries: &[MetricEntry]) -> Option<CheckinTime> {
        Self::timed(entries)
            .max_by(|a, b| a.time.cmp(&b.time).then_with(|| b.date.cmp(&a.date)))
    }

    /// The date with the most entries; the earliest date wins ties
    #[must_use]
    pub fn busiest_day(entries: &[MetricEntry]) -> Option<BusiestDay> {
        let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for entry in entries {
            *per_day.entry(entry.date).or_insert(0) += 1;
        }

        per_day
            .into_iter()
            .fold(None, |best: Option<BusiestDay>, (date, count)| match best {
                Some(day) if day.count >= count => Some(day),
                _ => Some(BusiestDay { date, count }),
            })
    }

    /// The largest gap between consecutive distinct entry dates
    ///
    /// `None` with fewer than two distinct dates; the earliest gap wins ties.
    #[must_use]
    pub fn longest_break(entries: &[MetricEntry]) -> Option<Break> {
        let dates = calendar::distinct_dates(entries);
        calendar::gaps(&dates).fold(None, |best: Option<Break>, (from, to, days)| {
            let days = u32::try_from(days).unwrap_or(u32::MAX);
            match best {
                Some(gap) if gap.days >= days => Some(gap),
                _ => Some(Break { from, to, days }),
            }
        })
    }

    fn timed(entries: &[MetricEntry]) -> impl Iterator<Item = CheckinTime> + '_ {
        entries.iter().filter_map(|entry| {
            entry.time.map(|time| CheckinTime {
                date: entry.date,
                time,
            })
        })
    }
}
