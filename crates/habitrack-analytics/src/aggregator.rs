// ABOUTME: Calendar aggregates over metric entries: daily/monthly means, ISO-week counts, heatmaps
// ABOUTME: Groups with ordered maps so output order and float sums are deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors
#![allow(clippy::cast_precision_loss)] // Safe: per-bucket counts are small

use chrono::{Datelike, NaiveDate, Weekday};
use habitrack_core::constants::calendar::DAYS_PER_WEEK;
use habitrack_core::{MetricEntry, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar;

/// Weekdays in display order
const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Mean value of one field on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    /// Calendar date
    pub date: NaiveDate,
    /// Mean of the valid values recorded that day
    pub average: f64,
}

/// Number of entries in one ISO week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCount {
    /// Display label (`DD.MM` of the week's Monday)
    pub week: String,
    /// Monday starting the week
    pub week_start: NaiveDate,
    /// ISO week-numbering year
    pub iso_year: i32,
    /// ISO week number (1-53)
    pub iso_week: u32,
    /// Entries recorded during the week
    pub count: u32,
}

/// Mean value of one field over one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// Calendar month
    pub month: YearMonth,
    /// Mean of the valid values recorded that month
    pub average: f64,
}

/// Entries recorded on one day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    /// Day of the week
    pub day: Weekday,
    /// Entries recorded on that weekday
    pub visits: u32,
}

/// Entries recorded in one weekday/time-slot cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Day of the week
    pub day: Weekday,
    /// Start of the 30-minute slot, `HH:MM`
    pub slot: String,
    /// Entries in the cell
    pub count: u32,
}

/// Running sum for a mean
#[derive(Debug, Clone, Copy, Default)]
struct MeanAccumulator {
    sum: f64,
    count: u32,
}

impl MeanAccumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// Calendar aggregation of metric entries
pub struct Aggregator;

impl Aggregator {
    /// Mean of `field` per calendar date, ascending; dates without a valid value are omitted
    #[must_use]
    pub fn daily_average(entries: &[MetricEntry], field: &str) -> Vec<DailyAverage> {
        let mut days: BTreeMap<NaiveDate, MeanAccumulator> = BTreeMap::new();
        for observation in calendar::observations(entries, field) {
            days.entry(observation.date)
                .or_default()
                .push(observation.value);
        }

        days.into_iter()
            .filter_map(|(date, acc)| acc.mean().map(|average| DailyAverage { date, average }))
            .collect()
    }

    /// Entry counts per ISO week (Monday start), ascending; empty weeks omitted
    #[must_use]
    pub fn weekly_count(entries: &[MetricEntry]) -> Vec<WeeklyCount> {
        let mut weeks: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for entry in entries {
            *weeks.entry(calendar::week_start(entry.date)).or_insert(0) += 1;
        }

        weeks
            .into_iter()
            .map(|(week_start, count)| {
                let iso = week_start.iso_week();
                WeeklyCount {
                    week: week_start.format("%d.%m").to_string(),
                    week_start,
                    iso_year: iso.year(),
                    iso_week: iso.week(),
                    count,
                }
            })
            .collect()
    }

    /// Mean of `field` over every entry in `month`, or `None` if it has no valid value
    #[must_use]
    pub fn monthly_average(entries: &[MetricEntry], field: &str, month: YearMonth) -> Option<f64> {
        let mut acc = MeanAccumulator::default();
        for observation in calendar::observations(entries, field) {
            if month.contains(observation.date) {
                acc.push(observation.value);
            }
        }
        acc.mean()
    }

    /// Mean of `field` for every month that has a valid value, ascending
    #[must_use]
    pub fn monthly_averages(entries: &[MetricEntry], field: &str) -> Vec<MonthlyAverage> {
        let mut months: BTreeMap<YearMonth, MeanAccumulator> = BTreeMap::new();
        for observation in calendar::observations(entries, field) {
            months
                .entry(YearMonth::of(observation.date))
                .or_default()
                .push(observation.value);
        }

        months
            .into_iter()
            .filter_map(|(month, acc)| acc.mean().map(|average| MonthlyAverage { month, average }))
            .collect()
    }

    /// Entries per weekday, Monday through Sunday, always seven elements
    #[must_use]
    pub fn weekday_distribution(entries: &[MetricEntry]) -> [WeekdayCount; DAYS_PER_WEEK] {
        let mut visits = [0_u32; DAYS_PER_WEEK];
        for entry in entries {
            visits[entry.date.weekday().num_days_from_monday() as usize] += 1;
        }

        let mut distribution = WEEK.map(|day| WeekdayCount { day, visits: 0 });
        for (slot, count) in distribution.iter_mut().zip(visits) {
            slot.visits = count;
        }
        distribution
    }

    /// Timed entries per weekday and 30-minute slot
    ///
    /// Only non-empty cells are returned, Monday first, then by slot. Entries
    /// without a time are ignored.
    #[must_use]
    pub fn time_bucket_heatmap(entries: &[MetricEntry]) -> Vec<HeatmapCell> {
        let mut cells: BTreeMap<(u32, String), u32> = BTreeMap::new();
        for entry in entries {
            if let Some(time) = entry.time {
                let day = entry.date.weekday().num_days_from_monday();
                *cells.entry((day, calendar::slot_label(time))).or_insert(0) += 1;
            }
        }

        cells
            .into_iter()
            .map(|((day, slot), count)| HeatmapCell {
                day: WEEK[day as usize],
                slot,
                count,
            })
            .collect()
    }
}
