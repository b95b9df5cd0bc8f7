// ABOUTME: Attendance streak analysis: current and longest consecutive-day runs, rest-day histogram
// ABOUTME: "Today" is the latest entry date; wall-clock time is never consulted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::NaiveDate;
use habitrack_core::MetricEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar;

/// A run of consecutive days with at least one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSpan {
    /// First day of the streak
    pub from: NaiveDate,
    /// Last day of the streak
    pub to: NaiveDate,
    /// Days in the streak
    pub length: u32,
}

/// How often a gap of `days` rest days occurred between consecutive entry dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestDayBucket {
    /// Rest days between two entry dates (0 = back-to-back days)
    pub days: u32,
    /// Occurrences of that gap
    pub count: u32,
}

/// Streak and gap analysis over entry dates
pub struct StreakAnalyzer;

impl StreakAnalyzer {
    /// Consecutive days with entries, counted back from the latest entry date
    #[must_use]
    pub fn current_streak(entries: &[MetricEntry]) -> u32 {
        let dates = calendar::distinct_dates(entries);
        calendar::day_runs(&dates)
            .last()
            .map_or(0, |run| run.length)
    }

    /// Length of the longest run of consecutive days with entries
    #[must_use]
    pub fn longest_streak(entries: &[MetricEntry]) -> u32 {
        Self::longest_streak_span(entries).map_or(0, |span| span.length)
    }

    /// The longest run of consecutive days with entries; the earliest wins ties
    #[must_use]
    pub fn longest_streak_span(entries: &[MetricEntry]) -> Option<StreakSpan> {
        let dates = calendar::distinct_dates(entries);
        calendar::day_runs(&dates)
            .into_iter()
            .fold(None, |best: Option<StreakSpan>, run| match best {
                Some(span) if span.length >= run.length => Some(span),
                _ => Some(StreakSpan {
                    from: run.from,
                    to: run.to,
                    length: run.length,
                }),
            })
    }

    /// Histogram of rest days between chronologically consecutive entry dates
    ///
    /// Sorted by gap length. Fewer than two distinct dates gives an empty list.
    #[must_use]
    pub fn rest_day_distribution(entries: &[MetricEntry]) -> Vec<RestDayBucket> {
        let dates = calendar::distinct_dates(entries);
        let mut histogram: BTreeMap<u32, u32> = BTreeMap::new();
        for (_, _, days_between) in calendar::gaps(&dates) {
            let rest_days = u32::try_from(days_between - 1).unwrap_or(u32::MAX);
            *histogram.entry(rest_days).or_insert(0) += 1;
        }

        histogram
            .into_iter()
            .map(|(days, count)| RestDayBucket { days, count })
            .collect()
    }
}
