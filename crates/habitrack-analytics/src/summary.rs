// ABOUTME: Dashboard summaries bundling the analyzers for one field or for attendance data
// ABOUTME: Multi-field summaries run in parallel with rayon; each field is computed sequentially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::NaiveDate;
use habitrack_core::constants::{calendar::DAYS_PER_WEEK, fields};
use habitrack_core::MetricEntry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{Aggregator, HeatmapCell, MonthlyAverage, WeekdayCount, WeeklyCount};
use crate::calendar;
use crate::config::AnalyticsConfig;
use crate::forecast::{Forecast, ForecastProjector};
use crate::records::{Break, BusiestDay, CheckinTime, Extremes, RecordsFinder, ValueAt};
use crate::streaks::{RestDayBucket, StreakAnalyzer, StreakSpan};
use crate::trend::{MovingAveragePoint, TrendAnalyzer, TrendDirection};
use crate::zones::{HeartRateZone, VisceralFatZone, ZoneClassifier};

/// Everything a dashboard card shows for one numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Field name
    pub field: String,
    /// Entries holding a valid value for the field
    pub observations: usize,
    /// Most recent valid value
    pub latest: Option<ValueAt>,
    /// Trailing moving average per date
    pub moving_average: Vec<MovingAveragePoint>,
    /// Recent direction of the moving average
    pub trend: TrendDirection,
    /// Standard deviation over the trailing volatility window
    pub volatility: f64,
    /// Latest value minus the value about a week earlier
    pub week_trend: Option<f64>,
    /// All-time minimum and maximum
    pub extremes: Extremes,
    /// Mean per calendar month
    pub monthly_averages: Vec<MonthlyAverage>,
    /// Linear projection over the configured horizon
    pub forecast: Option<Forecast>,
    /// Zone of the latest value for heart-rate fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate_zone: Option<HeartRateZone>,
    /// Zone of the latest value for visceral-fat fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visceral_fat_zone: Option<VisceralFatZone>,
}

/// Attendance analyses for check-in style series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Entries in the series
    pub total_entries: usize,
    /// Distinct dates with at least one entry
    pub active_days: usize,
    /// Consecutive days ending at the latest entry date
    pub current_streak: u32,
    /// Longest run of consecutive days
    pub longest_streak: u32,
    /// Dates of the longest run
    pub longest_streak_span: Option<StreakSpan>,
    /// Entries per ISO week
    pub weekly_counts: Vec<WeeklyCount>,
    /// Entries per weekday, Monday first
    pub weekday_distribution: [WeekdayCount; DAYS_PER_WEEK],
    /// Entries per weekday and 30-minute slot
    pub heatmap: Vec<HeatmapCell>,
    /// Histogram of rest days between entry dates
    pub rest_days: Vec<RestDayBucket>,
    /// Date with the most entries
    pub busiest_day: Option<BusiestDay>,
    /// Widest gap between entry dates
    pub longest_break: Option<Break>,
    /// Earliest time-of-day check-in
    pub earliest_checkin: Option<CheckinTime>,
    /// Latest time-of-day check-in
    pub latest_checkin: Option<CheckinTime>,
}

/// Builds summaries from a fixed analytics configuration
#[derive(Debug, Clone, Default)]
pub struct SeriesSummarizer {
    config: AnalyticsConfig,
    trend: TrendAnalyzer,
    zones: ZoneClassifier,
}

impl SeriesSummarizer {
    /// Create a summarizer using `config` for every analyzer
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            trend: TrendAnalyzer::from_config(&config.trend),
            zones: ZoneClassifier::from_config(&config.zones),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Summarize one numeric field
    #[must_use]
    pub fn summarize(&self, entries: &[MetricEntry], field: &str) -> MetricSummary {
        let observations = calendar::observations(entries, field);
        let latest = observations.last().map(|o| ValueAt {
            value: o.value,
            date: o.date,
        });
        let latest_value = latest.map(|at| at.value);
        let trend_config = &self.config.trend;

        let summary = MetricSummary {
            field: field.to_owned(),
            observations: observations.len(),
            latest,
            moving_average: TrendAnalyzer::moving_average(
                entries,
                field,
                trend_config.moving_average_window_days,
            ),
            trend: self.trend.trend_direction(entries, field),
            volatility: TrendAnalyzer::volatility(
                entries,
                field,
                trend_config.volatility_window_days,
            ),
            week_trend: TrendAnalyzer::week_trend(entries, field),
            extremes: RecordsFinder::all_time_extremes(entries, field),
            monthly_averages: Aggregator::monthly_averages(entries, field),
            forecast: ForecastProjector::forecast(
                entries,
                field,
                self.config.forecast.horizon_days,
            ),
            heart_rate_zone: latest_value
                .filter(|_| field == fields::HEART_RATE)
                .and_then(|bpm| self.zones.heart_rate_zone(bpm)),
            visceral_fat_zone: latest_value
                .filter(|_| field == fields::VISCERAL_FAT)
                .and_then(|rating| self.zones.visceral_fat_zone(rating)),
        };

        debug!(
            field,
            observations = summary.observations,
            trend = %summary.trend,
            "Summarized field"
        );
        summary
    }

    /// Summarize several fields in parallel, preserving the order of `field_names`
    #[must_use]
    pub fn summarize_fields(
        &self,
        entries: &[MetricEntry],
        field_names: &[&str],
    ) -> Vec<MetricSummary> {
        field_names
            .par_iter()
            .map(|field| self.summarize(entries, field))
            .collect()
    }

    /// Attendance analyses over all entries regardless of field values
    #[must_use]
    pub fn attendance(entries: &[MetricEntry]) -> AttendanceSummary {
        let active_days: Vec<NaiveDate> = calendar::distinct_dates(entries);

        AttendanceSummary {
            total_entries: entries.len(),
            active_days: active_days.len(),
            current_streak: StreakAnalyzer::current_streak(entries),
            longest_streak: StreakAnalyzer::longest_streak(entries),
            longest_streak_span: StreakAnalyzer::longest_streak_span(entries),
            weekly_counts: Aggregator::weekly_count(entries),
            weekday_distribution: Aggregator::weekday_distribution(entries),
            heatmap: Aggregator::time_bucket_heatmap(entries),
            rest_days: StreakAnalyzer::rest_day_distribution(entries),
            busiest_day: RecordsFinder::busiest_day(entries),
            longest_break: RecordsFinder::longest_break(entries),
            earliest_checkin: RecordsFinder::earliest_checkin(entries),
            latest_checkin: RecordsFinder::latest_checkin(entries),
        }
    }
}
