// ABOUTME: Integration tests for per-field and attendance summaries
// ABOUTME: Checks that summaries agree with the individual analyzers and that empty input never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{checkin, daily_values, date, day, field_series};
use habitrack_analytics::{
    AnalyticsConfig, ForecastConfig, HeartRateZone, SeriesSummarizer, StreakAnalyzer,
    TrendAnalyzer, TrendDirection, VisceralFatZone,
};
use habitrack_core::{MetricEntry, MetricEntryBuilder};

fn scale_readings() -> Vec<MetricEntry> {
    let start = date(2024, 11, 1);
    (0..12_u32)
        .map(|i| {
            MetricEntryBuilder::new(day(start, u64::from(i)))
                .field("weight", 90.0 - f64::from(i) * 0.25)
                .field("heart_rate", 58.0 + f64::from(i))
                .field("visceral_fat", 16.0)
                .build()
        })
        .collect()
}

#[test]
fn test_summarize_matches_analyzers() {
    let entries = scale_readings();
    let summarizer = SeriesSummarizer::default();

    let summary = summarizer.summarize(&entries, "weight");

    assert_eq!(summary.field, "weight");
    assert_eq!(summary.observations, 12);
    assert_eq!(summary.latest.unwrap().date, date(2024, 11, 12));
    assert_eq!(summary.trend, TrendDirection::Down);
    assert_eq!(
        summary.moving_average,
        TrendAnalyzer::moving_average(&entries, "weight", 7)
    );
    assert_eq!(summary.week_trend, TrendAnalyzer::week_trend(&entries, "weight"));
    assert_eq!(summary.monthly_averages.len(), 1);
    assert_eq!(summary.forecast.as_ref().unwrap().points.len(), 14);
    assert_eq!(summary.heart_rate_zone, None);
    assert_eq!(summary.visceral_fat_zone, None);
}

#[test]
fn test_summarize_classifies_zone_fields() {
    let entries = scale_readings();
    let summarizer = SeriesSummarizer::default();

    // Latest heart rate is 69
    let heart = summarizer.summarize(&entries, "heart_rate");
    assert_eq!(heart.heart_rate_zone, Some(HeartRateZone::Normal));

    let visceral = summarizer.summarize(&entries, "visceral_fat");
    assert_eq!(visceral.visceral_fat_zone, Some(VisceralFatZone::High));
    assert!(visceral.volatility.abs() < f64::EPSILON);
    assert_eq!(visceral.trend, TrendDirection::Stable);
}

#[test]
fn test_summarize_uses_configured_horizon() {
    let config = AnalyticsConfig {
        forecast: ForecastConfig { horizon_days: 3 },
        ..AnalyticsConfig::default()
    };
    let summarizer = SeriesSummarizer::new(config);
    let summary = summarizer.summarize(&scale_readings(), "weight");
    assert_eq!(summary.forecast.unwrap().points.len(), 3);
}

#[test]
fn test_summarize_fields_preserves_order() {
    let entries = scale_readings();
    let summarizer = SeriesSummarizer::default();

    let summaries = summarizer.summarize_fields(&entries, &["visceral_fat", "weight", "heart_rate"]);

    let names: Vec<&str> = summaries.iter().map(|s| s.field.as_str()).collect();
    assert_eq!(names, vec!["visceral_fat", "weight", "heart_rate"]);
    assert_eq!(summaries[1], summarizer.summarize(&entries, "weight"));
}

#[test]
fn test_summarize_empty_input() {
    let summary = SeriesSummarizer::default().summarize(&[], "value");
    assert_eq!(summary.observations, 0);
    assert_eq!(summary.latest, None);
    assert!(summary.moving_average.is_empty());
    assert_eq!(summary.trend, TrendDirection::Stable);
    assert_eq!(summary.week_trend, None);
    assert_eq!(summary.forecast, None);
}

#[test]
fn test_attendance_summary() {
    let start = date(2024, 6, 10);
    let entries = vec![
        checkin(start, 18, 5),
        checkin(day(start, 1), 7, 45),
        checkin(day(start, 2), 18, 20),
        checkin(day(start, 2), 19, 0),
        checkin(day(start, 6), 6, 30),
    ];

    let attendance = SeriesSummarizer::attendance(&entries);

    assert_eq!(attendance.total_entries, 5);
    assert_eq!(attendance.active_days, 4);
    assert_eq!(attendance.current_streak, StreakAnalyzer::current_streak(&entries));
    assert_eq!(attendance.longest_streak, 3);
    assert_eq!(attendance.weekly_counts.len(), 1);
    assert_eq!(attendance.busiest_day.unwrap().date, day(start, 2));
    assert_eq!(attendance.longest_break.unwrap().days, 4);
    assert_eq!(attendance.earliest_checkin.unwrap().date, day(start, 6));
    assert_eq!(attendance.latest_checkin.unwrap().date, day(start, 2));
    assert_eq!(attendance.heatmap.iter().map(|c| c.count).sum::<u32>(), 5);
}

#[test]
fn test_attendance_on_empty_input() {
    let attendance = SeriesSummarizer::attendance(&[]);
    assert_eq!(attendance.total_entries, 0);
    assert_eq!(attendance.current_streak, 0);
    assert!(attendance.weekly_counts.is_empty());
    assert!(attendance.rest_days.is_empty());
    assert_eq!(attendance.busiest_day, None);
}

#[test]
fn test_summary_serializes_without_absent_zones() {
    let entries = daily_values(date(2024, 1, 1), &[1.0, 2.0, 3.0]);
    let json = serde_json::to_value(SeriesSummarizer::default().summarize(&entries, "value")).unwrap();
    assert!(json.get("heart_rate_zone").is_none());
    assert_eq!(json["trend"], "up");

    let entries = field_series("heart_rate", date(2024, 1, 1), &[120.0]);
    let json = serde_json::to_value(SeriesSummarizer::default().summarize(&entries, "heart_rate")).unwrap();
    assert_eq!(json["heart_rate_zone"], "elevated");
}
