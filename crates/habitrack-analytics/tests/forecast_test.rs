// ABOUTME: Integration tests for linear forecasting and its residual band
// ABOUTME: Covers collinear series, noisy series, sparse dates, and insufficient data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{daily_values, date, day};
use habitrack_analytics::ForecastProjector;
use habitrack_core::MetricEntry;

#[test]
fn test_collinear_series_has_zero_swing() {
    let values: Vec<f64> = (0..8).map(|i| 0.5_f64.mul_add(f64::from(i), 70.0)).collect();
    let start = date(2024, 9, 1);
    let entries = daily_values(start, &values);

    let forecast = ForecastProjector::forecast(&entries, "value", 5).unwrap();

    assert!(forecast.daily_swing.abs() < f64::EPSILON);
    assert!((forecast.slope_per_day - 0.5).abs() < 1e-9);
    assert_eq!(forecast.points.len(), 5);
    for (step, point) in (8_u32..).zip(&forecast.points) {
        assert_eq!(point.date, day(start, u64::from(step)));
        let on_line = 0.5_f64.mul_add(f64::from(step), 70.0);
        assert!((point.value - on_line).abs() < 1e-9, "step {step}");
        let (low, high) = forecast.band(point);
        assert!((high - low).abs() < 1e-9);
    }
}

#[test]
fn test_collinear_series_with_calendar_gaps() {
    let start = date(2024, 9, 1);
    let entries: Vec<MetricEntry> = [0_u64, 3, 4, 10]
        .iter()
        .map(|offset| MetricEntry::scalar(day(start, *offset), 100.0 - 2.0 * *offset as f64))
        .collect();

    let forecast = ForecastProjector::forecast(&entries, "value", 2).unwrap();

    assert!(forecast.daily_swing.abs() < f64::EPSILON);
    assert_eq!(forecast.points[0].date, day(start, 11));
    assert!((forecast.points[0].value - 78.0).abs() < 1e-9);
    assert!((forecast.points[1].value - 76.0).abs() < 1e-9);
}

#[test]
fn test_noisy_series_band() {
    // Residuals of +1/-1 around a flat line at 10
    let entries = daily_values(date(2024, 9, 1), &[11.0, 9.0, 11.0, 9.0]);

    let forecast = ForecastProjector::forecast(&entries, "value", 3).unwrap();

    assert!(forecast.daily_swing > 0.0);
    let point = forecast.points[0];
    let (low, high) = forecast.band(&point);
    assert!((high - point.value - forecast.daily_swing).abs() < 1e-12);
    assert!((point.value - low - forecast.daily_swing).abs() < 1e-12);
    // Band width is the same across the horizon
    let last = forecast.points[2];
    let (last_low, last_high) = forecast.band(&last);
    assert!(((last_high - last_low) - (high - low)).abs() < 1e-12);
}

#[test]
fn test_forecast_needs_three_values() {
    let entries = daily_values(date(2024, 9, 1), &[1.0, 2.0]);
    assert!(ForecastProjector::forecast(&entries, "value", 7).is_none());
    assert!(ForecastProjector::forecast(&[], "value", 7).is_none());
}

#[test]
fn test_forecast_needs_two_dates() {
    let d = date(2024, 9, 1);
    let entries = vec![
        MetricEntry::scalar(d, 1.0),
        MetricEntry::scalar(d, 2.0),
        MetricEntry::scalar(d, 3.0),
    ];
    assert!(ForecastProjector::forecast(&entries, "value", 7).is_none());
}

#[test]
fn test_zero_horizon_has_no_points() {
    let entries = daily_values(date(2024, 9, 1), &[1.0, 2.0, 3.0]);
    let forecast = ForecastProjector::forecast(&entries, "value", 0).unwrap();
    assert!(forecast.points.is_empty());
    assert!((forecast.slope_per_day - 1.0).abs() < 1e-9);
}

#[test]
fn test_forecast_ignores_other_fields() {
    let entries = daily_values(date(2024, 9, 1), &[1.0, 2.0, 3.0]);
    assert!(ForecastProjector::forecast(&entries, "weight", 7).is_none());
}
