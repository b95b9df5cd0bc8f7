// ABOUTME: Integration tests for the JSON report pipeline
// ABOUTME: Covers field discovery, dropped rows, file and reader input, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use habitrack::analytics::{AnalyticsConfig, TrendConfig, TrendDirection};
use habitrack::report::{parse_records, ReportGenerator, ReportOptions};
use habitrack::ErrorCode;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const SCALE_EXPORT: &str = r#"[
    {"date": "2024-05-01", "time": "07:10", "weight": 82.0, "heart_rate": 64, "device": "scale-a"},
    {"date": "2024-05-02", "time": "07:05", "weight": 81.8, "heart_rate": 66, "body_fat": null},
    {"date": "not a date", "weight": 10.0},
    {"date": "2024-05-03", "time": "07:20", "weight": 81.5, "heart_rate": 102},
    {"date": "2024-05-05", "time": "19:45", "weight": 81.1, "heart_rate": 70}
]"#;

#[test]
fn test_report_discovers_numeric_fields() {
    let report = ReportGenerator::default()
        .generate_from_json(SCALE_EXPORT, &ReportOptions::default())
        .unwrap();

    assert_eq!(report.records_read, 5);
    assert_eq!(report.records_dropped, 1);
    let names: Vec<&str> = report.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(names, vec!["body_fat", "heart_rate", "weight"]);
    assert_eq!(report.fields[0].observations, 0);
    assert!(report.attendance.is_none());
}

#[test]
fn test_report_date_range_and_selected_fields() {
    let options = ReportOptions::default().with_fields(["weight"]);
    let report = ReportGenerator::default()
        .generate_from_json(SCALE_EXPORT, &options)
        .unwrap();

    assert_eq!(report.first_date.unwrap().to_string(), "2024-05-01");
    assert_eq!(report.last_date.unwrap().to_string(), "2024-05-05");
    assert_eq!(report.fields.len(), 1);

    let weight = &report.fields[0];
    assert_eq!(weight.observations, 4);
    assert_eq!(weight.trend, TrendDirection::Down);
    assert_eq!(weight.extremes.max.unwrap().value, 82.0);
}

#[test]
fn test_report_horizon_override() {
    let options = ReportOptions::default()
        .with_fields(["weight"])
        .with_horizon(3);
    let report = ReportGenerator::default()
        .generate_from_json(SCALE_EXPORT, &options)
        .unwrap();

    let forecast = report.fields[0].forecast.as_ref().unwrap();
    assert_eq!(forecast.points.len(), 3);
    assert_eq!(forecast.points[0].date.to_string(), "2024-05-06");
}

#[test]
fn test_report_attendance_section() {
    let options = ReportOptions::default()
        .with_fields(["heart_rate"])
        .with_attendance();
    let report = ReportGenerator::default()
        .generate_from_json(SCALE_EXPORT, &options)
        .unwrap();

    let attendance = report.attendance.unwrap();
    assert_eq!(attendance.total_entries, 4);
    assert_eq!(attendance.longest_streak, 3);
    assert_eq!(attendance.current_streak, 1);
    assert_eq!(attendance.latest_checkin.unwrap().time.to_string(), "19:45:00");
}

#[test]
fn test_non_string_date_drops_only_that_row() {
    let input = r#"[
        {"date": "2024-05-01", "weight": 82.0},
        {"date": 20240502, "time": 705, "weight": 81.8},
        {"date": "2024-05-03", "weight": 81.5}
    ]"#;
    let report = ReportGenerator::default()
        .generate_from_json(input, &ReportOptions::default().with_fields(["weight"]))
        .unwrap();

    assert_eq!(report.records_read, 3);
    assert_eq!(report.records_dropped, 1);
    assert_eq!(report.fields[0].observations, 2);
}

#[test]
fn test_report_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SCALE_EXPORT.as_bytes()).unwrap();

    let report = ReportGenerator::default()
        .generate_from_path(file.path(), &ReportOptions::default().with_fields(["weight"]))
        .unwrap();

    assert_eq!(report.fields[0].observations, 4);
}

#[test]
fn test_report_from_reader() {
    let report = ReportGenerator::default()
        .generate_from_reader(Cursor::new(SCALE_EXPORT), &ReportOptions::default())
        .unwrap();
    assert_eq!(report.records_read, 5);
}

#[test]
fn test_missing_file_is_storage_error() {
    let error = ReportGenerator::default()
        .generate_from_path(Path::new("/nonexistent/records.json"), &ReportOptions::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_non_array_input_is_invalid_format() {
    let error = parse_records(r#"{"date": "2024-05-01"}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.code.exit_status(), 65);
}

#[test]
fn test_empty_array_gives_empty_report() {
    let report = ReportGenerator::default()
        .generate_from_json("[]", &ReportOptions::default().with_attendance())
        .unwrap();

    assert_eq!(report.records_read, 0);
    assert!(report.fields.is_empty());
    assert_eq!(report.first_date, None);
    assert_eq!(report.attendance.unwrap().longest_streak, 0);
}

#[test]
fn test_generator_rejects_invalid_config() {
    let config = AnalyticsConfig {
        trend: TrendConfig {
            moving_average_window_days: 0,
            ..TrendConfig::default()
        },
        ..AnalyticsConfig::default()
    };
    let error = ReportGenerator::new(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_report_serializes_to_json() {
    let report = ReportGenerator::default()
        .generate_from_json(SCALE_EXPORT, &ReportOptions::default().with_fields(["heart_rate"]))
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["fields"][0]["heart_rate_zone"], "normal");
    assert!(json.get("attendance").is_none());
}
