// ABOUTME: Main library entry point for the Habitrack reporting tools
// ABOUTME: Re-exports the analytics engine and adds logging setup and the JSON report pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![deny(unsafe_code)]

//! # Habitrack
//!
//! Time-series analytics for habit and health tracking data: body weight
//! logs, smart-scale readings, body scans and gym check-ins.
//!
//! ## Architecture
//!
//! - **`habitrack-core`**: entry model, error types, constants
//! - **`habitrack-analytics`**: the pure analytics engine (normalizer,
//!   aggregator, trends, streaks, records, forecast, zones, summaries)
//! - **this crate**: logging setup, the report pipeline and the
//!   `habitrack-report` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use habitrack::report::{ReportGenerator, ReportOptions};
//!
//! let input = r#"[
//!     {"date": "2024-05-01", "weight": 82.0},
//!     {"date": "2024-05-02", "weight": 81.6},
//!     {"date": "2024-05-03", "weight": 81.5}
//! ]"#;
//!
//! let report = ReportGenerator::default()
//!     .generate_from_json(input, &ReportOptions::default().with_fields(["weight"]))?;
//! assert_eq!(report.fields[0].observations, 3);
//! # Ok::<(), habitrack::AppError>(())
//! ```

/// Structured logging configuration
pub mod logging;

/// JSON report pipeline
pub mod report;

pub use habitrack_analytics as analytics;
pub use habitrack_core::{AppError, AppResult, ErrorCode, MetricEntry, RawRecord, YearMonth};
pub use report::{ReportGenerator, ReportOptions, SeriesReport};
