// ABOUTME: Report pipeline turning a JSON array of raw records into per-field and attendance summaries
// ABOUTME: Owns the I/O boundary; the analytics engine it drives stays pure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::NaiveDate;
use habitrack_analytics::{
    AnalyticsConfig, AttendanceSummary, MetricSummary, Normalizer, SeriesSummarizer,
};
use habitrack_core::{AppError, AppResult, ErrorCode, MetricEntry, RawRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// What to include in a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Fields to summarize; empty means every numeric field found
    pub fields: Vec<String>,
    /// Forecast horizon overriding the configured one
    pub horizon_days: Option<u32>,
    /// Include the attendance summary
    pub attendance: bool,
}

impl ReportOptions {
    /// Summarize `fields` only
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Override the forecast horizon
    #[must_use]
    pub const fn with_horizon(mut self, days: u32) -> Self {
        self.horizon_days = Some(days);
        self
    }

    /// Include the attendance summary
    #[must_use]
    pub const fn with_attendance(mut self) -> Self {
        self.attendance = true;
        self
    }
}

/// Summaries of one series of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Records read from the input
    pub records_read: usize,
    /// Records dropped for an unusable date
    pub records_dropped: usize,
    /// Earliest entry date
    pub first_date: Option<NaiveDate>,
    /// Latest entry date
    pub last_date: Option<NaiveDate>,
    /// One summary per requested field
    pub fields: Vec<MetricSummary>,
    /// Attendance analyses, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceSummary>,
}

/// Builds reports with a fixed analytics configuration
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: AnalyticsConfig,
}

impl ReportGenerator {
    /// Create a generator, validating `config` first
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configuration fails validation
    pub fn new(config: AnalyticsConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generator using defaults with `HABITRACK_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if an override is unparsable or invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            config: AnalyticsConfig::load()?,
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Build a report from already parsed records
    #[must_use]
    pub fn generate(&self, records: &[RawRecord], options: &ReportOptions) -> SeriesReport {
        let entries = Normalizer::from_raw(records);
        let records_dropped = records.len() - entries.len();

        let mut config = self.config.clone();
        if let Some(horizon_days) = options.horizon_days {
            config.forecast.horizon_days = horizon_days;
        }
        let summarizer = SeriesSummarizer::new(config);

        let field_names = if options.fields.is_empty() {
            numeric_fields(&entries)
        } else {
            options.fields.clone()
        };
        let field_refs: Vec<&str> = field_names.iter().map(String::as_str).collect();

        info!(
            records = records.len(),
            dropped = records_dropped,
            fields = field_refs.len(),
            "Generating series report"
        );

        SeriesReport {
            records_read: records.len(),
            records_dropped,
            first_date: entries.first().map(|entry| entry.date),
            last_date: entries.last().map(|entry| entry.date),
            fields: summarizer.summarize_fields(&entries, &field_refs),
            attendance: options
                .attendance
                .then(|| SeriesSummarizer::attendance(&entries)),
        }
    }

    /// Build a report from a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if `input` is not a JSON array of objects
    pub fn generate_from_json(&self, input: &str, options: &ReportOptions) -> AppResult<SeriesReport> {
        let records = parse_records(input)?;
        Ok(self.generate(&records, options))
    }

    /// Build a report from a reader yielding a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if reading fails, or
    /// `ErrorCode::InvalidFormat` if the content is not a JSON array of objects
    pub fn generate_from_reader<R: Read>(
        &self,
        mut reader: R,
        options: &ReportOptions,
    ) -> AppResult<SeriesReport> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.generate_from_json(&input, options)
    }

    /// Build a report from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the file cannot be read, or
    /// `ErrorCode::InvalidFormat` if it is not a JSON array of objects
    pub fn generate_from_path(&self, path: &Path, options: &ReportOptions) -> AppResult<SeriesReport> {
        debug!(path = %path.display(), "Reading records");
        let input = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
        })?;
        self.generate_from_json(&input, options)
    }
}

/// Parse a JSON array of raw records
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if `input` is not a JSON array of objects
pub fn parse_records(input: &str) -> AppResult<Vec<RawRecord>> {
    serde_json::from_str(input).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Expected a JSON array of records: {e}"),
        )
        .with_source(e)
    })
}

/// Names of every field present on any entry, sorted
fn numeric_fields(entries: &[MetricEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(MetricEntry::field_names)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
