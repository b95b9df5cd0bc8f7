// ABOUTME: Normalizer - chronological ordering of entries and conversion of raw store rows
// ABOUTME: Drops rows with unparsable dates silently; every other analysis builds on its ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use habitrack_core::{AppError, AppResult, MetricEntry, MetricEntryBuilder, RawRecord};
use serde_json::Value;
use tracing::debug;

use crate::calendar;

/// Length of a `YYYY-MM-DD` date prefix
const DATE_PREFIX_LEN: usize = 10;

/// Accepted wall-clock time formats, tried in order
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Accepted offset-bearing timestamp formats besides RFC 3339
const OFFSET_TIMESTAMP_FORMATS: [&str; 2] =
    ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Accepted timestamp formats without an offset
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Chronological normalization of metric entries
pub struct Normalizer;

impl Normalizer {
    /// Copy of `entries` sorted ascending by date, then time
    ///
    /// Untimed entries come before timed ones on the same date; otherwise equal
    /// keys keep their input order. Applying this twice changes nothing.
    #[must_use]
    pub fn normalize(entries: &[MetricEntry]) -> Vec<MetricEntry> {
        calendar::chronological(entries)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Convert raw store rows into normalized entries
    ///
    /// Rows whose date cannot be parsed are dropped; they are expected at the
    /// import boundary and are not fatal to the analytics.
    #[must_use]
    pub fn from_raw(records: &[RawRecord]) -> Vec<MetricEntry> {
        let mut entries: Vec<MetricEntry> = Vec::with_capacity(records.len());
        let mut dropped = 0_usize;

        for record in records {
            match Self::parse_record(record) {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    dropped += 1;
                    debug!(error = %error, "Dropping record with unusable date");
                }
            }
        }

        if dropped > 0 {
            debug!(
                kept = entries.len(),
                dropped, "Normalized raw records with dropped rows"
            );
        }

        entries.sort_by_key(MetricEntry::sort_key);
        entries
    }

    /// Convert a single raw row
    ///
    /// Numbers become field values, `null` becomes an explicitly missing field,
    /// strings become metadata, and other JSON kinds are ignored. An
    /// unparsable `time` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the date is missing or unparsable
    pub fn parse_record(record: &RawRecord) -> AppResult<MetricEntry> {
        let raw_date = record
            .date
            .as_deref()
            .ok_or_else(|| AppError::invalid_format("date", ""))?;
        let (date, stamp_time) = Self::parse_date(raw_date)?;

        let time = match record.time.as_deref() {
            Some(raw_time) => Self::parse_time(raw_time).or_else(|| {
                debug!(time = raw_time, "Ignoring unparsable time");
                None
            }),
            None => stamp_time,
        };

        let mut builder = MetricEntryBuilder::new(date).maybe_time(time);
        for (name, value) in &record.columns {
            builder = match value {
                Value::Number(number) => match number.as_f64() {
                    Some(v) => builder.field(name.as_str(), v),
                    None => builder.missing(name.as_str()),
                },
                Value::Null => builder.missing(name.as_str()),
                Value::String(text) => builder.metadata(name.as_str(), text.as_str()),
                Value::Bool(_) | Value::Array(_) | Value::Object(_) => builder,
            };
        }

        Ok(builder.build())
    }

    /// Parse a `YYYY-MM-DD` date, or an ISO timestamp whose clock time is returned too
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if no accepted format matches
    pub fn parse_date(raw: &str) -> AppResult<(NaiveDate, Option<NaiveTime>)> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok((date, None));
        }

        if trimmed.len() > DATE_PREFIX_LEN {
            // Offset timestamps keep the local clock time they were recorded with
            if let Some(stamped) = DateTime::parse_from_rfc3339(trimmed).ok().or_else(|| {
                OFFSET_TIMESTAMP_FORMATS
                    .iter()
                    .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
            }) {
                let local = stamped.naive_local();
                return Ok((local.date(), Some(local.time())));
            }

            let stamp = trimmed.trim_end_matches('Z');
            if let Some(parsed) = TIMESTAMP_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(stamp, format).ok())
            {
                return Ok((parsed.date(), Some(parsed.time())));
            }
        }

        Err(AppError::invalid_format("date", raw))
    }

    /// Parse `HH:MM` or `HH:MM:SS`
    #[must_use]
    pub fn parse_time(raw: &str) -> Option<NaiveTime> {
        let trimmed = raw.trim();
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
    }
}
