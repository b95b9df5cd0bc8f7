// ABOUTME: MetricEntry model - one dated measurement with a sparse bag of numeric fields
// ABOUTME: Includes a builder and finite-value accessors used by every analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use crate::constants::fields;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One measurement for one user and one tracking domain
///
/// A body-weight log carries a single `value` field; a smart-scale reading
/// carries several (`weight`, `body_fat`, `heart_rate`, ...) any of which may be
/// missing. A field stored as `None` was explicitly absent in the source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    /// Calendar date of the measurement (no timezone)
    pub date: NaiveDate,
    /// Local wall-clock time, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Named numeric fields
    #[serde(default)]
    pub fields: BTreeMap<String, Option<f64>>,
    /// Categorical metadata (device, facility, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl MetricEntry {
    /// Create an entry with no fields
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            fields: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Create a single-valued entry stored under the `value` field
    #[must_use]
    pub fn scalar(date: NaiveDate, value: f64) -> Self {
        MetricEntryBuilder::new(date)
            .field(fields::VALUE, value)
            .build()
    }

    /// Finite value of `field`, or `None` when missing, null, or NaN/infinite
    #[must_use]
    pub fn value(&self, field: &str) -> Option<f64> {
        self.fields
            .get(field)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// Whether `field` holds a usable value
    #[must_use]
    pub fn has_value(&self, field: &str) -> bool {
        self.value(field).is_some()
    }

    /// Names of all fields present on this entry, including null ones
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Chronological ordering key: date, then time (untimed first)
    #[must_use]
    pub const fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>) {
        (self.date, self.time)
    }
}

/// Builder for `MetricEntry`
#[derive(Debug, Clone)]
pub struct MetricEntryBuilder {
    entry: MetricEntry,
}

impl MetricEntryBuilder {
    /// Start an entry on `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            entry: MetricEntry::new(date),
        }
    }

    /// Set the wall-clock time
    #[must_use]
    pub const fn time(mut self, time: NaiveTime) -> Self {
        self.entry.time = Some(time);
        self
    }

    /// Set the wall-clock time if one is known
    #[must_use]
    pub const fn maybe_time(mut self, time: Option<NaiveTime>) -> Self {
        self.entry.time = time;
        self
    }

    /// Add a numeric field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.entry.fields.insert(name.into(), Some(value));
        self
    }

    /// Add a field that was present but null in the source
    #[must_use]
    pub fn missing(mut self, name: impl Into<String>) -> Self {
        self.entry.fields.insert(name.into(), None);
        self
    }

    /// Add a categorical metadata value
    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry.metadata.insert(key.into(), value.into());
        self
    }

    /// Finish the entry
    #[must_use]
    pub fn build(self) -> MetricEntry {
        self.entry
    }
}
