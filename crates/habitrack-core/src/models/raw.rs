// ABOUTME: RawRecord - the loosely-typed row shape fetched from the remote data store
// ABOUTME: Keeps date/time as strings and every other column in a flattened JSON map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A row as returned by the data store
///
/// ```json
/// { "date": "2024-06-12", "time": "07:45", "weight": 81.4, "heart_rate": null, "device": "scale" }
/// ```
///
/// Nothing is validated at deserialization time; conversion into a
/// `MetricEntry` decides what is usable. A `date` or `time` that is not a
/// JSON string is kept in its JSON text form so one bad row cannot fail a
/// whole array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Calendar date, expected as `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    /// Wall-clock time, expected as `HH:MM` or `HH:MM:SS`
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    /// Every other column
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}

/// Accept any JSON value: strings as-is, `null` as absent, anything else as its JSON text
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

impl RawRecord {
    /// Create a record with a date and no columns
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: None,
            columns: Map::new(),
        }
    }

    /// Set the time string
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Add a column
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }
}
