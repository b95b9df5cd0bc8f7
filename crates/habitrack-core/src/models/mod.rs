// ABOUTME: Core data models for the Habitrack metrics analytics engine
// ABOUTME: Re-exports MetricEntry, RawRecord, and YearMonth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! # Data Models
//!
//! One generic record shape covers every tracking domain (body weight, gym
//! check-ins, smart-scale body composition, body scans): a calendar date, an
//! optional wall-clock time, and a sparse bag of named numeric fields.
//!
//! - `MetricEntry`: a normalized measurement the engine analyzes
//! - `RawRecord`: the loosely-typed row fetched from the data store
//! - `YearMonth`: a `YYYY-MM` calendar month key

mod entry;
mod month;
mod raw;

pub use entry::{MetricEntry, MetricEntryBuilder};
pub use month::YearMonth;
pub use raw::RawRecord;
