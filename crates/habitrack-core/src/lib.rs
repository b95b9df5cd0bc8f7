// ABOUTME: Core types and constants for the Habitrack metrics analytics engine
// ABOUTME: Foundation crate with the metric entry model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

#![deny(unsafe_code)]

//! # Habitrack Core
//!
//! Foundation crate providing shared types and constants for the Habitrack
//! metrics analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default windows, thresholds, and field names
//! - **models**: `MetricEntry`, `RawRecord`, and `YearMonth`

/// Unified error handling system with standard error codes
pub mod errors;

/// Analytics constants organized by domain
pub mod constants;

/// Core data models (metric entries, raw records, calendar months)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{MetricEntry, MetricEntryBuilder, RawRecord, YearMonth};
