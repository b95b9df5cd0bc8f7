// ABOUTME: Common benchmark utilities and fixtures for analytics performance testing
// ABOUTME: Provides reusable series generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
