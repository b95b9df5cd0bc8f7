// ABOUTME: Descriptive statistics and ordinary least squares regression for metric series
// ABOUTME: Mean, population standard deviation, and a linear fit with residual spread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

use serde::{Deserialize, Serialize};

/// Result of fitting `y = slope * x + intercept` by least squares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Slope of the regression line (change in y per unit x)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Population standard deviation of the residuals
    pub residual_std_dev: f64,
    /// Number of points the line was fitted to
    pub sample_size: usize,
}

impl LinearFit {
    /// Fitted value at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Arithmetic mean, or `None` for an empty slice
///
/// A constant slice returns the constant exactly.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    let first = *values.first()?;
    if is_constant(values) {
        return Some(first);
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation; `0.0` for fewer than two values
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 || is_constant(values) {
        return 0.0;
    }
    let Some(avg) = mean(values) else {
        return 0.0;
    };
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Whether every value is bit-for-bit identical
fn is_constant(values: &[f64]) -> bool {
    values
        .split_first()
        .map_or(true, |(first, rest)| rest.iter().all(|v| v.to_bits() == first.to_bits()))
}

/// Ordinary least squares fit of `points` given as `(x, y)` pairs
///
/// Returns `None` for fewer than two points or when every `x` is equal (the
/// slope is undefined).
#[must_use]
pub fn linear_regression(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
    let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    // Centered sums keep the fit stable for large day indices
    let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
    });

    if sxx.abs() < f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let sse = points
        .iter()
        .map(|(x, y)| {
            let residual = y - slope.mul_add(*x, intercept);
            residual * residual
        })
        .sum::<f64>();

    let r_squared = if syy.abs() < f64::EPSILON {
        1.0
    } else {
        (1.0 - sse / syy).clamp(0.0, 1.0)
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
        residual_std_dev: (sse / n).sqrt(),
        sample_size: points.len(),
    })
}
