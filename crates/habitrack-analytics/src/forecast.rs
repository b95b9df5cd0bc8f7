// ABOUTME: Linear trend forecasting: least squares over the full history, daily projection with a swing band
// ABOUTME: The band is the residual standard deviation and stays constant across the horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Habitrack Contributors
#![allow(clippy::cast_precision_loss)] // Safe: day indices are far below 2^52

use chrono::NaiveDate;
use habitrack_core::constants::forecast::{EXACT_FIT_TOLERANCE, MIN_POINTS};
use habitrack_core::MetricEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar;
use crate::statistics::{self, LinearFit};

/// One projected value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Projected date
    pub date: NaiveDate,
    /// Value on the fitted line at that date
    pub value: f64,
}

/// A linear projection with a symmetric uncertainty band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Half-width of the band drawn around every projected value
    pub daily_swing: f64,
    /// Fitted change per calendar day
    pub slope_per_day: f64,
    /// One point per day after the last observation
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Lower and upper band bounds around `point`
    #[must_use]
    pub fn band(&self, point: &ForecastPoint) -> (f64, f64) {
        (point.value - self.daily_swing, point.value + self.daily_swing)
    }
}

/// Linear forecast projector
pub struct ForecastProjector;

impl ForecastProjector {
    /// Project `field` forward by `horizon_days`
    ///
    /// Fits value against the calendar-day index (days since the first valid
    /// observation) and extends the line one point per day past the last
    /// observed date. Returns `None` with fewer than three valid values or when
    /// they all fall on one date.
    #[must_use]
    pub fn forecast(entries: &[MetricEntry], field: &str, horizon_days: u32) -> Option<Forecast> {
        let observations = calendar::observations(entries, field);
        if observations.len() < MIN_POINTS {
            return None;
        }
        let first_date = observations.first()?.date;
        let last_date = observations.last()?.date;

        let points: Vec<(f64, f64)> = observations
            .iter()
            .map(|o| (calendar::days_between(first_date, o.date) as f64, o.value))
            .collect();

        let Some(fit) = statistics::linear_regression(&points) else {
            debug!(field, "Forecast skipped: observations share a single date");
            return None;
        };

        let last_index = calendar::days_between(first_date, last_date);
        Some(Forecast {
            daily_swing: Self::daily_swing(&fit),
            slope_per_day: fit.slope,
            points: Self::project(&fit, last_date, last_index, horizon_days),
        })
    }

    fn daily_swing(fit: &LinearFit) -> f64 {
        if fit.residual_std_dev < EXACT_FIT_TOLERANCE {
            0.0
        } else {
            fit.residual_std_dev
        }
    }

    fn project(
        fit: &LinearFit,
        last_date: NaiveDate,
        last_index: i64,
        horizon_days: u32,
    ) -> Vec<ForecastPoint> {
        (1..=horizon_days)
            .map_while(|step| {
                calendar::days_after(last_date, step).map(|date| ForecastPoint {
                    date,
                    value: fit.predict((last_index + i64::from(step)) as f64),
                })
            })
            .collect()
    }
}
