// ABOUTME: Body-weight series with linear interpolation across unmeasured days
// ABOUTME: Shared by the observed estimator and the trend analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interpolated weight series
//!
//! A day between two real measurements gets the linear interpolation of the
//! two nearest measurements. Days before the first or after the last
//! measurement have no weight; the series never extrapolates.

use super::statistical_analysis::StatisticalAnalyzer;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tdee_core::constants::energy::DAYS_PER_WEEK;
use tdee_core::models::DailyRecord;

/// Measured weights keyed by local date
#[derive(Debug, Clone, Default)]
pub struct WeightSeries {
    measured: BTreeMap<NaiveDate, f64>,
}

impl WeightSeries {
    /// Build the series from daily records, ignoring non-positive weights
    #[must_use]
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let measured = records
            .iter()
            .filter_map(|record| {
                record
                    .weight_kg
                    .filter(|w| w.is_finite() && *w > 0.0)
                    .map(|w| (record.date, w))
            })
            .collect();
        Self { measured }
    }

    /// Whether the series holds no measurement
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    /// Most recent real measurement
    #[must_use]
    pub fn latest(&self) -> Option<(NaiveDate, f64)> {
        self.measured.iter().next_back().map(|(d, w)| (*d, *w))
    }

    /// Whether a real measurement exists on `date`
    #[must_use]
    pub fn is_measured(&self, date: NaiveDate) -> bool {
        self.measured.contains_key(&date)
    }

    /// Measured or interpolated weight on `date`
    #[must_use]
    pub fn weight_on(&self, date: NaiveDate) -> Option<f64> {
        if let Some(weight) = self.measured.get(&date) {
            return Some(*weight);
        }

        let (prev_date, prev_weight) = self.measured.range(..date).next_back()?;
        let (next_date, next_weight) = self.measured.range(date..).next()?;

        let span = (*next_date - *prev_date).num_days();
        if span <= 0 {
            return Some(*prev_weight);
        }
        let offset = (date - *prev_date).num_days();
        #[allow(clippy::cast_precision_loss)] // Safe: day counts are small
        let fraction = offset as f64 / span as f64;
        Some(fraction.mul_add(next_weight - prev_weight, *prev_weight))
    }

    /// Longest run of interpolated (unmeasured but bridged) days inside `[start, end]`
    #[must_use]
    pub fn longest_interpolated_run(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let dates: Vec<NaiveDate> = self.measured.keys().copied().collect();
        dates
            .windows(2)
            .filter_map(|pair| {
                let first_gap_day = (pair[0] + Duration::days(1)).max(start);
                let last_gap_day = (pair[1] - Duration::days(1)).min(end);
                let run = (last_gap_day - first_gap_day).num_days() + 1;
                u32::try_from(run).ok()
            })
            .max()
            .unwrap_or(0)
    }

    /// Every calendar day in `[start, end]` that has a measured or interpolated weight
    #[must_use]
    pub fn samples(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, f64)> {
        if start > end {
            return Vec::new();
        }
        let days = (end - start).num_days() + 1;
        (0..days)
            .map(|offset| start + Duration::days(offset))
            .filter_map(|date| self.weight_on(date).map(|w| (date, w)))
            .collect()
    }

    /// Regression-based weight change per week over the trailing `days` ending at `end`
    ///
    /// Returns `0.0` when fewer than two weights are available.
    #[must_use]
    pub fn weekly_change_kg(&self, end: NaiveDate, days: u32) -> f64 {
        let start = end - Duration::days(i64::from(days.max(1)) - 1);
        StatisticalAnalyzer::dated_regression(&self.samples(start, end))
            .map_or(0.0, |regression| regression.slope * DAYS_PER_WEEK)
    }
}
