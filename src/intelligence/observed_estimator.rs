// ABOUTME: Energy-balance TDEE from logged intake and the interpolated weight trend
// ABOUTME: Rejects sparse windows, long weight gaps, and physiologically implausible results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Observed Estimator Module
//!
//! Over the trailing window, energy out equals energy in minus the energy
//! stored as body mass:
//!
//! ```text
//! observed_tdee = total_intake / window_days - weight_delta_kg * kcal_per_kg / span_days
//! ```
//!
//! Only qualifying days (logged intake and a known or interpolated weight)
//! contribute intake. The weight change is spread over the calendar span
//! between the first and last qualifying day.
//!
//! # Scientific References
//!
//! - Hall, K.D., et al. (2011). Quantification of the effect of energy imbalance on bodyweight.
//!   *The Lancet*, 378(9793), 826-837.
//!   <https://doi.org/10.1016/S0140-6736(11)60812-X>

use super::weight_series::WeightSeries;
use crate::config::ObservedConfig;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tdee_core::errors::{EstimationError, InsufficiencyReason};
use tdee_core::models::DailyRecord;
use tracing::debug;

/// Result of a successful energy-balance estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservedEstimate {
    /// Energy-balance TDEE (kcal/day)
    pub observed_tdee: f64,
    /// Mean intake over qualifying days
    pub avg_intake: f64,
    /// Sum of intake over qualifying days
    pub total_intake: f64,
    /// Number of qualifying days
    pub window_days: u32,
    /// Calendar days from first to last qualifying day inclusive
    pub span_days: u32,
    /// Weight on the last qualifying day minus weight on the first
    pub weight_delta_kg: f64,
    /// Lengths of consecutive non-qualifying runs inside the span
    pub unlogged_runs: Vec<u32>,
    /// First qualifying day
    pub first_day: NaiveDate,
    /// Last qualifying day
    pub last_day: NaiveDate,
}

/// Energy-balance estimator over a trailing window
#[derive(Debug, Clone, Copy)]
pub struct ObservedEstimator<'a> {
    config: &'a ObservedConfig,
}

impl<'a> ObservedEstimator<'a> {
    /// Create an estimator over observed-window settings
    #[must_use]
    pub const fn new(config: &'a ObservedConfig) -> Self {
        Self { config }
    }

    /// First calendar day of the trailing window ending at `as_of`
    #[must_use]
    pub fn window_start(&self, as_of: NaiveDate) -> NaiveDate {
        as_of - Duration::days(i64::from(self.config.window_max_days.max(1)) - 1)
    }

    /// Estimate TDEE from records in the trailing window
    ///
    /// `records` must be sorted with one entry per date. `formula_tdee`
    /// anchors the plausibility band.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` when too few qualifying days exist or a weight gap
    ///   inside the window exceeds the interpolation limit
    /// - `ImplausibleEstimate` when the result falls outside the sanity band
    pub fn estimate(
        &self,
        records: &[DailyRecord],
        weights: &WeightSeries,
        as_of: NaiveDate,
        formula_tdee: f64,
    ) -> Result<ObservedEstimate, EstimationError> {
        let start = self.window_start(as_of);

        let qualifying: Vec<(NaiveDate, f64, f64)> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= as_of && r.has_intake())
            .filter_map(|r| weights.weight_on(r.date).map(|w| (r.date, r.calories_in, w)))
            .collect();

        let available = u32::try_from(qualifying.len()).unwrap_or(u32::MAX);
        if available < self.config.min_qualifying_days {
            debug!(
                available,
                required = self.config.min_qualifying_days,
                "Observed estimate skipped: too few qualifying days"
            );
            return Err(EstimationError::insufficient(
                InsufficiencyReason::TooFewQualifyingDays {
                    available,
                    required: self.config.min_qualifying_days,
                },
            ));
        }

        let gap_days = weights.longest_interpolated_run(start, as_of);
        if gap_days > self.config.max_interpolation_gap_days {
            debug!(
                gap_days,
                max_gap_days = self.config.max_interpolation_gap_days,
                "Observed estimate skipped: weight gap too long"
            );
            return Err(EstimationError::insufficient(
                InsufficiencyReason::WeightGapTooLong {
                    gap_days,
                    max_gap_days: self.config.max_interpolation_gap_days,
                },
            ));
        }

        let (Some(&(first_day, _, first_weight)), Some(&(last_day, _, last_weight))) =
            (qualifying.first(), qualifying.last())
        else {
            return Err(EstimationError::insufficient(
                InsufficiencyReason::TooFewQualifyingDays {
                    available: 0,
                    required: self.config.min_qualifying_days,
                },
            ));
        };

        let total_intake: f64 = qualifying.iter().map(|(_, intake, _)| intake).sum();
        let window_days = available.max(1);
        let span_days = u32::try_from((last_day - first_day).num_days() + 1)
            .unwrap_or(1)
            .max(1);
        let weight_delta_kg = last_weight - first_weight;

        let avg_intake = total_intake / f64::from(window_days);
        let stored_energy_per_day =
            weight_delta_kg * self.config.kcal_per_kg / f64::from(span_days);
        let observed_tdee = avg_intake - stored_energy_per_day;

        let lower_bound = self.config.sanity_lower_ratio * formula_tdee;
        let upper_bound = self.config.sanity_upper_ratio * formula_tdee;
        if !observed_tdee.is_finite() || observed_tdee < lower_bound || observed_tdee > upper_bound
        {
            debug!(
                observed_tdee,
                lower_bound, upper_bound, "Observed estimate outside plausible band"
            );
            return Err(EstimationError::ImplausibleEstimate {
                observed_tdee,
                lower_bound,
                upper_bound,
            });
        }

        let qualifying_dates: BTreeSet<NaiveDate> =
            qualifying.iter().map(|(date, _, _)| *date).collect();

        Ok(ObservedEstimate {
            observed_tdee,
            avg_intake,
            total_intake,
            window_days,
            span_days,
            weight_delta_kg,
            unlogged_runs: unlogged_runs(&qualifying_dates, first_day, last_day),
            first_day,
            last_day,
        })
    }
}

/// Lengths of consecutive runs of dates in `[first, last]` missing from `logged`
fn unlogged_runs(logged: &BTreeSet<NaiveDate>, first: NaiveDate, last: NaiveDate) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current = 0_u32;
    let mut date = first;
    while date <= last {
        if logged.contains(&date) {
            if current > 0 {
                runs.push(current);
                current = 0;
            }
        } else {
            current += 1;
        }
        date += Duration::days(1);
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn test_unlogged_runs() {
        let logged: BTreeSet<NaiveDate> = [1, 2, 5, 6, 7, 10].into_iter().map(date).collect();
        assert_eq!(unlogged_runs(&logged, date(1), date(10)), vec![2, 2]);

        let all: BTreeSet<NaiveDate> = (1..=5).map(date).collect();
        assert!(unlogged_runs(&all, date(1), date(5)).is_empty());
    }

    #[test]
    fn test_window_start_covers_trailing_days() {
        let config = ObservedConfig::default();
        let estimator = ObservedEstimator::new(&config);
        assert_eq!(estimator.window_start(date(28)), date(1));
    }
}
