// ABOUTME: Maintains the TDEE trend series and detects direction, adaptation, and plateaus
// ABOUTME: Uses least-squares regression over recent estimates and the weight series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::observed_estimator::ObservedEstimate;
use super::statistical_analysis::StatisticalAnalyzer;
use super::weight_series::WeightSeries;
use crate::config::TrendConfig;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tdee_core::constants::energy::DAYS_PER_WEEK;
use tdee_core::models::{DailyRecord, TrendDirection, TrendPoint, WeeklyGoal};
use tracing::warn;

const BLOCK_DAYS: i64 = 7;

/// Sort ascending and keep one point per date (the last one given)
#[must_use]
pub fn normalize_trend(series: &[TrendPoint]) -> Vec<TrendPoint> {
    let by_date: BTreeMap<NaiveDate, TrendPoint> =
        series.iter().map(|point| (point.date, *point)).collect();
    by_date.into_values().collect()
}

/// Insert today's point into a normalized copy of the series
///
/// A later point is appended and a same-date point overwrites the last
/// entry. A point dated before the latest entry is refused and the
/// normalized series is returned unchanged.
#[must_use]
pub fn upsert_trend_point(series: &[TrendPoint], point: TrendPoint) -> Vec<TrendPoint> {
    let mut normalized = normalize_trend(series);
    match normalized.last_mut() {
        Some(last) if last.date == point.date => *last = point,
        Some(last) if last.date > point.date => {
            warn!(
                point_date = %point.date,
                latest_date = %last.date,
                "Refusing trend point dated before the latest entry"
            );
        }
        _ => normalized.push(point),
    }
    normalized
}

/// Direction, adaptation, and plateau detection
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer<'a> {
    config: &'a TrendConfig,
}

impl<'a> TrendAnalyzer<'a> {
    /// Create an analyzer over trend thresholds
    #[must_use]
    pub const fn new(config: &'a TrendConfig) -> Self {
        Self { config }
    }

    /// Classify the direction of the last `regression_points` estimates
    ///
    /// The weekly slope is compared against a percentage of `current_tdee`.
    #[must_use]
    pub fn classify(&self, series: &[TrendPoint], current_tdee: f64) -> TrendDirection {
        let skip = series.len().saturating_sub(self.config.regression_points);
        let samples: Vec<(NaiveDate, f64)> = series[skip..]
            .iter()
            .map(|point| (point.date, point.tdee))
            .collect();

        let Some(regression) = StatisticalAnalyzer::dated_regression(&samples) else {
            return TrendDirection::Stable;
        };

        let weekly_slope = regression.slope * DAYS_PER_WEEK;
        let threshold = current_tdee.abs() * self.config.slope_threshold_percent_per_week / 100.0;

        if weekly_slope > threshold {
            TrendDirection::Increasing
        } else if weekly_slope < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    /// Weekly weight change from the trailing `weight_trend_days` of the series
    #[must_use]
    pub fn weekly_weight_change(&self, weights: &WeightSeries, as_of: NaiveDate) -> f64 {
        weights.weekly_change_kg(as_of, self.config.weight_trend_days)
    }

    /// Whether observed expenditure sits well below the formula over a long span
    #[must_use]
    pub fn detect_metabolic_adaptation(
        &self,
        formula_tdee: f64,
        observed: Option<&ObservedEstimate>,
    ) -> bool {
        let Some(observed) = observed else {
            return false;
        };
        if formula_tdee <= 0.0 || observed.span_days < self.config.adaptation_min_window_days {
            return false;
        }
        (formula_tdee - observed.observed_tdee) / formula_tdee > self.config.adaptation_threshold
    }

    /// Whether weight has stalled while intake stays below the recommendation
    ///
    /// Each of the last `plateau_min_weeks` seven-day blocks ending at `as_of`
    /// must hold at least two weigh-ins within `plateau_tolerance_kg` of each
    /// other. The recommendation in effect is the goal adjustment applied to
    /// the mean trend TDEE over those blocks, or `current_recommended` when
    /// the trend series has no point there.
    #[must_use]
    pub fn detect_plateau(
        &self,
        records: &[DailyRecord],
        trend: &[TrendPoint],
        as_of: NaiveDate,
        goal: &WeeklyGoal,
        kcal_per_kg: f64,
        current_recommended: f64,
    ) -> bool {
        let weeks = i64::from(self.config.plateau_min_weeks);
        if weeks == 0 {
            return false;
        }

        let all_flat = (0..weeks).all(|week| {
            let end = as_of - Duration::days(week * BLOCK_DAYS);
            let start = end - Duration::days(BLOCK_DAYS - 1);
            self.block_is_flat(records, start, end)
        });
        if !all_flat {
            return false;
        }

        let period_start = as_of - Duration::days(weeks * BLOCK_DAYS - 1);
        let in_period = |date: NaiveDate| date >= period_start && date <= as_of;

        let intakes: Vec<f64> = records
            .iter()
            .filter(|r| in_period(r.date) && r.has_intake())
            .map(|r| r.calories_in)
            .collect();
        let Some(avg_intake) = StatisticalAnalyzer::mean(&intakes) else {
            return false;
        };

        let trend_tdees: Vec<f64> = trend
            .iter()
            .filter(|p| in_period(p.date))
            .map(|p| p.tdee)
            .collect();
        let recommended = StatisticalAnalyzer::mean(&trend_tdees).map_or(current_recommended, |tdee| {
            tdee + goal.daily_adjustment(kcal_per_kg)
        });

        avg_intake < recommended
    }

    fn block_is_flat(&self, records: &[DailyRecord], start: NaiveDate, end: NaiveDate) -> bool {
        let weights: Vec<f64> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .filter_map(|r| r.weight_kg.filter(|w| w.is_finite() && *w > 0.0))
            .collect();
        match (weights.first(), weights.last()) {
            (Some(first), Some(last)) if weights.len() >= 2 => {
                (last - first).abs() <= self.config.plateau_tolerance_kg
            }
            _ => false,
        }
    }
}
