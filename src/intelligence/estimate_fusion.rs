// ABOUTME: Combines formula and observed TDEE into a single estimate with confidence
// ABOUTME: Chooses formula, hybrid, or observed source and derives recommended intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Estimate fusion
//!
//! The formula is the prior; the observed estimate takes over as the window
//! fills and logging stays consistent. Confidence rewards consistency over
//! volume: one long gap costs more than several scattered missed days.
//! Handing over from the formula never lowers confidence: a blended or
//! observed estimate reports at least the formula-only confidence.

use super::data_quality::DataQualityLevel;
use super::formula_estimator::FormulaEstimate;
use super::observed_estimator::ObservedEstimate;
use crate::config::{FusionConfig, ObservedConfig};
use serde::{Deserialize, Serialize};
use tdee_core::constants::data_quality::WEEK_DAYS;
use tdee_core::models::{EstimateSource, WeeklyGoal};

/// Fused estimate before trend analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FusionOutcome {
    /// Which estimator dominated
    pub source: EstimateSource,
    /// Fused TDEE (kcal/day)
    pub tdee: f64,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// `tdee` plus the goal's daily adjustment
    pub recommended_intake: f64,
    /// Gap penalty factor in `(0, 1]`, `0.0` for formula-only estimates
    pub data_quality_factor: f64,
}

/// Consistency factor `1 / (1 + sum(r^2) / span_days)`
#[must_use]
pub fn data_quality_factor(unlogged_runs: &[u32], span_days: u32) -> f64 {
    if span_days == 0 {
        return 0.0;
    }
    let penalty: f64 = unlogged_runs
        .iter()
        .map(|run| f64::from(*run) * f64::from(*run))
        .sum();
    1.0 / (1.0 + penalty / f64::from(span_days))
}

/// Source selection and blending rules
#[derive(Debug, Clone, Copy)]
pub struct EstimateFusion<'a> {
    fusion: &'a FusionConfig,
    observed: &'a ObservedConfig,
}

impl<'a> EstimateFusion<'a> {
    /// Create a fusion step over its thresholds
    #[must_use]
    pub const fn new(fusion: &'a FusionConfig, observed: &'a ObservedConfig) -> Self {
        Self { fusion, observed }
    }

    /// Fuse a formula estimate with an optional observed estimate
    #[must_use]
    pub fn fuse(
        &self,
        formula: &FormulaEstimate,
        observed: Option<&ObservedEstimate>,
        quality: DataQualityLevel,
        days_logged_this_week: u32,
        goal: &WeeklyGoal,
    ) -> FusionOutcome {
        let logged_ratio = f64::from(days_logged_this_week.min(WEEK_DAYS)) / f64::from(WEEK_DAYS);
        let formula_confidence = self.fusion.formula_confidence_cap * logged_ratio;

        let (source, tdee, confidence, dqf) = observed.map_or(
            (EstimateSource::Formula, formula.tdee, formula_confidence, 0.0),
            |obs| {
                let dqf = data_quality_factor(&obs.unlogged_runs, obs.span_days);
                let window_ratio = self.window_ratio(obs.window_days);
                // Never below what the formula alone would report for the same logs
                let confidence = (window_ratio * dqf).max(formula_confidence);

                if obs.window_days < self.fusion.observed_min_window_days
                    || quality != DataQualityLevel::High
                {
                    let blended =
                        window_ratio.mul_add(obs.observed_tdee - formula.tdee, formula.tdee);
                    (EstimateSource::Hybrid, blended, confidence, dqf)
                } else {
                    (EstimateSource::Observed, obs.observed_tdee, confidence, dqf)
                }
            },
        );

        let lower = self.observed.sanity_lower_ratio * formula.tdee;
        let upper = self.observed.sanity_upper_ratio * formula.tdee;
        let tdee = if lower <= upper { tdee.clamp(lower, upper) } else { tdee };
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };

        FusionOutcome {
            source,
            tdee,
            confidence,
            recommended_intake: tdee + goal.daily_adjustment(self.observed.kcal_per_kg),
            data_quality_factor: dqf,
        }
    }

    /// `min(1, window_days / full_weight_window_days)`
    fn window_ratio(&self, window_days: u32) -> f64 {
        let full = f64::from(self.fusion.full_weight_window_days.max(1));
        (f64::from(window_days) / full).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn formula() -> FormulaEstimate {
        FormulaEstimate {
            bmr: 1800.0,
            activity_multiplier: 1.5,
            tdee: 2700.0,
        }
    }

    fn observed(window_days: u32, runs: Vec<u32>) -> ObservedEstimate {
        let first_day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ObservedEstimate {
            observed_tdee: 2500.0,
            avg_intake: 2500.0,
            total_intake: 2500.0 * f64::from(window_days),
            window_days,
            span_days: 28,
            weight_delta_kg: 0.0,
            unlogged_runs: runs,
            first_day,
            last_day: first_day + Duration::days(27),
        }
    }

    #[test]
    fn test_data_quality_factor_prefers_scattered_misses() {
        let scattered = data_quality_factor(&[1, 1, 1, 1], 28);
        let clustered = data_quality_factor(&[4], 28);
        assert!(scattered > clustered);
        assert!((data_quality_factor(&[], 28) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_formula_fallback_confidence_scales_with_logging() {
        let fusion = FusionConfig::default();
        let obs = ObservedConfig::default();
        let outcome = EstimateFusion::new(&fusion, &obs).fuse(
            &formula(),
            None,
            DataQualityLevel::High,
            7,
            &WeeklyGoal::maintain(),
        );
        assert_eq!(outcome.source, EstimateSource::Formula);
        assert!((outcome.tdee - 2700.0).abs() < f64::EPSILON);
        assert!((outcome.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_short_window_blends() {
        let fusion = FusionConfig::default();
        let obs = ObservedConfig::default();
        let estimate = observed(14, vec![]);
        let outcome = EstimateFusion::new(&fusion, &obs).fuse(
            &formula(),
            Some(&estimate),
            DataQualityLevel::High,
            7,
            &WeeklyGoal::maintain(),
        );
        assert_eq!(outcome.source, EstimateSource::Hybrid);
        // Half weight on each side
        assert!((outcome.tdee - 2600.0).abs() < 1e-9);
        assert!((outcome.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_handover_keeps_formula_confidence_floor() {
        let fusion = FusionConfig::default();
        let obs = ObservedConfig::default();
        let estimate = observed(7, vec![]);
        let outcome = EstimateFusion::new(&fusion, &obs).fuse(
            &formula(),
            Some(&estimate),
            DataQualityLevel::High,
            7,
            &WeeklyGoal::maintain(),
        );
        assert_eq!(outcome.source, EstimateSource::Hybrid);
        // 7 / 28 = 0.25 would sit below the 0.3 formula-only value
        assert!((outcome.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_full_window_with_high_quality_is_observed() {
        let fusion = FusionConfig::default();
        let obs = ObservedConfig::default();
        let estimate = observed(28, vec![]);
        let outcome = EstimateFusion::new(&fusion, &obs).fuse(
            &formula(),
            Some(&estimate),
            DataQualityLevel::High,
            7,
            &WeeklyGoal::rate(-0.5),
        );
        assert_eq!(outcome.source, EstimateSource::Observed);
        assert!((outcome.tdee - 2500.0).abs() < f64::EPSILON);
        assert!((outcome.confidence - 1.0).abs() < 1e-9);
        assert!((outcome.recommended_intake - 1950.0).abs() < 1e-9);
    }
}
