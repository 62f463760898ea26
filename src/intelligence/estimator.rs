// ABOUTME: End-to-end adaptive TDEE pipeline from daily records to estimate and insights
// ABOUTME: Orchestrates formula, observed, fusion, trend, and insight steps; batches with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive TDEE Estimator
//!
//! A pure function over explicit inputs. The same input always yields the
//! same result, and failures inside the pipeline degrade to a lower-confidence
//! estimate instead of an error.

use super::daily_log_aggregator::{aggregate_daily_records, normalize_records};
use super::data_quality::{DataQualitySummary, DataQualityTracker};
use super::estimate_fusion::EstimateFusion;
use super::formula_estimator::FormulaEstimator;
use super::insight_generator::{InsightContext, InsightGenerator};
use super::observed_estimator::ObservedEstimator;
use super::statistical_analysis::StatisticalAnalyzer;
use super::trend_analyzer::{normalize_trend, upsert_trend_point, TrendAnalyzer};
use super::weight_series::WeightSeries;
use crate::config::EstimatorConfig;
use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use tdee_core::models::{
    DailyRecord, EstimationInput, EstimationResult, Insight, RawLogs, TdeeEstimate, TrendPoint,
    UserBiometrics, WeeklyGoal,
};
use tracing::{debug, info};

/// Adaptive TDEE estimator
#[derive(Debug, Clone, Default)]
pub struct TdeeEstimator {
    config: EstimatorConfig,
}

impl TdeeEstimator {
    /// Create an estimator with explicit configuration
    #[must_use]
    pub const fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Create an estimator from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(EstimatorConfig::global().clone())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Run the full pipeline for one user
    #[must_use]
    pub fn estimate(&self, input: &EstimationInput) -> EstimationResult {
        let as_of = input.as_of;
        let records = normalize_records(&input.records, as_of);
        let quality = DataQualityTracker::new(&self.config.data_quality).summarize(&records, as_of);
        let insight_generator = InsightGenerator::new(&self.config.insights);

        let formula = match FormulaEstimator::new(&self.config.formula).estimate(&input.biometrics) {
            Ok(formula) => formula,
            Err(e) => {
                debug!(error = %e, code = e.code(), "Biometrics invalid, no estimate produced");
                let insights = insight_generator.generate(&InsightContext {
                    estimate: None,
                    observed_error: Some(&e),
                    current_weight_kg: None,
                    weight_trend_available: false,
                    avg_logged_intake: None,
                    metabolic_adaptation: false,
                    plateau: false,
                    goal: &input.goal,
                    days_logged_this_week: quality.days_logged_this_week,
                });
                return Self::result(None, normalize_trend(&input.trend_data), insights, quality);
            }
        };

        let weights = WeightSeries::from_records(&records);
        let observed_estimator = ObservedEstimator::new(&self.config.observed);
        let observed = observed_estimator.estimate(&records, &weights, as_of, formula.tdee);
        if let Err(e) = &observed {
            debug!(error = %e, code = e.code(), "Observed estimate unavailable, falling back to formula");
        }

        let fused = EstimateFusion::new(&self.config.fusion, &self.config.observed).fuse(
            &formula,
            observed.as_ref().ok(),
            quality.level,
            quality.days_logged_this_week,
            &input.goal,
        );

        let analyzer = TrendAnalyzer::new(&self.config.trend);
        let trend_data = upsert_trend_point(&input.trend_data, TrendPoint::new(as_of, fused.tdee));
        let weekly_weight_change_kg = analyzer.weekly_weight_change(&weights, as_of);
        let metabolic_adaptation =
            analyzer.detect_metabolic_adaptation(formula.tdee, observed.as_ref().ok());
        let plateau = analyzer.detect_plateau(
            &records,
            &trend_data,
            as_of,
            &input.goal,
            self.config.observed.kcal_per_kg,
            fused.recommended_intake,
        );

        let estimate = TdeeEstimate {
            date: as_of,
            bmr: formula.bmr,
            activity_multiplier: formula.activity_multiplier,
            tdee: fused.tdee,
            recommended_intake: fused.recommended_intake,
            confidence: fused.confidence,
            estimate_source: fused.source,
            trend: analyzer.classify(&trend_data, fused.tdee),
            weekly_weight_change_kg,
            formula_tdee: formula.tdee,
            observed_tdee: observed.as_ref().ok().map(|o| o.observed_tdee),
            qualifying_days: observed.as_ref().map_or(0, |o| o.window_days),
        };

        let avg_logged_intake = observed.as_ref().map_or_else(
            |_| self.mean_window_intake(&records, as_of),
            |o| Some(o.avg_intake),
        );
        let weight_trend_start =
            as_of - Duration::days(i64::from(self.config.trend.weight_trend_days.max(1)) - 1);

        let insights = insight_generator.generate(&InsightContext {
            estimate: Some(&estimate),
            observed_error: observed.as_ref().err(),
            current_weight_kg: Some(weights.latest().map_or(input.biometrics.weight_kg, |(_, w)| w)),
            weight_trend_available: weights.samples(weight_trend_start, as_of).len() >= 2,
            avg_logged_intake,
            metabolic_adaptation,
            plateau,
            goal: &input.goal,
            days_logged_this_week: quality.days_logged_this_week,
        });

        info!(
            as_of = %as_of,
            source = ?estimate.estimate_source,
            tdee = estimate.tdee,
            confidence = estimate.confidence,
            insights = insights.len(),
            "TDEE estimate computed"
        );

        Self::result(Some(estimate), trend_data, insights, quality)
    }

    /// Aggregate raw logs over `[start, as_of]` and run the pipeline
    #[must_use]
    pub fn estimate_from_logs(
        &self,
        biometrics: &UserBiometrics,
        logs: &RawLogs,
        start: NaiveDate,
        as_of: NaiveDate,
        trend_data: &[TrendPoint],
        goal: &WeeklyGoal,
    ) -> EstimationResult {
        let input = EstimationInput {
            biometrics: *biometrics,
            records: aggregate_daily_records(logs, start, as_of),
            trend_data: trend_data.to_vec(),
            goal: *goal,
            as_of,
        };
        self.estimate(&input)
    }

    /// Estimate many independent users in parallel, preserving input order
    #[must_use]
    pub fn estimate_batch(&self, inputs: &[EstimationInput]) -> Vec<EstimationResult> {
        debug!(count = inputs.len(), "Running batch TDEE estimation");
        inputs.par_iter().map(|input| self.estimate(input)).collect()
    }

    fn mean_window_intake(&self, records: &[DailyRecord], as_of: NaiveDate) -> Option<f64> {
        let start = ObservedEstimator::new(&self.config.observed).window_start(as_of);
        let intakes: Vec<f64> = records
            .iter()
            .filter(|r| r.date >= start && r.date <= as_of && r.has_intake())
            .map(|r| r.calories_in)
            .collect();
        StatisticalAnalyzer::mean(&intakes)
    }

    fn result(
        estimate: Option<TdeeEstimate>,
        trend_data: Vec<TrendPoint>,
        insights: Vec<Insight>,
        quality: DataQualitySummary,
    ) -> EstimationResult {
        EstimationResult {
            estimate,
            trend_data,
            insights,
            days_logged_this_week: quality.days_logged_this_week,
            total_days_with_data: quality.total_days_with_data,
        }
    }
}
