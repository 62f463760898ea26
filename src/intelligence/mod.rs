// ABOUTME: Adaptive TDEE estimation engine combining formula and energy-balance estimates
// ABOUTME: Aggregation, estimation, fusion, trend, and insight stages of the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Stages of the estimation pipeline, from raw logs to a fused TDEE estimate
//! with trend classification and insights. [`TdeeEstimator`] wires them together.

/// Raw log to daily record aggregation
pub mod daily_log_aggregator;
/// Logging consistency counters
pub mod data_quality;
/// Formula and observed estimate fusion
pub mod estimate_fusion;
/// End-to-end pipeline
pub mod estimator;
/// Mifflin-St Jeor baseline
pub mod formula_estimator;
/// Insight mapping
pub mod insight_generator;
/// Energy-balance estimate
pub mod observed_estimator;
/// Regression helpers
pub mod statistical_analysis;
/// Trend series maintenance and detection
pub mod trend_analyzer;
/// Interpolated weight series
pub mod weight_series;

pub use daily_log_aggregator::{aggregate_daily_records, normalize_records};
pub use data_quality::{DataQualityLevel, DataQualitySummary, DataQualityTracker};
pub use estimate_fusion::{data_quality_factor, EstimateFusion, FusionOutcome};
pub use estimator::TdeeEstimator;
pub use formula_estimator::{
    activity_multiplier, calculate_mifflin_st_jeor, validate_biometrics, FormulaEstimate,
    FormulaEstimator,
};
pub use insight_generator::{InsightContext, InsightGenerator};
pub use observed_estimator::{ObservedEstimate, ObservedEstimator};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trend_analyzer::{normalize_trend, upsert_trend_point, TrendAnalyzer};
pub use weight_series::WeightSeries;
