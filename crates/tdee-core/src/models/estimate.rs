// ABOUTME: TDEE estimate value type, estimate source, trend direction, and trend points
// ABOUTME: One estimate per estimation run; trend points form the append-only sparkline series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which evidence the final TDEE is based on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    /// Population formula only
    Formula,
    /// Weighted blend of formula and observed estimates
    Hybrid,
    /// Observed energy balance only
    Observed,
}

/// Direction of the TDEE trend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Expenditure rising more than the threshold per week
    Increasing,
    /// Expenditure falling more than the threshold per week
    Decreasing,
    /// Change within the threshold
    #[default]
    Stable,
}

/// A single point of the TDEE time series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Local date the estimate was computed for
    pub date: NaiveDate,
    /// Estimated TDEE (kcal/day)
    pub tdee: f64,
}

impl TrendPoint {
    /// Create a trend point
    #[must_use]
    pub const fn new(date: NaiveDate, tdee: f64) -> Self {
        Self { date, tdee }
    }
}

/// Result of one estimation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TdeeEstimate {
    /// Local date the estimate is for
    pub date: NaiveDate,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Final TDEE (kcal/day)
    pub tdee: f64,
    /// TDEE adjusted by the weekly goal (kcal/day)
    pub recommended_intake: f64,
    /// Confidence in the estimate (0-1)
    pub confidence: f64,
    /// Evidence the estimate is based on
    pub estimate_source: EstimateSource,
    /// Direction of the TDEE trend
    pub trend: TrendDirection,
    /// Regression-based weekly weight change (kg/week)
    pub weekly_weight_change_kg: f64,
    /// Formula TDEE for the same biometrics (kcal/day)
    pub formula_tdee: f64,
    /// Observed TDEE when the observed estimator succeeded (kcal/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_tdee: Option<f64>,
    /// Days with both intake and a known weight in the observed window
    pub qualifying_days: u32,
}
