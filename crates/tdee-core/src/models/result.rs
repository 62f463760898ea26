// ABOUTME: Estimation pipeline input snapshot and output record
// ABOUTME: EstimationInput bundles explicit inputs; EstimationResult is the single exposed output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DailyRecord, Insight, TdeeEstimate, TrendPoint, UserBiometrics, WeeklyGoal};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Explicit snapshot of everything one estimation run reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimationInput {
    /// Profile biometrics
    pub biometrics: UserBiometrics,
    /// Daily records, one per day (order not required)
    #[serde(default)]
    pub records: Vec<DailyRecord>,
    /// Previously persisted trend series
    #[serde(default)]
    pub trend_data: Vec<TrendPoint>,
    /// Weekly goal used for recommended intake
    #[serde(default)]
    pub goal: WeeklyGoal,
    /// Local date the estimate is computed for
    pub as_of: NaiveDate,
}

/// Output of one estimation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimationResult {
    /// Estimate, or `None` when biometrics are invalid
    pub estimate: Option<TdeeEstimate>,
    /// Ascending TDEE series for charting
    pub trend_data: Vec<TrendPoint>,
    /// Insights, highest severity first
    pub insights: Vec<Insight>,
    /// Days with logged intake in the trailing seven days
    pub days_logged_this_week: u32,
    /// Days with intake or weight logged, all time
    pub total_days_with_data: u32,
}
