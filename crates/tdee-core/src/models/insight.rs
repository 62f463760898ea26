// ABOUTME: Typed, human-readable insights derived from each estimation run
// ABOUTME: Insight severity ordering and the conditions an insight can report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Severity class of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Needs attention now
    Alert,
    /// Something may be off
    Warning,
    /// Positive progress
    Success,
    /// General guidance
    Info,
}

impl InsightType {
    /// Severity rank, lower sorts first
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Alert => 0,
            Self::Warning => 1,
            Self::Success => 2,
            Self::Info => 3,
        }
    }
}

/// Condition detected by the pipeline that an insight reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightCondition {
    /// Biometrics invalid; profile must be completed
    IncompleteProfile,
    /// Weekly loss faster than the safe threshold
    RapidWeightLoss,
    /// Logged intake too low to explain the weight trend
    PossibleUnderReporting,
    /// Observed estimate rejected by the sanity band
    ImplausibleEstimate,
    /// Sustained observed expenditure below the formula baseline
    MetabolicAdaptation,
    /// Sustained flat weight despite intake at or below target
    Plateau,
    /// Goal weight reached
    GoalAchieved,
    /// Weight changing at the goal rate
    OnTrack,
    /// Estimate fully based on the user's own data
    PersonalizedEstimate,
    /// Estimate based on the formula only
    FormulaOnly,
    /// Estimate blends formula and observed data
    HybridEstimate,
    /// Few days logged this week
    LowLoggingConsistency,
}

impl InsightCondition {
    /// Severity class this condition is reported with
    #[must_use]
    pub const fn insight_type(self) -> InsightType {
        match self {
            Self::IncompleteProfile | Self::RapidWeightLoss | Self::PossibleUnderReporting => {
                InsightType::Alert
            }
            Self::ImplausibleEstimate | Self::MetabolicAdaptation | Self::Plateau => {
                InsightType::Warning
            }
            Self::GoalAchieved | Self::OnTrack | Self::PersonalizedEstimate => {
                InsightType::Success
            }
            Self::FormulaOnly | Self::HybridEstimate | Self::LowLoggingConsistency => {
                InsightType::Info
            }
        }
    }
}

/// A single insight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    /// Severity class
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Condition reported
    pub condition: InsightCondition,
    /// Short headline
    pub title: String,
    /// Explanation and suggested action
    pub message: String,
}

impl Insight {
    /// Create an insight for a condition, typed by the condition's severity
    #[must_use]
    pub fn new(
        condition: InsightCondition,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            insight_type: condition.insight_type(),
            condition,
            title: title.into(),
            message: message.into(),
        }
    }
}
