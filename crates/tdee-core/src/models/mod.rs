// ABOUTME: Core data models for the adaptive TDEE estimator
// ABOUTME: Re-exports biometrics, log entries, daily records, estimates, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The in-process data contract of the estimator. Inputs (`UserBiometrics`,
//! raw log entries, `WeeklyGoal`) are owned by external collaborators and are
//! read-only here; outputs (`TdeeEstimate`, `Insight`, `EstimationResult`)
//! are plain values the caller may persist as opaque structured data.
//!
//! ## Design Principles
//!
//! - **Serializable**: every model round-trips through JSON
//! - **Value types**: no model holds references into caller state
//! - **Local dates**: every day is a user-local `NaiveDate`, never a UTC day

mod biometrics;
mod daily_record;
mod estimate;
mod goal;
mod insight;
mod logs;
mod result;

pub use biometrics::{ActivityLevel, Sex, UserBiometrics};
pub use daily_record::DailyRecord;
pub use estimate::{EstimateSource, TdeeEstimate, TrendDirection, TrendPoint};
pub use goal::WeeklyGoal;
pub use insight::{Insight, InsightCondition, InsightType};
pub use logs::{ExerciseLogEntry, FoodLogEntry, MealType, RawLogs, WeightLogEntry};
pub use result::{EstimationInput, EstimationResult};
