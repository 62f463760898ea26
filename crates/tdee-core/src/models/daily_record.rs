// ABOUTME: One aggregated calendar day of intake, exercise, and weight
// ABOUTME: Produced by the daily log aggregator and consumed by every estimator stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated data for a single local calendar day
///
/// `calories_in == 0.0` means the day was not logged, not that nothing was eaten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    /// Local calendar date
    pub date: NaiveDate,
    /// Calories consumed (kcal)
    #[serde(default)]
    pub calories_in: f64,
    /// Calories burned through logged exercise (kcal)
    #[serde(default)]
    pub calories_out: f64,
    /// Measured body weight, if any (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl DailyRecord {
    /// Create an empty record for a day with no entries
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories_in: 0.0,
            calories_out: 0.0,
            weight_kg: None,
        }
    }

    /// Create a record with intake and an optional weight
    #[must_use]
    pub const fn new(date: NaiveDate, calories_in: f64, weight_kg: Option<f64>) -> Self {
        Self {
            date,
            calories_in,
            calories_out: 0.0,
            weight_kg,
        }
    }

    /// Whether food intake was logged on this day
    #[must_use]
    pub fn has_intake(&self) -> bool {
        self.calories_in > 0.0
    }

    /// Whether the day carries any intake or weight data
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.has_intake() || self.weight_kg.is_some()
    }
}
