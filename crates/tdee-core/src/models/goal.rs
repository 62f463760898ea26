// ABOUTME: Weekly weight-change goal passed through from the profile subsystem
// ABOUTME: Converts a target rate into the daily calorie adjustment for recommended intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};

/// Target weight-change rate used only for `recommended_intake`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklyGoal {
    /// Target change per week (kg); negative for loss
    #[serde(default)]
    pub target_weekly_change_kg: f64,
    /// Explicit daily calorie adjustment supplied by the profile subsystem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_adjustment_kcal: Option<f64>,
    /// Goal weight (kg), used to report goal achievement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
}

impl WeeklyGoal {
    /// Maintenance goal (no adjustment)
    #[must_use]
    pub const fn maintain() -> Self {
        Self {
            target_weekly_change_kg: 0.0,
            daily_adjustment_kcal: None,
            target_weight_kg: None,
        }
    }

    /// Goal expressed as a weekly rate (kg/week)
    #[must_use]
    pub const fn rate(target_weekly_change_kg: f64) -> Self {
        Self {
            target_weekly_change_kg,
            daily_adjustment_kcal: None,
            target_weight_kg: None,
        }
    }

    /// Daily calorie adjustment applied on top of TDEE
    ///
    /// An explicit adjustment wins; otherwise the weekly rate is converted
    /// with the given energy density.
    #[must_use]
    pub fn daily_adjustment(&self, kcal_per_kg: f64) -> f64 {
        self.daily_adjustment_kcal
            .unwrap_or(self.target_weekly_change_kg * kcal_per_kg / DAYS_PER_WEEK)
    }
}
