// ABOUTME: Logging consistency counters feeding confidence weighting
// ABOUTME: Days logged this week, lifetime days with data, and the data quality level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DataQualityConfig;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tdee_core::constants::data_quality::WEEK_DAYS;
use tdee_core::models::DailyRecord;

/// Coarse classification of recent logging consistency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DataQualityLevel {
    /// Few days logged this week
    Low,
    /// Some days logged this week
    Medium,
    /// Most days logged this week
    High,
}

/// Read-only aggregation over daily records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataQualitySummary {
    /// Days with intake in `[as_of - 6, as_of]`
    pub days_logged_this_week: u32,
    /// Days up to `as_of` with intake or weight
    pub total_days_with_data: u32,
    /// Level derived from `days_logged_this_week`
    pub level: DataQualityLevel,
}

/// Counts logged days; holds no state between calls
pub struct DataQualityTracker<'a> {
    config: &'a DataQualityConfig,
}

impl<'a> DataQualityTracker<'a> {
    /// Create a tracker over quality thresholds
    #[must_use]
    pub const fn new(config: &'a DataQualityConfig) -> Self {
        Self { config }
    }

    /// Summarize logging consistency as of a date
    #[must_use]
    pub fn summarize(&self, records: &[DailyRecord], as_of: NaiveDate) -> DataQualitySummary {
        let days_logged_this_week = days_logged_this_week(records, as_of);
        DataQualitySummary {
            days_logged_this_week,
            total_days_with_data: total_days_with_data(records, as_of),
            level: self.level(days_logged_this_week),
        }
    }

    /// Classify a weekly logged-day count
    #[must_use]
    pub const fn level(&self, days_logged_this_week: u32) -> DataQualityLevel {
        if days_logged_this_week >= self.config.high_quality_days {
            DataQualityLevel::High
        } else if days_logged_this_week >= self.config.medium_quality_days {
            DataQualityLevel::Medium
        } else {
            DataQualityLevel::Low
        }
    }
}

/// Days with `calories_in > 0` in the trailing seven calendar days ending at `as_of`
///
/// Records are expected to hold at most one entry per date.
#[must_use]
pub fn days_logged_this_week(records: &[DailyRecord], as_of: NaiveDate) -> u32 {
    let week_start = as_of - Duration::days(i64::from(WEEK_DAYS) - 1);
    let count = records
        .iter()
        .filter(|r| r.date >= week_start && r.date <= as_of && r.has_intake())
        .count();
    u32::try_from(count).unwrap_or(WEEK_DAYS).min(WEEK_DAYS)
}

/// Days up to `as_of` with either intake or a weight measurement
#[must_use]
pub fn total_days_with_data(records: &[DailyRecord], as_of: NaiveDate) -> u32 {
    let count = records
        .iter()
        .filter(|r| r.date <= as_of && r.has_data())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn test_counts_trailing_week_only() {
        let records: Vec<DailyRecord> = (1..=14)
            .map(|d| DailyRecord::new(date(d), if d % 2 == 0 { 2000.0 } else { 0.0 }, None))
            .collect();

        // Feb 8-14: even days 8, 10, 12, 14
        assert_eq!(days_logged_this_week(&records, date(14)), 4);
        assert_eq!(total_days_with_data(&records, date(14)), 7);
    }

    #[test]
    fn test_weight_only_days_count_as_data_not_logging() {
        let records = vec![
            DailyRecord::new(date(1), 0.0, Some(80.0)),
            DailyRecord::new(date(2), 1800.0, None),
            DailyRecord::empty(date(3)),
        ];
        assert_eq!(days_logged_this_week(&records, date(3)), 1);
        assert_eq!(total_days_with_data(&records, date(3)), 2);
    }

    #[test]
    fn test_quality_levels() {
        let config = DataQualityConfig::default();
        let tracker = DataQualityTracker::new(&config);
        assert_eq!(tracker.level(7), DataQualityLevel::High);
        assert_eq!(tracker.level(5), DataQualityLevel::High);
        assert_eq!(tracker.level(3), DataQualityLevel::Medium);
        assert_eq!(tracker.level(2), DataQualityLevel::Low);
    }
}
