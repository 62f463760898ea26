// ABOUTME: Reduces raw food, exercise, and weight entries into one record per local day
// ABOUTME: Emits empty records for unlogged days so gaps stay visible downstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily log aggregation
//!
//! Entries are bucketed by the local calendar date they carry. Food calories
//! are summed, exercise calories are summed into `calories_out`, and several
//! weigh-ins on the same day are averaged. Entries with negative or non-finite
//! values are skipped. Absence of logging is a valid state and never an error.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tdee_core::models::{DailyRecord, RawLogs};
use tracing::debug;

/// Running weight sum for averaging same-day measurements
#[derive(Default, Clone, Copy)]
struct WeightAccumulator {
    sum: f64,
    count: u32,
}

/// Aggregate raw logs into one `DailyRecord` per day of `[start, end]`
///
/// Returns an empty vector when `start > end`.
#[must_use]
pub fn aggregate_daily_records(logs: &RawLogs, start: NaiveDate, end: NaiveDate) -> Vec<DailyRecord> {
    if start > end {
        return Vec::new();
    }

    let in_range = |date: NaiveDate| date >= start && date <= end;

    let mut intake: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in &logs.food {
        if !in_range(entry.date) {
            continue;
        }
        if !entry.calories.is_finite() || entry.calories < 0.0 {
            debug!(date = %entry.date, calories = entry.calories, "Skipping invalid food entry");
            continue;
        }
        *intake.entry(entry.date).or_default() += entry.calories;
    }

    let mut burned: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in &logs.exercise {
        if !in_range(entry.date) {
            continue;
        }
        if !entry.calories_burned.is_finite() || entry.calories_burned < 0.0 {
            debug!(date = %entry.date, calories = entry.calories_burned, "Skipping invalid exercise entry");
            continue;
        }
        *burned.entry(entry.date).or_default() += entry.calories_burned;
    }

    let mut weights: BTreeMap<NaiveDate, WeightAccumulator> = BTreeMap::new();
    for entry in &logs.weight {
        if !in_range(entry.date) {
            continue;
        }
        if !entry.weight_kg.is_finite() || entry.weight_kg <= 0.0 {
            debug!(date = %entry.date, weight_kg = entry.weight_kg, "Skipping invalid weight entry");
            continue;
        }
        let acc = weights.entry(entry.date).or_default();
        acc.sum += entry.weight_kg;
        acc.count += 1;
    }

    let days = (end - start).num_days() + 1;
    (0..days)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DailyRecord {
                date,
                calories_in: intake.get(&date).copied().unwrap_or(0.0),
                calories_out: burned.get(&date).copied().unwrap_or(0.0),
                weight_kg: weights
                    .get(&date)
                    .map(|acc| acc.sum / f64::from(acc.count)),
            }
        })
        .collect()
}

/// Sort records ascending and keep one record per date (the last one given)
///
/// Records dated after `as_of` are dropped.
#[must_use]
pub fn normalize_records(records: &[DailyRecord], as_of: NaiveDate) -> Vec<DailyRecord> {
    let by_date: BTreeMap<NaiveDate, DailyRecord> = records
        .iter()
        .filter(|record| record.date <= as_of)
        .map(|record| (record.date, *record))
        .collect();
    by_date.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdee_core::models::{ExerciseLogEntry, FoodLogEntry, MealType, WeightLogEntry};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_one_record_per_day_including_gaps() {
        let logs = RawLogs {
            food: vec![
                FoodLogEntry::new(date(2024, 1, 1), 600.0, MealType::Breakfast),
                FoodLogEntry::new(date(2024, 1, 1), 900.0, MealType::Dinner),
                FoodLogEntry::new(date(2024, 1, 3), 2000.0, MealType::Other),
            ],
            exercise: vec![ExerciseLogEntry::new(date(2024, 1, 3), 350.0)],
            weight: vec![
                WeightLogEntry::new(date(2024, 1, 1), 80.0),
                WeightLogEntry::new(date(2024, 1, 1), 80.4),
            ],
        };

        let records = aggregate_daily_records(&logs, date(2024, 1, 1), date(2024, 1, 4));

        assert_eq!(records.len(), 4);
        assert!((records[0].calories_in - 1500.0).abs() < f64::EPSILON);
        assert!((records[0].weight_kg.unwrap() - 80.2).abs() < 1e-9);
        assert_eq!(records[1], DailyRecord::empty(date(2024, 1, 2)));
        assert!((records[2].calories_out - 350.0).abs() < f64::EPSILON);
        assert!(records[3].weight_kg.is_none());
    }

    #[test]
    fn test_entries_outside_range_and_invalid_values_are_skipped() {
        let logs = RawLogs {
            food: vec![
                FoodLogEntry::new(date(2023, 12, 31), 2500.0, MealType::Other),
                FoodLogEntry::new(date(2024, 1, 1), -100.0, MealType::Other),
                FoodLogEntry::new(date(2024, 1, 1), f64::NAN, MealType::Other),
            ],
            exercise: vec![],
            weight: vec![WeightLogEntry::new(date(2024, 1, 1), 0.0)],
        };

        let records = aggregate_daily_records(&logs, date(2024, 1, 1), date(2024, 1, 1));

        assert_eq!(records, vec![DailyRecord::empty(date(2024, 1, 1))]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let records = aggregate_daily_records(&RawLogs::default(), date(2024, 1, 2), date(2024, 1, 1));
        assert!(records.is_empty());
    }

    #[test]
    fn test_normalize_dedups_sorts_and_drops_future() {
        let records = vec![
            DailyRecord::new(date(2024, 1, 2), 2000.0, None),
            DailyRecord::new(date(2024, 1, 1), 1800.0, None),
            DailyRecord::new(date(2024, 1, 2), 2100.0, Some(80.0)),
            DailyRecord::new(date(2024, 1, 5), 2200.0, None),
        ];

        let normalized = normalize_records(&records, date(2024, 1, 3));

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].date, date(2024, 1, 1));
        assert!((normalized[1].calories_in - 2100.0).abs() < f64::EPSILON);
    }
}
