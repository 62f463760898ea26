// ABOUTME: Raw food, exercise, and weight log entries tagged with local dates
// ABOUTME: MealType, FoodLogEntry, ExerciseLogEntry, WeightLogEntry, and RawLogs definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Convert an instant into the user's local calendar date
fn local_date(timestamp: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    timestamp.with_timezone(&offset).date_naive()
}

/// Type of meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// A single logged food item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLogEntry {
    /// Local calendar date the food was eaten
    pub date: NaiveDate,
    /// Energy content (kcal)
    pub calories: f64,
    /// Meal the item belongs to
    #[serde(default)]
    pub meal_type: MealType,
    /// Food name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FoodLogEntry {
    /// Create an entry for a local date
    #[must_use]
    pub const fn new(date: NaiveDate, calories: f64, meal_type: MealType) -> Self {
        Self {
            date,
            calories,
            meal_type,
            name: None,
        }
    }

    /// Create an entry from a UTC timestamp and the user's UTC offset
    #[must_use]
    pub fn from_timestamp(
        timestamp: DateTime<Utc>,
        offset: FixedOffset,
        calories: f64,
        meal_type: MealType,
    ) -> Self {
        Self::new(local_date(timestamp, offset), calories, meal_type)
    }
}

/// A single logged exercise session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLogEntry {
    /// Local calendar date of the session
    pub date: NaiveDate,
    /// Energy burned (kcal)
    pub calories_burned: f64,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExerciseLogEntry {
    /// Create an entry for a local date
    #[must_use]
    pub const fn new(date: NaiveDate, calories_burned: f64) -> Self {
        Self {
            date,
            calories_burned,
            description: None,
        }
    }

    /// Create an entry from a UTC timestamp and the user's UTC offset
    #[must_use]
    pub fn from_timestamp(
        timestamp: DateTime<Utc>,
        offset: FixedOffset,
        calories_burned: f64,
    ) -> Self {
        Self::new(local_date(timestamp, offset), calories_burned)
    }
}

/// A single body weight measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightLogEntry {
    /// Local calendar date of the measurement
    pub date: NaiveDate,
    /// Measured weight (kg)
    pub weight_kg: f64,
}

impl WeightLogEntry {
    /// Create a measurement for a local date
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self { date, weight_kg }
    }

    /// Create a measurement from a UTC timestamp and the user's UTC offset
    #[must_use]
    pub fn from_timestamp(timestamp: DateTime<Utc>, offset: FixedOffset, weight_kg: f64) -> Self {
        Self::new(local_date(timestamp, offset), weight_kg)
    }
}

/// Raw log entries for an arbitrary date range
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawLogs {
    /// Food entries
    #[serde(default)]
    pub food: Vec<FoodLogEntry>,
    /// Exercise entries
    #[serde(default)]
    pub exercise: Vec<ExerciseLogEntry>,
    /// Weight measurements
    #[serde(default)]
    pub weight: Vec<WeightLogEntry>,
}
