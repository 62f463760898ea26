// ABOUTME: User biometrics consumed by the formula estimator
// ABOUTME: Sex, age, height, weight, and activity level definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl Sex {
    /// Parse sex from string, accepting common abbreviations
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Habitual activity level used to select the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily training or physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse activity level from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(Self::Sedentary),
            "light" | "lightly_active" => Some(Self::Light),
            "moderate" | "moderately_active" => Some(Self::Moderate),
            "active" => Some(Self::Active),
            "very_active" | "veryactive" | "extra_active" => Some(Self::VeryActive),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        };
        f.write_str(name)
    }
}

/// Biometrics owned by the profile subsystem
///
/// Missing height or weight is represented by a non-positive value and is
/// rejected by the formula estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserBiometrics {
    /// Biological sex
    pub sex: Sex,
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Profile body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
}
