// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and synthetic biometrics and daily record series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `adaptive_tdee`

use adaptive_tdee::models::{
    ActivityLevel, DailyRecord, EstimationInput, Sex, UserBiometrics, WeeklyGoal,
};
use chrono::{Duration, NaiveDate};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed evaluation date shared by fixtures
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
}

/// Day `offset` days before `as_of`
pub fn days_before(offset: i64) -> NaiveDate {
    as_of() - Duration::days(offset)
}

/// 30-year-old moderately active man, 180 cm, 80 kg
pub fn male_biometrics() -> UserBiometrics {
    UserBiometrics {
        sex: Sex::Male,
        age_years: 30,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Moderate,
    }
}

/// `days` consecutive days ending at `as_of` with constant intake and a linear weight path
pub fn linear_series(days: i64, intake: f64, start_weight: f64, end_weight: f64) -> Vec<DailyRecord> {
    (0..days)
        .map(|i| {
            let date = days_before(days - 1 - i);
            let fraction = if days > 1 { i as f64 / (days - 1) as f64 } else { 0.0 };
            let weight = fraction.mul_add(end_weight - start_weight, start_weight);
            DailyRecord::new(date, intake, Some(weight))
        })
        .collect()
}

/// Wrap records in an input with default goal and empty trend
pub fn input_with(biometrics: UserBiometrics, records: Vec<DailyRecord>) -> EstimationInput {
    EstimationInput {
        biometrics,
        records,
        trend_data: Vec::new(),
        goal: WeeklyGoal::maintain(),
        as_of: as_of(),
    }
}
