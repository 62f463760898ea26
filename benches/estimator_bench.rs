// ABOUTME: Criterion benchmarks for the adaptive TDEE pipeline
// ABOUTME: Measures single-user estimation, log aggregation, and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the estimation pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use adaptive_tdee::config::EstimatorConfig;
use adaptive_tdee::intelligence::{aggregate_daily_records, TdeeEstimator};
use adaptive_tdee::models::{
    ActivityLevel, DailyRecord, EstimationInput, FoodLogEntry, MealType, RawLogs, Sex,
    UserBiometrics, WeeklyGoal, WeightLogEntry,
};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const HISTORY_DAYS: i64 = 90;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

fn biometrics() -> UserBiometrics {
    UserBiometrics {
        sex: Sex::Male,
        age_years: 35,
        height_cm: 178.0,
        weight_kg: 82.0,
        activity_level: ActivityLevel::Moderate,
    }
}

#[allow(clippy::cast_precision_loss)]
fn input(seed: usize) -> EstimationInput {
    let end = as_of();
    let records = (0..HISTORY_DAYS)
        .map(|offset| {
            let date = end - Duration::days(HISTORY_DAYS - 1 - offset);
            let skipped = (offset as usize + seed) % 9 == 0;
            let intake = if skipped { 0.0 } else { 2300.0 + ((offset * 37) % 400) as f64 };
            let weight = 0.01f64.mul_add(-(offset as f64), 84.0);
            DailyRecord::new(date, intake, Some(weight))
        })
        .collect();

    EstimationInput {
        biometrics: biometrics(),
        records,
        trend_data: Vec::new(),
        goal: WeeklyGoal::rate(-0.25),
        as_of: end,
    }
}

fn raw_logs() -> RawLogs {
    let end = as_of();
    let mut logs = RawLogs::default();
    for offset in 0..HISTORY_DAYS {
        let date = end - Duration::days(offset);
        for meal in [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack] {
            logs.food.push(FoodLogEntry::new(date, 550.0, meal));
        }
        logs.weight.push(WeightLogEntry::new(date, 80.0));
    }
    logs
}

fn bench_single_estimate(c: &mut Criterion) {
    let estimator = TdeeEstimator::new(EstimatorConfig::default());
    let input = input(0);

    c.bench_function("estimate_single_user_90_days", |b| {
        b.iter(|| estimator.estimate(black_box(&input)));
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let logs = raw_logs();
    let start = as_of() - Duration::days(HISTORY_DAYS - 1);

    c.bench_function("aggregate_daily_records_90_days", |b| {
        b.iter(|| aggregate_daily_records(black_box(&logs), start, as_of()));
    });
}

fn bench_batch(c: &mut Criterion) {
    let estimator = TdeeEstimator::new(EstimatorConfig::default());
    let mut group = c.benchmark_group("estimate_batch");

    for size in [10_usize, 100, 1000] {
        let inputs: Vec<EstimationInput> = (0..size).map(input).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| estimator.estimate_batch(black_box(inputs)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_estimate, bench_aggregation, bench_batch);
criterion_main!(benches);
