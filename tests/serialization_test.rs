// ABOUTME: Tests the JSON document shapes consumed and produced by the estimator
// ABOUTME: Round-trips an input file from disk and checks the result's wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use adaptive_tdee::config::EstimatorConfig;
use adaptive_tdee::errors::{EstimationError, InsufficiencyReason};
use adaptive_tdee::intelligence::TdeeEstimator;
use adaptive_tdee::models::{ActivityLevel, EstimationInput, Sex};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;

const INPUT_DOCUMENT: &str = r#"{
    "biometrics": {
        "sex": "female",
        "age_years": 34,
        "height_cm": 165.0,
        "weight_kg": 62.0,
        "activity_level": "very_active"
    },
    "records": [
        {"date": "2024-03-29", "calories_in": 2100.0, "weight_kg": 62.1},
        {"date": "2024-03-30", "calories_in": 0.0},
        {"date": "2024-03-31", "calories_in": 1950.0, "calories_out": 400.0, "weight_kg": 61.9}
    ],
    "goal": {"target_weekly_change_kg": -0.25},
    "as_of": "2024-03-31"
}"#;

#[test]
fn test_input_document_from_file() {
    common::init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INPUT_DOCUMENT.as_bytes()).unwrap();

    let raw = fs::read_to_string(file.path()).unwrap();
    let input: EstimationInput = serde_json::from_str(&raw).unwrap();

    assert_eq!(input.biometrics.sex, Sex::Female);
    assert_eq!(input.biometrics.activity_level, ActivityLevel::VeryActive);
    assert_eq!(input.records.len(), 3);
    assert!(input.records[1].weight_kg.is_none());
    assert!(input.trend_data.is_empty());

    let result = TdeeEstimator::new(EstimatorConfig::default()).estimate(&input);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["estimate"]["estimate_source"], json!("formula"));
    assert_eq!(value["estimate"]["trend"], json!("stable"));
    assert_eq!(value["days_logged_this_week"], json!(2));
    assert_eq!(value["trend_data"][0]["date"], json!("2024-03-31"));
    assert!(value["estimate"].get("observed_tdee").is_none());

    let insight_types: Vec<&Value> = value["insights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| &i["type"])
        .collect();
    assert!(insight_types.contains(&&json!("info")));
}

#[test]
fn test_invalid_profile_serializes_null_estimate() {
    let mut input: EstimationInput = serde_json::from_str(INPUT_DOCUMENT).unwrap();
    input.biometrics.weight_kg = 0.0;

    let result = TdeeEstimator::new(EstimatorConfig::default()).estimate(&input);
    let value = serde_json::to_value(&result).unwrap();

    assert!(value["estimate"].is_null());
    assert_eq!(value["insights"][0]["condition"], json!("incomplete_profile"));
    assert_eq!(value["insights"][0]["type"], json!("alert"));
}

#[test]
fn test_estimation_error_wire_format() {
    let err = EstimationError::insufficient(InsufficiencyReason::WeightGapTooLong {
        gap_days: 9,
        max_gap_days: 5,
    });

    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(value["error"], json!("insufficient_data"));
    assert_eq!(value["details"]["reason"]["kind"], json!("weight_gap_too_long"));
    assert_eq!(value["details"]["reason"]["gap_days"], json!(9));
}
