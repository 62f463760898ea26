// ABOUTME: Observed estimation, fusion, data quality, trend, and insight thresholds
// ABOUTME: Tunable constants of the adaptive pipeline with defaults from tdee-core constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Analysis Configuration
//!
//! Window lengths and thresholds are inferred defaults meant to be tuned
//! against real user data, not fixed contracts.

use serde::{Deserialize, Serialize};
use tdee_core::constants::{data_quality, energy, fusion, insights, observed, trend};

/// Observed (energy balance) estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservedConfig {
    /// Energy equivalent of 1 kg of body mass change (kcal)
    pub kcal_per_kg: f64,
    /// Trailing window length (days)
    pub window_max_days: u32,
    /// Minimum qualifying days for an observed estimate
    pub min_qualifying_days: u32,
    /// Longest run of unmeasured days bridged by interpolation
    pub max_interpolation_gap_days: u32,
    /// Lower sanity bound as a fraction of formula TDEE
    pub sanity_lower_ratio: f64,
    /// Upper sanity bound as a fraction of formula TDEE
    pub sanity_upper_ratio: f64,
}

/// Formula/observed fusion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Qualifying days needed for a purely observed estimate
    pub observed_min_window_days: u32,
    /// Qualifying days at which observed data gets full blend weight
    pub full_weight_window_days: u32,
    /// Confidence ceiling for formula-only estimates
    pub formula_confidence_cap: f64,
}

/// Data quality level thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataQualityConfig {
    /// Days logged this week for high quality
    pub high_quality_days: u32,
    /// Days logged this week for medium quality
    pub medium_quality_days: u32,
}

/// Trend, adaptation, and plateau detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Most recent trend points used for the TDEE regression
    pub regression_points: usize,
    /// Weekly slope threshold as a percent of current TDEE
    pub slope_threshold_percent_per_week: f64,
    /// Trailing days used for the weekly weight change regression
    pub weight_trend_days: u32,
    /// Relative decline of observed vs formula TDEE flagged as adaptation
    pub adaptation_threshold: f64,
    /// Observed span required before adaptation is flagged (days)
    pub adaptation_min_window_days: u32,
    /// Weekly weight change counted as flat (kg)
    pub plateau_tolerance_kg: f64,
    /// Consecutive flat weeks required for a plateau
    pub plateau_min_weeks: u32,
}

/// Insight generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Maximum insights returned per run
    pub max_insights: usize,
    /// Tolerance around the goal rate counted as on track (kg/week)
    pub on_track_tolerance_kg: f64,
    /// Weekly loss as a percent of body weight flagged as rapid
    pub rapid_loss_percent: f64,
    /// Confidence needed to announce a personalized estimate
    pub personalized_confidence: f64,
    /// Days logged this week below which consistency is flagged
    pub low_logging_days: u32,
}

impl Default for ObservedConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: energy::KCAL_PER_KG,
            window_max_days: observed::WINDOW_MAX_DAYS,
            min_qualifying_days: observed::MIN_QUALIFYING_DAYS,
            max_interpolation_gap_days: observed::MAX_INTERPOLATION_GAP_DAYS,
            sanity_lower_ratio: observed::SANITY_LOWER_RATIO,
            sanity_upper_ratio: observed::SANITY_UPPER_RATIO,
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            observed_min_window_days: fusion::OBSERVED_MIN_WINDOW_DAYS,
            full_weight_window_days: fusion::FULL_WEIGHT_WINDOW_DAYS,
            formula_confidence_cap: fusion::FORMULA_CONFIDENCE_CAP,
        }
    }
}

impl Default for DataQualityConfig {
    fn default() -> Self {
        Self {
            high_quality_days: data_quality::HIGH_QUALITY_DAYS,
            medium_quality_days: data_quality::MEDIUM_QUALITY_DAYS,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            regression_points: trend::REGRESSION_POINTS,
            slope_threshold_percent_per_week: trend::SLOPE_THRESHOLD_PERCENT_PER_WEEK,
            weight_trend_days: trend::WEIGHT_TREND_DAYS,
            adaptation_threshold: trend::ADAPTATION_THRESHOLD,
            adaptation_min_window_days: trend::ADAPTATION_MIN_WINDOW_DAYS,
            plateau_tolerance_kg: trend::PLATEAU_TOLERANCE_KG,
            plateau_min_weeks: trend::PLATEAU_MIN_WEEKS,
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            max_insights: insights::MAX_INSIGHTS,
            on_track_tolerance_kg: insights::ON_TRACK_TOLERANCE_KG,
            rapid_loss_percent: insights::RAPID_LOSS_PERCENT,
            personalized_confidence: insights::PERSONALIZED_CONFIDENCE,
            low_logging_days: insights::LOW_LOGGING_DAYS,
        }
    }
}
