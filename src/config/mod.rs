// ABOUTME: Estimator configuration orchestrating formula and adaptive analysis settings
// ABOUTME: Provides defaults, environment overrides, validation, and a lazily loaded global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Estimator Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `formula` - BMR coefficients and activity multipliers
//! - `analysis` - observed window, fusion, data quality, trend, and insight thresholds
//! - `error` - configuration validation errors
//!
//! `EstimatorConfig::load()` starts from defaults, applies `TDEE_*` environment
//! overrides, then validates the result.

pub mod analysis;
pub mod error;
pub mod formula;

pub use analysis::{DataQualityConfig, FusionConfig, InsightConfig, ObservedConfig, TrendConfig};
pub use error::ConfigError;
pub use formula::{ActivityFactorsConfig, BmrConfig, FormulaConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ESTIMATOR_CONFIG: OnceLock<EstimatorConfig> = OnceLock::new();

/// Main estimator configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Formula estimator settings
    pub formula: FormulaConfig,
    /// Observed estimator settings
    pub observed: ObservedConfig,
    /// Fusion settings
    pub fusion: FusionConfig,
    /// Data quality thresholds
    pub data_quality: DataQualityConfig,
    /// Trend analysis settings
    pub trend: TrendConfig,
    /// Insight generation settings
    pub insights: InsightConfig,
}

impl EstimatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ESTIMATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load estimator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges and threshold orderings
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_formula()?;

        let obs = &self.observed;
        if !(1000.0..=15000.0).contains(&obs.kcal_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg must be between 1000 and 15000",
            ));
        }
        if obs.min_qualifying_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_qualifying_days must be at least 2",
            ));
        }
        if obs.min_qualifying_days > obs.window_max_days {
            return Err(ConfigError::InvalidRange(
                "min_qualifying_days must be <= window_max_days",
            ));
        }
        if obs.sanity_lower_ratio <= 0.0 || obs.sanity_lower_ratio >= obs.sanity_upper_ratio {
            return Err(ConfigError::InvalidRange(
                "sanity band must satisfy 0 < lower_ratio < upper_ratio",
            ));
        }

        let fusion = &self.fusion;
        if fusion.full_weight_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "full_weight_window_days must be positive",
            ));
        }
        if fusion.observed_min_window_days < obs.min_qualifying_days {
            return Err(ConfigError::InvalidRange(
                "observed_min_window_days must be >= min_qualifying_days",
            ));
        }
        if !(0.0..=1.0).contains(&fusion.formula_confidence_cap) {
            return Err(ConfigError::ValueOutOfRange(
                "formula_confidence_cap must be between 0 and 1",
            ));
        }

        let quality = &self.data_quality;
        if quality.high_quality_days > 7 || quality.medium_quality_days > quality.high_quality_days
        {
            return Err(ConfigError::InvalidRange(
                "data quality days must satisfy medium <= high <= 7",
            ));
        }

        let trend = &self.trend;
        if trend.regression_points < 2 || trend.weight_trend_days < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend regressions need at least 2 points",
            ));
        }
        if !(0.0..1.0).contains(&trend.adaptation_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "adaptation_threshold must be in [0, 1)",
            ));
        }
        if trend.plateau_tolerance_kg < 0.0 || trend.plateau_min_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plateau tolerance must be non-negative and min weeks positive",
            ));
        }

        if self.insights.max_insights == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_insights must be at least 1",
            ));
        }

        Ok(())
    }

    /// Validate formula configuration
    fn validate_formula(&self) -> Result<(), ConfigError> {
        let formula = &self.formula;

        if formula.bmr.msj_weight_coef <= 0.0 || formula.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &formula.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("TDEE_KCAL_PER_KG", &mut self.observed.kcal_per_kg)?;
        Self::apply_env_var("TDEE_WINDOW_MAX_DAYS", &mut self.observed.window_max_days)?;
        Self::apply_env_var(
            "TDEE_MIN_QUALIFYING_DAYS",
            &mut self.observed.min_qualifying_days,
        )?;
        Self::apply_env_var(
            "TDEE_MAX_INTERPOLATION_GAP_DAYS",
            &mut self.observed.max_interpolation_gap_days,
        )?;

        Self::apply_env_var(
            "TDEE_OBSERVED_MIN_WINDOW_DAYS",
            &mut self.fusion.observed_min_window_days,
        )?;
        Self::apply_env_var(
            "TDEE_FORMULA_CONFIDENCE_CAP",
            &mut self.fusion.formula_confidence_cap,
        )?;

        Self::apply_env_var(
            "TDEE_ADAPTATION_THRESHOLD",
            &mut self.trend.adaptation_threshold,
        )?;
        Self::apply_env_var(
            "TDEE_PLATEAU_TOLERANCE_KG",
            &mut self.trend.plateau_tolerance_kg,
        )?;
        Self::apply_env_var("TDEE_PLATEAU_MIN_WEEKS", &mut self.trend.plateau_min_weeks)?;

        Self::apply_env_var("TDEE_MAX_INSIGHTS", &mut self.insights.max_insights)?;

        Ok(self)
    }
}
