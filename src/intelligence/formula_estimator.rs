// ABOUTME: Population-formula BMR and TDEE from user biometrics
// ABOUTME: Mifflin-St Jeor equation with an activity multiplier lookup table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula Estimator Module
//!
//! Pure, stateless baseline for the adaptive estimate. The only failure is
//! invalid biometrics, in which case the caller must fall back to a
//! placeholder and prompt for profile completion.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{ActivityFactorsConfig, BmrConfig, FormulaConfig};
use serde::{Deserialize, Serialize};
use tdee_core::errors::EstimationError;
use tdee_core::models::{ActivityLevel, Sex, UserBiometrics};

/// Formula-based energy expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FormulaEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Activity multiplier for the user's activity level
    pub activity_multiplier: f64,
    /// `bmr * activity_multiplier` (kcal/day)
    pub tdee: f64,
}

/// Validate the biometrics the formula needs
///
/// Height and weight must be finite and positive; age must be non-zero.
/// No upper bounds apply.
///
/// # Errors
///
/// Returns `InvalidBiometrics` naming the first offending field
pub fn validate_biometrics(biometrics: &UserBiometrics) -> Result<(), EstimationError> {
    let UserBiometrics {
        age_years,
        height_cm,
        weight_kg,
        ..
    } = *biometrics;

    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(EstimationError::invalid_biometrics(
            "weight_kg",
            "must be positive",
        ));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(EstimationError::invalid_biometrics(
            "height_cm",
            "must be positive",
        ));
    }
    if age_years == 0 {
        return Err(EstimationError::invalid_biometrics(
            "age_years",
            "must be at least 1",
        ));
    }

    Ok(())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// # Errors
///
/// Returns `InvalidBiometrics` for non-positive height or weight, or zero age
pub fn calculate_mifflin_st_jeor(
    biometrics: &UserBiometrics,
    config: &BmrConfig,
) -> Result<f64, EstimationError> {
    validate_biometrics(biometrics)?;

    let weight_component = config.msj_weight_coef * biometrics.weight_kg;
    let height_component = config.msj_height_coef * biometrics.height_cm;
    let age_component = config.msj_age_coef * f64::from(biometrics.age_years);

    let sex_constant = match biometrics.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Activity multiplier for an activity level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.multiplier(level)
}

/// Stateless formula estimator
#[derive(Debug, Clone, Copy)]
pub struct FormulaEstimator<'a> {
    config: &'a FormulaConfig,
}

impl<'a> FormulaEstimator<'a> {
    /// Create an estimator over a formula configuration
    #[must_use]
    pub const fn new(config: &'a FormulaConfig) -> Self {
        Self { config }
    }

    /// Compute BMR, activity multiplier, and TDEE
    ///
    /// # Errors
    ///
    /// Returns `InvalidBiometrics` for missing biometrics
    pub fn estimate(&self, biometrics: &UserBiometrics) -> Result<FormulaEstimate, EstimationError> {
        let bmr = calculate_mifflin_st_jeor(biometrics, &self.config.bmr)?;
        let multiplier = activity_multiplier(biometrics.activity_level, &self.config.activity_factors);

        Ok(FormulaEstimate {
            bmr,
            activity_multiplier: multiplier,
            tdee: bmr * multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biometrics(sex: Sex, age: u32, height: f64, weight: f64) -> UserBiometrics {
        UserBiometrics {
            sex,
            age_years: age,
            height_cm: height,
            weight_kg: weight,
            activity_level: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_bmr_male_typical() {
        // 10 * 75 + 6.25 * 180 - 5 * 30 + 5 = 1730
        let bmr = calculate_mifflin_st_jeor(&biometrics(Sex::Male, 30, 180.0, 75.0), &BmrConfig::default())
            .unwrap();
        assert!((bmr - 1730.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_typical() {
        // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 1345.25
        let bmr =
            calculate_mifflin_st_jeor(&biometrics(Sex::Female, 25, 165.0, 60.0), &BmrConfig::default())
                .unwrap();
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_follows_equation_without_floor() {
        // 10 * 30 + 6.25 * 120 - 5 * 90 - 161 = 439
        let bmr =
            calculate_mifflin_st_jeor(&biometrics(Sex::Female, 90, 120.0, 30.0), &BmrConfig::default())
                .unwrap();
        assert!((bmr - 439.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = calculate_mifflin_st_jeor(&biometrics(Sex::Male, 30, 0.0, 75.0), &BmrConfig::default())
            .unwrap_err();
        assert!(matches!(err, EstimationError::InvalidBiometrics { ref field, .. } if field == "height_cm"));
    }

    #[test]
    fn test_zero_age_rejected() {
        let err = calculate_mifflin_st_jeor(&biometrics(Sex::Male, 0, 120.0, 25.0), &BmrConfig::default())
            .unwrap_err();
        assert!(matches!(err, EstimationError::InvalidBiometrics { ref field, .. } if field == "age_years"));
    }
}
