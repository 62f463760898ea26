// ABOUTME: Typed failure conditions of the TDEE estimation pipeline
// ABOUTME: Invalid biometrics, insufficient data, and implausible observed estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Estimation Errors
//!
//! Every failure here is recoverable: the pipeline degrades to a lower
//! confidence estimate (or to `estimate: None` for invalid biometrics)
//! instead of surfacing an error to its caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why the observed estimator did not have enough data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsufficiencyReason {
    /// Not enough days with both intake and a known weight
    TooFewQualifyingDays {
        /// Qualifying days found in the window
        available: u32,
        /// Qualifying days required
        required: u32,
    },
    /// A run of unmeasured days was too long to interpolate across
    WeightGapTooLong {
        /// Length of the longest unmeasured run (days)
        gap_days: u32,
        /// Longest run allowed
        max_gap_days: u32,
    },
}

impl fmt::Display for InsufficiencyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewQualifyingDays {
                available,
                required,
            } => write!(
                f,
                "need {required} days with intake and weight, found {available}"
            ),
            Self::WeightGapTooLong {
                gap_days,
                max_gap_days,
            } => write!(
                f,
                "weight gap of {gap_days} days exceeds the {max_gap_days}-day interpolation limit"
            ),
        }
    }
}

/// Errors raised while estimating energy expenditure
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details", rename_all = "snake_case")]
pub enum EstimationError {
    /// Biometrics missing or outside the formula's valid range
    #[error("invalid biometrics: {field} {reason}")]
    InvalidBiometrics {
        /// Offending field name
        field: String,
        /// Human-readable constraint that was violated
        reason: String,
    },

    /// Too little logged data for an observed estimate
    #[error("insufficient data: {reason}")]
    InsufficientData {
        /// Detailed shortfall
        reason: InsufficiencyReason,
    },

    /// Observed estimate fell outside the sanity band around the formula TDEE
    #[error("implausible observed TDEE {observed_tdee:.0} kcal (expected {lower_bound:.0}-{upper_bound:.0})")]
    ImplausibleEstimate {
        /// Rejected observed value (kcal/day)
        observed_tdee: f64,
        /// Lower sanity bound (kcal/day)
        lower_bound: f64,
        /// Upper sanity bound (kcal/day)
        upper_bound: f64,
    },
}

impl EstimationError {
    /// Create an invalid biometrics error
    #[must_use]
    pub fn invalid_biometrics(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBiometrics {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an insufficient data error
    #[must_use]
    pub const fn insufficient(reason: InsufficiencyReason) -> Self {
        Self::InsufficientData { reason }
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidBiometrics { .. } => "INVALID_BIOMETRICS",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::ImplausibleEstimate { .. } => "IMPLAUSIBLE_ESTIMATE",
        }
    }
}
