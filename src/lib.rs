// ABOUTME: Main library entry point for the adaptive TDEE estimator
// ABOUTME: Re-exports domain models and exposes configuration, estimation, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Adaptive TDEE
//!
//! Estimates a user's Total Daily Energy Expenditure by blending a
//! population formula (Mifflin-St Jeor) with an energy-balance estimate
//! derived from logged intake and body weight. As logging data accumulates
//! the estimate shifts from formula to observed, with a confidence score,
//! a trend classification, and actionable insights.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use adaptive_tdee::config::EstimatorConfig;
//! use adaptive_tdee::intelligence::TdeeEstimator;
//! use adaptive_tdee::models::EstimationInput;
//!
//! fn run(input: &EstimationInput) -> anyhow::Result<()> {
//!     let estimator = TdeeEstimator::new(EstimatorConfig::load()?);
//!     let result = estimator.estimate(input);
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Estimator configuration with environment overrides
pub mod config;

/// Estimation pipeline stages
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use tdee_core::{constants, errors, models};
