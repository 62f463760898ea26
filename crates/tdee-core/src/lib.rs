// ABOUTME: Core types and constants for the adaptive TDEE estimator
// ABOUTME: Foundation crate with domain models, error handling, and default constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TDEE Core
//!
//! Foundation crate providing the shared data contract of the adaptive TDEE
//! estimator. The engine crate consumes and produces these types; storage and
//! presentation layers can depend on this crate alone.
//!
//! ## Modules
//!
//! - **models**: biometrics, raw log entries, daily records, estimates, insights
//! - **errors**: typed estimation failures (`EstimationError`)
//! - **constants**: default physiological and statistical constants

/// Typed estimation failures
pub mod errors;

/// Default constants organized by domain
pub mod constants;

/// Domain data models (biometrics, logs, daily records, estimates, insights)
pub mod models;
