// ABOUTME: Command-line front end for the adaptive TDEE estimator
// ABOUTME: Runs full estimates from JSON input files and standalone formula calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full adaptive estimate from an EstimationInput document
//! tdee-cli estimate --input user.json --pretty
//!
//! # Formula-only BMR and TDEE
//! tdee-cli formula --sex male --age 30 --height-cm 180 --weight-kg 75 --activity moderate
//! ```

use adaptive_tdee::config::EstimatorConfig;
use adaptive_tdee::intelligence::{FormulaEstimator, TdeeEstimator};
use adaptive_tdee::logging::LoggingConfig;
use adaptive_tdee::models::{ActivityLevel, EstimationInput, Sex, UserBiometrics};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tdee-cli",
    about = "Adaptive TDEE Estimator CLI",
    long_about = "Estimate total daily energy expenditure from biometrics, food logs, and weigh-ins."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the adaptive estimate for an `EstimationInput` JSON file
    Estimate {
        /// Path to the input JSON document
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Compute BMR and formula TDEE from biometrics
    Formula {
        /// Biological sex (male, female)
        #[arg(long)]
        sex: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = EstimatorConfig::load().context("Invalid estimator configuration")?;

    match cli.command {
        Command::Estimate { input, pretty } => run_estimate(config, &input, pretty),
        Command::Formula {
            sex,
            age,
            height_cm,
            weight_kg,
            activity,
        } => {
            let biometrics = UserBiometrics {
                sex: Sex::from_str_lossy(&sex).ok_or_else(|| anyhow!("Unknown sex: {sex}"))?,
                age_years: age,
                height_cm,
                weight_kg,
                activity_level: ActivityLevel::from_str_lossy(&activity)
                    .ok_or_else(|| anyhow!("Unknown activity level: {activity}"))?,
            };
            let estimate = FormulaEstimator::new(&config.formula).estimate(&biometrics)?;
            print_json(&estimate, true)
        }
    }
}

fn run_estimate(config: EstimatorConfig, path: &Path, pretty: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input: EstimationInput = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse estimation input {}", path.display()))?;

    info!(path = %path.display(), records = input.records.len(), "Running estimate");
    let result = TdeeEstimator::new(config).estimate(&input);
    print_json(&result, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
