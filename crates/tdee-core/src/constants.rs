// ABOUTME: Default constants for energy balance, windows, and thresholds
// ABOUTME: Pure data constants grouped by estimator stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values for every tunable threshold of the estimator. The engine's
//! configuration layer starts from these and may override them from the
//! environment.

/// Energy balance constants
pub mod energy {
    /// Energy equivalent of one kilogram of body mass change (kcal)
    pub const KCAL_PER_KG: f64 = 7700.0;
    /// Days per week, used to convert weekly rates to daily ones
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Mifflin-St Jeor formula constants
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
pub mod mifflin_st_jeor {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (kcal per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity multipliers for TDEE calculation
///
/// Reference: `McArdle`, Katch & Katch (2010). Exercise Physiology
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Hard daily training or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Observed (energy balance) estimator defaults
pub mod observed {
    /// Trailing window length (days)
    pub const WINDOW_MAX_DAYS: u32 = 28;
    /// Minimum qualifying days before an observed estimate is attempted
    pub const MIN_QUALIFYING_DAYS: u32 = 7;
    /// Longest run of unmeasured days that may be interpolated
    pub const MAX_INTERPOLATION_GAP_DAYS: u32 = 5;
    /// Lower sanity band as a fraction of formula TDEE
    pub const SANITY_LOWER_RATIO: f64 = 0.5;
    /// Upper sanity band as a fraction of formula TDEE
    pub const SANITY_UPPER_RATIO: f64 = 2.0;
}

/// Fusion defaults
pub mod fusion {
    /// Qualifying days needed for a purely observed estimate
    pub const OBSERVED_MIN_WINDOW_DAYS: u32 = 21;
    /// Qualifying days at which observed data receives full weight
    pub const FULL_WEIGHT_WINDOW_DAYS: u32 = 28;
    /// Confidence ceiling for formula-only estimates
    pub const FORMULA_CONFIDENCE_CAP: f64 = 0.3;
}

/// Data quality defaults
pub mod data_quality {
    /// Trailing days counted as "this week"
    pub const WEEK_DAYS: u32 = 7;
    /// Logged days this week for high data quality
    pub const HIGH_QUALITY_DAYS: u32 = 5;
    /// Logged days this week for medium data quality
    pub const MEDIUM_QUALITY_DAYS: u32 = 3;
}

/// Trend analysis defaults
pub mod trend {
    /// Trend points used for the TDEE regression
    pub const REGRESSION_POINTS: usize = 14;
    /// Weekly slope threshold as a percent of current TDEE
    pub const SLOPE_THRESHOLD_PERCENT_PER_WEEK: f64 = 1.0;
    /// Trailing days used for the weekly weight change regression
    pub const WEIGHT_TREND_DAYS: u32 = 14;
    /// Relative decline of observed vs formula TDEE flagged as adaptation
    pub const ADAPTATION_THRESHOLD: f64 = 0.10;
    /// Observed span required before adaptation is flagged (days)
    pub const ADAPTATION_MIN_WINDOW_DAYS: u32 = 21;
    /// Weekly weight change counted as flat (kg)
    pub const PLATEAU_TOLERANCE_KG: f64 = 0.1;
    /// Consecutive flat weeks required for a plateau
    pub const PLATEAU_MIN_WEEKS: u32 = 3;
}

/// Insight generation defaults
pub mod insights {
    /// Maximum insights returned per run
    pub const MAX_INSIGHTS: usize = 4;
    /// Tolerance around the goal rate counted as on track (kg/week)
    pub const ON_TRACK_TOLERANCE_KG: f64 = 0.25;
    /// Weekly loss, as a percent of body weight, flagged as rapid
    pub const RAPID_LOSS_PERCENT: f64 = 1.0;
    /// Confidence needed to announce a personalized estimate
    pub const PERSONALIZED_CONFIDENCE: f64 = 0.8;
    /// Days logged this week below which consistency is flagged
    pub const LOW_LOGGING_DAYS: u32 = 4;
}
