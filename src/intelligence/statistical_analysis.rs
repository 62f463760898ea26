// ABOUTME: Least-squares regression used by the TDEE and weight trend calculations
// ABOUTME: Implements linear regression with R-squared and standard error over dated samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Linear regression analysis results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RegressionResult {
    /// Slope of the regression line (units of y per unit of x)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Number of samples used
    pub sample_count: usize,
}

/// Statistical helpers over small numeric series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least-squares regression of `y` on `x`
    ///
    /// Returns `None` with fewer than two samples or zero variance in `x`.
    #[must_use]
    pub fn linear_regression(samples: &[(f64, f64)]) -> Option<RegressionResult> {
        if samples.len() < 2 {
            return None;
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy, syy) = samples.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
        });

        if sxx.abs() < f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let r_squared = if syy.abs() < f64::EPSILON {
            // Perfectly flat series is fully explained by the line
            1.0
        } else {
            ((sxy * sxy) / (sxx * syy)).clamp(0.0, 1.0)
        };

        let sse = samples
            .iter()
            .map(|(x, y)| {
                let residual = y - slope.mul_add(*x, intercept);
                residual * residual
            })
            .sum::<f64>();
        let degrees_of_freedom = samples.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Some(RegressionResult {
            slope,
            intercept,
            r_squared,
            standard_error,
            sample_count: samples.len(),
        })
    }

    /// Regression of dated values, with x measured in days since the first date
    ///
    /// The slope is therefore in units per day.
    #[must_use]
    pub fn dated_regression(samples: &[(NaiveDate, f64)]) -> Option<RegressionResult> {
        let origin = samples.first()?.0;
        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|(date, value)| ((*date - origin).num_days() as f64, *value))
            .collect();
        Self::linear_regression(&points)
    }

    /// Arithmetic mean, `None` for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_perfect_line() {
        let samples: Vec<(f64, f64)> = (0..10).map(|i| (f64::from(i), 2.0f64.mul_add(f64::from(i), 1.0))).collect();
        let result = StatisticalAnalyzer::linear_regression(&samples).unwrap();
        assert!((result.slope - 2.0).abs() < 1e-9);
        assert!((result.intercept - 1.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
        assert!(result.standard_error < 1e-9);
    }

    #[test]
    fn test_insufficient_samples() {
        assert!(StatisticalAnalyzer::linear_regression(&[(0.0, 1.0)]).is_none());
        assert!(StatisticalAnalyzer::linear_regression(&[(1.0, 1.0), (1.0, 2.0)]).is_none());
    }

    #[test]
    fn test_dated_regression_uses_calendar_gaps() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        // Two points ten days apart, value rising 5 units
        let samples = vec![(start, 100.0), (start + Duration::days(10), 105.0)];
        let result = StatisticalAnalyzer::dated_regression(&samples).unwrap();
        assert!((result.slope - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mean() {
        assert_eq!(StatisticalAnalyzer::mean(&[]), None);
        assert!((StatisticalAnalyzer::mean(&[1.0, 2.0, 3.0]).unwrap() - 2.0).abs() < f64::EPSILON);
    }
}
