// ABOUTME: Maps estimation outcomes to typed, severity-ordered user insights
// ABOUTME: One insight per triggered condition, alerts first, capped at a configured count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for adaptive TDEE results
//!
//! The mapping from state to insights is deterministic: conditions are
//! evaluated in a fixed order, sorted by severity with a stable sort, then
//! truncated.

use crate::config::InsightConfig;
use tdee_core::errors::EstimationError;
use tdee_core::models::{
    EstimateSource, Insight, InsightCondition, TdeeEstimate, WeeklyGoal,
};

/// Everything the generator needs to know about a run
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    /// Final estimate, `None` when biometrics were invalid
    pub estimate: Option<&'a TdeeEstimate>,
    /// Why the observed estimator failed, if it did
    pub observed_error: Option<&'a EstimationError>,
    /// Latest known body weight (kg)
    pub current_weight_kg: Option<f64>,
    /// Whether at least two weights back the weekly change
    pub weight_trend_available: bool,
    /// Mean logged intake over the observed window
    pub avg_logged_intake: Option<f64>,
    /// Observed expenditure well below the formula
    pub metabolic_adaptation: bool,
    /// Weight stalled while under the recommendation
    pub plateau: bool,
    /// Active weekly goal
    pub goal: &'a WeeklyGoal,
    /// Days with intake in the trailing week
    pub days_logged_this_week: u32,
}

/// Insight generator for estimation results
pub struct InsightGenerator<'a> {
    config: &'a InsightConfig,
}

impl<'a> InsightGenerator<'a> {
    /// Create a generator over insight thresholds
    #[must_use]
    pub const fn new(config: &'a InsightConfig) -> Self {
        Self { config }
    }

    /// Generate sorted, truncated insights for a run
    #[must_use]
    pub fn generate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        match ctx.estimate {
            None => insights.push(Insight::new(
                InsightCondition::IncompleteProfile,
                "Complete your profile",
                "Age, sex, height, and weight are needed to estimate your energy expenditure.",
            )),
            Some(estimate) => self.estimate_insights(estimate, ctx, &mut insights),
        }

        if ctx.days_logged_this_week < self.config.low_logging_days {
            insights.push(Insight::new(
                InsightCondition::LowLoggingConsistency,
                "Log more consistently",
                format!(
                    "You logged food on {} of the last 7 days. Consistent logging makes your estimate more accurate.",
                    ctx.days_logged_this_week
                ),
            ));
        }

        // Stable sort keeps condition order within a severity
        insights.sort_by_key(|insight| insight.insight_type.rank());
        insights.truncate(self.config.max_insights);
        insights
    }

    fn estimate_insights(
        &self,
        estimate: &TdeeEstimate,
        ctx: &InsightContext<'_>,
        insights: &mut Vec<Insight>,
    ) {
        let weekly_change = estimate.weekly_weight_change_kg;

        if let Some(weight) = ctx.current_weight_kg {
            let rapid_limit = -self.config.rapid_loss_percent / 100.0 * weight;
            if ctx.weight_trend_available && weekly_change < rapid_limit {
                insights.push(Insight::new(
                    InsightCondition::RapidWeightLoss,
                    "Weight dropping quickly",
                    format!(
                        "You are losing {:.2} kg per week, more than {:.0}% of body weight. Consider eating closer to {:.0} kcal.",
                        -weekly_change, self.config.rapid_loss_percent, estimate.recommended_intake
                    ),
                ));
            }
        }

        if let Some(avg_intake) = ctx.avg_logged_intake {
            if ctx.weight_trend_available && avg_intake < estimate.bmr && weekly_change >= 0.0 {
                insights.push(Insight::new(
                    InsightCondition::PossibleUnderReporting,
                    "Check your food logs",
                    format!(
                        "Logged intake averages {avg_intake:.0} kcal, below your resting needs of {:.0} kcal, yet weight is not dropping. Some meals may be missing from your log.",
                        estimate.bmr
                    ),
                ));
            }
        }

        if let Some(EstimationError::ImplausibleEstimate { observed_tdee, .. }) = ctx.observed_error {
            insights.push(Insight::new(
                InsightCondition::ImplausibleEstimate,
                "Unusual data detected",
                format!(
                    "Your logs imply {observed_tdee:.0} kcal/day, which is outside the plausible range. Using the formula estimate instead."
                ),
            ));
        }

        if ctx.metabolic_adaptation {
            if let Some(observed) = estimate.observed_tdee {
                insights.push(Insight::new(
                    InsightCondition::MetabolicAdaptation,
                    "Metabolism adapting",
                    format!(
                        "Your measured expenditure ({observed:.0} kcal) is well below the formula estimate ({:.0} kcal). A diet break may help.",
                        estimate.formula_tdee
                    ),
                ));
            }
        }

        if ctx.plateau {
            insights.push(Insight::new(
                InsightCondition::Plateau,
                "Weight plateau",
                "Your weight has been flat for several weeks despite eating below your target. Review portion sizes or activity.",
            ));
        }

        let rate = ctx.goal.target_weekly_change_kg;
        let has_rate = rate.abs() > f64::EPSILON;

        if let (Some(target), Some(weight)) = (ctx.goal.target_weight_kg, ctx.current_weight_kg) {
            let reached = if has_rate {
                (rate < 0.0 && weight <= target) || (rate > 0.0 && weight >= target)
            } else {
                (weight - target).abs() <= self.config.on_track_tolerance_kg
            };
            if reached {
                insights.push(Insight::new(
                    InsightCondition::GoalAchieved,
                    "Goal reached",
                    format!("You reached your target weight of {target:.1} kg."),
                ));
            }
        }

        if has_rate
            && ctx.weight_trend_available
            && (weekly_change - rate).abs() <= self.config.on_track_tolerance_kg
        {
            insights.push(Insight::new(
                InsightCondition::OnTrack,
                "On track",
                format!("Your weight is changing {weekly_change:+.2} kg per week against a target of {rate:+.2} kg."),
            ));
        }

        match estimate.estimate_source {
            EstimateSource::Observed if estimate.confidence >= self.config.personalized_confidence => {
                insights.push(Insight::new(
                    InsightCondition::PersonalizedEstimate,
                    "Personalized estimate",
                    format!(
                        "Your TDEE of {:.0} kcal is based on your own intake and weight data.",
                        estimate.tdee
                    ),
                ));
            }
            EstimateSource::Formula => match ctx.observed_error {
                Some(EstimationError::InsufficientData { .. }) => insights.push(Insight::new(
                    InsightCondition::FormulaOnly,
                    "Estimate based on formula",
                    "Keep logging food and weight. After a week of data your estimate will start adapting to you.",
                )),
                Some(EstimationError::ImplausibleEstimate { .. }) => insights.push(Insight::new(
                    InsightCondition::FormulaOnly,
                    "Estimate based on formula",
                    "Your logged data did not give a plausible estimate, so the formula is used until it does.",
                )),
                Some(EstimationError::InvalidBiometrics { .. }) | None => {}
            },
            EstimateSource::Hybrid => {
                insights.push(Insight::new(
                    InsightCondition::HybridEstimate,
                    "Estimate is adapting",
                    format!(
                        "Your estimate blends the formula with {} days of your own data.",
                        estimate.qualifying_days
                    ),
                ));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tdee_core::errors::InsufficiencyReason;
    use tdee_core::models::{InsightType, TrendDirection};

    fn estimate(source: EstimateSource, confidence: f64) -> TdeeEstimate {
        TdeeEstimate {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            bmr: 1700.0,
            activity_multiplier: 1.55,
            tdee: 2635.0,
            recommended_intake: 2635.0,
            confidence,
            estimate_source: source,
            trend: TrendDirection::Stable,
            weekly_weight_change_kg: 0.0,
            formula_tdee: 2635.0,
            observed_tdee: None,
            qualifying_days: 0,
        }
    }

    fn context<'a>(estimate: Option<&'a TdeeEstimate>, goal: &'a WeeklyGoal) -> InsightContext<'a> {
        InsightContext {
            estimate,
            observed_error: None,
            current_weight_kg: Some(75.0),
            weight_trend_available: true,
            avg_logged_intake: None,
            metabolic_adaptation: false,
            plateau: false,
            goal,
            days_logged_this_week: 7,
        }
    }

    #[test]
    fn test_missing_estimate_yields_incomplete_profile() {
        let config = InsightConfig::default();
        let goal = WeeklyGoal::maintain();
        let insights = InsightGenerator::new(&config).generate(&context(None, &goal));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].condition, InsightCondition::IncompleteProfile);
        assert_eq!(insights[0].insight_type, InsightType::Alert);
    }

    #[test]
    fn test_sorted_by_severity_and_capped() {
        let config = InsightConfig::default();
        let goal = WeeklyGoal::maintain();
        let est = estimate(EstimateSource::Hybrid, 0.5);
        let ctx = InsightContext {
            avg_logged_intake: Some(1200.0),
            metabolic_adaptation: false,
            plateau: true,
            days_logged_this_week: 2,
            ..context(Some(&est), &goal)
        };

        let insights = InsightGenerator::new(&config).generate(&ctx);

        let conditions: Vec<InsightCondition> = insights.iter().map(|i| i.condition).collect();
        assert_eq!(
            conditions,
            vec![
                InsightCondition::PossibleUnderReporting,
                InsightCondition::Plateau,
                InsightCondition::HybridEstimate,
                InsightCondition::LowLoggingConsistency,
            ]
        );
    }

    #[test]
    fn test_formula_only_follows_either_observed_failure() {
        let config = InsightConfig::default();
        let goal = WeeklyGoal::maintain();
        let est = estimate(EstimateSource::Formula, 0.3);
        let generator = InsightGenerator::new(&config);
        let failures = [
            EstimationError::insufficient(InsufficiencyReason::TooFewQualifyingDays {
                available: 3,
                required: 7,
            }),
            EstimationError::ImplausibleEstimate {
                observed_tdee: 900.0,
                lower_bound: 1317.5,
                upper_bound: 5270.0,
            },
        ];

        for failure in &failures {
            let ctx = InsightContext {
                observed_error: Some(failure),
                ..context(Some(&est), &goal)
            };
            let conditions: Vec<InsightCondition> = generator
                .generate(&ctx)
                .iter()
                .map(|i| i.condition)
                .collect();
            assert!(conditions.contains(&InsightCondition::FormulaOnly), "{failure:?}");
        }
    }

    #[test]
    fn test_personalized_requires_confidence() {
        let config = InsightConfig::default();
        let goal = WeeklyGoal::maintain();
        let high = estimate(EstimateSource::Observed, 0.9);
        let low = estimate(EstimateSource::Observed, 0.6);
        let generator = InsightGenerator::new(&config);

        assert!(generator
            .generate(&context(Some(&high), &goal))
            .iter()
            .any(|i| i.condition == InsightCondition::PersonalizedEstimate));
        assert!(generator.generate(&context(Some(&low), &goal)).is_empty());
    }
}
