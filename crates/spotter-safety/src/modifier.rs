// ABOUTME: Session gating: proceed, reduce intensity, or rest
// ABOUTME: Consumes the same rule evaluation as alert generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Session gating recommendations.
//!
//! The modifier shares its rule evaluation with the alert generator, so the
//! two can never disagree: a critical breach forces rest, and rest is also
//! forced when two or more high-severity breaches stack up. Anything milder
//! still trims intensity rather than clearing the athlete outright.

use crate::config::SafetyConfig;
use crate::metrics::SafetyMetrics;
use crate::rules::{self, RuleBreach};
use serde::{Deserialize, Serialize};
use spotter_core::models::AlertSeverity;

/// What should happen to the athlete's next session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRecommendation {
    /// Train as planned
    Proceed,
    /// Keep the session but lower load and effort targets
    ReduceIntensity,
    /// Replace the session with rest
    Rest,
}

impl SessionRecommendation {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::ReduceIntensity => "reduce_intensity",
            Self::Rest => "rest",
        }
    }
}

impl std::fmt::Display for SessionRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gating decision with a human-readable rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionModification {
    /// The gate: proceed, reduce, or rest
    pub recommendation: SessionRecommendation,
    /// Sentence naming the breaches that drove the decision
    pub rationale: String,
}

/// Decides whether the next session should be modified
#[derive(Debug, Clone)]
pub struct SessionModifier {
    config: SafetyConfig,
}

impl SessionModifier {
    /// Modifier backed by the global threshold configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SafetyConfig::global().clone(),
        }
    }

    /// Modifier with an explicit configuration (tests, simulations)
    #[must_use]
    pub const fn with_config(config: SafetyConfig) -> Self {
        Self { config }
    }

    /// Gate the next session for one metrics snapshot
    #[must_use]
    pub fn should_modify_session(&self, metrics: &SafetyMetrics) -> SessionModification {
        let breaches = rules::evaluate_with(&self.config, metrics);
        Self::from_breaches(&breaches)
    }

    /// Gate from an existing rule evaluation
    #[must_use]
    pub fn from_breaches(breaches: &[RuleBreach]) -> SessionModification {
        let critical = breaches
            .iter()
            .filter(|b| b.severity == AlertSeverity::Critical)
            .count();
        let high = breaches
            .iter()
            .filter(|b| b.severity == AlertSeverity::High)
            .count();

        if critical > 0 || high >= 2 {
            return SessionModification {
                recommendation: SessionRecommendation::Rest,
                rationale: format!(
                    "Rest today: {} active ({critical} critical, {high} high severity)",
                    summarize(breaches)
                ),
            };
        }

        if breaches.is_empty() {
            return SessionModification {
                recommendation: SessionRecommendation::Proceed,
                rationale: "Recovery markers are within normal ranges; train as planned".into(),
            };
        }

        SessionModification {
            recommendation: SessionRecommendation::ReduceIntensity,
            rationale: format!(
                "Reduce intensity: {} active; keep loads comfortable and stop short of failure",
                summarize(breaches)
            ),
        }
    }
}

impl Default for SessionModifier {
    fn default() -> Self {
        Self::new()
    }
}

/// "fatigue and load warnings" style summary of the breached categories
fn summarize(breaches: &[RuleBreach]) -> String {
    let mut kinds: Vec<&str> = Vec::new();
    for breach in breaches {
        let name = breach.alert_type.as_str();
        if !kinds.contains(&name) {
            kinds.push(name);
        }
    }

    match kinds.as_slice() {
        [] => "no warnings".into(),
        [single] => format!("{single} warning"),
        [head @ .., last] => format!("{} and {last} warnings", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RpeTrend;
    use spotter_core::models::AlertType;

    fn metrics_with(
        soreness: f64,
        sleep: f64,
        energy: f64,
        trend: RpeTrend,
        age: u8,
    ) -> SafetyMetrics {
        SafetyMetrics {
            average_energy: energy,
            average_soreness: soreness,
            average_sleep: sleep,
            average_mood: 3.0,
            average_session_rpe: 7.5,
            average_set_rpe: 7.0,
            rpe_trend: trend,
            completed_sessions: 3,
            check_in_count: 5,
            set_log_count: 12,
            athlete_age: age,
        }
    }

    fn modifier() -> SessionModifier {
        SessionModifier::with_config(SafetyConfig::default())
    }

    #[test]
    fn healthy_metrics_proceed() {
        let modification =
            modifier().should_modify_session(&metrics_with(2.0, 8.0, 7.0, RpeTrend::Stable, 20));
        assert_eq!(
            modification.recommendation,
            SessionRecommendation::Proceed
        );
    }

    #[test]
    fn single_medium_breach_reduces_intensity() {
        let modification =
            modifier().should_modify_session(&metrics_with(4.1, 8.0, 7.0, RpeTrend::Stable, 20));
        assert_eq!(
            modification.recommendation,
            SessionRecommendation::ReduceIntensity
        );
        assert!(modification.rationale.contains("fatigue"));
    }

    #[test]
    fn single_high_breach_still_reduces() {
        let modification =
            modifier().should_modify_session(&metrics_with(2.0, 5.5, 7.0, RpeTrend::Stable, 20));
        assert_eq!(
            modification.recommendation,
            SessionRecommendation::ReduceIntensity
        );
    }

    #[test]
    fn two_high_breaches_force_rest() {
        let modification =
            modifier().should_modify_session(&metrics_with(4.7, 5.5, 7.0, RpeTrend::Stable, 20));
        assert_eq!(modification.recommendation, SessionRecommendation::Rest);
    }

    #[test]
    fn any_critical_breach_forces_rest() {
        let metrics = metrics_with(5.0, 5.0, 3.0, RpeTrend::Increasing, 14);
        let modification = modifier().should_modify_session(&metrics);
        assert_eq!(modification.recommendation, SessionRecommendation::Rest);
        assert!(modification.rationale.contains("critical"));
    }

    #[test]
    fn rest_rationale_names_breached_categories() {
        let metrics = metrics_with(5.0, 5.0, 3.0, RpeTrend::Increasing, 14);
        let breaches = crate::rules::evaluate_with(&SafetyConfig::default(), &metrics);
        assert!(breaches.iter().any(|b| b.alert_type == AlertType::InjuryRisk));

        let modification = SessionModifier::from_breaches(&breaches);
        assert!(modification.rationale.contains("injury_risk"));
    }
}
