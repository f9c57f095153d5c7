// ABOUTME: Threshold rule evaluation producing typed breaches from metrics
// ABOUTME: Single evaluation pass shared by alert generation and session gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Threshold rules over one [`SafetyMetrics`] snapshot.
//!
//! Rules run in declaration order against the age-resolved cutoff table and
//! every matching rule contributes a [`RuleBreach`]; the empty vector is the
//! common, healthy outcome. Both the alert generator and the session
//! modifier consume this pass, which is what makes their outputs consistent:
//! a window that breaches critically can never be cleared to proceed.
//!
//! Rules that read check-in means are gated on `check_in_count > 0`. A
//! missing check-in window yields zero-valued means, and zeros from absence
//! must not be read as reported distress.

use crate::config::{SafetyConfig, SafetyThresholds};
use crate::metrics::{RpeTrend, SafetyMetrics};
use spotter_core::models::{AlertSeverity, AlertType};

/// One threshold rule that fired for a metrics window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBreach {
    /// Risk category the rule maps to
    pub alert_type: AlertType,
    /// Urgency assigned by the rule
    pub severity: AlertSeverity,
    /// Explanation naming the triggering value
    pub message: String,
}

/// Evaluate the rules using the global configuration
#[must_use]
pub fn evaluate(metrics: &SafetyMetrics) -> Vec<RuleBreach> {
    evaluate_with(SafetyConfig::global(), metrics)
}

/// Evaluate the rules against an explicit configuration
#[must_use]
pub fn evaluate_with(config: &SafetyConfig, metrics: &SafetyMetrics) -> Vec<RuleBreach> {
    let cutoffs = config.resolve_for_age(metrics.athlete_age);
    let mut breaches = Vec::new();
    let has_check_ins = metrics.check_in_count > 0;

    if has_check_ins {
        soreness_rule(metrics, &cutoffs, &mut breaches);
        sleep_rule(metrics, &cutoffs, &mut breaches);
        load_rule(metrics, &cutoffs, &mut breaches);
        compound_risk_rule(metrics, &cutoffs, &mut breaches);
    }

    breaches
}

/// Elevated mean soreness: muscles are not recovering between sessions
fn soreness_rule(
    metrics: &SafetyMetrics,
    cutoffs: &SafetyThresholds,
    breaches: &mut Vec<RuleBreach>,
) {
    if metrics.average_soreness < cutoffs.soreness.elevated {
        return;
    }
    let severity = if metrics.average_soreness >= cutoffs.soreness.severe {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    };
    breaches.push(RuleBreach {
        alert_type: AlertType::Fatigue,
        severity,
        message: format!(
            "Average muscle soreness {:.1} over the last {} check-ins is above the {:.1} cutoff; recovery between sessions looks incomplete",
            metrics.average_soreness, metrics.check_in_count, cutoffs.soreness.elevated
        ),
    });
}

/// Short mean sleep: recovery debt accumulates below the low boundary
fn sleep_rule(
    metrics: &SafetyMetrics,
    cutoffs: &SafetyThresholds,
    breaches: &mut Vec<RuleBreach>,
) {
    if metrics.average_sleep >= cutoffs.sleep.low_hours {
        return;
    }
    let severity = if metrics.average_sleep < cutoffs.sleep.very_low_hours {
        AlertSeverity::High
    } else {
        AlertSeverity::Medium
    };
    breaches.push(RuleBreach {
        alert_type: AlertType::Fatigue,
        severity,
        message: format!(
            "Averaging {:.1}h of sleep against a {:.1}h floor across the last {} check-ins",
            metrics.average_sleep, cutoffs.sleep.low_hours, metrics.check_in_count
        ),
    });
}

/// Rising session RPE while reported energy is depleted
fn load_rule(
    metrics: &SafetyMetrics,
    cutoffs: &SafetyThresholds,
    breaches: &mut Vec<RuleBreach>,
) {
    if metrics.rpe_trend != RpeTrend::Increasing
        || metrics.average_energy > cutoffs.effort.low_energy
    {
        return;
    }
    breaches.push(RuleBreach {
        alert_type: AlertType::Load,
        severity: AlertSeverity::High,
        message: format!(
            "Session RPE is climbing while reported energy sits at {:.1} of 10; training load is outpacing recovery",
            metrics.average_energy
        ),
    });
}

/// Maximal soreness, very short sleep, and a rising RPE trend together
fn compound_risk_rule(
    metrics: &SafetyMetrics,
    cutoffs: &SafetyThresholds,
    breaches: &mut Vec<RuleBreach>,
) {
    let fired = metrics.average_soreness >= cutoffs.soreness.extreme
        && metrics.average_sleep < cutoffs.sleep.very_low_hours
        && metrics.rpe_trend == RpeTrend::Increasing;
    if !fired {
        return;
    }
    breaches.push(RuleBreach {
        alert_type: AlertType::InjuryRisk,
        severity: AlertSeverity::Critical,
        message: format!(
            "Maximal soreness ({:.1}), short sleep ({:.1}h), and a rising RPE trend together signal elevated injury risk",
            metrics.average_soreness, metrics.average_sleep
        ),
    });
}
