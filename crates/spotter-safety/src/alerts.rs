// ABOUTME: Turns rule breaches into persistable SafetyAlert records
// ABOUTME: Deterministic given metrics, athlete, and a caller-supplied instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Alert generation.
//!
//! The generator is a thin mapping from [`rules`](crate::rules) breaches to
//! [`SafetyAlert`] records stamped with the caller's clock reading. It owns
//! no state beyond its configuration and performs no I/O; persisting the
//! returned alerts is the caller's concern.

use crate::config::SafetyConfig;
use crate::metrics::SafetyMetrics;
use crate::rules;
use chrono::{DateTime, Utc};
use spotter_core::models::SafetyAlert;
use tracing::debug;
use uuid::Uuid;

/// Generates [`SafetyAlert`]s from one metrics snapshot
#[derive(Debug, Clone)]
pub struct AlertGenerator {
    config: SafetyConfig,
}

impl AlertGenerator {
    /// Generator backed by the global threshold configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SafetyConfig::global().clone(),
        }
    }

    /// Generator with an explicit configuration (tests, simulations)
    #[must_use]
    pub const fn with_config(config: SafetyConfig) -> Self {
        Self { config }
    }

    /// Evaluate the threshold rules and mint alerts for every breach
    ///
    /// Returns the empty vector when all recovery markers are normal, which
    /// is the common case. `now` stamps `created_at` so results stay
    /// reproducible under an injected clock.
    #[must_use]
    pub fn generate(
        &self,
        metrics: &SafetyMetrics,
        athlete_id: Uuid,
        now: DateTime<Utc>,
    ) -> Vec<SafetyAlert> {
        let breaches = rules::evaluate_with(&self.config, metrics);
        if !breaches.is_empty() {
            debug!(
                athlete_id = %athlete_id,
                breach_count = breaches.len(),
                "threshold rules fired"
            );
        }

        breaches
            .into_iter()
            .map(|breach| {
                SafetyAlert::new(
                    athlete_id,
                    breach.alert_type,
                    breach.severity,
                    breach.message,
                    now,
                )
            })
            .collect()
    }
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RpeTrend;
    use chrono::TimeZone;
    use spotter_core::models::{AlertSeverity, AlertType};

    fn distressed_metrics() -> SafetyMetrics {
        SafetyMetrics {
            average_energy: 3.0,
            average_soreness: 5.0,
            average_sleep: 5.0,
            average_mood: 2.0,
            average_session_rpe: 8.5,
            average_set_rpe: 8.0,
            rpe_trend: RpeTrend::Increasing,
            completed_sessions: 3,
            check_in_count: 3,
            set_log_count: 12,
            athlete_age: 14,
        }
    }

    #[test]
    fn alerts_carry_athlete_and_timestamp() {
        let athlete_id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0).unwrap();
        let generator = AlertGenerator::with_config(SafetyConfig::default());

        let alerts = generator.generate(&distressed_metrics(), athlete_id, now);

        assert!(!alerts.is_empty());
        for alert in &alerts {
            assert_eq!(alert.athlete_id, athlete_id);
            assert_eq!(alert.created_at, now);
            assert!(!alert.is_resolved);
        }
    }

    #[test]
    fn distressed_youth_window_yields_high_fatigue_and_critical_risk() {
        let generator = AlertGenerator::with_config(SafetyConfig::default());
        let alerts = generator.generate(&distressed_metrics(), Uuid::new_v4(), Utc::now());

        assert!(alerts
            .iter()
            .any(|a| a.alert_type == AlertType::Fatigue && a.severity >= AlertSeverity::High));
        assert!(alerts
            .iter()
            .any(|a| a.alert_type == AlertType::InjuryRisk
                && a.severity == AlertSeverity::Critical));
    }

    #[test]
    fn healthy_metrics_generate_nothing() {
        let metrics = SafetyMetrics {
            average_energy: 8.0,
            average_soreness: 1.5,
            average_sleep: 8.5,
            average_mood: 4.0,
            average_session_rpe: 6.0,
            average_set_rpe: 6.0,
            rpe_trend: RpeTrend::Stable,
            completed_sessions: 4,
            check_in_count: 7,
            set_log_count: 20,
            athlete_age: 16,
        };
        let generator = AlertGenerator::with_config(SafetyConfig::default());
        assert!(generator
            .generate(&metrics, Uuid::new_v4(), Utc::now())
            .is_empty());
    }
}
