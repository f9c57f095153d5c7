// ABOUTME: Aggregates bounded record windows into one SafetyMetrics snapshot
// ABOUTME: Pure computation: no clock, no storage, empty windows mean zeros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Metric aggregation over recent wellness and training records.
//!
//! Input slices are most-recent-first and already bounded by the caller
//! (`analysis_window` for a full run, `status_window` for the rolling
//! summary). Aggregation is a pure function: calling it twice with the same
//! inputs yields the same snapshot.

use crate::config::SafetyConfig;
use serde::{Deserialize, Serialize};
use spotter_core::models::{CheckIn, SessionStatus, SessionSummary, SetLog};

/// Direction of the session-RPE trend across the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpeTrend {
    /// Recent sessions rated harder than older ones
    Increasing,
    /// Recent sessions rated easier than older ones
    Decreasing,
    /// No meaningful change, or fewer than two rated sessions
    Stable,
}

/// Condensed view of an athlete's recent state
///
/// Mean fields are `0.0` when their source window is empty; the paired
/// count fields let consumers tell "reported zero" apart from "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyMetrics {
    /// Mean energy rating (1-10) over the check-in window
    pub average_energy: f64,
    /// Mean muscle soreness (1-5) over the check-in window
    pub average_soreness: f64,
    /// Mean nightly sleep hours over the check-in window
    pub average_sleep: f64,
    /// Mean mood rating (1-5) over the check-in window
    pub average_mood: f64,
    /// Mean session RPE over sessions that carry a rating
    pub average_session_rpe: f64,
    /// Mean per-set RPE over the set-log window
    pub average_set_rpe: f64,
    /// Session-RPE direction across the window
    pub rpe_trend: RpeTrend,
    /// Completed sessions inside the window (recent training frequency)
    pub completed_sessions: usize,
    /// Check-ins that fed the means
    pub check_in_count: usize,
    /// Set logs that fed the means
    pub set_log_count: usize,
    /// Athlete age threaded through for downstream threshold resolution
    pub athlete_age: u8,
}

/// Aggregates record windows into [`SafetyMetrics`]
#[derive(Debug, Clone)]
pub struct MetricAggregator {
    config: SafetyConfig,
}

impl MetricAggregator {
    /// Aggregator backed by the global threshold configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SafetyConfig::global().clone(),
        }
    }

    /// Aggregator with an explicit configuration (tests, simulations)
    #[must_use]
    pub const fn with_config(config: SafetyConfig) -> Self {
        Self { config }
    }

    /// Aggregate one set of record windows
    ///
    /// `check_ins`, `sessions`, and `set_logs` are most-recent-first. `age`
    /// is carried through untouched; the aggregator never branches on it.
    #[must_use]
    pub fn analyze(
        &self,
        check_ins: &[CheckIn],
        sessions: &[SessionSummary],
        set_logs: &[SetLog],
        age: u8,
    ) -> SafetyMetrics {
        SafetyMetrics {
            average_energy: mean(check_ins.iter().map(|c| f64::from(c.energy_level))),
            average_soreness: mean(check_ins.iter().map(|c| f64::from(c.muscle_soreness))),
            average_sleep: mean(check_ins.iter().map(|c| c.sleep_hours)),
            average_mood: mean(check_ins.iter().map(|c| f64::from(c.mood))),
            average_session_rpe: mean(sessions.iter().filter_map(|s| s.average_rpe)),
            average_set_rpe: mean(set_logs.iter().map(|s| f64::from(s.rpe))),
            rpe_trend: self.rpe_trend(sessions),
            completed_sessions: sessions
                .iter()
                .filter(|s| s.status == SessionStatus::Completed)
                .count(),
            check_in_count: check_ins.len(),
            set_log_count: set_logs.len(),
            athlete_age: age,
        }
    }

    /// Session-RPE direction: mean of the recent half against the older half
    ///
    /// The most-recent-first list splits at `len / 2`, so with an odd count
    /// the older half is the larger. Unrated sessions are skipped; fewer
    /// than two rated sessions reads stable.
    fn rpe_trend(&self, sessions: &[SessionSummary]) -> RpeTrend {
        let rated: Vec<f64> = sessions.iter().filter_map(|s| s.average_rpe).collect();
        if rated.len() < 2 {
            return RpeTrend::Stable;
        }

        let (recent, older) = rated.split_at(rated.len() / 2);
        let delta = mean(recent.iter().copied()) - mean(older.iter().copied());

        if delta.abs() <= self.config.effort.rpe_stability_band {
            RpeTrend::Stable
        } else if delta > 0.0 {
            RpeTrend::Increasing
        } else {
            RpeTrend::Decreasing
        }
    }
}

impl Default for MetricAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
