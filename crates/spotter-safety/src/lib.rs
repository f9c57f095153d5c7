// ABOUTME: Safety analysis engine for youth strength training
// ABOUTME: Aggregates wellness windows, applies age-banded rules, gates sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

#![deny(unsafe_code)]

//! # Spotter Safety
//!
//! The analysis pipeline that turns recent wellness and training records into
//! actionable safety signals. Three stages, all pure functions over plain
//! data:
//!
//! 1. [`MetricAggregator`] condenses bounded record windows into
//!    [`SafetyMetrics`].
//! 2. [`AlertGenerator`] applies age-banded threshold rules and emits
//!    [`spotter_core::SafetyAlert`]s.
//! 3. [`SessionModifier`] turns the same rule evaluation into a
//!    proceed / reduce-intensity / rest recommendation.
//!
//! The alert generator and session modifier share one rule evaluation pass
//! ([`rules::evaluate_with`]), so a metrics window that produces a critical
//! alert can never simultaneously be cleared to proceed.
//!
//! Thresholds live in [`config::SafetyConfig`]: tunable via environment
//! variables, validated at load, and resolved per athlete age band.

/// Alert generation from rule breaches
pub mod alerts;
/// Tunable threshold configuration with age banding
pub mod config;
/// Metric aggregation over bounded record windows
pub mod metrics;
/// Session gating recommendations
pub mod modifier;
/// Threshold rule evaluation shared by alerts and session gating
pub mod rules;

pub use alerts::AlertGenerator;
pub use config::{AgeBand, ConfigError, SafetyConfig, SafetyThresholds};
pub use metrics::{MetricAggregator, RpeTrend, SafetyMetrics};
pub use modifier::{SessionModification, SessionModifier, SessionRecommendation};
pub use rules::RuleBreach;
