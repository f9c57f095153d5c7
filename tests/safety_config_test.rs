// ABOUTME: Integration tests for safety threshold configuration loading
// ABOUTME: Covers environment overrides, parse failures, and set-level validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;

use spotter_safety::config::{AgeBand, ConfigError, SafetyConfig};

#[test]
#[serial]
fn test_env_overrides_apply_to_the_loaded_table() {
    env::set_var("SPOTTER_SAFETY_SORENESS_ELEVATED", "3.5");
    env::set_var("SPOTTER_SAFETY_SLEEP_LOW_HOURS", "7.5");

    let config = SafetyConfig::load().unwrap();

    env::remove_var("SPOTTER_SAFETY_SORENESS_ELEVATED");
    env::remove_var("SPOTTER_SAFETY_SLEEP_LOW_HOURS");

    assert!((config.soreness.elevated - 3.5).abs() < f64::EPSILON);
    assert!((config.sleep.low_hours - 7.5).abs() < f64::EPSILON);
    // Untouched cutoffs keep their defaults
    assert!((config.soreness.severe - 4.5).abs() < f64::EPSILON);
    assert!((config.effort.low_energy - 4.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    env::set_var("SPOTTER_SAFETY_SORENESS_ELEVATED", "abc");

    let result = SafetyConfig::load();

    env::remove_var("SPOTTER_SAFETY_SORENESS_ELEVATED");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_cannot_invert_the_soreness_ladder() {
    // 4.9 is on scale but sits above the default severe cutoff of 4.5
    env::set_var("SPOTTER_SAFETY_SORENESS_ELEVATED", "4.9");

    let result = SafetyConfig::load();

    env::remove_var("SPOTTER_SAFETY_SORENESS_ELEVATED");

    assert!(matches!(result, Err(ConfigError::InvalidOrdering(_))));
}

#[test]
#[serial]
fn test_custom_youth_delta_changes_age_resolution() {
    env::set_var("SPOTTER_SAFETY_YOUTH_SORENESS_DELTA", "0.75");

    let config = SafetyConfig::load().unwrap();

    env::remove_var("SPOTTER_SAFETY_YOUTH_SORENESS_DELTA");

    let youth = config.resolve_for_age(15);
    assert_eq!(youth.band, AgeBand::Youth);
    assert!((youth.soreness.elevated - 3.25).abs() < f64::EPSILON);

    // Adults are untouched by the youth delta
    let adult = config.resolve_for_age(20);
    assert!((adult.soreness.elevated - 4.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_band_edges_can_be_moved_by_override() {
    env::set_var("SPOTTER_SAFETY_YOUTH_MAX_AGE", "19");

    let config = SafetyConfig::load().unwrap();

    env::remove_var("SPOTTER_SAFETY_YOUTH_MAX_AGE");

    assert_eq!(config.resolve_for_age(19).band, AgeBand::Youth);
    assert_eq!(config.resolve_for_age(20).band, AgeBand::Adult);
}

#[test]
#[serial]
fn test_sleep_delta_override_cannot_cross_the_low_boundary() {
    // A 1.5h junior delta would lift very_low past the 7.0h low boundary
    env::set_var("SPOTTER_SAFETY_JUNIOR_SLEEP_DELTA", "1.5");

    let result = SafetyConfig::load();

    env::remove_var("SPOTTER_SAFETY_JUNIOR_SLEEP_DELTA");

    assert!(matches!(result, Err(ConfigError::InvalidOrdering(_))));
}
