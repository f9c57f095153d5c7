// ABOUTME: Threshold tables for the safety rules, grouped by signal
// ABOUTME: Age banding tightens cutoffs for youth and junior athletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

use serde::{Deserialize, Serialize};

/// Soreness cutoffs on the 1-5 self-report scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SorenessThresholds {
    /// Mean soreness at which a fatigue alert fires at medium severity
    pub elevated: f64,
    /// Mean soreness at which the fatigue alert escalates to high
    pub severe: f64,
    /// Mean soreness treated as maximal when checking compound injury risk
    pub extreme: f64,
}

impl Default for SorenessThresholds {
    fn default() -> Self {
        Self {
            elevated: 4.0,
            severe: 4.5,
            extreme: 5.0,
        }
    }
}

/// Sleep cutoffs in nightly hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepThresholds {
    /// Below this mean an athlete is under-sleeping (medium severity)
    ///
    /// Band-invariant: sleep at or above this never alerts at any age.
    pub low_hours: f64,
    /// Below this mean the sleep alert escalates to high severity
    pub very_low_hours: f64,
}

impl Default for SleepThresholds {
    fn default() -> Self {
        Self {
            low_hours: 7.0,
            very_low_hours: 6.0,
        }
    }
}

/// Effort and energy cutoffs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortThresholds {
    /// Energy self-report (1-10) at or below which the athlete counts as depleted
    pub low_energy: f64,
    /// Absolute session-RPE gap between window halves inside which the trend
    /// reads stable
    pub rpe_stability_band: f64,
}

impl Default for EffortThresholds {
    fn default() -> Self {
        Self {
            low_energy: 4.0,
            rpe_stability_band: 0.5,
        }
    }
}

/// Age bands used by threshold resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Age 13 and under: tightest cutoffs
    Junior,
    /// Age 14-17: tightened cutoffs
    Youth,
    /// Age 18 and over: base cutoffs
    Adult,
}

/// Per-band tightening applied on top of the base cutoffs
///
/// Younger athletes alert earlier: soreness cutoffs shift down by the band
/// delta and the very-low-sleep escalation point shifts up. The low-sleep
/// boundary itself is deliberately left alone so a full night's sleep reads
/// clean at every age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBandPolicy {
    /// Oldest age (inclusive) counted as junior
    pub junior_max_age: u8,
    /// Oldest age (inclusive) counted as youth
    pub youth_max_age: u8,
    /// Soreness cutoff reduction for the youth band
    pub youth_soreness_delta: f64,
    /// Soreness cutoff reduction for the junior band
    pub junior_soreness_delta: f64,
    /// Hours added to the very-low-sleep escalation point for the youth band
    pub youth_sleep_delta: f64,
    /// Hours added to the very-low-sleep escalation point for the junior band
    pub junior_sleep_delta: f64,
}

impl Default for AgeBandPolicy {
    fn default() -> Self {
        Self {
            junior_max_age: 13,
            youth_max_age: 17,
            youth_soreness_delta: 0.25,
            junior_soreness_delta: 0.5,
            youth_sleep_delta: 0.25,
            junior_sleep_delta: 0.5,
        }
    }
}

impl AgeBandPolicy {
    /// Band for an athlete age; total over all of `u8`
    #[must_use]
    pub const fn band_for(&self, age: u8) -> AgeBand {
        if age <= self.junior_max_age {
            AgeBand::Junior
        } else if age <= self.youth_max_age {
            AgeBand::Youth
        } else {
            AgeBand::Adult
        }
    }

    /// Cutoff deltas `(soreness, sleep)` for a band
    #[must_use]
    pub const fn deltas(&self, band: AgeBand) -> (f64, f64) {
        match band {
            AgeBand::Junior => (self.junior_soreness_delta, self.junior_sleep_delta),
            AgeBand::Youth => (self.youth_soreness_delta, self.youth_sleep_delta),
            AgeBand::Adult => (0.0, 0.0),
        }
    }
}

/// Fully resolved cutoffs for one athlete age
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyThresholds {
    /// Age band the resolution landed in
    pub band: AgeBand,
    /// Soreness cutoffs after band tightening
    pub soreness: SorenessThresholds,
    /// Sleep cutoffs after band tightening
    pub sleep: SleepThresholds,
    /// Effort cutoffs (band-invariant)
    pub effort: EffortThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_resolution_covers_all_ages() {
        let policy = AgeBandPolicy::default();
        assert_eq!(policy.band_for(0), AgeBand::Junior);
        assert_eq!(policy.band_for(13), AgeBand::Junior);
        assert_eq!(policy.band_for(14), AgeBand::Youth);
        assert_eq!(policy.band_for(17), AgeBand::Youth);
        assert_eq!(policy.band_for(18), AgeBand::Adult);
        assert_eq!(policy.band_for(u8::MAX), AgeBand::Adult);
    }

    #[test]
    fn adult_band_has_no_deltas() {
        let policy = AgeBandPolicy::default();
        assert_eq!(policy.deltas(AgeBand::Adult), (0.0, 0.0));
    }
}
