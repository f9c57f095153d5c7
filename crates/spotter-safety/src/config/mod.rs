// ABOUTME: Central safety threshold configuration with environment overrides
// ABOUTME: Validated at load; resolved per athlete age band before rule evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Safety threshold configuration.
//!
//! One table holds every cutoff the rules consult. Deployments tune it with
//! `SPOTTER_SAFETY_*` environment variables; values are validated as a set so
//! an override can never invert the severity ladder. Rule evaluation never
//! reads the base table directly: it goes through
//! [`SafetyConfig::resolve_for_age`], which applies the age-band tightening.

/// Threshold tables grouped by signal
pub mod thresholds;

pub use thresholds::{
    AgeBand, AgeBandPolicy, EffortThresholds, SafetyThresholds, SleepThresholds,
    SorenessThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

static SAFETY_CONFIG: OnceLock<SafetyConfig> = OnceLock::new();

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A cutoff fell outside its scale
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Cutoffs that must escalate together are inverted
    #[error("Invalid cutoff ordering: {0}")]
    InvalidOrdering(&'static str),

    /// An environment override did not parse
    #[error("Parse error: {0}")]
    Parse(String),
}

/// The full safety threshold table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Soreness cutoffs (1-5 scale)
    pub soreness: SorenessThresholds,
    /// Sleep cutoffs (nightly hours)
    pub sleep: SleepThresholds,
    /// Energy and RPE-trend cutoffs
    pub effort: EffortThresholds,
    /// Age banding policy
    pub age_policy: AgeBandPolicy,
}

impl SafetyConfig {
    /// Get the global configuration, loading it on first access
    ///
    /// Invalid environment overrides fall back to defaults with a warning
    /// rather than refusing to start.
    pub fn global() -> &'static Self {
        SAFETY_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!(error = %e, "failed to load safety config, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override does not parse or the
    /// resulting table fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(raw) = env::var(name) {
            *target = raw
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        Self::apply_env_var("SPOTTER_SAFETY_SORENESS_ELEVATED", &mut self.soreness.elevated)?;
        Self::apply_env_var("SPOTTER_SAFETY_SORENESS_SEVERE", &mut self.soreness.severe)?;
        Self::apply_env_var("SPOTTER_SAFETY_SORENESS_EXTREME", &mut self.soreness.extreme)?;
        Self::apply_env_var("SPOTTER_SAFETY_SLEEP_LOW_HOURS", &mut self.sleep.low_hours)?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_SLEEP_VERY_LOW_HOURS",
            &mut self.sleep.very_low_hours,
        )?;
        Self::apply_env_var("SPOTTER_SAFETY_LOW_ENERGY", &mut self.effort.low_energy)?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_RPE_STABILITY_BAND",
            &mut self.effort.rpe_stability_band,
        )?;
        Self::apply_env_var("SPOTTER_SAFETY_JUNIOR_MAX_AGE", &mut self.age_policy.junior_max_age)?;
        Self::apply_env_var("SPOTTER_SAFETY_YOUTH_MAX_AGE", &mut self.age_policy.youth_max_age)?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_YOUTH_SORENESS_DELTA",
            &mut self.age_policy.youth_soreness_delta,
        )?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_JUNIOR_SORENESS_DELTA",
            &mut self.age_policy.junior_soreness_delta,
        )?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_YOUTH_SLEEP_DELTA",
            &mut self.age_policy.youth_sleep_delta,
        )?;
        Self::apply_env_var(
            "SPOTTER_SAFETY_JUNIOR_SLEEP_DELTA",
            &mut self.age_policy.junior_sleep_delta,
        )?;
        Ok(())
    }

    /// Validate the configuration as a set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a cutoff leaves its scale, an escalation
    /// ladder is inverted, or an age-band delta would push a resolved cutoff
    /// off its scale.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..=5.0).contains(&self.soreness.elevated) {
            return Err(ConfigError::ValueOutOfRange(
                "soreness.elevated must be within the 1-5 scale",
            ));
        }
        if self.soreness.elevated > self.soreness.severe
            || self.soreness.severe > self.soreness.extreme
        {
            return Err(ConfigError::InvalidOrdering(
                "soreness cutoffs must satisfy elevated <= severe <= extreme",
            ));
        }
        if self.soreness.extreme > 5.0 {
            return Err(ConfigError::ValueOutOfRange(
                "soreness.extreme must be within the 1-5 scale",
            ));
        }
        if !(0.0..=24.0).contains(&self.sleep.low_hours) {
            return Err(ConfigError::ValueOutOfRange(
                "sleep.low_hours must be within 0-24",
            ));
        }
        if self.sleep.very_low_hours > self.sleep.low_hours {
            return Err(ConfigError::InvalidOrdering(
                "sleep cutoffs must satisfy very_low_hours <= low_hours",
            ));
        }
        if !(1.0..=10.0).contains(&self.effort.low_energy) {
            return Err(ConfigError::ValueOutOfRange(
                "effort.low_energy must be within the 1-10 scale",
            ));
        }
        if self.effort.rpe_stability_band < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "effort.rpe_stability_band must not be negative",
            ));
        }
        if self.age_policy.junior_max_age >= self.age_policy.youth_max_age {
            return Err(ConfigError::InvalidOrdering(
                "age bands must satisfy junior_max_age < youth_max_age",
            ));
        }

        let max_soreness_delta = self
            .age_policy
            .junior_soreness_delta
            .max(self.age_policy.youth_soreness_delta);
        if max_soreness_delta < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "soreness deltas must not be negative",
            ));
        }
        if self.soreness.elevated - max_soreness_delta < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "soreness deltas would push the elevated cutoff below the scale",
            ));
        }

        let max_sleep_delta = self
            .age_policy
            .junior_sleep_delta
            .max(self.age_policy.youth_sleep_delta);
        if max_sleep_delta < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sleep deltas must not be negative",
            ));
        }
        // Keeps very_low < low for every band so the severity ladder holds
        // and sleep at the low boundary never alerts high.
        if self.sleep.very_low_hours + max_sleep_delta > self.sleep.low_hours {
            return Err(ConfigError::InvalidOrdering(
                "sleep deltas would raise very_low_hours above low_hours",
            ));
        }

        Ok(())
    }

    /// Resolve the cutoff table for one athlete age
    #[must_use]
    pub fn resolve_for_age(&self, age: u8) -> SafetyThresholds {
        let band = self.age_policy.band_for(age);
        let (soreness_delta, sleep_delta) = self.age_policy.deltas(band);

        SafetyThresholds {
            band,
            soreness: SorenessThresholds {
                elevated: self.soreness.elevated - soreness_delta,
                severe: self.soreness.severe - soreness_delta,
                extreme: self.soreness.extreme - soreness_delta,
            },
            sleep: SleepThresholds {
                low_hours: self.sleep.low_hours,
                very_low_hours: self.sleep.very_low_hours + sleep_delta,
            },
            effort: self.effort.clone(),
        }
    }
}
