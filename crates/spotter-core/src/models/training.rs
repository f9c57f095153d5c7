// ABOUTME: Training session summaries and per-set logs
// ABOUTME: Sessions carry an optional athlete-rated session RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

use crate::errors::{AppError, AppResult};
use crate::models::wellness::validate_ten_point;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Scheduled but not started
    Planned,
    /// Currently underway
    InProgress,
    /// Finished; eligible for a session RPE rating
    Completed,
    /// Dropped without training
    Skipped,
}

impl SessionStatus {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "skipped" => Ok(Self::Skipped),
            other => Err(AppError::invalid_input(format!(
                "Unknown session status '{other}'"
            ))),
        }
    }
}

/// Summary record produced when a session's outcome is logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unique identifier
    pub id: Uuid,
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Calendar day the session took place
    pub date: NaiveDate,
    /// Lifecycle state
    pub status: SessionStatus,
    /// Session-level rating of perceived exertion, 1.0-10.0; absent when the
    /// athlete did not rate the session
    pub average_rpe: Option<f64>,
    /// When the summary was recorded
    pub created_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Create a session summary, validating the optional RPE rating
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `ValueOutOfRange` when `average_rpe` falls
    /// outside 1.0-10.0.
    pub fn new(
        athlete_id: Uuid,
        date: NaiveDate,
        status: SessionStatus,
        average_rpe: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if let Some(rpe) = average_rpe {
            if !(1.0..=10.0).contains(&rpe) {
                return Err(AppError::out_of_range(
                    "average_rpe",
                    format!("{rpe} (expected 1-10)"),
                ));
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            athlete_id,
            date,
            status,
            average_rpe,
            created_at,
        })
    }
}

/// One performed set inside a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    /// Unique identifier
    pub id: Uuid,
    /// Session the set belongs to
    pub session_id: Uuid,
    /// Exercise name as logged by the athlete
    pub exercise: String,
    /// Rating of perceived exertion for the set, 1-10
    pub rpe: u8,
    /// Load moved, in kilograms
    pub weight_used: f64,
    /// Repetitions completed
    pub reps_completed: u32,
    /// When the set was logged
    pub created_at: DateTime<Utc>,
}

impl SetLog {
    /// Create a set log, validating RPE and load
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `ValueOutOfRange` when `rpe` is off the
    /// 1-10 scale or `weight_used` is negative.
    pub fn new(
        session_id: Uuid,
        exercise: String,
        rpe: u8,
        weight_used: f64,
        reps_completed: u32,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        validate_ten_point("rpe", rpe)?;
        if weight_used < 0.0 {
            return Err(AppError::out_of_range(
                "weight_used",
                format!("{weight_used} (expected >= 0)"),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            session_id,
            exercise,
            rpe,
            weight_used,
            reps_completed,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_round_trips_through_text() {
        for status in [
            SessionStatus::Planned,
            SessionStatus::InProgress,
            SessionStatus::Completed,
            SessionStatus::Skipped,
        ] {
            assert_eq!(status.as_str().parse::<SessionStatus>().unwrap(), status);
        }
        assert!("paused".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn session_rpe_must_stay_on_scale() {
        let athlete_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();

        assert!(SessionSummary::new(
            athlete_id,
            date,
            SessionStatus::Completed,
            Some(10.0),
            Utc::now()
        )
        .is_ok());
        assert!(SessionSummary::new(
            athlete_id,
            date,
            SessionStatus::Completed,
            Some(10.5),
            Utc::now()
        )
        .is_err());
        assert!(
            SessionSummary::new(athlete_id, date, SessionStatus::Skipped, None, Utc::now()).is_ok()
        );
    }

    #[test]
    fn set_log_rejects_negative_weight() {
        let result = SetLog::new(
            Uuid::new_v4(),
            "back squat".into(),
            8,
            -20.0,
            5,
            Utc::now(),
        );
        assert!(result.is_err());
    }
}
