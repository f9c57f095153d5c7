// ABOUTME: Daily wellness check-in model with validated self-report scales
// ABOUTME: One check-in per athlete per day; immutable once created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

use crate::constants::scales;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily wellness self-report
///
/// Check-ins are immutable once created and unique per athlete per day.
/// The safety pipeline reads them as a bounded most-recent-first window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Unique identifier
    pub id: Uuid,
    /// Owning athlete
    pub athlete_id: Uuid,
    /// Calendar day the report covers
    pub date: NaiveDate,
    /// Mood rating, 1 (poor) to 5 (great)
    pub mood: u8,
    /// Energy rating, 1 (exhausted) to 10 (fresh)
    pub energy_level: u8,
    /// Hours slept the previous night, 0.0 to 24.0
    pub sleep_hours: f64,
    /// Muscle soreness rating, 1 (none) to 5 (severe)
    pub muscle_soreness: u8,
    /// When the report was submitted
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    /// Create a new check-in after validating every self-report scale
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `ValueOutOfRange` when any rating falls
    /// outside its scale.
    pub fn new(
        athlete_id: Uuid,
        date: NaiveDate,
        mood: u8,
        energy_level: u8,
        sleep_hours: f64,
        muscle_soreness: u8,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        validate_rating("mood", mood)?;
        validate_ten_point("energy_level", energy_level)?;
        validate_rating("muscle_soreness", muscle_soreness)?;
        if !(0.0..=scales::SLEEP_HOURS_MAX).contains(&sleep_hours) {
            return Err(AppError::out_of_range(
                "sleep_hours",
                format!("{sleep_hours} (expected 0-{})", scales::SLEEP_HOURS_MAX),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            athlete_id,
            date,
            mood,
            energy_level,
            sleep_hours,
            muscle_soreness,
            created_at,
        })
    }
}

pub(crate) fn validate_rating(field: &str, value: u8) -> AppResult<()> {
    if (scales::RATING_MIN..=scales::RATING_MAX).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!(
                "{value} (expected {}-{})",
                scales::RATING_MIN,
                scales::RATING_MAX
            ),
        ))
    }
}

pub(crate) fn validate_ten_point(field: &str, value: u8) -> AppResult<()> {
    if (scales::TEN_POINT_MIN..=scales::TEN_POINT_MAX).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!(
                "{value} (expected {}-{})",
                scales::TEN_POINT_MIN,
                scales::TEN_POINT_MAX
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn try_check_in(mood: u8, energy: u8, sleep: f64, soreness: u8) -> AppResult<CheckIn> {
        CheckIn::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            mood,
            energy,
            sleep,
            soreness,
            Utc::now(),
        )
    }

    #[test]
    fn accepts_values_on_scale_boundaries() {
        assert!(try_check_in(1, 1, 0.0, 1).is_ok());
        assert!(try_check_in(5, 10, 24.0, 5).is_ok());
    }

    #[test]
    fn rejects_out_of_scale_ratings() {
        assert_eq!(
            try_check_in(0, 5, 8.0, 3).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            try_check_in(3, 11, 8.0, 3).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            try_check_in(3, 5, 25.0, 3).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            try_check_in(3, 5, 8.0, 6).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }
}
