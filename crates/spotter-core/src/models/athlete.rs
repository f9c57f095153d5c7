// ABOUTME: Athlete profile model and age derivation
// ABOUTME: Age in whole years is computed against an injected reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An athlete tracked by the platform
///
/// The birthdate is stored rather than the age so the safety pipeline can
/// derive the age against the injected clock instead of a value that goes
/// stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    /// Unique identifier
    pub id: Uuid,
    /// Display name shown in alert messages and listings
    pub display_name: String,
    /// Date of birth, used for age-banded safety thresholds
    pub birthdate: NaiveDate,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Athlete {
    /// Create a new athlete profile with a fresh id
    #[must_use]
    pub fn new(display_name: String, birthdate: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name,
            birthdate,
            created_at,
        }
    }

    /// Age in whole years on the given date
    ///
    /// Counts completed years: the year ticks over on the birthday itself.
    /// Saturates at zero for birthdates in the future and at `u8::MAX` for
    /// implausibly old profiles, so downstream banding stays total.
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> u8 {
        let mut years = date.year() - self.birthdate.year();
        if (date.month(), date.day()) < (self.birthdate.month(), self.birthdate.day()) {
            years -= 1;
        }
        years.clamp(0, i32::from(u8::MAX)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete_born(year: i32, month: u32, day: u32) -> Athlete {
        Athlete::new(
            "Test Athlete".into(),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn age_ticks_on_birthday() {
        let athlete = athlete_born(2011, 6, 15);
        let day_before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        assert_eq!(athlete.age_on(day_before), 13);
        assert_eq!(athlete.age_on(birthday), 14);
    }

    #[test]
    fn future_birthdate_saturates_to_zero() {
        let athlete = athlete_born(2030, 1, 1);
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(athlete.age_on(today), 0);
    }
}
