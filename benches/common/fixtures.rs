// ABOUTME: Benchmark fixtures generating deterministic wellness and training records
// ABOUTME: Index-derived values keep runs reproducible without a seeded RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Benchmark fixtures generating deterministic wellness and training records.
//!
//! Values are derived from the record index so repeated runs measure the same
//! inputs without carrying a seeded RNG.

use chrono::{Duration, Utc};
use spotter_core::models::{CheckIn, SessionStatus, SessionSummary, SetLog};
use uuid::Uuid;

/// Predefined history depths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryDepth {
    /// One week of records - matches the rolling analysis window
    Week,
    /// One month of records - stresses aggregation beyond the window
    Month,
}

impl HistoryDepth {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

/// Generate daily check-ins with mixed but in-range self-report values
#[must_use]
pub fn generate_check_ins(athlete_id: Uuid, count: usize) -> Vec<CheckIn> {
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| CheckIn {
            id: Uuid::new_v4(),
            athlete_id,
            date: today - Duration::days(index as i64),
            mood: 2 + (index % 4) as u8,
            energy_level: 4 + ((index * 3) % 6) as u8,
            sleep_hours: 5.5 + ((index * 17) % 16) as f64 * 0.25,
            muscle_soreness: 1 + ((index * 7) % 5) as u8,
            created_at: Utc::now() - Duration::days(index as i64),
        })
        .collect()
}

/// Generate check-ins reporting maximal strain so every rule fires
#[must_use]
pub fn generate_strained_check_ins(athlete_id: Uuid, count: usize) -> Vec<CheckIn> {
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| CheckIn {
            id: Uuid::new_v4(),
            athlete_id,
            date: today - Duration::days(index as i64),
            mood: 2,
            energy_level: 3,
            sleep_hours: 5.0,
            muscle_soreness: 5,
            created_at: Utc::now() - Duration::days(index as i64),
        })
        .collect()
}

/// Generate completed sessions whose RPE climbs toward the present
#[must_use]
pub fn generate_sessions(athlete_id: Uuid, count: usize) -> Vec<SessionSummary> {
    let today = Utc::now().date_naive();
    (0..count)
        .map(|index| SessionSummary {
            id: Uuid::new_v4(),
            athlete_id,
            // index 0 is the most recent session; older sessions rate lower
            date: today - Duration::days((index * 2) as i64),
            status: SessionStatus::Completed,
            average_rpe: Some(9.0 - (index as f64 * 0.5).min(3.0)),
            created_at: Utc::now() - Duration::days((index * 2) as i64),
        })
        .collect()
}

/// Generate set logs cycling through a fixed exercise rotation
#[must_use]
pub fn generate_set_logs(session_id: Uuid, count: usize) -> Vec<SetLog> {
    const EXERCISES: &[&str] = &["Back Squat", "Bench Press", "Deadlift", "Overhead Press", "Row"];
    (0..count)
        .map(|index| SetLog {
            id: Uuid::new_v4(),
            session_id,
            exercise: EXERCISES[index % EXERCISES.len()].to_owned(),
            rpe: 5 + ((index * 3) % 5) as u8,
            weight_used: 40.0 + ((index * 5) % 60) as f64,
            reps_completed: 5 + (index % 6) as u32,
            created_at: Utc::now() - Duration::hours(index as i64),
        })
        .collect()
}
