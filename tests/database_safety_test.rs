// ABOUTME: Integration tests for the database layer through the DatabaseProvider trait
// ABOUTME: Covers history ordering, listing limits, and the alert resolution lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use spotter_server::database_plugins::factory::{Database, DatabaseType};
use spotter_server::database_plugins::DatabaseProvider;
use spotter_server::models::{
    AlertSeverity, AlertType, Athlete, CheckIn, SafetyAlert, SessionStatus, SessionSummary, SetLog,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn check_in_on_date(athlete_id: Uuid, day: u32) -> CheckIn {
    CheckIn::new(athlete_id, date(day), 3, 7, 7.5, 2, common::test_instant()).unwrap()
}

fn completed_session(athlete_id: Uuid, day: u32) -> SessionSummary {
    SessionSummary::new(
        athlete_id,
        date(day),
        SessionStatus::Completed,
        Some(7.0),
        common::test_instant(),
    )
    .unwrap()
}

fn fatigue_alert(athlete_id: Uuid, minutes_after_base: i64) -> SafetyAlert {
    SafetyAlert::new(
        athlete_id,
        AlertType::Fatigue,
        AlertSeverity::High,
        "Soreness has been elevated all week".to_owned(),
        common::test_instant() + Duration::minutes(minutes_after_base),
    )
}

// ============================================================================
// Athletes
// ============================================================================

#[tokio::test]
async fn test_athlete_roundtrip_and_newest_first_listing() -> Result<()> {
    let database = common::create_test_database().await?;

    let earlier = Athlete::new(
        "Maya Lindqvist".to_owned(),
        common::youth_birthdate(),
        common::test_instant(),
    );
    let later = Athlete::new(
        "Jonas Weber".to_owned(),
        common::adult_birthdate(),
        common::test_instant() + Duration::minutes(1),
    );
    database.create_athlete(&earlier).await?;
    database.create_athlete(&later).await?;

    let fetched = database.get_athlete(earlier.id).await?.unwrap();
    assert_eq!(fetched, earlier);
    assert!(database.get_athlete(Uuid::new_v4()).await?.is_none());

    let listing = database.list_athletes().await?;
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].id, later.id);
    assert_eq!(listing[1].id, earlier.id);
    Ok(())
}

// ============================================================================
// Check-in history
// ============================================================================

#[tokio::test]
async fn test_check_in_history_is_date_ordered_and_limited() -> Result<()> {
    let database = common::create_test_database().await?;
    let athlete =
        common::create_test_athlete(&database, "Maya Lindqvist", common::youth_birthdate()).await?;

    // Inserted out of order; reads sort by date regardless
    for day in [10, 14, 12] {
        database
            .create_check_in(&check_in_on_date(athlete.id, day))
            .await?;
    }

    let recent = database.recent_check_ins(athlete.id, 10).await?;
    let days: Vec<u32> = recent.iter().map(|c| c.date.day()).collect();
    assert_eq!(days, vec![14, 12, 10]);

    let limited = database.recent_check_ins(athlete.id, 2).await?;
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].date.day(), 14);

    assert!(database.check_in_on(athlete.id, date(12)).await?.is_some());
    assert!(database.check_in_on(athlete.id, date(13)).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_check_in_date_violates_uniqueness() -> Result<()> {
    let database = common::create_test_database().await?;
    let athlete =
        common::create_test_athlete(&database, "Maya Lindqvist", common::youth_birthdate()).await?;

    database
        .create_check_in(&check_in_on_date(athlete.id, 14))
        .await?;
    let duplicate = database
        .create_check_in(&check_in_on_date(athlete.id, 14))
        .await;
    assert!(duplicate.is_err());
    Ok(())
}

// ============================================================================
// Sessions and set logs
// ============================================================================

#[tokio::test]
async fn test_session_history_and_set_log_ordering() -> Result<()> {
    let database = common::create_test_database().await?;
    let athlete =
        common::create_test_athlete(&database, "Jonas Weber", common::adult_birthdate()).await?;

    for day in [9, 13, 11] {
        database
            .create_session(&completed_session(athlete.id, day))
            .await?;
    }
    let sessions = database.recent_sessions(athlete.id, 10).await?;
    let days: Vec<u32> = sessions.iter().map(|s| s.date.day()).collect();
    assert_eq!(days, vec![13, 11, 9]);
    assert_eq!(database.recent_sessions(athlete.id, 1).await?.len(), 1);

    let newest = &sessions[0];
    assert!(database.get_session(newest.id).await?.is_some());
    assert!(database.get_session(Uuid::new_v4()).await?.is_none());

    // Set logs within a session read back in insertion order
    for (minutes, exercise) in [(0, "Back Squat"), (4, "Bench Press"), (8, "Deadlift")] {
        let set_log = SetLog::new(
            newest.id,
            exercise.to_owned(),
            8,
            80.0,
            5,
            common::test_instant() + Duration::minutes(minutes),
        )?;
        database.create_set_log(&set_log).await?;
    }
    let in_session = database.session_set_logs(newest.id).await?;
    let exercises: Vec<&str> = in_session.iter().map(|s| s.exercise.as_str()).collect();
    assert_eq!(exercises, vec!["Back Squat", "Bench Press", "Deadlift"]);

    // The athlete-wide view is newest first and respects the limit
    let recent = database.recent_set_logs(athlete.id, 2).await?;
    let exercises: Vec<&str> = recent.iter().map(|s| s.exercise.as_str()).collect();
    assert_eq!(exercises, vec!["Deadlift", "Bench Press"]);
    Ok(())
}

#[tokio::test]
async fn test_recent_set_logs_stay_scoped_to_the_athlete() -> Result<()> {
    let database = common::create_test_database().await?;
    let first =
        common::create_test_athlete(&database, "Maya Lindqvist", common::youth_birthdate()).await?;
    let second =
        common::create_test_athlete(&database, "Jonas Weber", common::adult_birthdate()).await?;

    let first_session = completed_session(first.id, 13);
    let second_session = completed_session(second.id, 13);
    database.create_session(&first_session).await?;
    database.create_session(&second_session).await?;

    let foreign = SetLog::new(
        second_session.id,
        "Overhead Press".to_owned(),
        7,
        40.0,
        8,
        common::test_instant(),
    )?;
    database.create_set_log(&foreign).await?;

    assert!(database.recent_set_logs(first.id, 10).await?.is_empty());
    assert_eq!(database.recent_set_logs(second.id, 10).await?.len(), 1);
    Ok(())
}

// ============================================================================
// Alert lifecycle
// ============================================================================

#[tokio::test]
async fn test_alert_resolution_counts_only_state_changes() -> Result<()> {
    let database = common::create_test_database().await?;
    let athlete =
        common::create_test_athlete(&database, "Maya Lindqvist", common::youth_birthdate()).await?;

    let older = fatigue_alert(athlete.id, 0);
    let newer = fatigue_alert(athlete.id, 5);
    database
        .insert_safety_alerts(&[older.clone(), newer.clone()])
        .await?;

    let open = database.list_safety_alerts(athlete.id, false).await?;
    assert_eq!(open.len(), 2);
    assert_eq!(open[0].id, newer.id, "listing is newest first");

    let resolution_time = common::test_instant() + Duration::hours(1);
    let resolved = database
        .resolve_safety_alerts(athlete.id, &[older.id], resolution_time)
        .await?;
    assert_eq!(resolved, 1);

    let still_open = database.list_safety_alerts(athlete.id, false).await?;
    assert_eq!(still_open.len(), 1);
    assert_eq!(still_open[0].id, newer.id);

    let everything = database.list_safety_alerts(athlete.id, true).await?;
    let closed = everything.iter().find(|a| a.id == older.id).unwrap();
    assert!(closed.is_resolved);
    assert_eq!(closed.resolved_at, Some(resolution_time));

    // Re-resolving later counts nothing and keeps the original timestamp
    let re_resolved = database
        .resolve_safety_alerts(athlete.id, &[older.id], resolution_time + Duration::hours(1))
        .await?;
    assert_eq!(re_resolved, 0);
    let everything = database.list_safety_alerts(athlete.id, true).await?;
    let closed = everything.iter().find(|a| a.id == older.id).unwrap();
    assert_eq!(closed.resolved_at, Some(resolution_time));

    // Unknown IDs contribute nothing
    let unknown = database
        .resolve_safety_alerts(athlete.id, &[Uuid::new_v4()], resolution_time)
        .await?;
    assert_eq!(unknown, 0);

    // An empty batch insert is a no-op rather than an error
    database.insert_safety_alerts(&[]).await?;
    Ok(())
}

#[tokio::test]
async fn test_alert_resolution_is_scoped_to_the_owning_athlete() -> Result<()> {
    let database = common::create_test_database().await?;
    let owner =
        common::create_test_athlete(&database, "Maya Lindqvist", common::youth_birthdate()).await?;
    let other =
        common::create_test_athlete(&database, "Jonas Weber", common::adult_birthdate()).await?;

    let alert = fatigue_alert(owner.id, 0);
    database.insert_safety_alerts(&[alert.clone()]).await?;

    let cross_athlete = database
        .resolve_safety_alerts(other.id, &[alert.id], common::test_instant())
        .await?;
    assert_eq!(cross_athlete, 0);

    assert_eq!(database.list_safety_alerts(owner.id, false).await?.len(), 1);
    assert!(database.list_safety_alerts(other.id, true).await?.is_empty());
    Ok(())
}

// ============================================================================
// Backend identity
// ============================================================================

#[tokio::test]
async fn test_backend_identifies_as_sqlite_and_migrations_are_idempotent() -> Result<()> {
    let database = common::create_test_database().await?;

    assert_eq!(database.database_type(), DatabaseType::SQLite);
    assert_eq!(database.backend_info(), "SQLite (Local Development)");

    // The harness already migrated once; a second run must be harmless
    database.migrate().await?;
    Ok(())
}

#[tokio::test]
async fn test_file_backed_database_persists_across_connections() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite:{}", dir.path().join("spotter-test.db").display());

    let athlete_id = {
        let database = Database::new(&url).await?;
        database.migrate().await?;
        let athlete = Athlete::new(
            "Maya Lindqvist".to_owned(),
            common::youth_birthdate(),
            common::test_instant(),
        );
        database.create_athlete(&athlete).await?
    };

    // A fresh connection sees the schema and data written by the first
    let reopened = Database::new(&url).await?;
    let stored = reopened.get_athlete(athlete_id).await?;
    assert_eq!(stored.unwrap().display_name, "Maya Lindqvist");
    Ok(())
}
