// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, resource, and athlete creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `spotter_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use spotter_server::{
    clock::FixedClock,
    config::{DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig},
    database_plugins::{factory::Database, DatabaseProvider},
    models::Athlete,
    server::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The instant every fixed test clock starts at
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, 8, 0, 0).unwrap()
}

/// Standard test database setup on an in-memory SQLite instance
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    database.migrate().await?;
    Ok(Arc::new(database))
}

/// Server configuration suitable for tests (no env reads)
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        http_port: 8080,
        log_level: LogLevel::Info,
        environment: Environment::Testing,
        cors_allowed_origins: "*".to_owned(),
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
    }
}

/// Create test `ServerResources` over a fresh in-memory database
///
/// The returned clock is the same instance the resources hold, so tests
/// can advance time and observe the effect through the routes.
pub async fn create_test_server_resources() -> Result<(Arc<ServerResources>, Arc<FixedClock>)> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    database.migrate().await?;

    let clock = Arc::new(FixedClock::new(test_instant()));
    let resources = Arc::new(ServerResources::new(
        database,
        Arc::new(test_server_config()),
        clock.clone(),
    ));

    Ok((resources, clock))
}

/// Create and store an athlete, returning the stored record
pub async fn create_test_athlete(
    database: &Database,
    display_name: &str,
    birthdate: NaiveDate,
) -> Result<Athlete> {
    let athlete = Athlete::new(display_name.to_owned(), birthdate, test_instant());
    database.create_athlete(&athlete).await?;
    Ok(athlete)
}

/// Birthdate that makes an athlete 14 on [`test_instant`] (youth band)
pub fn youth_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 3, 22).unwrap()
}

/// Birthdate that makes an athlete 12 on [`test_instant`] (junior band)
pub fn junior_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 1, 5).unwrap()
}

/// Birthdate that makes an athlete 28 on [`test_instant`] (adult band)
pub fn adult_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1997, 2, 10).unwrap()
}
