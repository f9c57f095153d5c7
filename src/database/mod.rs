// ABOUTME: SQLite database management for athletes, training data, and safety alerts
// ABOUTME: Owns the connection pool, schema migrations, and per-table operation modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! # Database Management
//!
//! SQLite-backed storage for the Spotter server. Each table gets its
//! own module with an `impl Database` block; this module owns the pool
//! and runs migrations in dependency order.

mod alerts;
mod athletes;
mod sessions;
mod wellness;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for athlete and training data storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection
    ///
    /// Callers run [`Self::migrate`] before first use; the server binary
    /// does this when `AUTO_MIGRATE` is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.starts_with("sqlite::memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_athletes().await?;
        self.migrate_wellness().await?;
        self.migrate_sessions().await?;
        self.migrate_alerts().await?;
        Ok(())
    }
}
