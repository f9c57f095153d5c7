// ABOUTME: SQLite backend for the DatabaseProvider trait
// ABOUTME: Wraps the core SQLite Database to satisfy the provider interface

//! SQLite database implementation
//!
//! Wraps the core SQLite database functionality to implement the
//! `DatabaseProvider` trait.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Athlete, CheckIn, SafetyAlert, SessionSummary, SetLog};

use super::DatabaseProvider;

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database for pool-level operations
    #[must_use]
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_athlete(&self, athlete: &Athlete) -> Result<Uuid> {
        self.inner.create_athlete(athlete).await
    }

    async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>> {
        self.inner.get_athlete(athlete_id).await
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        self.inner.list_athletes().await
    }

    async fn create_check_in(&self, check_in: &CheckIn) -> Result<Uuid> {
        self.inner.create_check_in(check_in).await
    }

    async fn check_in_on(&self, athlete_id: Uuid, date: NaiveDate) -> Result<Option<CheckIn>> {
        self.inner.check_in_on(athlete_id, date).await
    }

    async fn recent_check_ins(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<CheckIn>> {
        self.inner.recent_check_ins(athlete_id, limit).await
    }

    async fn create_session(&self, session: &SessionSummary) -> Result<Uuid> {
        self.inner.create_session(session).await
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<SessionSummary>> {
        self.inner.get_session(session_id).await
    }

    async fn recent_sessions(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SessionSummary>> {
        self.inner.recent_sessions(athlete_id, limit).await
    }

    async fn create_set_log(&self, set_log: &SetLog) -> Result<Uuid> {
        self.inner.create_set_log(set_log).await
    }

    async fn session_set_logs(&self, session_id: Uuid) -> Result<Vec<SetLog>> {
        self.inner.session_set_logs(session_id).await
    }

    async fn recent_set_logs(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SetLog>> {
        self.inner.recent_set_logs(athlete_id, limit).await
    }

    async fn insert_safety_alerts(&self, alerts: &[SafetyAlert]) -> Result<()> {
        self.inner.insert_safety_alerts(alerts).await
    }

    async fn list_safety_alerts(
        &self,
        athlete_id: Uuid,
        include_resolved: bool,
    ) -> Result<Vec<SafetyAlert>> {
        self.inner.list_safety_alerts(athlete_id, include_resolved).await
    }

    async fn resolve_safety_alerts(
        &self,
        athlete_id: Uuid,
        alert_ids: &[Uuid],
        resolved_at: DateTime<Utc>,
    ) -> Result<u64> {
        self.inner
            .resolve_safety_alerts(athlete_id, alert_ids, resolved_at)
            .await
    }
}
