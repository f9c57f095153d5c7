// ABOUTME: Database abstraction layer for the Spotter server
// ABOUTME: Plugin architecture with SQLite and PostgreSQL backends behind one trait

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{Athlete, CheckIn, SafetyAlert, SessionSummary, SetLog};

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Athletes
    // ================================

    /// Register a new athlete
    async fn create_athlete(&self, athlete: &Athlete) -> Result<Uuid>;

    /// Get an athlete by ID
    async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>>;

    /// List all athletes, newest first
    async fn list_athletes(&self) -> Result<Vec<Athlete>>;

    // ================================
    // Wellness Check-Ins
    // ================================

    /// Record a daily check-in
    async fn create_check_in(&self, check_in: &CheckIn) -> Result<Uuid>;

    /// Get the check-in recorded on a specific date, if any
    async fn check_in_on(&self, athlete_id: Uuid, date: NaiveDate) -> Result<Option<CheckIn>>;

    /// Get the most recent check-ins, newest first
    async fn recent_check_ins(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<CheckIn>>;

    // ================================
    // Training Sessions and Set Logs
    // ================================

    /// Record a training session
    async fn create_session(&self, session: &SessionSummary) -> Result<Uuid>;

    /// Get a training session by ID
    async fn get_session(&self, session_id: Uuid) -> Result<Option<SessionSummary>>;

    /// Get the most recent sessions, newest first
    async fn recent_sessions(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SessionSummary>>;

    /// Record a logged set within a session
    async fn create_set_log(&self, set_log: &SetLog) -> Result<Uuid>;

    /// Get all set logs for a session, oldest first
    async fn session_set_logs(&self, session_id: Uuid) -> Result<Vec<SetLog>>;

    /// Get the most recent set logs across sessions, newest first
    async fn recent_set_logs(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SetLog>>;

    // ================================
    // Safety Alerts
    // ================================

    /// Persist a batch of generated alerts atomically
    async fn insert_safety_alerts(&self, alerts: &[SafetyAlert]) -> Result<()>;

    /// List alerts, optionally including resolved ones, newest first
    async fn list_safety_alerts(
        &self,
        athlete_id: Uuid,
        include_resolved: bool,
    ) -> Result<Vec<SafetyAlert>>;

    /// Resolve alerts by ID, returning how many changed state
    async fn resolve_safety_alerts(
        &self,
        athlete_id: Uuid,
        alert_ids: &[Uuid],
        resolved_at: DateTime<Utc>,
    ) -> Result<u64>;
}
