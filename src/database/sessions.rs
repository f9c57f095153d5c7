// ABOUTME: Training session and set log database operations
// ABOUTME: Handles session inserts, set logging, and recent-history queries

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::models::{SessionSummary, SetLog};

use super::Database;

impl Database {
    /// Create the training sessions and set logs tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_sessions(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_sessions (
                id TEXT PRIMARY KEY,
                athlete_id TEXT NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                status TEXT NOT NULL
                    CHECK (status IN ('planned', 'in_progress', 'completed', 'skipped')),
                average_rpe REAL CHECK (average_rpe IS NULL OR (average_rpe BETWEEN 1 AND 10)),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS set_logs (
                id TEXT PRIMARY KEY,
                session_id TEXT NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                exercise TEXT NOT NULL,
                rpe INTEGER NOT NULL CHECK (rpe BETWEEN 1 AND 10),
                weight_used REAL NOT NULL CHECK (weight_used >= 0),
                reps_completed INTEGER NOT NULL CHECK (reps_completed >= 0),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_sessions_athlete_date ON training_sessions(athlete_id, date DESC)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_set_logs_session ON set_logs(session_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new training session
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_session(&self, session: &SessionSummary) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO training_sessions (id, athlete_id, date, status, average_rpe, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(session.id.to_string())
        .bind(session.athlete_id.to_string())
        .bind(session.date)
        .bind(session.status.as_str())
        .bind(session.average_rpe)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(session.id)
    }

    /// Get a training session by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_session(&self, session_id: Uuid) -> Result<Option<SessionSummary>> {
        let row = sqlx::query(
            r"
            SELECT id, athlete_id, date, status, average_rpe, created_at
            FROM training_sessions WHERE id = $1
            ",
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_session(&row)).transpose()
    }

    /// Get the most recent training sessions for an athlete, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn recent_sessions(
        &self,
        athlete_id: Uuid,
        limit: u32,
    ) -> Result<Vec<SessionSummary>> {
        let rows = sqlx::query(
            r"
            SELECT id, athlete_id, date, status, average_rpe, created_at
            FROM training_sessions WHERE athlete_id = $1
            ORDER BY date DESC, created_at DESC
            LIMIT $2
            ",
        )
        .bind(athlete_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_session).collect()
    }

    /// Insert a new set log
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_set_log(&self, set_log: &SetLog) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO set_logs (id, session_id, exercise, rpe, weight_used,
                                  reps_completed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(set_log.id.to_string())
        .bind(set_log.session_id.to_string())
        .bind(&set_log.exercise)
        .bind(i64::from(set_log.rpe))
        .bind(set_log.weight_used)
        .bind(i64::from(set_log.reps_completed))
        .bind(set_log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(set_log.id)
    }

    /// Get all set logs for a session, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn session_set_logs(&self, session_id: Uuid) -> Result<Vec<SetLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, session_id, exercise, rpe, weight_used, reps_completed, created_at
            FROM set_logs WHERE session_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(session_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_set_log).collect()
    }

    /// Get the most recent set logs across all of an athlete's sessions,
    /// newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn recent_set_logs(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SetLog>> {
        let rows = sqlx::query(
            r"
            SELECT sl.id, sl.session_id, sl.exercise, sl.rpe, sl.weight_used,
                   sl.reps_completed, sl.created_at
            FROM set_logs sl
            JOIN training_sessions ts ON ts.id = sl.session_id
            WHERE ts.athlete_id = $1
            ORDER BY sl.created_at DESC
            LIMIT $2
            ",
        )
        .bind(athlete_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_set_log).collect()
    }

    /// Convert a database row to a `SessionSummary` struct
    fn row_to_session(row: &sqlx::sqlite::SqliteRow) -> Result<SessionSummary> {
        let id: String = row.get("id");
        let athlete_id: String = row.get("athlete_id");
        let date: NaiveDate = row.get("date");
        let status: String = row.get("status");
        let average_rpe: Option<f64> = row.get("average_rpe");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(SessionSummary {
            id: Uuid::parse_str(&id)?,
            athlete_id: Uuid::parse_str(&athlete_id)?,
            date,
            status: status.parse()?,
            average_rpe,
            created_at,
        })
    }

    /// Convert a database row to a `SetLog` struct
    fn row_to_set_log(row: &sqlx::sqlite::SqliteRow) -> Result<SetLog> {
        let id: String = row.get("id");
        let session_id: String = row.get("session_id");
        let exercise: String = row.get("exercise");
        let rpe: i64 = row.get("rpe");
        let weight_used: f64 = row.get("weight_used");
        let reps_completed: i64 = row.get("reps_completed");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(SetLog {
            id: Uuid::parse_str(&id)?,
            session_id: Uuid::parse_str(&session_id)?,
            exercise,
            rpe: u8::try_from(rpe)?,
            weight_used,
            reps_completed: u32::try_from(reps_completed)?,
            created_at,
        })
    }
}
