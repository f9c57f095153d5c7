// ABOUTME: PostgreSQL backend for the DatabaseProvider trait
// ABOUTME: Cloud deployment implementation with native UUID and TIMESTAMPTZ columns

//! PostgreSQL database implementation
//!
//! This module provides PostgreSQL support for cloud deployments,
//! implementing the same interface as the SQLite version.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres, Row};
use uuid::Uuid;

use crate::models::{Athlete, CheckIn, SafetyAlert, SessionSummary, SetLog};

use super::DatabaseProvider;

/// PostgreSQL database implementation
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    fn row_to_athlete(row: &sqlx::postgres::PgRow) -> Athlete {
        Athlete {
            id: row.get("id"),
            display_name: row.get("display_name"),
            birthdate: row.get("birthdate"),
            created_at: row.get("created_at"),
        }
    }

    fn row_to_check_in(row: &sqlx::postgres::PgRow) -> Result<CheckIn> {
        let mood: i16 = row.get("mood");
        let energy_level: i16 = row.get("energy_level");
        let muscle_soreness: i16 = row.get("muscle_soreness");

        Ok(CheckIn {
            id: row.get("id"),
            athlete_id: row.get("athlete_id"),
            date: row.get("date"),
            mood: u8::try_from(mood)?,
            energy_level: u8::try_from(energy_level)?,
            sleep_hours: row.get("sleep_hours"),
            muscle_soreness: u8::try_from(muscle_soreness)?,
            created_at: row.get("created_at"),
        })
    }

    fn row_to_session(row: &sqlx::postgres::PgRow) -> Result<SessionSummary> {
        let status: String = row.get("status");

        Ok(SessionSummary {
            id: row.get("id"),
            athlete_id: row.get("athlete_id"),
            date: row.get("date"),
            status: status.parse()?,
            average_rpe: row.get("average_rpe"),
            created_at: row.get("created_at"),
        })
    }

    fn row_to_set_log(row: &sqlx::postgres::PgRow) -> Result<SetLog> {
        let rpe: i16 = row.get("rpe");
        let reps_completed: i32 = row.get("reps_completed");

        Ok(SetLog {
            id: row.get("id"),
            session_id: row.get("session_id"),
            exercise: row.get("exercise"),
            rpe: u8::try_from(rpe)?,
            weight_used: row.get("weight_used"),
            reps_completed: u32::try_from(reps_completed)?,
            created_at: row.get("created_at"),
        })
    }

    fn row_to_alert(row: &sqlx::postgres::PgRow) -> Result<SafetyAlert> {
        let alert_type: String = row.get("alert_type");
        let severity: String = row.get("severity");

        Ok(SafetyAlert {
            id: row.get("id"),
            athlete_id: row.get("athlete_id"),
            alert_type: alert_type.parse()?,
            severity: severity.parse()?,
            message: row.get("message"),
            is_resolved: row.get("is_resolved"),
            created_at: row.get("created_at"),
            resolved_at: row.get("resolved_at"),
        })
    }
}

#[async_trait]
impl DatabaseProvider for PostgresDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS athletes (
                id UUID PRIMARY KEY,
                display_name TEXT NOT NULL,
                birthdate DATE NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS check_ins (
                id UUID PRIMARY KEY,
                athlete_id UUID NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                mood SMALLINT NOT NULL CHECK (mood BETWEEN 1 AND 5),
                energy_level SMALLINT NOT NULL CHECK (energy_level BETWEEN 1 AND 10),
                sleep_hours DOUBLE PRECISION NOT NULL
                    CHECK (sleep_hours >= 0 AND sleep_hours <= 24),
                muscle_soreness SMALLINT NOT NULL CHECK (muscle_soreness BETWEEN 1 AND 5),
                created_at TIMESTAMPTZ NOT NULL,
                UNIQUE (athlete_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_sessions (
                id UUID PRIMARY KEY,
                athlete_id UUID NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                status TEXT NOT NULL
                    CHECK (status IN ('planned', 'in_progress', 'completed', 'skipped')),
                average_rpe DOUBLE PRECISION
                    CHECK (average_rpe IS NULL OR (average_rpe BETWEEN 1 AND 10)),
                created_at TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS set_logs (
                id UUID PRIMARY KEY,
                session_id UUID NOT NULL REFERENCES training_sessions(id) ON DELETE CASCADE,
                exercise TEXT NOT NULL,
                rpe SMALLINT NOT NULL CHECK (rpe BETWEEN 1 AND 10),
                weight_used DOUBLE PRECISION NOT NULL CHECK (weight_used >= 0),
                reps_completed INTEGER NOT NULL CHECK (reps_completed >= 0),
                created_at TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS safety_alerts (
                id UUID PRIMARY KEY,
                athlete_id UUID NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                alert_type TEXT NOT NULL
                    CHECK (alert_type IN ('fatigue', 'form', 'load', 'injury_risk')),
                severity TEXT NOT NULL
                    CHECK (severity IN ('low', 'medium', 'high', 'critical')),
                message TEXT NOT NULL,
                is_resolved BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                resolved_at TIMESTAMPTZ
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_check_ins_athlete_date ON check_ins(athlete_id, date DESC)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_sessions_athlete_date ON training_sessions(athlete_id, date DESC)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_alerts_athlete_resolved ON safety_alerts(athlete_id, is_resolved)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_athlete(&self, athlete: &Athlete) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO athletes (id, display_name, birthdate, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(athlete.id)
        .bind(&athlete.display_name)
        .bind(athlete.birthdate)
        .bind(athlete.created_at)
        .execute(&self.pool)
        .await?;

        Ok(athlete.id)
    }

    async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>> {
        let row = sqlx::query(
            "SELECT id, display_name, birthdate, created_at FROM athletes WHERE id = $1",
        )
        .bind(athlete_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Self::row_to_athlete(&row)))
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        let rows = sqlx::query(
            "SELECT id, display_name, birthdate, created_at FROM athletes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_athlete).collect())
    }

    async fn create_check_in(&self, check_in: &CheckIn) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO check_ins (id, athlete_id, date, mood, energy_level,
                                   sleep_hours, muscle_soreness, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(check_in.id)
        .bind(check_in.athlete_id)
        .bind(check_in.date)
        .bind(i16::from(check_in.mood))
        .bind(i16::from(check_in.energy_level))
        .bind(check_in.sleep_hours)
        .bind(i16::from(check_in.muscle_soreness))
        .bind(check_in.created_at)
        .execute(&self.pool)
        .await?;

        Ok(check_in.id)
    }

    async fn check_in_on(&self, athlete_id: Uuid, date: NaiveDate) -> Result<Option<CheckIn>> {
        let row = sqlx::query(
            r"
            SELECT id, athlete_id, date, mood, energy_level, sleep_hours,
                   muscle_soreness, created_at
            FROM check_ins WHERE athlete_id = $1 AND date = $2
            ",
        )
        .bind(athlete_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_check_in(&row)).transpose()
    }

    async fn recent_check_ins(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<CheckIn>> {
        let rows = sqlx::query(
            r"
            SELECT id, athlete_id, date, mood, energy_level, sleep_hours,
                   muscle_soreness, created_at
            FROM check_ins WHERE athlete_id = $1
            ORDER BY date DESC
            LIMIT $2
            ",
        )
        .bind(athlete_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_check_in).collect()
    }

    async fn create_session(&self, session: &SessionSummary) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO training_sessions (id, athlete_id, date, status, average_rpe, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(session.id)
        .bind(session.athlete_id)
        .bind(session.date)
        .bind(session.status.as_str())
        .bind(session.average_rpe)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(session.id)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Option<SessionSummary>> {
        let row = sqlx::query(
            r"
            SELECT id, athlete_id, date, status, average_rpe, created_at
            FROM training_sessions WHERE id = $1
            ",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_session(&row)).transpose()
    }

    async fn recent_sessions(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SessionSummary>> {
        let rows = sqlx::query(
            r"
            SELECT id, athlete_id, date, status, average_rpe, created_at
            FROM training_sessions WHERE athlete_id = $1
            ORDER BY date DESC, created_at DESC
            LIMIT $2
            ",
        )
        .bind(athlete_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn create_set_log(&self, set_log: &SetLog) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO set_logs (id, session_id, exercise, rpe, weight_used,
                                  reps_completed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(set_log.id)
        .bind(set_log.session_id)
        .bind(&set_log.exercise)
        .bind(i16::from(set_log.rpe))
        .bind(set_log.weight_used)
        .bind(i32::try_from(set_log.reps_completed)?)
        .bind(set_log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(set_log.id)
    }

    async fn session_set_logs(&self, session_id: Uuid) -> Result<Vec<SetLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, session_id, exercise, rpe, weight_used, reps_completed, created_at
            FROM set_logs WHERE session_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_set_log).collect()
    }

    async fn recent_set_logs(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<SetLog>> {
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
        .bind(athlete_id)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_set_log).collect()
    }

    async fn insert_safety_alerts(&self, alerts: &[SafetyAlert]) -> Result<()> {
        if alerts.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        for alert in alerts {
            sqlx::query(
                r"
                INSERT INTO safety_alerts (id, athlete_id, alert_type, severity,
                                           message, is_resolved, created_at, resolved_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(alert.id)
            .bind(alert.athlete_id)
            .bind(alert.alert_type.as_str())
            .bind(alert.severity.as_str())
            .bind(&alert.message)
            .bind(alert.is_resolved)
            .bind(alert.created_at)
            .bind(alert.resolved_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list_safety_alerts(
        &self,
        athlete_id: Uuid,
        include_resolved: bool,
    ) -> Result<Vec<SafetyAlert>> {
        let query = if include_resolved {
            r"
            SELECT id, athlete_id, alert_type, severity, message,
                   is_resolved, created_at, resolved_at
            FROM safety_alerts WHERE athlete_id = $1
            ORDER BY created_at DESC
            "
        } else {
            r"
            SELECT id, athlete_id, alert_type, severity, message,
                   is_resolved, created_at, resolved_at
            FROM safety_alerts WHERE athlete_id = $1 AND is_resolved = FALSE
            ORDER BY created_at DESC
            "
        };

        let rows = sqlx::query(query)
            .bind(athlete_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_alert).collect()
    }

    async fn resolve_safety_alerts(
        &self,
        athlete_id: Uuid,
        alert_ids: &[Uuid],
        resolved_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut resolved = 0u64;

        for alert_id in alert_ids {
            let result = sqlx::query(
                r"
                UPDATE safety_alerts
                SET is_resolved = TRUE, resolved_at = $1
                WHERE id = $2 AND athlete_id = $3 AND is_resolved = FALSE
                ",
            )
            .bind(resolved_at)
            .bind(alert_id)
            .bind(athlete_id)
            .execute(&self.pool)
            .await?;

            resolved += result.rows_affected();
        }

        Ok(resolved)
    }
}
