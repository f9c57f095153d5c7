// ABOUTME: Daily wellness check-in database operations
// ABOUTME: Handles check-in inserts, duplicate-date detection, and recent-history queries

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::models::CheckIn;

use super::Database;

impl Database {
    /// Create the check-ins table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_wellness(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS check_ins (
                id TEXT PRIMARY KEY,
                athlete_id TEXT NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                mood INTEGER NOT NULL CHECK (mood BETWEEN 1 AND 5),
                energy_level INTEGER NOT NULL CHECK (energy_level BETWEEN 1 AND 10),
                sleep_hours REAL NOT NULL CHECK (sleep_hours >= 0 AND sleep_hours <= 24),
                muscle_soreness INTEGER NOT NULL CHECK (muscle_soreness BETWEEN 1 AND 5),
                created_at DATETIME NOT NULL,
                UNIQUE (athlete_id, date)
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

        Ok(())
    }

    /// Insert a new check-in
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including unique-constraint
    /// violations for a second check-in on the same date
    pub async fn create_check_in(&self, check_in: &CheckIn) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO check_ins (id, athlete_id, date, mood, energy_level,
                                   sleep_hours, muscle_soreness, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(check_in.id.to_string())
        .bind(check_in.athlete_id.to_string())
        .bind(check_in.date)
        .bind(i64::from(check_in.mood))
        .bind(i64::from(check_in.energy_level))
        .bind(check_in.sleep_hours)
        .bind(i64::from(check_in.muscle_soreness))
        .bind(check_in.created_at)
        .execute(&self.pool)
        .await?;

        Ok(check_in.id)
    }

    /// Get the check-in recorded on a specific date, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn check_in_on(&self, athlete_id: Uuid, date: NaiveDate) -> Result<Option<CheckIn>> {
        let row = sqlx::query(
            r"
            SELECT id, athlete_id, date, mood, energy_level, sleep_hours,
                   muscle_soreness, created_at
            FROM check_ins WHERE athlete_id = $1 AND date = $2
            ",
        )
        .bind(athlete_id.to_string())
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_check_in(&row)).transpose()
    }

    /// Get the most recent check-ins for an athlete, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn recent_check_ins(&self, athlete_id: Uuid, limit: u32) -> Result<Vec<CheckIn>> {
        let rows = sqlx::query(
            r"
            SELECT id, athlete_id, date, mood, energy_level, sleep_hours,
                   muscle_soreness, created_at
            FROM check_ins WHERE athlete_id = $1
            ORDER BY date DESC
            LIMIT $2
            ",
        )
        .bind(athlete_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_check_in).collect()
    }

    /// Convert a database row to a `CheckIn` struct
    fn row_to_check_in(row: &sqlx::sqlite::SqliteRow) -> Result<CheckIn> {
        let id: String = row.get("id");
        let athlete_id: String = row.get("athlete_id");
        let date: NaiveDate = row.get("date");
        let mood: i64 = row.get("mood");
        let energy_level: i64 = row.get("energy_level");
        let sleep_hours: f64 = row.get("sleep_hours");
        let muscle_soreness: i64 = row.get("muscle_soreness");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(CheckIn {
            id: Uuid::parse_str(&id)?,
            athlete_id: Uuid::parse_str(&athlete_id)?,
            date,
            mood: u8::try_from(mood)?,
            energy_level: u8::try_from(energy_level)?,
            sleep_hours,
            muscle_soreness: u8::try_from(muscle_soreness)?,
            created_at,
        })
    }
}
