// ABOUTME: Athlete profile database operations
// ABOUTME: Handles athlete registration and lookup

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::models::Athlete;

use super::Database;

impl Database {
    /// Create the athletes table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_athletes(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS athletes (
                id TEXT PRIMARY KEY,
                display_name TEXT NOT NULL,
                birthdate DATE NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new athlete
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_athlete(&self, athlete: &Athlete) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO athletes (id, display_name, birthdate, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(athlete.id.to_string())
        .bind(&athlete.display_name)
        .bind(athlete.birthdate)
        .bind(athlete.created_at)
        .execute(&self.pool)
        .await?;

        Ok(athlete.id)
    }

    /// Get an athlete by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_athlete(&self, athlete_id: Uuid) -> Result<Option<Athlete>> {
        let row = sqlx::query(
            r"
            SELECT id, display_name, birthdate, created_at
            FROM athletes WHERE id = $1
            ",
        )
        .bind(athlete_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| Self::row_to_athlete(&row)).transpose()
    }

    /// List all athletes, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        let rows = sqlx::query(
            r"
            SELECT id, display_name, birthdate, created_at
            FROM athletes ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_athlete).collect()
    }

    /// Convert a database row to an Athlete struct
    fn row_to_athlete(row: &sqlx::sqlite::SqliteRow) -> Result<Athlete> {
        let id: String = row.get("id");
        let display_name: String = row.get("display_name");
        let birthdate: NaiveDate = row.get("birthdate");
        let created_at: DateTime<Utc> = row.get("created_at");

        Ok(Athlete {
            id: Uuid::parse_str(&id)?,
            display_name,
            birthdate,
            created_at,
        })
    }
}
