// ABOUTME: Safety alert database operations
// ABOUTME: Handles alert persistence, listing, and idempotent resolution

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::models::SafetyAlert;

use super::Database;

impl Database {
    /// Create the safety alerts table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_alerts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS safety_alerts (
                id TEXT PRIMARY KEY,
                athlete_id TEXT NOT NULL REFERENCES athletes(id) ON DELETE CASCADE,
                alert_type TEXT NOT NULL
                    CHECK (alert_type IN ('fatigue', 'form', 'load', 'injury_risk')),
                severity TEXT NOT NULL
                    CHECK (severity IN ('low', 'medium', 'high', 'critical')),
                message TEXT NOT NULL,
                is_resolved BOOLEAN NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL,
                resolved_at DATETIME
            )
            ",
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

    /// Insert a batch of safety alerts in a single transaction
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the transaction is rolled
    /// back and no alerts are stored
    pub async fn insert_safety_alerts(&self, alerts: &[SafetyAlert]) -> Result<()> {
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
            .bind(alert.id.to_string())
            .bind(alert.athlete_id.to_string())
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

    /// List safety alerts for an athlete, newest first
    ///
    /// Resolved alerts are excluded unless `include_resolved` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_safety_alerts(
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
            FROM safety_alerts WHERE athlete_id = $1 AND is_resolved = 0
            ORDER BY created_at DESC
            "
        };

        let rows = sqlx::query(query)
            .bind(athlete_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_alert).collect()
    }

    /// Mark alerts as resolved and return how many rows changed state
    ///
    /// Only unresolved alerts owned by `athlete_id` are updated, so
    /// re-resolving is a no-op and foreign IDs are ignored. A previously
    /// resolved alert keeps its original `resolved_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if a database update fails
    pub async fn resolve_safety_alerts(
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
                SET is_resolved = 1, resolved_at = $1
                WHERE id = $2 AND athlete_id = $3 AND is_resolved = 0
                ",
            )
            .bind(resolved_at)
            .bind(alert_id.to_string())
            .bind(athlete_id.to_string())
            .execute(&self.pool)
            .await?;

            resolved += result.rows_affected();
        }

        Ok(resolved)
    }

    /// Convert a database row to a `SafetyAlert` struct
    fn row_to_alert(row: &sqlx::sqlite::SqliteRow) -> Result<SafetyAlert> {
        let id: String = row.get("id");
        let athlete_id: String = row.get("athlete_id");
        let alert_type: String = row.get("alert_type");
        let severity: String = row.get("severity");
        let message: String = row.get("message");
        let is_resolved: bool = row.get("is_resolved");
        let created_at: DateTime<Utc> = row.get("created_at");
        let resolved_at: Option<DateTime<Utc>> = row.get("resolved_at");

        Ok(SafetyAlert {
            id: Uuid::parse_str(&id)?,
            athlete_id: Uuid::parse_str(&athlete_id)?,
            alert_type: alert_type.parse()?,
            severity: severity.parse()?,
            message,
            is_resolved,
            created_at,
            resolved_at,
        })
    }
}
