// ABOUTME: Safety analysis orchestration: fetch history, aggregate, alert, recommend
// ABOUTME: Also serves the rolling status summary and idempotent alert resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Safety analysis service.
//!
//! One analysis run reads the athlete's recent history, condenses it
//! into [`SafetyMetrics`], derives alerts, and recommends how to handle
//! the next session. Generated alerts are persisted best-effort: a
//! storage failure is logged and the analysis response is still
//! returned, since the caller needs the recommendation more than the
//! audit trail.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use spotter_core::constants::{analysis_window, status_window};
use spotter_safety::{
    AlertGenerator, MetricAggregator, SafetyMetrics, SessionModification, SessionModifier,
};

use crate::clock::Clock;
use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Athlete, SafetyAlert};
use crate::server::ServerResources;

/// Full result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAnalysisResponse {
    /// Aggregated metrics the alerts were derived from
    pub metrics: SafetyMetrics,
    /// Alerts generated by this run, in rule declaration order
    pub alerts: Vec<SafetyAlert>,
    /// Recommendation for the next session
    pub session_modification: SessionModification,
    /// When the analysis ran
    pub analysis_timestamp: DateTime<Utc>,
    /// Age used for threshold resolution
    pub athlete_age: u8,
}

/// Alerts plus a short-window metrics summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyStatusResponse {
    /// Stored alerts, newest first
    pub alerts: Vec<SafetyAlert>,
    /// Metrics over the shorter status window
    pub summary: SafetyMetrics,
}

/// Outcome of a resolve request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveAlertsResponse {
    /// How many alerts changed from open to resolved
    pub resolved_count: u64,
}

/// Orchestrates the analysis pipeline against stored history
#[derive(Clone)]
pub struct SafetyAnalysisService {
    database: Arc<Database>,
    clock: Arc<dyn Clock>,
    aggregator: MetricAggregator,
    generator: AlertGenerator,
    modifier: SessionModifier,
}

impl SafetyAnalysisService {
    /// Create a service over the given storage and clock
    #[must_use]
    pub fn new(database: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        Self {
            database,
            clock,
            aggregator: MetricAggregator::new(),
            generator: AlertGenerator::new(),
            modifier: SessionModifier::new(),
        }
    }

    /// Create a service borrowing the shared server resources
    #[must_use]
    pub fn from_resources(resources: &ServerResources) -> Self {
        Self::new(resources.database.clone(), resources.clock.clone())
    }

    /// Run a full safety analysis for one athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown athlete and
    /// `DatabaseError` if history cannot be read. Alert persistence
    /// failures are logged, not returned.
    pub async fn run_analysis(&self, athlete_id: Uuid) -> AppResult<SafetyAnalysisResponse> {
        let athlete = self.require_athlete(athlete_id).await?;
        let age = athlete.age_on(self.clock.today());

        let check_ins = self
            .database
            .recent_check_ins(athlete_id, analysis_window::CHECK_INS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let sessions = self
            .database
            .recent_sessions(athlete_id, analysis_window::SESSIONS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let set_logs = self
            .database
            .recent_set_logs(athlete_id, analysis_window::SET_LOGS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let metrics = self.aggregator.analyze(&check_ins, &sessions, &set_logs, age);
        let alerts = self.generator.generate(&metrics, athlete_id, self.clock.now());
        let session_modification = self.modifier.should_modify_session(&metrics);

        if let Err(error) = self.database.insert_safety_alerts(&alerts).await {
            warn!(
                athlete_id = %athlete_id,
                alert_count = alerts.len(),
                "Failed to persist safety alerts: {error}"
            );
        }

        info!(
            athlete_id = %athlete_id,
            athlete_age = age,
            alert_count = alerts.len(),
            recommendation = %session_modification.recommendation,
            "Safety analysis completed"
        );

        Ok(SafetyAnalysisResponse {
            metrics,
            alerts,
            session_modification,
            analysis_timestamp: self.clock.now(),
            athlete_age: age,
        })
    }

    /// Stored alerts plus a rolling summary over the short status window
    ///
    /// The summary reuses the analysis aggregator over fewer records and
    /// is recomputed on read; nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown athlete and
    /// `DatabaseError` if history cannot be read.
    pub async fn rolling_status(
        &self,
        athlete_id: Uuid,
        include_resolved: bool,
    ) -> AppResult<SafetyStatusResponse> {
        let athlete = self.require_athlete(athlete_id).await?;
        let age = athlete.age_on(self.clock.today());

        let alerts = self
            .database
            .list_safety_alerts(athlete_id, include_resolved)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let check_ins = self
            .database
            .recent_check_ins(athlete_id, status_window::CHECK_INS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let sessions = self
            .database
            .recent_sessions(athlete_id, status_window::SESSIONS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let set_logs = self
            .database
            .recent_set_logs(athlete_id, status_window::SET_LOGS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let summary = self.aggregator.analyze(&check_ins, &sessions, &set_logs, age);

        Ok(SafetyStatusResponse { alerts, summary })
    }

    /// Resolve a batch of alerts, counting only state changes
    ///
    /// Foreign and already-resolved IDs contribute zero to the count;
    /// re-resolving never overwrites an earlier `resolved_at`.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when `alert_ids` is empty,
    /// `ResourceNotFound` for an unknown athlete, and `DatabaseError`
    /// if the update fails.
    pub async fn resolve_alerts(
        &self,
        athlete_id: Uuid,
        alert_ids: &[Uuid],
    ) -> AppResult<ResolveAlertsResponse> {
        if alert_ids.is_empty() {
            return Err(AppError::missing_field("alert_ids"));
        }

        self.require_athlete(athlete_id).await?;

        let resolved_count = self
            .database
            .resolve_safety_alerts(athlete_id, alert_ids, self.clock.now())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        info!(
            athlete_id = %athlete_id,
            requested = alert_ids.len(),
            resolved_count,
            "Resolved safety alerts"
        );

        Ok(ResolveAlertsResponse { resolved_count })
    }

    async fn require_athlete(&self, athlete_id: Uuid) -> AppResult<Athlete> {
        self.database
            .get_athlete(athlete_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))
    }
}
