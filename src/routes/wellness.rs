// ABOUTME: Route handlers for wellness check-ins, training sessions, and set logs
// ABOUTME: Ingestion endpoints feeding the history that safety analysis reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Wellness and training ingestion routes
//!
//! Everything the analysis pipeline consumes arrives through these
//! endpoints: daily check-ins (one per athlete per date), session
//! summaries, and per-set logs. Validation lives in the model
//! constructors; handlers translate their failures to HTTP statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use spotter_core::constants::listing;

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::models::{CheckIn, SessionStatus, SessionSummary, SetLog};
use crate::server::ServerResources;

/// Request to record a daily check-in
#[derive(Debug, Deserialize)]
pub struct CreateCheckInRequest {
    /// Day the check-in describes, `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Mood rating, 1-5
    pub mood: u8,
    /// Energy rating, 1-10
    pub energy_level: u8,
    /// Hours slept last night
    pub sleep_hours: f64,
    /// Muscle soreness rating, 1-5
    pub muscle_soreness: u8,
}

/// Request to record a training session
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Day the session took place, `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Lifecycle status
    pub status: SessionStatus,
    /// Session-level perceived exertion, 1-10; absent until rated
    pub average_rpe: Option<f64>,
}

/// Request to record a performed set
#[derive(Debug, Deserialize)]
pub struct CreateSetLogRequest {
    /// Exercise name
    pub exercise: String,
    /// Per-set perceived exertion, 1-10
    pub rpe: u8,
    /// Weight used, in the athlete's configured unit
    pub weight_used: f64,
    /// Repetitions completed
    pub reps_completed: u32,
}

/// Query parameters for history listings
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    /// Maximum records to return, newest first
    pub limit: Option<u32>,
}

impl ListQuery {
    fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(listing::DEFAULT_LIMIT)
            .min(listing::MAX_LIMIT)
    }
}

/// Wellness and training ingestion routes implementation
pub struct WellnessRoutes;

impl WellnessRoutes {
    /// Create all ingestion and history routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/athletes/:athlete_id/checkins",
                post(Self::handle_create_check_in),
            )
            .route(
                "/api/athletes/:athlete_id/checkins",
                get(Self::handle_list_check_ins),
            )
            .route(
                "/api/athletes/:athlete_id/sessions",
                post(Self::handle_create_session),
            )
            .route(
                "/api/athletes/:athlete_id/sessions",
                get(Self::handle_list_sessions),
            )
            .route(
                "/api/sessions/:session_id/sets",
                post(Self::handle_create_set_log),
            )
            .route(
                "/api/sessions/:session_id/sets",
                get(Self::handle_list_set_logs),
            )
            .with_state(resources)
    }

    /// Handle POST /api/athletes/:athlete_id/checkins - Record a check-in
    async fn handle_create_check_in(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Json(body): Json<CreateCheckInRequest>,
    ) -> Result<Response, AppError> {
        Self::require_athlete(&resources, athlete_id).await?;

        let existing = resources
            .database
            .check_in_on(athlete_id, body.date)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if existing.is_some() {
            return Err(AppError::conflict(format!(
                "Check-in already recorded for {}",
                body.date
            )));
        }

        let check_in = CheckIn::new(
            athlete_id,
            body.date,
            body.mood,
            body.energy_level,
            body.sleep_hours,
            body.muscle_soreness,
            resources.clock.now(),
        )?;
        resources
            .database
            .create_check_in(&check_in)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::CREATED, Json(check_in)).into_response())
    }

    /// Handle GET /api/athletes/:athlete_id/checkins - Recent check-ins
    async fn handle_list_check_ins(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        Self::require_athlete(&resources, athlete_id).await?;

        let check_ins = resources
            .database
            .recent_check_ins(athlete_id, query.effective_limit())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::OK, Json(check_ins)).into_response())
    }

    /// Handle POST /api/athletes/:athlete_id/sessions - Record a session
    async fn handle_create_session(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Json(body): Json<CreateSessionRequest>,
    ) -> Result<Response, AppError> {
        Self::require_athlete(&resources, athlete_id).await?;

        let session = SessionSummary::new(
            athlete_id,
            body.date,
            body.status,
            body.average_rpe,
            resources.clock.now(),
        )?;
        resources
            .database
            .create_session(&session)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    /// Handle GET /api/athletes/:athlete_id/sessions - Recent sessions
    async fn handle_list_sessions(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Query(query): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        Self::require_athlete(&resources, athlete_id).await?;

        let sessions = resources
            .database
            .recent_sessions(athlete_id, query.effective_limit())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::OK, Json(sessions)).into_response())
    }

    /// Handle POST /api/sessions/:session_id/sets - Log a set
    async fn handle_create_set_log(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
        Json(body): Json<CreateSetLogRequest>,
    ) -> Result<Response, AppError> {
        Self::require_session(&resources, session_id).await?;

        let exercise = body.exercise.trim();
        if exercise.is_empty() {
            return Err(AppError::missing_field("exercise"));
        }

        let set_log = SetLog::new(
            session_id,
            exercise.to_owned(),
            body.rpe,
            body.weight_used,
            body.reps_completed,
            resources.clock.now(),
        )?;
        resources
            .database
            .create_set_log(&set_log)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::CREATED, Json(set_log)).into_response())
    }

    /// Handle GET /api/sessions/:session_id/sets - Sets in a session
    async fn handle_list_set_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(session_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        Self::require_session(&resources, session_id).await?;

        let set_logs = resources
            .database
            .session_set_logs(session_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok((StatusCode::OK, Json(set_logs)).into_response())
    }

    async fn require_athlete(
        resources: &ServerResources,
        athlete_id: Uuid,
    ) -> Result<(), AppError> {
        resources
            .database
            .get_athlete(athlete_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))?;
        Ok(())
    }

    async fn require_session(
        resources: &ServerResources,
        session_id: Uuid,
    ) -> Result<(), AppError> {
        resources
            .database
            .get_session(session_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Session", session_id))?;
        Ok(())
    }
}
