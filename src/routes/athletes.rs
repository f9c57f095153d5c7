// ABOUTME: Route handlers for athlete registration and lookup
// ABOUTME: Provides REST endpoints for creating and reading athlete profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Athlete routes
//!
//! Registration captures a display name and birthdate; age is derived
//! from the birthdate at read time so responses never go stale.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::models::Athlete;
use crate::server::ServerResources;

/// Request to register an athlete
#[derive(Debug, Deserialize)]
pub struct CreateAthleteRequest {
    /// Name shown in coaching views
    pub display_name: String,
    /// Date of birth, `YYYY-MM-DD`
    pub birthdate: NaiveDate,
}

/// Athlete profile with derived age
#[derive(Debug, Serialize, Deserialize)]
pub struct AthleteResponse {
    /// Unique identifier
    pub id: Uuid,
    /// Name shown in coaching views
    pub display_name: String,
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Completed years of age as of today
    pub age: u8,
    /// Registration timestamp
    pub created_at: String,
}

/// Athlete routes implementation
pub struct AthleteRoutes;

impl AthleteRoutes {
    /// Create all athlete routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/athletes", post(Self::handle_create))
            .route("/api/athletes", get(Self::handle_list))
            .route("/api/athletes/:athlete_id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /api/athletes - Register an athlete
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateAthleteRequest>,
    ) -> Result<Response, AppError> {
        let display_name = body.display_name.trim();
        if display_name.is_empty() {
            return Err(AppError::missing_field("display_name"));
        }
        if body.birthdate > resources.clock.today() {
            return Err(AppError::invalid_input("birthdate cannot be in the future"));
        }

        let athlete = Athlete::new(
            display_name.to_owned(),
            body.birthdate,
            resources.clock.now(),
        );
        resources
            .database
            .create_athlete(&athlete)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let response = Self::to_response(&resources, athlete);
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/athletes - List registered athletes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let athletes = resources
            .database
            .list_athletes()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let response: Vec<AthleteResponse> = athletes
            .into_iter()
            .map(|athlete| Self::to_response(&resources, athlete))
            .collect();

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/athletes/:athlete_id - Get a single athlete
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let athlete = resources
            .database
            .get_athlete(athlete_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::not_found("Athlete", athlete_id))?;

        let response = Self::to_response(&resources, athlete);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    fn to_response(resources: &ServerResources, athlete: Athlete) -> AthleteResponse {
        let age = athlete.age_on(resources.clock.today());
        AthleteResponse {
            id: athlete.id,
            display_name: athlete.display_name,
            birthdate: athlete.birthdate,
            age,
            created_at: athlete.created_at.to_rfc3339(),
        }
    }
}
