// ABOUTME: Route handlers for safety analysis, rolling status, and alert resolution
// ABOUTME: Thin HTTP layer over the SafetyAnalysisService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Safety routes
//!
//! The analysis endpoint is a POST: it reads stored history but also
//! persists any generated alerts. Status is a pure read; resolution is
//! an idempotent PUT.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::server::ServerResources;
use crate::services::SafetyAnalysisService;

/// Request to resolve a batch of alerts
#[derive(Debug, Deserialize)]
pub struct ResolveAlertsRequest {
    /// IDs of the alerts to mark resolved
    pub alert_ids: Vec<Uuid>,
}

/// Query parameters for the status endpoint
#[derive(Debug, Deserialize, Default)]
pub struct StatusQuery {
    /// Include resolved alerts alongside open ones
    #[serde(default)]
    pub include_resolved: bool,
}

/// Safety analysis routes implementation
pub struct SafetyRoutes;

impl SafetyRoutes {
    /// Create all safety routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/athletes/:athlete_id/safety/analysis",
                post(Self::handle_analysis),
            )
            .route(
                "/api/athletes/:athlete_id/safety/status",
                get(Self::handle_status),
            )
            .route(
                "/api/athletes/:athlete_id/safety/alerts/resolve",
                put(Self::handle_resolve),
            )
            .with_state(resources)
    }

    /// Handle POST /api/athletes/:athlete_id/safety/analysis - Run an analysis
    async fn handle_analysis(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let service = SafetyAnalysisService::from_resources(&resources);
        let response = service.run_analysis(athlete_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/athletes/:athlete_id/safety/status - Alerts and summary
    async fn handle_status(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Query(query): Query<StatusQuery>,
    ) -> Result<Response, AppError> {
        let service = SafetyAnalysisService::from_resources(&resources);
        let response = service
            .rolling_status(athlete_id, query.include_resolved)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/athletes/:athlete_id/safety/alerts/resolve - Resolve alerts
    async fn handle_resolve(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<Uuid>,
        Json(body): Json<ResolveAlertsRequest>,
    ) -> Result<Response, AppError> {
        let service = SafetyAnalysisService::from_resources(&resources);
        let response = service.resolve_alerts(athlete_id, &body.alert_ids).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
