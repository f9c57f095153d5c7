// ABOUTME: HTTP server composition and lifecycle for the Spotter API
// ABOUTME: Merges route collections, applies middleware layers, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! # Server Module
//!
//! Builds the full Axum router from the route collections and runs it
//! with tracing, CORS, and graceful shutdown on Ctrl-C.

pub mod resources;

pub use resources::ServerResources;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::{AthleteRoutes, HealthRoutes, SafetyRoutes, WellnessRoutes};

/// The Spotter HTTP server
pub struct SpotterServer {
    resources: Arc<ServerResources>,
}

impl SpotterServer {
    /// Create a server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(AthleteRoutes::routes(self.resources.clone()))
            .merge(WellnessRoutes::routes(self.resources.clone()))
            .merge(SafetyRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config.cors_allowed_origins))
    }

    /// Bind the HTTP port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    /// while running
    pub async fn run(&self, port: u16) -> Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind HTTP port {port}"))?;

        let addr = listener.local_addr()?;
        info!(
            backend = self.resources.database.backend_info(),
            "Spotter server listening on {addr}"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")
    }
}

/// Configure CORS from the `CORS_ALLOWED_ORIGINS` setting
///
/// `*` (or an empty value) allows any origin for development; otherwise
/// the value is parsed as a comma-separated origin list.
fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() || allowed_origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {error}");
    } else {
        info!("Shutdown signal received, draining connections");
    }
}
