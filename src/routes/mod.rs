// ABOUTME: Route module organization for Spotter server HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Route module for the Spotter server
//!
//! Routes are organized by domain. Each module contains route
//! definitions and thin handler functions that delegate to the service
//! and storage layers.

/// Athlete registration and lookup routes
pub mod athletes;
/// Health check and system status routes
pub mod health;
/// Safety analysis, status, and alert resolution routes
pub mod safety;
/// Wellness check-in, session, and set log ingestion routes
pub mod wellness;

/// Athlete route handlers
pub use athletes::AthleteRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Safety analysis route handlers
pub use safety::SafetyRoutes;
/// Wellness and training ingestion route handlers
pub use wellness::WellnessRoutes;
