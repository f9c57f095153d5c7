// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Orchestrates the safety analysis pipeline between routes and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Service layer.
//!
//! Routes stay thin; multi-step operations that touch storage, the
//! clock, and the analysis crates live here.

pub mod safety;

pub use safety::{
    ResolveAlertsResponse, SafetyAnalysisResponse, SafetyAnalysisService, SafetyStatusResponse,
};
