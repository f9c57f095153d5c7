// ABOUTME: Core types and constants for the Spotter training safety platform
// ABOUTME: Foundation crate with domain models, error handling, and analysis windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

#![deny(unsafe_code)]

//! # Spotter Core
//!
//! Foundation crate providing shared types for the Spotter training safety
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with [`AppError`] and [`ErrorCode`]
//! - **constants**: Analysis window sizes and other platform-wide values
//! - **models**: Wellness records, training records, and safety alerts

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Platform-wide constants such as analysis window sizes
pub mod constants;

/// Domain models: athletes, check-ins, sessions, set logs, safety alerts
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    AlertSeverity, AlertType, Athlete, CheckIn, SafetyAlert, SessionStatus, SessionSummary, SetLog,
};
