// ABOUTME: Domain model organization for the Spotter platform
// ABOUTME: Groups athlete, wellness, training, and safety alert types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Domain models for the Spotter platform, grouped by concern.
//!
//! All models serialize with snake_case field names and snake_case enum
//! variants so the wire format matches the database TEXT representations.

/// Athlete profile
pub mod athlete;
/// Safety alerts raised by the analysis pipeline
pub mod safety;
/// Training sessions and set logs
pub mod training;
/// Daily wellness check-ins
pub mod wellness;

pub use athlete::Athlete;
pub use safety::{AlertSeverity, AlertType, SafetyAlert};
pub use training::{SessionStatus, SessionSummary, SetLog};
pub use wellness::CheckIn;
