// ABOUTME: Safety alert model with typed categories and ordered severities
// ABOUTME: Alerts are persisted and carry resolution state for follow-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Category of risk an alert warns about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Accumulated fatigue: soreness or sleep debt
    Fatigue,
    /// Movement quality concerns
    Form,
    /// Training load outpacing recovery
    Load,
    /// Corroborated signals pointing at injury risk
    InjuryRisk,
}

impl AlertType {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatigue => "fatigue",
            Self::Form => "form",
            Self::Load => "load",
            Self::InjuryRisk => "injury_risk",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fatigue" => Ok(Self::Fatigue),
            "form" => Ok(Self::Form),
            "load" => Ok(Self::Load),
            "injury_risk" => Ok(Self::InjuryRisk),
            other => Err(AppError::invalid_input(format!(
                "Unknown alert type '{other}'"
            ))),
        }
    }
}

/// How urgently an alert needs attention
///
/// Variants are declared in escalating order so `severity >= High`
/// comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Informational; no action expected
    Low,
    /// Worth watching across the next sessions
    Medium,
    /// Should change what happens in the next session
    High,
    /// Training should stop until the signal clears
    Critical,
}

impl AlertSeverity {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertSeverity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(AppError::invalid_input(format!(
                "Unknown alert severity '{other}'"
            ))),
        }
    }
}

/// A persisted safety warning for one athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// Unique identifier
    pub id: Uuid,
    /// Athlete the warning applies to
    pub athlete_id: Uuid,
    /// Risk category
    pub alert_type: AlertType,
    /// Urgency
    pub severity: AlertSeverity,
    /// Human-readable explanation naming the triggering value
    pub message: String,
    /// Whether a coach or the athlete has acknowledged the alert
    pub is_resolved: bool,
    /// When the alert was generated
    pub created_at: DateTime<Utc>,
    /// When the alert was resolved; `None` while open
    pub resolved_at: Option<DateTime<Utc>>,
}

impl SafetyAlert {
    /// Create an unresolved alert stamped with the caller's clock reading
    #[must_use]
    pub fn new(
        athlete_id: Uuid,
        alert_type: AlertType,
        severity: AlertSeverity,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            athlete_id,
            alert_type,
            severity,
            message,
            is_resolved: false,
            created_at,
            resolved_at: None,
        }
    }
}
