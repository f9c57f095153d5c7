// ABOUTME: Platform-wide constants for analysis windows and record bounds
// ABOUTME: Central definitions so server, seeder, and tests agree on limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Constants shared across the Spotter workspace.
//!
//! The safety pipeline consumes bounded, most-recent-first record windows.
//! Window sizes live here rather than in the threshold configuration: they
//! are part of the analysis contract, not a tunable cutoff.

/// Record windows for a full safety analysis, most recent first.
pub mod analysis_window {
    /// Daily check-ins considered by one analysis run
    pub const CHECK_INS: u32 = 7;
    /// Session summaries considered by one analysis run
    pub const SESSIONS: u32 = 5;
    /// Individual set logs considered by one analysis run
    pub const SET_LOGS: u32 = 20;
}

/// Shorter record windows for the read-only rolling status summary.
pub mod status_window {
    /// Daily check-ins in the rolling summary
    pub const CHECK_INS: u32 = 3;
    /// Session summaries in the rolling summary
    pub const SESSIONS: u32 = 3;
    /// Individual set logs in the rolling summary
    pub const SET_LOGS: u32 = 10;
}

/// Bounds on list endpoints that page through raw records.
pub mod listing {
    /// Default number of records returned when no limit is given
    pub const DEFAULT_LIMIT: u32 = 14;
    /// Hard cap on a single listing request
    pub const MAX_LIMIT: u32 = 90;
}

/// Self-report scales used by wellness check-ins and set logs.
pub mod scales {
    /// Lowest mood / soreness rating
    pub const RATING_MIN: u8 = 1;
    /// Highest mood / soreness rating
    pub const RATING_MAX: u8 = 5;
    /// Lowest energy / RPE rating
    pub const TEN_POINT_MIN: u8 = 1;
    /// Highest energy / RPE rating
    pub const TEN_POINT_MAX: u8 = 10;
    /// Upper bound on nightly sleep hours
    pub const SLEEP_HOURS_MAX: f64 = 24.0;
}
