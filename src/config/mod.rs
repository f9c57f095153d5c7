// ABOUTME: Configuration module for runtime settings
// ABOUTME: Re-exports environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! Server configuration.
//!
//! Runtime settings come from environment variables; safety analysis
//! thresholds live in [`spotter_safety::SafetyConfig`] and are loaded
//! separately.

pub mod environment;

pub use environment::{DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};
