// ABOUTME: Library root for the Spotter training-safety server
// ABOUTME: Wires configuration, storage, HTTP routes, and the safety analysis service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! # Spotter Server
//!
//! HTTP server exposing the Spotter safety analysis pipeline over a
//! small REST surface. Athlete check-ins, training sessions, and set
//! logs are ingested and persisted; the analysis endpoint aggregates
//! recent history into [`spotter_safety::SafetyMetrics`], derives
//! safety alerts, and recommends whether the next session should
//! proceed, be reduced, or be replaced with rest.
//!
//! The crate is organised in layers:
//!
//! - [`config`] / [`logging`]: environment-driven runtime settings
//! - [`database`] / [`database_plugins`]: SQLite (and optionally
//!   PostgreSQL) persistence behind a provider trait
//! - [`services`]: orchestration of the analysis pipeline
//! - [`routes`] / [`server`]: Axum handlers and server bootstrap

#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod database;
pub mod database_plugins;
pub mod logging;
pub mod routes;
pub mod server;
pub mod services;

pub use spotter_core::errors;
pub use spotter_core::models;
