// ABOUTME: Centralized resource container for dependency injection across route handlers
// ABOUTME: Holds shared database, configuration, and clock behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Route
//! handlers receive one `Arc<ServerResources>` instead of individually
//! cloned dependencies.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::ServerConfig;
use crate::database_plugins::factory::Database;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Shared database handle
    pub database: Arc<Database>,
    /// Runtime configuration
    pub config: Arc<ServerConfig>,
    /// Time source; swapped for a fixed clock in tests
    pub clock: Arc<dyn Clock>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            database: Arc::new(database),
            config,
            clock,
        }
    }
}
