// ABOUTME: Main server binary for the Spotter training-safety API
// ABOUTME: Loads configuration, connects storage, and serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Spotter Contributors

//! # Spotter Server Binary
//!
//! Starts the Spotter HTTP API with environment-driven configuration,
//! SQLite (or PostgreSQL) storage, and structured logging.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use spotter_server::{
    clock::SystemClock,
    config::environment::ServerConfig,
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    server::{ServerResources, SpotterServer},
};

#[derive(Parser)]
#[command(name = "spotter-server")]
#[command(about = "Spotter - training safety analysis API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = spotter_server::config::DatabaseUrl::parse_url(&database_url)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Spotter server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    if config.database.auto_migrate {
        database.migrate().await?;
        info!("Database migrations applied");
    }
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        Arc::new(config),
        Arc::new(SystemClock),
    ));

    SpotterServer::new(resources).run(port).await
}
