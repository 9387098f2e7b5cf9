//! Users Service Library
//!
//! HTTP CRUD over a "users" resource with two interchangeable storage
//! backends: a JSON file loaded in memory (`fake`) and a relational table
//! (`db`), selected per request from configuration.
//!
//! # Architecture Layers
//!
//! - **config**: settings and backend names
//! - **infra**: engine registry, schema bootstrap, unit of work
//! - **repository**: the repository contract and its backends
//! - **service**: users service and backend selection
//! - **seed**: bulk load of the relational backend
//! - **api**: routes, handlers and extractors

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::path::Path;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Settings;
use crate::infra::get_engine;
use common::{AppError, AppResult};

/// Run the HTTP server with the given settings.
pub async fn run_server(settings: Settings) -> AppResult<()> {
    let addr = settings.server_addr();
    let state = AppState::from_settings(settings).await?;
    info!(backend = %state.settings.users_backend, "Users service configured");

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("Users service listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Seed the configured database from `json_path` (or the configured source).
pub async fn run_seed(settings: &Settings, json_path: Option<&Path>) -> AppResult<usize> {
    let json_path = json_path.unwrap_or_else(|| Path::new(&settings.users_json_path));
    let engine = get_engine(settings.database_url()).await?;

    seed::seed_users(&engine, json_path).await
}
