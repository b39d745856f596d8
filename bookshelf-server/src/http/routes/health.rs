//! Health check endpoint
//!
//! Reports pool usage without touching the database, so it answers even
//! while PostgreSQL is down.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Open pooled connections
    pub connections: u32,
    /// Open connections not checked out
    pub idle: usize,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let pool = state.db.pool();
    Json(HealthResponse {
        status: if pool.is_closed() { "closing" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        connections: pool.size(),
        idle: pool.num_idle(),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
