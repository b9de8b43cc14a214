//! Service-level endpoints: health check and store initialization.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Response for store initialization.
#[derive(Serialize)]
pub struct InitResponse {
    /// Always true on success.
    pub success: bool,
    /// Human-readable outcome.
    pub message: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Prepares the record store. Safe to call repeatedly.
async fn initialize(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<InitResponse>> {
    state.ledger.initialize().await?;
    info!(user = %user.email(), "Record store initialized on request");

    Ok(Json(InitResponse {
        success: true,
        message: "Record store initialized",
    }))
}

/// Public routes.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Routes behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/init", post(initialize))
}
