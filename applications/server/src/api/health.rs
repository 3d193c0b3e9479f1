/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub users: usize,
}

/// GET /health - Health check endpoint
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    let users = app_state
        .store
        .len()
        .await
        .map_err(|e| crate::error::ServerError::Internal(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users,
    }))
}
