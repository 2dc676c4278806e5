//! Health check endpoint.

use axum::{extract::State, Json};

use crate::models::health::HealthStatus;
use crate::services::health;
use crate::AppState;

/// GET /health - liveness with the configured service name.
pub async fn check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(health::check(&state.config.service_name))
}
