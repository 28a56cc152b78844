use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes. Always succeeds.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "shadowtrace-backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check endpoint. Reports whether the credential is configured.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.engine.is_configured() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
