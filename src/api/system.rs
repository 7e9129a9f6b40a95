//! Unauthenticated liveness and database check endpoints.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, DbCheckResponse, HealthResponse, ServiceStatus};

pub const SERVICE_NAME: &str = "kivor-backend";

/// `GET /`
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { healthy: true })
}

/// `GET /test-db`
///
/// Runs a trivial query; failures come back as 500 with the database error text.
pub async fn test_db(State(state): State<Arc<AppState>>) -> Result<Json<DbCheckResponse>, ApiError> {
    let result = state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::upstream(format!("{e:#}")))?;

    Ok(Json(DbCheckResponse {
        db_connection: "ok",
        result,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route")
}
