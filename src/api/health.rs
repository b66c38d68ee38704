use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database is unreachable")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, database) = match state.db().ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "degraded" },
            "database": database,
            "service": "courses",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
