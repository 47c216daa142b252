use axum::Json;

use crate::message::HealthResponse;

/// Liveness only; never touches the upstream.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
