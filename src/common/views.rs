use super::models::HealthCheck;
use axum::Json;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(health))
}

/// Liveness only: answers while the process is serving requests, whatever the
/// state of the store
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = OK, description = "Service is up", body = HealthCheck)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
    })
}
