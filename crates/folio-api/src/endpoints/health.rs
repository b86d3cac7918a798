// Health endpoint

use axum::extract::State;
use axum::response::Json;

use crate::common::HealthResponse;
use crate::transports::http::server::ApiState;

/// Liveness check with an SMTP configuration summary
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        smtp_configured: state.contact_service.smtp_configured(),
    })
}
