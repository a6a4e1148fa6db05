use axum::response::Json;
use mall_types::HealthResponse;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "health"
))]
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse::ok())
}
