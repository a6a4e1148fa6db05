//! Mall listing handlers

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	http::StatusCode,
	response::Json,
};
use mall_types::{ClearResponse, ListMallsQuery, MallResponse};
use tracing::{debug, info};

use crate::handlers::common::{
	error_response, rejection_response, service_error_response, ApiError,
};
use crate::state::AppState;

/// GET /api/malls - List collected malls
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/malls",
    params(
        ("sortBy" = Option<String>, Query, description = "recent (default), oldest or name", example = "recent"),
        ("keyword" = Option<String>, Query, description = "Case-insensitive substring of name or keyword", example = "shoes")
    ),
    responses(
        (status = 200, description = "Filtered and sorted malls", body = [MallResponse]),
        (status = 400, description = "Invalid sortBy", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "malls"
))]
pub async fn list_malls(
	State(state): State<AppState>,
	query: Result<Query<ListMallsQuery>, QueryRejection>,
) -> Result<Json<Vec<MallResponse>>, ApiError> {
	let Query(query) = query.map_err(|e| rejection_response(e.body_text()))?;
	let sort_by = query
		.sort_by()
		.map_err(|e| error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()))?;
	debug!("Listing malls sorted by {}", sort_by);

	let records = state
		.catalog_service
		.list(query.keyword_filter().map(str::to_string), sort_by)
		.await
		.map_err(service_error_response)?;

	Ok(Json(records.into_iter().map(MallResponse::from).collect()))
}

/// DELETE /api/malls - Remove every collected mall
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/malls",
    responses((status = 200, description = "All malls removed", body = ClearResponse)),
    tag = "malls"
))]
pub async fn clear_malls(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
	let removed = state
		.catalog_service
		.clear()
		.await
		.map_err(service_error_response)?;

	info!("Removed {} malls", removed);
	Ok(Json(ClearResponse::new(removed)))
}
