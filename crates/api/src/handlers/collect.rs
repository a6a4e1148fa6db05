//! Collection handlers
use axum::{
	extract::{
		rejection::{JsonRejection, QueryRejection},
		Query, State,
	},
	response::Json,
};
use mall_service::CollectOutcome;
use mall_types::{CollectRequest, CollectResponse, IngestMode};
use serde::Deserialize;
use tracing::info;

use crate::handlers::common::{rejection_response, service_error_response, ApiError};
use crate::state::AppState;

/// Query string of `GET /api/collect/best`
#[derive(Debug, Clone, Deserialize)]
pub struct CollectBestQuery {
	#[serde(default)]
	pub keyword: String,
	pub min_price: Option<u64>,
	pub max_price: Option<u64>,
}

impl From<CollectBestQuery> for CollectRequest {
	fn from(query: CollectBestQuery) -> Self {
		Self {
			keyword: query.keyword,
			min_price: query.min_price,
			max_price: query.max_price,
			mode: None,
		}
	}
}

fn to_response(outcome: CollectOutcome) -> CollectResponse {
	CollectResponse {
		ok: true,
		count: outcome.total,
		added: outcome.inserted.len(),
		keyword: outcome.keyword,
		mode: outcome.mode,
		collected_at: outcome.collected_at,
	}
}

async fn run_collect(
	state: &AppState,
	request: CollectRequest,
) -> Result<Json<CollectResponse>, ApiError> {
	info!("Received collection request for keyword '{}'", request.keyword);

	let outcome = state
		.catalog_service
		.collect(request)
		.await
		.map_err(service_error_response)?;

	Ok(Json(to_response(outcome)))
}

/// POST /api/collect - Collect malls for a keyword
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/collect",
    request_body = CollectRequest,
    responses(
        (status = 200, description = "Collection committed", body = CollectResponse),
        (status = 400, description = "Invalid request", body = crate::handlers::common::ErrorResponse),
        (status = 502, description = "Collection source failed", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "collect"
))]
pub async fn post_collect(
	State(state): State<AppState>,
	payload: Result<Json<CollectRequest>, JsonRejection>,
) -> Result<Json<CollectResponse>, ApiError> {
	let Json(request) = payload.map_err(|e| rejection_response(e.body_text()))?;
	run_collect(&state, request).await
}

/// POST /api/collect/best - Collect and replace the current malls
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/collect/best",
    request_body = CollectRequest,
    responses(
        (status = 200, description = "Collection committed", body = CollectResponse),
        (status = 400, description = "Invalid request", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "collect"
))]
pub async fn post_collect_best(
	State(state): State<AppState>,
	payload: Result<Json<CollectRequest>, JsonRejection>,
) -> Result<Json<CollectResponse>, ApiError> {
	let Json(request) = payload.map_err(|e| rejection_response(e.body_text()))?;
	run_collect(&state, request.with_mode(IngestMode::Replace)).await
}

/// GET /api/collect/best - Query-string variant of the replace collection
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/collect/best",
    params(
        ("keyword" = String, Query, description = "Search keyword", example = "shoes"),
        ("min_price" = Option<u64>, Query, description = "Lower price bound"),
        ("max_price" = Option<u64>, Query, description = "Upper price bound")
    ),
    responses(
        (status = 200, description = "Collection committed", body = CollectResponse),
        (status = 400, description = "Invalid request", body = crate::handlers::common::ErrorResponse)
    ),
    tag = "collect"
))]
pub async fn get_collect_best(
	State(state): State<AppState>,
	query: Result<Query<CollectBestQuery>, QueryRejection>,
) -> Result<Json<CollectResponse>, ApiError> {
	let Query(query) = query.map_err(|e| rejection_response(e.body_text()))?;
	let request = CollectRequest::from(query).with_mode(IngestMode::Replace);
	run_collect(&state, request).await
}
