use axum::{http::StatusCode, response::Json};
use mall_service::CatalogServiceError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error response format shared by handlers
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

/// Rejection type returned by every handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

/// Map an extractor rejection (malformed body or query string) to a validation error
pub fn rejection_response(body_text: String) -> ApiError {
	error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", body_text)
}

/// Map a service failure to its HTTP status and error code
pub fn service_error_response(e: CatalogServiceError) -> ApiError {
	match e {
		CatalogServiceError::Validation(msg) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
		},
		CatalogServiceError::Source(msg) => {
			error_response(StatusCode::BAD_GATEWAY, "SOURCE_ERROR", msg)
		},
		CatalogServiceError::Storage(msg) => {
			error_response(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", msg)
		},
		CatalogServiceError::Inconsistency(msg) => error_response(
			StatusCode::INTERNAL_SERVER_ERROR,
			"INTERNAL_INCONSISTENCY",
			msg,
		),
	}
}
