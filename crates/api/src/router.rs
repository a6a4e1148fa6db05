use axum::{
	http::{HeaderValue, Method},
	routing::get,
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::{AllowOrigin, Any, CorsLayer},
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::{warn, Level};

use crate::handlers::{
	clear_malls, get_collect_best, health, list_malls, post_collect, post_collect_best,
};
use crate::security::add_security_headers;
use crate::state::AppState;
// State is applied at the application level using `.with_state(...)`.
#[cfg(feature = "openapi")]
use crate::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Router allowing any origin
pub fn create_router() -> Router<AppState> {
	build_router(CorsLayer::permissive())
}

/// Router restricted to the given origins; `"*"` anywhere in the list allows any origin
pub fn create_router_with_origins(origins: &[String]) -> Router<AppState> {
	build_router(cors_layer(origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
	if origins.iter().any(|o| o.trim() == "*") {
		return CorsLayer::permissive();
	}

	let allowed: Vec<HeaderValue> = origins
		.iter()
		.filter_map(|o| match HeaderValue::from_str(o.trim()) {
			Ok(v) => Some(v),
			Err(_) => {
				warn!("Ignoring invalid CORS origin '{}'", o);
				None
			},
		})
		.collect();

	CorsLayer::new()
		.allow_origin(AllowOrigin::list(allowed))
		.allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
		.allow_headers(Any)
}

fn build_router(cors: CorsLayer) -> Router<AppState> {
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	let base_router = Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.route("/api/malls", get(list_malls).delete(clear_malls))
		.route("/api/malls/", get(list_malls).delete(clear_malls))
		.route("/api/collect", axum::routing::post(post_collect))
		.route("/api/collect/", axum::routing::post(post_collect))
		.route(
			"/api/collect/best",
			get(get_collect_best).post(post_collect_best),
		)
		.route(
			"/api/collect/best/",
			get(get_collect_best).post(post_collect_best),
		);

	#[cfg(feature = "openapi")]
	let router = {
		// SwaggerUI automatically provides the OpenAPI JSON endpoint
		base_router
			.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
	};

	#[cfg(not(feature = "openapi"))]
	let router = base_router;

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	use axum::{body::Body, http::Request, http::StatusCode};
	use mall_service::CatalogService;
	use mall_sources::TemplateSource;
	use mall_storage::MemoryStore;
	use mall_types::IngestMode;
	use tower::ServiceExt;

	fn test_app() -> Router {
		let service = CatalogService::new(
			Arc::new(MemoryStore::new()),
			Arc::new(TemplateSource::new()),
			IngestMode::Replace,
		);
		create_router().with_state(AppState {
			catalog_service: Arc::new(service),
		})
	}

	async fn body_json(response: axum::response::Response) -> serde_json::Value {
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	#[tokio::test]
	async fn test_collect_then_list() {
		let app = test_app();

		let response = app
			.clone()
			.oneshot(
				Request::post("/api/collect")
					.header("content-type", "application/json")
					.body(Body::from(r#"{"keyword":"shoes"}"#))
					.unwrap(),
			)
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(body_json(response).await["added"], 5);

		let response = app
			.oneshot(
				Request::get("/api/malls?sortBy=oldest")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(response.headers()["cache-control"], "no-store");
		let list = body_json(response).await;
		assert_eq!(list.as_array().unwrap().len(), 5);
		assert_eq!(list[0]["id"], 1);
	}

	#[tokio::test]
	async fn test_unparseable_body_is_rejected() {
		let response = test_app()
			.oneshot(
				Request::post("/api/collect")
					.header("content-type", "application/json")
					.body(Body::from("{not json"))
					.unwrap(),
			)
			.await
			.unwrap();
		assert!(response.status().is_client_error());
	}

	#[test]
	fn test_cors_layer_accepts_explicit_origins() {
		// Construction must not panic for a mix of valid and invalid origins
		let _ = cors_layer(&[
			"http://localhost:8000".to_string(),
			"bad\norigin".to_string(),
		]);
		let _ = cors_layer(&["*".to_string()]);
	}
}
