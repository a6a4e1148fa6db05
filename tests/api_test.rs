//! In-process tests for the REST API endpoints

mod mocks;

use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use mall_catalog::{CatalogBuilder, IngestMode, Settings};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::mocks::{FailingSource, FixedSource};

async fn create_test_router() -> Router {
	let (router, _state) = CatalogBuilder::new().start().await.unwrap();
	router
}

async fn send(
	app: &Router,
	method: &str,
	uri: &str,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let builder = Request::builder().method(method).uri(uri);
	let request = match body {
		Some(body) => builder
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	};

	let response = app.clone().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let json = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap_or(Value::Null)
	};
	(status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
	send(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
	send(app, "POST", uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
	send(app, "DELETE", uri, None).await
}

async fn collect_append(app: &Router, keyword: &str) -> (StatusCode, Value) {
	post(app, "/api/collect", json!({"keyword": keyword, "mode": "append"})).await
}

fn names(list: &Value) -> Vec<String> {
	list.as_array()
		.unwrap()
		.iter()
		.map(|m| m["name"].as_str().unwrap().to_string())
		.collect()
}

fn ids(list: &Value) -> Vec<u64> {
	list.as_array()
		.unwrap()
		.iter()
		.map(|m| m["id"].as_u64().unwrap())
		.collect()
}

#[tokio::test]
async fn test_health_endpoint() {
	let app = create_test_router().await;
	let (status, body) = get(&app, "/health").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "ok");
	assert!(body["time"].is_string());
}

#[tokio::test]
async fn test_list_on_empty_store() {
	let app = create_test_router().await;
	let (status, body) = get(&app, "/api/malls?keyword=&sortBy=recent").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_collect_shoes_then_list_by_name() {
	let app = create_test_router().await;

	let (status, summary) = post(&app, "/api/collect", json!({"keyword": "shoes"})).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(summary["ok"], true);
	assert_eq!(summary["count"], 5);
	assert_eq!(summary["added"], 5);
	assert_eq!(summary["keyword"], "shoes");
	assert_eq!(summary["mode"], "replace");
	assert!(summary["collectedAt"].is_string());

	let (status, list) = get(&app, "/api/malls?keyword=shoes&sortBy=name").await;
	assert_eq!(status, StatusCode::OK);

	let got = names(&list);
	let mut expected = got.clone();
	expected.sort();
	assert_eq!(got.len(), 5);
	assert_eq!(got, expected);
	assert!(got.iter().all(|n| n.contains("shoes")));

	let mut got_ids = ids(&list);
	got_ids.sort_unstable();
	assert_eq!(got_ids, vec![1, 2, 3, 4, 5]);

	let first = &list[0];
	assert_eq!(first["keyword"], "shoes");
	assert!(first["link"].is_string());
	assert!(first["logoUrl"].is_string());
	assert!(first["collectedAt"].is_string());
}

#[tokio::test]
async fn test_keyword_filter_is_case_insensitive() {
	let app = create_test_router().await;
	post(&app, "/api/collect", json!({"keyword": "Shoes"})).await;

	let (_, list) = get(&app, "/api/malls?keyword=sHOES").await;
	assert_eq!(list.as_array().unwrap().len(), 5);

	let (_, list) = get(&app, "/api/malls?keyword=knitwear").await;
	assert_eq!(names(&list), vec!["Shoes Knitwear Specialist".to_string()]);

	let (_, list) = get(&app, "/api/malls?keyword=bags").await;
	assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_replace_is_default_policy() {
	let app = create_test_router().await;
	post(&app, "/api/collect", json!({"keyword": "shoes"})).await;
	let (_, summary) = post(&app, "/api/collect", json!({"keyword": "bags"})).await;

	assert_eq!(summary["count"], 5);
	let (_, list) = get(&app, "/api/malls").await;
	let mut got_ids = ids(&list);
	got_ids.sort_unstable();
	assert_eq!(got_ids, vec![1, 2, 3, 4, 5]);
	assert!(names(&list).iter().all(|n| n.starts_with("bags")));
}

#[tokio::test]
async fn test_append_mode_from_request() {
	let app = create_test_router().await;
	collect_append(&app, "shoes").await;
	let (_, summary) = collect_append(&app, "bags").await;

	assert_eq!(summary["count"], 10);
	assert_eq!(summary["added"], 5);
	assert_eq!(summary["mode"], "append");

	let (_, list) = get(&app, "/api/malls?sortBy=oldest").await;
	assert_eq!(ids(&list), (1..=10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_two_bag_appends_through_deployment_default() {
	let mut settings = Settings::default();
	settings.catalog.ingest_mode = IngestMode::Append;
	let (app, _) = CatalogBuilder::new()
		.with_settings(settings)
		.with_source(FixedSource::new(&["Tote Shop", "Clutch House", "Backpack Depot"]))
		.start()
		.await
		.unwrap();

	for _ in 0..2 {
		let (status, summary) = post(&app, "/api/collect", json!({"keyword": "bags"})).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(summary["added"], 3);
	}

	let (_, list) = get(&app, "/api/malls?sortBy=oldest").await;
	assert_eq!(ids(&list), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_recent_and_oldest_ordering() {
	let app = create_test_router().await;
	collect_append(&app, "first").await;
	tokio::time::sleep(std::time::Duration::from_millis(20)).await;
	collect_append(&app, "second").await;

	let (_, recent) = get(&app, "/api/malls").await;
	assert!(recent[0]["name"].as_str().unwrap().starts_with("second"));
	assert!(recent[9]["name"].as_str().unwrap().starts_with("first"));

	let (_, oldest) = get(&app, "/api/malls?sortBy=oldest").await;
	assert!(oldest[0]["name"].as_str().unwrap().starts_with("first"));
	// Same-batch ties keep insertion order
	assert_eq!(ids(&oldest)[..5], [1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_collect_validation_errors() {
	let app = create_test_router().await;

	let (status, body) = post(&app, "/api/collect", json!({"keyword": "   "})).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "VALIDATION_ERROR");
	assert!(body["timestamp"].is_i64());

	let inverted = json!({"keyword": "shoes", "min_price": 500, "max_price": 100});
	let (status, body) = post(&app, "/api/collect", inverted).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "VALIDATION_ERROR");

	// Nothing was stored by the rejected requests
	let (_, list) = get(&app, "/api/malls").await;
	assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_malformed_collect_payloads_are_structured_400s() {
	let app = create_test_router().await;

	for body in [
		json!({}),
		json!({"keyword": 5}),
		json!({"keyword": "shoes", "mode": "merge"}),
	] {
		let (status, error) = post(&app, "/api/collect", body.clone()).await;
		assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
		assert_eq!(error["error"], "VALIDATION_ERROR");
		assert!(error["message"].is_string());
		assert!(error["timestamp"].is_i64());

		let (status, error) = post(&app, "/api/collect/best", body).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(error["error"], "VALIDATION_ERROR");
	}

	let (status, error) = get(&app, "/api/collect/best?keyword=x&min_price=abc").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(error["error"], "VALIDATION_ERROR");

	let (_, list) = get(&app, "/api/malls").await;
	assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_price_bounds_do_not_filter() {
	let app = create_test_router().await;
	let narrow = json!({"keyword": "shoes", "minPrice": 1, "maxPrice": 2});
	let (status, summary) = post(&app, "/api/collect", narrow).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(summary["count"], 5);
}

#[tokio::test]
async fn test_invalid_sort_by() {
	let app = create_test_router().await;
	let (status, body) = get(&app, "/api/malls?sortBy=price").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_clear_removes_everything() {
	let app = create_test_router().await;
	post(&app, "/api/collect", json!({"keyword": "shoes"})).await;

	let (status, body) = delete(&app, "/api/malls").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["ok"], true);
	assert_eq!(body["removed"], 5);
	assert!(body["message"].is_string());

	let (_, list) = get(&app, "/api/malls").await;
	assert_eq!(list, json!([]));

	let (_, body) = delete(&app, "/api/malls").await;
	assert_eq!(body["removed"], 0);
}

#[tokio::test]
async fn test_clear_preserves_id_counter_for_appends() {
	let app = create_test_router().await;
	collect_append(&app, "shoes").await;
	delete(&app, "/api/malls").await;
	collect_append(&app, "bags").await;

	let (_, list) = get(&app, "/api/malls?sortBy=oldest").await;
	assert_eq!(ids(&list), vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_collect_best_routes_always_replace() {
	let app = create_test_router().await;
	collect_append(&app, "shoes").await;

	let body = json!({"keyword": "bags", "min_price": 0, "max_price": 10, "mode": "append"});
	let (status, summary) = post(&app, "/api/collect/best", body).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(summary["mode"], "replace");
	assert_eq!(summary["count"], 5);

	let (status, summary) = get(&app, "/api/collect/best?keyword=hats&min_price=5").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(summary["keyword"], "hats");
	assert_eq!(summary["mode"], "replace");

	let (_, list) = get(&app, "/api/malls?sortBy=name").await;
	assert!(names(&list).iter().all(|n| n.starts_with("hats")));

	let (status, _) = get(&app, "/api/collect/best").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_source_failure_maps_to_bad_gateway() {
	let (app, _) = CatalogBuilder::new()
		.with_source(FailingSource)
		.start()
		.await
		.unwrap();

	let (status, body) = post(&app, "/api/collect", json!({"keyword": "shoes"})).await;
	assert_eq!(status, StatusCode::BAD_GATEWAY);
	assert_eq!(body["error"], "SOURCE_ERROR");
}

#[tokio::test]
async fn test_trailing_slash_routes() {
	let app = create_test_router().await;
	let (status, _) = get(&app, "/health/").await;
	assert_eq!(status, StatusCode::OK);
	let (status, _) = get(&app, "/api/malls/").await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_endpoint_404() {
	let app = create_test_router().await;
	let (status, _) = get(&app, "/unknown-endpoint").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
	let app = create_test_router().await;
	let response = app
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	let headers = response.headers();
	assert_eq!(headers["x-content-type-options"], "nosniff");
	assert_eq!(headers["x-frame-options"], "DENY");
	assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_invalid_settings_fail_startup() {
	let mut settings = Settings::default();
	settings.server.port = 0;

	let result = CatalogBuilder::new().with_settings(settings).start().await;
	assert!(result.is_err());
}
