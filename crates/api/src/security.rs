//! Response headers added to every catalog response

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers applied unless a handler already set them.
///
/// Listings change on every collection, so nothing is cacheable.
pub const CATALOG_RESPONSE_HEADERS: [(&str, &str); 4] = [
	("x-content-type-options", "nosniff"),
	("x-frame-options", "DENY"),
	("referrer-policy", "strict-origin-when-cross-origin"),
	("cache-control", "no-store"),
];

pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	CATALOG_RESPONSE_HEADERS
		.into_iter()
		.fold(router, |router, (name, value)| {
			router.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static(name),
				HeaderValue::from_static(value),
			))
		})
}
