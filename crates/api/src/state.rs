use std::sync::Arc;

use mall_service::CatalogServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub catalog_service: Arc<dyn CatalogServiceTrait>,
}
