//! Mall Catalog Library
//!
//! An HTTP service that collects storefront records for a keyword into an
//! in-memory store and serves filtered, sorted listings of them.

use std::net::SocketAddr;
use std::sync::Arc;

use mall_service::{CatalogService, CatalogServiceTrait};
use tracing::info;

// Core domain types
pub use mall_types::{
	chrono, serde_json, CandidateMall, CollectRequest, CollectionSource, IngestMode, MallRecord,
	SortBy, SourceError, SourceResult,
};

// Service layer
pub use mall_service::{query, CatalogServiceError, CollectOutcome};

// Storage layer
pub use mall_storage::{
	traits::{MallStorage, Snapshot, StorageError, StorageResult, StorageStats},
	MemoryStore, Storage,
};

// Sources
pub use mall_sources::TemplateSource;

// API layer
pub use mall_api::{create_router, create_router_with_origins, AppState};

// Config
pub use mall_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

// Re-export external dependencies for custom sources
pub use async_trait;

pub mod models {
	pub use mall_types::*;
}

pub mod storage {
	pub use mall_storage::*;
}

pub mod service {
	pub use mall_service::*;
}

pub mod api {
	pub use mall_api::*;
}

pub mod config {
	pub use mall_config::*;
}

/// Builder pattern for configuring the catalog service
pub struct CatalogBuilder<S = MemoryStore>
where
	S: Storage + Clone + 'static,
{
	settings: Option<Settings>,
	storage: S,
	source: Option<Arc<dyn CollectionSource>>,
}

impl Default for CatalogBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl CatalogBuilder<MemoryStore> {
	/// Create a new catalog builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl<S> CatalogBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Create a new catalog builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			source: None,
		}
	}

	/// Replace the default template source
	pub fn with_source<C>(mut self, source: C) -> Self
	where
		C: CollectionSource + 'static,
	{
		self.source = Some(Arc::new(source));
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		use mall_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		let structured = settings.logging.structured;
		let result = match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
		};
		result.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the service graph and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid configuration: {}", e))?;

		let source = self.source.unwrap_or_else(|| {
			Arc::new(TemplateSource::with_base_link(
				settings.catalog.source_base_link.clone(),
			))
		});

		let healthy = self
			.storage
			.health_check()
			.await
			.map_err(|e| format!("Storage health check failed: {}", e))?;
		if !healthy {
			return Err("Storage reported unhealthy at startup".into());
		}

		info!(
			"Catalog initialized with source '{}' and default ingest mode '{}'",
			source.id(),
			settings.catalog.ingest_mode
		);

		let storage: Arc<dyn Storage> = Arc::new(self.storage);
		let catalog_service = CatalogService::new(
			Arc::clone(&storage),
			source,
			settings.catalog.ingest_mode,
		);
		let app_state = AppState {
			catalog_service: Arc::new(catalog_service) as Arc<dyn CatalogServiceTrait>,
		};

		let router = create_router_with_origins(&settings.cors.allowed_origins)
			.with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup.
	///
	/// Loads `.env` and configuration, initializes tracing, binds and serves
	/// until Ctrl-C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info(&settings);

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file, environment or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /health");
		info!("  GET    /api/malls?sortBy=<recent|oldest|name>&keyword=<text>");
		info!("  DELETE /api/malls");
		info!("  POST   /api/collect");
		info!("  GET    /api/collect/best");
		info!("  POST   /api/collect/best");
		if cfg!(feature = "openapi") {
			info!("  GET    /swagger-ui");
			info!("  GET    /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {}", e);
	}
}
